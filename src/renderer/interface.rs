use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Registers a named template so it can be rendered later.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `source` - Template content as string
    fn add_template(&mut self, name: &'static str, source: &'static str) -> Result<()>;

    /// Renders an inline template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a previously registered template.
    ///
    /// # Arguments
    /// * `name` - Name the template was registered under
    /// * `context` - Context variables for rendering
    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
