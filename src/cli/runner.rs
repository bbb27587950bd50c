use crate::{
    cli::NewArgs,
    config::{render_context, OptionResolver, PartialConfig, ProjectConfig},
    error::{Error, Result},
    ext::PathExt,
    prompt::get_prompt_provider,
    renderer::MiniJinjaRenderer,
    template::{selector, TemplateProcessor, MANIFEST, TEMPLATES},
    validation::sanitize_identifier,
    writer::{Destination, FileWriter},
};
use std::path::{Path, PathBuf};

/// Drives one `new` invocation: resolve, select, render, write.
pub struct Runner {
    args: NewArgs,
}

impl Runner {
    pub fn new(args: NewArgs) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<()> {
        let config = self.resolve_config()?;
        log::debug!("Resolved configuration: {config:?}");

        let destination = self.destination(&config);
        destination.check(self.args.force)?;

        let engine = MiniJinjaRenderer::with_templates(TEMPLATES)?;
        let context = render_context(&config);
        let nodes = selector::select(MANIFEST, &config);
        let entries = TemplateProcessor::new(&engine, &context).process_all(&nodes)?;

        FileWriter::new(self.args.dry_run).write_all(destination.root(), entries)?;

        if self.args.dry_run {
            println!(
                "Dry run finished, nothing was written to {}.",
                destination.root().display()
            );
        } else {
            println!(
                "Project '{}' created successfully in {}.",
                config.name,
                destination.root().display()
            );
        }
        Ok(())
    }

    /// Merges flags, answers, prompts and defaults
    fn resolve_config(&self) -> Result<ProjectConfig> {
        let mut flags = self.args.to_partial_config();
        if self.args.is_in_place() {
            flags.name = Some(in_place_name(&self.args.output_dir)?);
        }

        let answers = PartialConfig::load_answers(
            self.args.answers.as_deref(),
            self.args.answers_file.as_deref(),
        )?;

        if self.args.non_interactive {
            OptionResolver::non_interactive().resolve(flags, answers)
        } else {
            let prompter = get_prompt_provider();
            OptionResolver::interactive(&prompter).resolve(flags, answers)
        }
    }

    fn destination(&self, config: &ProjectConfig) -> Destination {
        if self.args.is_in_place() {
            Destination::InPlace(self.args.output_dir.clone())
        } else {
            Destination::Subdirectory(self.args.output_dir.join(&config.name))
        }
    }
}

/// Derives a package name from the directory a project is scaffolded into.
fn in_place_name(output_dir: &Path) -> Result<String> {
    let dir: PathBuf = output_dir.canonicalize().map_err(|source| Error::FilesystemError {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let dir_name = dir.file_name().map(Path::new).ok_or_else(|| Error::ProcessError {
        source_path: dir.display().to_string(),
        e: "cannot derive a project name from this directory".to_string(),
    })?;

    let name = sanitize_identifier(dir_name.to_str_checked()?);
    log::debug!("Derived project name '{name}' from {}", dir.display());
    Ok(name)
}

/// Main entry point for CLI execution
pub fn run(args: NewArgs) -> Result<()> {
    Runner::new(args).run()
}
