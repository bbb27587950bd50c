use super::node::TemplateNode;
use crate::config::ProjectConfig;

/// Picks the nodes whose inclusion rule holds for `config`.
///
/// The result keeps manifest order, so equal configs always select the same
/// nodes in the same order.
pub fn select<'a>(nodes: &'a [TemplateNode], config: &ProjectConfig) -> Vec<&'a TemplateNode> {
    let selected: Vec<_> = nodes.iter().filter(|node| node.is_included(config)).collect();
    log::debug!("Selected {} of {} template nodes", selected.len(), nodes.len());
    selected
}
