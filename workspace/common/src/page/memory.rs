//! In-memory [`PageTree`] used to preview enhancements without a browser.

use std::collections::BTreeMap;

use crate::error::{PageError, Result};
use crate::markers::Marker;
use crate::page::{PageTree, SubmitVerdict, on_submit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// An element with the parts of the DOM the enhancer reads and writes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    /// Whether the node's native constraints are satisfied (forms only)
    pub valid: bool,
    pub has_tooltip: bool,
    pub submit_guards: usize,
}

impl MemoryNode {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            valid: true,
            ..Self::default()
        }
    }

    pub fn form() -> Self {
        Self::element("form")
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Marks the form's native constraints as unmet.
    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn matches(&self, marker: Marker) -> bool {
        match marker {
            Marker::Attribute { name, value } => {
                self.attributes.get(name).map(String::as_str) == Some(value)
            }
            Marker::Class(class) => self.has_class(class),
            Marker::FormClass(class) => self.tag == "form" && self.has_class(class),
        }
    }
}

/// Flat list of nodes in document order
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    nodes: Vec<MemoryNode>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: MemoryNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &MemoryNode {
        &self.nodes[id.0]
    }

    /// Simulates a submit event on `form`. Unguarded forms always proceed.
    pub fn submit(&mut self, form: NodeId) -> Result<SubmitVerdict> {
        let node = self.node(form);
        if node.submit_guards == 0 {
            return Ok(SubmitVerdict::Proceed);
        }
        let valid = node.valid;
        on_submit(self, &form, valid)
    }

    fn get_mut(&mut self, id: &NodeId) -> Result<&mut MemoryNode> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| PageError::Query {
                selector: format!("#{}", id.0),
                message: "node does not exist".to_string(),
            })
    }
}

impl PageTree for MemoryPage {
    type Node = NodeId;

    fn select(&self, marker: Marker) -> Result<Vec<NodeId>> {
        Ok(self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches(marker))
            .map(|(index, _)| NodeId(index))
            .collect())
    }

    fn text(&self, node: &NodeId) -> String {
        self.nodes
            .get(node.0)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.get(node.0)?.attributes.get(name).cloned()
    }

    fn add_class(&mut self, node: &NodeId, class: &str) -> Result<()> {
        let node = self.get_mut(node)?;
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        self.get_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn attach_tooltip(&mut self, node: &NodeId) -> Result<()> {
        self.get_mut(node)?.has_tooltip = true;
        Ok(())
    }

    fn guard_submit(&mut self, form: &NodeId) -> Result<()> {
        self.get_mut(form)?.submit_guards += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{
        NEEDS_VALIDATION_CLASS, STOCK_LEVEL_CLASS, STOCK_WARNING_CLASS, TOOLTIP_PLACEMENT_ATTR,
        TOOLTIP_TITLE_ATTR, TOOLTIP_TOGGLE_ATTR, WAS_VALIDATED_CLASS,
    };
    use crate::page::{EnhancerConfig, enhance};

    fn stock(page: &mut MemoryPage, text: &str) -> NodeId {
        page.insert(
            MemoryNode::element("span")
                .with_class(STOCK_LEVEL_CLASS)
                .with_text(text),
        )
    }

    fn is_flagged(page: &MemoryPage, id: NodeId) -> bool {
        let node = page.node(id);
        node.has_class(STOCK_WARNING_CLASS)
            && node.attributes.get(TOOLTIP_TOGGLE_ATTR).map(String::as_str) == Some("tooltip")
    }

    #[test]
    fn test_low_stock_is_flagged_with_message() {
        let mut page = MemoryPage::new();
        let id = stock(&mut page, "2");

        let report = enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert_eq!(report.low_stock, 1);
        let node = page.node(id);
        assert!(node.has_class(STOCK_WARNING_CLASS));
        assert_eq!(
            node.attributes.get(TOOLTIP_TITLE_ATTR).map(String::as_str),
            Some("Low stock! Please refill soon.")
        );
        assert_eq!(
            node.attributes.get(TOOLTIP_PLACEMENT_ATTR).map(String::as_str),
            Some("top")
        );
    }

    #[test]
    fn test_threshold_boundary() {
        let mut page = MemoryPage::new();
        let zero = stock(&mut page, "0");
        let four = stock(&mut page, "4");
        let five = stock(&mut page, "5");
        let many = stock(&mut page, "42");

        enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert!(is_flagged(&page, zero));
        assert!(is_flagged(&page, four));
        assert!(!is_flagged(&page, five));
        assert!(!is_flagged(&page, many));
        assert!(page.node(five).attributes.is_empty());
    }

    #[test]
    fn test_non_numeric_stock_is_left_alone() {
        let mut page = MemoryPage::new();
        let id = stock(&mut page, "abc");

        let report = enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert_eq!(report.low_stock, 0);
        assert_eq!(report.unparsed_stock, 1);
        assert_eq!(page.node(id).classes, vec![STOCK_LEVEL_CLASS.to_string()]);
        assert!(page.node(id).attributes.is_empty());
    }

    #[test]
    fn test_configured_threshold() {
        let mut page = MemoryPage::new();
        let id = stock(&mut page, "7");
        let config = EnhancerConfig {
            low_stock_threshold: 10,
            ..EnhancerConfig::default()
        };

        enhance(&mut page, &config).unwrap();
        assert!(is_flagged(&page, id));
    }

    #[test]
    fn test_tooltip_markers_get_widgets() {
        let mut page = MemoryPage::new();
        let marked = page.insert(
            MemoryNode::element("button").with_attribute(TOOLTIP_TOGGLE_ATTR, "tooltip"),
        );
        let other_toggle = page.insert(
            MemoryNode::element("button").with_attribute(TOOLTIP_TOGGLE_ATTR, "dropdown"),
        );

        let report = enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert_eq!(report.tooltips, 1);
        assert!(page.node(marked).has_tooltip);
        assert!(!page.node(other_toggle).has_tooltip);
    }

    #[test]
    fn test_flagged_stock_gets_attributes_not_widget() {
        let mut page = MemoryPage::new();
        let id = stock(&mut page, "1");

        enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert!(is_flagged(&page, id));
        assert!(!page.node(id).has_tooltip);
    }

    #[test]
    fn test_invalid_form_submission_is_blocked() {
        let mut page = MemoryPage::new();
        let form = page.insert(MemoryNode::form().with_class(NEEDS_VALIDATION_CLASS).invalid());

        enhance(&mut page, &EnhancerConfig::default()).unwrap();
        assert!(!page.node(form).has_class(WAS_VALIDATED_CLASS));

        let verdict = page.submit(form).unwrap();
        assert_eq!(verdict, SubmitVerdict::Block);
        assert!(page.node(form).has_class(WAS_VALIDATED_CLASS));
    }

    #[test]
    fn test_valid_form_submission_proceeds_and_is_marked() {
        let mut page = MemoryPage::new();
        let form = page.insert(MemoryNode::form().with_class(NEEDS_VALIDATION_CLASS));

        enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert_eq!(page.submit(form).unwrap(), SubmitVerdict::Proceed);
        assert!(page.node(form).has_class(WAS_VALIDATED_CLASS));
    }

    #[test]
    fn test_unmarked_form_is_not_guarded() {
        let mut page = MemoryPage::new();
        let form = page.insert(MemoryNode::form().invalid());
        let div = page.insert(MemoryNode::element("div").with_class(NEEDS_VALIDATION_CLASS));

        let report = enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert_eq!(report.forms_guarded, 0);
        assert_eq!(page.submit(form).unwrap(), SubmitVerdict::Proceed);
        assert!(!page.node(form).has_class(WAS_VALIDATED_CLASS));
        assert_eq!(page.node(div).submit_guards, 0);
    }

    #[test]
    fn test_unmarked_elements_are_untouched() {
        let mut page = MemoryPage::new();
        let plain = MemoryNode::element("p").with_class("lead").with_text("3");
        let id = page.insert(plain.clone());

        enhance(&mut page, &EnhancerConfig::default()).unwrap();
        assert_eq!(page.node(id), &plain);
    }

    #[test]
    fn test_running_twice_does_not_double_attach() {
        let mut page = MemoryPage::new();
        let form = page.insert(MemoryNode::form().with_class(NEEDS_VALIDATION_CLASS));
        let button = page.insert(
            MemoryNode::element("button").with_attribute(TOOLTIP_TOGGLE_ATTR, "tooltip"),
        );

        let first = enhance(&mut page, &EnhancerConfig::default()).unwrap();
        let second = enhance(&mut page, &EnhancerConfig::default()).unwrap();

        assert_eq!(first.forms_guarded, 1);
        assert_eq!(second.forms_guarded, 0);
        assert_eq!(page.node(form).submit_guards, 1);
        assert!(page.node(button).has_tooltip);
    }
}
