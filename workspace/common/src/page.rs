//! Page enhancer: tooltip activation, low-stock flagging and submit gating
//! over any tree of marked nodes.
//!
//! The browser frontend implements [`PageTree`] for the live `Document`;
//! [`memory::MemoryPage`] implements it for server-side previews and tests.

pub mod memory;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::markers::{
    Marker, STOCK_WARNING_CLASS, SUBMIT_GUARD_ATTR, TOOLTIP_PLACEMENT_ATTR, TOOLTIP_TITLE_ATTR,
    TOOLTIP_TOGGLE_ATTR, TOOLTIP_TOGGLE_VALUE, WAS_VALIDATED_CLASS,
};
use crate::stock::{LOW_STOCK_MESSAGE, LOW_STOCK_THRESHOLD, StockLevel};

/// A document whose nodes can be selected by marker and mutated in place.
pub trait PageTree {
    /// Handle to a node in the tree
    type Node: Clone;

    /// Returns every node matching `marker`, in document order.
    fn select(&self, marker: Marker) -> Result<Vec<Self::Node>>;

    /// Text content of `node`, empty when it has none.
    fn text(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<()>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<()>;

    /// Attaches a tooltip widget to `node`. Attaching twice must not create
    /// a second widget.
    fn attach_tooltip(&mut self, node: &Self::Node) -> Result<()>;

    /// Installs a submit listener on `form` that consults [`on_submit`].
    fn guard_submit(&mut self, form: &Self::Node) -> Result<()>;
}

/// Tunables for the low-stock pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub low_stock_threshold: i64,
    pub low_stock_message: String,
    pub tooltip_placement: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            low_stock_message: LOW_STOCK_MESSAGE.to_string(),
            tooltip_placement: "top".to_string(),
        }
    }
}

/// Counts of what a single enhancer run touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceReport {
    pub tooltips: usize,
    pub low_stock: usize,
    pub unparsed_stock: usize,
    pub forms_guarded: usize,
}

/// What a guarded form does with a submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitVerdict {
    /// Native constraints hold; let the submission through
    Proceed,
    /// Cancel the submission and stop propagation
    Block,
}

impl SubmitVerdict {
    pub fn from_validity(valid: bool) -> Self {
        if valid {
            SubmitVerdict::Proceed
        } else {
            SubmitVerdict::Block
        }
    }

    pub fn blocks(&self) -> bool {
        matches!(self, SubmitVerdict::Block)
    }
}

/// Runs all three passes once over `page`.
pub fn enhance<P: PageTree>(page: &mut P, config: &EnhancerConfig) -> Result<EnhanceReport> {
    info!("Enhancing page");

    let tooltips = activate_tooltips(page)?;
    let (low_stock, unparsed_stock) = flag_low_stock(page, config)?;
    let forms_guarded = guard_forms(page)?;

    let report = EnhanceReport {
        tooltips,
        low_stock,
        unparsed_stock,
        forms_guarded,
    };
    debug!(?report, "Page enhancement finished");
    Ok(report)
}

/// Attaches a tooltip widget to every element carrying the tooltip marker.
pub fn activate_tooltips<P: PageTree>(page: &mut P) -> Result<usize> {
    let nodes = page.select(Marker::TOOLTIP)?;
    for node in &nodes {
        page.attach_tooltip(node)?;
    }
    debug!(count = nodes.len(), "Tooltips activated");
    Ok(nodes.len())
}

/// Flags stock elements below the threshold. Returns the number flagged and
/// the number whose text was not a number.
pub fn flag_low_stock<P: PageTree>(
    page: &mut P,
    config: &EnhancerConfig,
) -> Result<(usize, usize)> {
    let mut flagged = 0;
    let mut unparsed = 0;

    for node in page.select(Marker::STOCK_LEVEL)? {
        let text = page.text(&node);
        match StockLevel::classify(&text, config.low_stock_threshold) {
            StockLevel::Low(count) => {
                trace!(count, "Flagging low stock element");
                page.add_class(&node, STOCK_WARNING_CLASS)?;
                page.set_attribute(&node, TOOLTIP_TOGGLE_ATTR, TOOLTIP_TOGGLE_VALUE)?;
                page.set_attribute(&node, TOOLTIP_PLACEMENT_ATTR, &config.tooltip_placement)?;
                page.set_attribute(&node, TOOLTIP_TITLE_ATTR, &config.low_stock_message)?;
                flagged += 1;
            }
            StockLevel::Sufficient(count) => trace!(count, "Stock level sufficient"),
            StockLevel::Unparsed => {
                trace!(text = %text, "Stock level text is not a number");
                unparsed += 1;
            }
        }
    }

    debug!(flagged, unparsed, "Low stock pass finished");
    Ok((flagged, unparsed))
}

/// Installs a submit guard on every form marked for validation that does
/// not already carry one.
pub fn guard_forms<P: PageTree>(page: &mut P) -> Result<usize> {
    let mut guarded = 0;
    for form in page.select(Marker::NEEDS_VALIDATION)? {
        if page.attribute(&form, SUBMIT_GUARD_ATTR).is_some() {
            trace!("Form already guarded");
            continue;
        }
        page.guard_submit(&form)?;
        page.set_attribute(&form, SUBMIT_GUARD_ATTR, "")?;
        guarded += 1;
    }
    debug!(guarded, "Validation guards installed");
    Ok(guarded)
}

/// Submit-time check for a guarded form: marks it validated and decides
/// whether the submission may continue.
pub fn on_submit<P: PageTree>(page: &mut P, form: &P::Node, valid: bool) -> Result<SubmitVerdict> {
    let verdict = SubmitVerdict::from_validity(valid);
    page.add_class(form, WAS_VALIDATED_CLASS)?;
    trace!(?verdict, "Form submit evaluated");
    Ok(verdict)
}
