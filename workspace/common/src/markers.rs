//! Declarative markers the server-rendered markup uses to opt elements
//! into enhancer behaviors, plus the classes and attributes the enhancer
//! writes back.

use std::fmt;

/// Attribute that opts an element into tooltip activation.
pub const TOOLTIP_TOGGLE_ATTR: &str = "data-bs-toggle";
/// Value of [`TOOLTIP_TOGGLE_ATTR`] that selects tooltip widgets.
pub const TOOLTIP_TOGGLE_VALUE: &str = "tooltip";
/// Attribute controlling where a tooltip is placed.
pub const TOOLTIP_PLACEMENT_ATTR: &str = "data-bs-placement";
/// Attribute holding the tooltip text.
pub const TOOLTIP_TITLE_ATTR: &str = "title";

/// Class carried by elements whose text is a stock count.
pub const STOCK_LEVEL_CLASS: &str = "stock-level";
/// Class added to stock elements below the threshold.
pub const STOCK_WARNING_CLASS: &str = "stock-warning";

/// Class carried by forms that opt into client-side validation.
pub const NEEDS_VALIDATION_CLASS: &str = "needs-validation";
/// Class added to a form once a submission has been attempted.
pub const WAS_VALIDATED_CLASS: &str = "was-validated";
/// Attribute recording that a form already has a submit guard.
pub const SUBMIT_GUARD_ATTR: &str = "data-submit-guard";

/// A selector for elements that opted into a behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Element carries `name="value"`
    Attribute { name: &'static str, value: &'static str },
    /// Element carries the class
    Class(&'static str),
    /// `form` element carrying the class
    FormClass(&'static str),
}

impl Marker {
    pub const TOOLTIP: Marker = Marker::Attribute {
        name: TOOLTIP_TOGGLE_ATTR,
        value: TOOLTIP_TOGGLE_VALUE,
    };
    pub const STOCK_LEVEL: Marker = Marker::Class(STOCK_LEVEL_CLASS);
    pub const NEEDS_VALIDATION: Marker = Marker::FormClass(NEEDS_VALIDATION_CLASS);

    /// CSS selector matching this marker, usable with `querySelectorAll`.
    pub fn selector(&self) -> String {
        match self {
            Marker::Attribute { name, value } => format!("[{}=\"{}\"]", name, value),
            Marker::Class(class) => format!(".{}", class),
            Marker::FormClass(class) => format!("form.{}", class),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        assert_eq!(Marker::TOOLTIP.selector(), "[data-bs-toggle=\"tooltip\"]");
        assert_eq!(Marker::STOCK_LEVEL.selector(), ".stock-level");
        assert_eq!(Marker::NEEDS_VALIDATION.selector(), "form.needs-validation");
    }
}
