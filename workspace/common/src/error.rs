use thiserror::Error;

/// Errors raised while building or mounting the inventory chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// No element with the given id exists in the document
    #[error("Mount element not found: {0}")]
    MountNotFound(String),

    /// The mount element exists but cannot provide a 2d rendering context
    #[error("Rendering context unavailable for '{0}'")]
    ContextUnavailable(String),

    /// Chart data handed over from JavaScript had the wrong shape
    #[error("Invalid chart input: {0}")]
    InvalidInput(String),

    /// The charting library rejected the configuration
    #[error("Chart library error: {0}")]
    Library(String),
}

/// Errors raised by the page enhancer
#[derive(Error, Debug)]
pub enum PageError {
    /// A marker query could not be evaluated against the page
    #[error("Query failed for '{selector}': {message}")]
    Query { selector: String, message: String },

    /// The tooltip widget could not be attached to an element
    #[error("Tooltip error: {0}")]
    Tooltip(String),

    /// A submit listener could not be installed on a form
    #[error("Form guard error: {0}")]
    FormGuard(String),

    /// A node could not be updated
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Type alias for Result with PageError
pub type Result<T> = std::result::Result<T, PageError>;
