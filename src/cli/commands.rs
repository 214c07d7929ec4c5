pub mod chart_config;
pub mod snippet;

pub use chart_config::chart_config;
pub use snippet::snippet;
