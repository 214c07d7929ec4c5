//! Platform-independent core of the stockroom page utilities: the inventory
//! chart configuration and the page enhancer, shared by the wasm frontend
//! and the command-line tooling.

pub mod chart;
pub mod error;
pub mod markers;
pub mod page;
pub mod stock;

pub use chart::{ChartConfig, ChartInput, StockItem, inventory_chart};
pub use error::{ChartError, PageError};
pub use markers::Marker;
pub use page::{EnhanceReport, EnhancerConfig, PageTree, SubmitVerdict, enhance, on_submit};
pub use stock::{LOW_STOCK_MESSAGE, LOW_STOCK_THRESHOLD, StockLevel, parse_stock_count};
