use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use common::StockItem;
use tracing::{debug, trace};

/// Reads inventory records from a JSON array file.
pub fn load_items(path: &Path) -> Result<Vec<StockItem>> {
    trace!("Reading inventory from {}", path.display());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read inventory file '{}'", path.display()))?;
    parse_items(&contents).with_context(|| format!("Invalid inventory file '{}'", path.display()))
}

pub fn parse_items(contents: &str) -> Result<Vec<StockItem>> {
    let items: Vec<StockItem> = serde_json::from_str(contents)?;
    debug!("Loaded {} inventory items", items.len());
    Ok(items)
}
