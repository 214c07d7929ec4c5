use std::path::Path;

use anyhow::Result;
use common::{ChartConfig, ChartInput, StockItem, inventory_chart};
use tracing::{info, trace};

use crate::inventory::load_items;

pub fn chart_config(input: &Path, pretty: bool) -> Result<String> {
    trace!("Entering chart_config command");
    let items = load_items(input)?;
    let rendered = render_config(&items, pretty)?;
    info!("Chart configuration built for {} items", items.len());
    Ok(rendered)
}

pub fn build_config(items: &[StockItem]) -> ChartConfig {
    inventory_chart(&ChartInput::from_items(items))
}

fn render_config(items: &[StockItem], pretty: bool) -> Result<String> {
    let config = build_config(items);
    let rendered = if pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    Ok(rendered)
}
