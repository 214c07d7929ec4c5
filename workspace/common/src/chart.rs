//! Chart.js configuration for the inventory bar chart.
//!
//! The structs below serialize to the exact object shape `new Chart(ctx, config)`
//! expects, so the frontend hands them to the library unchanged and the CLI
//! can print them for inspection.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Label of the single dataset.
pub const DATASET_LABEL: &str = "Current Stock";
/// Bar fill color.
pub const FILL_COLOR: &str = "#7CCFB6";
/// Bar stroke color, also used for tooltip backgrounds.
pub const STROKE_COLOR: &str = "#2C7BB8";
pub const BORDER_WIDTH: u32 = 1;
pub const TOOLTIP_FONT_SIZE: u32 = 14;

/// One inventory record as the server knows it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockItem {
    pub name: String,
    #[serde(alias = "stock")]
    pub current_stock: i64,
}

/// Parallel category labels and values for the chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartInput {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartInput {
    /// Builds the input without validating lengths; mismatched input is
    /// left to the chart library, which ignores the excess entries.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        let input = Self { labels, values };
        if !input.is_aligned() {
            warn!(
                labels = input.labels.len(),
                values = input.values.len(),
                "Chart labels and values differ in length"
            );
        }
        input
    }

    /// Builds aligned input from inventory records, preserving their order.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a StockItem>,
    {
        let (labels, values) = items
            .into_iter()
            .map(|item| (item.name.clone(), item.current_stock as f64))
            .unzip();
        Self { labels, values }
    }

    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.values.len()
    }

    pub fn len(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: TooltipStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background_color: String,
    pub title_font: Font,
    pub body_font: Font,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Font {
    pub size: u32,
}

/// Builds the fixed-style bar chart configuration for `input`.
pub fn inventory_chart(input: &ChartInput) -> ChartConfig {
    debug!(bars = input.len(), "Building inventory chart configuration");

    ChartConfig {
        chart_type: "bar".to_string(),
        data: ChartData {
            labels: input.labels.clone(),
            datasets: vec![Dataset {
                label: DATASET_LABEL.to_string(),
                data: input.values.clone(),
                background_color: FILL_COLOR.to_string(),
                border_color: STROKE_COLOR.to_string(),
                border_width: BORDER_WIDTH,
            }],
        },
        options: ChartOptions {
            responsive: true,
            scales: Scales {
                y: Axis {
                    begin_at_zero: true,
                    ticks: Ticks { step_size: 1 },
                },
            },
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: TooltipStyle {
                    background_color: STROKE_COLOR.to_string(),
                    title_font: Font {
                        size: TOOLTIP_FONT_SIZE,
                    },
                    body_font: Font {
                        size: TOOLTIP_FONT_SIZE,
                    },
                },
            },
        },
    }
}
