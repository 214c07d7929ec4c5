use common::{inventory_chart, ChartError, ChartInput};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::bindings::Chart;
use crate::dom::describe;

/// Draws the inventory bar chart into the canvas with id `element_id`.
pub fn render(element_id: &str, input: &ChartInput) -> Result<Chart, ChartError> {
    log::debug!("Rendering inventory chart into #{}", element_id);

    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    let canvas = mount_canvas(element, element_id)?;

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| ChartError::ContextUnavailable(element_id.to_string()))?;

    let config = inventory_chart(input)
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChartError::Library(e.to_string()))?;

    let chart = Chart::new(&ctx, &config).map_err(|e| ChartError::Library(describe(&e)))?;
    log::info!("Inventory chart rendered with {} bars", input.len());
    Ok(chart)
}

/// Resolves the looked-up mount element to a canvas.
fn mount_canvas(
    element: Option<Element>,
    element_id: &str,
) -> Result<HtmlCanvasElement, ChartError> {
    element
        .ok_or_else(|| ChartError::MountNotFound(element_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ChartError::ContextUnavailable(element_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mount_element() {
        let err = mount_canvas(None, "inventoryChart").unwrap_err();

        assert!(matches!(err, ChartError::MountNotFound(ref id) if id == "inventoryChart"));
        assert_eq!(err.to_string(), "Mount element not found: inventoryChart");
    }
}
