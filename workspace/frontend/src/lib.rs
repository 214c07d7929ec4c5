use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Event};

mod bindings;
mod chart;
pub mod dom;
pub mod settings;

use common::error::Result as PageResult;
use common::{ChartError, ChartInput, EnhanceReport};
use dom::{describe, DocumentTree};

fn document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

/// Renders the inventory bar chart. Called from inline page markup with
/// the labels and stock values the server template embeds.
#[wasm_bindgen(js_name = createInventoryChart)]
pub fn create_inventory_chart(
    element_id: &str,
    labels: JsValue,
    data: JsValue,
) -> Result<(), JsValue> {
    let decode = |e: serde_wasm_bindgen::Error| ChartError::InvalidInput(e.to_string());

    let result = serde_wasm_bindgen::from_value::<Vec<String>>(labels)
        .map_err(decode)
        .and_then(|labels| {
            let values = serde_wasm_bindgen::from_value::<Vec<f64>>(data).map_err(decode)?;
            Ok(ChartInput::new(labels, values))
        })
        .and_then(|input| chart::render(element_id, &input));

    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            log::error!("Failed to render inventory chart: {}", err);
            Err(JsValue::from_str(&err.to_string()))
        }
    }
}

/// Logs the outcome of an enhancer run, keeping the failure message.
fn settle_enhancement(outcome: PageResult<EnhanceReport>) -> Result<EnhanceReport, String> {
    match outcome {
        Ok(report) => {
            log::info!(
                "Page enhanced: {} tooltips, {} low stock, {} unparsed, {} forms guarded",
                report.tooltips,
                report.low_stock,
                report.unparsed_stock,
                report.forms_guarded
            );
            Ok(report)
        }
        Err(err) => {
            log::error!("Page enhancement failed: {}", err);
            Err(err.to_string())
        }
    }
}

/// Runs the page enhancer over the current document. Safe to call again
/// after the page inserts new markup.
#[wasm_bindgen(js_name = enhancePage)]
pub fn enhance_page() -> Result<(), JsValue> {
    let settings = settings::get_settings();
    let mut page = DocumentTree::new(document()?);

    settle_enhancement(common::enhance(&mut page, &settings.enhancer))
        .map(|_| ())
        .map_err(|message| JsValue::from_str(&message))
}

/// Enhancer failures at module start are logged only, so `init()` still
/// resolves and the chart renders independently.
fn enhance_at_start() {
    let _ = enhance_page();
}

fn start() -> Result<(), JsValue> {
    let document = document()?;

    if document.ready_state() == "loading" {
        log::trace!("Waiting for DOMContentLoaded");
        let callback_fn = Closure::wrap(Box::new(move |_event: Event| {
            enhance_at_start();
        }) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback_fn.as_ref().unchecked_ref(),
        )?;
        callback_fn.forget();
    } else {
        log::trace!("Document already parsed, enhancing now");
        enhance_at_start();
    }
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Stockroom page utilities starting ===");
    log::debug!("Settings: {:?}", settings);

    if let Err(err) = start() {
        log::error!("Failed to schedule page enhancement: {}", describe(&err));
    }
}
