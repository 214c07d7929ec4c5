use std::path::Path;

use anyhow::Result;
use common::{ChartInput, StockItem};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::inventory::load_items;

pub fn snippet(input: &Path, mount: &str, module_url: &str) -> Result<String> {
    trace!("Entering snippet command");
    let items = load_items(input)?;
    let script = render_snippet(&items, mount, module_url)?;
    info!("Chart snippet built for mount '{}'", mount);
    Ok(script)
}

/// Builds the `<script type="module">` block that draws the chart.
pub fn render_snippet(items: &[StockItem], mount: &str, module_url: &str) -> Result<String> {
    let input = ChartInput::from_items(items);
    debug!("Embedding {} chart entries", input.len());

    Ok(format!(
        "<script type=\"module\">\n\
         import init, {{ createInventoryChart }} from {module};\n\
         await init();\n\
         createInventoryChart({mount}, {labels}, {values});\n\
         </script>",
        module = script_json(&module_url)?,
        mount = script_json(&mount)?,
        labels = script_json(&input.labels)?,
        values = script_json(&input.values)?,
    ))
}

/// JSON-encodes `value` so it is safe inside an inline `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, stock: i64) -> StockItem {
        StockItem {
            name: name.to_string(),
            current_stock: stock,
        }
    }

    #[test]
    fn test_snippet_invokes_chart_with_data() {
        let script = render_snippet(
            &[item("Widget A", 3), item("Widget B", 10)],
            "inventoryChart",
            "/static/pkg/frontend.js",
        )
        .expect("Should render snippet");

        assert!(script.starts_with("<script type=\"module\">"));
        assert!(script.contains("from \"/static/pkg/frontend.js\";"));
        assert!(script.contains(
            "createInventoryChart(\"inventoryChart\", [\"Widget A\",\"Widget B\"], [3.0,10.0]);"
        ));
        assert!(script.ends_with("</script>"));
    }

    #[test]
    fn test_snippet_escapes_markup_in_labels() {
        let script = render_snippet(&[item("</script><b>", 1)], "chart", "/pkg.js")
            .expect("Should render snippet");

        assert!(!script.contains("</script><b>"));
        assert!(script.contains("\\u003c/script\\u003e\\u003cb\\u003e"));
        assert_eq!(script.matches("</script>").count(), 1);
    }
}
