//! PNG Export
//!
//! Rasterizes an expanded off-screen clone of the chart with `html2canvas`
//! and downloads it. The clone is removed on every path.

use gloo_timers::future::TimeoutFuture;
use log::info;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use gantt_core::labels::export_file_name;
use gantt_core::{AppConfig, GanttError, Result};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn html2canvas(element: &web_sys::HtmlElement, options: JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Options object handed to html2canvas
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptureOptions {
    background_color: String,
    scale: f64,
    #[serde(rename = "useCORS")]
    use_cors: bool,
    allow_taint: bool,
    logging: bool,
}

/// Selector of the element that gets captured
const CHART_SELECTOR: &str = ".gantt-timeline";

fn export_err(e: JsValue) -> GanttError {
    GanttError::Export(format!("{:?}", e))
}

/// Capture the chart and trigger a download named after the project
pub async fn export_chart(project_name: String, config: AppConfig) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| GanttError::Export("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| GanttError::Export("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| GanttError::Export("no body".to_string()))?;

    let original: web_sys::HtmlElement = document
        .query_selector(CHART_SELECTOR)
        .map_err(export_err)?
        .ok_or_else(|| GanttError::Export(format!("{} not found", CHART_SELECTOR)))?
        .dyn_into()
        .map_err(|_| GanttError::Export("chart is not an HTML element".to_string()))?;

    let clone = expanded_clone(&original)?;
    body.append_child(&clone).map_err(export_err)?;

    let result = capture(&window, &body, &clone, config).await;
    clone.remove();

    let data_url = result?;
    let file_name = export_file_name(&project_name, chrono::Utc::now().date_naive());
    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(export_err)?
        .dyn_into()
        .map_err(|_| GanttError::Export("failed to create link".to_string()))?;
    link.set_download(&file_name);
    link.set_href(&data_url);
    link.click();

    info!("exported {}", file_name);
    Ok(())
}

/// Deep clone laid out at full height so nothing is clipped
fn expanded_clone(original: &web_sys::HtmlElement) -> Result<web_sys::HtmlElement> {
    let clone: web_sys::HtmlElement = original
        .clone_node_with_deep(true)
        .map_err(export_err)?
        .dyn_into()
        .map_err(|_| GanttError::Export("clone is not an HTML element".to_string()))?;

    let width = format!("{}px", original.offset_width());
    let style = clone.style();
    for (name, value) in [
        ("position", "fixed"),
        ("left", "0"),
        ("top", "0"),
        ("width", width.as_str()),
        ("height", "auto"),
        ("overflow", "visible"),
        ("z-index", "-1000"),
        ("opacity", "0.99"),
        ("max-height", "none"),
        ("min-height", "auto"),
    ] {
        style.set_property(name, value).map_err(export_err)?;
    }
    Ok(clone)
}

/// Wait for layout, rasterize and return a PNG data URL
async fn capture(
    window: &web_sys::Window,
    body: &web_sys::HtmlElement,
    clone: &web_sys::HtmlElement,
    config: AppConfig,
) -> Result<String> {
    TimeoutFuture::new(config.export_settle_ms).await;

    let background_color = window
        .get_computed_style(body)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("--bg-secondary").ok())
        .map(|value| value.trim().to_string())
        .unwrap_or_default();

    let options = serde_wasm_bindgen::to_value(&CaptureOptions {
        background_color,
        scale: config.export_pixel_ratio,
        use_cors: true,
        allow_taint: true,
        logging: false,
    })
    .map_err(|e| GanttError::Export(e.to_string()))?;

    let canvas: web_sys::HtmlCanvasElement = html2canvas(clone, options)
        .await
        .map_err(export_err)?
        .dyn_into()
        .map_err(|_| GanttError::Export("html2canvas did not return a canvas".to_string()))?;

    canvas.to_data_url_with_type("image/png").map_err(export_err)
}
