//! First-page document previews using pdf.js.
//!
//! pdf.js is loaded by `index.html` and reached through the `pdfjsLib`
//! global via Reflect, the same way any page-injected JS API is called.
//! Every preview is its own task; failures stay inside the card.

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;

use crate::config::preview::{DOCUMENT_PREVIEW_WIDTH, PDFJS_GLOBAL};
use crate::core::error::PreviewError;
use crate::utils::dom;

/// Argument of `page.getViewport(...)`.
#[derive(Serialize)]
struct ViewportParams {
    scale: f64,
}

/// Scale factor that fits a page of `page_width` into `target_width`.
///
/// `None` for degenerate page sizes.
pub fn fit_scale(page_width: f64, target_width: f64) -> Option<f64> {
    (page_width.is_finite() && page_width > 0.0).then(|| target_width / page_width)
}

fn js_error(err: JsValue) -> PreviewError {
    let msg = err
        .as_string()
        .or_else(|| {
            Reflect::get(&err, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err));
    PreviewError::Js(msg)
}

/// Get the `pdfjsLib` object injected by the page.
fn pdfjs() -> Result<Object, PreviewError> {
    let window = dom::window().ok_or(PreviewError::LibraryMissing)?;
    Reflect::get(&window, &PDFJS_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(PreviewError::LibraryMissing)
}

/// Call `target[name](...args)`.
fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, PreviewError> {
    let method = Reflect::get(target, &name.into())
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| PreviewError::Js(format!("{} is not a function", name)))?;
    method.apply(target, args).map_err(js_error)
}

/// Await a promise-like value, or the `.promise` of a pdf.js task.
async fn settle(value: JsValue) -> Result<JsValue, PreviewError> {
    let promise = match Reflect::get(&value, &"promise".into()) {
        Ok(inner) if inner.is_object() => inner,
        _ => value,
    };
    JsFuture::from(Promise::from(promise))
        .await
        .map_err(js_error)
}

fn number(target: &JsValue, name: &str) -> Result<f64, PreviewError> {
    Reflect::get(target, &name.into())
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| PreviewError::Js(format!("missing numeric '{}'", name)))
}

fn viewport(page: &JsValue, scale: f64) -> Result<JsValue, PreviewError> {
    let params = serde_wasm_bindgen::to_value(&ViewportParams { scale })
        .map_err(|e| PreviewError::Js(e.to_string()))?;
    call_method(page, "getViewport", &Array::of1(&params))
}

/// Render page 1 of the document at `url` into `canvas`, scaled to the
/// preview width.
pub async fn render_first_page(url: &str, canvas: &HtmlCanvasElement) -> Result<(), PreviewError> {
    let lib = pdfjs()?;

    let document = settle(call_method(&lib, "getDocument", &Array::of1(&url.into()))?).await?;
    let page = settle(call_method(&document, "getPage", &Array::of1(&1.into()))?).await?;

    let natural_width = number(&viewport(&page, 1.0)?, "width")?;
    let scale = fit_scale(natural_width, DOCUMENT_PREVIEW_WIDTH)
        .ok_or_else(|| PreviewError::Js("page has no width".to_string()))?;
    let scaled = viewport(&page, scale)?;

    canvas.set_width(number(&scaled, "width")?.round() as u32);
    canvas.set_height(number(&scaled, "height")?.round() as u32);

    let context = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or(PreviewError::NoCanvasContext)?;

    let params = Object::new();
    Reflect::set(&params, &"canvasContext".into(), &context).map_err(js_error)?;
    Reflect::set(&params, &"viewport".into(), &scaled).map_err(js_error)?;

    settle(call_method(&page, "render", &Array::of1(&params))?).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale() {
        // US Letter is 612pt wide.
        let scale = fit_scale(612.0, DOCUMENT_PREVIEW_WIDTH).unwrap();
        assert!((scale * 612.0 - 210.0).abs() < 1e-9);
        assert_eq!(fit_scale(420.0, 210.0), Some(0.5));
    }

    #[test]
    fn test_fit_scale_rejects_degenerate_pages() {
        assert_eq!(fit_scale(0.0, 210.0), None);
        assert_eq!(fit_scale(-5.0, 210.0), None);
        assert_eq!(fit_scale(f64::NAN, 210.0), None);
    }
}
