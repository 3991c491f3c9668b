// keycloud-core/src/render.rs
//
// wordcloud2.js interop: bind the page-global WordCloud function, assemble
// its options object from a RenderPlan, and bridge the color callback.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::color_for_weight;
use crate::keywords::{CloudError, RenderPlan};

#[wasm_bindgen]
extern "C" {
    /// wordcloud2.js entry point, expected as a global on the hosting page.
    /// `catch` turns a missing or throwing library into a Result instead of
    /// an unhandled exception.
    #[wasm_bindgen(js_name = WordCloud, catch)]
    fn word_cloud(target: &HtmlElement, options: &JsValue) -> Result<(), JsValue>;
}

/// Build the wordcloud2.js options object for a plan.
///
/// The config serializes straight into the recognized option names
/// (`gridSize`, `weightFactor`, ...); `list` and `color` are attached on top
/// since one is per-call data and the other is a JS callback.
pub fn build_options(plan: &RenderPlan) -> Result<JsValue, CloudError> {
    let options = serde_wasm_bindgen::to_value(&plan.config)
        .map_err(|e| CloudError::OptionsFailed(e.to_string()))?;

    let list = serde_wasm_bindgen::to_value(&plan.pairs())
        .map_err(|e| CloudError::OptionsFailed(e.to_string()))?;
    Reflect::set(&options, &JsValue::from_str("list"), &list)
        .map_err(|e| CloudError::OptionsFailed(format!("{:?}", e)))?;

    Reflect::set(&options, &JsValue::from_str("color"), &color_callback())
        .map_err(|e| CloudError::OptionsFailed(format!("{:?}", e)))?;

    Ok(options)
}

/// Invoke the external renderer against the container element.
pub fn render_cloud(target: &HtmlElement, plan: &RenderPlan) -> Result<(), CloudError> {
    let options = build_options(plan)?;
    word_cloud(target, &options).map_err(|e| {
        let msg = e
            .as_string()
            .unwrap_or_else(|| format!("{:?}", e));
        CloudError::RenderFailed(msg)
    })
}

/// Color callback handed to wordcloud2.js: green for the matched weight, red
/// otherwise. Ownership moves to the JS garbage collector since the renderer
/// may call it asynchronously while drawing.
fn color_callback() -> JsValue {
    let closure = Closure::wrap(Box::new(|_word: JsValue, weight: JsValue| -> JsValue {
        let weight = weight.as_f64().unwrap_or(0.0) as u32;
        JsValue::from_str(color_for_weight(weight))
    }) as Box<dyn Fn(JsValue, JsValue) -> JsValue>);
    closure.into_js_value()
}
