// keycloud-core/src/wasm.rs
//
// Exported surface: read the keyword lists off the container's data
// attributes and run the decode -> plan -> render pipeline once.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{CloudConfig, DEFAULT_CONTAINER_ID, MATCHED_ATTR, MISSING_ATTR};
use crate::keywords::{decode_keywords_lossy, plan_cloud, CloudError};
use crate::render::render_cloud;

/// WASM-exposed keyword cloud renderer
#[wasm_bindgen]
pub struct KeywordCloud {
    config: CloudConfig,
}

#[wasm_bindgen]
impl KeywordCloud {
    /// Create a renderer with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: CloudConfig::default(),
        }
    }

    /// Create with overridden rendering options. Accepts a partial object;
    /// unspecified options keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_js: JsValue) -> Result<KeywordCloud, JsValue> {
        let config: CloudConfig = serde_wasm_bindgen::from_value(config_js)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(Self { config })
    }

    /// Look up the container by id and render into it.
    ///
    /// Fails with a clear diagnostic when the element does not exist instead
    /// of surfacing a null dereference from attribute reads.
    #[wasm_bindgen(js_name = renderById)]
    pub fn render_by_id(&self, element_id: &str) -> Result<bool, JsValue> {
        let element =
            lookup_container(element_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.render_into(element)
    }

    /// Render into an explicit container element.
    ///
    /// Reads `data-matched` / `data-missing`, weights the keywords, and
    /// invokes WordCloud when the combined list is non-empty. Returns whether
    /// a cloud was drawn.
    #[wasm_bindgen(js_name = renderInto)]
    pub fn render_into(&self, element: HtmlElement) -> Result<bool, JsValue> {
        self.render_element(&element)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

// Non-WASM methods
impl KeywordCloud {
    fn render_element(&self, element: &HtmlElement) -> Result<bool, CloudError> {
        let (matched, warn) =
            decode_keywords_lossy(MATCHED_ATTR, element.get_attribute(MATCHED_ATTR).as_deref());
        warn_decode_fallback(warn);
        let (missing, warn) =
            decode_keywords_lossy(MISSING_ATTR, element.get_attribute(MISSING_ATTR).as_deref());
        warn_decode_fallback(warn);

        let matched_count = matched.len();
        let missing_count = missing.len();

        let Some(plan) = plan_cloud(matched, missing, self.config.clone()) else {
            return Ok(false);
        };

        render_cloud(element, &plan)?;

        web_sys::console::log_1(
            &format!(
                "[KeywordCloud] Rendered {} keywords ({} matched, {} missing)",
                plan.list.len(),
                matched_count,
                missing_count
            )
            .into(),
        );

        Ok(true)
    }
}

impl Default for KeywordCloud {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot page-load entry point with default options, called explicitly by
/// the hosting page's startup sequence:
///
/// ```javascript,ignore
/// initKeywordCloud('keywordCloud');
/// ```
#[wasm_bindgen(js_name = initKeywordCloud)]
pub fn init_keyword_cloud(element_id: &str) -> Result<bool, JsValue> {
    KeywordCloud::new().render_by_id(element_id)
}

/// Conventional container id used by the hosting page
#[wasm_bindgen(js_name = defaultContainerId)]
pub fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn lookup_container(element_id: &str) -> Result<HtmlElement, CloudError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CloudError::NoDocument)?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| CloudError::MissingContainer(element_id.to_string()))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| CloudError::NotAnHtmlElement(element_id.to_string()))
}

fn warn_decode_fallback(err: Option<CloudError>) {
    if let Some(e) = err {
        web_sys::console::warn_1(
            &format!("[KeywordCloud] {} (treating as empty list)", e).into(),
        );
    }
}
