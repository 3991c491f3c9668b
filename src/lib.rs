//! KeyCloud: Resume Keyword Match Word-Cloud
//!
//! A Rust/WASM front end for the resume vs. job-description keyword cloud.
//! The pure core turns two keyword lists (matched, missing) into a weighted
//! word list; the WASM surface reads those lists from data attributes of a
//! container element and hands the result to the page-global `WordCloud`
//! renderer (wordcloud2.js).
//!
//! # Architecture
//! - `config.rs` - Rendering configuration and the weight/color constants
//! - `keywords.rs` - Attribute decoding, weighted-list construction, render planning
//! - `render.rs` - wordcloud2.js interop (options object, color callback)
//! - `wasm.rs` - Exported surface: `KeywordCloud` and `initKeywordCloud`
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { initKeywordCloud } from 'keycloud-core';
//!
//! await init();
//!
//! // Container carries data-matched / data-missing JSON string lists:
//! // <div id="keywordCloud" data-matched='["api","cloud"]' data-missing='["kubernetes"]'>
//! const drawn = initKeywordCloud('keywordCloud');
//! console.log(drawn); // true when a cloud was rendered
//! ```

mod config;
mod keywords;
mod render;
mod wasm;

pub use config::*;
pub use keywords::*;
pub use render::*;
pub use wasm::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("keycloud-core v{}", env!("CARGO_PKG_VERSION"))
}
