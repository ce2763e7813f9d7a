//! WebAssembly bindings for the search dialog.
//!
//! The page script owns the DOM and the network. It fetches
//! `/search-index.json` once, hands the bytes (or the failure) to the widget,
//! forwards keyboard and input events, and renders whatever `state()` and
//! `results()` say. Navigation comes back as a path for the router.

use js_sys::Uint8Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::client::{DialogConfig, KeyPress, SearchDialog};
use crate::error::Error;
use crate::search::{SearchHit, SearchOptions};

/// Result shape for the page script. Tags are capped at three, which is all
/// the result row shows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    id: &'a str,
    slug: &'a str,
    href: String,
    title: &'a str,
    description: &'a str,
    tags: &'a [String],
    category: Option<&'a str>,
    publish_date: &'a str,
}

const MAX_TAGS_SHOWN: usize = 3;

impl<'a> SearchResultOutput<'a> {
    fn new(hit: &'a SearchHit, route_prefix: &str) -> Self {
        SearchResultOutput {
            id: &hit.id,
            slug: &hit.slug,
            href: hit.path_under(route_prefix),
            title: &hit.title,
            description: &hit.description,
            tags: &hit.tags[..hit.tags.len().min(MAX_TAGS_SHOWN)],
            category: hit.category.as_deref(),
            publish_date: &hit.publish_date,
        }
    }
}

/// WASM-accessible search dialog.
#[wasm_bindgen]
pub struct SearchWidget {
    dialog: SearchDialog,
    route_prefix: String,
}

#[wasm_bindgen]
impl SearchWidget {
    /// `options` is an optional `SearchOptions`-shaped object
    /// (`{ fuzzy, prefix, limit, boosts: { title, ... } }`), missing keys
    /// falling back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(route_prefix: Option<String>, options: Option<JsValue>) -> Result<SearchWidget, JsValue> {
        let mut config = DialogConfig::default();
        if let Some(prefix) = route_prefix {
            config = config.with_route_prefix(prefix);
        }
        if let Some(options) = options.filter(|v| !v.is_undefined() && !v.is_null()) {
            let options: SearchOptions = from_value(options).map_err(|e| e.to_string())?;
            config = config.with_limit(options.limit).with_options(options);
        }
        let route_prefix = config.route_prefix.clone();
        Ok(SearchWidget {
            dialog: SearchDialog::new(config),
            route_prefix,
        })
    }

    /// Hydration finished.
    #[wasm_bindgen]
    pub fn mount(&mut self) {
        self.dialog.mount();
    }

    /// The artifact fetch succeeded with these bytes.
    #[wasm_bindgen(js_name = indexLoaded)]
    pub fn index_loaded(&mut self, bytes: &Uint8Array) {
        self.dialog.index_loaded(Ok(bytes.to_vec()));
    }

    /// The artifact fetch failed.
    #[wasm_bindgen(js_name = indexFailed)]
    pub fn index_failed(&mut self, message: &str) {
        self.dialog
            .index_loaded(Err(Error::ArtifactFetch(message.to_string())));
    }

    /// Returns true when the caller should `preventDefault()`.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str, meta: bool, ctrl: bool) -> bool {
        self.dialog.key_down(&KeyPress {
            key: key.to_string(),
            meta,
            ctrl,
        })
    }

    #[wasm_bindgen]
    pub fn open(&mut self) {
        self.dialog.open();
    }

    #[wasm_bindgen]
    pub fn input(&mut self, text: &str) {
        self.dialog.input(text);
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.dialog.clear();
    }

    #[wasm_bindgen]
    pub fn dismiss(&mut self) {
        self.dialog.dismiss();
    }

    /// Path to navigate to, or `undefined` for an out-of-range position.
    #[wasm_bindgen]
    pub fn select(&mut self, position: usize) -> Option<String> {
        self.dialog.select(position).map(|nav| nav.path)
    }

    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.dialog.state().as_str().to_string()
    }

    #[wasm_bindgen]
    pub fn query(&self) -> String {
        self.dialog.query().to_string()
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let output: Vec<SearchResultOutput> = self
            .dialog
            .results()
            .iter()
            .map(|hit| SearchResultOutput::new(hit, &self.route_prefix))
            .collect();
        to_value(&output).map_err(|e| e.to_string().into())
    }
}
