//! Errors raised by the browser backend and configuration loading.
//!
//! Controllers never see these: the page keeps working with whatever
//! could be applied, and the failure is logged.

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("no window or document available")]
    MissingWindow,
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
