use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can stop the galaxy from booting.
///
/// Any of these sends the page to the CSS fallback; none are retried.
#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("WebGL2 not supported")]
    WebGlUnavailable,

    #[error("shader compile failed: {0}")]
    ShaderCompile(String),

    #[error("program link failed: {0}")]
    ProgramLink(String),

    #[error("failed to allocate GL {0}")]
    Resource(&'static str),

    #[error("malformed galaxy config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("galaxy config out of range: {0}")]
    ConfigRange(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GalaxyError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        GalaxyError::Js(text)
    }
}

impl From<GalaxyError> for JsValue {
    fn from(err: GalaxyError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
