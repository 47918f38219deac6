//! Error types for the dashboard shell

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for dashboard wiring
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No browser window available")]
    NoWindow,

    #[error("No document attached to the window")]
    NoDocument,

    #[error("DOM call failed: {0}")]
    Js(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("{0} is only available in the browser")]
    Unsupported(&'static str),
}

impl DashboardError {
    /// Wrap a rejected DOM call.
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js(message)
    }
}

impl From<DashboardError> for JsValue {
    fn from(err: DashboardError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
