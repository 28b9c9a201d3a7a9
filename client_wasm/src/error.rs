use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Startup and frame errors in the browser client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas #{0} not found")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2D drawing context unavailable")]
    ContextUnavailable,

    #[error("game is already running")]
    AlreadyRunning,

    #[error("canvas cannot host a match: {0}")]
    Config(#[from] ConfigError),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(format!("{value:?}"))
    }
}

impl From<ClientError> for JsValue {
    fn from(error: ClientError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
