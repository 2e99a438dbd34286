//! Clipboard writes through the async browser Clipboard API.
//!
//! `navigator.clipboard.writeText` rejects for a handful of reasons (no
//! permission, insecure origin, missing API). Those rejections come back as
//! [`ClipboardError`] instead of escaping as unhandled promise rejections.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Why a clipboard write did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("no browser window available")]
    NoWindow,

    #[error("clipboard access requires a secure context (https or localhost)")]
    InsecureContext,

    #[error("clipboard API is not supported by this browser")]
    Unsupported,

    #[error("clipboard permission denied")]
    PermissionDenied,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

impl ClipboardError {
    /// Map a rejected `writeText` promise to an error by its DOMException name.
    pub fn from_rejection(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" => Self::PermissionDenied,
            "SecurityError" => Self::InsecureContext,
            "NotSupportedError" => Self::Unsupported,
            _ if name.is_empty() && message.is_empty() => Self::Rejected("unknown error".into()),
            _ if message.is_empty() => Self::Rejected(name.to_string()),
            _ if name.is_empty() => Self::Rejected(message.to_string()),
            _ => Self::Rejected(format!("{name}: {message}")),
        }
    }

    fn from_js(err: &JsValue) -> Self {
        if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
            return Self::from_rejection(&dom.name(), &dom.message());
        }
        if let Some(text) = err.as_string() {
            return Self::from_rejection("", &text);
        }
        Self::from_rejection(&js_string_field(err, "name"), &js_string_field(err, "message"))
    }
}

fn js_string_field(value: &JsValue, field: &str) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Write `text` to the system clipboard, resolving once the browser confirms.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    if !window.is_secure_context() {
        return Err(ClipboardError::InsecureContext);
    }

    let navigator = window.navigator();
    let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !has_clipboard {
        return Err(ClipboardError::Unsupported);
    }

    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::from_js(&err))
}
