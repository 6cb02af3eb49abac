//! `ShareTarget` over `navigator.share` and `navigator.clipboard`.
//!
//! Both APIs are looked up reflectively so a browser that lacks them (or an
//! insecure origin that hides them) reports `Unsupported` instead of
//! throwing.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use quoteday::{ShareError, ShareTarget};

/// DOM exception name raised when the user dismisses the share sheet.
const ABORT_ERROR: &str = "AbortError";

/// Browser clipboard and share sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserShare;

/// Map a rejected promise's DOM exception name to a [`ShareError`].
pub fn classify_rejection(name: &str) -> ShareError {
    if name == ABORT_ERROR { ShareError::Cancelled } else { ShareError::Failed(name.to_owned()) }
}

#[cfg(feature = "csr")]
mod browser {
    use js_sys::{Function, Object, Promise, Reflect};
    use quoteday::ShareError;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    pub(super) fn navigator() -> Option<web_sys::Navigator> {
        web_sys::window().map(|w| w.navigator())
    }

    pub(super) fn method(target: &JsValue, name: &str) -> Option<Function> {
        Reflect::get(target, &JsValue::from_str(name)).ok()?.dyn_into::<Function>().ok()
    }

    fn rejection(err: JsValue) -> ShareError {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(dom) => super::classify_rejection(&dom.name()),
            None => ShareError::Failed(err.as_string().unwrap_or_else(|| "unknown error".to_owned())),
        }
    }

    /// Call `target[name](arg)` and await the returned promise.
    pub(super) async fn call_async(target: &JsValue, name: &str, arg: &JsValue) -> Result<(), ShareError> {
        let func = method(target, name).ok_or(ShareError::Unsupported)?;
        let promise = func
            .call1(target, arg)
            .map_err(rejection)?
            .dyn_into::<Promise>()
            .map_err(|_| ShareError::Failed(format!("{name} did not return a promise")))?;
        JsFuture::from(promise).await.map(|_| ()).map_err(rejection)
    }

    pub(super) fn share_data(title: &str, text: &str) -> Result<JsValue, ShareError> {
        let data = Object::new();
        for (key, value) in [("title", title), ("text", text)] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value)).map_err(rejection)?;
        }
        Ok(data.into())
    }

    pub(super) fn clipboard() -> Option<JsValue> {
        let nav = navigator()?;
        Reflect::get(&nav, &JsValue::from_str("clipboard")).ok().filter(|c| !c.is_undefined() && !c.is_null())
    }
}

#[async_trait::async_trait(?Send)]
impl ShareTarget for BrowserShare {
    fn can_share(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            browser::navigator().is_some_and(|nav| browser::method(&nav, "share").is_some())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        #[cfg(feature = "csr")]
        {
            let nav = browser::navigator().ok_or(ShareError::Unsupported)?;
            let data = browser::share_data(title, text)?;
            browser::call_async(&nav, "share", &data).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (title, text);
            Err(ShareError::Unsupported)
        }
    }

    async fn copy(&self, text: &str) -> Result<(), ShareError> {
        #[cfg(feature = "csr")]
        {
            let clipboard = browser::clipboard().ok_or(ShareError::Unsupported)?;
            browser::call_async(&clipboard, "writeText", &wasm_bindgen::JsValue::from_str(text)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(ShareError::Unsupported)
        }
    }
}
