//! Cookie access for the session token and role.
//!
//! The host writes `lb_token`/`lb_role` as browser-readable cookies; the
//! network layer reads the token back to build bearer headers for direct
//! backend calls. Parsing is pure; only the document access is
//! browser-gated.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

pub use access::TOKEN_COOKIE;

/// Extract a cookie's value from a `Cookie` header string.
/// Returns `None` when the name is absent; an empty value is `Some("")`.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_owned())
        } else {
            None
        }
    })
}

#[cfg(feature = "hydrate")]
fn document_cookie() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    html_document.cookie().ok()
}

/// The bearer token from the token cookie, if present and non-empty.
/// Always `None` on the server.
#[must_use]
pub fn session_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let cookies = document_cookie()?;
        cookie_value(&cookies, TOKEN_COOKIE).filter(|value| !value.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
