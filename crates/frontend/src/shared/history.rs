//! Address-bar synchronisation through the History API.

use wasm_bindgen::JsValue;
use web_sys::window;

/// `?{query}` for a non-empty query string, otherwise an empty suffix.
pub fn search_suffix(query_string: &str) -> String {
    if query_string.is_empty() {
        String::new()
    } else {
        format!("?{}", query_string)
    }
}

/// Current `location.search`, including the leading `?`.
pub fn current_search() -> Option<String> {
    window()?.location().search().ok()
}

/// Replaces (never pushes) the current history entry with
/// `{pathname}?{query_string}`. Does nothing when the URL already matches.
pub fn replace_query_string(query_string: &str) {
    let Some(w) = window() else {
        return;
    };

    let new_search = search_suffix(query_string);
    if w.location().search().ok().as_deref() == Some(new_search.as_str()) {
        return;
    }

    let pathname = w.location().pathname().unwrap_or_default();
    let new_url = format!("{}{}", pathname, new_search);

    match w.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                log::warn!("replaceState failed for {}: {:?}", new_url, e);
            }
        }
        Err(e) => log::warn!("History API unavailable: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_suffix() {
        assert_eq!(search_suffix(""), "");
        assert_eq!(search_suffix("offset=0&limit=15"), "?offset=0&limit=15");
    }
}
