//! Codec for the host document's address-bar query string.
//!
//! Two parameters exist: `page` (percent-encoded relative path of the
//! current embedded document) and `scroll` (decimal offset, present only
//! transiently between a scroll report and the reload that consumes it).
//! Both are written exclusively through non-navigating history replacement;
//! this module only encodes and decodes the string.

use url::form_urlencoded;

/// Mirror of the query-parameter state held in the host's address bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBarState {
    pub page: Option<String>,
    pub scroll: Option<u32>,
}

impl AddressBarState {
    /// Parses a query string (without the leading `?`).
    ///
    /// Missing or malformed parameters are treated as absent: a non-numeric
    /// `scroll` decodes to `None`, never an error.
    pub fn parse(query: Option<&str>) -> Self {
        let mut state = Self::default();
        let Some(query) = query else {
            return state;
        };
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => state.page = Some(value.into_owned()),
                "scroll" => state.scroll = value.parse().ok(),
                _ => {}
            }
        }
        state
    }

    /// Encodes back to a query string (without the leading `?`).
    /// `page` comes first, then `scroll`; absent fields are omitted entirely.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(page) = &self.page {
            serializer.append_pair("page", page);
        }
        if let Some(scroll) = self.scroll {
            serializer.append_pair("scroll", &scroll.to_string());
        }
        serializer.finish()
    }
}
