//! Link target classification for click interception inside the client.

use url::Url;

/// How a clicked link relates to the embedded document's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Different origin than the client's base; must leave the iframe.
    External,
    /// Same origin but not an HTML document (download, PDF, image, ...).
    NonHtml,
    /// Same origin, `.html`/`.htm` path; navigates normally inside the iframe.
    InScopeHtml,
}

/// Whether the default browser activation of the link should proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Let the browser follow the link (iframe navigates).
    Default,
    /// Default activation suppressed; the controller handled it.
    Suppressed,
}

impl LinkClass {
    /// Classifies `target` against the client's `base` URL.
    ///
    /// The HTML check mirrors the address-bar contract: only paths ending in
    /// `.html` or `.htm` (case-insensitive) count as in-scope documents; an
    /// extensionless path is treated as non-HTML.
    pub fn of(base: &Url, target: &Url) -> Self {
        if !same_origin(base, target) {
            return LinkClass::External;
        }
        if is_html_path(target.path()) {
            LinkClass::InScopeHtml
        } else {
            LinkClass::NonHtml
        }
    }
}

/// Scheme/host/port comparison. `Url::origin()` is unusable here: it mints
/// a fresh opaque origin for every `file:` URL, and two local files must
/// count as same-origin (a browser compares `"null" === "null"`).
fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host() == b.host()
        && a.port_or_known_default() == b.port_or_known_default()
}

fn is_html_path(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or(path);
    let lower = last.to_ascii_lowercase();
    lower.ends_with(".html") || lower.ends_with(".htm")
}
