//! Path translation between the host document and embedded targets.
//!
//! The host's address bar lives at a different path depth than the embedded
//! content, so absolute client locations are rewritten as paths relative to
//! the host document's directory before they are encoded into the `page`
//! query parameter.

use url::Url;

/// Computes a path from `base`'s directory to `target`, relative.
///
/// Both paths are split on `/`; the base's final segment (its own filename)
/// is dropped to get its directory. The longest common *prefix* of segments
/// is stripped (a prefix match, not a true LCS), the remaining base depth
/// becomes `../` climbs, and the target's query string and fragment are
/// appended verbatim. Pure and total: a target under an entirely different
/// directory tree yields an all-`../` climb to the common ancestor, which may
/// be the root.
pub fn relative_path(base: &Url, target: &Url) -> String {
    let base_segments: Vec<&str> = base.path().split('/').collect();
    let base_dirs = &base_segments[..base_segments.len().saturating_sub(1)];
    let target_segments: Vec<&str> = target.path().split('/').collect();

    let mut common = 0;
    while common < base_dirs.len()
        && common < target_segments.len()
        && base_dirs[common] == target_segments[common]
    {
        common += 1;
    }

    let mut out = "../".repeat(base_dirs.len() - common);
    out.push_str(&target_segments[common..].join("/"));
    if let Some(query) = target.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = target.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
