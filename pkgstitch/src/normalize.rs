//! Input URL normalization and output naming.
//!
//! Users often paste the URL of a package file instead of its manifest.
//! A few well-known package suffixes are rewritten to the manifest URL;
//! everything else passes through untouched.

use std::path::Path;

use reqwest::Url;

/// Extension of manifest documents.
pub const MANIFEST_EXTENSION: &str = ".json";

/// Extension given to assembled output files.
pub const OUTPUT_EXTENSION: &str = "pkg";

/// Fallback output name when the URL has no usable last segment.
const FALLBACK_OUTPUT_NAME: &str = "output.pkg";

/// Package suffixes that sit next to a manifest of the same stem.
const PACKAGE_SUFFIXES: &[&str] = &["_sc.pkg", "-DP.pkg", "_0.pkg"];

/// Rewrite a known package URL into its manifest URL.
///
/// ```
/// use pkgstitch::normalize::normalize_manifest_url;
///
/// assert_eq!(
///     normalize_manifest_url("http://h/UP0001-GAME_0.pkg"),
///     "http://h/UP0001-GAME.json"
/// );
/// assert_eq!(normalize_manifest_url("http://h/game.json"), "http://h/game.json");
/// ```
pub fn normalize_manifest_url(url: &str) -> String {
    PACKAGE_SUFFIXES
        .iter()
        .find_map(|suffix| url.strip_suffix(suffix))
        .map(|stem| format!("{}{}", stem, MANIFEST_EXTENSION))
        .unwrap_or_else(|| url.to_string())
}

/// Derive an output file name from a manifest URL.
///
/// Takes the last path segment, ignoring query and fragment, and replaces
/// its extension with `pkg`.
pub fn default_output_name(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string)
            .unwrap_or_default(),
        Err(_) => raw_last_segment(url).to_string(),
    };

    if segment.is_empty() {
        return FALLBACK_OUTPUT_NAME.to_string();
    }

    Path::new(&segment)
        .with_extension(OUTPUT_EXTENSION)
        .to_string_lossy()
        .into_owned()
}

fn raw_last_segment(url: &str) -> &str {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or(path)
}
