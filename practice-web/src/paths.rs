//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/site` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path from `PUBLIC_URL`, empty when unset.
#[must_use]
pub fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL of an uploaded file stored under the static prefix, e.g. an event image.
#[must_use]
pub fn static_asset(prefix: &str, relative: &str) -> String {
    static_asset_with_base(prefix, relative, public_url())
}

fn static_asset_with_base(prefix: &str, relative: &str, base: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let rel = relative.trim_start_matches('/');
    if prefix.is_empty() {
        asset_path_with_base(rel, base)
    } else {
        asset_path_with_base(&format!("{prefix}/{rel}"), base)
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
