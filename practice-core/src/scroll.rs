//! Scroll-driven decisions: header state, scroll-to-top control, in-page links

/// Header switches to its compact style once the page scrolls past this.
pub const HEADER_SCROLLED_OFFSET: f64 = 10.0;
/// The floating scroll-to-top control appears past this offset.
pub const SCROLL_TOP_OFFSET: f64 = 400.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Reveal fires slightly before an element reaches the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEEP_LINK_DELAY_MS: u32 = 100;

/// Strictly-greater comparison, no hysteresis.
#[must_use]
pub fn past_offset(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Selector for a same-page link, or `None` for a bare `#`.
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Element id named by a location hash (`#stress` -> `stress`).
#[must_use]
pub fn deep_link_id(hash: &str) -> Option<&str> {
    hash.strip_prefix('#')
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert!(!past_offset(10.0, HEADER_SCROLLED_OFFSET));
        assert!(past_offset(10.5, HEADER_SCROLLED_OFFSET));
        assert!(!past_offset(400.0, SCROLL_TOP_OFFSET));
        assert!(past_offset(401.0, SCROLL_TOP_OFFSET));
    }

    #[test]
    fn anchor_selector_rejects_bare_hash() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("#contacts"), Some("#contacts"));
        assert_eq!(anchor_selector("/about/#team"), None);
    }

    #[test]
    fn deep_link_id_strips_hash() {
        assert_eq!(deep_link_id("#anxiety"), Some("anxiety"));
        assert_eq!(deep_link_id("#"), None);
        assert_eq!(deep_link_id(""), None);
    }
}
