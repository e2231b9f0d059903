/// Scroll position of a vertical list, in any consistent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub content_len: f32,
    pub viewport_len: f32,
}

/// Whether the viewport's end is within `threshold` viewport lengths of the
/// content's end.
///
/// Content shorter than the viewport always qualifies, so a first page that
/// doesn't fill the screen still pulls the next one.
pub fn should_prefetch(metrics: ScrollMetrics, threshold: f32) -> bool {
    let ScrollMetrics {
        offset,
        content_len,
        viewport_len,
    } = metrics;
    if viewport_len <= 0.0 {
        return false;
    }
    let remaining = content_len - (offset + viewport_len);
    remaining <= threshold.max(0.0) * viewport_len
}
