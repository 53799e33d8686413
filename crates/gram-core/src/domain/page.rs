//! Skip/limit pagination.

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_MAX_LIMIT: u64 = 100;
/// Largest offset SQL stores accept (`BIGINT`).
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// A window into an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    pub const fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// Build a page from raw query-string values.
    ///
    /// Absent or unparsable values (negative numbers included) fall back to
    /// the defaults independently of each other.
    pub fn from_params(skip: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, default: u64| {
            raw.and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            skip: parse(skip, DEFAULT_SKIP),
            limit: parse(limit, DEFAULT_LIMIT),
        }
    }

    /// Bound `limit` to `1..=max_limit` and `skip` to `MAX_SKIP`. Zero means
    /// "unbounded" to a document store, so a zero limit becomes `max_limit`.
    pub fn clamped(self, max_limit: u64) -> Self {
        let max_limit = max_limit.max(1);
        let limit = match self.limit {
            0 => max_limit,
            n => n.min(max_limit),
        };
        Self {
            skip: self.skip.min(MAX_SKIP),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(Page::from_params(None, None), Page::new(0, 10));
    }

    #[test]
    fn test_parses_explicit_values() {
        assert_eq!(Page::from_params(Some("5"), Some("2")), Page::new(5, 2));
    }

    #[test]
    fn test_unparsable_values_fall_back_independently() {
        assert_eq!(Page::from_params(Some("abc"), Some("3")), Page::new(0, 3));
        assert_eq!(Page::from_params(Some("4"), Some("-1")), Page::new(4, 10));
        assert_eq!(Page::from_params(Some(""), Some("1.5")), Page::new(0, 10));
    }

    #[test]
    fn test_clamp_bounds_limit() {
        assert_eq!(Page::new(0, 1000).clamped(100), Page::new(0, 100));
        assert_eq!(Page::new(7, 0).clamped(100), Page::new(7, 100));
        assert_eq!(Page::new(0, 10).clamped(100), Page::new(0, 10));
        assert_eq!(Page::new(0, 10).clamped(0), Page::new(0, 1));
    }

    #[test]
    fn test_clamp_bounds_skip_to_signed_range() {
        let page = Page::from_params(Some("18446744073709551615"), None).clamped(100);
        assert_eq!(page, Page::new(MAX_SKIP, 10));
        assert!(i64::try_from(page.skip).is_ok());

        let page = Page::from_params(Some("9223372036854775808"), Some("5")).clamped(100);
        assert_eq!(page.skip, i64::MAX as u64);
        assert_eq!(Page::new(42, 5).clamped(100).skip, 42);
    }
}
