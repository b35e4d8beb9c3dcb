use super::types::Page;

/// Upper bound on a single result page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Page size applied when the caller sends none.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Clamps raw offset/size input into a valid pagination window.
///
/// Inputs are optional strings straight off the query string. Parsing never
/// fails: a non-numeric value is coerced to 0, an absent value falls back to
/// the defaults (offset 0, size 50). The offset is floored at 0 and the size
/// is clamped into `[0, MAX_PAGE_SIZE]`. A size of 0 is accepted and simply
/// yields an empty page.
pub fn clamp_page(raw_from: Option<&str>, raw_size: Option<&str>) -> Page {
    let from = match raw_from {
        Some(raw) => parse_or_zero(raw).max(0),
        None => 0,
    };
    let size = match raw_size {
        Some(raw) => parse_or_zero(raw).clamp(0, MAX_PAGE_SIZE as i64),
        None => DEFAULT_PAGE_SIZE as i64,
    };

    Page {
        from: from as usize,
        size: size as usize,
    }
}

fn parse_or_zero(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}
