//! Bounded text helpers
//!
//! Every string the engine keeps lives in a fixed-capacity buffer. Copies
//! into those buffers truncate at a character boundary instead of failing.

use heapless::String;

/// Longest prefix of `s` that fits in `max` bytes without splitting a character
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Build a bounded string from `s`, truncating to capacity
pub fn bounded<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    // Cannot fail: the truncated slice fits
    let _ = out.push_str(truncate(s, N));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        // '°' is two bytes
        assert_eq!(truncate("21°C", 3), "21");
        assert_eq!(truncate("21°C", 4), "21°");
    }

    #[test]
    fn test_bounded() {
        let s: String<4> = bounded("Thunderstorm");
        assert_eq!(s.as_str(), "Thun");
    }
}
