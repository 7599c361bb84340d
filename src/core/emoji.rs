//! Emoji extraction at grapheme level.
//!
//! Bodies are segmented into extended grapheme clusters so that sequences
//! like `👍🏽`, `🇮🇳` or `👨‍👩‍👧` count as one emoji. A cluster counts when it
//! contains at least one pictographic code point or a combining keycap.

use unicode_segmentation::UnicodeSegmentation;

/// Combining enclosing keycap, as in `1️⃣`.
const KEYCAP: char = '\u{20E3}';

/// Inclusive code-point ranges treated as pictographic: the
/// Extended_Pictographic property plus regional indicators and skin-tone
/// modifiers. Sorted, non-overlapping.
const PICTOGRAPHIC_RANGES: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605),
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1FF),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// Returns `true` if `c` is a pictographic code point.
pub fn is_pictographic(c: char) -> bool {
    let cp = c as u32;
    PICTOGRAPHIC_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns `true` if a grapheme cluster is an emoji.
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    grapheme
        .chars()
        .any(|c| c == KEYCAP || is_pictographic(c))
}

/// Yields every emoji grapheme cluster of `body`, in order.
///
/// ```
/// use chatlens::core::emoji::emoji_graphemes;
///
/// let found: Vec<&str> = emoji_graphemes("good morning 😀 👍🏽 #1 🇮🇳").collect();
/// assert_eq!(found, vec!["😀", "👍🏽", "🇮🇳"]);
/// ```
pub fn emoji_graphemes(body: &str) -> impl Iterator<Item = &str> {
    body.graphemes(true).filter(|g| is_emoji_grapheme(g))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(body: &str) -> Vec<&str> {
        emoji_graphemes(body).collect()
    }

    #[test]
    fn test_plain_text_has_none() {
        assert!(found("hello world 123 #tag :)").is_empty());
        assert!(found("Привет, мир!").is_empty());
    }

    #[test]
    fn test_simple_emoji() {
        assert_eq!(found("lol 😂😂"), vec!["😂", "😂"]);
    }

    #[test]
    fn test_sequences_are_single_graphemes() {
        assert_eq!(found("👨‍👩‍👧"), vec!["👨‍👩‍👧"]);
        assert_eq!(found("🏳️‍🌈"), vec!["🏳️‍🌈"]);
        assert_eq!(found("👍🏽"), vec!["👍🏽"]);
        assert_eq!(found("🇺🇸🇮🇳"), vec!["🇺🇸", "🇮🇳"]);
    }

    #[test]
    fn test_variation_selector_kept_with_base() {
        assert_eq!(found("I ❤️ it"), vec!["❤️"]);
        assert_eq!(found("I ❤ it"), vec!["❤"]);
    }

    #[test]
    fn test_keycap() {
        assert_eq!(found("press 1️⃣"), vec!["1️⃣"]);
    }

    #[test]
    fn test_is_pictographic_bounds() {
        assert!(is_pictographic('😀'));
        assert!(is_pictographic('⚡'));
        assert!(is_pictographic('©'));
        assert!(!is_pictographic('a'));
        assert!(!is_pictographic('#'));
        assert!(!is_pictographic('\u{FE0F}'));
    }

    #[test]
    fn test_ranges_sorted() {
        for pair in PICTOGRAPHIC_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
        for &(lo, hi) in PICTOGRAPHIC_RANGES {
            assert!(lo <= hi);
        }
    }
}
