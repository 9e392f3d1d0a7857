//! Size, creature type, and alignment from the freeform meta string.
//!
//! The source encodes these positionally as
//! `"<Size> <type> (subtype), <alignment>"`. A missing segment yields
//! an empty string; the fragility is in the source format itself.

use crate::raw::RawMonster;

/// First whitespace token, lower-cased.
pub fn size(monster: &RawMonster) -> String {
    monster
        .meta
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Second whitespace token of the first comma segment, lower-cased.
pub fn creature_type(monster: &RawMonster) -> String {
    monster
        .meta
        .split(',')
        .next()
        .unwrap_or("")
        .split_whitespace()
        .nth(1)
        .unwrap_or("")
        .to_lowercase()
}

/// Everything after the first comma, trimmed and lower-cased.
pub fn alignment(monster: &RawMonster) -> String {
    match monster.meta.split_once(',') {
        Some((_, rest)) => rest.trim().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::fixtures::merrow;

    fn with_meta(raw: &str) -> RawMonster {
        let mut monster = merrow();
        monster.meta = raw.to_string();
        monster
    }

    #[test]
    fn test_positional_segments() {
        let monster = merrow();
        assert_eq!(size(&monster), "large");
        assert_eq!(creature_type(&monster), "monstrosity");
        assert_eq!(alignment(&monster), "chaotic evil");
    }

    #[test]
    fn test_subtype_does_not_shift_segments() {
        let monster = with_meta("Medium humanoid (gnoll), chaotic evil");
        assert_eq!(size(&monster), "medium");
        assert_eq!(creature_type(&monster), "humanoid");
        assert_eq!(alignment(&monster), "chaotic evil");
    }

    #[test]
    fn test_alignment_keeps_later_commas() {
        let monster = with_meta("Medium humanoid (any race), any alignment, typically neutral");
        assert_eq!(alignment(&monster), "any alignment, typically neutral");
    }

    #[test]
    fn test_missing_comma_yields_empty_alignment() {
        let monster = with_meta("Large monstrosity");
        assert_eq!(size(&monster), "large");
        assert_eq!(creature_type(&monster), "monstrosity");
        assert_eq!(alignment(&monster), "");
    }

    #[test]
    fn test_empty_meta_yields_empty_segments() {
        let monster = with_meta("");
        assert_eq!(size(&monster), "");
        assert_eq!(creature_type(&monster), "");
        assert_eq!(alignment(&monster), "");
    }
}
