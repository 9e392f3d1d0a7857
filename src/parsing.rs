//! Leaf text scanners for stat-block fields.
//!
//! Hand-rolled scanning over the scraped source's string fields, plus
//! extraction of fenced JSON from LLM text. Every scanner is total:
//! missing or malformed input yields `None` (or an empty collection)
//! and callers fall back to the documented defaults.

use std::collections::HashMap;

/// Remove every `<...>` tag from an HTML fragment.
///
/// Character scan with an in-tag flag; text inside a closed tag is
/// dropped, everything else is kept verbatim. A `>` outside any tag is
/// literal text, and a trailing unclosed `<...` is emitted as-is.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pending = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        if in_tag {
            if ch == '>' {
                in_tag = false;
                pending.clear();
            } else {
                pending.push(ch);
            }
        } else if ch == '<' {
            in_tag = true;
            pending.push(ch);
        } else {
            out.push(ch);
        }
    }
    if in_tag {
        out.push_str(&pending);
    }
    out
}

/// Split an HTML blob into plain-text paragraphs.
///
/// Splits on `</p>`, strips remaining tags, trims, and drops empty
/// entries. Idempotent: applying it to one of its own outputs returns
/// that output unchanged.
pub fn split_html(raw: &str) -> Vec<String> {
    raw.split("</p>")
        .map(|chunk| strip_tags(chunk).trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a comma-separated `Name <value>` list into a lowercase map.
///
/// Each comma segment is whitespace-split; the first token (lowercased)
/// names the entry and the second parses as its value. A segment with no
/// name token maps from `_`; a missing or unparseable value maps to 0.
pub fn stat_list_map(raw: &str) -> HashMap<String, i32> {
    let mut map = HashMap::new();
    for segment in raw.split(',') {
        let mut tokens = segment.split_whitespace();
        let name = tokens.next().unwrap_or("_").to_lowercase();
        let value = tokens.next().and_then(leading_int).unwrap_or(0);
        map.insert(name, value);
    }
    map
}

/// First unsigned integer substring, e.g. `"12 (natural armor)"` -> 12.
pub fn first_uint(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            return text[start..i].parse().ok();
        }
        i += 1;
    }
    None
}

/// First integer substring with an immediately preceding sign honored,
/// e.g. `"+7"` -> 7, `"Hit: -2"` -> -2.
pub fn first_int(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let magnitude: i32 = text[start..i].parse().ok()?;
            let negative = start > 0 && bytes[start - 1] == b'-';
            return Some(if negative { -magnitude } else { magnitude });
        }
        i += 1;
    }
    None
}

/// Leading integer of the (trim-started) text: optional sign, then
/// digits, trailing garbage ignored. `"42abc"` -> 42, `"abc"` -> `None`.
pub fn leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut i = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            i = 1;
            true
        }
        Some(b'+') => {
            i = 1;
            false
        }
        _ => false,
    };
    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return None;
    }
    let magnitude: i32 = trimmed[start..i].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// First `<digits>d<digits>` dice expression, e.g. `"52 (8d10 + 8)"` ->
/// `"8d10"`.
pub fn first_dice_expression(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'd' {
                let after_d = i + 1;
                let mut j = after_d;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j > after_d {
                    return Some(text[start..j].to_string());
                }
                i = after_d;
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Extract JSON content from markdown fenced code blocks.
///
/// Recognizes `` ```json ``, `` ```JSON ``, and plain `` ``` `` fences.
pub fn extract_json_block(text: &str) -> Option<String> {
    let markers = ["```json", "```JSON", "```"];
    for marker in markers {
        if let Some(start) = text.find(marker) {
            let content_start = start + marker.len();
            if let Some(end) = text[content_start..].find("```") {
                return Some(text[content_start..content_start + end].trim().to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_basic() {
        assert_eq!(strip_tags("<em>Bite.</em> Melee"), "Bite. Melee");
    }

    #[test]
    fn test_strip_tags_no_tags() {
        assert_eq!(strip_tags("plain text"), "plain text");
    }

    #[test]
    fn test_strip_tags_bare_close_is_literal() {
        assert_eq!(strip_tags("AC > 15"), "AC > 15");
    }

    #[test]
    fn test_strip_tags_unclosed_tag_is_literal() {
        assert_eq!(strip_tags("reach 5 ft. <em"), "reach 5 ft. <em");
    }

    #[test]
    fn test_split_html_paragraphs() {
        assert_eq!(split_html("<p>A</p><p>B</p>"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_html_empty_paragraph() {
        assert!(split_html("<p></p>").is_empty());
        assert!(split_html("").is_empty());
    }

    #[test]
    fn test_split_html_inner_tags() {
        let raw =
            "<p><em><strong>Amphibious.</strong></em> The merrow can breathe air and water.</p>";
        assert_eq!(
            split_html(raw),
            vec!["Amphibious. The merrow can breathe air and water."]
        );
    }

    #[test]
    fn test_split_html_idempotent() {
        let once = split_html("<p>First trait.</p>\n<p>Second trait.</p>");
        for entry in &once {
            assert_eq!(split_html(entry), vec![entry.clone()]);
        }
    }

    #[test]
    fn test_stat_list_map_basic() {
        let map = stat_list_map("Str +5, Dex -1");
        assert_eq!(map.get("str"), Some(&5));
        assert_eq!(map.get("dex"), Some(&-1));
    }

    #[test]
    fn test_stat_list_map_missing_value() {
        let map = stat_list_map("Perception");
        assert_eq!(map.get("perception"), Some(&0));
    }

    #[test]
    fn test_stat_list_map_empty_segment() {
        let map = stat_list_map("");
        assert_eq!(map.get("_"), Some(&0));
    }

    #[test]
    fn test_first_uint() {
        assert_eq!(first_uint("12 (natural armor)"), Some(12));
        assert_eq!(first_uint("no digits"), None);
    }

    #[test]
    fn test_first_int_signs() {
        assert_eq!(first_int("+7"), Some(7));
        assert_eq!(first_int("-2"), Some(-2));
        assert_eq!(first_int("17"), Some(17));
        assert_eq!(first_int(""), None);
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42abc"), Some(42));
        assert_eq!(leading_int("  +5"), Some(5));
        assert_eq!(leading_int("-3 (roughly)"), Some(-3));
        assert_eq!(leading_int("abc42"), None);
    }

    #[test]
    fn test_first_dice_expression() {
        assert_eq!(
            first_dice_expression("52 (8d10 + 8)"),
            Some("8d10".to_string())
        );
        assert_eq!(first_dice_expression("52"), None);
        assert_eq!(first_dice_expression("1d"), None);
    }

    #[test]
    fn test_extract_json_block() {
        let text = "text\n```json\n[{\"a\":1}]\n```\nmore";
        assert_eq!(extract_json_block(text), Some("[{\"a\":1}]".to_string()));
    }

    #[test]
    fn test_extract_json_block_none() {
        assert_eq!(extract_json_block("no code block"), None);
    }
}
