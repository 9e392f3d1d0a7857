//! Movement speed parsing.

use crate::monster::Speed;
use crate::parsing;
use crate::raw::RawMonster;

/// Parse the speed field into its component speeds.
///
/// The walking speed is the first `<N> ft` token. The named modes each
/// require their literal keyword immediately followed by a distance
/// token, else 0. Hover holds iff `(hover)` occurs anywhere.
pub fn parse(monster: &RawMonster) -> Speed {
    let field = &monster.speed;
    Speed {
        walk: walk_speed(field),
        fly: keyword_speed(field, "fly"),
        swim: keyword_speed(field, "swim"),
        burrow: keyword_speed(field, "burrow"),
        climb: keyword_speed(field, "climb"),
        hover: field.contains("(hover)"),
    }
}

/// First digit run followed (after optional spaces) by `ft`.
fn walk_speed(field: &str) -> i32 {
    let bytes = field.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let mut j = i;
            while j < bytes.len() && bytes[j] == b' ' {
                j += 1;
            }
            if field[j..].starts_with("ft") {
                return field[start..i].parse().unwrap_or(0);
            }
        } else {
            i += 1;
        }
    }
    0
}

/// Distance token immediately following the literal keyword.
fn keyword_speed(field: &str, keyword: &str) -> i32 {
    match field.find(keyword) {
        Some(idx) => field[idx + keyword.len()..]
            .split_whitespace()
            .next()
            .and_then(parsing::leading_int)
            .unwrap_or(0),
        None => 0,
    }
}
