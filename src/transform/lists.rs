//! List-shaped fields: languages plus the trait and action paragraphs.

use crate::parsing::split_html;
use crate::raw::RawMonster;

/// Comma-separated languages, each entry trimmed and lower-cased.
///
/// Entries are kept verbatim otherwise, so a record with no languages
/// still yields a single empty entry rather than an empty list.
pub fn languages(monster: &RawMonster) -> Vec<String> {
    monster
        .languages
        .split(',')
        .map(|language| language.trim().to_lowercase())
        .collect()
}

/// Trait paragraphs with markup stripped, one entry per `</p>` block.
pub fn traits(monster: &RawMonster) -> Vec<String> {
    monster.traits.as_deref().map(split_html).unwrap_or_default()
}

/// Reaction paragraphs with markup stripped.
pub fn reactions(monster: &RawMonster) -> Vec<String> {
    monster
        .reactions
        .as_deref()
        .map(split_html)
        .unwrap_or_default()
}

/// Legendary action paragraphs with markup stripped.
pub fn legendary_actions(monster: &RawMonster) -> Vec<String> {
    monster
        .legendary_actions
        .as_deref()
        .map(split_html)
        .unwrap_or_default()
}
