//! Ability scores and modifiers.

use crate::monster::Abilities;
use crate::parsing;
use crate::raw::RawMonster;

/// Direct integer parse of each score field; unparseable scores
/// coerce to 0.
pub fn scores(monster: &RawMonster) -> Abilities {
    Abilities {
        strength: score(&monster.str_score),
        dexterity: score(&monster.dex_score),
        constitution: score(&monster.con_score),
        intelligence: score(&monster.int_score),
        wisdom: score(&monster.wis_score),
        charisma: score(&monster.cha_score),
    }
}

/// First signed integer substring of each modifier field.
pub fn modifiers(monster: &RawMonster) -> Abilities {
    Abilities {
        strength: modifier(&monster.str_mod),
        dexterity: modifier(&monster.dex_mod),
        constitution: modifier(&monster.con_mod),
        intelligence: modifier(&monster.int_mod),
        wisdom: modifier(&monster.wis_mod),
        charisma: modifier(&monster.cha_mod),
    }
}

fn score(raw: &str) -> i32 {
    parsing::leading_int(raw).unwrap_or(0)
}

// A modifier string beginning with a minus is negative even when the
// digits were matched without the sign.
fn modifier(raw: &str) -> i32 {
    let value = parsing::first_int(raw).unwrap_or(0);
    if raw.trim_start().starts_with('-') {
        -value.abs()
    } else {
        value
    }
}
