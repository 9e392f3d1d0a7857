//! Saving throws and skills from stat-list fields.

use crate::monster::{Abilities, Skills};
use crate::parsing;
use crate::raw::RawMonster;

/// Saving-throw bonuses, every unmentioned ability 0.
pub fn saving_throws(monster: &RawMonster) -> Abilities {
    let expression = match &monster.saving_throws {
        Some(expression) => expression,
        None => return Abilities::default(),
    };
    let map = parsing::stat_list_map(expression);
    let get = |name: &str| map.get(name).copied().unwrap_or(0);
    Abilities {
        strength: get("str"),
        dexterity: get("dex"),
        constitution: get("con"),
        intelligence: get("int"),
        wisdom: get("wis"),
        charisma: get("cha"),
    }
}

/// Skill bonuses, every unmentioned skill 0.
///
/// The parsed map's keys are lower-cased single tokens, so the
/// multi-word skills can only ever resolve to their defaults; the
/// stat-list format cannot carry them.
pub fn skills(monster: &RawMonster) -> Skills {
    let expression = match &monster.skills {
        Some(expression) => expression,
        None => return Skills::default(),
    };
    let map = parsing::stat_list_map(expression);
    let get = |name: &str| map.get(name).copied().unwrap_or(0);
    Skills {
        acrobatics: get("acrobatics"),
        animal_handling: get("animalHandling"),
        arcana: get("arcana"),
        athletics: get("athletics"),
        deception: get("deception"),
        history: get("history"),
        insight: get("insight"),
        intimidation: get("intimidation"),
        investigation: get("investigation"),
        medicine: get("medicine"),
        nature: get("nature"),
        perception: get("perception"),
        performance: get("performance"),
        persuasion: get("persuasion"),
        religion: get("religion"),
        sleight_of_hand: get("sleightOfHand"),
        stealth: get("stealth"),
        survival: get("survival"),
    }
}
