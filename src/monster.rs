//! The transformed monster entity and its component types.
//!
//! Wire names are the camelCase keys the downstream consumer loads, so
//! the serialized artifact round-trips without an adapter layer. Every
//! numeric field defaults to 0 and every sequence to empty: transformers
//! always produce a fully populated entity, never a partial one.

use serde::{Deserialize, Serialize};

/// A validated, normalized monster. Constructed once per valid raw
/// record and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub name: String,
    pub ac: i32,
    pub size: String,
    pub creature_type: String,
    pub alignment: String,
    pub languages: Vec<String>,
    pub max_hit_points: i32,
    pub hit_dice: String,
    pub speed: Speed,
    pub modifiers: Abilities,
    pub stats: Abilities,
    pub saving_throws: Abilities,
    pub skills: Skills,
    pub traits: Vec<String>,
    pub actions: Actions,
    pub reactions: Vec<String>,
    pub legendary_actions: Vec<String>,
    pub challenge: Challenge,
    pub image_url: String,
}

/// Movement speeds in feet, plus the hover flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Speed {
    pub walk: i32,
    pub fly: i32,
    pub swim: i32,
    pub burrow: i32,
    pub climb: i32,
    pub hover: bool,
}

/// One value per ability. Reused for scores, modifiers, and saving
/// throws, which all share the six-ability shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Abilities {
    #[serde(rename = "str")]
    pub strength: i32,
    #[serde(rename = "dex")]
    pub dexterity: i32,
    #[serde(rename = "con")]
    pub constitution: i32,
    #[serde(rename = "int")]
    pub intelligence: i32,
    #[serde(rename = "wis")]
    pub wisdom: i32,
    #[serde(rename = "cha")]
    pub charisma: i32,
}

/// The eighteen named skill bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub acrobatics: i32,
    pub animal_handling: i32,
    pub arcana: i32,
    pub athletics: i32,
    pub deception: i32,
    pub history: i32,
    pub insight: i32,
    pub intimidation: i32,
    pub investigation: i32,
    pub medicine: i32,
    pub nature: i32,
    pub perception: i32,
    pub performance: i32,
    pub persuasion: i32,
    pub religion: i32,
    pub sleight_of_hand: i32,
    pub stealth: i32,
    pub survival: i32,
}

/// Challenge rating and its XP value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Challenge {
    pub rating: String,
    pub xp: i32,
}

/// Action paragraphs plus the attack rolls extracted from them.
///
/// Always present on the entity; both fields are empty when the raw
/// record carries no action text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions {
    pub list: Vec<String>,
    pub attack_rolls: Vec<AttackRoll>,
}

/// One attack option extracted from free action text.
///
/// Produced only by the extraction engine; never assembled directly
/// from raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRoll {
    pub name: String,
    pub attack_type: AttackType,
    pub reach: i32,
    pub hit: i32,
    pub damage: Vec<DamageRoll>,
}

/// A dice expression and the damage type it deals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageRoll {
    pub damage_type: DamageType,
    pub roll: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttackType {
    MeleeWeapon,
    RangedWeapon,
    MeleeOrRangedWeapon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Bludgeoning,
    Piercing,
    Slashing,
    Acid,
    Lightning,
    Poison,
    Fire,
    Cold,
    Radiant,
    Necrotic,
}
