//! Raw scraped monster records and their structural validator.
//!
//! The source publishes flat string-keyed records whose key names are
//! preserved here verbatim via serde renames. Validation is structural
//! only: a record qualifies when every required key is present with a
//! string value, regardless of whether the value parses into anything
//! sensible downstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A monster record exactly as scraped, all values free-form strings.
///
/// Deserializing with serde doubles as the structural validator: missing
/// required keys or non-string values fail the deserialization, and
/// unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMonster {
    pub name: String,
    pub meta: String,
    #[serde(rename = "Armor Class")]
    pub armor_class: String,
    #[serde(rename = "Hit Points")]
    pub hit_points: String,
    #[serde(rename = "Speed")]
    pub speed: String,
    #[serde(rename = "STR")]
    pub str_score: String,
    #[serde(rename = "STR_mod")]
    pub str_mod: String,
    #[serde(rename = "DEX")]
    pub dex_score: String,
    #[serde(rename = "DEX_mod")]
    pub dex_mod: String,
    #[serde(rename = "CON")]
    pub con_score: String,
    #[serde(rename = "CON_mod")]
    pub con_mod: String,
    #[serde(rename = "INT")]
    pub int_score: String,
    #[serde(rename = "INT_mod")]
    pub int_mod: String,
    #[serde(rename = "WIS")]
    pub wis_score: String,
    #[serde(rename = "WIS_mod")]
    pub wis_mod: String,
    #[serde(rename = "CHA")]
    pub cha_score: String,
    #[serde(rename = "CHA_mod")]
    pub cha_mod: String,
    #[serde(rename = "Senses")]
    pub senses: String,
    #[serde(rename = "Languages")]
    pub languages: String,
    #[serde(rename = "Challenge")]
    pub challenge: String,
    pub img_url: String,
    #[serde(rename = "Saving Throws")]
    pub saving_throws: Option<String>,
    #[serde(rename = "Skills")]
    pub skills: Option<String>,
    #[serde(rename = "Traits")]
    pub traits: Option<String>,
    #[serde(rename = "Actions")]
    pub actions: Option<String>,
    #[serde(rename = "Reactions")]
    pub reactions: Option<String>,
    #[serde(rename = "Legendary Actions")]
    pub legendary_actions: Option<String>,
    #[serde(rename = "Damage Vulnerabilities")]
    pub damage_vulnerabilities: Option<String>,
    #[serde(rename = "Damage Resistances")]
    pub damage_resistances: Option<String>,
    #[serde(rename = "Damage Immunities")]
    pub damage_immunities: Option<String>,
    #[serde(rename = "Condition Immunities")]
    pub condition_immunities: Option<String>,
}

/// Whether a JSON value is structurally a [`RawMonster`]. Never panics.
pub fn is_raw_monster(value: &Value) -> bool {
    serde_json::from_value::<RawMonster>(value.clone()).is_ok()
}

/// Keep the structurally valid records, preserving source order.
///
/// Invalid entries are dropped silently apart from a debug log.
pub fn filter_valid(records: Vec<Value>) -> Vec<RawMonster> {
    let total = records.len();
    let valid: Vec<RawMonster> = records
        .into_iter()
        .filter_map(|value| {
            let name_hint = value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string();
            match serde_json::from_value::<RawMonster>(value) {
                Ok(raw) => Some(raw),
                Err(err) => {
                    debug!(record = %name_hint, %err, "dropping structurally invalid record");
                    None
                }
            }
        })
        .collect();
    debug!(valid = valid.len(), total, "validated source records");
    valid
}
