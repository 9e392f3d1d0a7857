//! Armor class, maximum hit points, and hit dice.

use crate::parsing;
use crate::raw::RawMonster;

/// First integer substring of the armor-class field, 0 if none.
pub fn armor_class(monster: &RawMonster) -> i32 {
    parsing::first_uint(&monster.armor_class).unwrap_or(0)
}

/// First integer substring of the hit-points field, 0 if none.
pub fn max_hit_points(monster: &RawMonster) -> i32 {
    parsing::first_uint(&monster.hit_points).unwrap_or(0)
}

/// First `<digits>d<digits>` expression inside the hit-points field,
/// empty if none.
pub fn hit_dice(monster: &RawMonster) -> String {
    parsing::first_dice_expression(&monster.hit_points).unwrap_or_default()
}
