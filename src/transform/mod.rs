//! Field transformers turning a raw record into a [`Monster`].
//!
//! Each submodule owns one slice of the entity and reads only the raw
//! fields it needs. Everything is deterministic string work except
//! [`actions`], which consults the extraction engine; that makes
//! [`transform_monster`] the only entry point that awaits the network
//! and the only one that can fail.

pub mod abilities;
pub mod actions;
pub mod challenge;
pub mod lists;
pub mod meta;
pub mod proficiencies;
pub mod speed;
pub mod vitals;

use crate::error::Result;
use crate::extract::Extractor;
use crate::monster::Monster;
use crate::raw::RawMonster;

/// Assemble the full entity for one validated record.
///
/// The returned entity is always fully populated; raw fields that fail
/// to parse land at their documented zero or empty defaults. The only
/// error path is a transport failure during attack-roll extraction.
pub async fn transform_monster(extractor: &Extractor, monster: &RawMonster) -> Result<Monster> {
    Ok(Monster {
        name: monster.name.clone(),
        ac: vitals::armor_class(monster),
        size: meta::size(monster),
        creature_type: meta::creature_type(monster),
        alignment: meta::alignment(monster),
        languages: lists::languages(monster),
        max_hit_points: vitals::max_hit_points(monster),
        hit_dice: vitals::hit_dice(monster),
        speed: speed::parse(monster),
        modifiers: abilities::modifiers(monster),
        stats: abilities::scores(monster),
        saving_throws: proficiencies::saving_throws(monster),
        skills: proficiencies::skills(monster),
        traits: lists::traits(monster),
        actions: actions::transform(extractor, monster).await?,
        reactions: lists::reactions(monster),
        legendary_actions: lists::legendary_actions(monster),
        challenge: challenge::parse(monster),
        image_url: monster.img_url.clone(),
    })
}
