//! Action paragraphs and LLM-extracted attack rolls.
//!
//! Attack prose is too irregular for the byte scanners the other
//! transformers use, so the raw action text goes to the extraction
//! engine with four worked SRD stat blocks as few-shot examples. The
//! paragraph list never depends on the model, and a failed extraction
//! degrades to an empty roll list rather than failing the monster.

use tracing::warn;

use crate::error::Result;
use crate::extract::{Example, Extraction, Extractor};
use crate::monster::{Actions, AttackRoll, AttackType, DamageRoll, DamageType};
use crate::parsing::split_html;
use crate::raw::RawMonster;

/// Builds the actions block for one monster.
///
/// A record without action text never reaches the model. Transport
/// errors from the backend propagate; malformed model output does not.
pub async fn transform(extractor: &Extractor, monster: &RawMonster) -> Result<Actions> {
    let raw_actions = match monster.actions.as_deref() {
        Some(raw) => raw,
        None => return Ok(Actions::default()),
    };

    let attack_rolls = match extractor
        .extract_array::<AttackRoll>(raw_actions, &attack_examples())
        .await?
    {
        Extraction::Parsed(rolls) => rolls,
        Extraction::Failed { reason } => {
            warn!(
                "attack-roll extraction failed for {}: {}",
                monster.name, reason
            );
            Vec::new()
        }
    };

    Ok(Actions {
        list: split_html(raw_actions),
        attack_rolls,
    })
}

const MERROW_ACTIONS: &str = "<p><em><strong>Multiattack.</strong></em> The merrow makes two \
    attacks: one with its bite and one with its claws or harpoon. </p>\
    <p><em><strong>Bite.</strong></em> <em>Melee Weapon Attack:</em> +6 to hit, reach 5 ft., \
    one target. <em>Hit:</em> 8 (1d8 + 4) piercing damage. </p>\
    <p><em><strong>Claws.</strong></em> <em>Melee Weapon Attack:</em> +6 to hit, reach 5 ft., \
    one target. <em>Hit:</em> 9 (2d4 + 4) slashing damage. </p>\
    <p><em><strong>Harpoon.</strong></em> <em>Melee or <em>Ranged Weapon Attack:</em></em> +6 \
    to hit, reach 5 ft. or range 20/60 ft., one target. <em>Hit:</em> 11 (2d6 + 4) piercing \
    damage. If the target is a Huge or smaller creature, it must succeed on a Strength contest \
    against the merrow or be pulled up to 20 feet toward the merrow.</p>";

const DRAGON_ACTIONS: &str = "<p><em><strong>Multiattack.</strong></em> The dragon makes three \
    attacks: one with its bite and two with its claws. </p>\
    <p><em><strong>Bite.</strong></em> <em>Melee Weapon Attack:</em> +7 to hit, reach 10 ft., \
    one target. <em>Hit:</em> 15 (2d10 + 4) piercing damage. </p>\
    <p><em><strong>Claw.</strong></em> <em>Melee Weapon Attack:</em> +7 to hit, reach 5 ft., \
    one target. <em>Hit:</em> 11 (2d6 + 4) slashing damage. </p>\
    <p><em><strong>Breath Weapons (Recharge 5–6).</strong></em> The dragon uses one of the \
    following breath weapons. </p>\
    <p><em><strong>Acid Breath.</strong></em> The dragon exhales acid in an 40-foot line that \
    is 5 feet wide. Each creature in that line must make a DC 14 Dexterity saving throw, \
    taking 40 (9d8) acid damage on a failed save, or half as much damage on a successful \
    one. </p>\
    <p><em><strong>Slowing Breath.</strong></em> The dragon exhales gas in a 30-foot cone. \
    Each creature in that area must succeed on a DC 14 Constitution saving throw. On a failed \
    save, the creature can't use reactions, its speed is halved, and it can't make more than \
    one attack on its turn. In addition, the creature can use either an action or a bonus \
    action on its turn, but not both. These effects last for 1 minute. The creature can repeat \
    the saving throw at the end of each of its turns, ending the effect on itself with a \
    successful save.</p>";

const VAMPIRE_ACTIONS: &str = "<p><em><strong>Multiattack. (Vampire Form Only).</strong></em> \
    The vampire makes two attacks, only one of which can be a bite attack. </p>\
    <p><em><strong>Unarmed Strike (Vampire Form Only).</strong></em> <em>Melee Weapon \
    Attack:</em> +9 to hit, reach 5 ft., one creature. <em>Hit:</em> 8 (1d8 + 4) bludgeoning \
    damage. Instead of dealing damage, the vampire can grapple the target (escape DC 18). </p>\
    <p><em><strong>Bite. (Bat or Vampire Form Only).</strong></em> <em>Melee Weapon \
    Attack:</em> +9 to hit, reach 5 ft., one willing creature, or a creature that is grappled \
    by the vampire, incapacitated, or restrained. <em>Hit:</em> 7 (1d6 + 4) piercing damage \
    plus 10 (3d6) necrotic damage. The target's hit point maximum is reduced by an amount \
    equal to the necrotic damage taken, and the vampire regains hit points equal to that \
    amount. The reduction lasts until the target finishes a long rest. The target dies if \
    this effect reduces its hit point maximum to 0. A humanoid slain in this way and then \
    buried in the ground rises the following night as a vampire spawn under the vampire's \
    control. </p>\
    <p><em><strong>Charm.</strong></em> The vampire targets one humanoid it can see within \
    30 feet of it. If the target can see the vampire, the target must succeed on a DC 17 \
    Wisdom saving throw against this magic or be charmed by the vampire. The charmed target \
    regards the vampire as a trusted friend to be heeded and protected. Although the target \
    isn't under the vampire's control, it takes the vampire's requests or actions in the most \
    favorable way it can, and it is a willing target for the vampire's bite attack.</p>\
    <p>Each time the vampire or the vampire's companions do anything harmful to the target, \
    it can repeat the saving throw, ending the effect on itself on a success. Otherwise, the \
    effect lasts 24 hours or until the vampire is destroyed, is on a different plane of \
    existence than the target, or takes a bonus action to end the effect. </p>\
    <p><em><strong>Children of the Night (1/Day).</strong></em> The vampire magically calls \
    2d4 swarms of bats or rats (swarm of bats, swarm of rats), provided that the sun isn't \
    up. While outdoors, the vampire can call 3d6 wolves (wolf) instead. The called creatures \
    arrive in 1d4 rounds, acting as allies of the vampire and obeying its spoken commands. \
    The beasts remain for 1 hour, until the vampire dies, or until the vampire dismisses them \
    as a bonus action.</p>";

const VETERAN_ACTIONS: &str = "<p><em><strong>Multiattack.</strong></em> The veteran makes two \
    longsword attacks. If it has a shortsword drawn, it can also make a shortsword attack. </p>\
    <p><em><strong>Longsword.</strong></em> <em>Melee Weapon Attack:</em> +5 to hit, reach \
    5 ft., one target. <em>Hit:</em> 7 (1d8 + 3) slashing damage, or 8 (1d10 + 3) slashing \
    damage if used with two hands. </p>\
    <p><em><strong>Shortsword.</strong></em> <em>Melee Weapon Attack:</em> +5 to hit, reach \
    5 ft., one target. <em>Hit:</em> 6 (1d6 + 3) piercing damage. </p>\
    <p><em><strong>Heavy Crossbow.</strong></em> <em>Ranged Weapon Attack:</em> +3 to hit, \
    range 100/400 ft., one target. <em>Hit:</em> 6 (1d10 + 1) piercing damage.</p>";

/// The few-shot examples steering attack-roll extraction.
///
/// Four SRD action blocks chosen to cover the grammar: a thrown weapon
/// that is both melee and ranged (split into two rolls), non-attack
/// paragraphs that must be ignored, a bite with two damage components,
/// and a plain ranged weapon. Multiattack lines never become rolls.
fn attack_examples() -> Vec<Example<AttackRoll>> {
    use AttackType::{MeleeWeapon, RangedWeapon};
    use DamageType::{Bludgeoning, Necrotic, Piercing, Slashing};

    vec![
        Example {
            input: MERROW_ACTIONS.to_string(),
            parsed: vec![
                roll("bite", MeleeWeapon, 5, 6, &[(Piercing, "1d8+4")]),
                roll("claws", MeleeWeapon, 5, 6, &[(Slashing, "2d4+4")]),
                roll("harpoon", MeleeWeapon, 5, 6, &[(Piercing, "2d6+4")]),
                roll("harpoon", RangedWeapon, 20, 6, &[(Piercing, "2d6+4")]),
            ],
        },
        Example {
            input: DRAGON_ACTIONS.to_string(),
            parsed: vec![
                roll("bite", MeleeWeapon, 10, 7, &[(Piercing, "2d10+4")]),
                roll("claw", MeleeWeapon, 5, 7, &[(Slashing, "2d6+4")]),
            ],
        },
        Example {
            input: VAMPIRE_ACTIONS.to_string(),
            parsed: vec![
                roll("unarmedStrike", MeleeWeapon, 5, 9, &[(Bludgeoning, "1d8+4")]),
                roll("bite", MeleeWeapon, 5, 9, &[(Piercing, "1d6+4"), (Necrotic, "3d6")]),
            ],
        },
        Example {
            input: VETERAN_ACTIONS.to_string(),
            parsed: vec![
                roll("longsword", MeleeWeapon, 5, 5, &[(Slashing, "1d8+3")]),
                roll("shortsword", MeleeWeapon, 5, 5, &[(Piercing, "1d6+3")]),
                roll("heavyCrossbow", RangedWeapon, 100, 3, &[(Piercing, "1d10+1")]),
            ],
        },
    ]
}

fn roll(
    name: &str,
    attack_type: AttackType,
    reach: i32,
    hit: i32,
    damage: &[(DamageType, &str)],
) -> AttackRoll {
    AttackRoll {
        name: name.to_string(),
        attack_type,
        reach,
        hit,
        damage: damage
            .iter()
            .map(|&(damage_type, dice)| DamageRoll {
                damage_type,
                roll: dice.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::raw::fixtures::merrow;
    use std::sync::Arc;

    fn extractor_with(mock: Arc<MockBackend>) -> Extractor {
        Extractor::builder("http://localhost:11434")
            .backend(mock)
            .build()
    }

    #[tokio::test]
    async fn test_absent_actions_skip_the_model() {
        let mock = Arc::new(MockBackend::fixed("```json\n[]\n```"));
        let extractor = extractor_with(mock.clone());
        let mut monster = merrow();
        monster.actions = None;

        let actions = transform(&extractor, &monster).await.unwrap();
        assert_eq!(actions, Actions::default());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_paragraphs_and_rolls() {
        let mock = Arc::new(MockBackend::fixed(
            "```json\n[{\"name\":\"bite\",\"attackType\":\"meleeWeapon\",\"reach\":5,\
             \"hit\":6,\"damage\":[{\"damageType\":\"piercing\",\"roll\":\"1d8+4\"}]}]\n```",
        ));
        let extractor = extractor_with(mock);

        let actions = transform(&extractor, &merrow()).await.unwrap();
        assert_eq!(
            actions.list,
            vec![
                "Bite. Melee Weapon Attack: +6 to hit, reach 5 ft., one target. \
                 Hit: 8 (1d8 + 4) piercing damage."
            ]
        );
        assert_eq!(
            actions.attack_rolls,
            vec![roll(
                "bite",
                AttackType::MeleeWeapon,
                5,
                6,
                &[(DamageType::Piercing, "1d8+4")]
            )]
        );
    }

    #[tokio::test]
    async fn test_model_garbage_degrades_to_empty_rolls() {
        let mock = Arc::new(MockBackend::fixed("The monster attacks fiercely."));
        let extractor = extractor_with(mock);

        let actions = transform(&extractor, &merrow()).await.unwrap();
        assert!(actions.attack_rolls.is_empty());
        assert_eq!(actions.list.len(), 1);
    }

    #[test]
    fn test_examples_cover_the_attack_grammar() {
        let examples = attack_examples();
        assert_eq!(examples.len(), 4);

        let harpoons: Vec<_> = examples[0]
            .parsed
            .iter()
            .filter(|roll| roll.name == "harpoon")
            .collect();
        assert_eq!(harpoons.len(), 2);
        assert_eq!(harpoons[0].attack_type, AttackType::MeleeWeapon);
        assert_eq!(harpoons[0].reach, 5);
        assert_eq!(harpoons[1].attack_type, AttackType::RangedWeapon);
        assert_eq!(harpoons[1].reach, 20);

        let vampire_bite = &examples[2].parsed[1];
        assert_eq!(vampire_bite.damage.len(), 2);
        assert_eq!(vampire_bite.damage[1].damage_type, DamageType::Necrotic);

        let crossbow = &examples[3].parsed[2];
        assert_eq!(crossbow.attack_type, AttackType::RangedWeapon);
        assert_eq!(crossbow.reach, 100);
    }

    #[test]
    fn test_example_output_values_survive_whitespace_stripping() {
        for example in attack_examples() {
            let serialized = serde_json::to_string(&example.parsed).unwrap();
            assert!(
                !serialized.contains(' '),
                "example output must not contain spaces: {}",
                serialized
            );
        }
    }
}
