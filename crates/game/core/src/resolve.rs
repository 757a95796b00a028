//! Turns an effect payload into player state changes.

use crate::board::TileBoard;
use crate::catalog::Effect;
use crate::events::TurnEvent;
use crate::player::Player;

/// Split incoming damage between shield and HP.
///
/// Returns `(absorbed, residual)`: `absorbed = min(shield, damage)` and
/// `residual = damage - absorbed`.
pub fn absorb_damage(shield: i32, damage: i32) -> (i32, i32) {
    let absorbed = shield.max(0).min(damage.max(0));
    (absorbed, damage.max(0) - absorbed)
}

/// Apply an effect to a player.
///
/// Order is fixed: HP (heal capped at max, damage through the shield first),
/// then movement clamped onto the board, then the skip flag. A player brought
/// to 0 HP is reported as fallen.
pub fn apply_effect(player: &mut Player, effect: &Effect, board: &TileBoard) -> Vec<TurnEvent> {
    let mut events = Vec::new();
    let name = player.name.clone();

    match effect.hp_delta {
        Some(heal) if heal > 0 => {
            player.hp = player.hp.saturating_add(heal).min(player.max_hp);
            events.push(TurnEvent::Healed {
                player: name.clone(),
                amount: heal,
            });
        }
        Some(delta) if delta < 0 => {
            let (absorbed, residual) = absorb_damage(player.shield, delta.saturating_neg());
            if absorbed > 0 {
                player.shield -= absorbed;
                events.push(TurnEvent::ShieldAbsorbed {
                    player: name.clone(),
                    amount: absorbed,
                });
            }
            if residual > 0 {
                player.hp = player.hp.saturating_sub(residual).max(0);
                events.push(TurnEvent::Damaged {
                    player: name.clone(),
                    amount: residual,
                });
            }
        }
        _ => {}
    }

    if let Some(delta) = effect.move_delta.filter(|&d| d != 0) {
        player.position = board.clamp(player.position as i64 + i64::from(delta));
        events.push(if delta > 0 {
            TurnEvent::PushedForward {
                player: name.clone(),
                spaces: delta,
            }
        } else {
            TurnEvent::PushedBack {
                player: name.clone(),
                spaces: delta.saturating_neg(),
            }
        });
    }

    if effect.skip_turn {
        player.skip_turn = true;
        events.push(TurnEvent::WillSkipNextTurn {
            player: name.clone(),
        });
    }

    if !player.is_alive() {
        tracing::info!(player = %name, "player eliminated by tile effect");
        events.push(TurnEvent::Fallen { player: name });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::player::PlayerClass;
    use crate::rng::PcgRng;

    fn board(size: usize) -> TileBoard {
        TileBoard::generate(size, &mut PcgRng::new(3)).unwrap()
    }

    fn player() -> Player {
        Player::new("Nell", PlayerClass::Warrior, Difficulty::Medium)
    }

    #[test]
    fn shield_absorbs_before_hp() {
        let mut p = player();
        p.shield = 4;
        p.hp = 50;

        let events = apply_effect(&mut p, &Effect::hp(-10), &board(40));

        assert_eq!(p.shield, 0);
        assert_eq!(p.hp, 44);
        assert_eq!(
            events,
            vec![
                TurnEvent::ShieldAbsorbed {
                    player: "Nell".into(),
                    amount: 4
                },
                TurnEvent::Damaged {
                    player: "Nell".into(),
                    amount: 6
                },
            ]
        );
    }

    #[test]
    fn large_shield_takes_everything() {
        let mut p = player();
        p.shield = 25;
        apply_effect(&mut p, &Effect::hp(-20), &board(40));
        assert_eq!(p.shield, 5);
        assert_eq!(p.hp, 100);
    }

    #[test]
    fn absorption_never_exceeds_damage() {
        for shield in 0..30 {
            for damage in 0..30 {
                let (absorbed, residual) = absorb_damage(shield, damage);
                assert_eq!(absorbed, shield.min(damage));
                assert_eq!(residual, (damage - shield).max(0));
                assert!(absorbed + residual <= damage);
            }
        }
    }

    #[test]
    fn extreme_deltas_stay_within_bounds() {
        let mut tank = Player::new("Tor", PlayerClass::Tank, Difficulty::Medium);
        tank.hp = 60;
        apply_effect(&mut tank, &Effect::hp(i32::MAX), &board(40));
        assert_eq!(tank.hp, 100);

        tank.shield = 10;
        let events = apply_effect(&mut tank, &Effect::hp(i32::MIN), &board(40));
        assert_eq!(tank.shield, 0);
        assert_eq!(tank.hp, 0);
        assert!(events.contains(&TurnEvent::Fallen {
            player: "Tor".into()
        }));

        let mut p = player();
        p.position = 5;
        let events = apply_effect(&mut p, &Effect::movement(i32::MIN), &board(40));
        assert_eq!(p.position, 0);
        assert_eq!(
            events,
            vec![TurnEvent::PushedBack {
                player: "Nell".into(),
                spaces: i32::MAX
            }]
        );

        apply_effect(&mut p, &Effect::movement(i32::MAX), &board(40));
        assert_eq!(p.position, 39);
    }

    #[test]
    fn heal_is_capped() {
        let mut p = player();
        p.hp = 95;
        apply_effect(&mut p, &Effect::hp(15), &board(40));
        assert_eq!(p.hp, 100);
    }

    #[test]
    fn movement_clamps_to_board() {
        let mut p = player();
        p.position = 3;
        apply_effect(&mut p, &Effect::movement(-8), &board(40));
        assert_eq!(p.position, 0);

        p.position = 38;
        apply_effect(&mut p, &Effect::movement(2), &board(40));
        assert_eq!(p.position, 39);
    }

    #[test]
    fn skip_flag_is_set_for_next_turn() {
        let mut p = player();
        let events = apply_effect(&mut p, &Effect::skip(), &board(40));
        assert!(p.skip_turn);
        assert_eq!(
            events,
            vec![TurnEvent::WillSkipNextTurn {
                player: "Nell".into()
            }]
        );
    }

    #[test]
    fn lethal_damage_floors_at_zero_and_reports_fall() {
        let mut p = player();
        p.hp = 7;
        let events = apply_effect(&mut p, &Effect::hp(-20), &board(40));
        assert_eq!(p.hp, 0);
        assert_eq!(
            events.last(),
            Some(&TurnEvent::Fallen {
                player: "Nell".into()
            })
        );
    }

    #[test]
    fn combined_effect_applies_hp_then_movement() {
        let mut p = player();
        p.position = 10;
        let effect = Effect {
            hp_delta: Some(-5),
            move_delta: Some(2),
            skip_turn: false,
        };
        let events = apply_effect(&mut p, &effect, &board(40));
        assert_eq!(p.hp, 95);
        assert_eq!(p.position, 12);
        assert!(matches!(events[0], TurnEvent::Damaged { amount: 5, .. }));
        assert!(matches!(events[1], TurnEvent::PushedForward { spaces: 2, .. }));
    }
}
