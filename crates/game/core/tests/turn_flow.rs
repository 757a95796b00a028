use mystic_core::{
    Difficulty, GameSession, GameStatus, PcgRng, PlayerClass, PlayerSetup, RandomSource,
    SequenceRng, TileBoard, TileCategory, TurnEvent, TurnPhase,
};

fn party() -> Vec<PlayerSetup> {
    vec![
        PlayerSetup::new("Warrick", PlayerClass::Warrior),
        PlayerSetup::new("Maelis", PlayerClass::Mage),
        PlayerSetup::new("Tamsin", PlayerClass::Tank),
        PlayerSetup::new("Hollis", PlayerClass::Healer),
    ]
}

/// Play until the game ends (or `max_actions` runs out), returning every
/// rendered line. Spells are cast whenever ready; passives alternate
/// between use and skip.
fn play(session: &mut GameSession, rng: &mut dyn RandomSource, max_actions: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut use_passive = true;

    for _ in 0..max_actions {
        if session.is_over() {
            break;
        }

        let outcome = match session.phase() {
            TurnPhase::AwaitingPassiveChoice => {
                use_passive = !use_passive;
                session.engine(rng).choose_passive(use_passive)
            }
            _ if session.current_player().can_cast() => session.engine(rng).cast_spell(),
            _ => session.engine(rng).request_roll(),
        }
        .expect("driver only issues legal actions");

        lines.extend(outcome.events.iter().map(ToString::to_string));
        assert_invariants(session);
    }

    lines
}

fn assert_invariants(session: &GameSession) {
    let last = session.board().final_index();
    for player in session.players() {
        assert!(player.hp >= 0 && player.hp <= player.max_hp, "{player:?}");
        assert!(player.position <= last, "{player:?}");
        assert!(player.shield >= 0);
    }
    if !session.is_over() {
        assert!(session.current_player().is_alive());
    }
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed: u64| {
        let mut rng = PcgRng::new(seed);
        let mut session = GameSession::start(&party(), Difficulty::Hard, 40, &mut rng).unwrap();
        let lines = play(&mut session, &mut rng, 2_000);
        (lines, session.snapshot())
    };

    let (lines_a, snapshot_a) = run(1234);
    let (lines_b, snapshot_b) = run(1234);

    assert_eq!(lines_a, lines_b);
    assert_eq!(snapshot_a, snapshot_b);
}

#[test]
fn random_games_keep_invariants_and_terminate() {
    for seed in 0..40 {
        let mut rng = PcgRng::new(seed);
        let difficulty = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard][seed as usize % 3];
        let mut session = GameSession::start(&party(), difficulty, 40, &mut rng).unwrap();

        play(&mut session, &mut rng, 5_000);

        assert!(session.is_over(), "seed {seed} did not finish");
        match session.outcome() {
            Some(mystic_core::GameOutcome::Victory { winner }) => {
                assert_eq!(session.players()[winner].position, 39);
                assert!(session.players()[winner].is_alive());
            }
            Some(mystic_core::GameOutcome::AllFallen) => {
                assert_eq!(session.alive_players().count(), 0);
            }
            None => unreachable!(),
        }
    }
}

#[test]
fn scripted_race_to_victory() {
    let board = TileBoard::from_tiles(vec![
        TileCategory::Start,
        TileCategory::Healing,
        TileCategory::Healing,
        TileCategory::Final,
    ])
    .unwrap();
    let players = [
        PlayerSetup::new("Ana", PlayerClass::Healer),
        PlayerSetup::new("Ben", PlayerClass::Tank),
    ];
    let mut session = GameSession::with_board(&players, Difficulty::Medium, board).unwrap();
    // Ana: roll 1, spring. Ben: roll 6 (clamped to final), challenge 2.
    // Ana: roll 4 (clamped), challenge 6.
    let mut rng = SequenceRng::new([1, 0, 6, 2, 4, 6]);

    let first = session.engine(&mut rng).request_roll().unwrap();
    assert_eq!(first.tile_event, Some(TileCategory::Healing));
    assert_eq!(first.status, GameStatus::InProgress { current_player: 1 });

    let second = session.engine(&mut rng).request_roll().unwrap();
    assert!(second.events.contains(&TurnEvent::FinalChallengeFailed {
        player: "Ben".into(),
        penalty: 10,
    }));
    assert_eq!(session.players()[1].position, 2);
    assert_eq!(session.players()[1].hp, 90);

    let third = session.engine(&mut rng).request_roll().unwrap();
    assert_eq!(third.status, GameStatus::Victory { winner: 0 });
    assert_eq!(session.winner().map(|p| p.name.as_str()), Some("Ana"));
    assert_eq!(
        third.events.last().map(ToString::to_string).as_deref(),
        Some(
            "Ana has conquered the Mystic Dice Adventure! With 100 HP remaining, they claim the crown of the realm!"
        )
    );
}

#[test]
fn snapshot_reflects_pending_choice() {
    let board = TileBoard::from_tiles(
        std::iter::once(TileCategory::Start)
            .chain(std::iter::repeat_n(TileCategory::Mystery, 38))
            .chain(std::iter::once(TileCategory::Final))
            .collect(),
    )
    .unwrap();
    let mut session = GameSession::with_board(&party(), Difficulty::Easy, board).unwrap();
    // roll 2, hermit potion
    let mut rng = SequenceRng::new([2, 0]);

    let outcome = session.engine(&mut rng).request_roll().unwrap();
    assert!(outcome.passive_pending);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, TurnPhase::AwaitingPassiveChoice);
    assert_eq!(snapshot.current_player, 0);
    let pending = snapshot.pending_event.expect("pending event");
    assert_eq!(pending.tile_category, TileCategory::Mystery);
    // +15 on easy: floor(15 * 0.7) = 10
    assert_eq!(pending.effect.hp_delta, Some(10));
}
