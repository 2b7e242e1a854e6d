use cardduel_engine::config::{TableConfig, UNIT};
use cardduel_engine::engine::Engine;
use cardduel_engine::errors::GameError;
use cardduel_engine::ledger::InMemoryLedger;
use cardduel_engine::rng::ScriptedSeeds;
use cardduel_engine::session::{ParticipantId, Phase, MAX_PLAYER_HAND};

fn engine_with(ranks: &[u8]) -> Engine<InMemoryLedger, ScriptedSeeds> {
    let ledger = InMemoryLedger::new(100 * UNIT)
        .with_account("alice", 10 * UNIT)
        .with_account("bob", 10 * UNIT);
    Engine::new(
        ParticipantId::from("house"),
        TableConfig::default(),
        ledger,
        ScriptedSeeds::ranks(ranks),
    )
    .unwrap()
}

fn alice() -> ParticipantId {
    ParticipantId::from("alice")
}

#[test]
fn start_deals_one_drawn_card_to_each_side() {
    let mut eng = engine_with(&[4, 7]);
    eng.start(&alice(), UNIT).expect("start should succeed");

    let hand = eng.player_hand(&alice());
    assert_eq!(hand.len(), 1);
    assert!(hand[0].drawn);
    assert_eq!(hand[0].rank, 4);
    assert_eq!(eng.opponent_hand(&alice()).len(), 1);
    assert_eq!(eng.phase(&alice()), Phase::Active);

    let session = eng.session(&alice()).unwrap();
    assert_eq!(session.stake, UNIT);
    assert!(session.active);
    assert!(!session.settled);
}

#[test]
fn start_accepts_both_stake_bounds() {
    let cfg = TableConfig::default();
    let mut eng = engine_with(&[1, 1]);
    eng.start(&alice(), cfg.min_stake).unwrap();
    eng.start(&ParticipantId::from("bob"), cfg.max_stake).unwrap();
}

#[test]
fn out_of_range_stake_is_rejected_without_effect() {
    let mut eng = engine_with(&[1, 1]);
    let cfg = *eng.config();
    let pool = eng.pool_balance();

    for stake in [0, cfg.min_stake - 1, cfg.max_stake + 1] {
        let err = eng.start(&alice(), stake).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidStake {
                stake,
                min: cfg.min_stake,
                max: cfg.max_stake
            }
        );
    }
    assert_eq!(eng.pool_balance(), pool);
    assert_eq!(eng.ledger().balance(&alice()), 10 * UNIT);
    assert_eq!(eng.phase(&alice()), Phase::NoSession);
    assert!(eng.player_hand(&alice()).is_empty());
}

#[test]
fn second_start_while_active_fails() {
    let mut eng = engine_with(&[3, 8]);
    eng.start(&alice(), UNIT).unwrap();
    let pool = eng.pool_balance();
    let hand = eng.player_hand(&alice()).to_vec();

    assert_eq!(
        eng.start(&alice(), UNIT),
        Err(GameError::SessionAlreadyActive)
    );
    assert_eq!(eng.pool_balance(), pool);
    assert_eq!(eng.player_hand(&alice()), hand.as_slice());
}

#[test]
fn hands_grow_together_until_full() {
    let mut eng = engine_with(&[0, 1, 2, 3, 4, 5]);
    eng.start(&alice(), UNIT).unwrap();
    assert_eq!(eng.player_hand(&alice()).len(), 1);
    assert_eq!(eng.opponent_hand(&alice()).len(), 1);

    let c = eng.hit(&alice()).unwrap();
    assert_eq!(c.rank, 2);
    assert_eq!(eng.player_hand(&alice()).len(), 2);
    assert_eq!(eng.opponent_hand(&alice()).len(), 2);

    eng.hit(&alice()).unwrap();
    assert_eq!(eng.player_hand(&alice()).len(), MAX_PLAYER_HAND);
    assert_eq!(eng.opponent_hand(&alice()).len(), MAX_PLAYER_HAND);

    assert_eq!(eng.hit(&alice()), Err(GameError::HandFull));
    assert_eq!(eng.player_hand(&alice()).len(), 3);
    assert_eq!(eng.opponent_hand(&alice()).len(), 3);

    let ranks: Vec<u8> = eng.player_hand(&alice()).iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![0, 2, 4]);
    let opp: Vec<u8> = eng.opponent_hand(&alice()).iter().map(|c| c.rank).collect();
    assert_eq!(opp, vec![1, 3, 5]);
}

#[test]
fn hit_without_active_session_fails() {
    let mut eng = engine_with(&[9, 1]);
    assert_eq!(eng.hit(&alice()), Err(GameError::NoActiveSession));

    eng.start(&alice(), UNIT).unwrap();
    eng.judge(&alice()).unwrap();
    assert_eq!(eng.hit(&alice()), Err(GameError::NoActiveSession));
}

#[test]
fn judge_twice_fails_the_second_time() {
    let mut eng = engine_with(&[2, 8]);
    eng.start(&alice(), UNIT).unwrap();
    eng.judge(&alice()).unwrap();
    assert_eq!(eng.judge(&alice()), Err(GameError::NoActiveSession));
    assert_eq!(eng.abandon(&alice()), Err(GameError::NoActiveSession));
    assert_eq!(eng.phase(&alice()), Phase::Settled);
}

#[test]
fn reset_clears_hands_but_keeps_stake_and_streak() {
    let mut eng = engine_with(&[2, 8]);
    eng.start(&alice(), UNIT).unwrap();
    eng.judge(&alice()).unwrap();
    assert_eq!(eng.streak(&alice()), 1);

    eng.start(&alice(), UNIT).unwrap();
    let balance = eng.ledger().balance(&alice());
    let pool = eng.pool_balance();
    eng.reset(&alice());

    let session = eng.session(&alice()).unwrap();
    assert!(session.player_cards.is_empty());
    assert!(session.opponent_cards.is_empty());
    assert!(!session.active);
    assert!(!session.settled);
    assert_eq!(session.stake, UNIT);
    assert_eq!(eng.phase(&alice()), Phase::NoSession);
    assert_eq!(eng.streak(&alice()), 1);
    // no refund on reset
    assert_eq!(eng.ledger().balance(&alice()), balance);
    assert_eq!(eng.pool_balance(), pool);

    assert_eq!(eng.judge(&alice()), Err(GameError::NoActiveSession));
    eng.start(&alice(), UNIT).expect("start after reset");
}

#[test]
fn reset_after_settlement_keeps_settled_flag() {
    let mut eng = engine_with(&[2, 8]);
    eng.start(&alice(), UNIT).unwrap();
    eng.judge(&alice()).unwrap();
    eng.reset(&alice());
    let session = eng.session(&alice()).unwrap();
    assert!(session.settled);
    assert!(session.player_cards.is_empty());
}

#[test]
fn reset_without_session_is_a_no_op() {
    let mut eng = engine_with(&[1]);
    eng.reset(&alice());
    assert_eq!(eng.phase(&alice()), Phase::NoSession);
    assert!(eng.session(&alice()).is_none());
}

#[test]
fn new_round_replaces_previous_hands() {
    let mut eng = engine_with(&[2, 8, 5, 6, 7, 9]);
    eng.start(&alice(), UNIT).unwrap();
    eng.hit(&alice()).unwrap();
    eng.judge(&alice()).unwrap();

    eng.start(&alice(), UNIT).unwrap();
    let ranks: Vec<u8> = eng.player_hand(&alice()).iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![7]);
    assert_eq!(eng.opponent_hand(&alice()).len(), 1);
}

#[test]
fn participants_do_not_block_each_other() {
    let mut eng = engine_with(&[3, 4]);
    let bob = ParticipantId::from("bob");
    eng.start(&alice(), UNIT).unwrap();
    eng.start(&bob, UNIT).expect("bob keeps a separate session");
    eng.abandon(&bob).unwrap();
    assert_eq!(eng.phase(&alice()), Phase::Active);
    assert_eq!(eng.phase(&bob), Phase::Settled);
}

#[test]
fn opponent_hand_is_readable_for_any_participant() {
    let mut eng = engine_with(&[3, 4]);
    assert!(eng.opponent_hand(&ParticipantId::from("carol")).is_empty());
    eng.start(&alice(), UNIT).unwrap();
    assert_eq!(eng.opponent_hand(&alice())[0].rank, 4);
}
