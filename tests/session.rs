//! Session loop integration tests.

mod common;

use common::{AutoTable, ScriptedTable, card};
use twentyone::{
    BetInput, Deck, Move, RoundEnd, Session, SessionEnd, SessionOptions, Suit, TableEvent,
};

fn losing_deck() -> Deck {
    Deck::from_draws(&[
        card(Suit::Diamonds, 7),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 13),
        card(Suit::Hearts, 12),
        card(Suit::Hearts, 5),
    ])
    .unwrap()
}

#[test]
fn options_default_to_five_thousand() {
    let session = Session::new(SessionOptions::default(), 1);
    assert_eq!(session.bankroll(), 5000);
    assert_eq!(session.options().starting_bankroll, 5000);
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn round_result_updates_bankroll() {
    let mut session = Session::new(SessionOptions::default(), 1);
    let mut table = ScriptedTable::new(&[BetInput::Amount(100)], &[Move::Stand]);

    let end = session
        .play_round_with_deck(&mut table, losing_deck())
        .unwrap();

    assert!(matches!(end, RoundEnd::Settled(result) if result.bankroll == 4900));
    assert_eq!(session.bankroll(), 4900);
    assert_eq!(session.rounds_played(), 1);
}

#[test]
fn broke_session_ends_without_prompting() {
    let mut session = Session::new(SessionOptions::default().with_starting_bankroll(0), 1);
    let mut table = ScriptedTable::default();

    assert_eq!(session.run(&mut table).unwrap(), SessionEnd::Broke);
    assert!(table.bet_prompts.is_empty());
    assert_eq!(table.events, vec![TableEvent::Welcome, TableEvent::Broke]);
}

#[test]
fn losing_everything_ends_the_session() {
    let mut session = Session::new(SessionOptions::default().with_starting_bankroll(100), 3);
    let mut table = ScriptedTable::new(&[BetInput::Amount(100)], &[Move::Stand]);

    session
        .play_round_with_deck(&mut table, losing_deck())
        .unwrap();
    assert!(session.is_broke());

    let prompts = table.bet_prompts.len();
    assert_eq!(session.run(&mut table).unwrap(), SessionEnd::Broke);
    assert_eq!(table.bet_prompts.len(), prompts);
    assert_eq!(table.events.last(), Some(&TableEvent::Broke));
}

#[test]
fn quit_keeps_bankroll() {
    let mut session = Session::new(SessionOptions::default(), 9);
    let mut table = ScriptedTable::new(&[BetInput::Quit], &[]);

    assert_eq!(session.run(&mut table).unwrap(), SessionEnd::Quit);
    assert_eq!(session.bankroll(), 5000);
    assert_eq!(
        table.events,
        vec![
            TableEvent::Welcome,
            TableEvent::Bankroll(5000),
            TableEvent::Quit
        ]
    );
}

#[test]
fn seeded_sessions_replay_identically() {
    let play = |seed| {
        let mut session = Session::new(SessionOptions::default().with_starting_bankroll(200), seed);
        let mut table = AutoTable::default();
        let mut history = Vec::new();
        for _ in 0..10 {
            if session.is_broke() {
                break;
            }
            session.play_round(&mut table).unwrap();
            history.push(session.bankroll());
        }
        history
    };

    assert_eq!(play(11), play(11));
}
