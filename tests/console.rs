//! Terminal table tests over in-memory streams.

mod common;

use std::io::{self, Cursor, ErrorKind, Write};

use common::card;
use twentyone::{
    BetInput, Console, Hand, Move, Session, SessionEnd, SessionOptions, Suit, Table, TableError,
    TableEvent,
};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

fn hand_of(cards: &[twentyone::Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

#[test]
fn bet_prompt_retries_until_valid() {
    let mut table = console("abc\n0\n6000\n-5\n 250 \n");
    assert_eq!(table.prompt_bet(5000).unwrap(), BetInput::Amount(250));

    let text = output(table);
    assert_eq!(text.matches("How much do you bet? (1-5000, or QUIT)").count(), 5);
}

#[test]
fn bet_prompt_accepts_quit_in_any_case() {
    let mut table = console("quit\n");
    assert_eq!(table.prompt_bet(10).unwrap(), BetInput::Quit);
}

#[test]
fn closed_input_is_reported() {
    let mut table = console("12x\n");
    assert_eq!(table.prompt_bet(10).unwrap_err(), TableError::InputClosed);

    let mut table = console("");
    assert_eq!(table.acknowledge().unwrap_err(), TableError::InputClosed);
}

#[test]
fn move_prompt_offers_double_only_when_eligible() {
    let two = hand_of(&[card(Suit::Hearts, 5), card(Suit::Clubs, 6)]);
    let mut table = console("x\nd\n");
    assert_eq!(table.prompt_move(&two, 10).unwrap(), Move::DoubleDown);
    assert!(output(table).contains("(D)ouble down"));

    let three = hand_of(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 4),
    ]);
    let mut table = console("d\nh\n");
    assert_eq!(table.prompt_move(&three, 10).unwrap(), Move::Hit);
    assert!(!output(table).contains("(D)ouble down"));

    let mut table = console("D\nS\n");
    assert_eq!(table.prompt_move(&two, 0).unwrap(), Move::Stand);
}

#[test]
fn hidden_dealer_card_and_value() {
    let player = hand_of(&[card(Suit::Spades, 13), card(Suit::Hearts, 12)]);
    let dealer = hand_of(&[card(Suit::Diamonds, 1), card(Suit::Clubs, 9)]);

    let mut table = console("");
    table.render_hands(&player, &dealer, false).unwrap();
    let hidden = output(table);
    assert!(hidden.contains("DEALER: ???"));
    assert!(hidden.contains("|## |"));
    assert!(!hidden.contains("|A  |"));
    assert!(hidden.contains("|9  |"));
    assert!(hidden.contains("PLAYER: 20"));

    let mut table = console("");
    table.render_hands(&player, &dealer, true).unwrap();
    let shown = output(table);
    assert!(shown.contains("DEALER: 20"));
    assert!(shown.contains("|A  |"));
    assert!(shown.contains("|_10|") || shown.contains("|__K|"));
}

#[test]
fn reports_use_plain_messages() {
    let mut table = console("");
    table.report(&TableEvent::Bankroll(5000)).unwrap();
    table
        .report(&TableEvent::PlayerDrew(card(Suit::Spades, 10)))
        .unwrap();
    table.report(&TableEvent::Broke).unwrap();

    let text = output(table);
    assert!(text.contains("Money: 5000"));
    assert!(text.contains("You drew a 10 of \u{2660}."));
    assert!(text.contains("You're broke!"));
}

#[test]
fn full_session_over_console() {
    let mut session = Session::new(SessionOptions::default(), 2024);
    let mut table = console("100\ns\n\n\nquit\n");

    assert_eq!(session.run(&mut table).unwrap(), SessionEnd::Quit);
    assert_eq!(session.rounds_played(), 1);

    let text = output(table);
    assert!(text.starts_with("Blackjack, by Al Sweigart"));
    assert!(text.contains("Money: 5000"));
    assert!(text.contains("Bet: 100"));
    assert!(text.contains("Thanks for playing!"));
}

/// A writer whose pipe has been closed.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(ErrorKind::BrokenPipe))
    }
}

#[test]
fn write_failures_keep_their_kind() {
    let mut table = Console::new(Cursor::new(Vec::new()), ClosedPipe);
    let err = table.report(&TableEvent::Bankroll(10)).unwrap_err();

    assert_eq!(
        err,
        TableError::Io {
            kind: ErrorKind::BrokenPipe
        }
    );
    assert_eq!(err.to_string(), "i/o error: broken pipe");
}

#[test]
fn card_art_and_pauses_match_the_classic_layout() {
    let player = hand_of(&[card(Suit::Spades, 13), card(Suit::Hearts, 10)]);
    let dealer = hand_of(&[card(Suit::Diamonds, 2), card(Suit::Clubs, 9)]);

    let mut table = console("\n");
    table.render_hands(&player, &dealer, true).unwrap();
    table.acknowledge().unwrap();

    let text = output(table);
    assert!(text.contains("PLAYER: 20\n____  ____\n|K  | |10 |\n"));
    assert!(text.contains("|__K| |_10|"));
    assert!(text.ends_with("Press Enter to continue...\n\n\n"));
}
