//! A single-player blackjack game with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one round against the
//! dealer (betting, player turn, dealer turn, settlement) and a [`Session`]
//! that carries the player's bankroll from round to round. All input and
//! output goes through the [`Table`] trait; the `std` feature ships a
//! terminal implementation, [`Console`].
//!
//! # Example
//!
//! ```
//! use twentyone::{Card, Deck, Round, Suit};
//!
//! let deck = Deck::from_draws(&[
//!     Card::new(Suit::Diamonds, 7), // dealer
//!     Card::new(Suit::Clubs, 9),    // dealer
//!     Card::new(Suit::Spades, 13),  // player
//!     Card::new(Suit::Hearts, 12),  // player
//!     Card::new(Suit::Hearts, 5),   // dealer draw
//! ])
//! .unwrap();
//! let mut round = Round::new(5000, deck);
//! round.bet(100).unwrap();
//! round.deal().unwrap();
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//! let result = round.settle().unwrap();
//! assert_eq!(result.bankroll, 4900);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DeckError, RoundError, ShowdownError, TableError,
};
pub use game::{Round, RoundEnd, RoundState};
pub use hand::Hand;
pub use options::SessionOptions;
pub use result::{Outcome, RoundResult};
pub use session::{Session, SessionEnd};
pub use table::{BetInput, Move, Table, TableEvent};
