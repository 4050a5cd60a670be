//! Error types for round and table operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when stacking a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards than a single deck holds.
    #[error("a deck holds at most 52 cards, got {0}")]
    TooManyCards(usize),
    /// The same card was given twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Additional bet is zero or larger than allowed.
    #[error("additional bet must be between 1 and {max}")]
    InvalidDoubleAmount {
        /// Largest additional bet allowed.
        max: usize,
    },
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors raised by a [`Table`](crate::table::Table) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The input stream ended while waiting for the player.
    #[error("input closed")]
    InputClosed,
    /// Reading input or writing output failed.
    #[error("i/o error: {kind}")]
    Io {
        /// What went wrong.
        kind: IoErrorKind,
    },
}

/// Kind of an i/o failure carried by [`TableError::Io`].
#[cfg(feature = "std")]
pub type IoErrorKind = std::io::ErrorKind;

/// Kind of an i/o failure carried by [`TableError::Io`].
#[cfg(not(feature = "std"))]
pub type IoErrorKind = &'static str;

#[cfg(feature = "std")]
impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        tracing::warn!(%err, "table i/o failed");
        Self::Io { kind: err.kind() }
    }
}

/// Errors that can end a round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The bet returned by the table was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// The table failed to render or collect input.
    #[error(transparent)]
    Table(#[from] TableError),
}
