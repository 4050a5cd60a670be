//! The presentation interface the round engine talks to.
//!
//! A [`Table`] renders the hands, collects the player's decisions and shows
//! narrative messages. Input validation lives here: implementations keep
//! asking until they have a usable answer, so the engine only ever sees
//! well-formed bets and moves.

use crate::card::Card;
use crate::error::TableError;
use crate::hand::Hand;
use crate::result::RoundResult;

/// Answer to a bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetInput {
    /// A bet within the requested range.
    Amount(usize),
    /// The player asked to leave the table.
    Quit,
}

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Raise the bet, take exactly one card, then stand.
    DoubleDown,
}

/// Something worth telling the player about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// The session has started.
    Welcome,
    /// Money available before the next bet.
    Bankroll(usize),
    /// The bet for this round.
    BetPlaced(usize),
    /// The bet after doubling down.
    BetIncreased(usize),
    /// The player drew a card.
    PlayerDrew(Card),
    /// The dealer is about to draw.
    DealerHits,
    /// The round was settled.
    Settled(RoundResult),
    /// The player quit.
    Quit,
    /// The bankroll is exhausted.
    Broke,
}

/// Renders the game and collects player input.
pub trait Table {
    /// Asks for a bet between 1 and `max_bet` inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn prompt_bet(&mut self, max_bet: usize) -> Result<BetInput, TableError>;

    /// Asks for the next move.
    ///
    /// [`Move::DoubleDown`] may only be returned when
    /// [`Hand::can_double_down`] holds for `spare_funds`.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn prompt_move(&mut self, hand: &Hand, spare_funds: usize) -> Result<Move, TableError>;

    /// Shows both hands. While `reveal_dealer` is false the dealer's first
    /// card is face down and the dealer's total is not shown.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    fn render_hands(
        &mut self,
        player: &Hand,
        dealer: &Hand,
        reveal_dealer: bool,
    ) -> Result<(), TableError>;

    /// Waits until the player is ready to continue.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn acknowledge(&mut self) -> Result<(), TableError>;

    /// Shows a message about the game.
    ///
    /// # Errors
    ///
    /// Returns an error if output cannot be written.
    fn report(&mut self, event: &TableEvent) -> Result<(), TableError>;
}
