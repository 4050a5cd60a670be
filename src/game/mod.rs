//! Round engine and state management.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod bet;
mod dealer;
mod play;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{RoundEnd, RoundState};

/// A single round of blackjack between the player and the dealer.
///
/// The round owns its deck for its whole lifetime and is discarded once
/// settled. Each step checks the current [`RoundState`], so the methods can
/// be driven one by one, or all at once through [`Round::play`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards still in the deck.
    deck: Deck,
    /// Money available when the round started.
    bankroll: usize,
    /// Current bet (0 before betting).
    bet: usize,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Creates a round that deals from `deck`.
    #[must_use]
    pub const fn new(bankroll: usize, deck: Deck) -> Self {
        Self {
            deck,
            bankroll,
            bet: 0,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Betting,
        }
    }

    /// Creates a round with a freshly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(bankroll: usize, rng: &mut R) -> Self {
        Self::new(bankroll, Deck::shuffled(rng))
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the money available when the round started.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet_amount(&self) -> usize {
        self.bet
    }

    /// Returns the money not yet committed to the bet.
    #[must_use]
    pub const fn spare_funds(&self) -> usize {
        self.bankroll.saturating_sub(self.bet)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
