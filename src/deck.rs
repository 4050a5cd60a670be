//! Deck generation and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// Ranks in the order they are laid out within a suit: 2..=10, J, Q, K, A.
const RANK_ORDER: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 1];

/// The shoe for a single round: one 52-card deck.
///
/// Cards are drawn from the top and never put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in suit order without shuffling.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in RANK_ORDER {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a full deck and shuffles it with the given random source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in order.
    ///
    /// Useful for stacking the deck in tests and replays. The draws may be
    /// any subset of a single deck.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more than [`DECK_SIZE`] draws or a card
    /// appears twice.
    pub fn from_draws(draws: &[Card]) -> Result<Self, DeckError> {
        if draws.len() > DECK_SIZE {
            return Err(DeckError::TooManyCards(draws.len()));
        }

        for (index, card) in draws.iter().enumerate() {
            if draws[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Draws the top card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
