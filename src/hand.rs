//! Hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u16 = 21;

fn card_points(rank: u8) -> u16 {
    match rank {
        2..=10 => u16::from(rank),
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let (points, aces) = cards.iter().fold((0u16, 0u16), |(points, aces), card| {
        if card.is_ace() {
            (points, aces.saturating_add(1))
        } else {
            (points.saturating_add(card_points(card.rank)), aces)
        }
    });

    // Every ace starts at 1; promote to 11 one at a time while it fits.
    let hard = points.saturating_add(aces);
    let value = (0..aces).fold(hard, |value, _| {
        if value <= BLACKJACK - 10 {
            value + 10
        } else {
            value
        }
    });

    (value, value != hard)
}

/// Evaluates a set of cards under blackjack ace rules.
///
/// Returns the highest total not exceeding 21 obtainable by counting each
/// ace as 1 or 11. If every choice busts, all aces count as 1. An empty set
/// of cards is worth 0.
///
/// ```
/// use twentyone::{Card, Suit, hand::evaluate};
///
/// let cards = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 13)];
/// assert_eq!(evaluate(&cards), 21);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand may double down given the player's
    /// uncommitted funds.
    ///
    /// Doubling is only offered on the first decision, i.e. with exactly two
    /// cards, and only when some money is left beyond the current bet.
    #[must_use]
    pub fn can_double_down(&self, spare_funds: usize) -> bool {
        self.cards.len() == 2 && spare_funds > 0
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
