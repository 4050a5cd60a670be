use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// The dealer keeps drawing while below this value.
pub const DEALER_STANDS_ON: u16 = 17;

impl Round {
    /// Returns whether the dealer has to take another card.
    ///
    /// The dealer never draws once the player has busted.
    #[must_use]
    pub fn dealer_must_draw(&self) -> bool {
        self.state == RoundState::DealerTurn
            && !self.player.is_bust()
            && self.dealer.value() < DEALER_STANDS_ON
    }

    /// Dealer draws a single card if the rules require it.
    ///
    /// Returns `Ok(None)` once the dealer is done, at which point the round
    /// moves to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_draw(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if !self.dealer_must_draw() {
            self.state = RoundState::Settlement;
            return Ok(None);
        }

        let card = self.draw().ok_or(ShowdownError::NoCards)?;
        self.dealer.add_card(card);
        tracing::debug!(%card, value = self.dealer.value(), "dealer hits");

        Ok(Some(card))
    }

    /// Dealer plays their hand to completion.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// runs out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        let mut drawn_cards = Vec::new();

        while let Some(card) = self.dealer_draw()? {
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Compares the final hands and settles the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in settlement state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = Outcome::resolve(player_value, dealer_value);
        let net = outcome.net(self.bet);
        let bankroll = self.bankroll.saturating_add_signed(net);

        self.state = RoundState::Done;

        tracing::info!(
            ?outcome,
            bet = self.bet,
            player_value,
            dealer_value,
            bankroll,
            "round settled"
        );

        Ok(RoundResult {
            outcome,
            bet: self.bet,
            player_value,
            dealer_value,
            net,
            bankroll,
        })
    }
}
