use crate::error::{BetError, DealError};

use super::{Round, RoundState};

impl Round {
    /// Places the bet for this round.
    ///
    /// The bet may be replaced any number of times before [`Round::deal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in betting state, the bet is zero,
    /// or the bet exceeds the bankroll.
    pub const fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !matches!(self.state, RoundState::Betting) {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;

        Ok(())
    }

    /// Deals two cards to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in betting state, no bet has been
    /// placed, or there are fewer than four cards in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }

        if self.bet == 0 {
            return Err(DealError::NoBet);
        }

        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::NotEnoughCards)?;
            self.player.add_card(card);
        }

        tracing::debug!(
            bet = self.bet,
            player_value = self.player.value(),
            "initial cards dealt"
        );

        self.state = RoundState::PlayerTurn;

        Ok(())
    }
}
