use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Returns whether the player may double down right now.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        self.state == RoundState::PlayerTurn && self.player.can_double_down(self.spare_funds())
    }

    /// Returns the largest additional bet allowed when doubling down.
    #[must_use]
    pub fn max_double(&self) -> usize {
        self.bet.min(self.spare_funds())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the hand goes over 21 the player's turn ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);
        tracing::debug!(%card, value = self.player.value(), "player hits");

        if self.player.is_bust() {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(value = self.player.value(), "player stands");
        self.state = RoundState::DealerTurn;

        Ok(())
    }

    /// Player action: Double down (raise the bet by `extra`, receive one
    /// card, then stand).
    ///
    /// `extra` must be between 1 and [`Round::max_double`]. The turn ends
    /// whether or not the drawn card busts the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state, the hand is
    /// not eligible to double down, `extra` is out of range, or the deck is
    /// empty.
    pub fn double_down(&mut self, extra: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !self.can_double_down() {
            return Err(ActionError::CannotDouble);
        }

        let max = self.max_double();
        if extra == 0 || extra > max {
            return Err(ActionError::InvalidDoubleAmount { max });
        }

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.bet += extra;
        self.player.add_card(card);
        tracing::debug!(
            %card,
            bet = self.bet,
            value = self.player.value(),
            "player doubles down"
        );

        self.state = RoundState::DealerTurn;

        Ok(card)
    }
}
