use core::ops::ControlFlow;

use crate::error::{ActionError, BetError, RoundError};
use crate::table::{BetInput, Move, Table, TableEvent};

use super::{Round, RoundEnd, RoundState};

impl Round {
    /// Plays the whole round through `table`.
    ///
    /// Asks for the bet, deals, runs the player's turn and the dealer's turn,
    /// then settles. Entering the quit token at the bet prompt or the
    /// double-down prompt ends the round without settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the table fails, or if it hands back a bet or move
    /// the round cannot accept.
    pub fn play<T: Table + ?Sized>(mut self, table: &mut T) -> Result<RoundEnd, RoundError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState.into());
        }

        let BetInput::Amount(amount) = table.prompt_bet(self.bankroll)? else {
            return Ok(RoundEnd::Quit);
        };
        self.bet(amount)?;
        self.deal()?;
        table.report(&TableEvent::BetPlaced(self.bet))?;

        if self.player_turn(table)?.is_break() {
            return Ok(RoundEnd::Quit);
        }

        if self.player.is_bust() {
            // Player already lost; the dealer keeps the initial two cards.
            self.dealer_draw()?;
        } else {
            while self.dealer_draw()?.is_some() {
                table.report(&TableEvent::DealerHits)?;
                table.render_hands(&self.player, &self.dealer, false)?;
            }
            table.acknowledge()?;
        }

        table.render_hands(&self.player, &self.dealer, true)?;
        let result = self.settle()?;
        table.report(&TableEvent::Settled(result))?;
        table.acknowledge()?;

        Ok(RoundEnd::Settled(result))
    }

    /// Runs the player's decisions until they stand, double down or bust.
    ///
    /// Breaks if the player quit while doubling down.
    fn player_turn<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<ControlFlow<()>, RoundError> {
        loop {
            table.render_hands(&self.player, &self.dealer, false)?;

            if self.state != RoundState::PlayerTurn {
                break;
            }

            match table.prompt_move(&self.player, self.spare_funds())? {
                Move::Hit => {
                    let card = self.hit()?;
                    table.report(&TableEvent::PlayerDrew(card))?;
                }
                Move::Stand => {
                    self.stand()?;
                    break;
                }
                Move::DoubleDown => {
                    if !self.can_double_down() {
                        return Err(ActionError::CannotDouble.into());
                    }

                    let BetInput::Amount(extra) = table.prompt_bet(self.max_double())? else {
                        return Ok(ControlFlow::Break(()));
                    };
                    let card = self.double_down(extra)?;
                    table.report(&TableEvent::BetIncreased(self.bet))?;
                    table.report(&TableEvent::PlayerDrew(card))?;

                    // A bust is shown once more before the turn ends.
                    if !self.player.is_bust() {
                        break;
                    }
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}
