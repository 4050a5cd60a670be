//! Round result types for settlement.

use crate::hand::BLACKJACK;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dealer went over 21; player wins.
    DealerBust,
    /// Player went over 21; player loses.
    PlayerBust,
    /// Player is closer to 21; player wins.
    PlayerHigher,
    /// Dealer is closer to 21; player loses.
    DealerHigher,
    /// Tie; the bet is returned.
    Push,
}

impl Outcome {
    /// Decides the round from the final player and dealer values.
    ///
    /// The dealer bust check comes first, then the player bust check, and only
    /// then are the values compared. A busted player therefore loses to any
    /// dealer hand that did not bust, whatever its value.
    #[must_use]
    pub const fn resolve(player_value: u16, dealer_value: u16) -> Self {
        if dealer_value > BLACKJACK {
            Self::DealerBust
        } else if player_value > BLACKJACK {
            Self::PlayerBust
        } else if player_value < dealer_value {
            Self::DealerHigher
        } else if player_value > dealer_value {
            Self::PlayerHigher
        } else {
            Self::Push
        }
    }

    /// Returns whether the player wins.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerHigher)
    }

    /// Returns whether the player loses.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerHigher)
    }

    /// Net change to the bankroll for a bet of `bet`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
    pub const fn net(self, bet: usize) -> isize {
        if self.is_win() {
            bet as isize
        } else if self.is_loss() {
            -(bet as isize)
        } else {
            0
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: Outcome,
    /// The final bet, including any double-down increase.
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Bankroll after settlement.
    pub bankroll: usize,
}
