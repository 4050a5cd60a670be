//! The session loop that carries the bankroll from round to round.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::game::{Round, RoundEnd};
use crate::options::SessionOptions;
use crate::table::{Table, TableEvent};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player entered the quit token.
    Quit,
    /// The bankroll ran out.
    Broke,
}

/// A blackjack session: the player's bankroll and the shuffling source.
///
/// Every round gets a freshly shuffled deck drawn from the session's seeded
/// random number generator, so a seed fully determines the deals.
#[derive(Debug, Clone)]
pub struct Session {
    /// Options the session was created with.
    options: SessionOptions,
    /// Player money.
    bankroll: usize,
    /// Number of rounds settled so far.
    rounds_played: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Session, SessionOptions};
    ///
    /// let session = Session::new(SessionOptions::default(), 42);
    /// assert_eq!(session.bankroll(), 5000);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self {
            options,
            bankroll: options.starting_bankroll,
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the options the session was created with.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns whether the player has no money left to bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.bankroll == 0
    }

    /// Plays one round with a freshly shuffled deck and applies its result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round fails; the bankroll is left untouched.
    pub fn play_round<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<RoundEnd, RoundError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.play_round_with_deck(table, deck)
    }

    /// Plays one round dealt from `deck` and applies its result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round fails; the bankroll is left untouched.
    pub fn play_round_with_deck<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
        deck: Deck,
    ) -> Result<RoundEnd, RoundError> {
        let end = Round::new(self.bankroll, deck).play(table)?;

        if let RoundEnd::Settled(result) = end {
            self.bankroll = result.bankroll;
            self.rounds_played += 1;
        }

        Ok(end)
    }

    /// Plays rounds until the player quits or runs out of money.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails.
    pub fn run<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<SessionEnd, RoundError> {
        table.report(&TableEvent::Welcome)?;

        loop {
            if self.is_broke() {
                tracing::info!(rounds = self.rounds_played, "bankroll exhausted");
                table.report(&TableEvent::Broke)?;
                return Ok(SessionEnd::Broke);
            }

            table.report(&TableEvent::Bankroll(self.bankroll))?;

            if self.play_round(table)? == RoundEnd::Quit {
                tracing::info!(
                    rounds = self.rounds_played,
                    bankroll = self.bankroll,
                    "player quit"
                );
                table.report(&TableEvent::Quit)?;
                return Ok(SessionEnd::Quit);
            }
        }
    }
}
