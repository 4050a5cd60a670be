//! Session configuration options.

/// Default money the player starts with.
pub const DEFAULT_STARTING_BANKROLL: usize = 5000;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::SessionOptions;
///
/// let options = SessionOptions::default().with_starting_bankroll(250);
/// assert_eq!(options.starting_bankroll, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Money the player starts the session with.
    pub starting_bankroll: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: DEFAULT_STARTING_BANKROLL,
        }
    }
}

impl SessionOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_bankroll(100);
    /// assert_eq!(options.starting_bankroll, 100);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }
}
