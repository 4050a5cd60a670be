//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the bet; no cards dealt yet.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final and the bet can be settled.
    Settlement,
    /// The round has been settled.
    Done,
}

/// How a round driven through a [`Table`](crate::table::Table) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The round was played out and settled.
    Settled(crate::result::RoundResult),
    /// The player quit before the round could be settled.
    Quit,
}
