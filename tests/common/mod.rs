//! Shared test doubles.

#![allow(dead_code)]

use std::collections::VecDeque;

use twentyone::{BetInput, Card, Hand, Move, Suit, Table, TableError, TableEvent};

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// A table that replays canned answers and records everything it is shown.
#[derive(Debug, Default)]
pub struct ScriptedTable {
    pub bets: VecDeque<BetInput>,
    pub moves: VecDeque<Move>,
    /// `max_bet` of every bet prompt.
    pub bet_prompts: Vec<usize>,
    /// `(cards in hand, spare funds)` of every move prompt.
    pub move_prompts: Vec<(usize, usize)>,
    /// `reveal_dealer` of every render.
    pub renders: Vec<bool>,
    pub events: Vec<TableEvent>,
    pub acknowledgements: usize,
}

impl ScriptedTable {
    pub fn new(bets: &[BetInput], moves: &[Move]) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Table for ScriptedTable {
    fn prompt_bet(&mut self, max_bet: usize) -> Result<BetInput, TableError> {
        self.bet_prompts.push(max_bet);
        self.bets.pop_front().ok_or(TableError::InputClosed)
    }

    fn prompt_move(&mut self, hand: &Hand, spare_funds: usize) -> Result<Move, TableError> {
        self.move_prompts.push((hand.len(), spare_funds));
        self.moves.pop_front().ok_or(TableError::InputClosed)
    }

    fn render_hands(
        &mut self,
        _player: &Hand,
        _dealer: &Hand,
        reveal_dealer: bool,
    ) -> Result<(), TableError> {
        self.renders.push(reveal_dealer);
        Ok(())
    }

    fn acknowledge(&mut self) -> Result<(), TableError> {
        self.acknowledgements += 1;
        Ok(())
    }

    fn report(&mut self, event: &TableEvent) -> Result<(), TableError> {
        self.events.push(*event);
        Ok(())
    }
}

/// A table that plays a simple fixed strategy forever.
#[derive(Debug, Default)]
pub struct AutoTable {
    pub settled: usize,
}

impl Table for AutoTable {
    fn prompt_bet(&mut self, max_bet: usize) -> Result<BetInput, TableError> {
        Ok(BetInput::Amount(max_bet.div_ceil(2)))
    }

    fn prompt_move(&mut self, hand: &Hand, spare_funds: usize) -> Result<Move, TableError> {
        let value = hand.value();
        if hand.can_double_down(spare_funds) && (9..=11).contains(&value) {
            Ok(Move::DoubleDown)
        } else if value < 17 {
            Ok(Move::Hit)
        } else {
            Ok(Move::Stand)
        }
    }

    fn render_hands(&mut self, _: &Hand, _: &Hand, _: bool) -> Result<(), TableError> {
        Ok(())
    }

    fn acknowledge(&mut self) -> Result<(), TableError> {
        Ok(())
    }

    fn report(&mut self, event: &TableEvent) -> Result<(), TableError> {
        if matches!(event, TableEvent::Settled(_)) {
            self.settled += 1;
        }
        Ok(())
    }
}
