//! Terminal implementation of [`Table`].

use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::error::TableError;
use crate::hand::Hand;
use crate::result::Outcome;
use crate::table::{BetInput, Move, Table, TableEvent};

const RULES: &str = "\
Blackjack, by Al Sweigart al@inventwithpython.com

Rules:
    Try to get as close to 21 without going over.
    Kings, Queens, and Jacks are worth 10 points.
    Aces are worth 1 or 11 points.
    Cards 2 through 10 are worth their face value.
    (H)it to take another card.
    (S)tand to stop taking cards.
    On your first play, you can (D)ouble down to increase your bet
    but must hit exactly one more time before standing.
    In case of a tie, the bet is returned to the player.
    The dealer stops hitting at 17.";

/// Token that ends the session at a bet prompt.
const QUIT_TOKEN: &str = "QUIT";

/// A [`Table`] that reads answers line by line and writes plain text.
///
/// Generic over its streams so it can run against the terminal or against
/// in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Creates a console on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one trimmed line.
    fn prompt_line(&mut self, prompt: &str) -> Result<String, TableError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TableError::InputClosed);
        }

        Ok(line.trim().to_uppercase())
    }

    fn write_cards(&mut self, cards: &[Card], hide_first: bool) -> Result<(), TableError> {
        let mut rows = [String::new(), String::new(), String::new(), String::new()];

        for (index, card) in cards.iter().enumerate() {
            rows[0].push_str("____  ");
            if hide_first && index == 0 {
                rows[1].push_str("|## | ");
                rows[2].push_str("|###| ");
                rows[3].push_str("|_##| ");
            } else {
                let rank = card.rank_label();
                rows[1].push_str(&format!("|{rank:<2} | "));
                rows[2].push_str(&format!("| {} | ", card.suit.symbol()));
                rows[3].push_str(&format!("|_{rank:_>2}| "));
            }
        }

        for row in rows {
            writeln!(self.output, "{}", row.trim_end())?;
        }

        Ok(())
    }

    fn write_outcome(&mut self, outcome: Outcome, bet: usize) -> Result<(), TableError> {
        match outcome {
            Outcome::DealerBust => writeln!(self.output, "Dealer busts! You win ${bet}!")?,
            Outcome::PlayerBust | Outcome::DealerHigher => writeln!(self.output, "You lost!")?,
            Outcome::PlayerHigher => writeln!(self.output, "You won ${bet}!")?,
            Outcome::Push => writeln!(self.output, "It's a tie, the bet is returned to you.")?,
        }

        Ok(())
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn prompt_bet(&mut self, max_bet: usize) -> Result<BetInput, TableError> {
        loop {
            writeln!(self.output, "How much do you bet? (1-{max_bet}, or {QUIT_TOKEN})")?;
            let input = self.prompt_line("> ")?;

            if input == QUIT_TOKEN {
                return Ok(BetInput::Quit);
            }

            if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }

            match input.parse::<usize>() {
                Ok(bet) if (1..=max_bet).contains(&bet) => return Ok(BetInput::Amount(bet)),
                _ => {}
            }
        }
    }

    fn prompt_move(&mut self, hand: &Hand, spare_funds: usize) -> Result<Move, TableError> {
        let can_double = hand.can_double_down(spare_funds);
        let prompt = if can_double {
            "(H)it, (S)tand, (D)ouble down> "
        } else {
            "(H)it, (S)tand> "
        };

        loop {
            match self.prompt_line(prompt)?.as_str() {
                "H" => return Ok(Move::Hit),
                "S" => return Ok(Move::Stand),
                "D" if can_double => return Ok(Move::DoubleDown),
                _ => {}
            }
        }
    }

    fn render_hands(
        &mut self,
        player: &Hand,
        dealer: &Hand,
        reveal_dealer: bool,
    ) -> Result<(), TableError> {
        writeln!(self.output)?;
        if reveal_dealer {
            writeln!(self.output, "DEALER: {}", dealer.value())?;
        } else {
            writeln!(self.output, "DEALER: ???")?;
        }
        self.write_cards(dealer.cards(), !reveal_dealer)?;

        writeln!(self.output, "PLAYER: {}", player.value())?;
        self.write_cards(player.cards(), false)?;
        writeln!(self.output)?;

        Ok(())
    }

    fn acknowledge(&mut self) -> Result<(), TableError> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TableError::InputClosed);
        }
        writeln!(self.output, "\n\n")?;

        Ok(())
    }

    fn report(&mut self, event: &TableEvent) -> Result<(), TableError> {
        match *event {
            TableEvent::Welcome => writeln!(self.output, "{RULES}\n")?,
            TableEvent::Bankroll(money) => writeln!(self.output, "Money: {money}")?,
            TableEvent::BetPlaced(bet) => writeln!(self.output, "Bet: {bet}")?,
            TableEvent::BetIncreased(bet) => writeln!(self.output, "Bet increased to {bet}.")?,
            TableEvent::PlayerDrew(card) => writeln!(
                self.output,
                "You drew a {} of {}.",
                card.rank_label(),
                card.suit.symbol()
            )?,
            TableEvent::DealerHits => writeln!(self.output, "Dealer hits...")?,
            TableEvent::Settled(result) => self.write_outcome(result.outcome, result.bet)?,
            TableEvent::Quit => writeln!(self.output, "Thanks for playing!")?,
            TableEvent::Broke => {
                writeln!(self.output, "You're broke!")?;
                writeln!(self.output, "Good thing you weren't playing with real money.")?;
                writeln!(self.output, "Thanks for playing!")?;
            }
        }

        self.output.flush()?;

        Ok(())
    }
}
