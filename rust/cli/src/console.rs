//! Terminal implementation of the engine's [`Table`].
//!
//! Game text goes to `out`; complaints about unreadable answers go to `err`
//! and the prompt is repeated until the player types something usable.

use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_choice};
use blackjack_engine::errors::GameError;
use blackjack_engine::participant::Participant;
use blackjack_engine::table::{Choice, RoundEvent, Table};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Hit or Stand (h/s)? ";

pub struct ConsoleTable<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    // the newline echoed after an answer already separates the next section
    follows_answer: bool,
}

impl<'a> ConsoleTable<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            input,
            out,
            err,
            follows_answer: false,
        }
    }

    fn section_break(&mut self) -> std::io::Result<()> {
        if std::mem::take(&mut self.follows_answer) {
            return Ok(());
        }
        writeln!(self.out)
    }

    fn write_event(&mut self, event: RoundEvent<'_>) -> std::io::Result<()> {
        match event {
            RoundEvent::Welcome => writeln!(self.out, "Welcome to Blackjack!"),
            RoundEvent::CardDrawn { who, card } => {
                writeln!(self.out, "{} draws a card: {}", who.name(), card)
            }
            RoundEvent::Hand(who) => {
                self.section_break()?;
                writeln!(
                    self.out,
                    "{} hand: {}",
                    who.name(),
                    ui::format_cards(who.hand())
                )?;
                writeln!(self.out, "Score: {}", who.score())
            }
            RoundEvent::TurnStarted(who) => {
                self.section_break()?;
                writeln!(self.out, "{}'s turn", who.name())
            }
            RoundEvent::Stands(who) => {
                self.follows_answer = false;
                writeln!(self.out, "{} Stands", who.name())
            }
            RoundEvent::Bust(_) => {
                self.follows_answer = false;
                writeln!(self.out, "Bust!")
            }
        }
    }
}

fn console_error(e: std::io::Error) -> GameError {
    GameError::Console(e.to_string())
}

impl Table for ConsoleTable<'_> {
    fn choose(&mut self, _player: &Participant) -> Result<Choice, GameError> {
        loop {
            write!(self.out, "{}", PROMPT).map_err(console_error)?;
            self.out.flush().map_err(console_error)?;

            let Some(line) = read_stdin_line(self.input) else {
                return Err(GameError::InputClosed);
            };

            match parse_choice(&line) {
                ParseResult::Choice(choice) => {
                    writeln!(self.out).map_err(console_error)?;
                    self.follows_answer = true;
                    return Ok(choice);
                }
                ParseResult::Invalid(msg) => {
                    tracing::debug!(input = %line, "rejected prompt input");
                    ui::write_error(self.err, &msg).map_err(console_error)?;
                }
            }
        }
    }

    fn announce(&mut self, event: RoundEvent<'_>) -> Result<(), GameError> {
        self.write_event(event).map_err(console_error)
    }
}
