//! Shared fixtures for engine integration tests.
//!
//! `ScriptedTable` feeds a fixed list of choices to the engine and keeps a
//! plain-text log of every announced event, so tests can assert on what was
//! drawn and which turns ran.
#![allow(dead_code)]

use std::collections::VecDeque;

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::errors::GameError;
use blackjack_engine::participant::Participant;
use blackjack_engine::table::{Choice, RoundEvent, Table};

#[derive(Debug, Default)]
pub struct ScriptedTable {
    choices: VecDeque<Choice>,
    pub prompts: usize,
    pub log: Vec<String>,
}

impl ScriptedTable {
    pub fn new(choices: &[Choice]) -> Self {
        Self {
            choices: choices.iter().copied().collect(),
            prompts: 0,
            log: Vec::new(),
        }
    }

    pub fn unused_choices(&self) -> usize {
        self.choices.len()
    }

    pub fn draws_by(&self, name: &str) -> usize {
        let prefix = format!("draw {name} ");
        self.log.iter().filter(|l| l.starts_with(&prefix)).count()
    }

    pub fn saw(&self, line: &str) -> bool {
        self.log.iter().any(|l| l == line)
    }
}

impl Table for ScriptedTable {
    fn choose(&mut self, _player: &Participant) -> Result<Choice, GameError> {
        self.prompts += 1;
        self.choices.pop_front().ok_or(GameError::InputClosed)
    }

    fn announce(&mut self, event: RoundEvent<'_>) -> Result<(), GameError> {
        let line = match event {
            RoundEvent::Welcome => "welcome".to_string(),
            RoundEvent::CardDrawn { who, card } => format!("draw {} {}", who.name(), card),
            RoundEvent::Hand(p) => format!("hand {} {}", p.name(), p.score()),
            RoundEvent::TurnStarted(p) => format!("turn {}", p.name()),
            RoundEvent::Stands(p) => format!("stands {}", p.name()),
            RoundEvent::Bust(p) => format!("bust {}", p.name()),
        };
        self.log.push(line);
        Ok(())
    }
}

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}
