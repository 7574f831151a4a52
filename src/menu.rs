#![cfg(feature = "std")]

//! Text-mode main menu. This is the presentation layer: it only knows how to
//! start a [`Session`] and show lines, nothing about the board itself.

use std::io::BufRead;
use std::string::String;

use crate::common::SinkError;
use crate::session::{OutputSink, Session};

pub const MENU_WINDOW_TITLE: &str = "Chess Game Menu";
pub const MENU_TITLE: &str = "Chess Game";
pub const MENU_FOOTER: &str = "Created by José Brito (josevbrito)";
pub const GAME_STARTED_MESSAGE: &str = "Game started!";
pub const RULES_MESSAGE: &str = "Displaying rules!";

/// A choice entered at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Rules,
    Quit,
}

impl MenuChoice {
    /// Parse a menu entry, ignoring case and surrounding whitespace. The
    /// single letters `s` and `r` are accepted as shortcuts.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "s" | "start" => Some(MenuChoice::Start),
            "2" | "r" | "rules" => Some(MenuChoice::Rules),
            "q" | "quit" | "exit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub struct Menu<S: OutputSink> {
    sink: S,
    sessions_started: usize,
}

impl<S: OutputSink> Menu<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            sessions_started: 0,
        }
    }

    /// Print the menu.
    pub fn show(&mut self) -> Result<(), SinkError> {
        for line in [
            MENU_WINDOW_TITLE,
            "",
            MENU_TITLE,
            "",
            "1) Start",
            "2) Rules",
            "q) Quit",
            "",
            MENU_FOOTER,
        ] {
            self.sink.emit(line)?;
        }
        Ok(())
    }

    /// Read choices from `input` until the user quits or input ends.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> anyhow::Result<()> {
        self.show()?;
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                log::debug!("menu input closed");
                break;
            }
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }
            match MenuChoice::parse(entry) {
                Some(choice) => {
                    if !self.select(choice)? {
                        break;
                    }
                }
                None => {
                    self.sink.emit(&std::format!("Unknown choice: {}", entry))?;
                    self.show()?;
                }
            }
        }
        Ok(())
    }

    /// Act on one choice. Returns `false` once the menu should close.
    pub fn select(&mut self, choice: MenuChoice) -> anyhow::Result<bool> {
        log::debug!("menu choice: {:?}", choice);
        match choice {
            MenuChoice::Start => {
                self.sink.emit(GAME_STARTED_MESSAGE)?;
                Session::new(&mut self.sink).start()?;
                self.sessions_started += 1;
                Ok(true)
            }
            MenuChoice::Rules => {
                self.sink.emit(RULES_MESSAGE)?;
                Ok(true)
            }
            MenuChoice::Quit => Ok(false),
        }
    }

    /// Number of sessions launched from this menu.
    pub fn sessions_started(&self) -> usize {
        self.sessions_started
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
