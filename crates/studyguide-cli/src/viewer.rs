//! Interactive flashcard viewer.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use studyguide_domain::{Flashcard, FlashcardViewer};

/// A key command typed at the viewer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Show the other face of the card
    Flip,
    /// Advance to the next card
    Next,
    /// Go back to the previous card
    Previous,
    /// Show key help
    Help,
    /// Leave the viewer
    Quit,
}

impl ViewerCommand {
    /// Parse one input line. An empty line flips the card.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "" | "f" | "flip" => Some(ViewerCommand::Flip),
            "n" | "next" => Some(ViewerCommand::Next),
            "p" | "prev" | "previous" => Some(ViewerCommand::Previous),
            "?" | "h" | "help" => Some(ViewerCommand::Help),
            "q" | "quit" | "exit" => Some(ViewerCommand::Quit),
            _ => None,
        }
    }

    /// Apply the command to the viewer.
    ///
    /// Returns whether the card on screen changed.
    pub fn apply(self, viewer: &mut FlashcardViewer) -> bool {
        match self {
            ViewerCommand::Flip => {
                viewer.flip();
                !viewer.is_empty()
            }
            ViewerCommand::Next => viewer.next(),
            ViewerCommand::Previous => viewer.previous(),
            ViewerCommand::Help | ViewerCommand::Quit => false,
        }
    }
}

fn print_help(formatter: &Formatter) {
    println!(
        "{}",
        formatter.info("Enter/f flip the card, n next, p previous, ? help, q quit")
    );
}

/// Run the interactive viewer over `deck` until the user quits.
///
/// An empty deck shows no card and returns immediately.
pub fn run_viewer(deck: Vec<Flashcard>, formatter: &Formatter) -> Result<()> {
    let mut viewer = FlashcardViewer::new(deck);
    let Some(card) = formatter.card(&viewer) else {
        println!("{}", formatter.warning("No flashcards to review"));
        return Ok(());
    };

    let mut editor = DefaultEditor::new().map_err(CliError::Readline)?;

    print_help(formatter);
    println!("{}", card);

    loop {
        match editor.readline("card> ") {
            Ok(line) => match ViewerCommand::parse(&line) {
                Some(ViewerCommand::Quit) => break,
                Some(ViewerCommand::Help) => print_help(formatter),
                Some(command) => {
                    if command.apply(&mut viewer) {
                        if let Some(card) = formatter.card(&viewer) {
                            println!("{}", card);
                        }
                    }
                }
                None => {
                    eprintln!(
                        "{}",
                        formatter.error(&format!("Unknown key '{}'. Type ? for help.", line.trim()))
                    );
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::Readline(err)),
        }
    }

    Ok(())
}
