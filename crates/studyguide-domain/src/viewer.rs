//! Flashcard viewer state machine
//!
//! Presents a deck one card at a time. The viewer only tracks state; the CLI
//! and the HTML export decide how a card is drawn.
//!
//! Transitions:
//! - `flip`: toggle front/back without moving
//! - `next` / `previous`: move one card and show its front face
//! - `load`: replace the deck and rewind to the first card
//!
//! Moving past either end of the deck is a no-op.

use crate::flashcard::Flashcard;

/// Which side of the current card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Term side
    Front,
    /// Definition side
    Back,
}

/// Stateful one-card-at-a-time viewer over a deck
///
/// Invariant: `current_index < deck.len()` whenever the deck is non-empty.
///
/// # Examples
///
/// ```
/// use studyguide_domain::{CardFace, Flashcard, FlashcardViewer};
///
/// let deck = vec![
///     Flashcard::new("Atom", "Smallest unit of an element").unwrap(),
///     Flashcard::new("Ion", "Charged atom").unwrap(),
/// ];
/// let mut viewer = FlashcardViewer::new(deck);
/// assert_eq!(viewer.counter(), Some((1, 2)));
///
/// viewer.flip();
/// assert_eq!(viewer.face(), CardFace::Back);
///
/// assert!(viewer.next());
/// assert_eq!(viewer.face(), CardFace::Front);
/// assert!(!viewer.next());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlashcardViewer {
    deck: Vec<Flashcard>,
    current_index: usize,
    revealed: bool,
}

impl FlashcardViewer {
    /// Create a viewer positioned on the first card's front face
    pub fn new(deck: Vec<Flashcard>) -> Self {
        Self {
            deck,
            current_index: 0,
            revealed: false,
        }
    }

    /// Replace the deck and rewind to the first card
    pub fn load(&mut self, deck: Vec<Flashcard>) {
        self.deck = deck;
        self.current_index = 0;
        self.revealed = false;
    }

    /// The deck being shown
    pub fn deck(&self) -> &[Flashcard] {
        &self.deck
    }

    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Zero-based position in the deck
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The card under the cursor, or `None` for an empty deck
    pub fn current(&self) -> Option<&Flashcard> {
        self.deck.get(self.current_index)
    }

    /// Side currently facing the user
    pub fn face(&self) -> CardFace {
        if self.revealed {
            CardFace::Back
        } else {
            CardFace::Front
        }
    }

    /// Text on the visible side of the current card
    pub fn visible_text(&self) -> Option<&str> {
        self.current().map(|card| match self.face() {
            CardFace::Front => card.term.as_str(),
            CardFace::Back => card.definition.as_str(),
        })
    }

    /// One-based position and deck size, e.g. `(3, 10)` for "3 / 10"
    pub fn counter(&self) -> Option<(usize, usize)> {
        if self.deck.is_empty() {
            None
        } else {
            Some((self.current_index + 1, self.deck.len()))
        }
    }

    /// Whether "Previous" is enabled
    pub fn can_previous(&self) -> bool {
        !self.deck.is_empty() && self.current_index > 0
    }

    /// Whether "Next" is enabled
    pub fn can_next(&self) -> bool {
        !self.deck.is_empty() && self.current_index < self.deck.len() - 1
    }

    /// Toggle between term and definition
    ///
    /// Does nothing on an empty deck.
    pub fn flip(&mut self) {
        if !self.deck.is_empty() {
            self.revealed = !self.revealed;
        }
    }

    /// Advance one card. Returns `false` (and leaves state untouched) at the last card.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current_index += 1;
        self.revealed = false;
        true
    }

    /// Step back one card. Returns `false` (and leaves state untouched) at the first card.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.current_index -= 1;
        self.revealed = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn deck(size: usize) -> Vec<Flashcard> {
        (0..size)
            .map(|i| Flashcard::new(format!("term {}", i), format!("definition {}", i)).unwrap())
            .collect()
    }

    #[test]
    fn test_starts_on_front_of_first_card() {
        let viewer = FlashcardViewer::new(deck(3));
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.face(), CardFace::Front);
        assert_eq!(viewer.visible_text(), Some("term 0"));
        assert_eq!(viewer.counter(), Some((1, 3)));
    }

    #[test]
    fn test_flip_reveals_definition_without_moving() {
        let mut viewer = FlashcardViewer::new(deck(3));
        viewer.flip();
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.visible_text(), Some("definition 0"));
        viewer.flip();
        assert_eq!(viewer.visible_text(), Some("term 0"));
    }

    #[test]
    fn test_navigation_resets_reveal() {
        let mut viewer = FlashcardViewer::new(deck(3));
        viewer.flip();
        assert!(viewer.next());
        assert_eq!(viewer.face(), CardFace::Front);

        viewer.flip();
        assert!(viewer.previous());
        assert_eq!(viewer.face(), CardFace::Front);
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut viewer = FlashcardViewer::new(deck(2));
        assert!(!viewer.can_previous());
        assert!(!viewer.previous());
        assert_eq!(viewer.current_index(), 0);

        assert!(viewer.next());
        viewer.flip();
        assert!(!viewer.can_next());
        assert!(!viewer.next());
        assert_eq!(viewer.current_index(), 1);
        // A refused move leaves the reveal flag alone
        assert_eq!(viewer.face(), CardFace::Back);
    }

    #[test]
    fn test_empty_deck_shows_nothing() {
        let mut viewer = FlashcardViewer::new(Vec::new());
        assert!(viewer.is_empty());
        assert!(viewer.current().is_none());
        assert!(viewer.visible_text().is_none());
        assert!(viewer.counter().is_none());
        assert!(!viewer.next());
        assert!(!viewer.previous());
        viewer.flip();
        assert_eq!(viewer.face(), CardFace::Front);
    }

    #[test]
    fn test_load_rewinds() {
        let mut viewer = FlashcardViewer::new(deck(4));
        viewer.next();
        viewer.next();
        viewer.flip();

        viewer.load(deck(2));
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.face(), CardFace::Front);
        assert_eq!(viewer.counter(), Some((1, 2)));
    }

    proptest! {
        #[test]
        fn prop_next_walks_to_last_card(size in 1usize..40, extra in 0usize..10) {
            let mut viewer = FlashcardViewer::new(deck(size));
            for _ in 0..size - 1 {
                prop_assert!(viewer.next());
            }
            prop_assert_eq!(viewer.current_index(), size - 1);
            for _ in 0..extra {
                prop_assert!(!viewer.next());
            }
            prop_assert_eq!(viewer.current_index(), size - 1);
        }

        #[test]
        fn prop_previous_walks_back_to_first(size in 1usize..40, extra in 0usize..10) {
            let mut viewer = FlashcardViewer::new(deck(size));
            while viewer.next() {}
            for _ in 0..size - 1 {
                prop_assert!(viewer.previous());
            }
            prop_assert_eq!(viewer.current_index(), 0);
            for _ in 0..extra {
                prop_assert!(!viewer.previous());
            }
            prop_assert_eq!(viewer.current_index(), 0);
        }
    }
}
