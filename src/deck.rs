//! The single-deck shoe.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{COPIES_PER_RANK, Card, DECK_SIZE, Rank};
use crate::error::DeckError;

/// An ordered deck of cards. Ordinary draws take the last card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck.
    ///
    /// Cards are grouped by rank in the order A, 2, ..., 10, J, Q, K, four
    /// copies each.
    ///
    /// ```
    /// use bjterm::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for _ in 0..COPIES_PER_RANK {
                cards.push(Card::new(rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards.
    ///
    /// The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Draws the first card, scanning from the front, whose value equals
    /// `value`. Falls back to [`Deck::draw`] when no card matches.
    ///
    /// The scan is linear and always takes the earliest match so that the
    /// result is deterministic for a given deck order. Ordinary draws come
    /// from the back, so the random tail is left untouched when a match is
    /// found.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw_matching_value(&mut self, value: u8) -> Result<Card, DeckError> {
        match self.cards.iter().position(|card| card.value() == value) {
            Some(index) => Ok(self.cards.remove(index)),
            None => self.draw(),
        }
    }

    /// Returns the cards left in the deck, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns how many cards with the given nominal value are left.
    #[must_use]
    pub fn count_value(&self, value: u8) -> usize {
        self.cards.iter().filter(|card| card.value() == value).count()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut first = Deck::new();
        let mut second = Deck::new();
        first.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
        second.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_keeps_rank_multiplicity() {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
        for rank in Rank::ALL {
            let copies = deck.cards().iter().filter(|c| c.rank() == rank).count();
            assert_eq!(copies, COPIES_PER_RANK);
        }
    }

    #[test]
    fn matching_draw_takes_earliest_match() {
        let mut deck = Deck::from_cards(alloc::vec![
            Card::new(Rank::Two),
            Card::new(Rank::Queen),
            Card::new(Rank::Ten),
            Card::new(Rank::Five),
        ]);
        assert_eq!(deck.draw_matching_value(10), Ok(Card::new(Rank::Queen)));
        assert_eq!(
            deck.cards(),
            &[
                Card::new(Rank::Two),
                Card::new(Rank::Ten),
                Card::new(Rank::Five)
            ]
        );
    }

    #[test]
    fn empty_deck_errors() {
        let mut deck = Deck::from_cards(Vec::new());
        assert_eq!(deck.draw(), Err(DeckError::Empty));
        assert_eq!(deck.draw_matching_value(10), Err(DeckError::Empty));
    }
}
