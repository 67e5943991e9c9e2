//! Hands and hand evaluation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Returns the best total for the given cards.
///
/// Every ace starts at 11. While the total is over 21, aces are lowered to 1
/// one at a time. The result is still over 21 when every ace is already
/// lowered. Totals are summed in `u16`, so even a whole deck (340) is exact.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card.value()));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Returns whether the cards form a natural blackjack: two cards worth 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == BLACKJACK
}

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards. Starts with the two dealt cards and only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    seat: Seat,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the two dealt cards.
    #[must_use]
    pub fn dealt(seat: Seat, first: Card, second: Card) -> Self {
        Self {
            seat,
            cards: alloc::vec![first, second],
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the seat this hand belongs to.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt (the dealer's up card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
