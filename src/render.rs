//! ASCII-art rendering of hands.
//!
//! Every card is a 5-row, 7-column box. A face-down card has the same
//! dimensions. Cards are laid side by side, two spaces apart.

use core::fmt::Write;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Rows per card.
pub const CARD_ROWS: usize = 5;

const TOP: &str = "┌─────┐";
const BOTTOM: &str = "└─────┘";
const SHADE: &str = "│░░░░░│";
const CARD_GAP: &str = "  ";

/// One rendered card, top row first.
pub type CardArt = [String; CARD_ROWS];

/// Renders a face-up card.
#[must_use]
pub fn card_art(card: Card) -> CardArt {
    let rank = card.rank().symbol();
    [
        String::from(TOP),
        format!("│{rank:<5}│"),
        String::from("│  ♠  │"),
        format!("│{rank:>5}│"),
        String::from(BOTTOM),
    ]
}

/// Renders a face-down card.
#[must_use]
pub fn hidden_art() -> CardArt {
    [
        String::from(TOP),
        String::from(SHADE),
        String::from(SHADE),
        String::from(SHADE),
        String::from(BOTTOM),
    ]
}

/// Lays cards out side by side. Each row ends with a newline.
#[must_use]
pub fn render_cards(cards: &[CardArt]) -> String {
    let mut out = String::new();
    for row in 0..CARD_ROWS {
        let line: Vec<&str> = cards.iter().map(|art| art[row].as_str()).collect();
        out.push_str(&line.join(CARD_GAP));
        out.push('\n');
    }
    out
}

/// Renders a titled hand with its total.
#[must_use]
pub fn render_hand(title: &str, hand: &Hand) -> String {
    let arts: Vec<CardArt> = hand.cards().iter().copied().map(card_art).collect();
    let mut out = format!("\n{title}:\n");
    out.push_str(&render_cards(&arts));
    let _ = write!(out, "Total: {}", hand.value());
    out
}

/// Renders both hands.
///
/// Unless `reveal` is set, the dealer shows only the up card next to a
/// face-down card and no total.
#[must_use]
pub fn render_table(player: &Hand, dealer: &Hand, reveal: bool) -> String {
    let mut out = render_hand("Player Hand", player);
    out.push('\n');

    if reveal {
        out.push_str(&render_hand("Dealer Hand", dealer));
    } else {
        out.push_str("\nDealer Hand:\n");
        let mut arts: Vec<CardArt> = dealer.up_card().copied().map(card_art).into_iter().collect();
        arts.push(hidden_art());
        let rows = render_cards(&arts);
        out.push_str(rows.trim_end_matches('\n'));
    }

    out
}
