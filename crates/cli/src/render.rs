// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text rendering of cards.
use oddsmith_eval::{Card, Suit};

const TOP: &str = "┌────┐";
const BOTTOM: &str = "└────┘";

fn suit_glyph(suit: Suit) -> char {
    match suit {
        Suit::Spades => '♠',
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
    }
}

/// Renders the cards as a row of boxes, three lines with no trailing newline.
///
/// ```text
/// ┌────┐ ┌────┐
/// │ A♠ │ │ T♦ │
/// └────┘ └────┘
/// ```
pub fn cards_row(cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let top = vec![TOP; cards.len()].join(" ");
    let bottom = vec![BOTTOM; cards.len()].join(" ");
    let faces = cards
        .iter()
        .map(|c| format!("│ {}{} │", c.rank(), suit_glyph(c.suit())))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{top}\n{faces}\n{bottom}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use oddsmith_eval::parse_cards;

    #[test]
    fn empty_row() {
        assert!(cards_row(&[]).is_empty());
    }

    #[test]
    fn row_of_cards() {
        let cards = parse_cards("AS TD 2H").unwrap();
        let text = cards_row(&cards);

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "┌────┐ ┌────┐ ┌────┐");
        assert_eq!(lines[1], "│ A♠ │ │ T♦ │ │ 2♥ │");
        assert_eq!(lines[2], "└────┘ └────┘ └────┘");

        for line in lines {
            assert_eq!(line.chars().count(), 20);
        }
    }

    #[test]
    fn row_keeps_order() {
        let cards = parse_cards("KC 3S").unwrap();
        let text = cards_row(&cards);
        assert!(text.contains("│ K♣ │ │ 3♠ │"));
    }
}
