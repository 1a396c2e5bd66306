use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    /// No color yet: a wild card that has not been played.
    Wild,
}

impl Color {
    /// The colors a wild card can take, in robot tie-break order.
    pub const CHOICES: [Color; 4] = [Color::Yellow, Color::Red, Color::Green, Color::Blue];

    pub fn is_chosen(&self) -> bool {
        *self != Color::Wild
    }

    pub fn parse(name: &str) -> Option<Color> {
        match name.trim().to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Blue => write!(f, "blue"),
            Color::Yellow => write!(f, "yellow"),
            Color::Wild => write!(f, "wild"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Number(n) => write!(f, "{}", n),
            CardType::Skip => write!(f, "skip"),
            CardType::Reverse => write!(f, "reverse"),
            CardType::DrawTwo => write!(f, "draw-two"),
            CardType::Wild => write!(f, "wild"),
            CardType::WildDrawFour => write!(f, "wild-draw-four"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub card_type: CardType,
}

impl Card {
    pub fn new(color: Color, card_type: CardType) -> Self {
        Self { color, card_type }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.card_type, CardType::Wild | CardType::WildDrawFour)
    }

    /// Whether this card may be played onto `top`.
    ///
    /// Only `self` is checked for wildness, so the relation is not symmetric:
    /// call it with the candidate card as `self` and the pile top as `top`.
    pub fn matches(&self, top: &Card) -> bool {
        if self.is_wild() || !self.color.is_chosen() {
            return true;
        }
        self.color == top.color || self.card_type == top.card_type
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card_type {
            CardType::Wild | CardType::WildDrawFour if !self.color.is_chosen() => {
                write!(f, "{}", self.card_type)
            }
            _ => write!(f, "{} {}", self.color, self.card_type),
        }
    }
}

/// Cards in `hand` that can be played onto `top`, in hand order.
pub fn playable<'a>(hand: &'a [Card], top: &Card) -> Vec<&'a Card> {
    hand.iter().filter(|card| card.matches(top)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_color_or_rank_matches() {
        let red_five = Card::new(Color::Red, CardType::Number(5));
        let red_nine = Card::new(Color::Red, CardType::Number(9));
        let blue_five = Card::new(Color::Blue, CardType::Number(5));
        let blue_two = Card::new(Color::Blue, CardType::Number(2));

        assert!(red_five.matches(&red_nine));
        assert!(red_five.matches(&blue_five));
        assert!(!red_five.matches(&blue_two));
    }

    #[test]
    fn test_action_cards_match_by_category() {
        let red_skip = Card::new(Color::Red, CardType::Skip);
        let green_skip = Card::new(Color::Green, CardType::Skip);
        let green_reverse = Card::new(Color::Green, CardType::Reverse);

        assert!(red_skip.matches(&green_skip));
        assert!(!red_skip.matches(&green_reverse));
    }

    #[test]
    fn test_wild_matches_anything() {
        let wild = Card::new(Color::Wild, CardType::Wild);
        let draw_four = Card::new(Color::Wild, CardType::WildDrawFour);
        let blue_two = Card::new(Color::Blue, CardType::Number(2));

        assert!(wild.matches(&blue_two));
        assert!(draw_four.matches(&blue_two));

        // A played wild keeps matching as a candidate even after recoloring.
        let colored_wild = Card::new(Color::Red, CardType::Wild);
        assert!(colored_wild.matches(&blue_two));
    }

    #[test]
    fn test_match_is_not_symmetric_for_uncolored_top() {
        let red_five = Card::new(Color::Red, CardType::Number(5));
        let uncolored_wild = Card::new(Color::Wild, CardType::Wild);

        assert!(uncolored_wild.matches(&red_five));
        assert!(!red_five.matches(&uncolored_wild));
    }

    #[test]
    fn test_colored_wild_top_matches_its_color() {
        let top = Card::new(Color::Green, CardType::WildDrawFour);

        assert!(Card::new(Color::Green, CardType::Number(3)).matches(&top));
        assert!(!Card::new(Color::Yellow, CardType::Number(3)).matches(&top));
    }

    #[test]
    fn test_playable_filters_hand() {
        let hand = vec![
            Card::new(Color::Red, CardType::Number(1)),
            Card::new(Color::Blue, CardType::Number(4)),
            Card::new(Color::Wild, CardType::Wild),
        ];
        let top = Card::new(Color::Red, CardType::Number(8));

        let legal = playable(&hand, &top);
        assert_eq!(legal, vec![&hand[0], &hand[2]]);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Color::parse("Red"), Some(Color::Red));
        assert_eq!(Color::parse(" yellow\n"), Some(Color::Yellow));
        assert_eq!(Color::parse("wild"), None);
        assert_eq!(Color::parse("purple"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Color::Red, CardType::Number(7)).to_string(), "red 7");
        assert_eq!(Card::new(Color::Blue, CardType::DrawTwo).to_string(), "blue draw-two");
        assert_eq!(Card::new(Color::Wild, CardType::WildDrawFour).to_string(), "wild-draw-four");
        assert_eq!(Card::new(Color::Green, CardType::Wild).to_string(), "green wild");
    }
}
