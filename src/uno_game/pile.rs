use super::card::{Card, Color};

/// The discard pile. Never empty: it starts with one card and deck
/// replenishment always leaves the top in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new(first: Card) -> Self {
        Self { cards: vec![first] }
    }

    pub fn top_card(&self) -> &Card {
        // The pile is created with one card and never drops below one.
        &self.cards[self.cards.len() - 1]
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Sets the color of the top card after a wild has been played.
    pub fn set_top_color(&mut self, color: Color) {
        let top = self.cards.len() - 1;
        self.cards[top].color = color;
    }

    /// Removes every card but the top and returns them, oldest first.
    pub fn drain_except_top(&mut self) -> Vec<Card> {
        let top = self.cards.len() - 1;
        self.cards.drain(..top).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
