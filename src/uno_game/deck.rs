use super::card::{Card, CardType, Color};
use super::game::GameError;
use super::pile::DiscardPile;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Size of a full Uno deck.
pub const FULL_DECK_SIZE: usize = 108;

/// The draw pile. The last card of `cards` is the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 108-card set and shuffles it.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::standard_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// A deck with exactly these cards, top last. No shuffling.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The unshuffled 108-card set.
    pub fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(FULL_DECK_SIZE);

        for &color in &[Color::Red, Color::Blue, Color::Green, Color::Yellow] {
            // One zero per color
            cards.push(Card::new(color, CardType::Number(0)));

            // Two of each of 1-9
            for number in 1..=9 {
                cards.push(Card::new(color, CardType::Number(number)));
                cards.push(Card::new(color, CardType::Number(number)));
            }

            // Two of each action
            for _ in 0..2 {
                cards.push(Card::new(color, CardType::Reverse));
                cards.push(Card::new(color, CardType::Skip));
                cards.push(Card::new(color, CardType::DrawTwo));
            }
        }

        for _ in 0..4 {
            cards.push(Card::new(Color::Wild, CardType::Wild));
            cards.push(Card::new(Color::Wild, CardType::WildDrawFour));
        }

        cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the top card.
    ///
    /// Callers must replenish an empty deck first; dealing from an empty deck
    /// is `GameError::EmptyDeck`.
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Refills an empty deck with everything under the pile's top card.
    ///
    /// Wild cards lose their chosen color and the new deck is shuffled.
    /// Returns the number of cards moved; a non-empty deck is left untouched.
    pub fn replenish_from<R: Rng + ?Sized>(
        &mut self,
        pile: &mut DiscardPile,
        rng: &mut R,
    ) -> usize {
        if !self.is_empty() {
            warn!(
                "Refusing to replenish a deck that still holds {} cards",
                self.cards.len()
            );
            return 0;
        }

        let mut cards = pile.drain_except_top();
        for card in cards.iter_mut().filter(|card| card.is_wild()) {
            card.color = Color::Wild;
        }
        cards.shuffle(rng);

        debug!("Replenished deck with {} cards from the pile", cards.len());
        self.cards = cards;
        self.cards.len()
    }
}
