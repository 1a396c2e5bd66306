use super::card::{self, Card};
use super::deck::Deck;
use super::game::GameError;
use super::pile::DiscardPile;
use serde::{Deserialize, Serialize};

/// Cards dealt to each player at the start of a game.
pub const STARTING_HAND: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Robot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: String, kind: PlayerKind) -> Self {
        Self {
            name,
            kind,
            hand: Vec::new(),
        }
    }

    /// Creates a player holding `count` cards dealt from `deck`.
    pub fn deal(
        name: String,
        kind: PlayerKind,
        deck: &mut Deck,
        count: usize,
    ) -> Result<Self, GameError> {
        let mut player = Self::new(name, kind);
        for _ in 0..count {
            player.add_card(deck.deal_card()?);
        }
        Ok(player)
    }

    /// Adds a card to the player's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Checks if the player has won (i.e., their hand is empty).
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn playable_cards(&self, top: &Card) -> Vec<&Card> {
        card::playable(&self.hand, top)
    }

    /// Draws the top card of `deck` into the hand and returns it.
    /// An empty deck must be replenished by the caller first.
    pub fn draw_card(&mut self, deck: &mut Deck) -> Result<Card, GameError> {
        let card = deck.deal_card()?;
        self.hand.push(card.clone());
        Ok(card)
    }

    /// Moves `card` from the hand onto the pile. Legality is not checked here.
    pub fn play_card(&mut self, card: &Card, pile: &mut DiscardPile) -> Result<(), GameError> {
        let index = self
            .hand
            .iter()
            .position(|held| held == card)
            .ok_or(GameError::CardNotInHand)?;
        pile.add_card(self.hand.remove(index));
        Ok(())
    }
}
