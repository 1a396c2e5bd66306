use super::card::{Card, CardType, Color};
use super::decision::DecisionSource;
use super::deck::{Deck, FULL_DECK_SIZE};
use super::events::{GameEvent, GameObserver};
use super::pile::DiscardPile;
use super::player::{Player, PlayerKind, STARTING_HAND};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Most players a single deck can deal a starting hand to, plus the first
/// pile card.
pub const MAX_PLAYERS: usize = (FULL_DECK_SIZE - 1) / STARTING_HAND;

/// How many times a decision source may answer a color request with
/// `Color::Wild` before the turn fails.
pub const MAX_COLOR_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum GameStatus {
    InProgress,
    Complete { winner: String },
}

#[derive(Debug)]
pub enum GameError {
    EmptyDeck,
    CardNotInHand,
    InvalidMove(Card),
    InvalidColorChoice,
    InvalidPlayerCount(usize),
    DuplicatePlayerName(String),
    UnknownPlayer(String),
    GameAlreadyOver,
    Input(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::EmptyDeck => write!(f, "Deck is empty"),
            GameError::CardNotInHand => write!(f, "Card not in hand"),
            GameError::InvalidMove(card) => write!(f, "{} cannot be played here", card),
            GameError::InvalidColorChoice => write!(f, "No valid color was chosen for a wild card"),
            GameError::InvalidPlayerCount(n) => write!(
                f,
                "A game needs between 1 and {} players, got {}",
                MAX_PLAYERS, n
            ),
            GameError::DuplicatePlayerName(name) => {
                write!(f, "More than one player is named {}", name)
            }
            GameError::UnknownPlayer(name) => write!(f, "No decision source for {}", name),
            GameError::GameAlreadyOver => write!(f, "Game is already over"),
            GameError::Input(msg) => write!(f, "Input failed: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Input(err.to_string())
    }
}

/// What a single turn amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// No card reached the pile.
    DrewOnly,
    /// A card was played and its effect resolved.
    CardPlayed(CardType),
    GameOver { winner: String },
}

/// A player joining the game together with whoever makes their choices.
pub struct Seat {
    pub name: String,
    pub kind: PlayerKind,
    pub source: Box<dyn DecisionSource>,
}

impl Seat {
    pub fn new(name: impl Into<String>, kind: PlayerKind, source: Box<dyn DecisionSource>) -> Self {
        Self {
            name: name.into(),
            kind,
            source,
        }
    }
}

pub struct GameEngine {
    /// Turn order. Reversed in place by a reverse card.
    pub players: Vec<Player>,
    pub deck: Deck,
    pub pile: DiscardPile,
    pub current_turn: usize,
    pub status: GameStatus,
    sources: HashMap<String, Box<dyn DecisionSource>>,
    rng: StdRng,
}

impl GameEngine {
    /// Shuffles a fresh deck, turns up the first pile card, deals a starting
    /// hand to every seat in order and picks a random first player.
    pub fn new(seats: Vec<Seat>, seed: Option<u64>) -> Result<Self, GameError> {
        if seats.is_empty() || seats.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(seats.len()));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut deck = Deck::new(&mut rng);
        let pile = DiscardPile::new(deck.deal_card()?);

        let mut players = Vec::with_capacity(seats.len());
        let mut sources = HashMap::with_capacity(seats.len());
        for seat in seats {
            if sources.contains_key(&seat.name) {
                return Err(GameError::DuplicatePlayerName(seat.name));
            }
            players.push(Player::deal(
                seat.name.clone(),
                seat.kind,
                &mut deck,
                STARTING_HAND,
            )?);
            sources.insert(seat.name, seat.source);
        }

        let current_turn = rng.random_range(0..players.len());
        info!(
            "Starting game with {} players, {} goes first",
            players.len(),
            players[current_turn].name
        );

        Ok(Self {
            players,
            deck,
            pile,
            current_turn,
            status: GameStatus::InProgress,
            sources,
            rng,
        })
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Cards in the deck, every hand and the pile together.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.pile.len()
    }

    fn next_index(&self) -> usize {
        (self.current_turn + 1) % self.players.len()
    }

    /// Plays turns until someone empties their hand and returns their name.
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<String, GameError> {
        loop {
            if let TurnOutcome::GameOver { winner } = self.take_turn(observer)? {
                return Ok(winner);
            }
        }
    }

    /// Plays one turn for the current player.
    pub fn take_turn(&mut self, observer: &mut dyn GameObserver) -> Result<TurnOutcome, GameError> {
        if matches!(self.status, GameStatus::Complete { .. }) {
            return Err(GameError::GameAlreadyOver);
        }

        let name = self.current_player().name.clone();
        observer.notify(&GameEvent::TurnStarted {
            player: name.clone(),
            top: self.pile.top_card().clone(),
            hand_sizes: self
                .players
                .iter()
                .map(|p| (p.name.clone(), p.hand().len()))
                .collect(),
        });

        let old_len = self.pile.len();
        self.play_or_draw(&name, observer)?;
        let new_len = self.pile.len();

        // A pile of one after the turn means the deck was rebuilt from it and
        // nothing was played on top.
        let mut outcome = TurnOutcome::DrewOnly;
        if new_len != old_len && new_len != 1 {
            let card_type = self.pile.top_card().card_type;
            self.resolve_effect(card_type, &name, observer)?;
            outcome = TurnOutcome::CardPlayed(card_type);
        }

        let has_won = self.player(&name).is_some_and(Player::has_won);
        if has_won {
            info!("{} wins", name);
            observer.notify(&GameEvent::GameWon {
                player: name.clone(),
            });
            self.status = GameStatus::Complete {
                winner: name.clone(),
            };
            return Ok(TurnOutcome::GameOver { winner: name });
        }

        self.current_turn = self.next_index();
        Ok(outcome)
    }

    fn play_or_draw(
        &mut self,
        name: &str,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameError> {
        let idx = self.current_turn;
        let top = self.pile.top_card().clone();
        let source = self
            .sources
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        if let Some(card) = source.choose_card(name, self.players[idx].hand(), &top)? {
            if !card.matches(&top) {
                return Err(GameError::InvalidMove(card));
            }
            self.players[idx].play_card(&card, &mut self.pile)?;
            observer.notify(&GameEvent::CardPlayed {
                player: name.to_string(),
                card,
            });
            return Ok(());
        }

        if !self.refill_deck_if_empty(observer) {
            // Every card but the pile top is in someone's hand.
            debug!("{} has nothing to draw", name);
            observer.notify(&GameEvent::Passed {
                player: name.to_string(),
            });
            return Ok(());
        }
        let drawn = self.players[idx].draw_card(&mut self.deck)?;
        debug!("{} drew {}", name, drawn);
        observer.notify(&GameEvent::CardDrawn {
            player: name.to_string(),
            card: drawn.clone(),
        });

        if drawn.matches(&top) {
            self.players[idx].play_card(&drawn, &mut self.pile)?;
            observer.notify(&GameEvent::CardPlayed {
                player: name.to_string(),
                card: drawn,
            });
        } else {
            observer.notify(&GameEvent::Passed {
                player: name.to_string(),
            });
        }
        Ok(())
    }

    fn resolve_effect(
        &mut self,
        card_type: CardType,
        name: &str,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameError> {
        match card_type {
            CardType::Reverse => {
                // Keep pointing at the same player once the order flips.
                self.players.reverse();
                self.current_turn = self.players.len() - 1 - self.current_turn;
                observer.notify(&GameEvent::TurnReversed {
                    player: name.to_string(),
                });
            }
            CardType::DrawTwo => {
                let next = self.next_index();
                self.force_draw(next, 2, observer)?;
                self.current_turn = next;
            }
            CardType::Skip => {
                let next = self.next_index();
                observer.notify(&GameEvent::TurnSkipped {
                    player: name.to_string(),
                    skipped: self.players[next].name.clone(),
                });
                self.current_turn = next;
            }
            CardType::Wild => {
                self.assign_color(name, observer)?;
            }
            CardType::WildDrawFour => {
                self.assign_color(name, observer)?;
                let next = self.next_index();
                self.force_draw(next, 4, observer)?;
            }
            CardType::Number(_) => {}
        }
        Ok(())
    }

    fn force_draw(
        &mut self,
        target: usize,
        count: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameError> {
        let mut drawn = 0;
        while drawn < count && self.refill_deck_if_empty(observer) {
            self.players[target].draw_card(&mut self.deck)?;
            drawn += 1;
        }
        if drawn < count {
            debug!("Ran out of cards after {} of {} forced draws", drawn, count);
        }
        observer.notify(&GameEvent::ForcedDraw {
            player: self.players[target].name.clone(),
            count: drawn,
        });
        Ok(())
    }

    fn assign_color(
        &mut self,
        name: &str,
        observer: &mut dyn GameObserver,
    ) -> Result<(), GameError> {
        let idx = self.current_turn;
        let source = self
            .sources
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        let mut color = None;
        for _ in 0..MAX_COLOR_ATTEMPTS {
            let choice = source.choose_color(name, self.players[idx].hand())?;
            if choice.is_chosen() {
                color = Some(choice);
                break;
            }
            warn!("{} picked no color for a wild card, asking again", name);
        }
        let color: Color = color.ok_or(GameError::InvalidColorChoice)?;

        self.pile.set_top_color(color);
        observer.notify(&GameEvent::ColorChosen {
            player: name.to_string(),
            color,
        });
        Ok(())
    }

    /// Rebuilds an empty deck from the pile. Returns false when there is
    /// still nothing to draw.
    fn refill_deck_if_empty(&mut self, observer: &mut dyn GameObserver) -> bool {
        if self.deck.is_empty() {
            let cards = self.deck.replenish_from(&mut self.pile, &mut self.rng);
            if cards > 0 {
                observer.notify(&GameEvent::DeckReplenished { cards });
            }
        }
        !self.deck.is_empty()
    }
}
