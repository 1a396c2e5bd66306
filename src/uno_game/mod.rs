pub mod card;
pub mod config;
pub mod controller;
pub mod decision;
pub mod deck;
pub mod events;
pub mod game;
pub mod pile;
pub mod player;
pub mod robot;
pub mod ui;

pub use card::{Card, CardType, Color};
pub use config::GameConfig;
pub use controller::GameController;
pub use decision::DecisionSource;
pub use deck::Deck;
pub use events::{EventLog, GameEvent, GameObserver, JsonLinesObserver, NullObserver};
pub use game::{GameEngine, GameError, GameStatus, Seat, TurnOutcome};
pub use pile::DiscardPile;
pub use player::{Player, PlayerKind};
pub use robot::RobotPlayer;
pub use ui::ConsoleUI;
