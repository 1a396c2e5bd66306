use super::config::GameConfig;
use super::events::GameObserver;
use super::game::{GameEngine, GameError, Seat};
use super::player::PlayerKind;
use super::ui::ConsoleUI;

/// Sets up a console session and plays it to the end.
pub struct GameController {
    game: GameEngine,
    ui: ConsoleUI,
}

impl GameController {
    /// Asks the humans for their names, then deals. Humans sit before robots.
    pub fn new(config: &GameConfig, ui: ConsoleUI) -> Result<Self, GameError> {
        config.validate()?;

        let robot_names = config.robot_names();
        let human_names = ui.ask_player_names(config.humans, &robot_names)?;

        let mut seats: Vec<Seat> = human_names
            .into_iter()
            .map(|name| Seat::new(name, PlayerKind::Human, Box::new(ui.clone())))
            .collect();
        seats.extend(config.robot_seats());

        let game = GameEngine::new(seats, config.seed)?;
        Ok(GameController { game, ui })
    }

    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Plays until someone wins, reporting to the console and to `extra`.
    pub fn run<O: GameObserver>(&mut self, extra: O) -> Result<String, GameError> {
        let mut observers = (self.ui.clone(), extra);
        self.game.run(&mut observers)
    }
}
