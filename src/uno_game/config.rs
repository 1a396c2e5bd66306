use super::game::{GameError, Seat, MAX_PLAYERS};
use super::player::PlayerKind;
use super::robot::RobotPlayer;

/// Who is playing a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfig {
    pub humans: usize,
    pub robots: usize,
    /// Seeds the shuffle, the first player and every robot. `None` plays a
    /// different game each time.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(humans: usize, robots: usize, seed: Option<u64>) -> Self {
        Self {
            humans,
            robots,
            seed,
        }
    }

    pub fn total_players(&self) -> usize {
        self.humans + self.robots
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let total = self.total_players();
        if total == 0 || total > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(total));
        }
        Ok(())
    }

    pub fn robot_names(&self) -> Vec<String> {
        (1..=self.robots).map(|n| format!("Robot #{}", n)).collect()
    }

    /// Seats for the robots, named `Robot #1` onwards.
    pub fn robot_seats(&self) -> Vec<Seat> {
        self.robot_names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let seed = self.seed.map(|seed| seed.wrapping_add(i as u64 + 1));
                Seat::new(name, PlayerKind::Robot, Box::new(RobotPlayer::new(seed)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(GameConfig::new(1, 0, None).validate().is_ok());
        assert!(GameConfig::new(0, 3, None).validate().is_ok());
        assert!(GameConfig::new(8, 7, None).validate().is_ok());
        assert!(matches!(
            GameConfig::new(0, 0, None).validate(),
            Err(GameError::InvalidPlayerCount(0))
        ));
        assert!(matches!(
            GameConfig::new(10, 6, None).validate(),
            Err(GameError::InvalidPlayerCount(16))
        ));
    }

    #[test]
    fn test_robot_seats() {
        let config = GameConfig::new(2, 3, Some(4));
        let seats = config.robot_seats();

        let names: Vec<&str> = seats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Robot #1", "Robot #2", "Robot #3"]);
        assert!(seats.iter().all(|s| s.kind == PlayerKind::Robot));
        assert_eq!(config.total_players(), 5);
    }
}
