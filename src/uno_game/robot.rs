//! Computer-controlled players.

use super::card::{self, Card, Color};
use super::decision::DecisionSource;
use super::game::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Plays a uniformly random legal card and picks the color it holds most of.
pub struct RobotPlayer {
    rng: StdRng,
}

impl RobotPlayer {
    /// A seed makes the robot's choices reproducible; `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// The color with the most cards in `hand`. Ties go to whichever comes
    /// first in `Color::CHOICES`.
    pub fn favourite_color(hand: &[Card]) -> Color {
        let mut best = Color::CHOICES[0];
        let mut best_count = 0;
        for color in Color::CHOICES {
            let count = hand.iter().filter(|card| card.color == color).count();
            if count > best_count {
                best = color;
                best_count = count;
            }
        }
        best
    }
}

impl DecisionSource for RobotPlayer {
    fn choose_card(
        &mut self,
        _player: &str,
        hand: &[Card],
        top: &Card,
    ) -> Result<Option<Card>, GameError> {
        let legal = card::playable(hand, top);
        if legal.is_empty() {
            return Ok(None);
        }
        let choice = self.rng.random_range(0..legal.len());
        Ok(Some(legal[choice].clone()))
    }

    fn choose_color(&mut self, _player: &str, hand: &[Card]) -> Result<Color, GameError> {
        Ok(Self::favourite_color(hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uno_game::card::CardType;

    fn card(color: Color, n: u8) -> Card {
        Card::new(color, CardType::Number(n))
    }

    #[test]
    fn test_favourite_color_tie_goes_to_enumeration_order() {
        let hand = vec![
            card(Color::Green, 1),
            card(Color::Red, 2),
            card(Color::Green, 3),
            card(Color::Red, 4),
        ];
        assert_eq!(RobotPlayer::favourite_color(&hand), Color::Red);
    }

    #[test]
    fn test_favourite_color_counts() {
        let hand = vec![
            card(Color::Red, 1),
            card(Color::Red, 2),
            card(Color::Red, 3),
            card(Color::Blue, 1),
            card(Color::Green, 1),
            card(Color::Green, 2),
            card(Color::Green, 3),
            card(Color::Green, 4),
        ];
        assert_eq!(RobotPlayer::favourite_color(&hand), Color::Green);
    }

    #[test]
    fn test_favourite_color_ignores_wilds() {
        let hand = vec![
            Card::new(Color::Wild, CardType::Wild),
            Card::new(Color::Wild, CardType::WildDrawFour),
            card(Color::Blue, 5),
        ];
        assert_eq!(RobotPlayer::favourite_color(&hand), Color::Blue);
    }

    #[test]
    fn test_favourite_color_of_empty_hand() {
        assert_eq!(RobotPlayer::favourite_color(&[]), Color::Yellow);
    }

    #[test]
    fn test_choose_card_only_returns_legal_cards() {
        let mut robot = RobotPlayer::new(Some(9));
        let hand = vec![
            card(Color::Blue, 1),
            card(Color::Red, 7),
            card(Color::Yellow, 3),
            Card::new(Color::Wild, CardType::Wild),
        ];
        let top = card(Color::Red, 3);

        for _ in 0..50 {
            let chosen = robot.choose_card("Robot #1", &hand, &top).unwrap().unwrap();
            assert!(chosen.matches(&top));
            assert!(hand.contains(&chosen));
        }
    }

    #[test]
    fn test_choose_card_without_legal_move_draws() {
        let mut robot = RobotPlayer::new(Some(9));
        let hand = vec![card(Color::Blue, 1)];
        let top = card(Color::Red, 3);

        assert_eq!(robot.choose_card("Robot #1", &hand, &top).unwrap(), None);
    }

    #[test]
    fn test_seeded_robots_agree() {
        let hand: Vec<Card> = (1..=9).map(|n| card(Color::Red, n)).collect();
        let top = card(Color::Red, 0);
        let mut first = RobotPlayer::new(Some(11));
        let mut second = RobotPlayer::new(Some(11));

        for _ in 0..10 {
            assert_eq!(
                first.choose_card("a", &hand, &top).unwrap(),
                second.choose_card("b", &hand, &top).unwrap()
            );
        }
    }
}
