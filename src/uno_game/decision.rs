use super::card::{Card, Color};
use super::game::GameError;

/// Supplies the choices a player makes during a turn.
///
/// The engine owns the cards; a source only sees the hand and the pile top
/// and answers with a card or a color. Errors are reserved for sources that
/// can fail to answer at all, such as a console whose input was closed.
pub trait DecisionSource {
    /// Pick a card from `hand` that matches `top`, or `None` to draw instead.
    fn choose_card(
        &mut self,
        player: &str,
        hand: &[Card],
        top: &Card,
    ) -> Result<Option<Card>, GameError>;

    /// Pick the color for a wild card `player` has just played.
    fn choose_color(&mut self, player: &str, hand: &[Card]) -> Result<Color, GameError>;
}
