use super::card::{self, Card, Color};
use super::decision::DecisionSource;
use super::events::{GameEvent, GameObserver};
use super::game::GameError;
use log::warn;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;

struct Streams {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

/// Console front-end. Acts as the decision source of every human player and
/// prints game events; clones share the same input and output.
#[derive(Clone)]
pub struct ConsoleUI {
    streams: Rc<RefCell<Streams>>,
}

impl Default for ConsoleUI {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleUI {
    pub fn new() -> Self {
        Self::with_streams(Box::new(BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            streams: Rc::new(RefCell::new(Streams { input, output })),
        }
    }

    fn say(&self, args: fmt::Arguments<'_>) {
        let mut streams = self.streams.borrow_mut();
        if let Err(e) = streams.output.write_fmt(args).and_then(|_| writeln!(streams.output)) {
            warn!("Failed to write to console: {}", e);
        }
    }

    /// Prints `question` without a newline and reads the answer.
    fn prompt(&self, question: &str) -> Result<String, GameError> {
        let mut streams = self.streams.borrow_mut();
        write!(streams.output, "{}", question)?;
        streams.output.flush()?;

        let mut answer = String::new();
        if streams.input.read_line(&mut answer)? == 0 {
            return Err(GameError::Input("console input closed".to_string()));
        }
        Ok(answer.trim().to_string())
    }

    pub fn ask_count(&self, question: &str) -> Result<usize, GameError> {
        loop {
            match self.prompt(question)?.parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say(format_args!("Please enter a whole number.")),
            }
        }
    }

    /// Asks each human for a name; names must be non-empty and unique.
    pub fn ask_player_names(
        &self,
        count: usize,
        taken: &[String],
    ) -> Result<Vec<String>, GameError> {
        let mut names: Vec<String> = Vec::with_capacity(count);
        for n in 1..=count {
            loop {
                let name = self.prompt(&format!("Player #{}, enter your name: ", n))?;
                if name.is_empty() {
                    self.say(format_args!("Your name can't be empty."));
                } else if names.contains(&name) || taken.contains(&name) {
                    self.say(format_args!("{} is already taken.", name));
                } else {
                    names.push(name);
                    break;
                }
            }
        }
        Ok(names)
    }

    pub fn display_hand(&self, player: &str, hand: &[Card]) {
        self.say(format_args!("{}, it's your turn.", player));
        self.say(format_args!("Your hand:"));
        for card in hand {
            self.say(format_args!("  {}", card));
        }
    }
}

impl DecisionSource for ConsoleUI {
    fn choose_card(
        &mut self,
        player: &str,
        hand: &[Card],
        top: &Card,
    ) -> Result<Option<Card>, GameError> {
        self.display_hand(player, hand);
        self.say(format_args!("The pile has {} on top.", top));

        let legal = card::playable(hand, top);
        if legal.is_empty() {
            self.say(format_args!("You can't play, so you have to draw."));
            self.prompt("Press enter to draw.")?;
            return Ok(None);
        }

        for (i, card) in legal.iter().enumerate() {
            self.say(format_args!("{}: {}", i + 1, card));
        }
        loop {
            let answer = self.prompt("Which do you want to play? ")?;
            if let Ok(choice) = answer.parse::<usize>() {
                if (1..=legal.len()).contains(&choice) {
                    return Ok(Some(legal[choice - 1].clone()));
                }
            }
            self.say(format_args!("Enter a number from 1 to {}.", legal.len()));
        }
    }

    fn choose_color(&mut self, _player: &str, _hand: &[Card]) -> Result<Color, GameError> {
        loop {
            self.say(format_args!("1. Red"));
            self.say(format_args!("2. Green"));
            self.say(format_args!("3. Blue"));
            self.say(format_args!("4. Yellow"));
            let answer = self.prompt("Which color do you want to play? ")?;
            let color = match answer.as_str() {
                "1" => Some(Color::Red),
                "2" => Some(Color::Green),
                "3" => Some(Color::Blue),
                "4" => Some(Color::Yellow),
                other => Color::parse(other),
            };
            match color {
                Some(color) => return Ok(color),
                None => self.say(format_args!("Invalid choice. Please enter 1, 2, 3, or 4.")),
            }
        }
    }
}

impl GameObserver for ConsoleUI {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { hand_sizes, .. } => {
                self.say(format_args!("-------"));
                for (name, size) in hand_sizes {
                    self.say(format_args!("{} has {} cards.", name, size));
                }
                self.say(format_args!("-------"));
            }
            GameEvent::CardPlayed { player, card } => {
                self.say(format_args!("{} has played a {}.", player, card));
            }
            GameEvent::CardDrawn { player, card } => {
                self.say(format_args!("{} drew {}.", player, card));
            }
            GameEvent::Passed { player } => {
                self.say(format_args!("{} cannot play a card.", player));
            }
            GameEvent::DeckReplenished { cards } => {
                self.say(format_args!(
                    "The deck ran out; {} cards were shuffled back in from the pile.",
                    cards
                ));
            }
            GameEvent::ForcedDraw { player, count } => {
                self.say(format_args!("{} must draw {} cards!", player, count));
            }
            GameEvent::TurnReversed { player } => {
                self.say(format_args!("{} has reversed the order!", player));
            }
            GameEvent::TurnSkipped { player, skipped } => {
                self.say(format_args!("{} has skipped {}'s turn!", player, skipped));
            }
            GameEvent::ColorChosen { player, color } => {
                self.say(format_args!("{} has changed the color to {}!", player, color));
            }
            GameEvent::GameWon { player } => {
                self.say(format_args!("{} wins!", player));
                self.say(format_args!("Thanks for playing!"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uno_game::card::CardType;
    use std::io::Cursor;

    /// Output buffer the test can read after handing a clone to the UI.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn ui_with_input(input: &str) -> (ConsoleUI, SharedBuf) {
        let output = SharedBuf::default();
        let ui = ConsoleUI::with_streams(
            Box::new(Cursor::new(input.to_string())),
            Box::new(output.clone()),
        );
        (ui, output)
    }

    #[test]
    fn test_choose_card_lists_only_playable() {
        let (mut ui, output) = ui_with_input("7\nx\n2\n");
        let hand = vec![
            Card::new(Color::Blue, CardType::Number(1)),
            Card::new(Color::Red, CardType::Number(4)),
            Card::new(Color::Green, CardType::Number(8)),
        ];
        let top = Card::new(Color::Red, CardType::Number(8));

        let chosen = ui.choose_card("Alice", &hand, &top).unwrap();

        assert_eq!(chosen, Some(Card::new(Color::Green, CardType::Number(8))));
        let text = output.text();
        assert!(text.contains("Alice, it's your turn."));
        assert!(text.contains("1: red 4"));
        assert!(text.contains("2: green 8"));
        assert!(!text.contains(": blue 1"));
        assert!(text.contains("Enter a number from 1 to 2."));
    }

    #[test]
    fn test_choose_card_without_playable_draws() {
        let (mut ui, output) = ui_with_input("\n");
        let hand = vec![Card::new(Color::Blue, CardType::Number(1))];
        let top = Card::new(Color::Red, CardType::Number(8));

        assert_eq!(ui.choose_card("Alice", &hand, &top).unwrap(), None);
        assert!(output.text().contains("You can't play, so you have to draw."));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (mut ui, _output) = ui_with_input("");
        let hand = vec![Card::new(Color::Red, CardType::Number(1))];
        let top = Card::new(Color::Red, CardType::Number(8));

        let result = ui.choose_card("Alice", &hand, &top);
        assert!(matches!(result, Err(GameError::Input(_))));
    }

    #[test]
    fn test_choose_color() {
        let (mut ui, _output) = ui_with_input("1\n2\n3\n4\npurple\nYellow\n");

        let expected = [
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Yellow,
            Color::Yellow,
        ];
        for color in expected {
            assert_eq!(ui.choose_color("Alice", &[]).unwrap(), color);
        }
    }

    #[test]
    fn test_ask_count_reprompts() {
        let (ui, output) = ui_with_input("three\n-1\n3\n");

        assert_eq!(ui.ask_count("How many robots? ").unwrap(), 3);
        assert_eq!(output.text().matches("Please enter a whole number.").count(), 2);
    }

    #[test]
    fn test_ask_player_names_unique() {
        let (ui, output) = ui_with_input("Alice\n\nAlice\nRobot #1\nBob\n");
        let taken = vec!["Robot #1".to_string()];

        let names = ui.ask_player_names(2, &taken).unwrap();

        assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
        let text = output.text();
        assert!(text.contains("Player #2, enter your name: "));
        assert!(text.contains("Alice is already taken."));
        assert!(text.contains("Robot #1 is already taken."));
    }

    #[test]
    fn test_handle_game_event() {
        let (mut ui, output) = ui_with_input("");

        ui.notify(&GameEvent::TurnStarted {
            player: "Alice".to_string(),
            top: Card::new(Color::Red, CardType::Number(1)),
            hand_sizes: vec![("Alice".to_string(), 7), ("Bob".to_string(), 3)],
        });
        ui.notify(&GameEvent::TurnSkipped {
            player: "Alice".to_string(),
            skipped: "Bob".to_string(),
        });
        ui.notify(&GameEvent::ColorChosen {
            player: "Alice".to_string(),
            color: Color::Green,
        });
        ui.notify(&GameEvent::GameWon {
            player: "Alice".to_string(),
        });

        let text = output.text();
        assert!(text.contains("Bob has 3 cards."));
        assert!(text.contains("Alice has skipped Bob's turn!"));
        assert!(text.contains("Alice has changed the color to green!"));
        assert!(text.contains("Alice wins!"));
    }
}
