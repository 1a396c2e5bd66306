use super::card::{Card, Color};
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// What happened during a turn. Players are identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    TurnStarted {
        player: String,
        top: Card,
        hand_sizes: Vec<(String, usize)>,
    },
    CardPlayed {
        player: String,
        card: Card,
    },
    CardDrawn {
        player: String,
        card: Card,
    },
    /// The player drew and still could not play.
    Passed {
        player: String,
    },
    DeckReplenished {
        cards: usize,
    },
    ForcedDraw {
        player: String,
        count: usize,
    },
    TurnReversed {
        player: String,
    },
    TurnSkipped {
        player: String,
        skipped: String,
    },
    ColorChosen {
        player: String,
        color: Color,
    },
    GameWon {
        player: String,
    },
}

/// Receives game events. The engine never reads anything back.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

pub struct NullObserver;

impl GameObserver for NullObserver {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Keeps every event in order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Writes each event as one line of JSON.
pub struct JsonLinesObserver<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameObserver for JsonLinesObserver<W> {
    fn notify(&mut self, event: &GameEvent) {
        let written = serde_json::to_writer(&mut self.writer, event)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.writer))
            .and_then(|_| self.writer.flush());
        if let Err(e) = written {
            warn!("Failed to write event to transcript: {}", e);
        }
    }
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}

impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn notify(&mut self, event: &GameEvent) {
        self.0.notify(event);
        self.1.notify(event);
    }
}

impl<T: GameObserver> GameObserver for Option<T> {
    fn notify(&mut self, event: &GameEvent) {
        if let Some(observer) = self {
            observer.notify(event);
        }
    }
}
