use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::game::Game;

/// What a finished session looked like, logged as one JSON line.
#[derive(Serialize, Debug)]
pub struct SessionSummary {
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
    pub started_at: String,
    pub duration_secs: f64,
}

impl SessionSummary {
    pub fn new(game: &Game, started_at: DateTime<Local>, ended_at: DateTime<Local>) -> Self {
        let duration = ended_at.signed_duration_since(started_at);
        Self {
            score: game.score(),
            length: game.snake().len(),
            ticks: game.ticks(),
            started_at: started_at.to_rfc3339(),
            duration_secs: duration.num_milliseconds().max(0) as f64 / 1000.0,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use crate::host::RecordingHost;
    use crate::input::Key;
    use crate::snake::Position;
    use chrono::Duration;

    #[test]
    fn summary_serializes_the_session() {
        let mut host = RecordingHost::seeded(1);
        let mut game = Game::new(&mut host).unwrap();
        game.frame(&[Key::Confirm], &mut host).unwrap();
        game.food = Food::new(Position::new(0, 0));
        game.frame(&[], &mut host).unwrap();
        game.frame(&[], &mut host).unwrap();

        let start = Local::now();
        let summary = SessionSummary::new(&game, start, start + Duration::milliseconds(2500));
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["ticks"], 2);
        assert_eq!(value["length"], 3);
        assert_eq!(value["duration_secs"], 2.5);
        assert_eq!(value["started_at"], start.to_rfc3339());
    }
}
