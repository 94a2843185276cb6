use log::{debug, warn};

use crate::border::Border;
use crate::config::{BONUS_LIFETIME_TICKS, SPAWN_ATTEMPTS};
use crate::error::{Error, Result};
use crate::host::Host;
use crate::snake::{Position, Snake};

/// Draws random cells until one is not `occupied`, giving up after
/// [`SPAWN_ATTEMPTS`] draws.
pub fn free_cell(
    host: &mut impl Host,
    border: &Border,
    occupied: impl Fn(Position) -> bool,
) -> Result<Position> {
    for attempt in 0..SPAWN_ATTEMPTS {
        let pos = border.random_cell(host);
        if !occupied(pos) {
            if attempt > border.cell_count() {
                warn!("free cell {:?} took {} attempts", pos, attempt + 1);
            }
            return Ok(pos);
        }
    }
    Err(Error::NoFreeCell { attempts: SPAWN_ATTEMPTS })
}

/// The regular food.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Food on a cell clear of the snake and of the active bonus fruit.
    pub fn spawn(
        host: &mut impl Host,
        border: &Border,
        snake: &Snake,
        bonus: Option<&BonusFruit>,
    ) -> Result<Self> {
        let position = free_cell(host, border, |pos| {
            snake.contains(pos) || bonus.is_some_and(|b| b.position == pos)
        })?;
        debug!("food at {:?}", position);
        Ok(Self { position })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BonusKind {
    /// +5 points
    ScoreBoost,
    /// faster ticks for a while
    SpeedBoost,
    /// three segments at once
    SizeBoost,
}

impl BonusKind {
    pub const ALL: [BonusKind; 3] = [BonusKind::ScoreBoost, BonusKind::SpeedBoost, BonusKind::SizeBoost];

    pub fn random(host: &mut impl Host) -> BonusKind {
        let last = BonusKind::ALL.len() as i32 - 1;
        BonusKind::ALL[host.random_int(0, last) as usize]
    }
}

/// A bonus fruit currently on the field. The game keeps it as an
/// `Option<BonusFruit>`, `None` meaning no bonus is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BonusFruit {
    pub position: Position,
    pub kind: BonusKind,
    /// ticks left before it disappears
    pub timer: u32,
}

impl BonusFruit {
    pub fn new(position: Position, kind: BonusKind) -> Self {
        Self { position, kind, timer: BONUS_LIFETIME_TICKS }
    }

    /// A fruit of random kind on a cell clear of the snake and the food.
    pub fn spawn(host: &mut impl Host, border: &Border, snake: &Snake, food: &Food) -> Result<Self> {
        let kind = BonusKind::random(host);
        let position = free_cell(host, border, |pos| snake.contains(pos) || pos == food.position)?;
        debug!("{:?} bonus at {:?}", kind, position);
        Ok(BonusFruit::new(position, kind))
    }

    /// Counts one tick down. Returns `true` once the fruit has expired.
    pub fn tick(&mut self) -> bool {
        self.timer = self.timer.saturating_sub(1);
        self.timer == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use crate::snake::Direction;

    #[test]
    fn food_avoids_snake_and_bonus() {
        let border = Border::new(4, 1);
        let snake = Snake::with_length(Position::new(2, 0), 2, Direction::Right);
        let bonus = BonusFruit::new(Position::new(0, 0), BonusKind::ScoreBoost);
        let mut host = RecordingHost::seeded(3);
        for _ in 0..50 {
            let food = Food::spawn(&mut host, &border, &snake, Some(&bonus)).unwrap();
            assert_eq!(food.position, Position::new(3, 0));
        }
    }

    #[test]
    fn bonus_avoids_snake_and_food() {
        let border = Border::new(3, 2);
        let snake = Snake::with_length(Position::new(2, 0), 3, Direction::Right);
        let food = Food::new(Position::new(0, 1));
        let mut host = RecordingHost::seeded(11);
        for _ in 0..50 {
            let bonus = BonusFruit::spawn(&mut host, &border, &snake, &food).unwrap();
            assert!(!snake.contains(bonus.position));
            assert_ne!(bonus.position, food.position);
            assert!(border.contains(bonus.position));
            assert_eq!(bonus.timer, BONUS_LIFETIME_TICKS);
        }
    }

    #[test]
    fn full_board_gives_up() {
        let border = Border::new(3, 1);
        let snake = Snake::with_length(Position::new(2, 0), 3, Direction::Right);
        let mut host = RecordingHost::seeded(5);
        let err = Food::spawn(&mut host, &border, &snake, None).unwrap_err();
        assert!(matches!(err, Error::NoFreeCell { attempts } if attempts == SPAWN_ATTEMPTS));
    }

    #[test]
    fn every_kind_gets_picked() {
        let mut host = RecordingHost::seeded(9);
        let mut seen = Vec::new();
        for _ in 0..100 {
            let kind = BonusKind::random(&mut host);
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn bonus_expires_after_its_lifetime() {
        let mut bonus = BonusFruit::new(Position::new(1, 1), BonusKind::SizeBoost);
        for _ in 1..BONUS_LIFETIME_TICKS {
            assert!(!bonus.tick());
        }
        assert!(bonus.tick());
        assert_eq!(bonus.timer, 0);
    }
}
