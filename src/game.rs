use log::{debug, info};

use crate::border::Border;
use crate::config::{
    BASE_TICK_RATE, BONUS_DELAY_MAX, BONUS_DELAY_MIN, BOOST_TICK_RATE, SCORE_BOOST_POINTS,
    SIZE_BOOST_SEGMENTS, SPEED_BOOST_TICKS,
};
use crate::error::Result;
use crate::food::{BonusFruit, BonusKind, Food};
use crate::host::{Cue, Host};
use crate::input::Key;
use crate::snake::{Direction, MoveOutcome, Position, Snake};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Where [`Game::reset`] leaves the player.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Restart {
    Menu,
    Playing,
}

/// One play session: the snake, both foods, score and the timers around the
/// bonus fruit and the speed boost.
///
/// The frame loop is the only writer; the renderer reads it between frames.
/// Pieces are crate-visible so in-crate tests can lay out a board.
pub struct Game {
    pub(crate) snake: Snake,
    pub(crate) food: Food,
    /// `None` while no bonus fruit is on the field
    pub(crate) bonus: Option<BonusFruit>,
    border: Border,
    direction: Direction,
    phase: Phase,
    score: u32,
    // ticks spent without a bonus fruit, and how many it takes to spawn one
    bonus_counter: u32,
    bonus_threshold: u32,
    speed_boost_ticks: u32,
    base_tick_rate: u32,
    tick_rate: u32,
    ticks: u64,
}

impl Game {
    /// A fresh session waiting in the menu.
    pub fn new(host: &mut impl Host) -> Result<Game> {
        let border = Border::default();
        let snake = Snake::new(Position::new(border.width / 2, border.height / 2));
        let food = Food::spawn(host, &border, &snake, None)?;
        Ok(Game {
            snake,
            food,
            bonus: None,
            border,
            direction: Direction::Right,
            phase: Phase::Menu,
            score: 0,
            bonus_counter: 0,
            bonus_threshold: roll_bonus_delay(host),
            speed_boost_ticks: 0,
            base_tick_rate: BASE_TICK_RATE,
            tick_rate: BASE_TICK_RATE,
            ticks: 0,
        })
    }

    /// Throws the whole session away and starts over, either in the menu or
    /// straight into play. The host is put back on the base tick rate.
    pub fn reset(&mut self, restart: Restart, host: &mut impl Host) -> Result<()> {
        let mut fresh = Game::new(host)?;
        fresh.phase = match restart {
            Restart::Menu => Phase::Menu,
            Restart::Playing => Phase::Playing,
        };
        *self = fresh;
        host.set_tick_rate(self.tick_rate);
        info!("new game, starting in {:?}", self.phase);
        Ok(())
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// The bonus fruit on the field, if any.
    pub fn bonus(&self) -> Option<&BonusFruit> {
        self.bonus.as_ref()
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn in_menu(&self) -> bool {
        self.phase == Phase::Menu
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bonus_counter(&self) -> u32 {
        self.bonus_counter
    }

    pub fn bonus_threshold(&self) -> u32 {
        self.bonus_threshold
    }

    /// Ticks left on the speed boost, 0 when not boosted.
    pub fn speed_boost_ticks(&self) -> u32 {
        self.speed_boost_ticks
    }

    pub fn base_tick_rate(&self) -> u32 {
        self.base_tick_rate
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Ticks advanced since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Turns the snake right away. A request to reverse into its own neck is
    /// refused and `false` is returned.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.opposite() == self.direction {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Applies one frame worth of key presses, then advances the game by a
    /// tick if it is being played.
    ///
    /// Leaving the menu or restarting after a game over uses up the frame.
    pub fn frame(&mut self, keys: &[Key], host: &mut impl Host) -> Result<Option<MoveOutcome>> {
        match self.phase {
            Phase::Menu => {
                if keys.contains(&Key::Confirm) {
                    self.phase = Phase::Playing;
                    info!("game started");
                    host.play_cue(Cue::BackgroundLoop);
                }
                Ok(None)
            }
            Phase::GameOver => {
                if keys.contains(&Key::Confirm) {
                    self.reset(Restart::Playing, host)?;
                    host.play_cue(Cue::BackgroundLoop);
                }
                Ok(None)
            }
            Phase::Playing | Phase::Paused => {
                for &key in keys {
                    if key == Key::Pause {
                        self.toggle_pause();
                    } else if let Some(direction) = key.direction() {
                        self.request_direction(direction);
                    }
                }
                self.advance_tick(host)
            }
        }
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
        debug!("phase now {:?}", self.phase);
    }

    /// Moves the game forward by one tick. Does nothing (and returns `None`)
    /// unless the game is being played.
    pub fn advance_tick(&mut self, host: &mut impl Host) -> Result<Option<MoveOutcome>> {
        if self.phase != Phase::Playing {
            return Ok(None);
        }
        self.ticks += 1;

        let outcome = self.snake.move_towards(self.direction, &self.border);
        if outcome.is_collision() {
            self.phase = Phase::GameOver;
            info!("{:?} after {} ticks, score {}", outcome, self.ticks, self.score);
            host.play_cue(Cue::GameOver);
            return Ok(Some(outcome));
        }

        let head = self.snake.head();
        if head == self.food.position {
            self.snake.grow();
            self.food = Food::spawn(host, &self.border, &self.snake, self.bonus.as_ref())?;
            self.score += 1;
            host.play_cue(Cue::Eat);
        }

        if let Some(fruit) = self.bonus.filter(|fruit| fruit.position == head) {
            self.bonus = None;
            self.consume_bonus(fruit.kind, host);
        }

        self.update_bonus(host)?;
        self.update_speed_boost(host);
        Ok(Some(outcome))
    }

    fn consume_bonus(&mut self, kind: BonusKind, host: &mut impl Host) {
        info!("{:?} collected", kind);
        host.play_cue(Cue::Bonus);
        match kind {
            BonusKind::ScoreBoost => self.score += SCORE_BOOST_POINTS,
            BonusKind::SpeedBoost => {
                self.speed_boost_ticks = SPEED_BOOST_TICKS;
                self.set_tick_rate(BOOST_TICK_RATE, host);
                host.play_cue(Cue::SpeedBoost);
            }
            BonusKind::SizeBoost => {
                for _ in 0..SIZE_BOOST_SEGMENTS {
                    self.snake.grow();
                }
            }
        }
    }

    fn update_bonus(&mut self, host: &mut impl Host) -> Result<()> {
        if let Some(fruit) = self.bonus.as_mut() {
            if fruit.tick() {
                debug!("bonus at {:?} expired", fruit.position);
                self.bonus = None;
            }
            return Ok(());
        }

        self.bonus_counter += 1;
        if self.bonus_counter >= self.bonus_threshold {
            self.bonus = Some(BonusFruit::spawn(host, &self.border, &self.snake, &self.food)?);
            self.bonus_counter = 0;
            self.bonus_threshold = roll_bonus_delay(host);
        }
        Ok(())
    }

    fn update_speed_boost(&mut self, host: &mut impl Host) {
        if self.speed_boost_ticks == 0 {
            return;
        }
        self.speed_boost_ticks -= 1;
        if self.speed_boost_ticks == 0 {
            debug!("speed boost over");
            self.set_tick_rate(self.base_tick_rate, host);
        }
    }

    fn set_tick_rate(&mut self, ticks_per_second: u32, host: &mut impl Host) {
        self.tick_rate = ticks_per_second;
        host.set_tick_rate(ticks_per_second);
    }
}

fn roll_bonus_delay(host: &mut impl Host) -> u32 {
    host.random_int(BONUS_DELAY_MIN as i32, BONUS_DELAY_MAX as i32) as u32
}
