/// game size in "cells", no pixels
pub const GRID_WIDTH: i32 = 30;
pub const GRID_HEIGHT: i32 = 20;
/// every cell is drawn as CELL_SIZE x CELL_SIZE pixels
pub const CELL_SIZE: u32 = 20;
pub const SCREEN_WIDTH: u32 = GRID_WIDTH as u32 * CELL_SIZE;
pub const SCREEN_HEIGHT: u32 = GRID_HEIGHT as u32 * CELL_SIZE;

pub const WINDOW_TITLE: &str = "snake";

// Pacing, in ticks per second.
pub const BASE_TICK_RATE: u32 = 10;
pub const BOOST_TICK_RATE: u32 = 15;

// Timers below are counted in ticks (50 ticks = 5 seconds at the base rate).
pub const SPEED_BOOST_TICKS: u32 = 50;
pub const BONUS_LIFETIME_TICKS: u32 = 50;
pub const BONUS_DELAY_MIN: u32 = 80;
pub const BONUS_DELAY_MAX: u32 = 120;
/// a bonus fruit starts blinking when fewer ticks than this are left
pub const BONUS_BLINK_TICKS: u32 = 20;

pub const SCORE_BOOST_POINTS: u32 = 5;
pub const SIZE_BOOST_SEGMENTS: usize = 3;

/// upper bound on random draws when looking for a free cell
pub const SPAWN_ATTEMPTS: usize = 20_000;

pub const LOG_FILE: &str = "snake.log";
/// environment variable holding a `log::LevelFilter` name
pub const LOG_LEVEL_VAR: &str = "SNAKE_LOG";
