//! Draws a [`Game`] into an RGBA frame buffer of `SCREEN_WIDTH x SCREEN_HEIGHT`
//! pixels, HUD and menu/pause/game-over text included, and builds the status
//! line shown as window title.

use crate::config::{BONUS_BLINK_TICKS, CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::food::{BonusFruit, BonusKind};
use crate::font::{self, Rgba};
use crate::game::Game;
use crate::snake::Position;

const BACKGROUND: Rgba = [0xF5, 0xF5, 0xF5, 0xFF];
const GRID_LINE: Rgba = [0xC8, 0xC8, 0xC8, 0xFF];
const FOOD: Rgba = [0xE6, 0x29, 0x37, 0xFF];
const SCORE_BONUS: Rgba = [0xFF, 0xCB, 0x00, 0xFF];
const SPEED_BONUS: Rgba = [0x00, 0x79, 0xF1, 0xFF];
const SIZE_BONUS: Rgba = [0xC8, 0x7A, 0xFF, 0xFF];
const HEAD: Rgba = [0x00, 0x75, 0x2C, 0xFF];
const BODY: Rgba = [0x00, 0xE4, 0x30, 0xFF];
const HUD_TEXT: Rgba = [0x20, 0x20, 0x20, 0xFF];
const OVERLAY_TEXT: Rgba = [0xFF, 0xFF, 0xFF, 0xFF];

const HUD_MARGIN: u32 = 10;
const HUD_SCALE: u32 = 2;

pub fn draw(frame: &mut [u8], game: &Game) {
    //clear background
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }
    if game.in_menu() {
        shade(frame);
        draw_menu(frame);
        return;
    }

    draw_grid(frame);
    fill_cell(frame, game.food().position, FOOD);
    if let Some(bonus) = game.bonus() {
        fill_cell(frame, bonus.position, bonus_color(bonus));
    }
    // tail first so the head stays on top of a grown duplicate
    for (i, seg) in game.snake().body().iter().enumerate().rev() {
        fill_cell(frame, *seg, if i == 0 { HEAD } else { BODY });
    }
    draw_hud(frame, game);

    if game.is_paused() {
        shade(frame);
        draw_overlay(frame, "PAUSED", "PRESS P TO CONTINUE");
    } else if game.is_game_over() {
        shade(frame);
        draw_overlay(frame, "GAME OVER", "PRESS ENTER TO PLAY AGAIN");
    }
}

fn draw_menu(frame: &mut [u8]) {
    font::draw_text_centered(frame, "SNAKE", SCREEN_HEIGHT / 5, 6, OVERLAY_TEXT);
    let lines = ["PRESS ENTER TO PLAY", "ARROWS TO STEER", "P TO PAUSE"];
    let mut y = SCREEN_HEIGHT / 2;
    for line in lines {
        font::draw_text_centered(frame, line, y, HUD_SCALE, OVERLAY_TEXT);
        y += 30;
    }
    font::draw_text_centered(frame, "WALLS ARE DEADLY", y + 10, HUD_SCALE, FOOD);
}

fn draw_hud(frame: &mut [u8], game: &Game) {
    let score = format!("SCORE: {}", game.score());
    font::draw_text(frame, &score, HUD_MARGIN, HUD_MARGIN, HUD_SCALE, HUD_TEXT);

    if let Some(bonus) = game.bonus() {
        let fruit = format!("FRUIT: {}", fruit_seconds(bonus));
        font::draw_text(frame, &fruit, HUD_MARGIN, HUD_MARGIN + 30, HUD_SCALE, bonus_color(bonus));
    }
    if game.speed_boost_ticks() > 0 {
        let text = "SPEED BONUS";
        let x = SCREEN_WIDTH.saturating_sub(font::text_width(text, HUD_SCALE) + HUD_MARGIN);
        font::draw_text(frame, text, x, HUD_MARGIN, HUD_SCALE, SPEED_BONUS);
    }
}

fn draw_overlay(frame: &mut [u8], heading: &str, hint: &str) {
    font::draw_text_centered(frame, heading, SCREEN_HEIGHT / 2 - 50, 4, OVERLAY_TEXT);
    font::draw_text_centered(frame, hint, SCREEN_HEIGHT / 2 + 30, HUD_SCALE, OVERLAY_TEXT);
}

/// Whole seconds left on a bonus fruit, rounded up.
fn fruit_seconds(bonus: &BonusFruit) -> u32 {
    bonus.timer / 10 + 1
}

/// Text the window shows for the current state.
pub fn title(game: &Game) -> String {
    if game.in_menu() {
        return format!(
            "{WINDOW_TITLE} | press enter to play | arrows steer, p pauses | walls are deadly"
        );
    }

    let mut parts = vec![WINDOW_TITLE.to_string(), format!("score: {}", game.score())];
    if let Some(bonus) = game.bonus() {
        parts.push(format!("fruit: {}", fruit_seconds(bonus)));
    }
    if game.speed_boost_ticks() > 0 {
        parts.push("speed bonus".to_string());
    }
    if game.is_paused() {
        parts.push("paused, press p to continue".to_string());
    }
    if game.is_game_over() {
        parts.push("game over, press enter to play again".to_string());
    }
    parts.join(" | ")
}

/// A fruit about to vanish blinks on a three tick cadence.
pub fn is_blinking(bonus: &BonusFruit) -> bool {
    bonus.timer < BONUS_BLINK_TICKS && (bonus.timer / 3) % 2 == 0
}

fn bonus_color(bonus: &BonusFruit) -> Rgba {
    let color = match bonus.kind {
        BonusKind::ScoreBoost => SCORE_BONUS,
        BonusKind::SpeedBoost => SPEED_BONUS,
        BonusKind::SizeBoost => SIZE_BONUS,
    };
    if is_blinking(bonus) { blend(color, BACKGROUND) } else { color }
}

fn blend(a: Rgba, b: Rgba) -> Rgba {
    let mix = |i: usize| ((a[i] as u16 + b[i] as u16) / 2) as u8;
    [mix(0), mix(1), mix(2), 0xFF]
}

fn draw_grid(frame: &mut [u8]) {
    let width = SCREEN_WIDTH as usize;
    for (i, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let (px, py) = (i % width, i / width);
        if px % CELL_SIZE as usize == 0 || py % CELL_SIZE as usize == 0 {
            pixel.copy_from_slice(&GRID_LINE);
        }
    }
}

// darken everything, used behind menu/pause/game over text
fn shade(frame: &mut [u8]) {
    for pixel in frame.chunks_exact_mut(4) {
        for channel in &mut pixel[..3] {
            *channel /= 2;
        }
    }
}

fn fill_cell(frame: &mut [u8], pos: Position, color: Rgba) {
    let cell = CELL_SIZE as i32;
    let width = SCREEN_WIDTH as i32;
    let height = SCREEN_HEIGHT as i32;
    for dy in 0..cell {
        for dx in 0..cell {
            let px = pos.x * cell + dx;
            let py = pos.y * cell + dy;
            if px < 0 || py < 0 || px >= width || py >= height {
                continue;
            }
            let i = ((py * width + px) * 4) as usize;
            if i + 4 <= frame.len() {
                frame[i..i + 4].copy_from_slice(&color);
            }
        }
    }
}
