use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use rand::Rng;
use rand::rngs::ThreadRng;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::config::{BASE_TICK_RATE, GRID_HEIGHT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::error::Result;
use crate::game::{Game, Phase};
use crate::host::{Cue, Host};
use crate::input::FrameInput;
use crate::render;
use crate::summary::SessionSummary;

/// Time between two ticks at `ticks_per_second`.
pub fn tick_interval(ticks_per_second: u32) -> Duration {
    Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64)
}

/// Host owned by the window loop. There is no audio backend, cues end up in
/// the log.
struct WindowHost {
    rng: ThreadRng,
    tick_interval: Duration,
}

impl WindowHost {
    fn new(ticks_per_second: u32) -> Self {
        Self { rng: rand::thread_rng(), tick_interval: tick_interval(ticks_per_second) }
    }
}

impl Host for WindowHost {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    fn play_cue(&mut self, cue: Cue) {
        info!("cue: {}", cue.name());
    }

    fn set_tick_rate(&mut self, ticks_per_second: u32) {
        debug!("tick rate {} per second", ticks_per_second);
        self.tick_interval = tick_interval(ticks_per_second);
    }
}

fn log_summary(game: &Game, started_at: DateTime<Local>) {
    match SessionSummary::new(game, started_at, Local::now()).to_json() {
        Ok(json) => info!("session {json}"),
        Err(err) => error!("could not serialize session: {err}"),
    }
}

/// Opens the window and drives the game until it is closed.
///
/// Key presses are gathered between ticks and handed to the game in one go;
/// the loop sleeps until the next tick is due.
pub fn run() -> Result<()> {
    //create window and event loop
    let event_loop = EventLoop::new();

    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    //rendering buffer through Pixels, one buffer pixel per screen pixel
    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface)?;

    let mut host = WindowHost::new(BASE_TICK_RATE);
    let mut game = Game::new(&mut host)?;
    let mut input = FrameInput::new();
    let mut started_at = Local::now();
    let mut next_tick = Instant::now();
    window.set_title(&render::title(&game));
    info!("window open, {}x{} cells", GRID_WIDTH, GRID_HEIGHT);

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input: key, .. } => {
                    if let Some(code) = key.virtual_keycode {
                        input.record(code, key.state);
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_tick {
                    let before = game.phase();
                    if let Err(err) = game.frame(&input.take(), &mut host) {
                        error!("{err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    match (before, game.phase()) {
                        (Phase::Menu | Phase::GameOver, Phase::Playing) => started_at = Local::now(),
                        (Phase::Playing | Phase::Paused, Phase::GameOver) => log_summary(&game, started_at),
                        _ => {}
                    }
                    window.set_title(&render::title(&game));
                    window.request_redraw();
                    next_tick = now + host.tick_interval;
                }
                *control_flow = ControlFlow::WaitUntil(next_tick);
            }

            Event::RedrawRequested(_) => {
                render::draw(pixels.frame_mut(), &game);
                if let Err(err) = pixels.render() {
                    error!("pixels.render: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::LoopDestroyed => info!("closing"),
            _ => {}
        }
    });
}
