//! Capabilities the game core borrows from whatever runs it.
//!
//! The core never touches a window, a clock or an rng directly; the window
//! loop implements [`Host`] over its own resources, and [`RecordingHost`]
//! stands in for it when the game runs headless.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fire-and-forget sound cues.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cue {
    Eat,
    Bonus,
    GameOver,
    SpeedBoost,
    BackgroundLoop,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Eat => "eat",
            Cue::Bonus => "bonus-collected",
            Cue::GameOver => "game-over",
            Cue::SpeedBoost => "speed-boost-started",
            Cue::BackgroundLoop => "background-loop-start",
        }
    }
}

pub trait Host {
    /// Uniform integer in `min..=max`.
    fn random_int(&mut self, min: i32, max: i32) -> i32;

    fn play_cue(&mut self, cue: Cue);

    /// Changes how many ticks per second the frame loop drives.
    fn set_tick_rate(&mut self, ticks_per_second: u32);
}

/// Headless host: draws from any `rand` generator and remembers every cue and
/// pacing change it was handed.
pub struct RecordingHost<R = StdRng> {
    rng: R,
    pub cues: Vec<Cue>,
    pub tick_rates: Vec<u32>,
}

impl RecordingHost<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RecordingHost::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RecordingHost<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, cues: Vec::new(), tick_rates: Vec::new() }
    }

    /// Most recent rate set through [`Host::set_tick_rate`].
    pub fn tick_rate(&self) -> Option<u32> {
        self.tick_rates.last().copied()
    }

    pub fn played(&self, cue: Cue) -> bool {
        self.cues.contains(&cue)
    }
}

impl<R: Rng> Host for RecordingHost<R> {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn set_tick_rate(&mut self, ticks_per_second: u32) {
        self.tick_rates.push(ticks_per_second);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_int_is_inclusive() {
        let mut host = RecordingHost::seeded(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = host.random_int(1, 3);
            assert!((1..=3).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn records_cues_and_rates() {
        let mut host = RecordingHost::seeded(1);
        assert_eq!(host.tick_rate(), None);
        host.play_cue(Cue::Eat);
        host.set_tick_rate(15);
        host.set_tick_rate(10);
        assert!(host.played(Cue::Eat));
        assert!(!host.played(Cue::GameOver));
        assert_eq!(host.tick_rate(), Some(10));
        assert_eq!(Cue::GameOver.name(), "game-over");
    }

    #[test]
    fn cue_names() {
        let names: Vec<_> = [Cue::Eat, Cue::Bonus, Cue::GameOver, Cue::SpeedBoost, Cue::BackgroundLoop]
            .into_iter()
            .map(Cue::name)
            .collect();
        assert_eq!(
            names,
            ["eat", "bonus-collected", "game-over", "speed-boost-started", "background-loop-start"]
        );
    }
}
