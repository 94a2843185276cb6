//! Grid snake: a snake that grows on food, dies on walls and on itself, and
//! now and then finds a bonus fruit with a short-lived effect.
//!
//! The game core ([`game`], [`snake`], [`food`]) only talks to the outside
//! world through [`host::Host`]; [`event_loop`] wires it to a window.

pub mod border;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod font;
pub mod food;
pub mod game;
pub mod host;
pub mod input;
pub mod log;
pub mod render;
pub mod snake;
pub mod summary;

pub use error::{Error, Result};
pub use game::{Game, Phase, Restart};
