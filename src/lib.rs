//! Core of a single-player arcade shooter: a craft at the bottom of the
//! playfield dodges and shoots descending enemies and catches power-ups.
//!
//! The library is render-agnostic.  A front-end feeds [`game::Command`]s
//! into a [`game::Game`], calls [`game::Game::tick`] once per frame and
//! draws from the read-only views it exposes.

pub mod collision;
pub mod config;
pub mod constants;
pub mod effects;
pub mod entities;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod spawner;
pub mod storage;
