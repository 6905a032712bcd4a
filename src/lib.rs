//! TooHoo: a single-encounter bullet-hell.
//!
//! - `entities`: pure data (player, enemy, behaviours, projectiles)
//! - `config`: arena bounds, layout constants and the scripted encounter
//! - `spawn`: volley geometry
//! - `scheduler`: which behaviour is active and when it fires
//! - `pool`: projectile integration and pruning
//! - `compute`: the per-tick state machine
//! - `input` / `display`: the terminal collaborators

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod input;
pub mod pool;
pub mod scheduler;
pub mod spawn;
