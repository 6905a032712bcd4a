/// Arena bounds, layout constants and the scripted encounter.

use std::path::Path;

use anyhow::{bail, Context};
use glam::Vec2;

use crate::entities::{Behaviour, Enemy, Player, ProjectileType};

pub const WINDOW_TITLE: &str = "TooHoo";
pub const TARGET_FPS: u32 = 60;

// ── HUD layout ───────────────────────────────────────────────────────────────

pub const HP_TEXT_POS: Vec2 = Vec2::new(10.0, 10.0);
pub const HP_TEXT_SIZE: f32 = 24.0;
pub const OVERLAY_TEXT_SIZE: f32 = 40.0;
pub const PAUSED_TEXT: &str = "GAME PAUSED";
pub const GAME_OVER_TEXT: &str = "YOU DIED";

// ── Arena ────────────────────────────────────────────────────────────────────

/// The rectangular play field, `[0, width] × [0, height]` in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 720.0,
        }
    }
}

impl Arena {
    /// Inclusive on every edge.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

// ── Initial entities ─────────────────────────────────────────────────────────

pub fn initial_player() -> Player {
    Player {
        pos: Vec2::new(230.0, 660.0),
        size: Vec2::new(20.0, 20.0),
        speed: Vec2::new(5.0, 5.0),
        hp: 10,
    }
}

pub fn initial_enemy(behaviours: Vec<Behaviour>) -> Enemy {
    Enemy {
        pos: Vec2::new(230.0, 20.0),
        size: Vec2::new(20.0, 20.0),
        vel: Vec2::new(10.0, 10.0),
        behaviours,
        projectiles: Vec::new(),
    }
}

fn volley(name: &str, reload: u32, at_once: u8, angle_offset_increment: f32) -> ProjectileType {
    ProjectileType {
        name: name.to_string(),
        reload,
        at_once,
        angle_offset_increment,
        current_angle_offset: 0.0,
    }
}

/// The built-in encounter: five phases, 1860 frames (31 s at 60 FPS) in total.
pub fn default_encounter() -> Vec<Behaviour> {
    vec![
        Behaviour {
            frames: 60 * 2,
            projectile_types: vec![volley("big", 60, 7, 0.08)],
        },
        Behaviour {
            frames: 60 * 3,
            projectile_types: vec![volley("small", 20, 10, 0.05)],
        },
        Behaviour {
            frames: 60 * 3,
            projectile_types: vec![volley("", 25, 7, 0.1)],
        },
        Behaviour {
            frames: 60 * 3,
            projectile_types: vec![volley("small", 2, 12, 0.01)],
        },
        Behaviour {
            frames: 60 * 20,
            projectile_types: vec![volley("big", 40, 18, 0.025), volley("small", 25, 6, 0.01)],
        },
    ]
}

// ── Encounter files ──────────────────────────────────────────────────────────

/// Parse a JSON behaviour list, rejecting encounters the scheduler can't run.
pub fn parse_encounter(json: &str) -> anyhow::Result<Vec<Behaviour>> {
    let behaviours: Vec<Behaviour> =
        serde_json::from_str(json).context("encounter is not a valid behaviour list")?;

    if behaviours.is_empty() {
        bail!("encounter has no behaviours");
    }
    for (i, behaviour) in behaviours.iter().enumerate() {
        if let Some(j) = behaviour.projectile_types.iter().position(|t| t.reload == 0) {
            bail!("behaviour {i}, projectile type {j}: reload must be at least 1 frame");
        }
    }
    Ok(behaviours)
}

pub fn load_encounter(path: &Path) -> anyhow::Result<Vec<Behaviour>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read encounter {}", path.display()))?;
    let behaviours =
        parse_encounter(&json).with_context(|| format!("in encounter {}", path.display()))?;
    log::info!(
        "Loaded {} behaviours from {}",
        behaviours.len(),
        path.display()
    );
    Ok(behaviours)
}
