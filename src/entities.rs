/// All game entity types: pure data, no logic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Arena;

// ── Palette ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Black,
    White,
    Gray,
    Red,
    Magenta,
    Purple,
    SkyBlue,
    Maroon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    /// Terminal state: later ticks change nothing.
    GameOver,
}

// ── Projectile archetypes ─────────────────────────────────────────────────────

/// The three projectile tiers. Anything that isn't "small" or "big" is
/// `Normal`, including the empty name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileKind {
    Small,
    Normal,
    Big,
}

impl ProjectileKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "small" => ProjectileKind::Small,
            "big" => ProjectileKind::Big,
            _ => ProjectileKind::Normal,
        }
    }

    /// Speed magnitude in pixels per frame.
    pub fn speed(self) -> f32 {
        match self {
            ProjectileKind::Small => 7.0,
            ProjectileKind::Normal => 5.0,
            ProjectileKind::Big => 3.0,
        }
    }

    pub fn size(self) -> Vec2 {
        match self {
            ProjectileKind::Small => Vec2::new(10.0, 10.0),
            ProjectileKind::Normal => Vec2::new(20.0, 20.0),
            ProjectileKind::Big => Vec2::new(30.0, 30.0),
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            ProjectileKind::Small => 1,
            ProjectileKind::Normal => 2,
            ProjectileKind::Big => 3,
        }
    }

    pub fn colour(self) -> Colour {
        match self {
            ProjectileKind::Small => Colour::Purple,
            ProjectileKind::Normal => Colour::Maroon,
            ProjectileKind::Big => Colour::SkyBlue,
        }
    }
}

/// Volley descriptor. `current_angle_offset` and the sign of
/// `angle_offset_increment` carry over from one volley to the next.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileType {
    #[serde(default)]
    pub name: String,
    /// Frames between volleys.
    pub reload: u32,
    /// Projectiles per volley.
    pub at_once: u8,
    /// Radians added to the offset after every volley.
    pub angle_offset_increment: f32,
    #[serde(default)]
    pub current_angle_offset: f32,
}

impl ProjectileType {
    pub fn kind(&self) -> ProjectileKind {
        ProjectileKind::from_name(&self.name)
    }
}

/// A timed phase of the encounter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Behaviour {
    pub frames: u32,
    pub projectile_types: Vec<ProjectileType>,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    /// Bounding size; half the width is the collision and draw radius.
    pub size: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    /// Set once the projectile has hit the player; it never hits again.
    pub harmless: bool,
    pub colour: Colour,
}

impl Projectile {
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    pub hp: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Unused: the enemy is stationary.
    pub vel: Vec2,
    pub behaviours: Vec<Behaviour>,
    pub projectiles: Vec<Projectile>,
}

impl Enemy {
    /// Volleys originate here.
    pub fn centre(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemy: Enemy,
    pub arena: Arena,
    /// Frames simulated while running; never reset during a match.
    pub frame: u64,
    pub status: GameStatus,
}
