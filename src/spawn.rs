/// Volley geometry.
///
/// A volley spreads `at_once` projectiles evenly across a cone centred on
/// +Y (screen-down, towards the player), rotated by the descriptor's current
/// angular offset.

use glam::Vec2;

use crate::entities::{Projectile, ProjectileType};

/// Offset past which the sweep turns around. Only the positive side turns.
const SWEEP_LIMIT: f32 = 0.3;

/// Full cone width in degrees.
fn cone_degrees(at_once: u8) -> f64 {
    if at_once < 5 {
        60.0
    } else {
        160.0
    }
}

/// Relative angles (radians) of each volley slot, before the offset.
///
/// Slots run from `-cone/2` to `+cone/2` inclusive. A single projectile
/// fires straight down the offset.
pub fn slot_angles(at_once: u8) -> Vec<f64> {
    if at_once == 1 {
        return vec![0.0];
    }
    let cone = cone_degrees(at_once).to_radians();
    let step = cone / f64::from(at_once.saturating_sub(1).max(1));
    (0..at_once)
        .map(|i| -cone / 2.0 + f64::from(i) * step)
        .collect()
}

/// Advance the sweep by one volley.
fn advance_offset(kind: &ProjectileType) -> (f32, f32) {
    let offset = kind.current_angle_offset + kind.angle_offset_increment;
    let increment = if offset > SWEEP_LIMIT {
        -kind.angle_offset_increment
    } else {
        kind.angle_offset_increment
    };
    (offset, increment)
}

/// Fire one volley from `origin`.
///
/// Returns the descriptor as it stands after the volley (offset advanced,
/// increment possibly flipped) together with exactly `at_once` projectiles.
pub fn create_projectiles(kind: &ProjectileType, origin: Vec2) -> (ProjectileType, Vec<Projectile>) {
    let tier = kind.kind();
    let speed = tier.speed();
    let offset = f64::from(kind.current_angle_offset);

    let projectiles = slot_angles(kind.at_once)
        .into_iter()
        .map(|angle| {
            let heading = angle + offset;
            Projectile {
                pos: origin,
                size: tier.size(),
                vel: Vec2::new(heading.sin() as f32 * speed, heading.cos() as f32 * speed),
                damage: tier.damage(),
                harmless: false,
                colour: tier.colour(),
            }
        })
        .collect();

    let (current_angle_offset, angle_offset_increment) = advance_offset(kind);
    let next = ProjectileType {
        current_angle_offset,
        angle_offset_increment,
        ..kind.clone()
    };

    (next, projectiles)
}
