/// Projectile pool: integrate, then drop whatever left the arena.

use crate::config::Arena;
use crate::entities::{Enemy, Projectile};

/// One Euler step: every projectile moves by its velocity.
pub fn advance(projectiles: &[Projectile]) -> Vec<Projectile> {
    projectiles
        .iter()
        .map(|p| Projectile {
            pos: p.pos + p.vel,
            ..p.clone()
        })
        .collect()
}

/// Keep projectiles whose position is inside the arena (edges included),
/// in their original order.
pub fn prune(projectiles: Vec<Projectile>, arena: &Arena) -> Vec<Projectile> {
    projectiles
        .into_iter()
        .filter(|p| arena.contains(p.pos))
        .collect()
}

pub fn update_projectiles(enemy: &Enemy, arena: &Arena) -> Enemy {
    Enemy {
        projectiles: prune(advance(&enemy.projectiles), arena),
        ..enemy.clone()
    }
}
