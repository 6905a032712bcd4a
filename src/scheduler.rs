/// Behaviour scheduling.
///
/// Behaviours run back to back, once each. The frame counter is walked
/// through the list by subtracting durations; once it passes the total the
/// enemy goes quiet for good.

use crate::entities::{Behaviour, Enemy};
use crate::spawn::create_projectiles;

/// The behaviour selected for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveBehaviour {
    pub index: usize,
    /// Frame counter left after subtracting every duration up to and
    /// including this behaviour's. Always in `-frames..0`.
    pub remaining: i64,
}

/// First behaviour whose cumulative duration exceeds `frame`.
pub fn select_behaviour(behaviours: &[Behaviour], frame: u64) -> Option<ActiveBehaviour> {
    let mut remaining = i64::try_from(frame).unwrap_or(i64::MAX);
    for (index, behaviour) in behaviours.iter().enumerate() {
        remaining -= i64::from(behaviour.frames);
        if remaining < 0 {
            return Some(ActiveBehaviour { index, remaining });
        }
    }
    None
}

/// Whether a projectile type with this reload fires given the remaining
/// counter. The remainder is taken on the negative running value, so reload
/// timing is phased against the end of the behaviour.
pub fn fires(remaining: i64, reload: u32) -> bool {
    if reload == 0 {
        log::debug!("projectile type with zero reload never fires");
        return false;
    }
    remaining % i64::from(reload) == 0
}

/// Run the enemy's script for one frame: fire every projectile type of the
/// active behaviour that is due, appending the volleys to the pool.
pub fn run_behaviour(enemy: &Enemy, frame: u64) -> Enemy {
    let Some(active) = select_behaviour(&enemy.behaviours, frame) else {
        return enemy.clone();
    };

    let behaviour = &enemy.behaviours[active.index];
    if active.remaining == -i64::from(behaviour.frames) {
        log::debug!("behaviour {} begins at frame {}", active.index, frame);
    }

    let origin = enemy.centre();
    let mut projectiles = enemy.projectiles.clone();
    let projectile_types = behaviour
        .projectile_types
        .iter()
        .map(|kind| {
            if !fires(active.remaining, kind.reload) {
                return kind.clone();
            }
            let (next, volley) = create_projectiles(kind, origin);
            projectiles.extend(volley);
            next
        })
        .collect();

    let mut behaviours = enemy.behaviours.clone();
    behaviours[active.index] = Behaviour {
        projectile_types,
        ..behaviour.clone()
    };

    Enemy {
        behaviours,
        projectiles,
        ..enemy.clone()
    }
}
