/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (or one of its parts) and returns a brand-new value. The
/// simulation is deterministic: it is driven by the frame counter and the
/// per-tick input only.

use glam::Vec2;

use crate::config::{initial_enemy, initial_player, Arena};
use crate::entities::{Behaviour, Enemy, GameState, GameStatus, Player, Projectile};
use crate::input::TickInput;
use crate::pool::update_projectiles;
use crate::scheduler::run_behaviour;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for an arena and an encounter script.
pub fn init_state(arena: Arena, behaviours: Vec<Behaviour>) -> GameState {
    GameState {
        player: initial_player(),
        enemy: initial_enemy(behaviours),
        arena,
        frame: 0,
        status: GameStatus::Running,
    }
}

// ── Player movement ──────────────────────────────────────────────────────────

/// Clamp one axis so `[pos, pos + size]` stays inside `[0, limit]`.
fn clamp_axis(next: f32, size: f32, limit: f32) -> f32 {
    if next < 0.0 {
        0.0
    } else if next + size > limit {
        limit - size
    } else {
        next
    }
}

/// Move the player by `delta`, each axis clamped independently.
pub fn move_player(player: &Player, delta: Vec2, arena: &Arena) -> Player {
    Player {
        pos: Vec2::new(
            clamp_axis(player.pos.x + delta.x, player.size.x, arena.width),
            clamp_axis(player.pos.y + delta.y, player.size.y, arena.height),
        ),
        ..player.clone()
    }
}

/// Apply the held directions. Each one is an independent move, so two
/// perpendicular holds give a diagonal.
fn apply_movement(player: &Player, input: &TickInput, arena: &Arena) -> Player {
    let moves = [
        (input.right, Vec2::new(player.speed.x, 0.0)),
        (input.left, Vec2::new(-player.speed.x, 0.0)),
        (input.down, Vec2::new(0.0, player.speed.y)),
        (input.up, Vec2::new(0.0, -player.speed.y)),
    ];
    moves
        .iter()
        .filter(|(held, _)| *held)
        .fold(player.clone(), |p, (_, delta)| move_player(&p, *delta, arena))
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Circle vs. axis-aligned rectangle; touching counts as a hit.
pub fn circle_hits_rect(centre: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let closest = centre.clamp(rect_pos, rect_pos + rect_size.max(Vec2::ZERO));
    centre.distance_squared(closest) <= radius * radius
}

/// Resolve projectile hits against the player. Each projectile damages at
/// most once: a hit marks it harmless.
pub fn check_collisions(player: &Player, projectiles: &[Projectile]) -> (Player, Vec<Projectile>) {
    let mut hp = player.hp;
    let projectiles = projectiles
        .iter()
        .map(|proj| {
            if proj.harmless || !circle_hits_rect(proj.pos, proj.radius(), player.pos, player.size) {
                return proj.clone();
            }
            hp = hp.saturating_sub(proj.damage);
            log::info!("Hit for {}, HP {}", proj.damage, hp);
            Projectile {
                harmless: true,
                ..proj.clone()
            }
        })
        .collect();

    (Player { hp, ..player.clone() }, projectiles)
}

// ── State machine ────────────────────────────────────────────────────────────

pub fn check_game_over(state: &GameState) -> GameStatus {
    if state.player.hp <= 0 {
        GameStatus::GameOver
    } else {
        state.status
    }
}

/// Flip between running and paused. Game over stays game over.
pub fn toggle_pause(status: GameStatus) -> GameStatus {
    match status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        GameStatus::GameOver => GameStatus::GameOver,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(state: &GameState, input: &TickInput) -> GameState {
    let status = if input.toggle_pause {
        let toggled = toggle_pause(state.status);
        if toggled != state.status {
            log::info!("{:?} -> {:?} at frame {}", state.status, toggled, state.frame);
        }
        toggled
    } else {
        state.status
    };

    if status != GameStatus::Running {
        return GameState {
            status,
            ..state.clone()
        };
    }

    // ── 1. Player movement ───────────────────────────────────────────────────
    let player = apply_movement(&state.player, input, &state.arena);

    // ── 2. Enemy script, then projectile step ────────────────────────────────
    let enemy = run_behaviour(&state.enemy, state.frame);
    let enemy = update_projectiles(&enemy, &state.arena);

    // ── 3. Collisions ────────────────────────────────────────────────────────
    let (player, projectiles) = check_collisions(&player, &enemy.projectiles);

    let next = GameState {
        player,
        enemy: Enemy {
            projectiles,
            ..enemy
        },
        frame: state.frame + 1,
        status,
        ..state.clone()
    };

    // ── 4. Game over ─────────────────────────────────────────────────────────
    let status = check_game_over(&next);
    if status == GameStatus::GameOver {
        log::info!("Game over at frame {}", state.frame);
    }
    GameState { status, ..next }
}
