/// Collision detection, scoring and difficulty scaling.
///
/// The pass is enemy-major: each enemy is tested against the player and
/// then against every live projectile.  Destroyed entities are only marked
/// dead during the scan and compacted afterwards, so indices never shift
/// under the loop.

use log::{debug, info};
use rand::Rng;

use crate::constants::*;
use crate::effects;
use crate::entities::{PowerUpKind, Session};
use crate::spawner;

/// What happened during one collision pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    /// Enemies destroyed by projectiles.
    pub kills: u32,
    /// Enemy contacts with the player, shielded or not.
    pub player_hits: u32,
    pub damage_taken: u32,
    pub pickups: Vec<PowerUpKind>,
}

/// Add one point; every tenth point raises the level, speeds up the enemies
/// already in play and sends in `level` new ones.
pub fn award_point(session: &mut Session, rng: &mut impl Rng) {
    session.score += 1;
    if session.score % POINTS_PER_LEVEL == 0 {
        level_up(session, rng);
    }
}

fn level_up(session: &mut Session, rng: &mut impl Rng) {
    session.level += 1;
    for enemy in &mut session.enemies {
        enemy.speed += LEVEL_UP_SPEED_INCREMENT;
    }
    let reinforcements = spawner::create_enemies(session.level as usize, &session.field, rng);
    session.enemies.extend(reinforcements);
    info!(
        "Level {} reached at score {} ({} enemies in play)",
        session.level,
        session.score,
        session.enemies.len()
    );
}

/// Take one enemy contact.  Returns the damage actually dealt.
pub fn damage_player(session: &mut Session) -> u32 {
    if session.player.invincible {
        return 0;
    }
    let before = session.health;
    session.health = session.health.saturating_sub(ENEMY_CONTACT_DAMAGE);
    before - session.health
}

/// Run every collision check for the current tick.
pub fn resolve_collisions(
    session: &mut Session,
    effect_duration_ticks: u64,
    rng: &mut impl Rng,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let player_box = session.player.bounds();

    // Enemies spawned by a level-up during the scan join next tick.
    let scanned = session.enemies.len();
    for ei in 0..scanned {
        if !session.enemies[ei].alive {
            continue;
        }
        let enemy_box = session.enemies[ei].bounds();

        if player_box.intersects(&enemy_box) {
            report.player_hits += 1;
            report.damage_taken += damage_player(session);
        }

        let hit = session
            .projectiles
            .iter()
            .position(|p| p.alive && p.bounds().intersects(&enemy_box));
        if let Some(pi) = hit {
            session.projectiles[pi].alive = false;
            session.enemies[ei].alive = false;
            report.kills += 1;
            award_point(session, rng);
        }
    }

    let mut picked = Vec::new();
    session.power_ups.retain(|power_up| {
        if player_box.intersects(&power_up.bounds()) {
            picked.push(power_up.kind);
            false
        } else {
            true
        }
    });
    for kind in &picked {
        effects::apply_power_up(session, *kind, effect_duration_ticks);
    }
    report.pickups = picked;

    session.enemies.retain(|e| e.alive);
    session.projectiles.retain(|p| p.alive);

    if report.kills > 0 || report.damage_taken > 0 {
        debug!(
            "Collisions: {} kills, {} damage, health {}",
            report.kills, report.damage_taken, session.health
        );
    }
    report
}
