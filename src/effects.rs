/// Timed power-up effects.
///
/// Temporary effects are stored in the session as `ActiveEffect` records and
/// reverted by `expire_effects` once the tick counter reaches their expiry.
/// Nothing is deferred outside the session, so a reset drops pending
/// reversals and a paused session does not age them.

use log::debug;

use crate::constants::*;
use crate::entities::{ActiveEffect, EffectKind, PowerUpKind, Session};

/// Apply a collected power-up to the session.
pub fn apply_power_up(session: &mut Session, kind: PowerUpKind, duration_ticks: u64) {
    let expires_at_tick = session.tick + duration_ticks;
    match kind {
        PowerUpKind::Speed => {
            let boosted = session.player.speed + SPEED_BOOST;
            session.player.set_speed(boosted);
            session.effects.push(ActiveEffect {
                kind: EffectKind::SpeedBoost,
                expires_at_tick,
            });
        }
        PowerUpKind::Shield => {
            session.player.invincible = true;
            session.effects.push(ActiveEffect {
                kind: EffectKind::Shield,
                expires_at_tick,
            });
        }
        PowerUpKind::Health => {
            session.health = (session.health + HEALTH_RESTORE).min(MAX_HEALTH);
        }
    }
    debug!("Applied {:?} at tick {}", kind, session.tick);
}

/// Revert every effect whose expiry tick has been reached.  Each speed boost
/// undoes exactly its own increment; invincibility holds while any shield
/// is still running.  Returns the number of effects that expired.
pub fn expire_effects(session: &mut Session) -> usize {
    let now = session.tick;
    let (expired, active): (Vec<ActiveEffect>, Vec<ActiveEffect>) = session
        .effects
        .iter()
        .partition(|e| e.expires_at_tick <= now);

    for effect in &expired {
        if effect.kind == EffectKind::SpeedBoost {
            let restored = session.player.speed - SPEED_BOOST;
            session.player.set_speed(restored);
        }
        debug!("{:?} expired at tick {}", effect.kind, now);
    }

    session.player.invincible = active.iter().any(|e| e.kind == EffectKind::Shield);
    session.effects = active;
    expired.len()
}

/// Ticks left on the longest-running effect of `kind`, if any.
pub fn remaining_ticks(session: &Session, kind: EffectKind) -> Option<u64> {
    session
        .effects
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.expires_at_tick.saturating_sub(session.tick))
        .max()
}
