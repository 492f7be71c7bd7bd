/// Enemy and power-up factories.
///
/// Variant selection uses two chained threshold draws, and the second draw
/// only happens when the first one misses.  The resulting distribution is
/// therefore not the naive 30/30/40 split:
///
/// | variant          | condition                      | probability |
/// |------------------|--------------------------------|-------------|
/// | Fast / Shield    | `p1 > 0.7`                     | 0.30        |
/// | Zigzag / Health  | `p1 <= 0.7 && p2 > 0.4`        | 0.42        |
/// | Normal / Speed   | `p1 <= 0.7 && p2 <= 0.4`       | 0.28        |

use rand::Rng;

use crate::constants::*;
use crate::entities::{Enemy, EnemyKind, Playfield, PowerUp, PowerUpKind};

/// Pick one of three variants with the chained-threshold rule above.
/// `draw` is called once or twice, never more.
pub fn bucket<T>(mut draw: impl FnMut() -> f64, first: T, second: T, third: T) -> T {
    if draw() > FIRST_VARIANT_THRESHOLD {
        first
    } else if draw() > SECOND_VARIANT_THRESHOLD {
        second
    } else {
        third
    }
}

pub fn enemy_kind(rng: &mut impl Rng) -> EnemyKind {
    bucket(|| rng.gen::<f64>(), EnemyKind::Fast, EnemyKind::Zigzag, EnemyKind::Normal)
}

pub fn power_up_kind(rng: &mut impl Rng) -> PowerUpKind {
    bucket(
        || rng.gen::<f64>(),
        PowerUpKind::Shield,
        PowerUpKind::Health,
        PowerUpKind::Speed,
    )
}

/// `n` enemies at random columns, staggered up to one playfield height
/// above the top edge so they trickle in.
pub fn create_enemies(n: usize, field: &Playfield, rng: &mut impl Rng) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.gen::<f32>() * (field.width - ENEMY_WIDTH).max(0.0);
        let y = rng.gen::<f32>() * -field.height - ENEMY_HEIGHT;
        let speed = rng.gen::<f32>() * ENEMY_SPEED_SPREAD + ENEMY_MIN_SPEED;
        let kind = enemy_kind(rng);
        enemies.push(Enemy::new(x, y, speed, kind));
    }
    enemies
}

/// A single power-up entering from just above the top edge.
pub fn create_power_up(field: &Playfield, rng: &mut impl Rng) -> PowerUp {
    let x = rng.gen::<f32>() * (field.width - POWER_UP_SIZE).max(0.0);
    let kind = power_up_kind(rng);
    PowerUp::new(x, -POWER_UP_SIZE, kind)
}
