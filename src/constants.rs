// ── Playfield ────────────────────────────────────────────────────────────────

/// Simulated frames per second; every duration below is counted in ticks.
pub const TICKS_PER_SECOND: u64 = 60;

pub const DEFAULT_PLAYFIELD_WIDTH: f32 = 800.0;
pub const DEFAULT_PLAYFIELD_HEIGHT: f32 = 480.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Gap between the bottom of the player and the bottom edge.
pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;

pub const MAX_HEALTH: u32 = 100;
pub const ENEMY_CONTACT_DAMAGE: u32 = 20;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
pub const PROJECTILE_SPEED: f32 = 5.0;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 50.0;
pub const ENEMY_MIN_SPEED: f32 = 1.0;
/// Width of the uniform speed range above `ENEMY_MIN_SPEED`.
pub const ENEMY_SPEED_SPREAD: f32 = 2.0;
pub const INITIAL_ENEMY_COUNT: usize = 5;

/// Zigzag enemies drift by `sin(y / PERIOD) * AMPLITUDE` each tick.
pub const ZIGZAG_PERIOD: f32 = 20.0;
pub const ZIGZAG_AMPLITUDE: f32 = 5.0;

// ── Scoring & difficulty ─────────────────────────────────────────────────────

pub const POINTS_PER_LEVEL: u32 = 10;
pub const LEVEL_UP_SPEED_INCREMENT: f32 = 0.5;

// ── Power-ups ────────────────────────────────────────────────────────────────

pub const POWER_UP_SIZE: f32 = 30.0;
pub const POWER_UP_FALL_SPEED: f32 = 2.0;
pub const POWER_UP_INTERVAL_TICKS: u64 = 10 * TICKS_PER_SECOND;

pub const EFFECT_DURATION_TICKS: u64 = 5 * TICKS_PER_SECOND;
pub const SPEED_BOOST: f32 = 2.0;
pub const HEALTH_RESTORE: u32 = 20;

// ── Variant bucketing ────────────────────────────────────────────────────────

/// First draw above this picks the first variant (fast / shield).
pub const FIRST_VARIANT_THRESHOLD: f64 = 0.7;
/// Otherwise a fresh draw above this picks the second (zigzag / health).
pub const SECOND_VARIANT_THRESHOLD: f64 = 0.4;

// ── Leaderboard ──────────────────────────────────────────────────────────────

pub const LEADERBOARD_CAPACITY: usize = 10;
