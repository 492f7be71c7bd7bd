/// All game entity types, plus the per-tick movement rule of each.
///
/// Entities are plain data: they know how to move themselves and how big
/// they are, nothing else.  Scoring, damage and spawning live in
/// `collision`, `effects` and `spawner`.

use rand::Rng;

use crate::constants::*;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Size of the drawing surface in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Playfield {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Playfield::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT)
    }
}

/// Axis-aligned bounding box, `left..right` × `top..bottom` (y grows down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Strict overlap: boxes that only touch along an edge do not collide.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

// ── Variants ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Normal,
    Fast,
    /// Drifts sideways as a function of its height on screen.
    Zigzag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Invincibility for the effect duration.
    Shield,
    /// Instantly restores `HEALTH_RESTORE`, capped at `MAX_HEALTH`.
    Health,
    /// `+SPEED_BOOST` player speed for the effect duration.
    Speed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Shield,
    SpeedBoost,
}

/// A power-up effect waiting to be reverted once the session tick reaches
/// `expires_at_tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub expires_at_tick: u64,
}

// ── Player ───────────────────────────────────────────────────────────────────

/// `x` is the horizontal centre of the craft, `y` its top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity applied every tick.
    pub dx: f32,
    pub speed: f32,
    pub invincible: bool,
}

impl Player {
    /// A fresh craft centred on the bottom row of `field`.
    pub fn new(field: &Playfield) -> Self {
        let mut player = Player {
            x: field.width / 2.0,
            y: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            dx: 0.0,
            speed: PLAYER_SPEED,
            invincible: false,
        };
        player.place_on(field);
        player
    }

    pub fn move_left(&mut self) {
        self.dx = -self.speed;
    }

    pub fn move_right(&mut self) {
        self.dx = self.speed;
    }

    pub fn stop(&mut self) {
        self.dx = 0.0;
    }

    /// Change the cruise speed.  A craft already moving keeps its heading
    /// at the new speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        if self.dx != 0.0 {
            self.dx = self.dx.signum() * speed;
        }
    }

    pub fn update(&mut self, field: &Playfield) {
        self.x += self.dx;
        self.clamp_x(field);
    }

    /// Re-seat the craft after the playfield changed size.
    pub fn place_on(&mut self, field: &Playfield) {
        self.y = field.height - self.height - PLAYER_BOTTOM_MARGIN;
        self.clamp_x(field);
    }

    fn clamp_x(&mut self, field: &Playfield) {
        let half = self.width / 2.0;
        if self.x < half {
            self.x = half;
        }
        if self.x + half > field.width {
            self.x = field.width - half;
        }
    }

    pub fn bounds(&self) -> Bounds {
        let half = self.width / 2.0;
        Bounds {
            left: self.x - half,
            right: self.x + half,
            top: self.y,
            bottom: self.y + self.height,
        }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub alive: bool,
}

impl Projectile {
    pub fn new(x: f32, y: f32) -> Self {
        Projectile {
            x,
            y,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: PROJECTILE_SPEED,
            alive: true,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    pub fn is_off_field(&self) -> bool {
        self.y + self.height < 0.0
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            right: self.x + self.width,
            top: self.y,
            bottom: self.y + self.height,
        }
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// `(x, y)` is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub kind: EnemyKind,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32, kind: EnemyKind) -> Self {
        Enemy {
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed,
            kind,
            alive: true,
        }
    }

    /// Advance one tick.  Returns `true` when the enemy fell past the bottom
    /// edge and was recycled to a random column just above the playfield;
    /// the caller scores that as a point.
    pub fn update(&mut self, field: &Playfield, rng: &mut impl Rng) -> bool {
        self.y += self.speed;

        // Oscillation is locked to the vertical position, not to time.
        if self.kind == EnemyKind::Zigzag {
            self.x += (self.y / ZIGZAG_PERIOD).sin() * ZIGZAG_AMPLITUDE;
        }

        if self.y > field.height {
            self.y = -self.height;
            self.x = rng.gen::<f32>() * (field.width - self.width).max(0.0);
            return true;
        }
        false
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            right: self.x + self.width,
            top: self.y,
            bottom: self.y + self.height,
        }
    }
}

// ── Power-ups ────────────────────────────────────────────────────────────────

/// `(x, y)` is the centre of the pickup.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        PowerUp {
            x,
            y,
            size: POWER_UP_SIZE,
            kind,
        }
    }

    pub fn update(&mut self) {
        self.y += POWER_UP_FALL_SPEED;
    }

    pub fn is_off_field(&self, field: &Playfield) -> bool {
        self.y > field.height
    }

    pub fn bounds(&self) -> Bounds {
        let half = self.size / 2.0;
        Bounds {
            left: self.x - half,
            right: self.x + half,
            top: self.y - half,
            bottom: self.y + half,
        }
    }
}

// ── Session aggregate ────────────────────────────────────────────────────────

/// Everything that belongs to one play-through.  Owned by the loop
/// controller; every other module borrows it for the duration of a call.
#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub power_ups: Vec<PowerUp>,
    pub effects: Vec<ActiveEffect>,
    pub score: u32,
    pub level: u32,
    /// Always within `0..=MAX_HEALTH`.
    pub health: u32,
    /// Running ticks since the session started.  Frozen while paused.
    pub tick: u64,
    pub field: Playfield,
}

impl Session {
    /// An empty session on `field`: full health, level 1, no enemies yet.
    pub fn new(field: Playfield) -> Self {
        Session {
            player: Player::new(&field),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            power_ups: Vec::new(),
            effects: Vec::new(),
            score: 0,
            level: 1,
            health: MAX_HEALTH,
            tick: 0,
            field,
        }
    }

    /// Fire one projectile from the tip of the craft.
    pub fn shoot(&mut self) {
        self.projectiles
            .push(Projectile::new(self.player.x, self.player.y));
    }

    pub fn resize(&mut self, field: Playfield) {
        self.field = field;
        self.player.place_on(&field);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
