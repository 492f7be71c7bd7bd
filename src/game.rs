/// The game loop controller.
///
/// `Game` owns the session and is the only thing that mutates it.  Input
/// arrives as `Command`s, time advances one `tick()` per frame, and the UI
/// reads the result through `hud()` and `session()`.  All randomness comes
/// through the injected RNG so callers control determinism.
///
/// The power-up drop clock counts host frames, paused ones included; effect
/// expiry counts running ticks only.

use log::{debug, info, warn};
use rand::Rng;

use crate::collision::{self, CollisionReport};
use crate::config::GameConfig;
use crate::effects;
use crate::entities::{Playfield, Session};
use crate::leaderboard::Leaderboard;
use crate::spawner;
use crate::storage::ScoreStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No session started yet.
    Idle,
    Running,
    Paused,
    /// Terminal until `Start` or `Restart`.
    GameOver,
}

/// Abstract input, already decoupled from keys and touches.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Start(String),
    MoveLeft,
    MoveRight,
    StopMove,
    Shoot,
    Pause,
    Resume,
    TogglePause,
    Restart,
    Resize { width: f32, height: f32 },
}

/// Values the UI shows outside the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub health: u32,
    pub high_score: u32,
    pub game_over: bool,
    /// Score at the moment of the last game over, `0` before that.
    pub final_score: u32,
}

/// Summary of one running tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// Enemies that fell past the bottom edge and were recycled.
    pub recycled: u32,
    pub expired_effects: usize,
    pub power_up_spawned: bool,
    pub collisions: CollisionReport,
    pub game_over: bool,
}

pub struct Game<S: ScoreStore, R: Rng> {
    config: GameConfig,
    session: Session,
    phase: Phase,
    player_name: Option<String>,
    high_score: u32,
    final_score: u32,
    /// Frames since the session began, paused frames included.
    spawn_clock: u64,
    leaderboard: Leaderboard,
    store: S,
    rng: R,
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    /// An idle game on `field`.  Unreadable records are logged and treated
    /// as empty.
    pub fn new(config: GameConfig, field: Playfield, store: S, rng: R) -> Self {
        let high_score = store.load_high_score().unwrap_or_else(|e| {
            warn!("Could not load high score, starting from 0: {}", e);
            0
        });
        let mut leaderboard = store.load_leaderboard().unwrap_or_else(|e| {
            warn!("Could not load leaderboard, starting empty: {}", e);
            Leaderboard::new()
        });
        leaderboard.limit(config.leaderboard_capacity);
        Game {
            config,
            session: Session::new(field),
            phase: Phase::Idle,
            player_name: None,
            high_score,
            final_score: 0,
            spawn_clock: 0,
            leaderboard,
            store,
            rng,
        }
    }

    // ── Read-only views ──────────────────────────────────────────────────────

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.session.score,
            level: self.session.level,
            health: self.session.health,
            high_score: self.high_score,
            game_over: self.phase == Phase::GameOver,
            final_score: self.final_score,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Start(name) => self.start(&name),
            Command::MoveLeft if self.phase == Phase::Running => self.session.player.move_left(),
            Command::MoveRight if self.phase == Phase::Running => self.session.player.move_right(),
            Command::StopMove if self.phase == Phase::Running => self.session.player.stop(),
            Command::Shoot if self.phase == Phase::Running => self.session.shoot(),
            Command::Pause | Command::TogglePause if self.phase == Phase::Running => {
                self.phase = Phase::Paused;
                info!("Paused at tick {}", self.session.tick);
            }
            Command::Resume | Command::TogglePause if self.phase == Phase::Paused => {
                self.phase = Phase::Running;
                info!("Resumed at tick {}", self.session.tick);
            }
            Command::Restart if self.player_name.is_some() && self.phase != Phase::Idle => {
                self.reset();
            }
            Command::Resize { width, height } => {
                self.session.resize(Playfield::new(width, height));
                debug!("Playfield resized to {}x{}", width, height);
            }
            other => debug!("Ignoring {:?} while {:?}", other, self.phase),
        }
    }

    fn start(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            debug!("Start rejected: empty player name");
            return;
        }
        if !matches!(self.phase, Phase::Idle | Phase::GameOver) {
            debug!("Start ignored while {:?}", self.phase);
            return;
        }
        self.player_name = Some(name.to_string());
        self.reset();
    }

    /// Fresh session on the current playfield, straight into `Running`.
    fn reset(&mut self) {
        let field = self.session.field;
        let mut session = Session::new(field);
        session.enemies =
            spawner::create_enemies(self.config.initial_enemy_count, &field, &mut self.rng);
        self.session = session;
        self.final_score = 0;
        self.spawn_clock = 0;
        self.phase = Phase::Running;
        info!(
            "New session for {} on {}x{}",
            self.player_name.as_deref().unwrap_or("?"),
            field.width,
            field.height
        );
    }

    // ── Frame ────────────────────────────────────────────────────────────────

    /// Advance the simulation by one frame.  Returns `None` unless running,
    /// though a paused session still gets its scheduled power-up drops.
    pub fn tick(&mut self) -> Option<TickReport> {
        let power_up_spawned = match self.phase {
            Phase::Running | Phase::Paused => self.advance_spawn_clock(),
            Phase::Idle | Phase::GameOver => false,
        };
        if self.phase != Phase::Running {
            return None;
        }

        let session = &mut self.session;
        let rng = &mut self.rng;
        session.tick += 1;
        let mut report = TickReport {
            tick: session.tick,
            power_up_spawned,
            ..TickReport::default()
        };

        // ── 1. Effects ───────────────────────────────────────────────────────
        report.expired_effects = effects::expire_effects(session);

        // ── 2. Movement ──────────────────────────────────────────────────────
        let field = session.field;
        session.player.update(&field);

        // Reinforcements from a level-up start moving next tick.
        let count = session.enemies.len();
        for i in 0..count {
            if session.enemies[i].update(&field, rng) {
                report.recycled += 1;
                collision::award_point(session, rng);
            }
        }

        session.projectiles.retain_mut(|p| {
            p.update();
            !p.is_off_field()
        });
        session.power_ups.retain_mut(|p| {
            p.update();
            !p.is_off_field(&field)
        });

        // ── 3. Collisions ────────────────────────────────────────────────────
        report.collisions =
            collision::resolve_collisions(session, self.config.effect_duration_ticks, rng);

        if session.enemies.is_empty() {
            let n = self.config.initial_enemy_count.max(1);
            session.enemies = spawner::create_enemies(n, &field, rng);
            debug!("Wave cleared, sending {} more", n);
        }

        // ── 4. Game over ─────────────────────────────────────────────────────
        if session.is_dead() {
            self.enter_game_over();
            report.game_over = true;
        }

        Some(report)
    }

    /// Count one frame on the drop clock and drop a power-up when it comes
    /// due.  A drop made while paused waits at the top until play resumes.
    fn advance_spawn_clock(&mut self) -> bool {
        self.spawn_clock += 1;
        let interval = self.config.power_up_interval_ticks;
        if interval == 0 || self.spawn_clock % interval != 0 {
            return false;
        }
        let power_up = spawner::create_power_up(&self.session.field, &mut self.rng);
        debug!("Dropping {:?} power-up", power_up.kind);
        self.session.power_ups.push(power_up);
        true
    }

    /// Record the result and persist it.  Storage failures are logged only.
    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        let score = self.session.score;
        self.final_score = score;
        let name = self.player_name.clone().unwrap_or_default();
        info!("Game over for {} with {} points", name, score);

        self.leaderboard
            .submit(&name, score, self.config.leaderboard_capacity);
        if let Err(e) = self.store.save_leaderboard(&self.leaderboard) {
            warn!("Could not save leaderboard: {}", e);
        }

        if score > self.high_score {
            self.high_score = score;
            info!("New high score {}", score);
            if let Err(e) = self.store.save_high_score(score) {
                warn!("Could not save high score: {}", e);
            }
        }
    }
}
