/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game.  No game logic is performed; this module only translates state
/// into terminal commands.  The playfield is measured in logical units and
/// every terminal cell covers `CELL_WIDTH × CELL_HEIGHT` of them.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::Rng;

use arcade_shooter::effects;
use arcade_shooter::entities::{Bounds, EffectKind, EnemyKind, Playfield, PowerUpKind};
use arcade_shooter::game::{Game, Phase};
use arcade_shooter::leaderboard::Leaderboard;
use arcade_shooter::storage::ScoreStore;

pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

/// Rows used outside the play area: HUD, top border, bottom border, hint.
const CHROME_ROWS: u16 = 4;
/// First terminal row of the play area.
const PLAY_TOP: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_HEALTH: Color = Color::Red;
const C_PLAYER: Color = Color::Blue;
const C_PLAYER_SHIELDED: Color = Color::Cyan;
const C_PROJECTILE: Color = Color::Yellow;
const C_ENEMY_NORMAL: Color = Color::Red;
const C_ENEMY_FAST: Color = Color::DarkYellow;
const C_ENEMY_ZIGZAG: Color = Color::Magenta;
const C_POWER_SHIELD: Color = Color::Cyan;
const C_POWER_HEALTH: Color = Color::Magenta;
const C_POWER_SPEED: Color = Color::Green;
const C_POWERUP_ACTIVE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Logical playfield for a terminal of `cols × rows` cells.
pub fn playfield_for(cols: u16, rows: u16) -> Playfield {
    Playfield::new(
        cols.saturating_sub(2) as f32 * CELL_WIDTH,
        rows.saturating_sub(CHROME_ROWS) as f32 * CELL_HEIGHT,
    )
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame of the running, paused or finished game.
pub fn render<W: Write, S: ScoreStore, R: Rng>(
    out: &mut W,
    game: &Game<S, R>,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, game, width)?;

    let session = game.session();
    for enemy in &session.enemies {
        let color = match enemy.kind {
            EnemyKind::Normal => C_ENEMY_NORMAL,
            EnemyKind::Fast => C_ENEMY_FAST,
            EnemyKind::Zigzag => C_ENEMY_ZIGZAG,
        };
        fill_box(out, &enemy.bounds(), "█", color, width, height)?;
    }
    for power_up in &session.power_ups {
        let (symbol, color) = match power_up.kind {
            PowerUpKind::Shield => ("◯", C_POWER_SHIELD),
            PowerUpKind::Health => ("♥", C_POWER_HEALTH),
            PowerUpKind::Speed => ("»", C_POWER_SPEED),
        };
        fill_box(out, &power_up.bounds(), symbol, color, width, height)?;
    }
    for projectile in &session.projectiles {
        fill_box(out, &projectile.bounds(), "║", C_PROJECTILE, width, height)?;
    }

    draw_player(out, game, width, height)?;
    draw_controls_hint(out, height)?;

    match game.phase() {
        Phase::Paused => draw_paused(out, width, height)?,
        Phase::GameOver => draw_game_over(out, game, width, height)?,
        _ => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Name entry screen shown before the first session.
pub fn render_menu<W: Write>(
    out: &mut W,
    name: &str,
    high_score: u32,
    leaderboard: &Leaderboard,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = width / 2;
    let cy = height / 2;

    let title = "▲  ARCADE  SHOOTER  ▲";
    centered(out, title, cx, cy.saturating_sub(8), Color::Cyan)?;
    if high_score > 0 {
        centered(out, &format!("Best Score: {}", high_score), cx, cy.saturating_sub(7), Color::Yellow)?;
    }

    let prompt = format!("Pilot name: {}_", name);
    centered(out, &prompt, cx, cy.saturating_sub(5), Color::White)?;
    centered(out, "ENTER : Start   ESC : Quit", cx, cy.saturating_sub(4), C_HINT)?;

    draw_leaderboard(out, leaderboard, cx, cy.saturating_sub(2))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in PLAY_TOP..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write, S: ScoreStore, R: Rng>(
    out: &mut W,
    game: &Game<S, R>,
    width: u16,
) -> std::io::Result<()> {
    let hud = game.hud();

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>5}  Hi:{:>5}", hud.score, hud.high_score)))?;

    let level_str = format!("[ LEVEL {} ]", hud.level);
    let lx = (width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Active effects + health — right side
    let session = game.session();
    let mut tags = String::new();
    if let Some(ticks) = effects::remaining_ticks(session, EffectKind::Shield) {
        tags.push_str(&format!("[◯ {:>2}s] ", seconds(ticks)));
    }
    if let Some(ticks) = effects::remaining_ticks(session, EffectKind::SpeedBoost) {
        tags.push_str(&format!("[» {:>2}s] ", seconds(ticks)));
    }
    let bar_len = (hud.health / 10) as usize;
    let health_str = format!("HP {:>3} {}{}", hud.health, "█".repeat(bar_len), "░".repeat(10 - bar_len));
    let right_str = format!("{}{}", tags, health_str);

    let rx = width.saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    if !tags.is_empty() {
        out.queue(style::SetForegroundColor(C_POWERUP_ACTIVE))?;
        out.queue(Print(&tags))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health_str))?;
    Ok(())
}

fn seconds(ticks: u64) -> u64 {
    ticks / arcade_shooter::constants::TICKS_PER_SECOND + 1
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Terminal column / row for a logical point inside the play area.
fn to_cell(x: f32, y: f32) -> (i32, i32) {
    (
        1 + (x / CELL_WIDTH).floor() as i32,
        PLAY_TOP as i32 + (y / CELL_HEIGHT).floor() as i32,
    )
}

fn inside(col: i32, row: i32, width: u16, height: u16) -> bool {
    col >= 1 && col < width as i32 - 1 && row >= PLAY_TOP as i32 && row < height as i32 - 2
}

/// Paint every visible cell covered by `bounds`.
fn fill_box<W: Write>(
    out: &mut W,
    bounds: &Bounds,
    symbol: &str,
    color: Color,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (c0, r0) = to_cell(bounds.left, bounds.top);
    // Right/bottom edges are exclusive; nudge so exact multiples stay out.
    let (c1, r1) = to_cell(bounds.right - 0.01, bounds.bottom - 0.01);
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..=r1 {
        for col in c0..=c1 {
            if inside(col, row, width, height) {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print(symbol))?;
            }
        }
    }
    Ok(())
}

fn draw_player<W: Write, S: ScoreStore, R: Rng>(
    out: &mut W,
    game: &Game<S, R>,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    // Sprite (rows of the player box):
    //    ▲       ← tip at the centre column
    //  /███\     ← wings across the full width
    let p = &game.session().player;
    let color = if p.invincible { C_PLAYER_SHIELDED } else { C_PLAYER };
    out.queue(style::SetForegroundColor(color))?;

    let b = p.bounds();
    let (tip_col, tip_row) = to_cell(p.x, p.y);
    if inside(tip_col, tip_row, width, height) {
        out.queue(cursor::MoveTo(tip_col as u16, tip_row as u16))?;
        out.queue(Print("▲"))?;
    }

    let (left, _) = to_cell(b.left, b.top);
    let (right, bottom) = to_cell(b.right - 0.01, b.bottom - 0.01);
    for row in (tip_row + 1)..=bottom {
        for col in left..=right {
            if !inside(col, row, width, height) {
                continue;
            }
            let glyph = if col == left {
                "/"
            } else if col == right {
                "\\"
            } else {
                "█"
            };
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   P : Pause   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn centered<W: Write>(out: &mut W, text: &str, cx: u16, row: u16, color: Color) -> std::io::Result<()> {
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let cx = width / 2;
    let cy = height / 2;
    centered(out, "╔══════════════╗", cx, cy.saturating_sub(1), Color::Yellow)?;
    centered(out, "║    PAUSED    ║", cx, cy, Color::Yellow)?;
    centered(out, "╚══════════════╝", cx, cy + 1, Color::Yellow)?;
    centered(out, "P - Resume", cx, cy + 2, Color::White)?;
    Ok(())
}

fn draw_game_over<W: Write, S: ScoreStore, R: Rng>(
    out: &mut W,
    game: &Game<S, R>,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let hud = game.hud();
    let new_best = hud.final_score >= hud.high_score && hud.final_score > 0;
    let score_line = format!("Final Score: {:>5}", hud.final_score);
    let best_line = if new_best {
        format!("★ NEW BEST: {:>5} ★", hud.high_score)
    } else {
        format!("Best Score:  {:>5}", hud.high_score)
    };

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(9);

    centered(out, "╔════════════════════╗", cx, start_row, Color::Red)?;
    centered(out, "║    GAME  OVER      ║", cx, start_row + 1, Color::Red)?;
    centered(out, "╚════════════════════╝", cx, start_row + 2, Color::Red)?;
    centered(out, &score_line, cx, start_row + 3, Color::Yellow)?;
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };
    centered(out, &best_line, cx, start_row + 4, best_color)?;
    centered(out, "R - Play Again  N - New Pilot  Q - Quit", cx, start_row + 5, Color::White)?;

    draw_leaderboard(out, game.leaderboard(), cx, start_row + 7)?;
    Ok(())
}

fn draw_leaderboard<W: Write>(
    out: &mut W,
    leaderboard: &Leaderboard,
    cx: u16,
    row: u16,
) -> std::io::Result<()> {
    if leaderboard.is_empty() {
        return Ok(());
    }
    centered(out, "── LEADERBOARD ──", cx, row, Color::Cyan)?;
    for (i, entry) in leaderboard.entries().iter().enumerate() {
        let line = format!("{:>2}. {:<12} {:>5}", i + 1, entry.name, entry.score);
        centered(out, &line, cx, row + 1 + i as u16, Color::White)?;
    }
    Ok(())
}
