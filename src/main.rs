mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use arcade_shooter::config::GameConfig;
use arcade_shooter::game::{Command, Game, Phase};
use arcade_shooter::storage::FileStore;

type TerminalGame = Game<FileStore, StdRng>;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS, one tick per frame

/// Min frames between shots while Space is held.
const SHOOT_COOLDOWN: u32 = 6;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// OS key-repeat refreshes the key well before the window runs out.
const HOLD_WINDOW: u64 = 8;

const MAX_NAME_LEN: usize = 12;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

#[derive(Clone, Copy, PartialEq)]
enum Heading {
    Left,
    Right,
    Still,
}

// ── Name entry ────────────────────────────────────────────────────────────────

/// Blocks until a non-empty name is confirmed.  `None` → quit.
fn prompt_name<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    game: &mut TerminalGame,
) -> std::io::Result<Option<String>> {
    let mut name = String::new();
    loop {
        display::render_menu(out, &name, game.high_score(), game.leaderboard())?;
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) => {
                match code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Enter if !name.trim().is_empty() => return Ok(Some(name)),
                    KeyCode::Backspace => {
                        name.pop();
                    }
                    KeyCode::Char(c) if !c.is_control() && name.chars().count() < MAX_NAME_LEN => {
                        name.push(c);
                    }
                    _ => {}
                }
            }
            Ok(Event::Resize(cols, rows)) => {
                let field = display::playfield_for(cols, rows);
                game.handle(Command::Resize { width: field.width, height: field.height });
            }
            Ok(_) => {}
            Err(_) => return Ok(None),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    NewPilot,
}

/// Runs frames until the player quits or asks for a new pilot.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// of every key.  Each frame, the held direction keys are reduced to one
/// heading and only a *change* of heading becomes a move/stop command, so
/// holding a key behaves like the browser keydown/keyup pair.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut TerminalGame,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<LoopExit> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut heading = Heading::Still;
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    let left_keys = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
    let right_keys = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(LoopExit::Quit);
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(LoopExit::Quit);
                            }
                            KeyCode::Char('p') | KeyCode::Char('P') => {
                                game.handle(Command::TogglePause);
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') => {
                                game.handle(Command::Restart);
                                heading = Heading::Still;
                            }
                            KeyCode::Char('n') | KeyCode::Char('N')
                                if game.phase() == Phase::GameOver =>
                            {
                                return Ok(LoopExit::NewPilot);
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Resize(cols, rows) => {
                    let field = display::playfield_for(cols, rows);
                    game.handle(Command::Resize { width: field.width, height: field.height });
                }
                _ => {}
            }
        }

        // ── Turn held keys into commands ──────────────────────────────────────
        if game.phase() == Phase::Running {
            let wanted = if any_held(&key_frame, &left_keys, frame) {
                Heading::Left
            } else if any_held(&key_frame, &right_keys, frame) {
                Heading::Right
            } else {
                Heading::Still
            };
            if wanted != heading {
                game.handle(match wanted {
                    Heading::Left => Command::MoveLeft,
                    Heading::Right => Command::MoveRight,
                    Heading::Still => Command::StopMove,
                });
                heading = wanted;
            }

            if shoot_cooldown == 0 && is_held(&key_frame, &KeyCode::Char(' '), frame) {
                game.handle(Command::Shoot);
                shoot_cooldown = SHOOT_COOLDOWN;
            }
        }
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        game.tick();
        display::render(out, game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = GameConfig::from_env();
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!("Starting arcade_shooter, records in {}", config.data_dir.display());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().map_err(|e| {
        error!("Failed to enable raw mode: {}", e);
        e
    })?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config);
    if let Err(e) = &result {
        error!("Terminal error: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("Exiting");
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let store = FileStore::new(&config.data_dir);
    let mut game = Game::new(
        config,
        display::playfield_for(cols, rows),
        store,
        StdRng::from_entropy(),
    );

    loop {
        let Some(name) = prompt_name(out, rx, &mut game)? else {
            break;
        };
        game.handle(Command::Start(name));
        match game_loop(out, &mut game, rx)? {
            LoopExit::Quit => break,
            LoopExit::NewPilot => continue,
        }
    }
    Ok(())
}
