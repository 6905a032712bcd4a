use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use toohoo::compute::{init_state, tick};
use toohoo::config::{default_encounter, load_encounter, Arena, TARGET_FPS, WINDOW_TITLE};
use toohoo::display::{render, TerminalSurface};
use toohoo::entities::GameState;
use toohoo::input::{KeyboardState, TickInput};

#[derive(Parser)]
#[command(name = "toohoo")]
#[command(about = "Dodge a scripted bullet-hell encounter in the terminal")]
struct Args {
    /// JSON behaviour list to play instead of the built-in encounter
    #[arg(long)]
    encounter: Option<PathBuf>,

    /// Write log output to this file (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the built-in encounter as JSON and exit
    #[arg(long)]
    print_encounter: bool,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-step loop: one tick and one frame per 1/60 s until a quit key.
fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_time = Duration::from_secs(1) / TARGET_FPS;
    let mut keyboard = KeyboardState::new();

    loop {
        let frame_start = Instant::now();
        keyboard.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => keyboard.handle_key(key),
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }
        if keyboard.quit_requested() {
            log::info!("Quit at frame {}", state.frame);
            return Ok(());
        }

        let input = TickInput::poll(&keyboard);
        *state = tick(state, &input);

        render(surface, state);
        surface.present()?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_encounter {
        println!("{}", serde_json::to_string_pretty(&default_encounter())?);
        return Ok(());
    }

    init_logging(args.log_file.as_ref())?;

    let behaviours = match &args.encounter {
        Some(path) => load_encounter(path)?,
        None => default_encounter(),
    };
    let mut state = init_state(Arena::default(), behaviours);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))?;
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
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let arena = state.arena;
    let result = terminal::size().and_then(|(cols, rows)| {
        let mut surface = TerminalSurface::new(&mut out, arena, cols, rows);
        game_loop(&mut surface, &mut state, &rx)
    });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    log::info!("Final HP {} after {} frames", state.player.hp, state.frame);
    result.context("terminal I/O failed")
}
