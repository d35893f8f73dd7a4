//! Side Shooter entry point
//!
//! Native headless runner: drives the simulation with a scripted pilot and
//! prints the final snapshot as JSON. Rendering and device input belong to
//! a frontend built on top of the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use side_shooter::audio::{self, AudioSink, LogAudio, SoundEffect};
use side_shooter::sim::{Session, TickInput};
use side_shooter::{Game, LoopControl, Settings};

#[derive(Parser, Debug)]
#[command(name = "side-shooter")]
#[command(about = "Headless side-scrolling shooter run with a scripted pilot")]
struct Cli {
    /// Settings file (JSON); defaults apply when omitted
    settings: Option<PathBuf>,
    /// Frames to simulate before stopping
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Silence one-shot sound cues
    #[arg(long)]
    mute: bool,
}

/// Scripted pilot: keep shooting, hop over enemies that get close, advance
/// when the way is clear.
fn autopilot(session: &Session) -> TickInput {
    let player = &session.player.bounds;
    let nearest = session
        .level
        .enemies
        .values()
        .map(|e| e.bounds.left() - player.right())
        .filter(|gap| *gap > -player.size.x)
        .fold(f32::INFINITY, f32::min);

    TickInput {
        fire: true,
        jump: nearest < 30.0,
        right: nearest > 150.0,
        left: nearest < 60.0 && !session.player.jumping,
        ..Default::default()
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Side Shooter (native) starting...");

    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sound = LogAudio::new();
    sound.set_muted(cli.mute);
    sound.start_loop(SoundEffect::BackgroundLoop);

    for _ in 0..cli.frames {
        let input = autopilot(game.session());
        if game.step(&input) == LoopControl::Quit {
            break;
        }
        audio::dispatch(&mut sound, game.events());
        if game.session().is_game_over() {
            break;
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished at frame {}: level {}, score {}, outcome {:?}",
        snapshot.frame,
        snapshot.level,
        snapshot.score,
        snapshot.outcome
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Could not encode snapshot: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
