//! starship-headless: drive a STARSHIP session without a renderer.
//!
//! Runs a scripted autopilot for a number of frames and prints the final
//! `GameStateSnapshot` as JSON on stdout.
//!
//! Usage:
//!   starship-headless --seed 7 --frames 3600
//!   starship-headless --config session.json --dt 0.016 --pretty

use std::path::PathBuf;
use std::process;

use starship_core::commands::InputSignal;
use starship_core::constants::MAX_FRAME_DT;
use starship_core::events::GameEvent;
use starship_sim::entity::Entity;
use starship_sim::{Game, SimConfig};

/// Horizontal distance within which the autopilot holds still and fires.
const AIM_TOLERANCE: f32 = 4.0;

struct Options {
    config: Option<PathBuf>,
    seed: Option<u64>,
    frames: u32,
    dt: f32,
    pretty: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = match parse_options(&args) {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("Error: {msg}");
            print_usage();
            process::exit(1);
        }
    };

    let mut config = match &options.config {
        Some(path) => match SimConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }

    let dt = options.dt.min(MAX_FRAME_DT);
    if dt < options.dt {
        log::warn!("Frame delta {} clamped to {dt}", options.dt);
    }

    let mut game = Game::new(config);
    let mut frames_run = 0;
    for _ in 0..options.frames {
        drive(&mut game, dt);
        game.update(dt);
        frames_run += 1;

        for event in game.drain_events() {
            log_event(&event);
        }
        if game.is_game_over() {
            break;
        }
    }

    log::info!(
        "Stopped after {frames_run} frames: score {}, level {}, health {}",
        game.score(),
        game.level(),
        game.player().health()
    );

    let snapshot = game.snapshot();
    let json = if options.pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error serializing snapshot: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "starship-headless: run a STARSHIP session without a renderer\n\
         \n\
           --config <path>  Session config (.json: seed, width, height)\n\
           --seed <N>       RNG seed (overrides the config)\n\
           --frames <N>     Frames to simulate (default: 3600)\n\
           --dt <secs>      Frame delta, clamped to {MAX_FRAME_DT} (default: 1/60)\n\
           --pretty         Pretty-print the final snapshot\n\
         \n\
         Set RUST_LOG=debug to see every gameplay event.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T, String> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("invalid value for {flag}: {raw}")),
        None => Ok(default),
    }
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let seed = match flag_value(args, "--seed") {
        Some(raw) => Some(
            raw.parse()
                .map_err(|_| format!("invalid value for --seed: {raw}"))?,
        ),
        None => None,
    };
    let dt: f32 = parse_flag(args, "--dt", 1.0 / 60.0)?;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(format!("--dt must be positive, got {dt}"));
    }

    Ok(Options {
        config: flag_value(args, "--config").map(PathBuf::from),
        seed,
        frames: parse_flag(args, "--frames", 3600)?,
        dt,
        pretty: args.iter().any(|a| a == "--pretty"),
    })
}

/// Autopilot: slide under the lowest asteroid and keep firing at it.
fn drive(game: &mut Game, dt: f32) {
    let ship_x = game.player().position().x;
    let target_x = game
        .asteroids()
        .iter()
        .max_by(|a, b| a.position().y.total_cmp(&b.position().y))
        .map(|a| a.position().x);

    match target_x {
        Some(x) if x < ship_x - AIM_TOLERANCE => game.handle_input(InputSignal::MoveLeft, dt),
        Some(x) if x > ship_x + AIM_TOLERANCE => game.handle_input(InputSignal::MoveRight, dt),
        _ => game.handle_input(InputSignal::StopMoving, dt),
    }
    game.handle_input(InputSignal::Fire, dt);
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::ProjectileFired { .. } => log::trace!("{event:?}"),
        _ => log::debug!("{event:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let o = parse_options(&[]).unwrap();
        assert!(o.config.is_none());
        assert!(o.seed.is_none());
        assert_eq!(o.frames, 3600);
        assert!((o.dt - 1.0 / 60.0).abs() < 1e-9);
        assert!(!o.pretty);
    }

    #[test]
    fn test_flags() {
        let o = parse_options(&args(&[
            "--seed", "9", "--frames", "10", "--dt", "0.05", "--config", "s.json", "--pretty",
        ]))
        .unwrap();
        assert_eq!(o.seed, Some(9));
        assert_eq!(o.frames, 10);
        assert_eq!(o.dt, 0.05);
        assert_eq!(o.config, Some(PathBuf::from("s.json")));
        assert!(o.pretty);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(parse_options(&args(&["--seed", "x"])).is_err());
        assert!(parse_options(&args(&["--frames", "-1"])).is_err());
        assert!(parse_options(&args(&["--dt", "0"])).is_err());
    }

    #[test]
    fn test_autopilot_session_runs() {
        let mut game = Game::new(SimConfig::default());
        for _ in 0..600 {
            drive(&mut game, 1.0 / 60.0);
            game.update(1.0 / 60.0);
        }
        assert!(game.time().frame > 0);
        assert!(game.player().health() <= 3);
    }
}
