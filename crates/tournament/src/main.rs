//! Tournament CLI
//!
//! Run head-to-head matches between Lines of Action players.

use loa_core::Engine;
use machine_engine::MachinePlayer;
use random_engine::RandomPlayer;
use std::env;
use std::path::Path;
use tournament::{MatchConfig, MatchReport, MatchRunner};

fn print_usage() {
    println!("Lines of Action match runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!();
    println!("Engines:");
    println!("  machine       - Alpha-beta search over the region heuristic");
    println!("  machine:N     - Same, searching to depth N");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Options:");
    println!("  --games N     - Games to play (default 10)");
    println!("  --depth D     - Search depth (default 3)");
    println!("  --opening N   - Random half-moves before play starts");
    println!("  --config FILE - Load match settings from a TOML file");
    println!("  --out FILE    - Save the match report as JSON");
    println!();
    println!("Examples:");
    println!("  tournament match machine random --games 20");
    println!("  tournament match machine:4 machine:2 --out report.json");
}

fn create_engine(spec: &str, default_depth: u32) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "machine" => {
            let depth = parts
                .get(1)
                .and_then(|d| d.parse().ok())
                .unwrap_or(default_depth);
            Box::new(MachinePlayer::with_depth(depth))
        }
        "random" => Box::new(RandomPlayer::new()),
        _ => {
            eprintln!("Unknown engine: {}, using machine", spec);
            Box::new(MachinePlayer::with_depth(default_depth))
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig {
        verbose: true,
        ..Default::default()
    };
    let mut out_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match MatchConfig::from_toml_file(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = MatchConfig { verbose: true, ..loaded },
                        Err(e) => {
                            eprintln!("Error loading config {}: {}", args[i + 1], e);
                            return;
                        }
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(config.depth);
                    i += 1;
                }
            }
            "--opening" => {
                if i + 1 < args.len() {
                    config.opening_random_plies =
                        args[i + 1].parse().unwrap_or(config.opening_random_plies);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", config.num_games, config.depth);
    println!();

    let mut engine1 = create_engine(engine1_spec, config.depth);
    let mut engine2 = create_engine(engine2_spec, config.depth);

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let report = MatchReport::new(
        engine1_spec.to_string(),
        engine2_spec.to_string(),
        config,
        result,
    );

    println!();
    println!("=== Final Result ===");
    println!("{}", report.summary());

    if let Some(path) = out_path {
        if let Err(e) = report.save(Path::new(&path)) {
            eprintln!("Warning: Failed to save report: {}", e);
        } else {
            println!("Report saved to {}", path);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
