//! headless-run: scripted NIGHTSWARM run without a frontend.
//!
//! Starts a game from the main menu, holds the trigger, and steps the
//! director on a synthetic 60Hz clock, printing game events as they
//! occur and the final frame snapshot as JSON. Same seed, same output.
//!
//! Usage:
//!   headless-run [--seed <n>] [--ticks <n>]

use std::process;

use nightswarm_app::director::{DirectorConfig, GameDirector};
use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::constants::TICK_RATE;
use nightswarm_core::types::FrameTime;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut seed: u64 = 42;
    let mut ticks: u64 = 1200; // 20 seconds at 60Hz

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                seed = parse_number(&args, i);
                i += 2;
            }
            "--ticks" => {
                ticks = parse_number(&args, i);
                i += 2;
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }

    let mut director = GameDirector::new(DirectorConfig {
        seed,
        ..Default::default()
    });
    // Start Game is the hovered main-menu entry.
    director.queue_command(PlayerCommand::Select);

    let dt_secs = 1.0 / TICK_RATE as f32;
    let mut last = None;
    for tick in 0..ticks {
        let now_ms = tick * 1000 / TICK_RATE as u64;
        let snapshot = director.tick(FrameTime::new(now_ms, dt_secs));
        for event in &snapshot.events {
            let line = serde_json::to_string(event).expect("event serializes");
            println!("[{now_ms:>6} ms] {line}");
        }
        last = Some(snapshot);
        if !director.is_running() {
            break;
        }
    }

    if let Some(snapshot) = last {
        let json = serde_json::to_string_pretty(&snapshot).expect("snapshot serializes");
        println!("{json}");
    }
}

fn parse_number(args: &[String], i: usize) -> u64 {
    match args.get(i + 1).and_then(|value| value.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("Expected a number after {}", args[i]);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "headless-run: scripted NIGHTSWARM session\n\
         \n\
         Options:\n\
           --seed <n>    RNG seed (default: 42)\n\
           --ticks <n>   Frames to simulate at 60Hz (default: 1200)\n"
    );
}
