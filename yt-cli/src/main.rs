//! yt: CLI binary for yacht-dice.
//!
//! Subcommands:
//! - sim   (batch of automatic games on simulated dice)
//! - play  (interactive game on stdin)

mod term;

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;
use yt_core::{Category, DieId, GameConfig, Phase, TickOutcome, TurnController, NUM_DICE};
use yt_runtime::{game_seed, GameTask, Scheduler};
use yt_sim::SimPhysics;

use crate::term::{board_table, dice_line, TerminalDisplay};

/// Logs go to stderr; `YT_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("YT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {}", flag);
        process::exit(1);
    }
    args[i + 1].parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, args[i + 1]);
        process::exit(1);
    })
}

fn load_config(path: Option<&str>) -> GameConfig {
    match path {
        Some(p) => GameConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {}", p, e);
            process::exit(1);
        }),
        None => GameConfig::default(),
    }
}

fn cmd_sim(args: &[String]) {
    let mut games: u64 = 100;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;
    let mut steps_per_tick: u32 = 64;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yt sim

USAGE:
    yt sim [--games N] [--seed S] [--config PATH] [--steps-per-tick K]

OPTIONS:
    --games N             Number of games to play (default: 100)
    --seed S              Base seed, overrides sim.seed from the config
    --config PATH         YAML game config (default: built-in rules)
    --steps-per-tick K    Work units per game per scheduler tick (default: 64)
"#
                );
                return;
            }
            "--games" => {
                games = parse_value(args, i, "--games");
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--config" => {
                config_path = Some(parse_value(args, i, "--config"));
                i += 2;
            }
            "--steps-per-tick" => {
                steps_per_tick = parse_value(args, i, "--steps-per-tick");
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yt sim`: {}", other);
                eprintln!("Run `yt sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    let mut cfg = load_config(config_path.as_deref());
    if let Some(s) = seed {
        cfg.sim.seed = s;
    }
    if games == 0 {
        eprintln!("--games must be at least 1");
        process::exit(1);
    }

    info!(games, seed = cfg.sim.seed, chance = ?cfg.sim.chance, "starting simulation");
    let tasks: Vec<_> = (0..games).map(|id| GameTask::greedy(id, &cfg)).collect();
    let mut sched = Scheduler::new(tasks, steps_per_tick);
    sched.run(u64::MAX);

    let scores: Vec<u32> = sched.final_scores().into_iter().flatten().collect();
    let bonuses = sched
        .tasks()
        .iter()
        .filter(|t| t.controller().session().board.bonus() > 0)
        .count();
    let stats = sched.stats();
    if scores.is_empty() {
        eprintln!("No game finished ({} failed)", stats.failed);
        process::exit(1);
    }

    let n = scores.len() as f64;
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
    let var = scores
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let mut sorted = scores.clone();
    sorted.sort_unstable();
    let median = sorted[sorted.len() / 2];

    println!("Simulation:");
    println!("  - Games: {} (failed: {})", games, stats.failed);
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        mean,
        median,
        var.sqrt(),
        sorted[0],
        sorted[sorted.len() - 1]
    );
    println!(
        "  - Upper bonus rate: {:.1}%",
        bonuses as f64 / n * 100.0
    );
    println!("  - Scheduler ticks: {}", stats.ticks);

    if stats.failed > 0 {
        process::exit(1);
    }
}

type PlayController = TurnController<SimPhysics, TerminalDisplay>;

/// Step the simulated dice until the roll resolves.
fn settle(ctl: &mut PlayController) {
    loop {
        ctl.physics_mut().step();
        match ctl.tick() {
            TickOutcome::Settling { .. } => continue,
            TickOutcome::Settled | TickOutcome::Idle => break,
        }
    }
}

fn play_help() {
    println!(
        r#"Commands:
    roll              Throw every die that is not held
    hold <1-5>        Hold or release a die
    score <category>  Score the held dice, e.g. `score fullHouse`
    board             Show the score table
    help              Show this list
    quit              Leave the game"#
    );
}

fn cmd_play(args: &[String]) {
    let mut seed: Option<u64> = None;
    let mut config_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yt play

USAGE:
    yt play [--seed S] [--config PATH]

OPTIONS:
    --seed S         Dice seed (default: sim.seed from the config)
    --config PATH    YAML game config (default: built-in rules)
"#
                );
                return;
            }
            "--seed" => {
                seed = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--config" => {
                config_path = Some(parse_value(args, i, "--config"));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `yt play`: {}", other);
                eprintln!("Run `yt play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let mut cfg = load_config(config_path.as_deref());
    if let Some(s) = seed {
        cfg.sim.seed = game_seed(s, 0);
    }
    let physics = SimPhysics::new(&cfg.sim);
    let mut ctl = TurnController::new(&cfg, physics, TerminalDisplay::default());

    println!("yt {} - type `help` for commands", env!("CARGO_PKG_VERSION"));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if ctl.current_state() == Phase::GameOver {
            break;
        }
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {}", e);
                process::exit(1);
            }
            None => break,
        };
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };
        match (cmd, words.next()) {
            ("roll", None) => match ctl.request_roll() {
                Ok(_) => {
                    settle(&mut ctl);
                    println!("{}", dice_line(ctl.session()));
                }
                Err(e) => println!("error: {}", e),
            },
            ("hold", Some(n)) => match n.parse::<usize>() {
                Ok(n) if (1..=NUM_DICE).contains(&n) => {
                    match ctl.toggle_hold((n - 1) as DieId) {
                        Ok(_) => println!("{}", dice_line(ctl.session())),
                        Err(e) => println!("error: {}", e),
                    }
                }
                _ => println!("error: die must be 1-{}", NUM_DICE),
            },
            ("score", Some(name)) => match name.parse::<Category>() {
                Ok(cat) => match ctl.commit_category(cat) {
                    Ok(score) => println!("{} scored {}", cat, score),
                    Err(e) => println!("error: {}", e),
                },
                Err(e) => println!("error: {}", e),
            },
            ("board", None) => {
                println!("{}", board_table(ctl.session(), &ctl.display().previews));
            }
            ("help", None) => play_help(),
            ("quit", None) | ("exit", None) => break,
            _ => println!("error: unknown command `{}` (try `help`)", line.trim()),
        }
    }
    println!("Final score: {}", ctl.total_score());
}

fn print_help() {
    eprintln!(
        r#"yt - yacht dice

USAGE:
    yt [-v|--verbose] <COMMAND> [OPTIONS]

COMMANDS:
    sim                 Play a batch of automatic games and print score stats
    play                Play a game interactively on stdin

OPTIONS:
    -v, --verbose       Debug logging (or set YT_LOG, e.g. YT_LOG=yt_core=debug)
    -h, --help          Print this help message
    -V, --version       Print version
"#
    );
}

fn print_version() {
    println!("yt {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().skip(1).any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }
    init_tracing(verbose);

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "sim" => {
            cmd_sim(&args[2..]);
        }
        "play" => {
            cmd_play(&args[2..]);
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `yt --help` for usage.");
            process::exit(1);
        }
    }
}
