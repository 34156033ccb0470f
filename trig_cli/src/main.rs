//! # Trigon CLI Application
//!
//! Prompt-driven front end for `trig_core`. Pick a panel from the menu,
//! answer its prompts (numbers may be written as `π/4`, `√3/2`, `2pi`), and
//! the result is printed with its step-by-step working.
//!
//! `--json <file|->` skips the menu: the file holds one [`Problem`] document
//! and the [`Solution`](trig_core::Solution) is printed as JSON.

mod panels;
mod prompt;
mod render;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use log::{debug, warn};
use trig_core::settings::{CalculatorLevel, Settings, ANGLE_MODE_ENV};
use trig_core::{AngleMode, Problem, TrigError};

const USAGE: &str = "\
Usage: trig_cli [OPTIONS]

Options:
  --deg            Angles in degrees (default)
  --rad            Angles in radians
  --no-steps       Hide step-by-step working
  --advanced       Start at the Advanced level
  --json <FILE>    Solve one JSON problem document (`-` reads stdin)
  -h, --help       Print this help

Environment:
  TRIG_ANGLE_MODE  Default angle mode (degrees|radians)
  RUST_LOG         Log filter, e.g. `debug`";

struct Args {
    settings: Settings,
    json: Option<String>,
}

enum Parsed {
    Run(Args),
    Help,
}

fn parse_args(settings: Settings, args: impl IntoIterator<Item = String>) -> Result<Parsed, String> {
    let mut out = Args { settings, json: None };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--deg" => out.settings.angle_mode = AngleMode::Degrees,
            "--rad" => out.settings.angle_mode = AngleMode::Radians,
            "--no-steps" => out.settings.show_steps = false,
            "--advanced" => out.settings.level = CalculatorLevel::Advanced,
            "--json" => match args.next() {
                Some(path) => out.json = Some(path),
                None => return Err("--json needs a file path or `-`".to_string()),
            },
            "-h" | "--help" => return Ok(Parsed::Help),
            other => return Err(format!("unknown option `{}`", other)),
        }
    }
    Ok(Parsed::Run(out))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let env_mode = std::env::var(ANGLE_MODE_ENV).ok();
    let (settings, recognised) = Settings::default().with_env_angle_mode(env_mode.as_deref());
    if !recognised {
        warn!(
            "ignoring {}={:?}; expected `degrees` or `radians`",
            ANGLE_MODE_ENV,
            env_mode.unwrap_or_default()
        );
    }

    let args = match parse_args(settings, std::env::args().skip(1)) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    debug!("settings: {:?}", args.settings);

    match args.json {
        Some(path) => run_json(&path),
        None => {
            run_interactive(args.settings);
            ExitCode::SUCCESS
        }
    }
}

fn read_document(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn solve_document(text: &str) -> Result<String, TrigError> {
    let problem: Problem = serde_json::from_str(text)?;
    let solution = problem.solve()?;
    Ok(serde_json::to_string_pretty(&solution)?)
}

fn run_json(path: &str) -> ExitCode {
    let text = match read_document(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match solve_document(&text) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_menu(settings: &Settings) -> &'static [panels::Panel] {
    let panels = panels::for_level(settings.level);
    println!();
    println!("Trigon - {}", settings.banner());
    println!("----------------------------------------");
    for (i, panel) in panels.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, panel.label());
    }
    println!();
    println!("   l. Switch level    m. Toggle degrees/radians");
    println!("   s. Toggle steps    q. Quit");
    panels
}

fn run_interactive(mut settings: Settings) {
    loop {
        let panels = print_menu(&settings);
        let Some(choice) = prompt::read_line("> ") else {
            println!();
            return;
        };

        match choice.as_str() {
            "" => continue,
            "q" | "quit" => return,
            "l" => {
                settings.level = match settings.level {
                    CalculatorLevel::Foundations => CalculatorLevel::Advanced,
                    CalculatorLevel::Advanced => CalculatorLevel::Foundations,
                };
            }
            "m" => {
                settings.angle_mode = match settings.angle_mode {
                    AngleMode::Degrees => AngleMode::Radians,
                    AngleMode::Radians => AngleMode::Degrees,
                };
            }
            "s" => settings.show_steps = !settings.show_steps,
            other => {
                let panel = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| panels.get(i));
                match panel {
                    Some(panel) => run_panel(*panel, &settings),
                    None => println!("Unknown choice `{}`", other),
                }
            }
        }
    }
}

fn run_panel(panel: panels::Panel, settings: &Settings) {
    println!();
    println!("{}", panel.label());
    let result = panel
        .read(settings)
        .and_then(|problem| problem.solve().map(|solution| (problem, solution)));

    match result {
        Ok((problem, solution)) => render::print_solution(&problem, &solution, settings),
        Err(e) => {
            debug!("{} failed: {:?}", panel.label(), e);
            println!("Error [{}]: {}", e.error_code(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Parsed, String> {
        parse_args(Settings::default(), args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_flags() {
        let Ok(Parsed::Run(args)) = parse(&["--rad", "--no-steps", "--advanced"]) else {
            panic!("expected run");
        };
        assert_eq!(args.settings.angle_mode, AngleMode::Radians);
        assert!(!args.settings.show_steps);
        assert_eq!(args.settings.level, CalculatorLevel::Advanced);
        assert!(args.json.is_none());
    }

    #[test]
    fn test_json_needs_path() {
        assert!(parse(&["--json"]).is_err());
        let Ok(Parsed::Run(args)) = parse(&["--json", "-"]) else {
            panic!("expected run");
        };
        assert_eq!(args.json.as_deref(), Some("-"));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(matches!(parse(&["--help"]), Ok(Parsed::Help)));
    }

    #[test]
    fn test_solve_document() {
        let json = solve_document(r#"{"type": "area_sas", "a": 2.0, "b": 3.0, "angle_c": 90.0}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "area_sas");
        assert!((value["area"].as_f64().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_solve_document_errors() {
        let err = solve_document("{not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = solve_document(r#"{"type": "area_heron", "a": 1.0, "b": 1.0, "c": 5.0}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
