use cubelog::config::RunConfig;
use cubelog::evaluation::CubePredicate;
use cubelog::{logging, pipeline};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <records.txt|-> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let cli = parse_cli_options(&args[1..]);

    let input = match &cli.input {
        Some(input) => input.clone(),
        None => {
            eprintln!("Error: No input file given");
            std::process::exit(1);
        }
    };

    let options = build_run_options(&cli)?;

    let lines = if input == "-" {
        let stdin = std::io::stdin();
        cubelog::input::read_lines_from(stdin.lock())?
    } else {
        cubelog::input::read_lines(&input)?
    };

    match pipeline::run_lines(&lines, &options) {
        Ok(report) => {
            if !cli.quiet {
                logging::print_cargo_style_summary();
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Sum of valid game ids: {}", report.valid_id_sum);
                println!("Sum of minimal bag powers: {}", report.power_sum);
                if report.has_failures() {
                    println!("Skipped {} failing lines", report.lines_failed);
                }
            }

            // Keep-going runs where every line failed are still failures
            if report.games_processed == 0 && !lines.is_empty() {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);

            if !cli.quiet {
                logging::print_cargo_style_summary();
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("cubelog v{}", env!("CARGO_PKG_VERSION"));
    println!("Compiler and evaluator for cube game record logs");
    println!();
    println!("USAGE:");
    println!("    {} <records.txt> [options]", program_name);
    println!("    {} - [options]                # Read records from stdin", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <records.txt>  Path to the record file, one game per line");
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --keep-going        Skip failing lines instead of aborting");
    println!("    --config FILE       Load thresholds from a TOML file");
    println!("    --max-red N         Red cube threshold (default: 12)");
    println!("    --max-green N       Green cube threshold (default: 13)");
    println!("    --max-blue N        Blue cube threshold (default: 14)");
    println!("    --json              Print the run report as JSON");
    println!("    --quiet             Suppress the per-line error summary");
    println!();
    println!("OUTPUT:");
    println!("    Sum of ids of games playable within the thresholds, and");
    println!("    the sum of minimal-bag powers across all games");
    println!();
    println!("EXAMPLES:");
    println!("    {} records.txt                      # Default thresholds", program_name);
    println!("    {} records.txt --max-red 20         # Custom red threshold", program_name);
    println!("    {} records.txt --config run.toml    # Thresholds from file", program_name);
    println!("    cat records.txt | {} - --json       # JSON report from stdin", program_name);
}

#[derive(Debug, Default)]
struct CliOptions {
    input: Option<String>,
    keep_going: bool,
    config_path: Option<String>,
    max_red: Option<u32>,
    max_green: Option<u32>,
    max_blue: Option<u32>,
    json: bool,
    quiet: bool,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut cli = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--keep-going" => {
                cli.keep_going = true;
            }
            "--config" => {
                if i + 1 < args.len() {
                    cli.config_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --config requires a file path");
                }
            }
            "--max-red" => {
                parse_threshold_arg(args, &mut i, "--max-red", &mut cli.max_red);
            }
            "--max-green" => {
                parse_threshold_arg(args, &mut i, "--max-green", &mut cli.max_green);
            }
            "--max-blue" => {
                parse_threshold_arg(args, &mut i, "--max-blue", &mut cli.max_blue);
            }
            "--json" => {
                cli.json = true;
            }
            "--quiet" => {
                cli.quiet = true;
            }
            arg if arg.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", arg);
            }
            arg => {
                if cli.input.is_none() {
                    cli.input = Some(arg.to_string());
                } else {
                    eprintln!("Warning: Ignoring extra argument '{}'", arg);
                }
            }
        }
        i += 1;
    }

    cli
}

fn parse_threshold_arg(args: &[String], i: &mut usize, flag: &str, slot: &mut Option<u32>) {
    if *i + 1 < args.len() {
        if let Ok(value) = args[*i + 1].parse::<u32>() {
            *slot = Some(value);
        } else {
            eprintln!(
                "Warning: Invalid value '{}' for {}, using default",
                args[*i + 1],
                flag
            );
        }
        *i += 1;
    } else {
        eprintln!("Warning: {} requires a number", flag);
    }
}

/// Resolve run options: flags override file, file overrides defaults
fn build_run_options(cli: &CliOptions) -> Result<pipeline::RunOptions, Box<dyn std::error::Error>> {
    let config = match &cli.config_path {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    let mut predicate: CubePredicate = config.thresholds;
    if let Some(red) = cli.max_red {
        predicate.red = red;
    }
    if let Some(green) = cli.max_green {
        predicate.green = green;
    }
    if let Some(blue) = cli.max_blue {
        predicate.blue = blue;
    }

    Ok(pipeline::RunOptions {
        predicate,
        keep_going: cli.keep_going || config.keep_going,
        ..pipeline::RunOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_cli_options() {
        let cli = parse_cli_options(&args(&[
            "records.txt",
            "--keep-going",
            "--max-red",
            "20",
            "--json",
        ]));

        assert_eq!(cli.input.as_deref(), Some("records.txt"));
        assert!(cli.keep_going);
        assert_eq!(cli.max_red, Some(20));
        assert_eq!(cli.max_green, None);
        assert!(cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_cli_options_invalid_threshold() {
        let cli = parse_cli_options(&args(&["records.txt", "--max-blue", "lots"]));

        assert_eq!(cli.max_blue, None);
        assert_eq!(cli.input.as_deref(), Some("records.txt"));
    }

    #[test]
    fn test_parse_cli_options_stdin_marker() {
        let cli = parse_cli_options(&args(&["-", "--quiet"]));

        assert_eq!(cli.input.as_deref(), Some("-"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_build_run_options_flag_overrides() {
        let cli = CliOptions {
            max_red: Some(1),
            ..Default::default()
        };

        let options = build_run_options(&cli).unwrap();
        assert_eq!(options.predicate.red, 1);
        assert_eq!(options.predicate.green, 13);
        assert_eq!(options.predicate.blue, 14);
    }
}
