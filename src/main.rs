use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use minicover::solver::{CoverSolver, SolverConfig};

fn print_help() {
    println!("minicover - minimum vertex cover via SAT, shortest paths via BFS");
    println!();
    println!("USAGE:");
    println!("    minicover [OPTIONS] [FILE]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help, -help           Print this help message");
    println!("    --check-cover               Verify each reported cover against the edge set");
    println!();
    println!("COMMANDS (one per input line):");
    println!("    V <n>                       Start a new graph with n vertices (n >= 2)");
    println!("    E {{<a,b>,<c,d>,...}}         Submit the edge set; prints the minimum vertex cover");
    println!("    s <a> <b>                   Print a shortest path from a to b");
    println!();
    println!("ARGS:");
    println!("    <FILE>                      Input file (reads from stdin if not specified)");
    println!();
    println!("EXAMPLES:");
    println!("    minicover input.txt                     # Read from file");
    println!("    minicover < input.txt                   # Read from stdin");
    println!("    minicover --check-cover input.txt       # Verify covers before printing");
}

fn main() -> Result<()> {
    // Initialize global tracing subscriber once. Respect RUST_LOG if set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_level(true)
        .try_init();

    debug!("starting minicover");
    let args: Vec<String> = env::args().collect();

    let mut config = SolverConfig::default();
    let mut file_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" | "-help" => {
                print_help();
                return Ok(());
            }
            "--check-cover" => {
                config.check_cover = true;
            }
            _ => {
                if arg.starts_with('-') {
                    eprintln!("Unknown option: {}", arg);
                    print_help();
                    return Ok(());
                }
                file_path = Some(arg.clone());
            }
        }
        i += 1;
    }

    let mut solver = CoverSolver::new_with_config(config);
    match file_path {
        Some(path) => {
            let input = fs::read_to_string(&path).context("failed to read input file")?;
            for line in input.lines() {
                eval_line(&mut solver, line);
            }
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                eval_line(&mut solver, &line);
            }
        }
    }
    Ok(())
}

/// One line of the REPL: results to stdout, errors to stderr, and the loop
/// keeps going either way.
fn eval_line(solver: &mut CoverSolver, line: &str) {
    match solver.run_line(line) {
        Ok(Some(out)) => {
            print!("{}", out);
            let _ = io::stdout().flush();
        }
        Ok(None) => {}
        Err(e) => eprintln!("Error: {}", e),
    }
}
