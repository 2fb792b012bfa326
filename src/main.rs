use anyhow::Result;
use clap::{Parser, Subcommand};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use framesim::replacement::{self, Policy};
use framesim::report;
use framesim::sequence::parser::parse_sequence;

const HISTORY_FILE: &str = ".framesim_history";

#[derive(Parser)]
#[command(author, version, about = "framesim - page replacement policy simulator")]
struct Cli {
    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a reference string directly
    Run {
        /// Reference string, e.g. "7,0,1,2,0,3,0,4,2,3,0,3,2"
        #[arg(short, long)]
        refs: String,

        /// Number of physical frames
        #[arg(short, long, allow_hyphen_values = true)]
        frames: String,

        /// Run a single policy (fifo, lru, clock, opt) instead of all four
        #[arg(short, long)]
        policy: Option<String>,

        /// Print the per-step trace table for each result
        #[arg(short, long, default_value_t = false)]
        verbose: bool,

        /// Print an ASCII chart of fault totals
        #[arg(long, default_value_t = false)]
        chart: bool,
    },

    /// Start an interactive shell
    Shell,
}

fn run_simulation(
    refs_text: &str,
    frames_text: &str,
    policy: Option<&str>,
    verbose: bool,
    chart: bool,
) -> Result<()> {
    let refs = parse_sequence(refs_text)?;
    let frames = replacement::parse_frame_count(frames_text)?;

    let results = match policy {
        Some(name) => vec![replacement::simulate(name.parse::<Policy>()?, &refs, frames)?],
        None => replacement::simulate_all(&refs, frames)?,
    };

    if verbose {
        for result in &results {
            println!("{}", report::step_table(result));
        }
    }
    print!("{}", report::summary(&results));
    if chart {
        println!();
        print!("{}", report::fault_chart(&results));
    }
    Ok(())
}

/// One read at the shell prompt, folded to the loop's next move.
///
/// Ctrl-C cancels the pending line; only Ctrl-D ends the session.
enum ShellInput {
    Line(String),
    Cancel,
    Quit,
    Fail(ReadlineError),
}

fn classify_input(read: Result<String, ReadlineError>) -> ShellInput {
    match read {
        Ok(line) => ShellInput::Line(line),
        Err(ReadlineError::Interrupted) => ShellInput::Cancel,
        Err(ReadlineError::Eof) => ShellInput::Quit,
        Err(err) => ShellInput::Fail(err),
    }
}

fn run_shell() -> Result<()> {
    println!("Welcome to framesim. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        match classify_input(rl.readline("framesim> ")) {
            ShellInput::Line(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => {
                        print_help();
                    }
                    _ => {
                        // Anything else is a reference string
                        if let Err(err) = shell_round(&mut rl, line) {
                            println!("Error: {}", err);
                        }
                    }
                }
            }
            ShellInput::Cancel => {
                println!("CTRL-C");
            }
            ShellInput::Quit => {
                println!("CTRL-D");
                break;
            }
            ShellInput::Fail(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn shell_round(rl: &mut Editor<(), DefaultHistory>, refs_line: &str) -> Result<()> {
    let refs = parse_sequence(refs_line)?;

    let frames_line = match rl.readline("frames> ") {
        Ok(line) => line,
        // Ctrl-C at the frames prompt cancels the round, not the shell
        Err(ReadlineError::Interrupted) => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    let _ = rl.add_history_entry(&frames_line);
    let frames = replacement::parse_frame_count(&frames_line)?;

    let results = replacement::simulate_all(&refs, frames)?;
    for result in &results {
        println!("{}", report::step_table(result));
    }
    print!("{}", report::summary(&results));
    Ok(())
}

fn print_help() {
    println!("Enter a reference string to simulate, e.g. 7,0,1,2,0,3,0,4,2,3,0,3,2");
    println!("You will be prompted for the number of frames next.");
    println!();
    println!("Policies simulated:");
    println!("  FIFO   - evict the page resident longest");
    println!("  LRU    - evict the least recently used page");
    println!("  CLOCK  - second chance over a circular frame list");
    println!("  OPT    - Belady's optimal, farthest next use wins");
    println!();
    println!("Other commands:");
    println!("  help   - Display this help message");
    println!("  exit   - Exit the shell");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match &cli.command {
        Some(Commands::Run {
            refs,
            frames,
            policy,
            verbose,
            chart,
        }) => {
            run_simulation(refs, frames, policy.as_deref(), *verbose, *chart)?;
        }
        Some(Commands::Shell) => {
            run_shell()?;
        }
        None => {
            // Default to the shell when no command is given
            run_shell()?;
        }
    }

    Ok(())
}
