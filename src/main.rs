use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;

use nanosh::interpreter::builtins::FAREWELL;
use nanosh::{LineStatus, Shell, ShellOptions};

const BANNER: &str = "Welcome to nanosh! Type 'exit' to quit.";
const PROMPT: &str = "nanosh> ";

#[derive(Parser)]
#[command(name = "nanosh")]
#[command(about = "A miniature interactive shell")]
#[command(version)]
struct Cli {
    /// Execute the given input and exit
    #[arg(short = 'c', value_name = "LINE")]
    command: Option<String>,

    /// Script file to execute line by line (reads stdin if omitted)
    script_file: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut shell = Shell::new(ShellOptions::default());

    if let Some(text) = cli.command {
        run_source(&mut shell, &text);
        return;
    }

    if let Some(file) = cli.script_file {
        match std::fs::read_to_string(&file) {
            Ok(text) => run_source(&mut shell, &text),
            Err(err) => {
                eprintln!("nanosh: cannot read {}: {}", file, err);
                std::process::exit(1);
            }
        }
        return;
    }

    repl(&mut shell);
}

/// Run newline-separated input non-interactively, stopping at `exit`.
fn run_source(shell: &mut Shell, text: &str) {
    for line in text.lines() {
        match shell.run_line(line) {
            Ok(LineStatus::Exit) => break,
            Ok(LineStatus::Continue) => {}
            Err(err) => eprintln!("nanosh: {}", err),
        }
    }
}

/// Read lines from stdin until end of input or `exit`. Every error is
/// reported and the loop keeps going; the session itself always ends
/// successfully.
fn repl(shell: &mut Shell) {
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("{}", BANNER);
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if interactive {
            print!("{}", PROMPT);
            let _ = std::io::stdout().flush();
        }
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                // End of input counts as a farewell too.
                if interactive {
                    println!();
                    println!("{}", FAREWELL);
                }
                break;
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']);
                match shell.run_line(trimmed) {
                    Ok(LineStatus::Exit) => break,
                    Ok(LineStatus::Continue) => {}
                    Err(err) => eprintln!("nanosh: {}", err),
                }
            }
            Err(err) => {
                eprintln!("nanosh: read error: {}", err);
                break;
            }
        }
    }
}
