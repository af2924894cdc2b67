//! Interactive terminal front end for the engine.
//!
//! All game logic lives in the library; this binary only prompts, parses,
//! and prints.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mnk_engine::cli::{self, Command, MAX_DIM};
use mnk_engine::core::MIN_DIM;
use mnk_engine::rules;
use mnk_engine::session::{Session, SessionState};

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play m,n tic-tac-toe against the computer")]
struct Args {
    /// Board width in columns (3-12)
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Board height in rows (3-12)
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// RNG seed for the computer's fallback moves (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    for (name, value) in [("width", args.width), ("height", args.height)] {
        if value > MAX_DIM {
            eprintln!("{name} {value} is too large (max {MAX_DIM})");
            std::process::exit(2);
        }
        if value < MIN_DIM {
            eprintln!("{name} {value} is below the minimum and will be raised to {MIN_DIM}");
        }
    }

    let mut session = match args.seed {
        Some(seed) => Session::with_seed(args.width, args.height, seed),
        None => Session::new(args.width, args.height),
    };

    println!("{}", cli::help_text());
    println!("{}", cli::render(session.board()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while session.state() != SessionState::Terminated {
        print!("your move> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.parse::<Command>() {
            Ok(command) => dispatch(&mut session, command),
            Err(message) => println!("{message}"),
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

fn dispatch(session: &mut Session, command: Command) {
    match command {
        Command::Help => println!("{}", cli::help_text()),
        Command::Quit => session.quit(),
        Command::Reset => {
            session.reset();
            println!("{}", cli::render(session.board()));
        }
        Command::Resize { width, height } => {
            session.resize(width, height);
            println!("{}", cli::render(session.board()));
        }
        Command::Undo => {
            session.undo();
            println!("{}", cli::render(session.board()));
        }
        Command::Move(index) => play_move(session, index),
    }
}

fn play_move(session: &mut Session, index: usize) {
    match session.play(index) {
        Ok(turn) => {
            if let Some(reply) = turn.computer_move {
                println!("The computer takes square {reply}.");
            }
            println!("{}", cli::render(session.board()));
            match turn.state {
                SessionState::PlayerWon => println!("You win! Type 'reset' for a rematch."),
                SessionState::ComputerWon => {
                    println!("The computer wins. Type 'reset' for a rematch.");
                }
                SessionState::Draw => println!("A draw. Type 'reset' for a rematch."),
                _ => {
                    if rules::is_dead_position(session.board()) {
                        println!("No line can be completed anymore; this one is headed for a draw.");
                    }
                }
            }
        }
        Err(err) => println!("Illegal move: {err}. Try again."),
    }
}
