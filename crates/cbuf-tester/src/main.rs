use std::error::Error;
use std::io;

use cbuf_common::{__log::LevelFilter, RingBuffer, dev_info};
use clap::{Parser, Subcommand};

mod command;
mod demo;
mod repl;

use command::{Command, execute};

#[derive(Parser, Debug)]
#[command(about = "Drives a fixed-capacity integer ring buffer")]
struct Args {
    /// Number of slots in the buffer.
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    capacity: i64,

    /// Log level, overridden by `RUST_LOG` when set.
    #[arg(short, long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run the scripted fill, overflow, wrap and drain sequence.
    Demo,
    /// Run the given operations in order, e.g. `put:3 get dump`.
    Run {
        #[arg(required = true, allow_hyphen_values = true)]
        ops: Vec<String>,
    },
    /// Interactive console.
    Repl,
}

fn run_ops(capacity: i64, ops: &[String]) -> Result<(), Box<dyn Error>> {
    // Parse everything first so a typo does not leave a half-run session.
    let cmds = ops
        .iter()
        .map(|op| op.parse::<Command>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut rb = RingBuffer::new(capacity)?;
    let mut stdout = io::stdout();
    for cmd in cmds {
        if execute(&mut rb, cmd, &mut stdout)? == command::Outcome::Quit {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    dev_info!("Using capacity {}", args.capacity);
    match args.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => demo::run(args.capacity, &mut io::stdout()),
        Mode::Run { ops } => run_ops(args.capacity, &ops),
        Mode::Repl => repl::run(RingBuffer::new(args.capacity)?),
    }
}
