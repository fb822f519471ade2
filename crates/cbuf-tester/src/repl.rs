use std::error::Error;
use std::io;

use cbuf_common::{RingBuffer, dev_info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::command::{Command, Outcome, execute};

pub fn run(mut rb: RingBuffer) -> Result<(), Box<dyn Error>> {
    let mut rl = DefaultEditor::new()?;
    let mut stdout = io::stdout();
    println!("Ring buffer of capacity {}. Type `help` for commands.", rb.capacity());

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(line.as_str())?;

        match line.parse::<Command>() {
            Ok(cmd) => {
                if execute(&mut rb, cmd, &mut stdout)? == Outcome::Quit {
                    break;
                }
            }
            Err(e) => println!("error: {}", e),
        }
    }

    dev_info!("Leaving console with {} values still stored", rb.occupancy());
    rb.destroy();
    Ok(())
}
