//! Printing the generations without the TUI.

use crate::args::Args;
use log::info;
use rautomata_lib::Simulate;
use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
};

/// Displays the current generation.
///
/// A one-dimensional generation fits in one line. A two-dimensional one
/// is printed after a header line.
pub(crate) fn snapshot(world: &dyn Simulate, one_dimensional: bool) -> String {
    let text = world.plaintext();
    if one_dimensional {
        format!(
            "Step {}, Rule {}: {}\n",
            world.generation(),
            world.rule_label(),
            text.trim_end()
        )
    } else {
        format!(
            "Generation {}, Rule {}, Active cells: {}\n{}",
            world.generation(),
            world.rule_label(),
            world.active_count(),
            text
        )
    }
}

/// Runs the automaton, printing every generation to stdout,
/// and also to the output file if there is one.
pub(crate) fn run(mut args: Args) -> io::Result<()> {
    let steps = args.steps_or_default();
    let mut output = match &args.output {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    print(&*args.world, args.one_dimensional, &mut stdout, output.as_mut())?;
    for _ in 0..steps {
        args.world.step();
        print(&*args.world, args.one_dimensional, &mut stdout, output.as_mut())?;
        if args.world.is_settled() {
            info!("Settled after {} generations", args.world.generation());
            break;
        }
    }
    Ok(())
}

fn print<W: Write>(
    world: &dyn Simulate,
    one_dimensional: bool,
    out: &mut W,
    file: Option<&mut File>,
) -> io::Result<()> {
    let text = snapshot(world, one_dimensional);
    out.write_all(text.as_bytes())?;
    if let Some(file) = file {
        file.write_all(text.as_bytes())?;
    }
    Ok(())
}
