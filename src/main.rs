use std::fs;

use anyhow::{Context, Result};
use structopt::StructOpt;

use turmite::cli::Args;
use turmite::driver;
use turmite::error::SimError;
use turmite::outcome::Outcome;
use turmite::parser::{self, ParseEvent};
use turmite::render;
use turmite::simulator::Simulator;

fn main() {
    let args = Args::from_args();

    if let Err(e) = run(&args) {
        bunt::eprintln!("{$red}An error occured!{/$}");
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(dir) = &args.image_dir {
        if !dir.is_dir() {
            return Err(SimError::DirectoryMissing(dir.display().to_string()).into());
        }
    }

    if !args.filename.is_file() {
        return Err(SimError::FileNotFound(args.filename.display().to_string()).into());
    }

    let input = fs::read_to_string(&args.filename)
        .with_context(|| format!("failed to read {}", args.filename.display()))?;

    let detect_loops = args.detect_loops();
    let mut ant_index = 0usize;

    for event in parser::parse(&input) {
        match event {
            ParseEvent::Comment(text) => println!("{text}"),
            ParseEvent::BlockFailed(err) => {
                bunt::eprintln!("{$yellow}skipping ant block: {}{/$}", err);
            }
            ParseEvent::AntReady(ant) => {
                let table = match ant.table_builder.clone().build(ant.colors.len()) {
                    Ok(table) => table,
                    Err(missing) => {
                        bunt::eprintln!(
                            "{$yellow}skipping ant block: {}{/$}",
                            SimError::UnknownColor(missing)
                        );
                        continue;
                    }
                };

                let budget = ant.budget;
                let mut simulator = Simulator::new(table, ant.c0, budget);
                let outcome = driver::run(&mut simulator, detect_loops);

                report(ant_index, budget, &outcome);

                if let Some(dir) = &args.image_dir {
                    if outcome.is_renderable() {
                        let path = dir.join(format!("ant_{ant_index}.png"));
                        if let Err(err) = render::render_png(simulator.grid(), &ant.colors, &path) {
                            bunt::eprintln!("{$yellow}could not render ant {}: {}{/$}", ant_index, err);
                        }
                    }
                }

                ant_index += 1;
            }
        }
    }

    Ok(())
}

/// Prints an ant's result in the literal `<R>\n# <x> <y>\n\n` format (§6.1):
/// `budget` is the step count read off the block's terminating line, not the
/// ant's position in the batch (matching the reference parser's
/// `print(num_moves)`, not an index counter).
fn report(index: usize, budget: u64, outcome: &Outcome) {
    match outcome {
        Outcome::Completed { position } | Outcome::FastForwarded { position, .. } => {
            println!("{budget}");
            println!("# {} {}", position.0, position.1);
            println!();
        }
        Outcome::Failed(err) => {
            bunt::eprintln!("{$red}ant {} failed: {}{/$}", index, err);
        }
    }
}
