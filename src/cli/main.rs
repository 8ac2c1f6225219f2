use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Parser;

use stoat_sat::{
    config::Config,
    context::Context,
    structures::{formula::Formula, valuation::Valuation},
};

/// A stochastic local-search SAT solver using the probSAT make/break
/// heuristic.
///
/// Reads a formula in the fixed-layout DIMACS of the SATLIB uniform random
/// distributions, and searches for a satisfying assignment within a
/// turn/flip budget.
/// The solver is incomplete: an `Unknown` result only means the budget ran
/// out.
#[derive(Parser, Debug)]
#[command(name = "stoat_cli", version)]
struct Cli {
    /// Path to a formula in fixed-layout DIMACS.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Write the final assignment to this path.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// The count of flips per turn.
    #[arg(short = 'f', long = "max-flips")]
    max_flips: Option<usize>,

    /// The count of turns, each from a fresh random assignment.
    #[arg(short = 't', long = "max-turns")]
    max_turns: Option<usize>,

    /// The make exponent (cm) of the scoring function.
    #[arg(long = "cm")]
    make_exponent: Option<f64>,

    /// The break exponent (cb) of the scoring function.
    #[arg(long = "cb")]
    break_exponent: Option<f64>,

    /// The epsilon shift of the scoring function.
    #[arg(long = "eps")]
    epsilon: Option<f64>,

    /// Seed for the random number generator.
    #[arg(long = "seed", default_value_t = 0)]
    seed: u64,
}

fn config_from_cli(cli: &Cli) -> Config {
    let mut config = Config::default();

    if let Some(max_flips) = cli.max_flips {
        config.max_flips.value = max_flips;
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns.value = max_turns;
    }
    if let Some(make_exponent) = cli.make_exponent {
        config.make_exponent.value = make_exponent;
    }
    if let Some(break_exponent) = cli.break_exponent {
        config.break_exponent.value = break_exponent;
    }
    if let Some(epsilon) = cli.epsilon {
        config.epsilon.value = epsilon;
    }

    config
}

fn main() {
    let cli = Cli::parse();

    println!("c Reading formula from {:?}", cli.input);

    let file = match File::open(&cli.input) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open the formula file");
            std::process::exit(1);
        }
    };

    let formula = match Formula::from_reader(BufReader::new(&file)) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Parse error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut ctx = match Context::from_config_seeded(config_from_cli(&cli), formula, cli.seed) {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    if let Err(e) = ctx.solve() {
        println!("c Solve error: {e:?}");
        std::process::exit(2);
    };

    eprintln!("{}", ctx.stats());

    println!("s {}", ctx.report());

    // The assignment is printed whatever the outcome: on Unknown it is the
    // best-effort assignment, to be re-checked by any consumer that cares.
    let assignment = ctx.best_assignment().as_display_string();
    println!("v {assignment}");

    if let Some(output) = &cli.output {
        if std::fs::write(output, format!("{assignment}\n")).is_err() {
            println!("c Failed to write the assignment to {output:?}");
            std::process::exit(1);
        }
    }
}
