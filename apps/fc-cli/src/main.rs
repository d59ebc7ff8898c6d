use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

use fc_app::{AppResult, ComputeOutcome, Session};
use fc_fluids::{
    CoolPropProvider, FluidState, ParamKind, ParamPair, Quantity, Species, StateParam,
    filter_fluids, parse_quantity,
};
use uom::si::molar_mass::gram_per_mole;

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(about = "fluidcalc CLI - Fluid state property calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available fluids
    Fluids {
        /// Show only fluids whose name or alias matches
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Compute a fluid state from two parameters
    Compute {
        /// Fluid name (e.g., water, co2, r134a)
        #[arg(long)]
        fluid: Species,
        /// First parameter as kind=value (e.g., "pressure=1 atm")
        #[arg(long, value_parser = parse_param_spec)]
        first: StateParam,
        /// Second parameter as kind=value (e.g., "temperature=25C")
        #[arg(long, value_parser = parse_param_spec)]
        second: StateParam,
        /// Vapor quality in [0, 1], used if the state is two-phase
        #[arg(long)]
        quality: Option<f64>,
        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Prompt-driven calculator on stdin/stdout
    Interactive,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fluids { filter } => cmd_fluids(filter.as_deref()),
        Commands::Compute {
            fluid,
            first,
            second,
            quality,
            json,
        } => cmd_compute(fluid, first, second, quality, json),
        Commands::Interactive => cmd_interactive(),
    }
}

/// Parse "kind=value" into a state parameter, with unit-aware value parsing.
fn parse_param_spec(spec: &str) -> Result<StateParam, String> {
    let (kind, value) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected kind=value, got '{spec}'"))?;

    let kind: ParamKind = kind.parse()?;
    let value =
        parse_quantity(value, Quantity::for_param(kind)).map_err(|e| e.to_string())?;
    Ok(StateParam::new(kind, value))
}

fn cmd_fluids(filter: Option<&str>) -> AppResult<()> {
    let provider = CoolPropProvider::new();
    let entries = filter_fluids(filter.unwrap_or(""));

    if entries.is_empty() {
        println!("No fluids match");
        return Ok(());
    }

    println!("{:<16} {:<20} {:>12}", "ID", "Name", "M (g/mol)");
    for entry in entries {
        let molar_mass = provider.molar_mass(entry.species)?;
        println!(
            "{:<16} {:<20} {:>12.4}",
            entry.canonical_id,
            entry.display_name,
            molar_mass.get::<gram_per_mole>()
        );
    }
    Ok(())
}

fn cmd_compute(
    fluid: Species,
    first: StateParam,
    second: StateParam,
    quality: Option<f64>,
    json: bool,
) -> AppResult<()> {
    let mut session = Session::new(Box::new(CoolPropProvider::new()));
    let pair = ParamPair::new(first, second)?;

    session.begin(fluid, pair);
    let outcome = session.compute()?;

    if outcome == ComputeOutcome::NeedsQuality {
        match quality {
            Some(q) => session.resolve_quality(q)?,
            None => {
                eprintln!("State is two-phase; re-run with --quality (0 to 1)");
                std::process::exit(2);
            }
        }
    }

    let state = session.render_properties()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("Fluid: {fluid}");
        print_state(&state);
    }
    Ok(())
}

fn cmd_interactive() -> AppResult<()> {
    let mut session = Session::new(Box::new(CoolPropProvider::new()));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("fluidcalc interactive calculator (Ctrl-D to quit)");

    loop {
        println!();
        let fluid = match prompt_parsed::<Species>(&mut lines, "Fluid")? {
            Some(fluid) => fluid,
            None => break,
        };

        let kinds: Vec<String> = ParamKind::ALL.iter().map(|k| k.to_string()).collect();
        println!("Parameter kinds: {}", kinds.join(", "));

        let first_kind = match prompt_parsed::<ParamKind>(&mut lines, "First parameter")? {
            Some(kind) => kind,
            None => break,
        };
        let first = match prompt_value(&mut lines, first_kind)? {
            Some(param) => param,
            None => break,
        };

        let choices: Vec<String> = first_kind.complement().map(|k| k.to_string()).collect();
        println!("Second parameter choices: {}", choices.join(", "));

        let second_kind = match prompt_parsed::<ParamKind>(&mut lines, "Second parameter")? {
            Some(kind) => kind,
            None => break,
        };
        let second = match prompt_value(&mut lines, second_kind)? {
            Some(param) => param,
            None => break,
        };

        let pair = match ParamPair::new(first, second) {
            Ok(pair) => pair,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        session.begin(fluid, pair);
        let outcome = match session.compute() {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if outcome == ComputeOutcome::NeedsQuality {
            println!("State is two-phase.");
            let quality = match prompt_parsed::<f64>(&mut lines, "Vapor quality (0-1)")? {
                Some(q) => q,
                None => break,
            };
            if let Err(e) = session.resolve_quality(quality) {
                println!("{e}");
                continue;
            }
        }

        let state = session.render_properties()?;
        print_state(&state);
    }

    Ok(())
}

/// Prompt and parse one line; `None` means end of input.
fn prompt_parsed<T>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> AppResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        print!("{label}: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt for a parameter value, with unit-aware parsing.
fn prompt_value(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    kind: ParamKind,
) -> AppResult<Option<StateParam>> {
    loop {
        print!("{kind} [{}]: ", kind.si_unit());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_quantity(trimmed, Quantity::for_param(kind)) {
            Ok(value) => return Ok(Some(StateParam::new(kind, value))),
            Err(e) => println!("{e}"),
        }
    }
}

fn print_state(state: &FluidState) {
    println!("Phase: {}", state.phase());
    for row in state.properties() {
        println!("  {:<18} {:>16.6} {}", row.name, row.value, row.unit);
    }
}
