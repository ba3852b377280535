//! `monorder`: order polynomial terms by lex, glex or grevlex.
//!
//! `monorder demo` reproduces the built-in scenarios as a text report and,
//! optionally, heatmaps. `monorder order` orders an ad-hoc collection.

mod heatmap;
mod input;
mod report;
mod scenarios;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use monorder_core::{Direction, Monomial, MonomialOrder, OrderingContext, Precedence, TiePolicy};

#[derive(Parser, Debug)]
#[command(name = "monorder", version, about = "Order polynomial terms by monomial order")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Order the built-in scenarios and write a report.
    Demo {
        /// Report file.
        #[arg(short, long, default_value = "polynomial_orders.txt")]
        output: PathBuf,

        /// Directory for heatmap images (skipped when absent).
        #[arg(long)]
        heatmaps: Option<PathBuf>,

        /// Seed for the 1024-variable scenario.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// List terms smallest first instead of leading term first.
        #[arg(long)]
        ascending: bool,
    },

    /// Order a term collection given on the command line or in a JSON file.
    Order {
        /// Monomial order (lex, glex, grevlex). Defaults to the file's, then grevlex.
        #[arg(short, long)]
        order: Option<MonomialOrder>,

        /// Variable precedence, most significant first (e.g. 2,1,0).
        #[arg(short, long)]
        precedence: Option<String>,

        /// How tied terms are placed.
        #[arg(long, value_enum, default_value_t = TieArg::Stable)]
        ties: TieArg,

        /// List the leading term first.
        #[arg(long)]
        descending: bool,

        /// A term as comma-separated exponents; repeat for each term.
        #[arg(short, long = "term", value_parser = input::parse_term, conflicts_with = "input")]
        terms: Vec<Monomial>,

        /// JSON file with the terms (and optionally precedence and order).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TieArg {
    /// Tied terms keep their input order.
    Stable,
    /// Tied terms are an error.
    Strict,
    /// Tied terms overwrite each other, leaving empty slots.
    Collapse,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Demo {
            output,
            heatmaps,
            seed,
            ascending,
        } => {
            let direction = if ascending {
                Direction::Ascending
            } else {
                Direction::Descending
            };
            run_demo(&output, heatmaps.as_deref(), seed, direction)
        }
        Command::Order {
            order,
            precedence,
            ties,
            descending,
            terms,
            input,
        } => {
            let direction = if descending {
                Direction::Descending
            } else {
                Direction::Ascending
            };
            run_order(order, precedence, ties, direction, terms, input.as_deref())
        }
    }
}

fn run_demo(
    output: &Path,
    heatmaps: Option<&Path>,
    seed: u64,
    direction: Direction,
) -> Result<()> {
    let all = scenarios::builtin(seed);
    let runs = all
        .iter()
        .map(|s| report::order_scenario(s, direction))
        .collect::<monorder_core::Result<Vec<_>>>()
        .context("ordering built-in scenarios")?;

    let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let mut out = BufWriter::new(file);
    report::write_report(&mut out, &runs)
        .and_then(|()| out.flush())
        .with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {}", output.display());

    if let Some(dir) = heatmaps {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        for run in &runs {
            let name = run.scenario.name;
            let path = dir.join(format!("test_{name}_original.ppm"));
            heatmap::save(&path, &run.scenario.terms)
                .with_context(|| format!("writing {}", path.display()))?;
            for (order, sorted) in &run.results {
                let path = dir.join(format!("test_{name}_{}.ppm", order.name()));
                heatmap::save(&path, sorted)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            log::info!("heatmaps for {} ({})", run.scenario.caption, name);
        }
        println!("wrote heatmaps to {}", dir.display());
    }
    Ok(())
}

fn run_order(
    order: Option<MonomialOrder>,
    precedence: Option<String>,
    ties: TieArg,
    direction: Direction,
    terms: Vec<Monomial>,
    input: Option<&Path>,
) -> Result<()> {
    let file = input.map(input::load_term_file).transpose()?;
    let (order, precedence, terms) = resolve_request(order, precedence.as_deref(), terms, file)?;
    println!("{order} with {precedence}");

    let ctx = OrderingContext::new(order, precedence).with_direction(direction);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_ordered(&mut out, &ctx, &terms, ties)
}

/// Merges command-line flags with an optional term file. Flags win over the
/// file; the order defaults to grevlex and the precedence to
/// `descending(n)`.
fn resolve_request(
    order: Option<MonomialOrder>,
    precedence: Option<&str>,
    terms: Vec<Monomial>,
    file: Option<input::TermFile>,
) -> Result<(MonomialOrder, Precedence, Vec<Monomial>)> {
    let (terms, file_precedence, file_order) = match file {
        Some(file) => (file.terms, file.precedence, file.order),
        None => (terms, None, None),
    };
    if terms.is_empty() {
        bail!("no terms given (use --term or --input)");
    }

    let order = order.or(file_order).unwrap_or_default();
    let precedence = precedence.map(input::parse_indices).transpose()?;
    let precedence = match precedence.or(file_precedence) {
        Some(indices) => Precedence::new(&indices).context("invalid precedence")?,
        None => Precedence::descending(terms[0].num_vars()),
    };
    Ok((order, precedence, terms))
}

/// Writes one line per output slot; collapsed slots print as `(empty)`.
fn write_ordered<W: Write>(
    out: &mut W,
    ctx: &OrderingContext,
    terms: &[Monomial],
    ties: TieArg,
) -> Result<()> {
    match ties {
        TieArg::Stable | TieArg::Strict => {
            let policy = if ties == TieArg::Strict {
                TiePolicy::Strict
            } else {
                TiePolicy::Stable
            };
            for term in &ctx.sort(terms, policy)? {
                writeln!(out, "  {:?}  {term}", term.exponents())?;
            }
        }
        TieArg::Collapse => {
            let slots = ctx.sort_collapsing(terms)?;
            for slot in &slots {
                match slot {
                    Some(term) => writeln!(out, "  {:?}  {term}", term.exponents())?,
                    None => writeln!(out, "  (empty)")?,
                }
            }
            log::debug!("collapsed placement: {}", report::format_slots(&slots));
        }
    }
    Ok(())
}
