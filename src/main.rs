//! qif-channels prints the channel matrices of small voting protocols and
//! counting queries, for quantitative information flow analyses.
//!
//! # Getting started
//!
//! The general syntax is:
//!
//!     qif-channels <query> [options] <arguments>
//!
//! ## Queries
//!
//! **winner** A plurality election among `<candidates>` with `<voters>`
//! voters, announcing the winner. Ties are resolved in favour of the
//! candidate with the lowest index (`--ties=lowest`) or rejected
//! (`--ties=reject`).
//!
//! **tally** The same election, announcing how many votes each candidate
//! received. There is one column per reachable tally.
//!
//! **count** A database of `<rows>` rows, each holding one of `<values>`
//! values, releasing how many rows hold `<value>`.
//!
//! **noisy-count** The same count, released through a truncated geometric
//! mechanism with decay `--decay`.
//!
//! ## Further options
//!
//! Inputs are enumerated exhaustively, so channels with more than
//! `--max-rows` rows are refused; `--row=<i>` only computes the
//! distribution of input `i`, whatever the size of the input space.
//!
//! `--output` stores the channel as CSV, with the names of the outputs as
//! header, and `--leakage` reports leakage measures under a uniform prior.
use docopt::Docopt;
use ndarray::ArrayView2;
use serde::Deserialize;
use std::error::Error;
use std::process;
use tracing::{Level, info};

use qif_channels::channels::*;
use qif_channels::display::{format_distribution, MarkerStyle};
use qif_channels::security_measures::*;

mod utils;

use utils::save_channel;


const USAGE: &'static str = "
Build channel matrices of voting protocols and counting queries.

Usage: qif-channels winner [options] <voters> <candidates>
       qif-channels tally [options] <voters> <candidates>
       qif-channels count [options] <rows> <values> <value>
       qif-channels noisy-count [options] <rows> <values> <value>
       qif-channels (--help | --version)

Options:
    --decay=<a>                 Decay of the geometric noise, in (0, 1)
                                [default: 0.3333333333333333].
    --ties=<policy>             How the winner is picked among tied
                                candidates: lowest or reject
                                [default: lowest].
    --row=<i>                   Only compute the row of input <i>.
    --max-rows=<n>              Refuse to build channels with more
                                rows [default: 65536].
    --highlight                 Mark the largest entries of each row.
    --output=<file>             Store the channel into a CSV file.
    --leakage                   Print leakage measures under a uniform
                                prior.
    -v, --verbose               Log progress.
    -h, --help                  Show help.
    --version                   Show the version.
";

#[derive(Deserialize)]
struct Args {
    cmd_winner: bool,
    cmd_tally: bool,
    cmd_count: bool,
    cmd_noisy_count: bool,
    arg_voters: Option<usize>,
    arg_candidates: Option<usize>,
    arg_rows: Option<usize>,
    arg_values: Option<usize>,
    arg_value: Option<usize>,
    flag_decay: f64,
    flag_ties: String,
    flag_row: Option<usize>,
    flag_max_rows: usize,
    flag_highlight: bool,
    flag_output: Option<String>,
    flag_leakage: bool,
    flag_verbose: bool,
}

/// Parses the tie-break policy.
fn parse_ties(policy: &str) -> Result<TieBreak, Box<dyn Error>> {
    match policy {
        "lowest" => Ok(TieBreak::LowestIndex),
        "reject" => Ok(TieBreak::Reject),
        _ => Err(format!("unknown tie-break policy: {}", policy).into()),
    }
}

/// Returns a positional argument that docopt guarantees for the command.
fn positional(arg: Option<usize>, name: &str) -> Result<usize, Box<dyn Error>> {
    arg.ok_or_else(|| format!("missing <{}>", name).into())
}

/// Prints several security measures that can be derived from a channel
/// under a uniform prior.
fn print_all_measures(channel: &ArrayView2<f64>) -> Result<(), Box<dyn Error>> {
    let prior = uniform_prior(channel.nrows());
    let risk = bayes_risk(&prior.view(), channel)?;
    let guessing = random_guessing(&prior.view());

    println!("Random guessing error: {}", guessing);
    println!("Bayes risk: {}", risk);
    println!("Multiplicative Leakage: {}",
             multiplicative_leakage(risk, guessing)?);
    println!("Additive Leakage: {}", additive_leakage(risk, guessing)?);
    println!("Bayes security measure: {}",
             bayes_security_measure(risk, guessing)?);
    println!("Min-entropy Leakage: {}", min_entropy_leakage(risk, guessing)?);
    Ok(())
}

/// Builds and prints the channel of `observation`, released through
/// `kernel` if any.
fn run_query<O: Observation>(args: &Args, space: &InstanceSpace,
                             observation: &O,
                             kernel: Option<&GeometricKernel>)
        -> Result<(), Box<dyn Error>> {
    let labels = observation.labels();

    if let Some(index) = args.flag_row {
        let row = match kernel {
            Some(kernel) => noisy_channel_row(space, observation, kernel, index)?,
            None => channel_row(space, observation, index)?,
        };
        println!("outputs: {}", labels.join(", "));
        println!("{:?} {}", space.decode(index)?,
                 format_distribution(&row.to_vec(), args.flag_highlight,
                                     &MarkerStyle));
        return Ok(());
    }

    let limits = ChannelLimits { max_rows: args.flag_max_rows };
    let channel = match kernel {
        Some(kernel) => build_noisy_channel(space, observation, kernel, &limits)?,
        None => build_channel(space, observation, &limits)?,
    };
    info!(rows = channel.nrows(), columns = channel.ncols(), "channel ready");

    println!("outputs: {}", labels.join(", "));
    for (instance, row) in space.instances().zip(channel.outer_iter()) {
        println!("{:?} {}", instance,
                 format_distribution(&row.to_vec(), args.flag_highlight,
                                     &MarkerStyle));
    }

    if let Some(ref fname) = args.flag_output {
        save_channel(fname, &labels, &channel.view())?;
        println!("channel stored into {}", fname);
    }

    if args.flag_leakage {
        println!();
        print_all_measures(&channel.view())?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.cmd_winner || args.cmd_tally {
        let voters = positional(args.arg_voters, "voters")?;
        let candidates = positional(args.arg_candidates, "candidates")?;
        let space = InstanceSpace::new(voters, candidates)?;

        if args.cmd_winner {
            let ties = parse_ties(&args.flag_ties)?;
            run_query(args, &space, &Winner::for_space(&space, ties)?, None)
        } else {
            run_query(args, &space, &FullTally::for_space(&space)?, None)
        }
    } else if args.cmd_count || args.cmd_noisy_count {
        let rows = positional(args.arg_rows, "rows")?;
        let values = positional(args.arg_values, "values")?;
        let value = positional(args.arg_value, "value")?;
        let space = InstanceSpace::new(rows, values)?;
        let count = CountOf::for_space(&space, value)?;

        if args.cmd_noisy_count {
            let kernel = GeometricKernel::new(args.flag_decay)?;
            run_query(args, &space, &count, Some(&kernel))
        } else {
            run_query(args, &space, &count, None)
        }
    } else {
        Err("no query specified".into())
    }
}

fn main() {
    // Parse args from command line.
    let args: Args = Docopt::new(USAGE)
                            .and_then(|d| d.version(Some(
                                env!("CARGO_PKG_VERSION").to_string()))
                                           .deserialize())
                            .unwrap_or_else(|e| e.exit());

    let level = if args.flag_verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("[!] {}", e);
        process::exit(1);
    }
}
