#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use otter_fol::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{self},
};

mod library;

/// Answers a query against a small library of literary facts, by refutation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the clauses which remain after the solve.
    #[arg(short, long)]
    clauses: bool,

    /// The maximum count of sweeps to make.
    #[arg(long, value_name = "SWEEPS")]
    max_sweeps: Option<usize>,

    /// A time limit for the solve, in seconds.
    #[arg(short, long, value_name = "SECONDS")]
    time_limit: Option<u64>,
}

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let args = Args::parse();

    let mut the_context = Context::from_config(Config::default());

    let report = match run(&mut the_context, &args) {
        Ok(report) => report,
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(2);
        }
    };

    println!("c {} sweeps", the_context.counters.sweeps);
    println!("c {} resolutions", the_context.counters.resolutions);
    println!("c {} literals eliminated", the_context.counters.eliminated);
    println!("c {:.2?}", the_context.counters.time);

    if args.clauses {
        for clause in the_context.clause_strings() {
            println!("c {clause}");
        }
    }

    println!("s {report}");

    for (term, value) in the_context.answers() {
        match value {
            Some(value) => println!("a {term} = {value}"),
            None => println!("a {term} unproven"),
        }
    }
    println!("b {}", the_context.substitution());

    if !report.converged() {
        std::process::exit(1);
    }
}

fn run(the_context: &mut Context, args: &Args) -> Result<Report, err::ErrorKind> {
    if let Some(sweeps) = args.max_sweeps {
        the_context.set_max_sweeps(sweeps)?;
    }
    if let Some(seconds) = args.time_limit {
        the_context.set_time_limit(Some(std::time::Duration::from_secs(seconds)))?;
    }

    for fact in library::facts() {
        the_context.add_fact(fact)?;
    }
    the_context.add_query(library::query())?;

    the_context.solve()
}
