use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{ArgMatches, Command, arg};
use psmc_core::error::is_format_error;
use psmc_core::solver::CpSatSolver;
use psmc_core::{SolverConfig, files, logging, solve_instance_file};

fn cli() -> Command {
    Command::new("psmc-solve")
        .about("Solves a Partial Set Multi-Cover instance and writes its solution file")
        .arg_required_else_help(true)
        .arg(
            arg!(--log [FILTER] "Log filter, overriding PSMC_LOG (e.g. debug)")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(arg!(<INSTANCE> "Instance .txt file").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(-o --output [OUTPUT] "Solution file to write (default: solution<N>.txt)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--config [CONFIG] "Solver settings TOML file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"time-limit" [SECONDS] "Wall-clock budget in seconds (default 600)")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--workers [WORKERS] "Number of parallel search workers")
                .value_parser(clap::value_parser!(i32)),
        )
}

fn main() {
    let matches = cli().get_matches();
    match matches.get_one::<String>("log") {
        Some(filter) => logging::init_tracing_with_filter(filter),
        None => logging::init_tracing(),
    }

    if let Err(e) = run(&matches) {
        if is_format_error(&e) {
            println!("wrong format");
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let instance_path = matches
        .get_one::<PathBuf>("INSTANCE")
        .ok_or_else(|| anyhow!("missing instance file"))?;
    files::ensure_txt(instance_path)?;

    let output = match matches.get_one::<PathBuf>("output") {
        Some(path) => path.clone(),
        None => files::default_solution_path(instance_path)?,
    };
    files::remove_stale_solution(&output)
        .with_context(|| format!("removing previous solution {}", output.display()))?;

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SolverConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(&seconds) = matches.get_one::<f64>("time-limit") {
        config.time_limit_secs = seconds;
    }
    if let Some(&workers) = matches.get_one::<i32>("workers") {
        config.num_workers = Some(workers);
    }

    let solver = CpSatSolver::new(config.clone());
    let solution = solve_instance_file(instance_path, &output, &solver, &config)
        .with_context(|| format!("solving {}", instance_path.display()))?;

    println!("{}", solution);
    if let Some(provenance) = solution.provenance {
        println!("provenance: {}", provenance);
    }
    Ok(())
}
