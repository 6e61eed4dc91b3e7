use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{ArgMatches, Command, arg};
use psmc_core::error::is_format_error;
use psmc_core::{certify, files, logging};

fn cli() -> Command {
    Command::new("psmc-certify")
        .about("Certifies the cost, feasibility and minimality of a solution")
        .arg_required_else_help(true)
        .arg(
            arg!(--log [FILTER] "Log filter, overriding PSMC_LOG (e.g. debug)")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(arg!(<INSTANCE> "Instance .txt file").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(<SOLUTION> "Solution .txt file").value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(--"skip-id-check" "Do not require matching numbers in the two file names"))
        .arg(arg!(--report "Run every check and print a JSON report"))
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
    let solution_path = matches
        .get_one::<PathBuf>("SOLUTION")
        .ok_or_else(|| anyhow!("missing solution file"))?;

    files::ensure_txt(instance_path)?;
    files::ensure_txt(solution_path)?;
    if !matches.get_flag("skip-id-check") {
        files::check_matching_ids(instance_path, solution_path)?;
    }

    let instance = files::read_instance(instance_path)
        .with_context(|| format!("reading instance {}", instance_path.display()))?;
    let solution = files::read_solution(solution_path)
        .with_context(|| format!("reading solution {}", solution_path.display()))?;

    if matches.get_flag("report") {
        let report = certify::report(&instance, &solution)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let verdict = certify::certify(&instance, &solution)?;
        tracing::info!(?verdict, "certified");
        println!("{}", verdict);
    }
    Ok(())
}
