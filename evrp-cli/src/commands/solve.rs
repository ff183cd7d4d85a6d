#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use evrp_cli::core::solver::Builder;
use evrp_cli::extensions::solve::config::create_solver_config_from_file;
use evrp_cli::extensions::solve::interruption::create_interruption_quota;
use evrp_cli::extensions::solve::summary::{create_summary, write_summary};
use evrp_cli::scientific::common::read_init_solution;
use evrp_cli::scientific::evrptw::{EvrptwProblem, EvrptwSolution};
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const COVERAGE_ARG_NAME: &str = "coverage";
const CONFIG_ARG_NAME: &str = "config";
const ITERATIONS_ARG_NAME: &str = "iterations";
const TIME_ARG_NAME: &str = "max-time";
const SEED_ARG_NAME: &str = "seed";
const DUMMIES_ARG_NAME: &str = "dummies";
const PERTURB_ARG_NAME: &str = "perturb";
const INIT_SOLUTION_ARG_NAME: &str = "init-solution";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_SOLUTION_ARG_NAME: &str = "out-solution";
const LOG_ARG_NAME: &str = "log";

const DEFAULT_LOG_BEST: usize = 1000;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves electric vehicle routing problem with time windows and partial recharge")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(COVERAGE_ARG_NAME)
                .help("Specifies wireless charging coverage of the road network")
                .short('w')
                .long(COVERAGE_ARG_NAME)
                .required(false)
                .default_value("none")
                .value_parser(["none", "light", "moderate", "high"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file in json format")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies maximum amount of iterations, overrides config value")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to make runs reproducible")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DUMMIES_ARG_NAME)
                .help("Specifies amount of replicas per station which let a route visit the station again")
                .short('d')
                .long(DUMMIES_ARG_NAME)
                .required(false)
                .default_value("0"),
        )
        .arg(
            Arg::new(PERTURB_ARG_NAME)
                .help("Perturbs travel times in form \"probability,scale\"")
                .short('p')
                .long(PERTURB_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(INIT_SOLUTION_ARG_NAME)
                .help("Specifies path to file with initial solution")
                .short('i')
                .long(INIT_SOLUTION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result summary output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_SOLUTION_ARG_NAME)
                .help("Specifies path to the file for best solution output in text format")
                .long(OUT_SOLUTION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let coverage = matches
        .get_one::<String>(COVERAGE_ARG_NAME)
        .map_or(Ok(WirelessCoverage::None), |coverage| coverage.parse::<WirelessCoverage>())?;
    let dummies = parse_int_value::<usize>(matches, DUMMIES_ARG_NAME, "station dummies")?.unwrap_or(0);
    let max_iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;
    let perturbation = matches.get_one::<String>(PERTURB_ARG_NAME).map(|arg| parse_perturbation(arg)).transpose()?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    let instance = Arc::new(BufReader::new(open_file(problem_path, "problem")?).read_evrptw(coverage, dummies)?);

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => create_solver_config_from_file(BufReader::new(open_file(path, "config")?))?,
        None => SolverConfig::default(),
    };
    let config = match (is_logging, config.log_best) {
        (true, None) => SolverConfig { log_best: Some(DEFAULT_LOG_BEST), ..config },
        _ => config,
    };

    let random: Arc<dyn Random + Send + Sync> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let logger: InfoLogger = if is_logging { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let quota = create_interruption_quota(max_time)?;
    let environment = Arc::new(Environment::new(random.clone(), Some(quota), logger));

    let mut evaluator = RouteEvaluator::new(instance.clone());
    if let Some((probability, scale)) = perturbation {
        (environment.logger)(format!("perturb travel times: probability {probability}, scale {scale}").as_str());
        evaluator.perturb_times(probability, scale, random);
    }

    let init_solution = matches
        .get_one::<String>(INIT_SOLUTION_ARG_NAME)
        .map(|path| {
            open_file(path, "init solution").and_then(|file| read_init_solution(BufReader::new(file), &instance))
        })
        .transpose()?;

    let builder = Builder::new(Arc::new(evaluator))
        .with_config(config)
        .with_environment(environment)
        .with_max_iterations(max_iterations);
    let builder = match init_solution {
        Some(solution) => builder.with_initial_solution(solution),
        None => builder,
    };

    let output = builder.build()?.solve()?;

    if let Some(path) = matches.get_one::<String>(OUT_SOLUTION_ARG_NAME) {
        let mut writer = BufWriter::new(create_file(path, "out solution")?);
        output.best_solution.write_evrptw(&instance, &mut writer)?;
    }

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_summary(out_writer_func(out_result), &create_summary(&output, &instance))
}

/// Parses perturbation in form "probability,scale".
fn parse_perturbation(arg: &str) -> GenericResult<(Float, Float)> {
    let values = arg.split(',').map(|value| value.trim().parse::<Float>()).collect::<Result<Vec<_>, _>>();

    match values.as_deref() {
        Ok([probability, scale]) if (0. ..=1.).contains(probability) && *scale >= 0. => Ok((*probability, *scale)),
        _ => Err(format!(
            "cannot parse perturbation, expected \"probability,scale\" with probability in [0, 1] \
             and non-negative scale, got: '{arg}'"
        )
        .into()),
    }
}
