use json;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::io::Write;
use std::path::PathBuf;
use anyhow::{Context, Result};
use tracing::*;

use ridesched::*;
use ridesched::sched::{POLICY_STRINGS, DEFAULT_THRESHOLD};
use ridesched::score::evaluate_routes;
use ridesched::data::resolve_instance;
use instances::{ParseInstance, SubmissionFmt};
use instances::raw::rides::Submission;

mod common;
use common::*;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct ClArgs {
    #[structopt(long)]
    log: Option<PathBuf>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Build an assignment for each input instance
    Solve {
        /// Instance files, or instance names in `--data-dir`
        #[structopt(required=true)]
        inputs: Vec<String>,
        #[structopt(long, short="c", default_value="1", validator=clap_range_validator(Some(1), None))]
        cpus: usize,
        /// Number of refinement passes [default: 5]
        #[structopt(long, short="t")]
        threshold: Option<usize>,
        /// Construction policy, chosen from the grid size if omitted
        #[structopt(long, possible_values=&POLICY_STRINGS)]
        policy: Option<HeuristicPolicy>,
        #[structopt(long="data-dir", short="d")]
        data_dir: Option<PathBuf>,
        #[structopt(flatten)]
        output: OutputOptions,
    },
    /// Validate a submission and print its score
    Check {
        instance: String,
        submission: PathBuf,
        #[structopt(long="data-dir", short="d")]
        data_dir: Option<PathBuf>,
    },
}

impl SolutionOutput for Solution {
    fn name(&self) -> &str { &self.city.id }

    fn write_text(&self, buf: impl Write) -> Result<()> {
        self.write_assignment(buf)?;
        return Ok(())
    }

    fn write_json_summary(&self, mut buf: impl Write) -> Result<()> {
        let root = json::object! {
            name: self.city.id.as_str(),
            policy: self.city.policy().to_string(),
            vehicles: self.fleet.len(),
            rides: self.city.rides().len(),
            assigned: self.num_assigned(),
            construction_score: self.construction_score,
            score: self.score,
            threshold: self.config.threshold,
            accepted: self.accepted,
        };
        root.write_pretty(&mut buf, 2)?;
        writeln!(buf)?;
        return Ok(())
    }
}

fn solve_all(inputs: &[String], config: &SolverConfig, data_dir: Option<PathBuf>, output: &OutputOptions) -> Result<()> {
    let solutions = inputs.par_iter()
        .map(|input| -> Result<Solution> {
            let data = resolve_instance(input, data_dir.as_deref())?;
            Ok(solve(&data, config))
        })
        .collect::<Result<Vec<_>>>()?;

    for sol in &solutions {
        info!(instance=%sol.city.id, score=sol.score, "writing output");
        output_solution(output, sol)?;
    }
    return Ok(())
}

fn check(instance: &str, submission: &PathBuf, data_dir: Option<PathBuf>) -> Result<()> {
    let data = resolve_instance(instance, data_dir.as_deref())?;
    let sub = Submission::parse(SubmissionFmt(submission))?;
    let city = City::new(&data);
    let score = evaluate_routes(&city, &sub.routes)
        .with_context(|| format!("invalid submission {:?}", submission))?;
    println!("{} {}", data.id, score);
    return Ok(())
}

fn main() -> Result<()> {
    let args : ClArgs = StructOpt::from_args();
    let _g = init_logging(args.log.clone())?;
    debug!(?args);

    match args.cmd {
        Command::Solve { inputs, cpus, threshold, policy, data_dir, output } => {
            ThreadPoolBuilder::new().num_threads(cpus).build_global()
                .context("failed to construct thread pool")?;
            let config = SolverConfig { threshold: threshold.unwrap_or(DEFAULT_THRESHOLD), policy };
            solve_all(&inputs, &config, data_dir, &output)?;
        },
        Command::Check { instance, submission, data_dir } => {
            check(&instance, &submission, data_dir)?;
        },
    }
    Ok(())
}

