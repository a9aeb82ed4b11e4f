use crate::demo::{run_demo, run_swipe_replay, DemoArgs, SwipeArgs};
use crate::infra::Workspace;
use crate::views::{render_jobs, render_match, render_profile, MatchReport};
use clap::{Args, Parser, Subcommand};
use jobswipe::config::AppConfig;
use jobswipe::error::AppError;
use jobswipe::telemetry;
use jobswipe::workflows::matching::JobId;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "JobSwipe",
    about = "Swipe through job postings, check eligibility, and simulate ATS-scored applications",
    version
)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct DataArgs {
    /// JSON job catalog to use instead of the configured or built-in deck
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// JSON student profile to use instead of the configured or built-in student
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every job in the deck with its eligibility criteria
    Jobs,
    /// Show the student profile used for matching
    Profile,
    /// Check eligibility and compute the live ATS score for one job
    Match(MatchArgs),
    /// Replay a sequence of swipes and report the resulting session
    Swipe(SwipeArgs),
    /// Walk the whole deck, then apply to every interested job (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Job id as listed by `jobs`
    #[arg(long)]
    job: String,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(path) = cli.data.catalog {
        config.data.catalog_path = Some(path);
    }
    if let Some(path) = cli.data.profile {
        config.data.profile_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    let workspace = Workspace::load(&config.data)?;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Jobs => {
            print!("{}", render_jobs(workspace.jobs(), workspace.profile()));
            Ok(())
        }
        Command::Profile => {
            print!("{}", render_profile(workspace.profile()));
            Ok(())
        }
        Command::Match(args) => run_match(&workspace, args),
        Command::Swipe(args) => run_swipe_replay(&workspace, args),
        Command::Demo(args) => run_demo(&workspace, args),
    }
}

fn run_match(workspace: &Workspace, args: MatchArgs) -> Result<(), AppError> {
    let job = workspace.find_job(&JobId::new(args.job))?;
    let report = MatchReport::build(workspace.profile(), job);

    if args.json {
        let payload = serde_json::to_string_pretty(&report)?;
        println!("{payload}");
    } else {
        print!("{}", render_match(&report));
    }
    Ok(())
}
