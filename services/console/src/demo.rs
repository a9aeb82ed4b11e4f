use crate::infra::Workspace;
use crate::views::{render_receipt, render_review, render_summary};
use clap::Args;
use jobswipe::error::AppError;
use jobswipe::workflows::swipe::{
    ApplicationDesk, ApplicationReceipt, SessionSummary, SwipeDirection,
};
use serde::Serialize;
use tracing::{debug, info};

/// Swipes replayed by `demo` when none are given: like, like, skip, like, skip, skip.
const DEFAULT_SWIPES: [SwipeDirection; 6] = [
    SwipeDirection::Right,
    SwipeDirection::Right,
    SwipeDirection::Left,
    SwipeDirection::Right,
    SwipeDirection::Left,
    SwipeDirection::Left,
];

#[derive(Args, Debug)]
pub(crate) struct SwipeArgs {
    /// Swipe directions in order (left/l/skip or right/r/like)
    #[arg(required = true)]
    pub(crate) directions: Vec<SwipeDirection>,
    /// Print the session outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Comma separated swipe directions. Defaults to right,right,left,right,left,left.
    #[arg(long, value_delimiter = ',')]
    pub(crate) swipes: Vec<SwipeDirection>,
    /// Only apply to interested jobs the student is eligible for
    #[arg(long)]
    pub(crate) only_eligible: bool,
}

#[derive(Debug, Serialize)]
struct SwipeOutcome {
    summary: SessionSummary,
    interested: Vec<String>,
}

/// Everything the demo produced, in display order.
#[derive(Debug)]
pub(crate) struct DemoRun {
    pub(crate) reviews: Vec<String>,
    pub(crate) receipts: Vec<ApplicationReceipt>,
    pub(crate) skipped: Vec<String>,
    pub(crate) summary: SessionSummary,
}

pub(crate) fn run_swipe_replay(workspace: &Workspace, args: SwipeArgs) -> Result<(), AppError> {
    let mut context = workspace.start_session();
    for direction in &args.directions {
        context.swipe(*direction)?;
    }

    let session = context.session()?;
    let outcome = SwipeOutcome {
        summary: session.summary(),
        interested: session
            .interested_jobs()
            .iter()
            .map(|job| job.id.to_string())
            .collect(),
    };

    if args.json {
        let payload = serde_json::to_string_pretty(&outcome)?;
        println!("{payload}");
    } else {
        print!("{}", render_summary(&outcome.summary));
        for job in session.interested_jobs() {
            println!("  interested: [{}] {}", job.id, job.headline());
        }
    }
    Ok(())
}

pub(crate) fn run_demo(workspace: &Workspace, args: DemoArgs) -> Result<(), AppError> {
    let run = simulate(workspace, &args)?;

    for (review, receipt) in run.reviews.iter().zip(&run.receipts) {
        print!("{review}");
        print!("{}", render_receipt(receipt));
    }
    for headline in &run.skipped {
        println!("skipped (not eligible): {headline}");
    }
    print!("{}", render_summary(&run.summary));
    Ok(())
}

pub(crate) fn simulate(workspace: &Workspace, args: &DemoArgs) -> Result<DemoRun, AppError> {
    let swipes: &[SwipeDirection] = if args.swipes.is_empty() {
        &DEFAULT_SWIPES
    } else {
        &args.swipes
    };

    let mut context = workspace.start_session();
    for direction in swipes {
        context.swipe(*direction)?;
    }

    let student = context.profile()?.clone();
    let desk = ApplicationDesk::new(&student);
    let session = context.session_mut()?;
    let interested = session.interested_jobs().to_vec();
    debug!(count = interested.len(), "reviewing interested jobs");

    let mut run = DemoRun {
        reviews: Vec::with_capacity(interested.len()),
        receipts: Vec::with_capacity(interested.len()),
        skipped: Vec::new(),
        summary: session.summary(),
    };

    for job in &interested {
        let review = desk.review(job);
        if args.only_eligible && !review.eligibility.overall_eligible {
            run.skipped.push(review.headline);
            continue;
        }
        run.reviews.push(render_review(&review));
        run.receipts.push(desk.confirm(session, job));
    }

    run.summary = session.summary();
    info!(
        interested = run.summary.interested,
        applied = run.summary.applied,
        "demo finished"
    );
    Ok(run)
}
