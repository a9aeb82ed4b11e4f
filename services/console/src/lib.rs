mod cli;
mod demo;
mod infra;
mod views;

use jobswipe::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
