mod cli;
mod demo;
mod infra;
mod session;

use disha::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
