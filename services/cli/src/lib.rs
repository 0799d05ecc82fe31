mod cli;
mod infra;
mod render;

use outage_intel::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
