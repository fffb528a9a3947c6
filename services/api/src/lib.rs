mod cli;
mod infra;
mod render;
mod routes;
mod samples;
mod server;

use hiring_views::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
