use readiness_server::frameworks::server;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the server framework entry point; only main decides the exit status.
    match server::start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "startup failed");
            ExitCode::FAILURE
        }
    }
}
