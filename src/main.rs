use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    inv_cli::run().await
}
