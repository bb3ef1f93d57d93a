use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    kube_scanner::app::startup::startup().await
}
