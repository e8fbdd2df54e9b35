use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match image_gallery_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
