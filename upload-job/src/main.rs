use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use upload_job::types::Environment;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // An invalid APP_ENV still gets human-readable logs; run() reports it
    let json_logs = Environment::from_env().is_ok_and(|env| env.json_logs());

    // Use JSON format for staging/production, regular format for development
    if json_logs {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    info!("Starting upload job");

    if let Err(e) = upload_job::run().await {
        error!("Upload job failed: {}", e);
        return Err(e.into());
    }

    info!("Upload job finished");
    Ok(())
}
