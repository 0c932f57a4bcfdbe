use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fluvio_future::task::run_block_on;
use k8_client::load_and_share;

use programa_controller::ProgramADeploymentController;
use programa_controller::cli::ControllerOpt;

fn main() -> Result<()> {
    init_tracer();

    let config = ControllerOpt::parse().into_config();
    info!(?config, "starting controller");

    run_block_on(async move {
        let k8_client = load_and_share()?;
        ProgramADeploymentController::new(config, k8_client)
            .run()
            .await?;
        Ok::<_, anyhow::Error>(())
    })
}

/// log at info unless RUST_LOG says otherwise
fn init_tracer() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
