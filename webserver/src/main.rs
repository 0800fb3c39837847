//! Appraisal server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shared::{logging, logging::WEBSERVER_SERVICE, service_info};

use webserver::{RealAppraisalStore, WebServer, WebServerState, config::Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env act as environment defaults for clap
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let config = args.into_config().context("invalid configuration")?;
    logging::log_startup(WEBSERVER_SERVICE, &format!("appraisal server on {}", config.bind_address()));

    let bind_address: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_address()))?;

    service_info!(
        WEBSERVER_SERVICE,
        "📐 Adjustment rates: location ${}, ${}/sqft, ${}/bedroom, ${}/bathroom, ${}/year",
        config.rates.location_flat,
        config.rates.per_square_foot,
        config.rates.per_bedroom,
        config.rates.per_bathroom,
        config.rates.per_year_built
    );

    let state = Arc::new(WebServerState::new(bind_address, config.rates));
    let store = RealAppraisalStore::new(state.clone());
    let webserver = WebServer::new(state, store);

    if let Err(e) = webserver.run().await {
        logging::log_error(WEBSERVER_SERVICE, "Web server", &e);
        return Err(e.into());
    }

    logging::log_success(WEBSERVER_SERVICE, "Appraisal server stopped gracefully");
    Ok(())
}
