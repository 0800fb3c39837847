//! Command line and environment configuration

use clap::Parser;
use shared::{AdjustmentRates, ServerConfig};

use crate::error::WebServerResult;

/// Command line arguments; every option can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "appraisal-server")]
#[command(about = "Comparable-sales adjustment and reconciliation API")]
pub struct Args {
    /// Interface to bind
    #[arg(long, env = "APPRAISAL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server
    #[arg(long, env = "APPRAISAL_PORT", default_value = "8080")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "APPRAISAL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Flat adjustment when the comparable is in a different city
    #[arg(long, env = "APPRAISAL_LOCATION_FLAT", default_value_t = 10_000.0)]
    pub location_flat: f64,

    /// Dollars per square foot of difference
    #[arg(long, env = "APPRAISAL_PER_SQUARE_FOOT", default_value_t = 100.0)]
    pub per_square_foot: f64,

    /// Dollars per bedroom of difference
    #[arg(long, env = "APPRAISAL_PER_BEDROOM", default_value_t = 10_000.0)]
    pub per_bedroom: f64,

    /// Dollars per bathroom of difference
    #[arg(long, env = "APPRAISAL_PER_BATHROOM", default_value_t = 15_000.0)]
    pub per_bathroom: f64,

    /// Dollars per year of difference in year built
    #[arg(long, env = "APPRAISAL_PER_YEAR_BUILT", default_value_t = 1_000.0)]
    pub per_year_built: f64,
}

impl Args {
    /// Turn parsed arguments into a validated server configuration
    pub fn into_config(self) -> WebServerResult<ServerConfig> {
        let config = ServerConfig {
            host: self.host,
            port: self.port,
            rates: AdjustmentRates {
                location_flat: self.location_flat,
                per_square_foot: self.per_square_foot,
                per_bedroom: self.per_bedroom,
                per_bathroom: self.per_bathroom,
                per_year_built: self.per_year_built,
            },
        };
        config.validate()?;
        Ok(config)
    }
}
