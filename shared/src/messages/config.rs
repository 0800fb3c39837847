//! Configuration types
//!
//! Adjustment rates used by the comparable-sales engine and the server
//! configuration that carries them.

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Dollar rates applied per unit of difference between subject and comparable
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRates {
    /// Flat amount applied when the comparable sits in a different city
    pub location_flat: f64,
    pub per_square_foot: f64,
    pub per_bedroom: f64,
    pub per_bathroom: f64,
    /// Per year of difference in year built
    pub per_year_built: f64,
}

impl Default for AdjustmentRates {
    fn default() -> Self {
        Self {
            location_flat: 10_000.0,
            per_square_foot: 100.0,
            per_bedroom: 10_000.0,
            per_bathroom: 15_000.0,
            per_year_built: 1_000.0,
        }
    }
}

impl AdjustmentRates {
    /// Reject rates that would poison every adjusted price
    pub fn validate(&self) -> SharedResult<()> {
        let fields = [
            ("location_flat", self.location_flat),
            ("per_square_foot", self.per_square_foot),
            ("per_bedroom", self.per_bedroom),
            ("per_bathroom", self.per_bathroom),
            ("per_year_built", self.per_year_built),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SharedError::InvalidConfig {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Web server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rates: AdjustmentRates,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rates: AdjustmentRates::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> SharedResult<()> {
        if self.port == 0 {
            return Err(SharedError::InvalidConfig {
                field: "port".to_string(),
                value: "0".to_string(),
            });
        }
        if self.host.trim().is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "host".to_string(),
                value: self.host.clone(),
            });
        }
        self.rates.validate()
    }

    /// Address string suitable for `SocketAddr` parsing
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
