use std::fmt::{Display, Formatter};

use config::config::{DirectionConfig, ScenarioConfig};
use config::{EvmChain, GasToken};

pub use reporter::{GasFeeReporter, ReportError};
pub use source::axelar::{AxelarClientError, AxelarGmpClient};
pub use source::FeeEstimationSource;

pub mod reporter;
pub mod source;

// A single fee estimation request: one scenario on one direction
#[derive(Debug, Clone, PartialEq)]
pub struct GasFeeQuery {
    pub label: String,
    pub source_chain: EvmChain,
    pub destination_chain: EvmChain,
    pub gas_token: GasToken,
    pub gas_limit: u64,
}

impl GasFeeQuery {
    pub fn build(direction: &DirectionConfig, scenario: &ScenarioConfig) -> Self {
        GasFeeQuery {
            label: scenario.label.clone(),
            source_chain: direction.from_chain,
            destination_chain: direction.to_chain,
            gas_token: direction.gas_token(),
            gas_limit: scenario.gas_limit,
        }
    }
}

impl Display for GasFeeQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gas Fee For {} From {} To {}",
            self.label, self.source_chain, self.destination_chain
        )
    }
}

// Estimate as returned by the service, strings display unquoted
#[derive(Debug, Clone, PartialEq)]
pub struct FeeEstimate(serde_json::Value);

impl FeeEstimate {
    pub fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for FeeEstimate {
    fn from(value: serde_json::Value) -> Self {
        FeeEstimate(value)
    }
}

impl From<&str> for FeeEstimate {
    fn from(value: &str) -> Self {
        FeeEstimate(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for FeeEstimate {
    fn from(value: String) -> Self {
        FeeEstimate(serde_json::Value::String(value))
    }
}

impl Display for FeeEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}
