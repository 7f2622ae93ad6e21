use serde::{Serialize, Serializer};

// POST /estimateGasFee
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateGasFeeRequest {
    pub source_chain: String,
    pub destination_chain: String,
    pub gas_limit: u64,
    pub gas_multiplier: GasMultiplier,
    pub source_token_symbol: String,
    pub min_gas_price: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GasMultiplier {
    // Let the API pick a multiplier from recent gas price volatility
    Auto,
    Fixed(f64),
}

impl From<Option<f64>> for GasMultiplier {
    fn from(value: Option<f64>) -> Self {
        value.map_or(GasMultiplier::Auto, GasMultiplier::Fixed)
    }
}

impl Serialize for GasMultiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GasMultiplier::Auto => serializer.serialize_str("auto"),
            GasMultiplier::Fixed(multiplier) => serializer.serialize_f64(*multiplier),
        }
    }
}
