use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::StatusCode;
use thiserror::Error;

use config::config::Config;
use types::*;

use crate::source::FeeEstimationSource;
use crate::{FeeEstimate, GasFeeQuery};

mod types;

#[derive(Debug)]
pub struct AxelarGmpClient {
    client: reqwest::Client,
    base_url: String,
    gas_multiplier: GasMultiplier,
    min_gas_price: String,
}

impl AxelarGmpClient {
    pub fn new(config: &Config) -> Result<Self, AxelarClientError> {
        let client = reqwest::Client::builder().build()?;

        Ok(AxelarGmpClient {
            client,
            base_url: config.gmp_api_url().to_string(),
            gas_multiplier: config.axelar.gas_multiplier.into(),
            min_gas_price: config.axelar.min_gas_price.clone(),
        })
    }

    fn build_request(&self, query: &GasFeeQuery) -> EstimateGasFeeRequest {
        EstimateGasFeeRequest {
            source_chain: query.source_chain.id().to_string(),
            destination_chain: query.destination_chain.id().to_string(),
            gas_limit: query.gas_limit,
            gas_multiplier: self.gas_multiplier,
            source_token_symbol: query.gas_token.to_string(),
            min_gas_price: self.min_gas_price.clone(),
        }
    }

    async fn post_estimate_gas_fee(
        &self,
        request: &EstimateGasFeeRequest,
    ) -> Result<serde_json::Value, AxelarClientError> {
        debug!("Requesting gas fee estimate: {:?}", request);

        let response = self
            .client
            .post(format!("{}/estimateGasFee", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let raw_text = response.text().await?;

        if status != StatusCode::OK {
            error!("Axelar /estimateGasFee request failed with status: {}", status);
            return Err(AxelarClientError::RequestFailed(status, raw_text));
        }

        serde_json::from_str(&raw_text)
            .map_err(|err| AxelarClientError::DeserializationError(raw_text, err))
    }
}

// Fields of a detailed estimate, a body carrying any of them is a fee
const FEE_FIELDS: [&str; 5] =
    ["fee", "totalFee", "baseFee", "executionFee", "executionFeeWithMultiplier"];

// Error payloads are objects with a set `error` and/or a `message`, and no fee
fn rejection_message(response: &serde_json::Value) -> Option<String> {
    let object = response.as_object()?;
    if FEE_FIELDS.iter().any(|field| object.contains_key(*field)) {
        return None;
    }

    let error = object.get("error").filter(|error| match error {
        serde_json::Value::Null | serde_json::Value::Bool(false) => false,
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    });

    match (object.get("message"), error) {
        (Some(serde_json::Value::String(message)), _) => Some(message.clone()),
        (Some(message), _) if !message.is_null() => Some(message.to_string()),
        (_, Some(serde_json::Value::String(error))) => Some(error.clone()),
        (_, Some(error)) => Some(error.to_string()),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum AxelarClientError {
    #[error("Error while making request: {0}")]
    ApiCallError(#[from] reqwest::Error),

    #[error("Axelar GMP API request failed with status {0}: {1}")]
    RequestFailed(StatusCode, String),

    #[error("Deserialization Error - Original String {0}, Error {1}")]
    DeserializationError(String, serde_json::Error),

    #[error("Gas fee estimate rejected by Axelar GMP API: {0}")]
    ServiceRejected(String),
}

#[async_trait]
impl FeeEstimationSource for AxelarGmpClient {
    type Error = AxelarClientError;

    async fn estimate_gas_fee(&self, query: &GasFeeQuery) -> Result<FeeEstimate, Self::Error> {
        info!(
            "Estimating gas fee from {} to {} in {} for {} gas",
            query.source_chain, query.destination_chain, query.gas_token, query.gas_limit
        );

        let request = self.build_request(query);
        let response = self.post_estimate_gas_fee(&request).await?;

        if let Some(message) = rejection_message(&response) {
            error!("Axelar rejected gas fee estimate: {}", message);
            return Err(AxelarClientError::ServiceRejected(message));
        }

        info!("Gas fee estimate for {}: {}", query, response);

        Ok(FeeEstimate::from(response))
    }
}
