use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::{FeeEstimate, GasFeeQuery};

pub mod axelar;

#[async_trait]
pub trait FeeEstimationSource {
    type Error: Debug + Error + Send + Sync + 'static;

    async fn estimate_gas_fee(&self, query: &GasFeeQuery) -> Result<FeeEstimate, Self::Error>;
}
