use std::error::Error;
use std::io::Write;

use log::{debug, error, info};
use thiserror::Error;

use config::config::Config;

use crate::source::FeeEstimationSource;
use crate::GasFeeQuery;

// Requests run one at a time, directions outer and scenarios inner. The first failure ends the run.
pub struct GasFeeReporter<'config, Source: FeeEstimationSource> {
    config: &'config Config,
    source: &'config Source,
}

impl<'config, Source: FeeEstimationSource> GasFeeReporter<'config, Source> {
    pub fn new(config: &'config Config, source: &'config Source) -> Self {
        GasFeeReporter { config, source }
    }

    pub fn queries(&self) -> Vec<GasFeeQuery> {
        self.config
            .directions
            .iter()
            .flat_map(|direction| {
                self.config
                    .scenarios
                    .iter()
                    .map(move |scenario| GasFeeQuery::build(direction, scenario))
            })
            .collect()
    }

    // Returns the number of lines written
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize, ReportError<Source::Error>> {
        let queries = self.queries();
        let total = queries.len();
        info!("Reporting {} gas fee estimates", total);

        let mut reported = 0;
        for query in queries {
            debug!("Processing query {}/{}: {:?}", reported + 1, total, query);

            let estimate = match self.source.estimate_gas_fee(&query).await {
                Ok(estimate) => estimate,
                Err(source) => {
                    error!("Gas fee estimation failed for '{}': {}", query, source);
                    return Err(ReportError::EstimationFailed { query, source });
                }
            };

            writeln!(out, "{}: {}", query, estimate)?;
            out.flush()?;
            reported += 1;
        }

        info!("Reported {} gas fee estimates", reported);
        Ok(reported)
    }
}

#[derive(Debug, Error)]
pub enum ReportError<E: Error + 'static> {
    #[error("Failed to estimate gas fee for '{query}': {source}")]
    EstimationFailed { query: GasFeeQuery, source: E },

    #[error("Failed to write report line: {0}")]
    Output(#[from] std::io::Error),
}
