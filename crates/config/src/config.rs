use std::ops::Deref;

use derive_more::{Display, From, Into};
use serde::Deserialize;
use serde_valid::yaml::FromYamlStr;
use serde_valid::{UniqueItemsError, Validate, ValidateUniqueItems};

use crate::chain::{EvmChain, GasToken};

const TESTNET_GMP_API_URL: &str = "https://testnet.api.gmp.axelarscan.io";
const MAINNET_GMP_API_URL: &str = "https://api.gmp.axelarscan.io";

// Built-in configuration, reproduces the savings / unlock / default scenarios
// between Moonbeam and Fantom on testnet.
const TESTNET_CONFIG: &str = include_str!("../../../config.yaml.example");

// Config Type
#[derive(Debug)]
pub struct Config {
    // The Axelar network fee estimates are requested from
    pub environment: Environment,
    // Axelar GMP API configuration
    pub axelar: AxelarConfig,
    // Gas usage scenarios, in reporting order
    pub scenarios: Vec<ScenarioConfig>,
    // Source -> destination chain pairs, in reporting order
    pub directions: Vec<DirectionConfig>,
}

impl Config {
    pub fn from_file(file_path: &str) -> Result<Self, ConfigError> {
        let config_file_content = std::fs::read_to_string(file_path)?;
        Self::from_yaml_str(&config_file_content)
    }

    pub fn testnet() -> Result<Self, ConfigError> {
        Self::from_yaml_str(TESTNET_CONFIG)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let raw_config = RawConfig::from_yaml_str(s)?;

        if raw_config.scenarios.is_empty() {
            return Err(ConfigError::NoScenarios);
        }
        if raw_config.directions.is_empty() {
            return Err(ConfigError::NoDirections);
        }

        for scenario in raw_config.scenarios.iter() {
            if scenario.gas_limit == 0 {
                return Err(ConfigError::InvalidGasLimit(scenario.name.clone()));
            }
        }

        for direction in raw_config.directions.iter() {
            if direction.from_chain == direction.to_chain {
                return Err(ConfigError::SameSourceAndDestination(direction.from_chain));
            }
        }

        Ok(Config {
            environment: raw_config.environment,
            axelar: raw_config.axelar,
            scenarios: raw_config.scenarios.0,
            directions: raw_config.directions.0,
        })
    }

    pub fn gmp_api_url(&self) -> &str {
        match &self.axelar.base_url {
            Some(base_url) => base_url.trim_end_matches('/'),
            None => self.environment.gmp_api_url(),
        }
    }
}

#[derive(Debug, From, Display)]
pub enum ConfigError {
    #[display("No gas scenarios configured")]
    #[from(ignore)]
    NoScenarios,

    #[display("No chain directions configured")]
    #[from(ignore)]
    NoDirections,

    #[display("Gas limit must be positive for scenario: {}", _0)]
    #[from(ignore)]
    InvalidGasLimit(String),

    #[display("Source and destination chain are both: {}", _0)]
    #[from(ignore)]
    SameSourceAndDestination(EvmChain),

    #[display("Serde Error: {}", _0)]
    SerdeError(serde_valid::Error<serde_yaml::Error>),

    #[display("Error Reading Config File: {}", _0)]
    IoError(std::io::Error),
}

impl std::error::Error for ConfigError {}

// Intermediate Config Type as Deserialization Target
#[derive(Debug, Deserialize, From, Into)]
pub struct Scenarios(Vec<ScenarioConfig>);

impl ValidateUniqueItems for Scenarios {
    fn validate_unique_items(&self) -> Result<(), UniqueItemsError> {
        self.iter().map(|s| s.name.clone()).collect::<Vec<_>>().validate_unique_items()
    }
}

impl Deref for Scenarios {
    type Target = Vec<ScenarioConfig>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize, From, Into)]
pub struct Directions(Vec<DirectionConfig>);

impl ValidateUniqueItems for Directions {
    fn validate_unique_items(&self) -> Result<(), UniqueItemsError> {
        self.iter()
            .map(|d| format!("{}:{}", d.from_chain.id(), d.to_chain.id()))
            .collect::<Vec<_>>()
            .validate_unique_items()
    }
}

impl Deref for Directions {
    type Target = Vec<DirectionConfig>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RawConfig {
    #[serde(default)]
    pub environment: Environment,
    #[validate]
    pub axelar: AxelarConfig,
    #[validate(unique_items)]
    pub scenarios: Scenarios,
    #[validate(unique_items)]
    pub directions: Directions,
}

#[derive(Debug, Deserialize, Display, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[display("testnet")]
    Testnet,
    #[display("mainnet")]
    Mainnet,
}

impl Environment {
    pub fn gmp_api_url(&self) -> &'static str {
        match self {
            Environment::Testnet => TESTNET_GMP_API_URL,
            Environment::Mainnet => MAINNET_GMP_API_URL,
        }
    }
}

#[derive(Debug, Deserialize, Validate, Clone)]
pub struct AxelarConfig {
    // Overrides the GMP API URL implied by the environment
    #[validate(
        pattern = r"^https?://[-a-zA-Z0-9@:%._\+~#=]{1,256}(/[-a-zA-Z0-9()@:%_\+.~#?&/=]*)?$"
    )]
    #[serde(default)]
    pub base_url: Option<String>,

    // Fixed multiplier applied to the execution fee, the API picks one when absent
    #[validate(minimum = 1.0)]
    #[serde(default)]
    pub gas_multiplier: Option<f64>,

    // Lower bound for the destination gas price, in wei
    #[validate(pattern = r"^[0-9]+$")]
    #[serde(default = "default_min_gas_price")]
    pub min_gas_price: String,
}

fn default_min_gas_price() -> String {
    "0".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    // Unique name of the scenario
    pub name: String,
    // Human readable label used in the report
    pub label: String,
    // Gas units the destination call is expected to use
    pub gas_limit: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DirectionConfig {
    // The chain the call starts on and the fee is paid on
    pub from_chain: EvmChain,
    // The chain executing the call
    pub to_chain: EvmChain,
    // Token the fee is paid in, the native token of the source chain when absent
    #[serde(default)]
    pub gas_token: Option<GasToken>,
}

impl DirectionConfig {
    pub fn gas_token(&self) -> GasToken {
        self.gas_token.unwrap_or_else(|| self.from_chain.native_gas_token())
    }
}

#[cfg(test)]
mod tests {
    use crate::chain::{EvmChain, GasToken};
    use crate::config::{Config, ConfigError, Environment};

    fn get_sample_config() -> Config {
        Config::from_file("../../config.yaml.example").unwrap()
    }

    fn config_with(scenarios: &str, directions: &str) -> Result<Config, ConfigError> {
        Config::from_yaml_str(&format!(
            r#"
environment: testnet
axelar:
  min_gas_price: '0'
scenarios:
{}
directions:
{}
"#,
            scenarios, directions
        ))
    }

    #[test]
    fn test_config_parsing() {
        get_sample_config();
    }

    #[test]
    fn test_testnet_defaults() {
        let config = Config::testnet().unwrap();

        assert_eq!(config.environment, Environment::Testnet);
        assert_eq!(config.gmp_api_url(), "https://testnet.api.gmp.axelarscan.io");
        assert_eq!(config.axelar.gas_multiplier, None);
        assert_eq!(config.axelar.min_gas_price, "0");

        let gas_limits: Vec<u64> = config.scenarios.iter().map(|s| s.gas_limit).collect();
        assert_eq!(gas_limits, vec![120000, 400000, 80000]);

        assert_eq!(config.directions.len(), 2);
        assert_eq!(config.directions[0].from_chain, EvmChain::Moonbeam);
        assert_eq!(config.directions[0].to_chain, EvmChain::Fantom);
        assert_eq!(config.directions[0].gas_token(), GasToken::Glmr);
        assert_eq!(config.directions[1].from_chain, EvmChain::Fantom);
        assert_eq!(config.directions[1].to_chain, EvmChain::Moonbeam);
        assert_eq!(config.directions[1].gas_token(), GasToken::Ftm);
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::from_yaml_str(
            r#"
environment: mainnet
axelar:
  base_url: 'http://localhost:8080/'
  gas_multiplier: 1.5
scenarios:
  - name: savings
    label: Savings
    gas_limit: 120000
directions:
  - from_chain: moonbeam
    to_chain: fantom
    gas_token: FTM
"#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Mainnet);
        assert_eq!(config.gmp_api_url(), "http://localhost:8080");
        assert_eq!(config.axelar.gas_multiplier, Some(1.5));
        assert_eq!(config.axelar.min_gas_price, "0");
        assert_eq!(config.directions[0].gas_token(), GasToken::Ftm);
    }

    #[test]
    fn test_mainnet_url() {
        assert_eq!(Environment::Mainnet.gmp_api_url(), "https://api.gmp.axelarscan.io");
    }

    #[test]
    fn test_should_not_allow_duplicate_scenarios() {
        let err = config_with(
            r#"
  - name: savings
    label: Savings
    gas_limit: 120000
  - name: savings
    label: Savings Again
    gas_limit: 1000
"#,
            r#"
  - from_chain: moonbeam
    to_chain: fantom
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::SerdeError(_)));
        assert!(err.to_string().contains("unique"));
    }

    #[test]
    fn test_should_not_allow_duplicate_directions() {
        let err = config_with(
            r#"
  - name: savings
    label: Savings
    gas_limit: 120000
"#,
            r#"
  - from_chain: moonbeam
    to_chain: fantom
  - from_chain: moonbeam
    to_chain: fantom
    gas_token: GLMR
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::SerdeError(_)));
    }

    #[test]
    fn test_should_not_allow_loop_direction() {
        let err = config_with(
            r#"
  - name: savings
    label: Savings
    gas_limit: 120000
"#,
            r#"
  - from_chain: fantom
    to_chain: fantom
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::SameSourceAndDestination(EvmChain::Fantom)));
    }

    #[test]
    fn test_should_not_allow_zero_gas_limit() {
        let err = config_with(
            r#"
  - name: noop
    label: Nothing
    gas_limit: 0
"#,
            r#"
  - from_chain: moonbeam
    to_chain: fantom
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidGasLimit(name) if name == "noop"));
    }

    #[test]
    fn test_should_require_scenarios_and_directions() {
        let err = config_with(
            "  []",
            r#"
  - from_chain: moonbeam
    to_chain: fantom
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NoScenarios));

        let err = config_with(
            r#"
  - name: savings
    label: Savings
    gas_limit: 120000
"#,
            "  []",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NoDirections));
    }

    #[test]
    fn test_should_reject_low_gas_multiplier() {
        let err = Config::from_yaml_str(
            r#"
axelar:
  gas_multiplier: 0.5
scenarios:
  - name: savings
    label: Savings
    gas_limit: 120000
directions:
  - from_chain: moonbeam
    to_chain: fantom
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::SerdeError(_)));
    }

    #[test]
    fn test_should_reject_unknown_chain() {
        let err = config_with(
            r#"
  - name: savings
    label: Savings
    gas_limit: 120000
"#,
            r#"
  - from_chain: moonbase
    to_chain: fantom
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::SerdeError(_)));
    }

    fn config_with_axelar(axelar: &str) -> Result<Config, ConfigError> {
        Config::from_yaml_str(&format!(
            r#"
axelar:
{}
scenarios:
  - name: savings
    label: Savings
    gas_limit: 120000
directions:
  - from_chain: moonbeam
    to_chain: fantom
"#,
            axelar
        ))
    }

    #[test]
    fn test_should_reject_malformed_base_url() {
        for base_url in ["not a url http://x", "xhttp://a", "localhost:8080", "http://a b"] {
            let err = config_with_axelar(&format!("  base_url: '{}'", base_url)).unwrap_err();
            assert!(matches!(err, ConfigError::SerdeError(_)), "accepted {}", base_url);
        }
    }

    #[test]
    fn test_should_accept_http_base_urls() {
        for base_url in
            ["http://127.0.0.1:41873", "https://testnet.api.gmp.axelarscan.io", "http://localhost/gmp/"]
        {
            let config = config_with_axelar(&format!("  base_url: '{}'", base_url)).unwrap();
            assert_eq!(config.gmp_api_url(), base_url.trim_end_matches('/'));
        }
    }

    #[test]
    fn test_should_reject_non_numeric_min_gas_price() {
        for min_gas_price in ["abc", "1.5", "-1", ""] {
            let err =
                config_with_axelar(&format!("  min_gas_price: '{}'", min_gas_price)).unwrap_err();
            assert!(matches!(err, ConfigError::SerdeError(_)), "accepted {}", min_gas_price);
        }

        let config = config_with_axelar("  min_gas_price: '25000000000'").unwrap();
        assert_eq!(config.axelar.min_gas_price, "25000000000");
    }
}
