pub use chain::{EvmChain, GasToken};
pub use config::{Config, ConfigError};

mod chain;
pub mod config;
