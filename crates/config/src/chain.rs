use derive_more::Display;
use serde::{Deserialize, Serialize};

// EVM chains known to the Axelar GMP API. The serde name is the chain id the API expects.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvmChain {
    Ethereum,
    Avalanche,
    Fantom,
    Polygon,
    Moonbeam,
    Binance,
    Arbitrum,
    Optimism,
    Celo,
    Kava,
    Base,
    Filecoin,
    Linea,
    Mantle,
    Scroll,
}

impl EvmChain {
    pub fn id(&self) -> &'static str {
        match self {
            EvmChain::Ethereum => "ethereum",
            EvmChain::Avalanche => "avalanche",
            EvmChain::Fantom => "fantom",
            EvmChain::Polygon => "polygon",
            EvmChain::Moonbeam => "moonbeam",
            EvmChain::Binance => "binance",
            EvmChain::Arbitrum => "arbitrum",
            EvmChain::Optimism => "optimism",
            EvmChain::Celo => "celo",
            EvmChain::Kava => "kava",
            EvmChain::Base => "base",
            EvmChain::Filecoin => "filecoin",
            EvmChain::Linea => "linea",
            EvmChain::Mantle => "mantle",
            EvmChain::Scroll => "scroll",
        }
    }

    // The token gas is paid in when this chain is the source of a call
    pub fn native_gas_token(&self) -> GasToken {
        match self {
            EvmChain::Ethereum
            | EvmChain::Arbitrum
            | EvmChain::Optimism
            | EvmChain::Base
            | EvmChain::Linea
            | EvmChain::Scroll => GasToken::Eth,
            EvmChain::Avalanche => GasToken::Avax,
            EvmChain::Fantom => GasToken::Ftm,
            EvmChain::Polygon => GasToken::Matic,
            EvmChain::Moonbeam => GasToken::Glmr,
            EvmChain::Binance => GasToken::Bnb,
            EvmChain::Celo => GasToken::Celo,
            EvmChain::Kava => GasToken::Kava,
            EvmChain::Filecoin => GasToken::Fil,
            EvmChain::Mantle => GasToken::Mnt,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GasToken {
    #[display("ETH")]
    Eth,
    #[display("AVAX")]
    Avax,
    #[display("FTM")]
    Ftm,
    #[display("MATIC")]
    Matic,
    #[display("GLMR")]
    Glmr,
    #[display("BNB")]
    Bnb,
    #[display("CELO")]
    Celo,
    #[display("KAVA")]
    Kava,
    #[display("FIL")]
    Fil,
    #[display("MNT")]
    Mnt,
}
