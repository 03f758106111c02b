use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bet options must not be empty")]
    NoBetOptions,
    #[error("bet option must be positive")]
    ZeroBetOption,
    #[error("default bet {0} is not one of the bet options")]
    DefaultBetNotOffered(u64),
    #[error("bet option {0} exceeds the limit of {max}", max = MAX_BET)]
    BetAboveLimit(u64),
    #[error("starting balance {0} exceeds the limit of {max}", max = MAX_STARTING_BALANCE)]
    StartingBalanceAboveLimit(u64),
}

/// Largest bet a table may offer. A royal flush at this bet still leaves
/// room for a very long session before the balance nears `u64::MAX`.
pub const MAX_BET: u64 = 1_000_000;
pub const MAX_STARTING_BALANCE: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_starting_balance")]
    pub starting_balance: u64,
    #[serde(default = "default_bet")]
    pub default_bet: u64,
    #[serde(default = "default_bet_options")]
    pub bet_options: Vec<u64>,
}

fn default_starting_balance() -> u64 {
    200
}

fn default_bet() -> u64 {
    1
}

fn default_bet_options() -> Vec<u64> {
    vec![1, 5, 10, 25, 50]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            default_bet: default_bet(),
            bet_options: default_bet_options(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bet_options.is_empty() {
            return Err(ConfigError::NoBetOptions);
        }
        if self.bet_options.contains(&0) {
            return Err(ConfigError::ZeroBetOption);
        }
        if let Some(&bet) = self.bet_options.iter().find(|&&bet| bet > MAX_BET) {
            return Err(ConfigError::BetAboveLimit(bet));
        }
        if self.starting_balance > MAX_STARTING_BALANCE {
            return Err(ConfigError::StartingBalanceAboveLimit(self.starting_balance));
        }
        if !self.is_bet_offered(self.default_bet) {
            return Err(ConfigError::DefaultBetNotOffered(self.default_bet));
        }
        Ok(())
    }

    pub fn is_bet_offered(&self, bet: u64) -> bool {
        self.bet_options.contains(&bet)
    }
}
