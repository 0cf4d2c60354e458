use crate::property::Money;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rules TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid rule {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// House rules and money constants of a session.
///
/// Every field has a default, so a rules file only has to name what it
/// changes:
///
/// ```
/// use monopoly_rs::rules::Rules;
///
/// let rules = Rules::from_toml_str("pass_go_bonus = 400").unwrap();
/// assert_eq!(rules.pass_go_bonus, 400);
/// assert_eq!(rules.starting_cash, Rules::default().starting_cash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub starting_cash: Money,
    pub pass_go_bonus: Money,
    pub income_tax: Money,
    pub luxury_tax: Money,
    /// Credited on free parking (a house rule; the printed rules pay nothing).
    pub free_parking_bonus: Money,
    /// Consecutive doubles that send the roller to jail.
    pub doubles_to_jail: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_cash: 5000,
            pass_go_bonus: 200,
            income_tax: 200,
            luxury_tax: 100,
            free_parking_bonus: 100,
            doubles_to_jail: 3,
        }
    }
}

impl Rules {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let rules: Rules = toml::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_cash < 0 {
            return Err(ConfigError::Invalid {
                field: "starting_cash",
                reason: "must not be negative",
            });
        }
        if self.doubles_to_jail == 0 {
            return Err(ConfigError::Invalid {
                field: "doubles_to_jail",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
