use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Who receives the odd chips when a pot does not divide evenly among winners.
/// Every policy is deterministic in the players-list order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RemainderPolicy {
    /// The whole remainder goes to the first winner in players-list order.
    #[default]
    FirstWinner,
    /// One chip each to the first `remainder` winners in players-list order.
    OneChipEach,
    /// One chip each, starting with the first winner seated after `button`, wrapping around.
    LeftOfButton { button: usize },
}

impl RemainderPolicy {
    pub fn name(self) -> &'static str {
        match self {
            RemainderPolicy::FirstWinner => "first-winner",
            RemainderPolicy::OneChipEach => "one-chip-each",
            RemainderPolicy::LeftOfButton { .. } => "left-of-button",
        }
    }
}

/// Showdown options. On disk (and in any serde format) they use the flat form
/// `remainder = "left-of-button"` plus `button = N`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FileOptions", into = "FileOptions")]
pub struct ShowdownOptions {
    pub remainder: RemainderPolicy,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    remainder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    button: Option<usize>,
}

impl From<ShowdownOptions> for FileOptions {
    fn from(opts: ShowdownOptions) -> Self {
        let button = match opts.remainder {
            RemainderPolicy::LeftOfButton { button } => Some(button),
            _ => None,
        };
        Self {
            remainder: Some(opts.remainder.name().to_string()),
            button,
        }
    }
}

impl TryFrom<FileOptions> for ShowdownOptions {
    type Error = ConfigError;

    fn try_from(f: FileOptions) -> Result<Self, Self::Error> {
        let remainder = match (f.remainder.as_deref(), f.button) {
            (None, None) => RemainderPolicy::default(),
            (Some("first-winner"), None) => RemainderPolicy::FirstWinner,
            (Some("one-chip-each"), None) => RemainderPolicy::OneChipEach,
            (Some("left-of-button"), Some(button)) => RemainderPolicy::LeftOfButton { button },
            (Some("left-of-button"), None) => {
                return Err(ConfigError::Invalid(
                    "left-of-button requires a button seat".into(),
                ))
            }
            (Some(other), None) => {
                return Err(ConfigError::Invalid(format!(
                    "unknown remainder policy: {other}"
                )))
            }
            (_, Some(_)) => {
                return Err(ConfigError::Invalid(
                    "button is only valid with the left-of-button policy".into(),
                ))
            }
        };
        Ok(Self { remainder })
    }
}

impl ShowdownOptions {
    pub fn new(remainder: RemainderPolicy) -> Self {
        Self { remainder }
    }

    /// Loads options from TOML text, falling back to defaults for missing keys.
    ///
    /// ```
    /// use showdown_engine::config::{RemainderPolicy, ShowdownOptions};
    ///
    /// let opts = ShowdownOptions::from_toml_str("remainder = \"left-of-button\"\nbutton = 2").unwrap();
    /// assert_eq!(opts.remainder, RemainderPolicy::LeftOfButton { button: 2 });
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let f: FileOptions = toml::from_str(s)?;
        Self::try_from(f)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
