//! Statement layout configuration
//!
//! Names the header tokens used to find the header row and the header text
//! of each column the loader reads.
//!
//! ## Configuration Resolution
//!
//! Layout is loaded with a two-layer resolution:
//! 1. Check for an override (explicit path, then ~/.local/share/sift/layout.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default layout (compiled into binary)
const DEFAULT_LAYOUT: &str = include_str!("../../../config/layout.toml");

/// Tokens that identify the header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTokens {
    pub date_token: String,
    pub narration_token: String,
}

impl Default for HeaderTokens {
    fn default() -> Self {
        Self {
            date_token: "date".to_string(),
            narration_token: "narration".to_string(),
        }
    }
}

/// Header text for each statement column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub date: String,
    pub narration: String,
    pub reference: String,
    pub value_date: String,
    pub withdrawal: String,
    pub deposit: String,
    pub closing_balance: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            narration: "Narration".to_string(),
            reference: "Chq./Ref.No.".to_string(),
            value_date: "Value Dt".to_string(),
            withdrawal: "Withdrawal Amt.".to_string(),
            deposit: "Deposit Amt.".to_string(),
            closing_balance: "Closing Balance".to_string(),
        }
    }
}

/// Layout of a bank statement spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementLayout {
    pub header: HeaderTokens,
    pub columns: ColumnNames,
}

/// Where a layout was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    /// Override file on disk
    File(PathBuf),
    /// Compiled-in default
    Embedded,
}

impl fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "built-in defaults"),
        }
    }
}

impl StatementLayout {
    /// Parse a layout from TOML; missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The compiled-in HDFC layout
    pub fn embedded() -> Result<Self> {
        Self::from_toml(DEFAULT_LAYOUT)
    }

    /// Render as TOML, in the same shape as the override file
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load layout (override first, then default)
    pub fn load(override_path: Option<&Path>) -> Result<(Self, LayoutSource)> {
        let candidate = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_layout_path(),
        };

        if let Some(path) = candidate.filter(|p| p.exists()) {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let layout = Self::from_toml(&content)?;
            debug!("Loaded statement layout from {}", path.display());
            return Ok((layout, LayoutSource::File(path)));
        }

        Ok((Self::embedded()?, LayoutSource::Embedded))
    }
}

/// Default layout override path
pub fn default_layout_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("sift").join("layout.toml"))
}
