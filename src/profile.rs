use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Account classification selecting which tax-rate policy applies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Classification {
    Individual,
    Business,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Individual => "individual",
            Classification::Business => "business",
        }
    }
}

/// Account profile supplying the classification for tax estimates
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    #[serde(rename = "user_type")]
    pub classification: Classification,
    pub full_name: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("full name is required")]
    MissingFullName,
    #[error("business name is required for business accounts")]
    MissingBusinessName,
}

impl Profile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.full_name.trim().is_empty() {
            return Err(ProfileError::MissingFullName);
        }
        if self.classification == Classification::Business
            && self
                .business_name
                .as_deref()
                .is_none_or(|name| name.trim().is_empty())
        {
            return Err(ProfileError::MissingBusinessName);
        }
        Ok(())
    }

    /// Business name when present, otherwise the account holder's name
    pub fn display_name(&self) -> &str {
        self.business_name.as_deref().unwrap_or(&self.full_name)
    }

    /// Load and validate a JSON profile file
    pub fn load(path: &Path) -> anyhow::Result<Profile> {
        let file = File::open(path)
            .with_context(|| format!("failed to open profile {}", path.display()))?;
        let profile: Profile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse profile {}", path.display()))?;
        profile.validate()?;
        Ok(profile)
    }
}
