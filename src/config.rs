// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ObfBridge-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of obf-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Export options.
//!
//! Options load from JSON; every field is optional and falls back to its default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::obf::{IdGenerator, MIN_RANDOM_DIGITS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("id_digits must be at least {}, got {0}", MIN_RANDOM_DIGITS)]
    IdDigitsTooSmall(usize),
}

/// How archive entries are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Stored,
    #[default]
    Deflated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ObfOptions {
    /// Random digits per generated identifier.
    pub id_digits: usize,
    pub compression: Compression,
    /// Indent JSON entries written into archives.
    pub pretty_json: bool,
}

impl Default for ObfOptions {
    fn default() -> Self {
        Self {
            id_digits: MIN_RANDOM_DIGITS,
            compression: Compression::default(),
            pretty_json: false,
        }
    }
}

impl ObfOptions {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_digits < MIN_RANDOM_DIGITS {
            return Err(ConfigError::IdDigitsTooSmall(self.id_digits));
        }
        Ok(())
    }

    /// Values below [`MIN_RANDOM_DIGITS`] are raised to it.
    pub fn with_id_digits(mut self, id_digits: usize) -> Self {
        self.id_digits = id_digits.max(MIN_RANDOM_DIGITS);
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    /// An entropy-seeded generator using the configured digit count.
    pub fn id_generator(&self) -> IdGenerator {
        IdGenerator::new().with_digits(self.id_digits)
    }
}

pub fn options_schema() -> schemars::Schema {
    schemars::schema_for!(ObfOptions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let options = ObfOptions::from_json_str("{}").unwrap();
        assert_eq!(options, ObfOptions::default());
        assert_eq!(options.compression, Compression::Deflated);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let options =
            ObfOptions::from_json_str(r#"{ "compression": "stored", "pretty_json": true }"#)
                .unwrap();

        assert_eq!(options.compression, Compression::Stored);
        assert!(options.pretty_json);
        assert_eq!(options.id_digits, MIN_RANDOM_DIGITS);
    }

    #[test]
    fn too_few_id_digits_are_rejected() {
        let err = ObfOptions::from_json_str(r#"{ "id_digits": 4 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::IdDigitsTooSmall(4)));
    }

    #[test]
    fn unknown_fields_and_bad_values_are_json_errors() {
        assert!(matches!(
            ObfOptions::from_json_str(r#"{ "colour": "red" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ObfOptions::from_json_str(r#"{ "compression": "bzip2" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn builders_clamp_and_feed_the_generator() {
        let options = ObfOptions::default()
            .with_id_digits(3)
            .with_compression(Compression::Stored)
            .with_pretty_json(true);
        assert_eq!(options.id_digits, MIN_RANDOM_DIGITS);

        let options = options.with_id_digits(24);
        assert_eq!(options.id_generator().digits(), 24);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn schema_lists_every_option() {
        let schema = serde_json::to_value(options_schema()).unwrap();
        let properties = schema["properties"].as_object().expect("properties");
        for field in ["id_digits", "compression", "pretty_json"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
