// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration of how amounts are displayed by wallet front ends.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    amount::Amount,
    correctness::check_nonempty_string,
    enums::{SeparatorStyle, Unit},
    parse::ParseAmountError,
};

/// Configuration for amount display and entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmountDisplayConfig {
    /// The unit amounts are displayed and entered in (default base unit).
    /// Accepts a ticker ("KXYC"), a name ("kilo") or a raw unit code (1).
    #[serde(default)]
    pub unit: Unit,
    /// When thin-space digit grouping is applied (default `standard`).
    #[serde(default)]
    pub separators: SeparatorStyle,
    /// If positive amounts are prefixed with `+`.
    #[serde(default)]
    pub plus_sign: bool,
}

impl AmountDisplayConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse display config JSON: {e}"))
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if `toml` is not a valid configuration.
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        toml::from_str(toml)
            .map_err(|e| anyhow::anyhow!("Failed to parse display config TOML: {e}"))
    }

    /// Loads a configuration from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` is empty or has an unsupported extension.
    /// - The file cannot be read.
    /// - The file contents are not a valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        check_nonempty_string(path.as_os_str().to_string_lossy(), "path")?;

        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read display config {}: {e}", path.display()))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(&contents)?,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml(&contents)?,
            other => anyhow::bail!(
                "Unsupported display config extension {other:?} for {}, expected `json` or `toml`",
                path.display()
            ),
        };

        log::debug!("Loaded {config:?} from {}", path.display());
        Ok(config)
    }

    /// Serializes this configuration to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize display config: {e}"))
    }

    /// Formats `amount` with the configured unit, sign and separators.
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        self.unit.format(amount, self.plus_sign, self.separators)
    }

    /// Formats `amount` followed by the configured unit's short name.
    #[must_use]
    pub fn format_with_unit(&self, amount: Amount) -> String {
        self.unit
            .format_with_unit(amount, self.plus_sign, self.separators)
    }

    /// Formats `amount` as a non-wrapping HTML fragment.
    #[must_use]
    pub fn format_html_with_unit(&self, amount: Amount) -> String {
        self.unit
            .format_html_with_unit(amount, self.plus_sign, self.separators)
    }

    /// Parses `text` as an amount in the configured unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a valid amount in the configured unit.
    pub fn parse(&self, text: &str) -> Result<Amount, ParseAmountError> {
        self.unit.parse(text)
    }
}
