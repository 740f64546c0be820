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

//! The static denomination table and the infallible per-unit accessors.

use crate::{
    amount::Amount,
    enums::{SeparatorStyle, Unit},
    format::{format_amount, format_amount_html_with_unit, format_amount_with_unit},
    parse::{ParseAmountError, parse_amount},
};

/// Static metadata for a single denomination unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitInfo {
    /// Smallest indivisible units per displayed unit.
    pub factor: Amount,
    /// Number of fractional digits rendered after scaling.
    pub decimals: u8,
    /// The full display name.
    pub long_name: &'static str,
    /// The abbreviated display name, `None` where the long name is already short.
    pub short_name: Option<&'static str>,
    /// A human-readable description (used for tooltips).
    pub description: &'static str,
}

/// The denomination table, indexed by [`Unit`] code.
pub static UNIT_TABLE: [UnitInfo; 6] = [
    UnitInfo {
        factor: 100,
        decimals: 2,
        long_name: "XYC",
        short_name: None,
        description: "yama_coins",
    },
    UnitInfo {
        factor: 100_000,
        decimals: 5,
        long_name: "Kilo XYC",
        short_name: Some("K XYC"),
        description: "Kilo-yama_coins",
    },
    UnitInfo {
        factor: 100_000_000,
        decimals: 8,
        long_name: "Mega XYC",
        short_name: Some("M XYC"),
        description: "Mega-yama_coins",
    },
    UnitInfo {
        factor: 100_000_000_000,
        decimals: 11,
        long_name: "Giga XYC",
        short_name: Some("G XYC"),
        description: "Giga-yama_coins",
    },
    UnitInfo {
        factor: 100_000_000_000_000,
        decimals: 14,
        long_name: "Tera XYC",
        short_name: Some("T XYC"),
        description: "Tera-yama_coins",
    },
    UnitInfo {
        factor: 100_000_000_000_000_000,
        decimals: 17,
        long_name: "Peta XYC",
        short_name: Some("P XYC"),
        description: "Peta-yama_coins",
    },
];

impl Unit {
    /// Returns the static metadata record for this unit.
    #[must_use]
    pub fn info(self) -> &'static UnitInfo {
        &UNIT_TABLE[self as usize]
    }

    /// Returns the number of smallest indivisible units per displayed unit.
    #[must_use]
    pub fn factor(self) -> Amount {
        self.info().factor
    }

    /// Returns the number of fractional digits to display.
    #[must_use]
    pub fn decimals(self) -> u8 {
        self.info().decimals
    }

    /// Returns the full display name (e.g. "Kilo XYC").
    #[must_use]
    pub fn long_name(self) -> &'static str {
        self.info().long_name
    }

    /// Returns the abbreviated display name (e.g. "K XYC").
    ///
    /// The base unit has no abbreviated form and returns its long name.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        let info = self.info();
        info.short_name.unwrap_or(info.long_name)
    }

    /// Returns the description (e.g. "Kilo-yama_coins").
    #[must_use]
    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// Formats `amount` in this unit, see [`format_amount`].
    #[must_use]
    pub fn format(self, amount: Amount, plus_sign: bool, separators: SeparatorStyle) -> String {
        format_amount(self, amount, plus_sign, separators)
    }

    /// Formats `amount` in this unit followed by the short unit name.
    #[must_use]
    pub fn format_with_unit(
        self,
        amount: Amount,
        plus_sign: bool,
        separators: SeparatorStyle,
    ) -> String {
        format_amount_with_unit(self, amount, plus_sign, separators)
    }

    /// Formats `amount` in this unit as a non-wrapping HTML fragment.
    #[must_use]
    pub fn format_html_with_unit(
        self,
        amount: Amount,
        plus_sign: bool,
        separators: SeparatorStyle,
    ) -> String {
        format_amount_html_with_unit(self, amount, plus_sign, separators)
    }

    /// Parses `text` as an amount denominated in this unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a valid amount in this unit, see [`parse_amount`].
    pub fn parse(self, text: &str) -> Result<Amount, ParseAmountError> {
        parse_amount(self, text)
    }
}
