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

//! Strict parsing of decimal amount strings into raw amounts.

use crate::{
    amount::Amount,
    enums::{Unit, UnitCode},
    format::remove_spaces,
};

/// The maximum number of characters in the combined digit string.
///
/// Longer numbers can exceed 63 bits.
pub const MAX_AMOUNT_DIGITS: usize = 18;

/// Reasons an amount string is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The raw unit code does not identify a known unit.
    #[error("Invalid unit code {0}")]
    InvalidUnit(UnitCode),
    /// The input string is empty.
    #[error("Empty amount string")]
    Empty,
    /// The input contains more than one decimal point.
    #[error("More than one decimal point in '{0}'")]
    MultipleDecimalPoints(String),
    /// The fractional part is more precise than the unit displays.
    #[error("Fractional part has {found} digits, exceeding the {max} decimals of {unit}")]
    ExcessPrecision {
        /// Number of fractional digits found.
        found: usize,
        /// Number of decimals of the unit.
        max: u8,
        /// The unit being parsed.
        unit: Unit,
    },
    /// The combined digit string is too long to be guaranteed to fit 63 bits.
    #[error("Combined digit string has {0} characters, exceeding {max}", max = MAX_AMOUNT_DIGITS)]
    TooManyDigits(usize),
    /// The combined digit string is not a valid `i64`.
    #[error("Invalid amount '{0}'")]
    InvalidNumber(String),
}

/// Parses `text` as an amount denominated in `unit`, returning the raw amount in smallest units.
///
/// Spaces and thin spaces are ignored, nothing else is: grouping commas, tabs and other
/// characters make the parse fail. The fractional part is right-padded with zeros to the unit's
/// number of decimals and joined to the whole part, and the joined digits are read as an `i64`
/// (the sign, if any, leads the whole part).
///
/// # Errors
///
/// Returns an error if:
/// - `text` is empty.
/// - `text` contains more than one `.`.
/// - The fractional part has more digits than `unit` displays.
/// - The joined digit string is longer than [`MAX_AMOUNT_DIGITS`].
/// - The joined digit string is not a valid `i64`.
pub fn parse_amount(unit: Unit, text: &str) -> Result<Amount, ParseAmountError> {
    if text.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    let num_decimals = usize::from(unit.decimals());

    let cleaned = remove_spaces(text);
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.contains('.') {
                return Err(ParseAmountError::MultipleDecimalPoints(text.to_string()));
            }
            (whole, fraction)
        }
        None => (cleaned.as_str(), ""),
    };

    let fraction_len = fraction.chars().count();
    if fraction_len > num_decimals {
        return Err(ParseAmountError::ExcessPrecision {
            found: fraction_len,
            max: unit.decimals(),
            unit,
        });
    }

    let digits = format!("{whole}{fraction:0<num_decimals$}");
    let num_chars = digits.chars().count();
    if num_chars > MAX_AMOUNT_DIGITS {
        return Err(ParseAmountError::TooManyDigits(num_chars));
    }

    digits
        .parse::<Amount>()
        .map_err(|_| ParseAmountError::InvalidNumber(text.to_string()))
}
