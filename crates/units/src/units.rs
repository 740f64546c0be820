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

//! Unit functions over raw [`UnitCode`] values.
//!
//! Front ends persist and pass units around as integer codes, so every function here is total:
//! an unknown code never panics but yields a documented fallback instead.
//!
//! | Function      | Fallback for an invalid code |
//! |---------------|------------------------------|
//! | `long_name`   | `"???"`                      |
//! | `short_name`  | `"???"`                      |
//! | `description` | `"???"`                      |
//! | `factor`      | the base unit factor (100)   |
//! | `decimals`    | 0                            |
//! | `format*`     | the empty string             |
//! | `parse`       | `None`                       |

use crate::{
    amount::{self, Amount},
    enums::{SeparatorStyle, Unit, UnitCode},
    parse::ParseAmountError,
};

/// The text returned for names and descriptions of invalid units.
pub const UNKNOWN_UNIT_TEXT: &str = "???";

/// The base label of amount table columns.
pub const AMOUNT_COLUMN_TITLE: &str = "Amount";

/// Returns `true` if `unit` is one of the known unit codes.
#[must_use]
pub fn valid(unit: UnitCode) -> bool {
    Unit::from_repr(unit).is_some()
}

/// Returns all units in display order (base unit first).
#[must_use]
pub fn available_units() -> &'static [Unit] {
    &Unit::ALL
}

/// Returns the full display name of `unit`.
#[must_use]
pub fn long_name(unit: UnitCode) -> &'static str {
    Unit::from_repr(unit).map_or(UNKNOWN_UNIT_TEXT, Unit::long_name)
}

/// Returns the abbreviated display name of `unit`.
#[must_use]
pub fn short_name(unit: UnitCode) -> &'static str {
    Unit::from_repr(unit).map_or(UNKNOWN_UNIT_TEXT, Unit::short_name)
}

/// Returns the description of `unit`.
#[must_use]
pub fn description(unit: UnitCode) -> &'static str {
    Unit::from_repr(unit).map_or(UNKNOWN_UNIT_TEXT, Unit::description)
}

/// Returns the number of smallest units per displayed `unit`.
#[must_use]
pub fn factor(unit: UnitCode) -> Amount {
    Unit::from_repr(unit).unwrap_or(Unit::Base).factor()
}

/// Returns the number of fractional digits displayed for `unit`.
#[must_use]
pub fn decimals(unit: UnitCode) -> u8 {
    Unit::from_repr(unit).map_or(0, Unit::decimals)
}

/// Formats `amount` in `unit`, or returns an empty string if `unit` is invalid.
#[must_use]
pub fn format(
    unit: UnitCode,
    amount: Amount,
    plus_sign: bool,
    separators: SeparatorStyle,
) -> String {
    Unit::from_repr(unit)
        .map(|unit| unit.format(amount, plus_sign, separators))
        .unwrap_or_default()
}

/// Formats `amount` in `unit` followed by the short unit name, or returns an empty string if
/// `unit` is invalid.
#[must_use]
pub fn format_with_unit(
    unit: UnitCode,
    amount: Amount,
    plus_sign: bool,
    separators: SeparatorStyle,
) -> String {
    Unit::from_repr(unit)
        .map(|unit| unit.format_with_unit(amount, plus_sign, separators))
        .unwrap_or_default()
}

/// Formats `amount` in `unit` as a non-wrapping HTML fragment, or returns an empty string if
/// `unit` is invalid.
#[must_use]
pub fn format_html_with_unit(
    unit: UnitCode,
    amount: Amount,
    plus_sign: bool,
    separators: SeparatorStyle,
) -> String {
    Unit::from_repr(unit)
        .map(|unit| unit.format_html_with_unit(amount, plus_sign, separators))
        .unwrap_or_default()
}

/// Parses `text` as an amount in `unit`, returning `None` on any failure.
#[must_use]
pub fn parse(unit: UnitCode, text: &str) -> Option<Amount> {
    parse_checked(unit, text).ok()
}

/// Parses `text` as an amount in `unit`.
///
/// # Errors
///
/// Returns [`ParseAmountError::InvalidUnit`] if `unit` is invalid, otherwise any error of
/// [`crate::parse::parse_amount`].
pub fn parse_checked(unit: UnitCode, text: &str) -> Result<Amount, ParseAmountError> {
    let unit = Unit::from_repr(unit).ok_or(ParseAmountError::InvalidUnit(unit))?;
    unit.parse(text)
}

/// Returns the title for an amount column, e.g. "Amount (K XYC)", or "Amount" if `unit` is
/// invalid.
#[must_use]
pub fn amount_column_title(unit: UnitCode) -> String {
    match Unit::from_repr(unit) {
        Some(unit) => format!("{AMOUNT_COLUMN_TITLE} ({})", unit.short_name()),
        None => AMOUNT_COLUMN_TITLE.to_string(),
    }
}

/// Returns the protocol maximum amount.
#[must_use]
pub const fn max_money() -> Amount {
    amount::max_money()
}
