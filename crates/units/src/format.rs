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

//! Locale-independent fixed-point formatting of amounts.
//!
//! Digits of the integer part are grouped with SI-style thin spaces, which are locale independent
//! and cannot be confused with the decimal marker.

use crate::{
    amount::Amount,
    enums::{SeparatorStyle, Unit},
};

/// The thin space character (U+2009) used as the digit grouping separator.
pub const THIN_SP: char = '\u{2009}';

/// The thin space as a UTF-8 string.
pub const THIN_SP_UTF8: &str = "\u{2009}";

/// The HTML entity for a thin space.
pub const THIN_SP_HTML: &str = "&thinsp;";

/// Formats `amount` (in smallest units) as a decimal string in the given `unit`.
///
/// The integer part carries no leading zeros and the fractional part is always zero-padded to
/// the unit's number of decimals. A `-` is prefixed for negative amounts, or a `+` for positive
/// amounts when `plus_sign` is set. Zero never carries a sign.
#[must_use]
pub fn format_amount(
    unit: Unit,
    amount: Amount,
    plus_sign: bool,
    separators: SeparatorStyle,
) -> String {
    // Unsigned so that `Amount::MIN` has a magnitude
    let coin = unit.factor().unsigned_abs();
    let n_abs = amount.unsigned_abs();
    let quotient = n_abs / coin;
    let remainder = n_abs % coin;

    let mut quotient_str = quotient.to_string();
    if separators.groups(quotient_str.len()) {
        quotient_str = group_digits(&quotient_str);
    }

    let sign = if amount < 0 {
        "-"
    } else if plus_sign && amount > 0 {
        "+"
    } else {
        ""
    };

    let width = usize::from(unit.decimals());
    format!("{sign}{quotient_str}.{remainder:0width$}")
}

/// Formats `amount` followed by a space and the short name of `unit`.
///
/// Avoid this in HTML contexts: rendered text may wrap at the grouping separator, and
/// whitespace canonicalization can turn the thin space into a regular one. Use
/// [`format_amount_html_with_unit`] instead.
#[must_use]
pub fn format_amount_with_unit(
    unit: Unit,
    amount: Amount,
    plus_sign: bool,
    separators: SeparatorStyle,
) -> String {
    format!(
        "{} {}",
        format_amount(unit, amount, plus_sign, separators),
        unit.short_name()
    )
}

/// Formats `amount` with the unit name as a non-wrapping HTML fragment, with thin spaces
/// written as the [`THIN_SP_HTML`] entity.
#[must_use]
pub fn format_amount_html_with_unit(
    unit: Unit,
    amount: Amount,
    plus_sign: bool,
    separators: SeparatorStyle,
) -> String {
    let text = format_amount_with_unit(unit, amount, plus_sign, separators)
        .replace(THIN_SP, THIN_SP_HTML);
    format!("<span style='white-space: nowrap;'>{text}</span>")
}

/// Inserts a thin space every three digits counting from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + (len / 3) * THIN_SP.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THIN_SP);
        }
        grouped.push(ch);
    }
    grouped
}

/// Removes every space and thin space from `text`.
#[must_use]
pub fn remove_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ' && c != THIN_SP).collect()
}
