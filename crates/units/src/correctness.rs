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

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! An [`anyhow::Result`] is returned with a descriptive message when the
//! condition check fails.

use crate::enums::{Unit, UnitCode};

/// Checks the string `s` is not empty.
///
/// # Errors
///
/// Returns an error if `s` is empty.
#[inline(always)]
pub fn check_nonempty_string<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    if s.as_ref().is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }
    Ok(())
}

/// Checks the `i64` value is in range [`l`, `r`] (inclusive).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_in_range_inclusive_i64(value: i64, l: i64, r: i64, param: &str) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("invalid i64 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

/// Checks the raw `code` identifies one of the known denomination units.
///
/// # Errors
///
/// Returns an error if `code` is not a valid [`Unit`] code.
#[inline(always)]
pub fn check_valid_unit_code(code: i64, param: &str) -> anyhow::Result<()> {
    let first = Unit::ALL[0].code();
    let last = Unit::ALL[Unit::ALL.len() - 1].code();
    check_in_range_inclusive_i64(code, i64::from(first), i64::from(last), param)
}

/// Converts a checked raw `code` into a [`UnitCode`].
///
/// # Errors
///
/// Returns an error if `code` is not a valid [`Unit`] code.
pub fn checked_unit_code(code: i64, param: &str) -> anyhow::Result<UnitCode> {
    check_valid_unit_code(code, param)?;
    UnitCode::try_from(code).map_err(|e| anyhow::anyhow!("invalid unit code for '{param}': {e}"))
}
