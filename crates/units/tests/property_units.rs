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

//! Property-based tests for amount formatting and parsing.
//!
//! These tests verify invariants that should hold for every unit and amount:
//! - Parsing a formatted amount yields the original amount whenever the digit string fits
//! - Digit strings longer than 18 characters are always rejected
//! - Thin-space grouping never changes the parsed value
//! - Sign prefixes follow the amount's sign

use proptest::prelude::*;
use rstest::rstest;
use yama_units::{
    Amount, SeparatorStyle, Unit,
    format::THIN_SP,
    parse::MAX_AMOUNT_DIGITS,
    units::{self, parse},
};

fn unit_strategy() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.to_vec())
}

fn separator_strategy() -> impl Strategy<Value = SeparatorStyle> {
    prop_oneof![
        Just(SeparatorStyle::Never),
        Just(SeparatorStyle::Standard),
        Just(SeparatorStyle::Always),
    ]
}

fn amount_strategy() -> impl Strategy<Value = Amount> {
    prop_oneof![
        // Small amounts
        -100_000i64..100_000i64,
        // Typical wallet balances
        -10_000_000_000_000i64..10_000_000_000_000i64,
        // Anything, including the extremes
        any::<i64>(),
        Just(0),
        Just(Amount::MAX),
        Just(Amount::MIN),
        Just(yama_units::MAX_MONEY),
    ]
}

/// Returns the number of characters the parser joins for a formatted amount.
fn joined_len(formatted: &str) -> usize {
    formatted.chars().filter(|&c| c != '.' && c != THIN_SP).count()
}

proptest! {
    /// Property: formatting then parsing returns the original amount when the joined digit
    /// string fits, and is rejected otherwise.
    #[rstest]
    fn prop_format_parse_roundtrip(
        unit in unit_strategy(),
        amount in amount_strategy(),
    ) {
        let formatted = units::format(unit.code(), amount, false, SeparatorStyle::Never);
        let parsed = parse(unit.code(), &formatted);

        if joined_len(&formatted) <= MAX_AMOUNT_DIGITS {
            prop_assert_eq!(parsed, Some(amount), "formatted as '{}'", formatted);
        } else {
            prop_assert_eq!(parsed, None, "formatted as '{}'", formatted);
        }
    }

    /// Property: grouping separators do not change the parsed value.
    #[rstest]
    fn prop_separators_do_not_change_value(
        unit in unit_strategy(),
        amount in amount_strategy(),
        separators in separator_strategy(),
    ) {
        let plain = unit.format(amount, false, SeparatorStyle::Never);
        let grouped = unit.format(amount, false, separators);

        prop_assert_eq!(plain.clone(), grouped.replace(THIN_SP, ""));
        prop_assert_eq!(unit.parse(&plain).ok(), unit.parse(&grouped).ok());
    }

    /// Property: the plus sign only appears on positive amounts, the minus sign only on
    /// negative amounts, and never both.
    #[rstest]
    fn prop_sign_prefix(
        unit in unit_strategy(),
        amount in amount_strategy(),
        plus_sign in any::<bool>(),
    ) {
        let formatted = unit.format(amount, plus_sign, SeparatorStyle::Standard);

        prop_assert_eq!(formatted.starts_with('-'), amount < 0);
        prop_assert_eq!(formatted.starts_with('+'), plus_sign && amount > 0);
        prop_assert!(!formatted.contains("+-") && !formatted.contains("-+"));
    }

    /// Property: the fractional part always has exactly the unit's number of decimals.
    #[rstest]
    fn prop_fraction_width(
        unit in unit_strategy(),
        amount in amount_strategy(),
        separators in separator_strategy(),
    ) {
        let formatted = unit.format(amount, false, separators);
        let (_, fraction) = formatted.split_once('.').expect("always has a decimal point");

        prop_assert_eq!(fraction.len(), usize::from(unit.decimals()));
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    /// Property: invalid unit codes are rejected by every operation.
    #[rstest]
    fn prop_invalid_units_rejected(
        code in prop_oneof![i32::MIN..0i32, 6i32..i32::MAX],
        amount in amount_strategy(),
    ) {
        prop_assert!(!units::valid(code));
        prop_assert_eq!(units::format(code, amount, true, SeparatorStyle::Always), "");
        prop_assert_eq!(parse(code, "1.00"), None);
    }
}

#[rstest]
#[case(Unit::Base, "9999999999999999.99", Some(999_999_999_999_999_999))]
#[case(Unit::Base, "99999999999999999.99", None)]
#[case(Unit::Kilo, "9999999999999.99999", Some(999_999_999_999_999_999))]
#[case(Unit::Kilo, "99999999999999.99999", None)]
#[case(Unit::Peta, "9.99999999999999999", Some(999_999_999_999_999_999))]
#[case(Unit::Peta, "-0.00000000000000001", None)]
fn test_boundary_digit_strings(
    #[case] unit: Unit,
    #[case] text: &str,
    #[case] expected: Option<Amount>,
) {
    assert_eq!(parse(unit.code(), text), expected);
}

#[rstest]
fn test_documented_examples() {
    let base = Unit::Base.code();
    assert_eq!(
        units::format(base, 100_000_000, false, SeparatorStyle::Standard),
        format!("1{THIN_SP}000{THIN_SP}000.00")
    );
    assert_eq!(units::format(base, -50, false, SeparatorStyle::Never), "-0.50");
    assert_eq!(parse(base, "1,234.56"), None);
    assert_eq!(parse(base, ""), None);
    assert_eq!(parse(999, "1.00"), None);
}
