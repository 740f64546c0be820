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

//! Raw amounts denominated in the smallest indivisible unit.

/// A quantity of XYC in the smallest indivisible unit.
pub type Amount = i64;

/// The number of smallest units in one whole XYC.
pub const COIN: Amount = 100;

/// The maximum amount of money the protocol considers valid.
///
/// Chosen so that the largest valid amount formats, in the base unit, to a digit string which
/// still fits the 18 digit parsing limit.
pub const MAX_MONEY: Amount = 9_000_000_000_000_000 * COIN;

/// Returns the protocol maximum amount, see [`MAX_MONEY`].
#[must_use]
pub const fn max_money() -> Amount {
    MAX_MONEY
}

/// Returns `true` if `amount` lies within the valid money range `[0, MAX_MONEY]`.
#[must_use]
pub const fn money_range(amount: Amount) -> bool {
    amount >= 0 && amount <= MAX_MONEY
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_max_money() {
        assert_eq!(max_money(), 900_000_000_000_000_000);
        assert_eq!(max_money() / COIN, 9_000_000_000_000_000);
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, true)]
    #[case(MAX_MONEY, true)]
    #[case(MAX_MONEY + 1, false)]
    #[case(-1, false)]
    #[case(Amount::MIN, false)]
    #[case(Amount::MAX, false)]
    fn test_money_range(#[case] amount: Amount, #[case] expected: bool) {
        assert_eq!(money_range(amount), expected);
    }
}
