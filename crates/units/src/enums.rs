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

//! Enumerations for denomination units and amount formatting options.

use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::correctness::checked_unit_code;

/// The raw integer code of a [`Unit`], as persisted in wallet settings and selector roles.
///
/// Codes outside the known range are representable but denote an invalid unit.
pub type UnitCode = i32;

/// A denomination unit of XYC.
///
/// Variants are ordered from the base unit to the largest multiple, and their discriminants are
/// the stable [`UnitCode`] values.
#[repr(i32)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    IntoStaticStr,
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Unit {
    /// The base unit, XYC.
    #[default]
    #[strum(to_string = "XYC", serialize = "base")]
    Base = 0,
    /// One thousand XYC.
    #[strum(to_string = "KXYC", serialize = "kilo")]
    Kilo = 1,
    /// One million XYC.
    #[strum(to_string = "MXYC", serialize = "mega")]
    Mega = 2,
    /// One billion XYC.
    #[strum(to_string = "GXYC", serialize = "giga")]
    Giga = 3,
    /// One trillion XYC.
    #[strum(to_string = "TXYC", serialize = "tera")]
    Tera = 4,
    /// One quadrillion XYC.
    #[strum(to_string = "PXYC", serialize = "peta")]
    Peta = 5,
}

impl Unit {
    /// All units in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Base,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
    ];

    /// Returns the raw [`UnitCode`] for this unit.
    #[must_use]
    pub const fn code(self) -> UnitCode {
        self as UnitCode
    }

    /// Returns the ticker of this unit (e.g. "KXYC").
    #[must_use]
    pub fn ticker(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<UnitCode> for Unit {
    type Error = anyhow::Error;

    fn try_from(code: UnitCode) -> anyhow::Result<Self> {
        Self::from_repr(code).ok_or_else(|| anyhow::anyhow!("Unknown unit code: {code}"))
    }
}

impl From<Unit> for UnitCode {
    fn from(unit: Unit) -> Self {
        unit.code()
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.ticker())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UnitVisitor)
    }
}

/// Accepts either a ticker/name string or a raw integer [`UnitCode`].
struct UnitVisitor;

impl Visitor<'_> for UnitVisitor {
    type Value = Unit;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a unit ticker, unit name, or unit code")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Unit::from_str(v).map_err(|_| E::custom(format!("Unknown unit: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        let code = checked_unit_code(v, "unit").map_err(E::custom)?;
        Unit::try_from(code).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let v = i64::try_from(v).map_err(E::custom)?;
        self.visit_i64(v)
    }
}

/// Controls when thin-space digit grouping separators are inserted into the integer part of a
/// formatted amount.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SeparatorStyle {
    /// Never group digits.
    Never,
    /// Group digits only when the integer part has more than four digits.
    #[default]
    Standard,
    /// Always group digits.
    Always,
}

impl SeparatorStyle {
    /// Returns `true` if an integer part of `num_digits` digits should be grouped.
    #[must_use]
    pub const fn groups(self, num_digits: usize) -> bool {
        match self {
            Self::Never => false,
            Self::Standard => num_digits > 4,
            Self::Always => true,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[rstest]
    fn test_unit_order_matches_codes() {
        let codes: Vec<UnitCode> = Unit::iter().map(Unit::code).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(Unit::iter().collect::<Vec<_>>(), Unit::ALL.to_vec());
        assert_eq!(Unit::COUNT, Unit::ALL.len());
    }

    #[rstest]
    #[case(0, Some(Unit::Base))]
    #[case(3, Some(Unit::Giga))]
    #[case(5, Some(Unit::Peta))]
    #[case(6, None)]
    #[case(-1, None)]
    #[case(999, None)]
    fn test_unit_from_repr(#[case] code: UnitCode, #[case] expected: Option<Unit>) {
        assert_eq!(Unit::from_repr(code), expected);
    }

    #[rstest]
    fn test_unit_try_from_invalid_code() {
        let err = Unit::try_from(999).unwrap_err();
        assert_eq!(err.to_string(), "Unknown unit code: 999");
    }

    #[rstest]
    #[case("XYC", Unit::Base)]
    #[case("xyc", Unit::Base)]
    #[case("base", Unit::Base)]
    #[case("KXYC", Unit::Kilo)]
    #[case("Kilo", Unit::Kilo)]
    #[case("mxyc", Unit::Mega)]
    #[case("GXYC", Unit::Giga)]
    #[case("TERA", Unit::Tera)]
    #[case("pxyc", Unit::Peta)]
    fn test_unit_from_str(#[case] input: &str, #[case] expected: Unit) {
        assert_eq!(Unit::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_unit_from_str_unknown() {
        assert!(Unit::from_str("BTC").is_err());
        assert!(Unit::from_str("").is_err());
    }

    #[rstest]
    fn test_unit_display_is_ticker() {
        for unit in Unit::iter() {
            assert_eq!(unit.to_string(), unit.ticker());
            assert_eq!(unit.as_ref(), unit.ticker());
        }
    }

    #[rstest]
    fn test_unit_serde_roundtrip() {
        let json = serde_json::to_string(&Unit::Mega).unwrap();
        assert_eq!(json, "\"MXYC\"");
        let unit: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, Unit::Mega);
    }

    #[rstest]
    #[case("\"kilo\"", Unit::Kilo)]
    #[case("4", Unit::Tera)]
    #[case("0", Unit::Base)]
    fn test_unit_deserialize_name_or_code(#[case] json: &str, #[case] expected: Unit) {
        let unit: Unit = serde_json::from_str(json).unwrap();
        assert_eq!(unit, expected);
    }

    #[rstest]
    #[case("\"BTC\"")]
    #[case("6")]
    #[case("-1")]
    #[case("true")]
    fn test_unit_deserialize_invalid(#[case] json: &str) {
        assert!(serde_json::from_str::<Unit>(json).is_err());
    }

    #[rstest]
    #[case(SeparatorStyle::Never, 0, false)]
    #[case(SeparatorStyle::Never, 10, false)]
    #[case(SeparatorStyle::Standard, 4, false)]
    #[case(SeparatorStyle::Standard, 5, true)]
    #[case(SeparatorStyle::Always, 1, true)]
    #[case(SeparatorStyle::Always, 4, true)]
    fn test_separator_style_groups(
        #[case] style: SeparatorStyle,
        #[case] num_digits: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(style.groups(num_digits), expected);
    }

    #[rstest]
    #[case("never", SeparatorStyle::Never)]
    #[case("STANDARD", SeparatorStyle::Standard)]
    #[case("Always", SeparatorStyle::Always)]
    fn test_separator_style_from_str(#[case] input: &str, #[case] expected: SeparatorStyle) {
        assert_eq!(SeparatorStyle::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_separator_style_default_and_display() {
        assert_eq!(SeparatorStyle::default(), SeparatorStyle::Standard);
        assert_eq!(SeparatorStyle::Always.to_string(), "always");
        assert_eq!(
            serde_json::to_string(&SeparatorStyle::Never).unwrap(),
            "\"never\""
        );
    }
}
