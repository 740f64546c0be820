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

//! Denomination units for the XYC wallet.
//!
//! The `yama-units` crate defines the fixed set of XYC denomination units (the base unit and its
//! SI-style multiples) and converts between raw integer amounts, stored in the smallest
//! indivisible unit, and human-readable decimal strings:
//!
//! - The unit table: factors, display decimals, long and short names, descriptions.
//! - Locale-independent amount formatting with thin-space digit grouping (plain and HTML-safe).
//! - Strict amount parsing which rejects anything that could overflow 63 bits.
//! - A serde display configuration for wallet front ends.
//!
//! Every operation is a pure function over constant data, so all types are `Send + Sync` and
//! may be used from any thread without synchronization.
//!
//! # Feature flags
//!
//! - `stubs`: Enables `rstest` fixtures for use in downstream test suites.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod amount;
pub mod config;
pub mod correctness;
pub mod enums;
pub mod format;
pub mod parse;
pub mod unit;
pub mod units;

#[cfg(any(test, feature = "stubs"))]
#[allow(missing_docs, missing_debug_implementations)]
pub mod stubs;

// Re-exports
pub use crate::{
    amount::{Amount, COIN, MAX_MONEY, money_range},
    config::AmountDisplayConfig,
    enums::{SeparatorStyle, Unit, UnitCode},
    parse::ParseAmountError,
};
