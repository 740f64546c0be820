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

//! Type stubs to facilitate testing.

use rstest::fixture;

use crate::{
    config::AmountDisplayConfig,
    enums::{SeparatorStyle, Unit, UnitCode},
};

#[fixture]
pub fn base_code() -> UnitCode {
    Unit::Base.code()
}

#[fixture]
pub fn invalid_unit_code() -> UnitCode {
    999
}

#[fixture]
pub fn kilo_display_config() -> AmountDisplayConfig {
    AmountDisplayConfig {
        unit: Unit::Kilo,
        separators: SeparatorStyle::Always,
        plus_sign: true,
    }
}
