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

use std::io::Write;

use tabled::{Table, Tabled, settings::Style};
use yama_units::{Amount, AmountDisplayConfig, Unit, UnitCode, units};

use crate::opt::{FormatOpt, ParseOpt};

#[derive(Debug, Tabled)]
struct UnitRow {
    #[tabled(rename = "Code")]
    code: UnitCode,
    #[tabled(rename = "Ticker")]
    ticker: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Short name")]
    short_name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Factor")]
    factor: Amount,
    #[tabled(rename = "Decimals")]
    decimals: u8,
}

impl From<Unit> for UnitRow {
    fn from(unit: Unit) -> Self {
        Self {
            code: unit.code(),
            ticker: unit.ticker(),
            name: unit.long_name(),
            short_name: unit.short_name(),
            description: unit.description(),
            factor: unit.factor(),
            decimals: unit.decimals(),
        }
    }
}

pub fn run_units_command<W: Write>(config: AmountDisplayConfig, out: &mut W) -> anyhow::Result<()> {
    let rows: Vec<UnitRow> = units::available_units()
        .iter()
        .copied()
        .map(UnitRow::from)
        .collect();
    log::debug!("Listing {} units", rows.len());

    let mut table = Table::new(rows);
    table.with(Style::modern());
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "Selected: {}",
        units::amount_column_title(config.unit.code())
    )?;
    Ok(())
}

pub fn run_format_command<W: Write>(
    opt: &FormatOpt,
    config: AmountDisplayConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let config = opt.display.apply(config);
    log::info!("Formatting {} in {}", opt.amount, config.unit);

    if !yama_units::money_range(opt.amount) {
        log::warn!(
            "Amount {} is outside the valid money range [0, {}]",
            opt.amount,
            units::max_money()
        );
    }

    let text = if opt.html {
        config.format_html_with_unit(opt.amount)
    } else if opt.with_unit {
        config.format_with_unit(opt.amount)
    } else {
        config.format(opt.amount)
    };
    writeln!(out, "{text}")?;
    Ok(())
}

pub fn run_parse_command<W: Write>(
    opt: &ParseOpt,
    config: AmountDisplayConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let unit = opt.unit.unwrap_or(config.unit);
    log::info!("Parsing '{}' as {unit}", opt.text);

    let amount = unit
        .parse(&opt.text)
        .map_err(|e| anyhow::anyhow!("Failed to parse '{}' as {unit}: {e}", opt.text))?;
    writeln!(out, "{amount}")?;
    Ok(())
}
