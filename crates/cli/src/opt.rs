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

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::LevelFilter;
use yama_units::{
    Amount, AmountDisplayConfig, SeparatorStyle, Unit, correctness::checked_unit_code,
};

/// Main CLI structure for parsing command-line arguments and options.
///
/// This is the entry point for the XYC units command-line interface, providing
/// amount formatting and parsing in any denomination unit.
#[derive(Debug, Parser)]
#[clap(version, about, author)]
pub struct YamaCli {
    /// Maximum log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, env = "YAMA_LOG_LEVEL", default_value = "warn")]
    pub log_level: LevelFilter,
    /// Display config file (`.json` or `.toml`) providing defaults for unit and separators.
    #[arg(long, global = true, env = "YAMA_DISPLAY_CONFIG")]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available top-level commands for the XYC units CLI.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Lists the available denomination units.
    Units,
    /// Formats a raw amount (in smallest units) as a decimal string.
    Format(FormatOpt),
    /// Parses a decimal string into a raw amount (in smallest units).
    Parse(ParseOpt),
}

/// Display options overriding the display config.
#[derive(Parser, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Unit ticker, name or code (e.g. KXYC, kilo, 1).
    #[arg(long, value_parser = parse_unit_arg)]
    pub unit: Option<Unit>,
    /// Digit grouping style (never, standard, always).
    #[arg(long)]
    pub separators: Option<SeparatorStyle>,
    /// Prefix positive amounts with `+`.
    #[arg(long)]
    pub plus: bool,
}

impl DisplayArgs {
    /// Applies these options on top of `config`.
    #[must_use]
    pub fn apply(&self, config: AmountDisplayConfig) -> AmountDisplayConfig {
        AmountDisplayConfig {
            unit: self.unit.unwrap_or(config.unit),
            separators: self.separators.unwrap_or(config.separators),
            plus_sign: self.plus || config.plus_sign,
        }
    }
}

/// Options for the `format` command.
#[derive(Parser, Debug, Clone)]
#[command(about = "Formats a raw amount", long_about = None)]
pub struct FormatOpt {
    /// The raw amount in smallest units.
    #[arg(allow_hyphen_values = true)]
    pub amount: Amount,
    #[clap(flatten)]
    pub display: DisplayArgs,
    /// Append the short unit name.
    #[arg(long)]
    pub with_unit: bool,
    /// Emit a non-wrapping HTML fragment (implies `--with-unit`).
    #[arg(long)]
    pub html: bool,
}

/// Options for the `parse` command.
#[derive(Parser, Debug, Clone)]
#[command(about = "Parses a decimal amount string", long_about = None)]
pub struct ParseOpt {
    /// The decimal amount text (spaces and thin spaces are ignored).
    #[arg(allow_hyphen_values = true)]
    pub text: String,
    /// Unit ticker, name or code (e.g. KXYC, kilo, 1).
    #[arg(long, value_parser = parse_unit_arg)]
    pub unit: Option<Unit>,
}

/// Parses a unit argument given as a ticker, a name or a raw unit code.
///
/// # Errors
///
/// Returns an error if `s` does not identify a known unit.
pub fn parse_unit_arg(s: &str) -> anyhow::Result<Unit> {
    if let Ok(code) = s.parse::<i64>() {
        return Unit::try_from(checked_unit_code(code, "unit")?);
    }
    Unit::from_str(s).map_err(|_| anyhow::anyhow!("Unknown unit: {s}"))
}
