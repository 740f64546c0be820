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

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]

mod commands;
pub mod opt;

use std::io::Write;

use yama_units::AmountDisplayConfig;

use crate::{
    commands::{run_format_command, run_parse_command, run_units_command},
    opt::{Commands, YamaCli},
};

/// Runs the command selected by `opt`, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if the display config cannot be loaded, the command fails, or writing to
/// `out` fails.
pub fn run<W: Write>(opt: YamaCli, out: &mut W) -> anyhow::Result<()> {
    let config = match &opt.config {
        Some(path) => AmountDisplayConfig::from_file(path)?,
        None => AmountDisplayConfig::default(),
    };
    log::debug!("Using {config:?}");

    match opt.command {
        Commands::Units => run_units_command(config, out)?,
        Commands::Format(format_opt) => run_format_command(&format_opt, config, out)?,
        Commands::Parse(parse_opt) => run_parse_command(&parse_opt, config, out)?,
    }
    Ok(())
}

/// Reports a failed command through the logger, or on `err` when error logging is disabled.
pub fn report_error<W: Write>(e: &anyhow::Error, err: &mut W) {
    if log::log_enabled!(log::Level::Error) {
        log::error!("Error executing yama CLI: {e}");
    } else {
        let _ = writeln!(err, "Error executing yama CLI: {e}");
    }
}
