// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use tracing::{info, warn};

use navdata::cli::{CifpCommand, Cli, Command, SaaCommand};
use navdata::{convert_cifp_file, convert_saa_directory, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match &cli.command {
        Command::Cifp(cmd) => cifp(cmd, cli.json),
        Command::Saa(cmd) => saa(cmd, cli.json),
    }
}

fn cifp(cmd: &CifpCommand, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = convert_cifp_file(&cmd.input, &cmd.output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!(
            "wrote {} procedure legs of {} lines to {}",
            summary.rows,
            summary.lines,
            cmd.output.display()
        );
    }

    if summary.invalid > 0 {
        warn!("skipped {} invalid procedure legs", summary.invalid);
    }

    Ok(())
}

fn saa(cmd: &SaaCommand, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let batch = convert_saa_directory(&cmd.input_dir, &cmd.output, cmd.jobs())?;

    let summary = batch.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.features > 0 {
        info!(
            "wrote {} special use airspaces to {}",
            summary.features,
            cmd.output.display()
        );
    } else {
        warn!("no valid airspace features found in {}", cmd.input_dir.display());
    }

    if summary.failed > 0 {
        warn!("{} of {} files could not be decoded", summary.failed, summary.files);
    }

    Ok(())
}
