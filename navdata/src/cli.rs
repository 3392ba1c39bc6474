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

//! Command-line interface of the `navdata` binary.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::Verbosity;

/// Converts FAA navigation data for charting.
#[derive(Debug, Parser)]
#[command(name = "navdata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the run summary as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert SID, STAR and approach legs of a CIFP file to CSV
    Cifp(CifpCommand),

    /// Convert a directory of SAA documents to GeoJSON
    Saa(SaaCommand),
}

#[derive(Debug, Args)]
pub struct CifpCommand {
    /// CIFP file
    #[arg(short, long, value_name = "FILE", default_value = "FAACIFP18")]
    pub input: PathBuf,

    /// CSV file to write
    #[arg(short, long, value_name = "FILE", default_value = "cifp_sid_star_app.csv")]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct SaaCommand {
    /// Directory with the SAA XML files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// GeoJSON file to write
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "Additional_Data/Shape_Files/SUA_Airspace.geojson"
    )]
    pub output: PathBuf,

    /// Number of files decoded in parallel [default: number of CPUs]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,
}

impl SaaCommand {
    pub fn jobs(&self) -> usize {
        self.jobs
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cifp_defaults() {
        let cli = Cli::try_parse_from(["navdata", "cifp"]).unwrap();

        assert_eq!(cli.verbosity(), Verbosity::Normal);
        assert!(!cli.json);

        let Command::Cifp(cmd) = cli.command else {
            panic!("expected cifp command");
        };
        assert_eq!(cmd.input, PathBuf::from("FAACIFP18"));
        assert_eq!(cmd.output, PathBuf::from("cifp_sid_star_app.csv"));
    }

    #[test]
    fn saa_arguments() {
        let cli = Cli::try_parse_from([
            "navdata", "saa", "-i", "saa", "-o", "out/sua.geojson", "-j", "4", "-vv", "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbosity(), Verbosity::Trace);
        assert!(cli.json);

        let Command::Saa(cmd) = cli.command else {
            panic!("expected saa command");
        };
        assert_eq!(cmd.input_dir, PathBuf::from("saa"));
        assert_eq!(cmd.output, PathBuf::from("out/sua.geojson"));
        assert_eq!(cmd.jobs(), 4);
    }

    #[test]
    fn saa_defaults() {
        let cli = Cli::try_parse_from(["navdata", "-q", "saa"]).unwrap();

        assert_eq!(cli.verbosity(), Verbosity::Quiet);

        let Command::Saa(cmd) = cli.command else {
            panic!("expected saa command");
        };
        assert_eq!(cmd.input_dir, PathBuf::from("."));
        assert_eq!(
            cmd.output,
            PathBuf::from("Additional_Data/Shape_Files/SUA_Airspace.geojson")
        );
        assert!(cmd.jobs() >= 1);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        assert!(Cli::try_parse_from(["navdata", "saa", "-j", "0"]).is_err());
    }

    #[test]
    fn verbose() {
        let cli = Cli::try_parse_from(["navdata", "cifp", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
    }
}
