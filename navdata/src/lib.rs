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

//! FAA navigation data converter
//!
//! Converts two FAA distributions into formats that charting tools consume:
//!
//! - the terminal procedures (SID, STAR and approach legs) of the Coded
//!   Instrument Flight Procedures (CIFP) file into CSV rows with the
//!   [`arinc424`] decoder, and
//! - a directory of Special Activity Airspace (SAA) documents into one
//!   GeoJSON feature collection with the [`aixm`] decoder.
//!
//! Single malformed records or documents are skipped and reported, they never
//! abort a conversion.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! let batch = navdata::convert_saa_directory(
//!     Path::new("saa"),
//!     Path::new("SUA_Airspace.geojson"),
//!     4,
//! )?;
//!
//! for failure in &batch.failures {
//!     eprintln!("{}: {}", failure.path.display(), failure.error);
//! }
//! # Ok::<(), navdata::Error>(())
//! ```

use std::fs::{self, File};
use std::io;
use std::path::Path;

mod cifp;
pub mod cli;
mod error;
mod geojson;
pub mod logging;
mod saa;

pub use cifp::{convert_cifp, convert_cifp_file, CifpSummary};
pub use error::Error;
pub use logging::init_logging;
pub use saa::{convert_saa_directory, decode_directory, Failure, SaaBatch, SaaSummary};
pub use self::geojson::{feature_collection, write_geojson};

/// Creates the file and its missing parent directories.
fn create_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
