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

//! Conversion of CIFP terminal procedures to CSV.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use arinc424::records::{self, PROCEDURE_LEG};
use log::{debug, trace, warn};
use serde::Serialize;

use crate::error::Error;

/// Line counts of a CIFP conversion.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize)]
pub struct CifpSummary {
    /// Lines read from the input.
    pub lines: usize,
    /// CSV rows written.
    pub rows: usize,
    /// Lines that are no SID, STAR or approach leg.
    pub skipped: usize,
    /// Procedure legs that are not UTF-8.
    pub invalid: usize,
}

/// Writes every SID, STAR and approach leg of a CIFP file as CSV row.
///
/// Rows follow the column order of the procedure leg schema and are written
/// without header. All other records are skipped. A leg that is not UTF-8
/// is counted as invalid and skipped, only I/O errors fail the conversion.
///
/// # Examples
///
/// ```
/// let cifp = concat!(
///     "HDR01FAACIFP18      001P013203880621 2313\n",
///     "SUSAP KJFKK6DDEEZZ55RW04L 010         0  EY    VA                     0440        + 00500     18000                 0      123451912\n",
/// );
///
/// let mut csv = Vec::new();
/// let summary = navdata::convert_cifp(cifp.as_bytes(), &mut csv)?;
///
/// assert_eq!(summary.lines, 2);
/// assert_eq!(summary.rows, 1);
/// assert!(csv.starts_with(b"S,USA,P,KJFK,K6,D,DEEZZ5,5,RW04L,010,"));
/// # Ok::<(), navdata::Error>(())
/// ```
pub fn convert_cifp<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<CifpSummary, Error> {
    let mut summary = CifpSummary::default();

    for line in reader.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        summary.lines += 1;

        let Some(kind) = records::classify(line) else {
            trace!("skipping line {}", summary.lines);
            summary.skipped += 1;
            continue;
        };

        match arinc424::decode_bytes(line, &PROCEDURE_LEG) {
            Ok(leg) => {
                writeln!(writer, "{leg}")?;
                summary.rows += 1;
            }
            Err(e) => {
                warn!("skipping {kind} leg in line {}: {e}", summary.lines);
                summary.invalid += 1;
            }
        }
    }

    writer.flush()?;
    debug!(
        "converted {} of {} lines ({} skipped, {} invalid)",
        summary.rows, summary.lines, summary.skipped, summary.invalid
    );

    Ok(summary)
}

/// Converts the CIFP file `input` to the CSV file `output`.
///
/// Missing parent directories of `output` are created.
pub fn convert_cifp_file(input: &Path, output: &Path) -> Result<CifpSummary, Error> {
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(crate::create_file(output)?);
    convert_cifp(reader, writer)
}
