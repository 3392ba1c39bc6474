// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! ARINC 424 positional record decoder.
//!
//! An ARINC 424 file multiplexes many record kinds into 132 column wide lines
//! without any delimiters. This crate decodes such lines with a declarative
//! [`Schema`], an ordered table of named column ranges, into a
//! [`DecodedRecord`] of raw field values. Values are not converted since most
//! of them are zero-padded codes rather than numbers.
//!
//! Which schema applies to a line is decided by looking at its discriminator
//! columns first. The [`records`] module does so for the terminal procedure
//! legs (SID, STAR and approach) of the FAA's Coded Instrument Flight
//! Procedures (CIFP).
//!
//! # Examples
//!
//! Decode a SID leg of John F Kennedy Intl:
//!
//! ```
//! use arinc424::records::{self, ProcedureKind, PROCEDURE_LEG};
//!
//! let line = "SUSAP KJFKK6DDEEZZ55RW04L 010         0  EY    VA                     0440        + 00500     18000                 0      123451912";
//!
//! assert_eq!(records::classify(line.as_bytes()), Some(ProcedureKind::Sid));
//!
//! let leg = arinc424::decode(line, &PROCEDURE_LEG);
//! assert_eq!(leg.get("airport_identifier"), Some("KJFK"));
//! assert_eq!(leg.get("transition_identifier"), Some("RW04L"));
//! assert_eq!(leg.get("path_and_termination"), Some("VA"));
//! ```
//!
//! Lines of a whole file are classified by the [`Lines`] iterator which yields
//! only the procedure legs:
//!
//! ```no_run
//! use arinc424::records::{Lines, PROCEDURE_LEG};
//!
//! let data = std::fs::read("FAACIFP18").expect("file should be readable");
//!
//! for (kind, bytes) in Lines::new(&data) {
//!     let leg = arinc424::decode_bytes(bytes, &PROCEDURE_LEG)?;
//!     println!("{kind}: {leg}");
//! }
//! # Ok::<(), arinc424::Error>(())
//! ```
//!
//! [`records`]: crate::records
//! [`Lines`]: crate::records::Lines

#[macro_use]
mod macros;

mod error;
mod field;
mod record;

pub mod records;

pub use error::Error;
pub use field::Field;
pub use record::{decode, decode_bytes, DecodedRecord, Schema, RECORD_LENGTH};
