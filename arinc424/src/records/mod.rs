// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

//! Record kinds and their schemas.
//!
//! Lines are classified by their discriminator columns before they are
//! decoded. Only lines of a supported kind are handed to the decoder, every
//! other line of the file is skipped.

use std::fmt;

use log::trace;

use crate::{decode, DecodedRecord};

mod procedure;

pub use procedure::PROCEDURE_LEG;

/// Column of the section code.
pub const SECTION_COLUMN: usize = 4;

/// Column of the subsection code of airport records.
pub const SUBSECTION_COLUMN: usize = 12;

/// The kind of a terminal procedure.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ProcedureKind {
    /// Standard Instrument Departure (SUB CODE `D`).
    Sid,
    /// Standard Terminal Arrival Route (SUB CODE `E`).
    Star,
    /// Approach procedure (SUB CODE `F`).
    Approach,
}

impl ProcedureKind {
    /// The subsection code marking this kind.
    pub fn subsection_code(&self) -> u8 {
        match self {
            Self::Sid => b'D',
            Self::Star => b'E',
            Self::Approach => b'F',
        }
    }
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sid => write!(f, "SID"),
            Self::Star => write!(f, "STAR"),
            Self::Approach => write!(f, "APPROACH"),
        }
    }
}

/// Returns the procedure kind if the line is a procedure leg.
///
/// A procedure leg has the airport section code `P` and one of the
/// subsection codes `D`, `E` or `F`. Any other line, including one too short
/// to carry both codes, is not a procedure leg. Columns are counted in
/// characters like the fields of a decoded record.
pub fn classify(line: &[u8]) -> Option<ProcedureKind> {
    if char_at(line, SECTION_COLUMN)? != 'P' {
        return None;
    }

    match char_at(line, SUBSECTION_COLUMN)? {
        'D' => Some(ProcedureKind::Sid),
        'E' => Some(ProcedureKind::Star),
        'F' => Some(ProcedureKind::Approach),
        _ => None,
    }
}

fn char_at(line: &[u8], column: usize) -> Option<char> {
    match line.get(..=column) {
        Some(head) if head.is_ascii() => Some(char::from(head[column])),
        _ => String::from_utf8_lossy(line).chars().nth(column),
    }
}

/// Returns `true` if the line is a SID, STAR or approach leg.
#[inline]
pub fn accepts(line: &[u8]) -> bool {
    classify(line).is_some()
}

/// Classifies and decodes a line as procedure leg.
///
/// Returns `None` without decoding if the line is no procedure leg.
pub fn procedure_leg(line: &str) -> Option<(ProcedureKind, DecodedRecord)> {
    let kind = classify(line.as_bytes())?;
    Some((kind, decode(line, &PROCEDURE_LEG)))
}

/// Iterator over the procedure legs of an ARINC 424 file.
pub struct Lines<'a> {
    data: &'a [u8],
}

impl<'a> Lines<'a> {
    /// Creates a new iterator over the lines of a file.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arinc424::records::{Lines, ProcedureKind};
    /// let data = b"SUSAP KJFKK6DDEEZZ55RW04L 010\r\nSUSAP KJFKK6GRW04L\n";
    ///
    /// let kinds: Vec<_> = Lines::new(data).map(|(kind, _)| kind).collect();
    /// assert_eq!(kinds, vec![ProcedureKind::Sid]);
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (ProcedureKind, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.data.is_empty() {
            let data = self.data;
            let (line, rest) = match data.iter().position(|&b| b == b'\n') {
                Some(pos) => (&data[..pos], &data[pos + 1..]),
                None => (data, &data[data.len()..]),
            };
            self.data = rest;

            let line = line.strip_suffix(b"\r").unwrap_or(line);

            match classify(line) {
                Some(kind) => return Some((kind, line)),
                None => trace!("skipping record {:?}", String::from_utf8_lossy(line)),
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SID: &[u8] = b"SUSAP KJFKK6DDEEZZ55RW04L 010         0  EY    VA                     0440        + 00500     18000                 0      123451912";
    const STAR: &[u8] = b"SUSAP KBOSK6EOOSHN51ALB   020ALB  K6D 0E       IF ALB K6                          B FL240FL180                             543212401";
    const APPROACH: &[u8] = b"SUSAP KSFOK2FI28R  IAROKE 020AROKEK2PC1E  F    IF                                 @ 04000             -300                 678902313";
    const RUNWAY: &[u8] = b"SUSAP KJFKK6GRW04L                                                                                                         305541709";

    #[test]
    fn classifies_procedure_legs() {
        assert_eq!(classify(SID), Some(ProcedureKind::Sid));
        assert_eq!(classify(STAR), Some(ProcedureKind::Star));
        assert_eq!(classify(APPROACH), Some(ProcedureKind::Approach));
    }

    #[test]
    fn rejects_other_records() {
        assert_eq!(classify(RUNWAY), None);
        // terminal waypoint and an airspace record
        assert!(!accepts(b"SEURPCEDDHED W1    ED0    V     N53341894E009404512"));
        assert!(!accepts(b"SUSAU KJFKK6D"));
    }

    #[test]
    fn rejects_short_lines() {
        assert!(!accepts(b""));
        assert!(!accepts(b"SUSAP"));
        assert!(!accepts(b"SUSAP KJFKK6"));
        assert!(accepts(b"SUSAP KJFKK6D"));
    }

    #[test]
    fn classifies_by_character_column() {
        let line = "SUSAP KÉFKK6DDEEZZ55RW04L 010";

        assert_eq!(classify(line.as_bytes()), Some(ProcedureKind::Sid));

        let (kind, leg) = procedure_leg(line).unwrap();
        assert_eq!(kind, ProcedureKind::Sid);
        assert_eq!(leg.get("section_code"), Some("P"));
        assert_eq!(leg.get("subsection_code"), Some("D"));
    }

    #[test]
    fn classification_is_repeatable() {
        for line in [SID, STAR, APPROACH, RUNWAY] {
            assert_eq!(accepts(line), accepts(line));
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn subsection_codes_round_trip() {
        for kind in [ProcedureKind::Sid, ProcedureKind::Star, ProcedureKind::Approach] {
            let mut line = SID.to_vec();
            line[SUBSECTION_COLUMN] = kind.subsection_code();
            assert_eq!(classify(&line), Some(kind));
        }
    }

    #[test]
    fn decodes_only_procedure_legs() {
        let sid = std::str::from_utf8(SID).unwrap();
        let (kind, leg) = procedure_leg(sid).expect("SID should be a procedure leg");
        assert_eq!(kind, ProcedureKind::Sid);
        assert_eq!(leg.get("sid_star_approach_identifier"), Some("DEEZZ5"));

        let rwy = std::str::from_utf8(RUNWAY).unwrap();
        assert!(procedure_leg(rwy).is_none());
    }

    #[test]
    fn iterates_procedure_legs_of_a_file() {
        let mut data = Vec::new();
        for line in [SID, RUNWAY, STAR, b"" as &[u8], APPROACH] {
            data.extend_from_slice(line);
            data.extend_from_slice(b"\r\n");
        }

        let legs: Vec<_> = Lines::new(&data).collect();
        assert_eq!(
            legs,
            vec![
                (ProcedureKind::Sid, SID),
                (ProcedureKind::Star, STAR),
                (ProcedureKind::Approach, APPROACH),
            ]
        );
    }

    #[test]
    fn last_line_needs_no_terminator() {
        let legs: Vec<_> = Lines::new(STAR).collect();
        assert_eq!(legs, vec![(ProcedureKind::Star, STAR)]);
    }
}
