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

use std::fmt;

use crate::{Error, Field};

/// The fixed length of an ARINC 424 record in columns.
pub const RECORD_LENGTH: usize = 132;

/// The field layout of one record kind.
///
/// Fields are kept in the order of the table and may leave gaps for reserved
/// columns.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Schema {
    name: &'static str,
    length: usize,
    fields: &'static [Field],
}

impl Schema {
    /// Creates a schema for records of `length` columns.
    ///
    /// # Panics
    ///
    /// Panics if a field starts behind its end or ends behind the record
    /// length. Declared as a constant, this is a compile time error.
    pub const fn new(name: &'static str, length: usize, fields: &'static [Field]) -> Self {
        let mut i = 0;
        while i < fields.len() {
            let field = &fields[i];
            assert!(field.start <= field.end, "field should not end before it starts");
            assert!(field.end <= length, "field should not exceed the record length");
            i += 1;
        }

        Self {
            name,
            length,
            fields,
        }
    }

    /// The name of the record kind.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The maximum record length in columns.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field with that name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Decodes the line with this schema.
    ///
    /// See [`decode`] for details.
    pub fn decode(&self, line: &str) -> DecodedRecord {
        decode(line, self)
    }
}

/// Raw field values of one record in schema order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DecodedRecord {
    fields: Vec<(&'static str, String)>,
}

impl DecodedRecord {
    /// Returns the raw value of the field with that name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the field names and values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the values as one comma-separated row.
    ///
    /// There is no header and values are not escaped.
    pub fn to_csv_row(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

/// Decodes a line into one raw value per schema field.
///
/// The line should not contain its line terminator. A line shorter than the
/// schema never fails to decode, the missing columns are empty. Values are
/// neither trimmed nor converted.
///
/// # Examples
///
/// ```
/// use arinc424::records::PROCEDURE_LEG;
///
/// let leg = arinc424::decode("SUSAP KJFKK6DDEEZZ55RW04L", &PROCEDURE_LEG);
///
/// assert_eq!(leg.len(), PROCEDURE_LEG.len());
/// assert_eq!(leg.get("sid_star_approach_identifier"), Some("DEEZZ5"));
/// assert_eq!(leg.get("sequence_number"), Some(""));
/// ```
pub fn decode(line: &str, schema: &Schema) -> DecodedRecord {
    let fields = schema
        .fields()
        .iter()
        .map(|field| (field.name, field.slice(line).to_owned()))
        .collect();

    DecodedRecord { fields }
}

/// Decodes a line of raw bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the bytes are not valid UTF-8.
pub fn decode_bytes(line: &[u8], schema: &Schema) -> Result<DecodedRecord, Error> {
    let line = std::str::from_utf8(line)?;
    Ok(decode(line, schema))
}
