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

/// A named column range of a positional record.
///
/// The range is half-open and counted in characters from column 0, i.e. the
/// field covers the columns `start..end`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Field {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl Field {
    pub const fn new(name: &'static str, start: usize, end: usize) -> Self {
        Self { name, start, end }
    }

    /// The number of columns covered by this field.
    #[inline]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }

    /// Returns the columns of this field from the line.
    ///
    /// Columns past the end of the line are missing: a field starting behind
    /// the line is empty and a field ending behind it is truncated. Padding
    /// spaces are returned as they are.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        if line.is_ascii() {
            let len = line.len();
            &line[self.start.min(len)..self.end.min(len)]
        } else {
            &line[byte_offset(line, self.start)..byte_offset(line, self.end)]
        }
    }
}

/// Returns the byte offset of the character at `column`.
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}
