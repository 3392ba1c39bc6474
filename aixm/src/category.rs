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

/// Special use airspace category.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Category {
    /// Military Operations Area
    Moa,
    /// Restricted Area (R-xxxx)
    Restricted,
    /// Warning Area (W-xxxx)
    Warning,
    /// Alert Area (A-xxxx)
    Alert,
    /// Prohibited Area (P-xxxx)
    Prohibited,
    /// National Security Area
    Nsa,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moa => "MOA",
            Self::Restricted => "RESTRICTED",
            Self::Warning => "WARNING",
            Self::Alert => "ALERT",
            Self::Prohibited => "PROHIBITED",
            Self::Nsa => "NSA",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a category from the `suaType` extension value and designator.
///
/// Returns `None` if it can't tell.
pub type Resolver = fn(sua_type: &str, designator: &str) -> Option<Category>;

/// The resolvers in the order they are tried.
pub const RESOLVERS: [Resolver; 2] = [by_sua_type, by_designator];

/// Classifies an airspace.
///
/// The `suaType` value of the airspace extension is looked up first. It is
/// missing or set to `OTHER` in older data, in which case the first letter
/// of the designator decides. Anything else is [`Category::Other`].
///
/// # Examples
///
/// ```
/// use aixm::{classify, Category};
///
/// assert_eq!(classify("MOA", "M123"), Category::Moa);
/// assert_eq!(classify("", "R-2305"), Category::Restricted);
/// assert_eq!(classify("", "Z999"), Category::Other);
/// ```
pub fn classify(sua_type: &str, designator: &str) -> Category {
    RESOLVERS
        .iter()
        .find_map(|resolve| resolve(sua_type, designator))
        .unwrap_or(Category::Other)
}

/// Looks up the `suaType` code.
pub fn by_sua_type(sua_type: &str, _designator: &str) -> Option<Category> {
    match sua_type.trim() {
        "MOA" => Some(Category::Moa),
        "RA" | "RESTRICTED" => Some(Category::Restricted),
        "WA" | "WARNING" => Some(Category::Warning),
        "AA" | "ALERT" => Some(Category::Alert),
        "PA" | "PROHIBITED" => Some(Category::Prohibited),
        "NSA" => Some(Category::Nsa),
        _ => None,
    }
}

/// Designator prefixes in the order they are matched.
const PREFIXES: [(char, Category); 6] = [
    ('M', Category::Moa),
    ('R', Category::Restricted),
    ('W', Category::Warning),
    ('A', Category::Alert),
    ('P', Category::Prohibited),
    ('N', Category::Nsa),
];

/// Derives the category from the designator's first letter.
pub fn by_designator(_sua_type: &str, designator: &str) -> Option<Category> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| designator.starts_with(*prefix))
        .map(|(_, category)| *category)
}
