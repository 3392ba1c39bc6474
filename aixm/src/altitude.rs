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

/// An airspace limit reduced to what a pilot reads on a chart.
///
/// The values are kept as they appear in the source, e.g. a flight level
/// `"050"` stays `"050"`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Altitude {
    /// No limit given.
    Unstated,
    /// The surface (GND, SFC).
    Surface,
    /// No upper limit.
    Unlimited,
    /// Flight level.
    FlightLevel(String),
    /// Feet above mean sea level.
    Msl(String),
    /// Feet above ground level.
    Agl(String),
    /// Feet above some other reference.
    Referenced { value: String, reference: String },
    /// Feet without reference.
    Feet(String),
    /// A unit other than feet or flight level.
    Other {
        value: String,
        uom: String,
        reference: String,
    },
}

impl Altitude {
    /// Interprets a limit value with its unit of measure and reference.
    ///
    /// Surrounding whitespace is ignored. The rules are tried in this order:
    /// no value, surface, unlimited, flight level unit and finally feet by
    /// their reference.
    pub fn new(value: &str, uom: &str, reference: &str) -> Self {
        let value = value.trim();
        let uom = uom.trim();
        let reference = reference.trim();

        if value.is_empty() {
            return Self::Unstated;
        }

        if ["GND", "SFC", "SURFACE"]
            .iter()
            .any(|s| value.eq_ignore_ascii_case(s))
        {
            return Self::Surface;
        }

        if ["UNL", "UNLIMITED"]
            .iter()
            .any(|s| value.eq_ignore_ascii_case(s))
        {
            return Self::Unlimited;
        }

        let value = value.to_string();
        match (uom, reference) {
            ("FL", _) => Self::FlightLevel(value),
            ("FT", "MSL") => Self::Msl(value),
            ("FT", "SFC" | "GND" | "AGL") => Self::Agl(value),
            ("FT", "") => Self::Feet(value),
            ("FT", reference) => Self::Referenced {
                value,
                reference: reference.to_string(),
            },
            (uom, reference) => Self::Other {
                value,
                uom: uom.to_string(),
                reference: reference.to_string(),
            },
        }
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstated => Ok(()),
            Self::Surface => write!(f, "SFC"),
            Self::Unlimited => write!(f, "UNL"),
            Self::FlightLevel(value) => write!(f, "FL{value}"),
            Self::Msl(value) => write!(f, "{value} MSL"),
            Self::Agl(value) => write!(f, "{value} AGL"),
            Self::Referenced { value, reference } => write!(f, "{value} {reference}"),
            Self::Feet(value) => write!(f, "{value} FT"),
            Self::Other {
                value,
                uom,
                reference,
            } => f.write_str(format!("{value} {uom} {reference}").trim()),
        }
    }
}

/// Normalizes a vertical limit to a display token like `FL180`, `SFC` or
/// `5000 MSL`.
///
/// Every input gives a token, an empty value gives an empty token.
///
/// # Examples
///
/// ```
/// assert_eq!(aixm::normalize("180", "FL", ""), "FL180");
/// assert_eq!(aixm::normalize("GND", "FT", "SFC"), "SFC");
/// assert_eq!(aixm::normalize("5000", "FT", "MSL"), "5000 MSL");
/// ```
pub fn normalize(value: &str, uom: &str, reference: &str) -> String {
    Altitude::new(value, uom, reference).to_string()
}
