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

//! Airspace features decoded from SAA documents.
//!
//! The types are flat: the nesting of time slices, geometry components and
//! GML surfaces is resolved by the [decoder](crate::decode) so callers never
//! deal with XML structure. Coordinates are WGS-84 decimal degrees in
//! (longitude, latitude) order, as in the source documents.

use crate::altitude::Altitude;
use crate::category::Category;

/// A special use airspace with its vertical limits and lateral boundary.
///
/// # Examples
///
/// ```
/// let xml = br#"
///   <saa:SaaSubscriberFile
///     xmlns:saa="urn:us:gov:dot:faa:aim:saa"
///     xmlns:aixm="http://www.aixm.aero/schema/5.0"
///     xmlns:gml="http://www.opengis.net/gml/3.2">
///     <aixm:Airspace>
///       <aixm:timeSlice>
///         <aixm:AirspaceTimeSlice>
///           <aixm:designator>R-2508</aixm:designator>
///           <aixm:AirspaceVolume>
///             <aixm:upperLimit uom="FT">UNL</aixm:upperLimit>
///             <aixm:lowerLimit uom="FT">GND</aixm:lowerLimit>
///             <gml:pos>-117.0 35.0</gml:pos>
///             <gml:pos>-116.0 35.0</gml:pos>
///             <gml:pos>-116.0 36.0</gml:pos>
///           </aixm:AirspaceVolume>
///         </aixm:AirspaceTimeSlice>
///       </aixm:timeSlice>
///     </aixm:Airspace>
///   </saa:SaaSubscriberFile>"#;
///
/// let feature = aixm::decode_bytes(xml).unwrap().into_feature().unwrap();
///
/// assert_eq!(feature.category, aixm::Category::Restricted);
/// assert_eq!(feature.upper.normalized, "UNL");
/// assert_eq!(feature.lower.normalized, "SFC");
/// assert_eq!(feature.boundary.first(), feature.boundary.last());
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct AirspaceFeature {
    /// Designator (e.g. `"R-2508"`, `"MISTY 1 MOA"`).
    pub designator: String,
    /// Human-readable name, empty if not given.
    pub name: String,
    pub category: Category,
    pub upper: VerticalLimit,
    pub lower: VerticalLimit,
    /// Closed ring of (longitude, latitude) pairs.
    ///
    /// The first and last position are equal and the ring has at least
    /// three distinct vertices.
    pub boundary: Vec<(f64, f64)>,
}

/// An upper or lower airspace limit.
///
/// The raw values are kept as they appear in the source together with the
/// normalized display token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct VerticalLimit {
    /// Limit value (e.g. `"180"`, `"GND"`).
    pub value: String,
    /// Unit of measurement (e.g. `"FL"`, `"FT"`).
    pub uom: String,
    /// Reference datum (e.g. `"MSL"`, `"SFC"`).
    pub reference: String,
    /// Display token (e.g. `"FL180"`, `"SFC"`).
    pub normalized: String,
}

impl VerticalLimit {
    pub fn new(value: &str, uom: &str, reference: &str) -> Self {
        Self {
            value: value.to_string(),
            uom: uom.to_string(),
            reference: reference.to_string(),
            normalized: crate::altitude::normalize(value, uom, reference),
        }
    }

    /// Returns the typed altitude of this limit.
    pub fn altitude(&self) -> Altitude {
        Altitude::new(&self.value, &self.uom, &self.reference)
    }
}
