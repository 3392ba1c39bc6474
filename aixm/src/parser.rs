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

use log::{debug, trace};

use crate::category;
use crate::error::Error;
use crate::features::{AirspaceFeature, VerticalLimit};
use crate::xml::{Document, Element, AIXM, GML, SUA};

/// The outcome of decoding a well-formed SAA document.
#[derive(Clone, PartialEq, Debug)]
pub enum Decoded {
    Accepted(AirspaceFeature),
    /// The document holds no usable airspace.
    Rejected(Rejection),
}

impl Decoded {
    /// Returns the feature if the document was accepted.
    pub fn into_feature(self) -> Option<AirspaceFeature> {
        match self {
            Self::Accepted(feature) => Some(feature),
            Self::Rejected(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Why a document yields no airspace feature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Rejection {
    MissingAirspace,
    MissingTimeSlice,
    MissingVolume,
    /// Fewer than three distinct vertices. `found` counts the positions
    /// that could be read.
    TooFewPositions { found: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAirspace => write!(f, "no airspace element"),
            Self::MissingTimeSlice => write!(f, "airspace has no time slice"),
            Self::MissingVolume => write!(f, "airspace has no volume"),
            Self::TooFewPositions { found } => {
                write!(f, "boundary has too few positions ({found})")
            }
        }
    }
}

/// Parses and decodes an SAA document.
///
/// Fails only if the data is not well-formed XML.
pub fn decode_bytes(data: &[u8]) -> Result<Decoded, Error> {
    Document::parse(data).map(|doc| decode(&doc))
}

/// Decodes the first airspace of an SAA document.
///
/// Missing designator, name, limits or category extension leave the
/// corresponding values empty. The boundary is built from all `gml:pos`
/// elements of the volume and closed if needed.
pub fn decode(doc: &Document) -> Decoded {
    match decode_airspace(doc.root()) {
        Ok(feature) => {
            trace!("decoded airspace {}", feature.designator);
            Decoded::Accepted(feature)
        }
        Err(rejection) => {
            debug!("rejected airspace: {rejection}");
            Decoded::Rejected(rejection)
        }
    }
}

fn decode_airspace(root: &Element) -> Result<AirspaceFeature, Rejection> {
    let airspace = root
        .find(AIXM, "Airspace")
        .ok_or(Rejection::MissingAirspace)?;
    let time_slice = airspace
        .find(AIXM, "AirspaceTimeSlice")
        .ok_or(Rejection::MissingTimeSlice)?;

    let designator = child_text(time_slice, AIXM, "designator");
    let name = child_text(time_slice, AIXM, "name");

    let volume = time_slice
        .find(AIXM, "AirspaceVolume")
        .ok_or(Rejection::MissingVolume)?;

    let upper = limit(volume, "upperLimit", "upperLimitReference");
    let lower = limit(volume, "lowerLimit", "lowerLimitReference");

    let sua_type = time_slice
        .find(SUA, "AirspaceExtension")
        .map(|ext| child_text(ext, SUA, "suaType"))
        .unwrap_or_default();
    let category = category::classify(sua_type, designator);

    let boundary = ring(volume.find_all(GML, "pos").filter_map(|e| parse_pos(e.text())))?;

    Ok(AirspaceFeature {
        designator: designator.to_string(),
        name: name.to_string(),
        category,
        upper,
        lower,
        boundary,
    })
}

fn child_text<'a>(element: &'a Element, namespace: &str, name: &str) -> &'a str {
    element.child(namespace, name).map_or("", Element::text)
}

fn limit(volume: &Element, value: &str, reference: &str) -> VerticalLimit {
    let element = volume.child(AIXM, value);
    VerticalLimit::new(
        element.map_or("", Element::text),
        element.and_then(|e| e.attribute("uom")).unwrap_or_default(),
        child_text(volume, AIXM, reference),
    )
}

/// Parses a `gml:pos` text content into (longitude, latitude).
fn parse_pos(text: &str) -> Option<(f64, f64)> {
    let mut parts = text.split_whitespace();
    let lon: f64 = parts.next()?.parse().ok()?;
    let lat: f64 = parts.next()?.parse().ok()?;
    (lon.is_finite() && lat.is_finite()).then_some((lon, lat))
}

/// Collects positions into a closed ring with at least three distinct
/// vertices.
fn ring(positions: impl Iterator<Item = (f64, f64)>) -> Result<Vec<(f64, f64)>, Rejection> {
    let mut ring: Vec<(f64, f64)> = positions.collect();

    let mut distinct: Vec<(f64, f64)> = Vec::with_capacity(3);
    for pos in &ring {
        if !distinct.contains(pos) {
            distinct.push(*pos);
            if distinct.len() == 3 {
                break;
            }
        }
    }

    if distinct.len() < 3 {
        return Err(Rejection::TooFewPositions { found: ring.len() });
    }

    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }

    Ok(ring)
}
