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

use std::io::Write;

use aixm::AirspaceFeature;
use geo::{BoundingRect, LineString, MultiPolygon, Polygon, Rect};
use geojson::{Bbox, Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::error::Error;

/// Returns the airspaces as GeoJSON features with a polygon geometry.
///
/// Each feature carries the designator, name, category and both the raw
/// and normalized vertical limits as properties.
pub fn feature_collection(airspaces: &[AirspaceFeature]) -> FeatureCollection {
    let polygons: Vec<Polygon> = airspaces.iter().map(polygon).collect();

    let features = airspaces
        .iter()
        .zip(&polygons)
        .map(|(airspace, polygon)| Feature {
            bbox: polygon.bounding_rect().map(rect_to_bbox),
            geometry: Some(Geometry::new(Value::from(polygon))),
            id: None,
            properties: Some(properties(airspace)),
            foreign_members: None,
        })
        .collect();

    FeatureCollection {
        bbox: MultiPolygon::new(polygons).bounding_rect().map(rect_to_bbox),
        features,
        foreign_members: None,
    }
}

/// Writes the airspaces as one GeoJSON feature collection.
pub fn write_geojson<W: Write>(airspaces: &[AirspaceFeature], writer: W) -> Result<(), Error> {
    serde_json::to_writer(writer, &feature_collection(airspaces))?;
    Ok(())
}

fn polygon(airspace: &AirspaceFeature) -> Polygon {
    Polygon::new(LineString::from(airspace.boundary.clone()), Vec::new())
}

fn rect_to_bbox(rect: Rect) -> Bbox {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

fn properties(airspace: &AirspaceFeature) -> JsonObject {
    let upper = &airspace.upper;
    let lower = &airspace.lower;

    [
        ("DESIGNATOR", airspace.designator.as_str()),
        ("NAME", airspace.name.as_str()),
        ("TYPE", airspace.category.as_str()),
        ("UPPER_VAL", upper.normalized.as_str()),
        ("LOWER_VAL", lower.normalized.as_str()),
        ("UPPER_LIMIT", upper.value.as_str()),
        ("UPPER_UOM", upper.uom.as_str()),
        ("UPPER_REF", upper.reference.as_str()),
        ("LOWER_LIMIT", lower.value.as_str()),
        ("LOWER_UOM", lower.uom.as_str()),
        ("LOWER_REF", lower.reference.as_str()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), JsonValue::from(value)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aixm::{Category, VerticalLimit};

    fn restricted_area() -> AirspaceFeature {
        AirspaceFeature {
            designator: "R-2305".to_string(),
            name: "GILA BEND".to_string(),
            category: Category::Restricted,
            upper: VerticalLimit::new("180", "FL", "STD"),
            lower: VerticalLimit::new("GND", "FT", "SFC"),
            boundary: vec![
                (-112.75, 32.75),
                (-112.5, 32.75),
                (-112.5, 33.0),
                (-112.75, 33.0),
                (-112.75, 32.75),
            ],
        }
    }

    #[test]
    fn feature_properties() {
        let fc = feature_collection(&[restricted_area()]);
        assert_eq!(fc.features.len(), 1);

        let feature = &fc.features[0];
        assert_eq!(feature.property("DESIGNATOR"), Some(&JsonValue::from("R-2305")));
        assert_eq!(feature.property("NAME"), Some(&JsonValue::from("GILA BEND")));
        assert_eq!(feature.property("TYPE"), Some(&JsonValue::from("RESTRICTED")));
        assert_eq!(feature.property("UPPER_VAL"), Some(&JsonValue::from("FL180")));
        assert_eq!(feature.property("LOWER_VAL"), Some(&JsonValue::from("SFC")));
        assert_eq!(feature.property("UPPER_REF"), Some(&JsonValue::from("STD")));
        assert_eq!(feature.property("LOWER_LIMIT"), Some(&JsonValue::from("GND")));
        assert_eq!(feature.properties.as_ref().map(|p| p.len()), Some(11));
    }

    #[test]
    fn polygon_with_one_closed_ring() {
        let fc = feature_collection(&[restricted_area()]);
        let geometry = fc.features[0].geometry.as_ref().unwrap();

        let Value::Polygon(rings) = &geometry.value else {
            panic!("expected polygon");
        };

        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 5);
        assert_eq!(rings[0].first(), rings[0].last());
        assert_eq!(rings[0][1], vec![-112.5, 32.75]);
    }

    #[test]
    fn bounding_boxes() {
        let mut warning = restricted_area();
        warning.boundary = vec![(-75.5, 36.0), (-74.0, 36.5), (-75.0, 37.25), (-75.5, 36.0)];

        let fc = feature_collection(&[restricted_area(), warning]);

        assert_eq!(fc.features[0].bbox, Some(vec![-112.75, 32.75, -112.5, 33.0]));
        assert_eq!(fc.features[1].bbox, Some(vec![-75.5, 36.0, -74.0, 37.25]));
        assert_eq!(fc.bbox, Some(vec![-112.75, 32.75, -74.0, 37.25]));
    }

    #[test]
    fn empty_collection() {
        let fc = feature_collection(&[]);
        assert!(fc.features.is_empty());
        assert_eq!(fc.bbox, None);
    }

    #[test]
    fn writes_json() {
        let mut json = Vec::new();
        write_geojson(&[restricted_area()], &mut json).unwrap();

        let value: JsonValue = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
        assert_eq!(value["features"][0]["properties"]["TYPE"], "RESTRICTED");
    }
}
