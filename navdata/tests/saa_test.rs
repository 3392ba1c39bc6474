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

use std::fs;
use std::path::Path;

use aixm::{Category, Rejection};
use navdata::{convert_saa_directory, decode_directory, Error};

const DESIGNATORS: [(&str, &str); 9] = [
    ("MOA", "MISTY 1 MOA"),
    ("RA", "R-2305"),
    ("WA", "W-386"),
    ("AA", "A-211"),
    ("PA", "P-56A"),
    ("NSA", "NSA 1"),
    ("OTHER", "R-2508"),
    ("", "W-122"),
    ("", "Z-999"),
];

fn saa(sua_type: &str, designator: &str, offset: f64) -> String {
    let (w, e) = (-100.0 + offset, -99.5 + offset);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<saa:SaaSubscriberFile
  xmlns:saa="urn:us:gov:dot:faa:aim:saa"
  xmlns:sua="urn:us:gov:dot:faa:aim:saa:sua"
  xmlns:aixm="http://www.aixm.aero/schema/5.0"
  xmlns:gml="http://www.opengis.net/gml/3.2">
  <saa:Member>
    <aixm:Airspace gml:id="ID_{designator}">
      <aixm:timeSlice>
        <aixm:AirspaceTimeSlice gml:id="TS_{designator}">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>{designator}</aixm:designator>
          <aixm:name>{designator} AIRSPACE</aixm:name>
          <aixm:geometryComponent>
            <aixm:AirspaceGeometryComponent>
              <aixm:theAirspaceVolume>
                <aixm:AirspaceVolume>
                  <aixm:upperLimit uom="FL">180</aixm:upperLimit>
                  <aixm:upperLimitReference>STD</aixm:upperLimitReference>
                  <aixm:lowerLimit uom="FT">500</aixm:lowerLimit>
                  <aixm:lowerLimitReference>SFC</aixm:lowerLimitReference>
                  <aixm:horizontalProjection>
                    <aixm:Surface>
                      <gml:patches>
                        <gml:PolygonPatch>
                          <gml:exterior>
                            <gml:LinearRing>
                              <gml:pos>{w} 40.0</gml:pos>
                              <gml:pos>{e} 40.0</gml:pos>
                              <gml:pos>{e} 40.5</gml:pos>
                              <gml:pos>{w} 40.5</gml:pos>
                            </gml:LinearRing>
                          </gml:exterior>
                        </gml:PolygonPatch>
                      </gml:patches>
                    </aixm:Surface>
                  </aixm:horizontalProjection>
                </aixm:AirspaceVolume>
              </aixm:theAirspaceVolume>
            </aixm:AirspaceGeometryComponent>
          </aixm:geometryComponent>
          <aixm:extension>
            <sua:AirspaceExtension>
              <sua:suaType>{sua_type}</sua:suaType>
            </sua:AirspaceExtension>
          </aixm:extension>
        </aixm:AirspaceTimeSlice>
      </aixm:timeSlice>
    </aixm:Airspace>
  </saa:Member>
</saa:SaaSubscriberFile>"#
    )
}

/// Writes nine valid documents and one that is cut off.
fn write_documents(dir: &Path) {
    for (i, (sua_type, designator)) in DESIGNATORS.iter().enumerate() {
        let path = dir.join(format!("{i:02}.xml"));
        fs::write(path, saa(sua_type, designator, i as f64)).unwrap();
    }

    let truncated = saa("RA", "R-4808", 0.0);
    fs::write(dir.join("04a.xml"), &truncated[..truncated.len() / 2]).unwrap();
}

#[test]
fn malformed_document_does_not_abort_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());

    let batch = decode_directory(dir.path(), 1).unwrap();

    assert_eq!(batch.files, 10);
    assert_eq!(batch.features.len(), 9);
    assert!(batch.rejected.is_empty());
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].path, dir.path().join("04a.xml"));
    assert!(matches!(batch.failures[0].error, Error::Aixm(_)));
}

#[test]
fn features_follow_file_order() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());

    let batch = decode_directory(dir.path(), 1).unwrap();
    let designators: Vec<_> = batch.features.iter().map(|f| f.designator.as_str()).collect();

    assert_eq!(
        designators,
        DESIGNATORS.iter().map(|(_, d)| *d).collect::<Vec<_>>()
    );
}

#[test]
fn categories() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());

    let batch = decode_directory(dir.path(), 1).unwrap();
    let categories: Vec<_> = batch.features.iter().map(|f| f.category).collect();

    assert_eq!(
        categories,
        vec![
            Category::Moa,
            Category::Restricted,
            Category::Warning,
            Category::Alert,
            Category::Prohibited,
            Category::Nsa,
            Category::Restricted,
            Category::Warning,
            Category::Other,
        ]
    );

    for feature in &batch.features {
        assert_eq!(feature.upper.normalized, "FL180");
        assert_eq!(feature.lower.normalized, "500 AGL");
        assert_eq!(feature.boundary.len(), 5);
        assert_eq!(feature.boundary.first(), feature.boundary.last());
    }
}

#[test]
fn parallel_decoding_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());

    let sequential = decode_directory(dir.path(), 1).unwrap();
    let parallel = decode_directory(dir.path(), 4).unwrap();

    assert_eq!(parallel.features, sequential.features);
    assert_eq!(parallel.failures.len(), 1);
    assert_eq!(parallel.failures[0].path, sequential.failures[0].path);
    assert_eq!(parallel.rejected, sequential.rejected);
    assert_eq!(parallel.summary(), sequential.summary());
}

#[test]
fn rejected_documents_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("empty.xml"),
        r#"<saa:SaaSubscriberFile xmlns:saa="urn:us:gov:dot:faa:aim:saa"/>"#,
    )
    .unwrap();
    fs::write(dir.path().join("readme.txt"), "not an SAA document").unwrap();

    let batch = decode_directory(dir.path(), 2).unwrap();

    assert_eq!(batch.files, 1);
    assert!(batch.features.is_empty());
    assert!(batch.failures.is_empty());
    assert_eq!(
        batch.rejected,
        vec![(dir.path().join("empty.xml"), Rejection::MissingAirspace)]
    );
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(decode_directory(&dir.path().join("missing"), 1).is_err());
}

#[test]
fn writes_geojson() {
    let dir = tempfile::tempdir().unwrap();
    write_documents(dir.path());
    let output = dir
        .path()
        .join("Additional_Data/Shape_Files/SUA_Airspace.geojson");

    let batch = convert_saa_directory(dir.path(), &output, 2).unwrap();
    assert_eq!(batch.features.len(), 9);

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
    let features = json["features"].as_array().unwrap();

    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(features.len(), 9);
    assert_eq!(features[0]["properties"]["DESIGNATOR"], "MISTY 1 MOA");
    assert_eq!(features[0]["properties"]["TYPE"], "MOA");
    assert_eq!(features[1]["properties"]["LOWER_VAL"], "500 AGL");
    assert_eq!(features[1]["properties"]["LOWER_REF"], "SFC");
    assert_eq!(features[1]["geometry"]["type"], "Polygon");
}
