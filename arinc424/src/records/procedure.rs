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

use crate::record::RECORD_LENGTH;
use crate::Schema;

/// Airport SID/STAR/Approach primary record (ARINC 424 4.1.9).
///
/// Continuation records share this layout and are decoded as records of
/// their own.
pub const PROCEDURE_LEG: Schema = schema!("procedure leg", RECORD_LENGTH, {
    record_type: 0..1,
    customer_area_code: 1..4,
    section_code: 4..5,
    airport_identifier: 6..10,
    icao_code_1: 10..12,
    subsection_code: 12..13,
    sid_star_approach_identifier: 13..19,
    route_type: 19..20,
    transition_identifier: 20..25,
    sequence_number: 26..29,
    fix_identifier: 29..34,
    icao_code_2: 34..36,
    section_code_2: 36..37,
    subsection_code_2: 37..38,
    continuation_record_number: 38..39,
    waypoint_description_code: 39..43,
    turn_direction: 43..44,
    rnp: 44..47,
    path_and_termination: 47..49,
    turn_direction_valid: 49..50,
    recommended_navaid: 50..54,
    icao_code_3: 54..56,
    arc_radius: 56..62,
    theta: 62..66,
    rho: 66..70,
    magnetic_course: 70..74,
    route_distance_holding_distance_or_time: 74..78,
    recd_nav_section: 78..79,
    recd_nav_subsection: 79..80,
    reserved: 80..82,
    altitude_description: 82..83,
    atc_indicator: 83..84,
    altitude_1: 84..89,
    altitude_2: 89..94,
    transition_altitude: 94..99,
    speed_limit: 99..102,
    vertical_angle: 102..106,
    center_fix_or_taa_procedure_turn_indicator: 106..111,
    multiple_code_or_taa_sector_identifier: 111..112,
    icao_code_4: 112..114,
    section_code_3: 114..115,
    subsection_code_3: 115..116,
    gps_fms_indication: 116..117,
    speed_limit_description: 117..118,
    apch_route_qualifier_1: 118..119,
    apch_route_qualifier_2: 119..120,
    file_record_number: 123..128,
    cycle_date: 128..132,
});
