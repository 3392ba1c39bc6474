// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

//! AIXM (Aeronautical Information Exchange Model) special use airspace
//! decoder
//!
//! This crate reads the AIXM 5.0 documents of the FAA Special Activity
//! Airspace (SAA) distribution, one airspace per document. Each document is
//! decoded into an [`AirspaceFeature`] with a closed boundary ring, a
//! [`Category`] and normalized vertical limits.
//!
//! A document that is well-formed but holds no usable airspace is not an
//! error but [`Decoded::Rejected`]. Only documents that can't be read as XML
//! fail with an [`Error`].
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("R-2508.xml")?;
//!
//! match aixm::decode_bytes(&data)? {
//!     aixm::Decoded::Accepted(feature) => {
//!         println!(
//!             "{} {} {}-{}",
//!             feature.category,
//!             feature.designator,
//!             feature.lower.normalized,
//!             feature.upper.normalized,
//!         );
//!     }
//!     aixm::Decoded::Rejected(reason) => println!("skipped: {reason}"),
//! }
//! # Ok(())
//! # }
//! ```

mod altitude;
mod category;
mod error;
mod features;
mod parser;
pub mod xml;

pub use altitude::{normalize, Altitude};
pub use category::{by_designator, by_sua_type, classify, Category, Resolver, RESOLVERS};
pub use error::Error;
pub use features::{AirspaceFeature, VerticalLimit};
pub use parser::{decode, decode_bytes, Decoded, Rejection};
