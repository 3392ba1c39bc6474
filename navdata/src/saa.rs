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

//! Decoding of a directory of SAA documents.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use aixm::{AirspaceFeature, Decoded, Rejection};
use futures::stream::{self, StreamExt};
use log::{debug, info, trace, warn};
use serde::Serialize;
use tokio::{runtime, task};

use crate::error::Error;

/// The outcome of decoding all documents of a directory.
#[derive(Debug, Default)]
pub struct SaaBatch {
    /// Number of documents found.
    pub files: usize,
    /// Decoded airspaces in the order of their files.
    pub features: Vec<AirspaceFeature>,
    /// Well-formed documents without usable airspace.
    pub rejected: Vec<(PathBuf, Rejection)>,
    /// Documents that could not be read or parsed.
    pub failures: Vec<Failure>,
}

impl SaaBatch {
    pub fn summary(&self) -> SaaSummary {
        SaaSummary {
            files: self.files,
            features: self.features.len(),
            rejected: self.rejected.len(),
            failed: self.failures.len(),
        }
    }
}

/// A document that failed to decode.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: Error,
}

/// Counts of an [`SaaBatch`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Serialize)]
pub struct SaaSummary {
    pub files: usize,
    pub features: usize,
    pub rejected: usize,
    pub failed: usize,
}

/// Decodes all `*.xml` files of a directory.
///
/// Files are processed in path order and so are the returned features. A
/// file that can't be read or isn't well-formed XML is reported as
/// [`Failure`] and the remaining files are still decoded. With `jobs`
/// greater than one, the files are decoded on that many threads.
///
/// # Errors
///
/// Fails if `dir` is not a readable directory or the worker runtime can't
/// be started.
pub fn decode_directory(dir: &Path, jobs: usize) -> Result<SaaBatch, Error> {
    if !fs::metadata(dir)?.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", dir.display()),
        )));
    }

    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.xml");

    let mut batch = SaaBatch::default();
    let mut paths = Vec::new();

    for entry in glob::glob(&pattern.to_string_lossy())? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => {
                warn!("can't read {}: {}", e.path().display(), e.error());
                batch.failures.push(Failure {
                    path: e.path().to_path_buf(),
                    error: Error::Glob(e),
                });
            }
        }
    }

    paths.sort();
    batch.files = paths.len() + batch.failures.len();
    info!("found {} SAA documents in {}", paths.len(), dir.display());

    let results = decode_files(&paths, jobs)?;

    for (path, result) in paths.into_iter().zip(results) {
        match result {
            Ok(Decoded::Accepted(feature)) => batch.features.push(feature),
            Ok(Decoded::Rejected(rejection)) => {
                debug!("skipping {}: {rejection}", path.display());
                batch.rejected.push((path, rejection));
            }
            Err(error) => {
                warn!("can't decode {}: {error}", path.display());
                batch.failures.push(Failure { path, error });
            }
        }
    }

    Ok(batch)
}

/// Decodes the SAA documents of `dir` and writes the airspaces to the
/// GeoJSON file `output`.
///
/// The output is written even if no airspace was found. Missing parent
/// directories of `output` are created.
pub fn convert_saa_directory(dir: &Path, output: &Path, jobs: usize) -> Result<SaaBatch, Error> {
    let batch = decode_directory(dir, jobs)?;

    let mut writer = BufWriter::new(crate::create_file(output)?);
    crate::geojson::write_geojson(&batch.features, &mut writer)?;
    writer.flush()?;

    Ok(batch)
}

/// Decodes the files and returns their results in the order of `paths`.
///
/// With more than one job the files are decoded as blocking tasks on a
/// runtime with `jobs` worker threads.
fn decode_files(paths: &[PathBuf], jobs: usize) -> Result<Vec<Result<Decoded, Error>>, Error> {
    let jobs = jobs.clamp(1, paths.len().max(1));

    if jobs == 1 {
        return Ok(paths.iter().map(|path| decode_file(path)).collect());
    }

    let runtime = runtime::Builder::new_multi_thread()
        .worker_threads(jobs)
        .max_blocking_threads(jobs)
        .build()?;

    let results = runtime.block_on(
        stream::iter(paths.iter().cloned())
            .map(|path| async move {
                match task::spawn_blocking(move || decode_file(&path)).await {
                    Ok(result) => result,
                    Err(e) => Err(Error::Join(e)),
                }
            })
            .buffered(jobs)
            .collect::<Vec<_>>(),
    );

    Ok(results)
}

fn decode_file(path: &Path) -> Result<Decoded, Error> {
    trace!("decoding {}", path.display());
    let data = fs::read(path)?;
    Ok(aixm::decode_bytes(&data)?)
}
