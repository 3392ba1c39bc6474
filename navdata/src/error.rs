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

use std::error;
use std::fmt;
use std::io;

/// A failure that stops a conversion run or a single input file.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing failed.
    Io(io::Error),
    /// An SAA document is not well-formed XML.
    Aixm(aixm::Error),
    /// The search pattern for input files is invalid.
    Pattern(glob::PatternError),
    /// A directory entry could not be read while searching input files.
    Glob(glob::GlobError),
    /// The output could not be serialized.
    Json(serde_json::Error),
    /// A decoding task panicked or was cancelled.
    Join(tokio::task::JoinError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Aixm(e) => write!(f, "malformed SAA document: {e}"),
            Self::Pattern(e) => write!(f, "invalid file pattern: {e}"),
            Self::Glob(e) => write!(f, "can't read input file: {e}"),
            Self::Json(e) => write!(f, "can't write JSON: {e}"),
            Self::Join(e) => write!(f, "decoding task failed: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Aixm(e) => Some(e),
            Self::Pattern(e) => Some(e),
            Self::Glob(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Join(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<aixm::Error> for Error {
    fn from(e: aixm::Error) -> Self {
        Self::Aixm(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Self {
        Self::Glob(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Join(e)
    }
}
