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

/// Declares a [`Schema`](crate::Schema) as a table of `name: start..end`
/// column ranges.
///
/// The ranges are checked when the constant is evaluated, so a range that
/// exceeds the record length fails to compile.
macro_rules! schema {
    ($name:literal, $length:expr, {
        $($field:ident: $start:literal..$end:literal),+ $(,)?
    }) => {
        $crate::Schema::new(
            $name,
            $length,
            &[$($crate::Field::new(stringify!($field), $start, $end)),+],
        )
    };
}
