// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
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

use thiserror::Error;

/// The dump error type.
///
/// Any byte sequence is dumpable, so the only failure mode is the
/// stream itself: a read that fails for a reason other than clean
/// end-of-stream, or a write the output sink rejects.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Reading the input or writing the dump failed.
    #[error("i/o failure while dumping: {0}")]
    Io(#[from] std::io::Error),
}
