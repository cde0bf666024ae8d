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

//! Byte-stream dump formatting.
//!
//! Renders any `Read` source as fixed-width text rows, in hexadecimal
//! (16 bytes per row) or octal (8 bytes per row): a column-index header,
//! then one line per row with the row offset, the encoded bytes and a
//! printable-character side panel. The `hod-cli` binary wires the
//! formatter to files and the standard streams.

pub mod dump;
pub mod errors;

pub use dump::{dump_stream, Base, DumpOptions};
pub use errors::DumpError;
