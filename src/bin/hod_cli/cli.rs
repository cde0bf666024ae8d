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

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hod-cli",
    version,
    about = "dump bytes in hex or octal, with a printable side panel"
)]
pub struct Cli {
    /// show offsets in decimal (default: the dump base)
    #[arg(short = 'd', long = "decimal-offsets", action = ArgAction::SetTrue)]
    pub decimal_offsets: bool,

    /// dump in octal, 8 bytes per row (default: hex, 16 per row)
    #[arg(short = 'o', long = "octal", action = ArgAction::SetTrue)]
    pub octal: bool,

    /// write the dump to a file instead of stdout
    #[arg(long = "output")]
    pub output: Option<PathBuf>,

    /// log what is being read and written
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// file to dump; omit to read piped standard input
    pub input: Option<PathBuf>,
}
