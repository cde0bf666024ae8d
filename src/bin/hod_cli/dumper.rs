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

use crate::cli::Cli;
use crate::utils::out_file;
use anyhow::{bail, Context, Result};
use hod::{dump_stream, Base, DumpOptions};
use log::info;
use std::fs::File;
use std::io::{BufReader, IsTerminal, Read};
use std::path::PathBuf;

pub fn process_dump(args: &Cli) -> Result<()> {
    let options = DumpOptions {
        base: if args.octal { Base::Octal } else { Base::Hex },
        decimal_offsets: args.decimal_offsets,
    };

    let reader = open_input(args.input.as_ref())?;

    info!("Dumping {} bytes per row", options.base.width());
    let mut writer = out_file(args.output.as_ref())?;
    dump_stream(reader, &mut writer, options).context("Failed to dump input")?;

    Ok(())
}

fn open_input(input: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    match input {
        Some(path) => {
            info!("Reading input file: {path:?}");
            let file =
                File::open(path).with_context(|| format!("Could not open file {path:?}"))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                bail!("No input file given and standard input is a terminal");
            }
            info!("Reading standard input");
            Ok(Box::new(BufReader::new(stdin)))
        }
    }
}
