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

use crate::errors::DumpError;
use std::io::{ErrorKind, Read, Write};

/// Radix used to render bytes and offsets.
///
/// The base also fixes the row geometry: a row covers `width()` bytes,
/// one per column, and every byte cell is `cell()` characters wide
/// (digits plus one trailing space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    /// 16 bytes per row, two hex digits per cell.
    #[default]
    Hex,
    /// 8 bytes per row, three octal digits per cell.
    Octal,
}

impl Base {
    /// Bytes covered by one row.
    pub const fn width(self) -> usize {
        match self {
            Base::Hex => 16,
            Base::Octal => 8,
        }
    }

    /// Width of one byte cell, trailing space included.
    pub const fn cell(self) -> usize {
        match self {
            Base::Hex => 3,
            Base::Octal => 4,
        }
    }
}

/// Output mode, fixed for the duration of one dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpOptions {
    pub base: Base,
    /// Render row offsets in decimal instead of the dump base.
    pub decimal_offsets: bool,
}

/// Dumps `reader` into `writer`: a column-index header line, then one
/// line per row of up to [`Base::width`] bytes showing the row offset,
/// the encoded bytes and a printable-character side panel.
///
/// An empty stream produces the header only. When the stream length is
/// not a multiple of the row width, the final row keeps its byte field
/// padded to full width for column alignment while the side panel stays
/// as short as the row.
pub fn dump_stream<R: Read, W: Write>(
    mut reader: R,
    writer: &mut W,
    options: DumpOptions,
) -> Result<(), DumpError> {
    let width = options.base.width();

    write_header(writer, options.base)?;

    let mut row = vec![0u8; width];
    let mut row_index = 0usize;
    loop {
        let filled = read_row(&mut reader, &mut row)?;
        if filled == 0 {
            break;
        }
        write_row(writer, options, row_index * width, &row[..filled])?;
        row_index += 1;
    }

    Ok(())
}

fn write_header<W: Write>(writer: &mut W, base: Base) -> Result<(), DumpError> {
    write!(writer, "{:11}", 0)?;
    for column in 1..base.width() {
        match base {
            Base::Hex => write!(writer, "{column:3x}")?,
            Base::Octal => write!(writer, "{column:4o}")?,
        }
    }

    // packed column legend for the side panel
    write!(writer, "{:pad$}", "", pad = base.cell())?;
    for column in 0..base.width() {
        write!(writer, "{column:x}")?;
    }
    writeln!(writer)?;

    Ok(())
}

fn write_row<W: Write>(
    writer: &mut W,
    options: DumpOptions,
    offset: usize,
    row: &[u8],
) -> Result<(), DumpError> {
    if options.decimal_offsets {
        write!(writer, "{offset:8}: ")?;
    } else {
        match options.base {
            Base::Hex => write!(writer, "{offset:8x}: ")?,
            Base::Octal => write!(writer, "{offset:8o}: ")?,
        }
    }

    for column in 0..options.base.width() {
        match row.get(column) {
            Some(byte) => match options.base {
                Base::Hex => write!(writer, "{byte:02x} ")?,
                Base::Octal => write!(writer, "{byte:03o} ")?,
            },
            None => write!(writer, "{:pad$}", "", pad = options.base.cell())?,
        }
    }

    write!(writer, " ")?;
    for &byte in row {
        if (32..127).contains(&byte) {
            write!(writer, "{}", byte as char)?;
        } else {
            write!(writer, ".")?;
        }
    }
    writeln!(writer)?;

    Ok(())
}

/// Fills `row` from `reader`, tolerating short reads. The result is
/// smaller than `row.len()` only at end of stream.
fn read_row<R: Read>(reader: &mut R, row: &mut [u8]) -> Result<usize, DumpError> {
    let mut filled = 0;
    while filled < row.len() {
        match reader.read(&mut row[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
