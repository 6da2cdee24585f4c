use std::io::{self, Write};

use static_assertions::const_assert;
use tracing::debug;

use crate::table::{self, Column, Table};

const MACRO_TABLE: Table = Table::new(&[Column::right(20), Column::right(15)]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroValue {
    pub name: &'static str,
    pub value: u64,
}

/// Edition the crate was compiled under, as read by the build script.
pub const EDITION: u64 = parse_decimal(env!("HOSTPROBE_EDITION"));

const_assert!(EDITION >= 2015);

#[cfg(rustc_version_info)]
mod toolchain {
    use super::{parse_decimal, MacroValue};

    pub const MAJOR: u64 = parse_decimal(env!("HOSTPROBE_RUSTC_MAJOR"));
    pub const MINOR: u64 = parse_decimal(env!("HOSTPROBE_RUSTC_MINOR"));
    pub const PATCH: u64 = parse_decimal(env!("HOSTPROBE_RUSTC_PATCH"));
    pub const FULL_VER: u64 = MAJOR * 1_000_000 + MINOR * 1_000 + PATCH;
    pub const COMMIT_DATE: u64 = parse_decimal(env!("HOSTPROBE_RUSTC_COMMIT_DATE"));

    pub const MACROS: &[MacroValue] = &[
        MacroValue {
            name: "RUSTC_VERSION_MAJOR",
            value: MAJOR,
        },
        MacroValue {
            name: "RUSTC_VERSION_MINOR",
            value: MINOR,
        },
        MacroValue {
            name: "RUSTC_VERSION_PATCH",
            value: PATCH,
        },
        MacroValue {
            name: "RUSTC_FULL_VER",
            value: FULL_VER,
        },
        MacroValue {
            name: "RUSTC_COMMIT_DATE",
            value: COMMIT_DATE,
        },
    ];
}

#[cfg(not(rustc_version_info))]
mod toolchain {
    use super::MacroValue;

    pub const MACROS: &[MacroValue] = &[];
}

/// Parses an unsigned decimal at compile time. Non-digit characters are skipped.
pub(crate) const fn parse_decimal(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut result = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_digit() {
            result = result * 10 + (b - b'0') as u64;
        }
        i += 1;
    }
    result
}

pub fn collect() -> Vec<MacroValue> {
    let mut result = vec![MacroValue {
        name: "RUST_EDITION",
        value: EDITION,
    }];
    result.extend_from_slice(toolchain::MACROS);
    result
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    let macros = collect();
    debug!("reporting {} predefined identifiers", macros.len());

    table::write_heading(out, "Predefined compiler identifiers")?;
    for m in &macros {
        MACRO_TABLE.write_row(out, &[&m.name, &m.value])?;
    }
    Ok(())
}
