/*!
 * Calls functions inside of functions to determine how addresses change with
 * respect to function calls.
 *
 * The measurement is best-effort: nothing stops the optimizer from moving or
 * merging the probed locals, and a wrong answer is not detected.
 */
use std::fmt::Formatter;
use std::io::{self, Write};

use tracing::debug;

use crate::table;

/// Address of the first local variable in each function of the call chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackAddresses {
    pub top_level: usize,
    pub mid_level: usize,
    pub low_level: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Down,
    Up,
}

impl StackAddresses {
    /// Only the two shallowest frames are compared.
    pub fn growth(&self) -> Growth {
        if self.top_level > self.mid_level {
            Growth::Down
        } else {
            Growth::Up
        }
    }
}

impl std::fmt::Display for Growth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Growth::Down => f.write_str("Stack grows down"),
            Growth::Up => f.write_str("Stack grows up"),
        }
    }
}

fn address_of<T>(var: &T) -> usize {
    var as *const T as usize
}

#[inline(never)]
fn low_level() -> usize {
    let empty_var: i32 = 0;
    address_of(&empty_var)
}

#[inline(never)]
fn mid_level() -> (usize, usize) {
    let empty_var: i32 = 0;
    let mid = address_of(&empty_var);
    (mid, low_level())
}

#[inline(never)]
fn top_level() -> StackAddresses {
    let empty_var: i32 = 0;
    let top_level = address_of(&empty_var);
    let (mid_level, low_level) = mid_level();
    StackAddresses {
        top_level,
        mid_level,
        low_level,
    }
}

pub fn probe() -> StackAddresses {
    let addresses = top_level();
    debug!(
        "stack probe: top={:#x} mid={:#x} low={:#x}",
        addresses.top_level, addresses.mid_level, addresses.low_level
    );
    addresses
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    let addresses = probe();
    let growth = addresses.growth();
    debug!("stack growth: {:?}", growth);

    table::write_heading(out, "Address of first variable in function calls")?;
    writeln!(out, "{}", growth)?;
    writeln!(out, "{:x}", addresses.top_level)?;
    writeln!(out, "{:x}", addresses.mid_level)?;
    writeln!(out, "{:x}", addresses.low_level)
}
