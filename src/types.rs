use std::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_longlong, c_short, c_uint, c_ulong,
    c_ulonglong, c_ushort,
};
use std::fmt::Formatter;
use std::io::{self, Write};
use std::mem::{align_of, size_of};

use num_traits::{Bounded, PrimInt};
use tracing::debug;

use crate::machine;
use crate::table::{self, Column, Table};

const TYPE_TABLE: Table = Table::new(&[
    Column::left(20),
    Column::right(6),
    Column::right(6),
    Column::right(6),
    Column::right(machine::LIMIT_TEXT_WIDTH),
    Column::right(machine::LIMIT_TEXT_WIDTH),
    Column::right(25),
    Column::right(25),
]);

/// One end of a type's value range.
#[derive(Debug, Clone, PartialEq)]
pub enum Limit {
    /// `width` is the number of bits used when rendering the value in hex.
    Integer { value: i128, width: u32 },
    Float { text: String, bits: u128 },
}

impl Limit {
    fn integer<T: PrimInt>(value: T) -> Self {
        Limit::Integer {
            // every C integer type fits into i128
            value: value.to_i128().unwrap_or_default(),
            width: (size_of::<T>() * 8) as u32,
        }
    }

    /// Hex of the stored bit pattern, without padding.
    pub fn hex(&self) -> String {
        match self {
            Limit::Integer { value, width } => {
                let mask = if *width >= 128 {
                    u128::MAX
                } else {
                    (1u128 << width) - 1
                };
                format!("{:x}", (*value as u128) & mask)
            }
            Limit::Float { bits, .. } => format!("{:x}", bits),
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let s = match self {
            Limit::Integer { value, .. } => value.to_string(),
            Limit::Float { text, .. } => text.clone(),
        };
        if let Some(width) = f.width() {
            write!(f, "{:>1$}", s, width)
        } else {
            write!(f, "{}", s)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub min: Limit,
    pub max: Limit,
}

impl TypeInfo {
    pub fn bits(&self) -> usize {
        self.size * 8
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.min, Limit::Integer { .. })
    }
}

/**
 * `char` limits are widened to `int` before printing so that they show up as
 * numbers; the hex columns then carry the `int`-sized bit pattern.
 */
fn describe_char() -> TypeInfo {
    let width = (size_of::<c_int>() * 8) as u32;
    TypeInfo {
        name: "char",
        size: size_of::<c_char>(),
        align: align_of::<c_char>(),
        min: Limit::Integer {
            value: c_char::MIN as c_int as i128,
            width,
        },
        max: Limit::Integer {
            value: c_char::MAX as c_int as i128,
            width,
        },
    }
}

fn describe_int<T: PrimInt + Bounded>(name: &'static str) -> TypeInfo {
    TypeInfo {
        name,
        size: size_of::<T>(),
        align: align_of::<T>(),
        min: Limit::integer(T::min_value()),
        max: Limit::integer(T::max_value()),
    }
}

trait FloatBits {
    fn lowest() -> Self;
    fn highest() -> Self;
    fn stored_bits(self) -> u128;
}

impl FloatBits for c_float {
    fn lowest() -> Self {
        c_float::MIN
    }
    fn highest() -> Self {
        c_float::MAX
    }
    fn stored_bits(self) -> u128 {
        self.to_bits() as u128
    }
}

impl FloatBits for c_double {
    fn lowest() -> Self {
        c_double::MIN
    }
    fn highest() -> Self {
        c_double::MAX
    }
    fn stored_bits(self) -> u128 {
        self.to_bits() as u128
    }
}

fn describe_float<T: FloatBits + std::fmt::LowerExp + Copy>(name: &'static str) -> TypeInfo {
    let float_limit = |v: T| Limit::Float {
        text: format!("{:e}", v),
        bits: v.stored_bits(),
    };
    TypeInfo {
        name,
        size: size_of::<T>(),
        align: align_of::<T>(),
        min: float_limit(T::lowest()),
        max: float_limit(T::highest()),
    }
}

fn describe_long_double() -> TypeInfo {
    let ld = &machine::LONG_DOUBLE;
    TypeInfo {
        name: "long double",
        size: ld.size,
        align: ld.align,
        min: Limit::Float {
            text: ld.min_text.to_string(),
            bits: ld.min_bits,
        },
        max: Limit::Float {
            text: ld.max_text.to_string(),
            bits: ld.max_bits,
        },
    }
}

/// Reported types, split into the groups printed between blank lines.
pub fn collect() -> Vec<Vec<TypeInfo>> {
    vec![
        vec![
            describe_char(),
            describe_int::<c_short>("short"),
            describe_int::<c_int>("int"),
            describe_int::<c_long>("long"),
            describe_int::<c_longlong>("long long"),
        ],
        vec![
            describe_int::<c_ushort>("unsigned short"),
            describe_int::<c_uint>("unsigned int"),
            describe_int::<c_ulong>("unsigned long"),
            describe_int::<c_ulonglong>("unsigned long long"),
        ],
        vec![
            describe_float::<c_float>("float"),
            describe_float::<c_double>("double"),
            describe_long_double(),
        ],
    ]
}

fn write_type<W: Write>(out: &mut W, t: &TypeInfo) -> io::Result<()> {
    TYPE_TABLE.write_row(
        out,
        &[
            &t.name,
            &t.size,
            &t.bits(),
            &t.align,
            &t.min,
            &t.max,
            &t.min.hex(),
            &t.max.hex(),
        ],
    )
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    let groups = collect();
    debug!(
        "reporting {} types, {} of them integer",
        groups.iter().map(|g| g.len()).sum::<usize>(),
        groups.iter().flatten().filter(|t| t.is_integer()).count()
    );

    table::write_heading(out, "Variable size checks")?;
    TYPE_TABLE.write_row(
        out,
        &[
            &"Name",
            &"Bytes",
            &"Bits",
            &"Align",
            &"Min",
            &"Max",
            &"Min (hex)",
            &"Max (hex)",
        ],
    )?;

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for t in group {
            write_type(out, t)?;
        }
    }
    Ok(())
}
