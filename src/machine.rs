use std::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_longlong, c_short, c_uint, c_ulong,
    c_ulonglong, c_ushort,
};
use std::mem::size_of;

use static_assertions::const_assert;

pub const CHAR_SIZE: usize = size_of::<c_char>();
pub const SHORT_SIZE: usize = size_of::<c_short>();
pub const INT_SIZE: usize = size_of::<c_int>();
pub const LONG_SIZE: usize = size_of::<c_long>();
pub const LLONG_SIZE: usize = size_of::<c_longlong>();

const_assert!(CHAR_SIZE == 1);
const_assert!(SHORT_SIZE >= 2);
const_assert!(INT_SIZE >= 2);
const_assert!(LONG_SIZE >= 4);
const_assert!(LLONG_SIZE >= 8);

const_assert!(SHORT_SIZE <= INT_SIZE);
const_assert!(INT_SIZE <= LONG_SIZE);
const_assert!(LONG_SIZE <= LLONG_SIZE);

const_assert!(size_of::<c_ushort>() == SHORT_SIZE);
const_assert!(size_of::<c_uint>() == INT_SIZE);
const_assert!(size_of::<c_ulong>() == LONG_SIZE);
const_assert!(size_of::<c_ulonglong>() == LLONG_SIZE);

const_assert!(size_of::<c_float>() == 4);
const_assert!(size_of::<c_double>() == 8);

/// Layout and limits of the target's `long double`, which has no Rust counterpart.
///
/// Limits are kept as text plus the raw stored bits since neither the x87
/// extended format nor binary128 can be computed with on stable Rust. The
/// text is rounded to six significant digits to fit a table cell.
pub struct LongDouble {
    pub size: usize,
    pub align: usize,
    pub min_text: &'static str,
    pub max_text: &'static str,
    pub min_bits: u128,
    pub max_bits: u128,
}

// x87 80-bit extended precision, padded to 16 bytes.
#[cfg(all(target_arch = "x86_64", not(target_env = "msvc")))]
pub const LONG_DOUBLE: LongDouble = LongDouble {
    size: 16,
    align: 16,
    min_text: "-1.18973e4932",
    max_text: "1.18973e4932",
    min_bits: 0xfffe_ffff_ffff_ffff_ffff,
    max_bits: 0x7ffe_ffff_ffff_ffff_ffff,
};

// x87 80-bit extended precision, padded to 12 bytes by the i386 SysV ABI.
#[cfg(all(target_arch = "x86", not(target_env = "msvc")))]
pub const LONG_DOUBLE: LongDouble = LongDouble {
    size: 12,
    align: 4,
    min_text: "-1.18973e4932",
    max_text: "1.18973e4932",
    min_bits: 0xfffe_ffff_ffff_ffff_ffff,
    max_bits: 0x7ffe_ffff_ffff_ffff_ffff,
};

// IEEE binary128.
#[cfg(all(
    any(
        target_arch = "aarch64",
        target_arch = "riscv64",
        target_arch = "s390x",
        target_arch = "loongarch64"
    ),
    not(target_vendor = "apple"),
    not(target_os = "windows")
))]
pub const LONG_DOUBLE: LongDouble = LongDouble {
    size: 16,
    align: 16,
    min_text: "-1.18973e4932",
    max_text: "1.18973e4932",
    min_bits: 0xfffe_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
    max_bits: 0x7ffe_ffff_ffff_ffff_ffff_ffff_ffff_ffff,
};

// Everywhere else `long double` is an alias of `double`.
#[cfg(not(any(
    all(any(target_arch = "x86_64", target_arch = "x86"), not(target_env = "msvc")),
    all(
        any(
            target_arch = "aarch64",
            target_arch = "riscv64",
            target_arch = "s390x",
            target_arch = "loongarch64"
        ),
        not(target_vendor = "apple"),
        not(target_os = "windows")
    )
)))]
pub const LONG_DOUBLE: LongDouble = LongDouble {
    size: 8,
    align: std::mem::align_of::<c_double>(),
    min_text: "-1.7976931348623157e308",
    max_text: "1.7976931348623157e308",
    min_bits: 0xffef_ffff_ffff_ffff,
    max_bits: 0x7fef_ffff_ffff_ffff,
};

const_assert!(LONG_DOUBLE.size >= size_of::<c_double>());
const_assert!(LONG_DOUBLE.size % LONG_DOUBLE.align == 0);

/// Width of the Min and Max cells of the type table.
pub const LIMIT_TEXT_WIDTH: usize = 25;

const_assert!(LONG_DOUBLE.min_text.len() < LIMIT_TEXT_WIDTH);
const_assert!(LONG_DOUBLE.max_text.len() < LIMIT_TEXT_WIDTH);
