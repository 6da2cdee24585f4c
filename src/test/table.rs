use crate::table::{write_heading, Column, Table, SEPARATOR_WIDTH};

use super::util::*;

const TEST_TABLE: Table = Table::new(&[Column::left(6), Column::right(4), Column::right(8)]);

#[test]
fn test_heading() {
    let text = render(|out| write_heading(out, "Some heading"));
    assert_eq!(text, format!("\nSome heading\n{}\n", "*".repeat(SEPARATOR_WIDTH)));
}

#[test]
fn test_row_alignment() {
    let text = render(|out| TEST_TABLE.write_row(out, &[&"ab", &12, &"x"]));
    assert_eq!(text, "ab      12       x\n");
}

#[test]
fn test_row_overflow() {
    let text = render(|out| TEST_TABLE.write_row(out, &[&"abcdefgh", &123456, &"x"]));
    assert_eq!(text, "abcdefgh 123456       x\n");
}

#[test]
fn test_row_exact_fit_is_separated() {
    let text = render(|out| TEST_TABLE.write_row(out, &[&"abcdef", &1234, &"12345678"]));
    assert_eq!(text, "abcdef 1234 12345678\n");
    assert_eq!(text.split_whitespace().count(), 3);
}
