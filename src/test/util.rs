use std::io;

pub fn render<F>(report: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    report(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Lines of a rendered report with the heading (blank line, title, separator) removed.
pub fn body_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.len() >= 3);
    assert_eq!(lines[0], "");
    assert_eq!(lines[2], "*".repeat(78));
    lines[3..].to_vec()
}
