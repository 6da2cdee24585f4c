use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;

const SEPARATOR: &str =
    "******************************************************************************";

fn run_probe() -> String {
    let output = Command::cargo_bin("hostprobe").unwrap().unwrap();
    output.clone().assert().success().code(0);
    String::from_utf8(output.stdout).unwrap()
}

/// Splits the output into (heading, body lines) pairs.
fn sections(text: &str) -> Vec<(String, Vec<String>)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut result: Vec<(String, Vec<String>)> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].is_empty() && i + 2 < lines.len() && lines[i + 2] == SEPARATOR {
            result.push((lines[i + 1].to_string(), Vec::new()));
            i += 3;
            continue;
        }
        result
            .last_mut()
            .expect("output must start with a heading")
            .1
            .push(lines[i].to_string());
        i += 1;
    }
    result
}

#[test]
fn test_three_sections_in_order() {
    let text = run_probe();
    let s = sections(&text);
    let headings: Vec<&str> = s.iter().map(|(h, _)| h.as_str()).collect();
    assert_eq!(
        headings,
        vec![
            "Predefined compiler identifiers",
            "Address of first variable in function calls",
            "Variable size checks",
        ]
    );
    assert_eq!(SEPARATOR.len(), 78);
}

#[test]
fn test_edition_reported() {
    let text = run_probe();
    let s = sections(&text);
    let row = &s[0].1[0];
    let mut fields = row.split_whitespace();
    assert_eq!(fields.next(), Some("RUST_EDITION"));
    assert_eq!(fields.next(), Some("2021"));
}

#[test]
fn test_char_row_first() {
    let text = run_probe();
    let s = sections(&text);
    let table = &s[2].1;
    assert!(table[0].starts_with("Name"));
    let fields: Vec<&str> = table[1].split_whitespace().collect();
    assert_eq!(fields[0], "char");
    assert_eq!(fields[1], "1");
    assert_eq!(fields[2], "8");
}

#[test]
fn test_arguments_are_ignored() {
    let plain = run_probe();
    let output = Command::cargo_bin("hostprobe")
        .unwrap()
        .arg("--help")
        .unwrap();
    output.clone().assert().success();
    let with_args = String::from_utf8(output.stdout).unwrap();
    assert_eq!(sections(&plain)[2], sections(&with_args)[2]);
}

#[test]
fn test_repeated_runs_agree() {
    let first = sections(&run_probe());
    let second = sections(&run_probe());
    assert_eq!(first[0], second[0]);
    assert_eq!(first[2], second[2]);
    // addresses may move between runs, the verdict may not
    assert_eq!(first[1].1[0], second[1].1[0]);
}
