use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

struct RustcVersion {
    major: u32,
    minor: u32,
    patch: u32,
    commit_date: u32,
}

fn main() {
    println!("cargo::rerun-if-changed=Cargo.toml");
    println!("cargo::rerun-if-env-changed=RUSTC");
    println!("cargo::rustc-check-cfg=cfg(rustc_version_info)");

    println!("cargo::rustc-env=HOSTPROBE_EDITION={}", manifest_edition());

    if let Some(v) = rustc_version() {
        println!("cargo::rustc-cfg=rustc_version_info");
        println!("cargo::rustc-env=HOSTPROBE_RUSTC_MAJOR={}", v.major);
        println!("cargo::rustc-env=HOSTPROBE_RUSTC_MINOR={}", v.minor);
        println!("cargo::rustc-env=HOSTPROBE_RUSTC_PATCH={}", v.patch);
        println!(
            "cargo::rustc-env=HOSTPROBE_RUSTC_COMMIT_DATE={}",
            v.commit_date
        );
    }
}

/// Cargo does not pass the edition to build scripts, so read it from the manifest.
fn manifest_edition() -> u32 {
    let mut path = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    path.push("Cargo.toml");
    let manifest = fs::read_to_string(path).unwrap();

    let mut in_package = false;
    for line in manifest.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_package = line == "[package]";
            continue;
        }
        if !in_package {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "edition" {
                return parse_edition(value).unwrap_or(2015);
            }
        }
    }
    2015
}

/// Parses the value of an `edition = "2021" # comment` line.
pub(crate) fn parse_edition(value: &str) -> Option<u32> {
    let value = value.trim();
    let value = value.strip_prefix('"').or_else(|| value.strip_prefix('\''))?;
    let end = value.find(|c: char| c == '"' || c == '\'')?;
    value[..end].trim().parse().ok()
}

fn rustc_version() -> Option<RustcVersion> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;

    let mut release = None;
    let mut commit_date = 0;
    for line in text.lines() {
        if let Some(s) = line.strip_prefix("release: ") {
            release = Some(s.trim().to_string());
        } else if let Some(s) = line.strip_prefix("commit-date: ") {
            // "unknown" on some distribution builds
            commit_date = s.trim().replace('-', "").parse().unwrap_or(0);
        }
    }

    // "1.80.1", "1.83.0-nightly", "1.82.0-beta.3"
    let release = release?;
    let numeric = release.split('-').next()?;
    let mut parts = numeric.split('.').map(|p| p.parse::<u32>());
    let major = parts.next()?.ok()?;
    let minor = parts.next()?.ok()?;
    let patch = parts.next().and_then(|p| p.ok()).unwrap_or(0);

    Some(RustcVersion {
        major,
        minor,
        patch,
        commit_date,
    })
}
