mod machine;
mod macros;
mod stack;
mod table;
mod types;

#[cfg(test)]
mod test;

use std::io::{self, Write};
use std::process::exit;

use tracing::error;
use tracing_subscriber::EnvFilter;

fn run<W: Write>(out: &mut W) -> io::Result<()> {
    macros::write_report(out)?;
    stack::write_report(out)?;
    types::write_report(out)?;
    out.flush()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&mut out) {
        error!("cannot write the report: {}", e);
        exit(1);
    }
}
