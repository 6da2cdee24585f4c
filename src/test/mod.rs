#[allow(dead_code)]
#[path = "../../build.rs"]
mod build_script;

mod driver;
mod table;
mod util;
