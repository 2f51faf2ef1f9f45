// build.rs — Inject version and build timestamp.
//
// Env vars injected:
//   RLS_VERSION_STRING  e.g. "0.1.0"  (from Cargo.toml)
//   RLS_VERSION_YEAR    e.g. "2026"
//   RLS_BUILD_TIMESTAMP e.g. "Feb  9 2026 14:30"

use std::env;

use chrono::Local;





////////////////////////////////////////////////////////////////////////////////
//
//  build_timestamp
//
//  Returns the current local time formatted as a build timestamp string.
//
////////////////////////////////////////////////////////////////////////////////

fn build_timestamp() -> String {
    Local::now().format("%b %e %Y %H:%M").to_string()
}





////////////////////////////////////////////////////////////////////////////////
//
//  current_year
//
//  Returns the current year as a four-digit string.
//
////////////////////////////////////////////////////////////////////////////////

fn current_year() -> String {
    Local::now().format("%Y").to_string()
}





////////////////////////////////////////////////////////////////////////////////
//
//  emit_env_vars
//
//  Emits cargo:rustc-env directives for version, timestamp, and year.
//
////////////////////////////////////////////////////////////////////////////////

fn emit_env_vars(version: &str, timestamp: &str, year: &str) {
    println!("cargo:rustc-env=RLS_VERSION_STRING={version}");
    println!("cargo:rustc-env=RLS_VERSION_YEAR={year}");
    println!("cargo:rustc-env=RLS_BUILD_TIMESTAMP={timestamp}");
}





fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    println!("cargo:rerun-if-changed=Cargo.toml");

    emit_env_vars(&version, &build_timestamp(), &current_year());
}
