// rls — a Unix directory lister

use std::process;

fn main() {
    if let Err(e) = rls::run() {
        eprintln!("{}: {}", rls::console::PROGRAM_NAME, e);
        process::exit(1);
    }
}
