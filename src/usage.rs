// usage.rs — Help screen and RLS configuration help

use crate::config::{Config, DEFAULT_COLUMN_COUNT, DEFAULT_PADDING, RLS_ENV_VAR_NAME};
use crate::console::Console;





////////////////////////////////////////////////////////////////////////////////

pub const VERSION_STRING:  &str = env!("RLS_VERSION_STRING");
pub const VERSION_YEAR:    &str = env!("RLS_VERSION_YEAR");
pub const BUILD_TIMESTAMP: &str = env!("RLS_BUILD_TIMESTAMP");





////////////////////////////////////////////////////////////////////////////////
//
//  display_usage
//
//  Version banner, switches, and the RLS variable format.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_usage(console: &mut Console) {
    console.puts(&format!("rls {} (built {}), {}", VERSION_STRING, BUILD_TIMESTAMP, VERSION_YEAR));
    console.puts("");
    console.puts("Usage: rls [-l] [-a] [-h] [DIRECTORY]");
    console.puts("");
    console.puts("  -l, --long    One line per entry: type, permissions, links, owner,");
    console.puts("                group, size, modification time, name");
    console.puts("  -a, --all     Include entries whose names begin with '.'");
    console.puts("  -h, --help    Show this help");
    console.puts("");
    console.puts("  A trailing '-' turns a switch off (-l-), overriding the environment.");
    console.puts("");
    display_env_var_help(console);
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_env_var_help
//
//  Describe the RLS variable format and defaults.
//
////////////////////////////////////////////////////////////////////////////////

fn display_env_var_help(console: &mut Console) {
    console.puts(&format!("Set the {} environment variable to change defaults, e.g.:", RLS_ENV_VAR_NAME));
    console.puts(&format!("  {}=l;a;columns=4;padding=1", RLS_ENV_VAR_NAME));
    console.puts("");
    console.puts("  l, long       Long format by default (l- to disable)");
    console.puts("  a, all        Show hidden entries by default (a- to disable)");
    console.puts(&format!("  columns=N     Short-format column count (default {})", DEFAULT_COLUMN_COUNT));
    console.puts(&format!("  padding=N     Spaces after each column's longest name (default {})", DEFAULT_PADDING));
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_env_var_issues
//
//  One warning per rejected RLS entry.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_env_var_issues(console: &mut Console, config: &Config) {
    if !config.has_issues() {
        return;
    }

    for issue in &config.errors {
        console.report_warning(&format!(
            "ignoring {} entry '{}': {} ('{}')",
            RLS_ENV_VAR_NAME, issue.entry, issue.message, issue.invalid_text,
        ));
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    #[test]
    fn usage_lists_switches() {
        let mut console = Console::with_writers(Box::new(io::sink()), Box::new(io::sink()));
        display_usage(&mut console);

        let text = console.contents();
        assert!(text.starts_with("rls "));
        assert!(text.contains("--long"));
        assert!(text.contains("--all"));
        assert!(text.contains("columns=N"));
    }

    #[test]
    fn env_issues_are_warnings_not_errors() {
        let mut config = Config::new();
        config.errors.push(crate::config::ErrorInfo {
            message:      "bad".into(),
            entry:        "x".into(),
            invalid_text: "x".into(),
        });

        let mut console = Console::with_writers(Box::new(io::sink()), Box::new(io::sink()));
        display_env_var_issues(&mut console, &config);
        assert_eq!(console.error_count(), 0);
    }
}
