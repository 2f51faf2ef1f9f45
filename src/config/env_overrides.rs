// env_overrides.rs — RLS environment variable parsing
//
// Format: ';'-separated entries.  A bare entry is a switch name ("l",
// "long", "a", "all"), optionally suffixed with '-' to disable it.
// "key = value" entries set layout constants ("columns", "padding").
// Bad entries are recorded in Config::errors and otherwise ignored.

use super::{Config, EnvironmentProvider, ErrorInfo, RLS_ENV_VAR_NAME};





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config — env var parsing methods
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_env_overrides
    //
    //  Parse RLS (if set) and apply every valid entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub(super) fn apply_env_overrides(&mut self, provider: &dyn EnvironmentProvider) {
        self.errors.clear();

        let env_value = match provider.get_env_var(RLS_ENV_VAR_NAME) {
            Some(v) => v,
            None => return,
        };

        for entry_raw in env_value.split(';') {
            let entry = entry_raw.trim();
            if entry.is_empty() {
                continue;
            }
            self.process_entry(entry);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process_entry
    //
    //  Route one trimmed entry to the switch or key/value handler.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn process_entry(&mut self, entry: &str) {
        if entry.starts_with('-') {
            let prefix_len = if entry.starts_with("--") { 2 } else { 1 };
            self.record_error("Switch prefixes (-, --) are not allowed in RLS", entry, &entry[..prefix_len]);
            return;
        }

        if !entry.contains('=') {
            self.process_switch_override(entry);
            return;
        }

        match parse_key_and_value(entry) {
            Some((key, value)) => self.process_layout_override(entry, key, value),
            None => self.record_error("Invalid entry format (expected key = value)", entry, entry),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process_switch_override
    //
    //  Look the entry up in SWITCH_MAPPINGS (case-insensitive).
    //
    ////////////////////////////////////////////////////////////////////////////

    fn process_switch_override(&mut self, entry: &str) {
        for &(name, value, accessor) in SWITCH_MAPPINGS {
            if entry.eq_ignore_ascii_case(name) {
                *accessor(self) = Some(value);
                return;
            }
        }

        self.record_error("Invalid switch (expected l, long, a, or all)", entry, entry);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  process_layout_override
    //
    //  columns = N (N >= 1) or padding = N (N >= 0).
    //
    ////////////////////////////////////////////////////////////////////////////

    fn process_layout_override(&mut self, entry: &str, key: &str, value: &str) {
        let parsed = value.parse::<usize>().ok();

        if key.eq_ignore_ascii_case("columns") {
            match parsed {
                Some(n) if n >= 1 => self.column_count = n,
                _ => self.record_error("Column count must be a whole number of at least 1", entry, value),
            }
        } else if key.eq_ignore_ascii_case("padding") {
            match parsed {
                Some(n) => self.padding = n,
                None => self.record_error("Padding must be a whole number", entry, value),
            }
        } else {
            self.record_error("Unknown key (expected columns or padding)", entry, key);
        }
    }





    fn record_error(&mut self, message: &str, entry: &str, invalid_text: &str) {
        self.errors.push(ErrorInfo {
            message:      message.into(),
            entry:        entry.into(),
            invalid_text: invalid_text.into(),
        });
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  SWITCH_MAPPINGS
//
//  Switch name (case-insensitive) → value and the Config field it sets.
//
////////////////////////////////////////////////////////////////////////////////

type SwitchAccessor = fn(&mut Config) -> &mut Option<bool>;

const SWITCH_MAPPINGS: &[(&str, bool, SwitchAccessor)] = &[
    ("l",     true,  |c| &mut c.long_listing),
    ("l-",    false, |c| &mut c.long_listing),
    ("long",  true,  |c| &mut c.long_listing),
    ("long-", false, |c| &mut c.long_listing),
    ("a",     true,  |c| &mut c.show_hidden),
    ("a-",    false, |c| &mut c.show_hidden),
    ("all",   true,  |c| &mut c.show_hidden),
    ("all-",  false, |c| &mut c.show_hidden),
];





////////////////////////////////////////////////////////////////////////////////
//
//  parse_key_and_value
//
//  Split an entry on '=' into key and value, trimming whitespace.
//
////////////////////////////////////////////////////////////////////////////////

fn parse_key_and_value(entry: &str) -> Option<(&str, &str)> {
    let (key, value) = entry.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}
