// config/mod.rs — Layout constants and RLS env var defaults
//
// Holds the process-wide layout constants (column count, padding) and the
// switch defaults read from the RLS environment variable.  Nothing here
// changes after initialize(); displayers receive the values as parameters.

mod env_overrides;

/// Environment variable name
pub const RLS_ENV_VAR_NAME: &str = "RLS";

/// Short-form column count when RLS does not set one.
pub const DEFAULT_COLUMN_COUNT: usize = 3;

/// Spaces added after the longest name of each short-form column.
pub const DEFAULT_PADDING: usize = 2;





/// Environment variable access, so Config can be tested without touching
/// the real process environment.
pub trait EnvironmentProvider {
    fn get_env_var(&self, name: &str) -> Option<String>;
}





/// Reads from the real process environment.
pub struct ProcessEnvironment;

impl EnvironmentProvider for ProcessEnvironment {
    fn get_env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}





/// Preset variables for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn with(name: &str, value: &str) -> Self {
        let mut env = MockEnvironment::default();
        env.vars.insert(name.into(), value.into());
        env
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_env_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}





////////////////////////////////////////////////////////////////////////////////

/// One rejected RLS entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message:      String,
    pub entry:        String,
    pub invalid_text: String,
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct Config {
    /// Short-form column count (always >= 1)
    pub column_count: usize,

    /// Short-form padding after each column's longest name
    pub padding:      usize,

    /// Switch defaults; None = not set in RLS
    pub long_listing: Option<bool>,
    pub show_hidden:  Option<bool>,

    /// Entries rejected while parsing RLS
    pub errors:       Vec<ErrorInfo>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Default for Config
//
//  Built-in defaults, no environment applied.
//
////////////////////////////////////////////////////////////////////////////////

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config
//
//  Construction and environment initialization.
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Built-in defaults.  Call initialize() to apply RLS.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Self {
        Config {
            column_count: DEFAULT_COLUMN_COUNT,
            padding:      DEFAULT_PADDING,
            long_listing: None,
            show_hidden:  None,
            errors:       Vec::new(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  initialize
    //
    //  Apply the RLS variable from the process environment.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn initialize(&mut self) {
        self.initialize_with_provider(&ProcessEnvironment);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  initialize_with_provider
    //
    //  Apply the RLS variable as seen through `provider`.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn initialize_with_provider(&mut self, provider: &dyn EnvironmentProvider) {
        self.apply_env_overrides(provider);
    }





    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty()
    }
}
