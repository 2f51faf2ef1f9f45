// command_line.rs — CLI argument parsing (custom, no clap)
//
// Short switches may be combined ("-la") and take a trailing '-' to
// disable ("-l-").  Long switches use "--".  At most one positional
// argument names the directory to list.

use std::path::PathBuf;

use crate::config::Config;
use crate::ehm::AppError;

// ── CommandLine struct ────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CommandLine {
    pub long_listing: bool,
    pub show_hidden:  bool,
    pub show_help:    bool,
    pub directory:    PathBuf,
    directory_given:  bool,
}

impl Default for CommandLine {
    fn default() -> Self {
        CommandLine {
            long_listing:    false,
            show_hidden:     false,
            show_help:       false,
            directory:       PathBuf::from("."),
            directory_given: false,
        }
    }
}

impl CommandLine {
    /// Parse arguments (without argv[0]) on top of built-in defaults.
    pub fn parse_from<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cmd = CommandLine::default();
        cmd.apply_args(args)?;
        Ok(cmd)
    }

    /// Parse arguments on top of the RLS defaults in `config`.
    /// Command-line switches win over the environment.
    pub fn parse_with_config<I, S>(args: I, config: &Config) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cmd = CommandLine::default();
        cmd.apply_config_defaults(config);
        cmd.apply_args(args)?;
        Ok(cmd)
    }

    /// Apply switch defaults from Config (parsed from the RLS variable).
    pub fn apply_config_defaults(&mut self, config: &Config) {
        if let Some(v) = config.long_listing { self.long_listing = v; }
        if let Some(v) = config.show_hidden  { self.show_hidden  = v; }
    }

    fn apply_args<I, S>(&mut self, args: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut switches_done = false;

        for arg_ref in args {
            let arg = arg_ref.as_ref();
            if arg.is_empty() {
                continue;
            }

            if switches_done || !arg.starts_with('-') || arg == "-" {
                self.set_directory(arg)?;
            } else if arg == "--" {
                switches_done = true;
            } else if let Some(long) = arg.strip_prefix("--") {
                self.handle_long_switch(long)?;
            } else {
                self.handle_short_switches(&arg[1..])?;
            }
        }

        Ok(())
    }

    /// Handle long switches: long, all, help
    fn handle_long_switch(&mut self, name: &str) -> Result<(), AppError> {
        match name.to_ascii_lowercase().as_str() {
            "long" => { self.long_listing = true; Ok(()) }
            "all"  => { self.show_hidden  = true; Ok(()) }
            "help" => { self.show_help    = true; Ok(()) }
            _      => Err(AppError::InvalidArg(format!("unrecognized option '--{}'", name))),
        }
    }

    /// Handle a run of single-character switches ("la", "l-", "l-a").
    fn handle_short_switches(&mut self, run: &str) -> Result<(), AppError> {
        let mut chars = run.chars().peekable();

        while let Some(ch) = chars.next() {
            // trailing '-' disables the switch it follows
            let enable = chars.next_if_eq(&'-').is_none();

            match ch {
                'l'       => self.long_listing = enable,
                'a'       => self.show_hidden  = enable,
                'h' | '?' => self.show_help    = true,
                _         => return Err(AppError::InvalidArg(format!("invalid option -- '{}'", ch))),
            }
        }

        Ok(())
    }

    fn set_directory(&mut self, arg: &str) -> Result<(), AppError> {
        if self.directory_given {
            return Err(AppError::InvalidArg(format!("unexpected extra argument '{}'", arg)));
        }

        self.directory = PathBuf::from(arg);
        self.directory_given = true;
        Ok(())
    }
}
