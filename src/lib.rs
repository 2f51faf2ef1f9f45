// rls — a Unix directory lister
// Short form: names in padded columns.  Long form: one aligned line per entry.

pub mod ehm;
pub mod config;
pub mod console;
pub mod command_line;
pub mod file_info;
pub mod owner;
pub mod name_collector;
pub mod column_layout;
pub mod metadata_decoder;
pub mod detailed_formatter;
pub mod results_displayer;
pub mod usage;

use command_line::CommandLine;
use config::Config;
use console::Console;
use ehm::AppError;
use owner::{IdentityResolver, SystemIdentityResolver};
use results_displayer::{Displayer, ResultsDisplayer};

/// Main entry point for the library.
/// Called by main.rs; returns Result for clean error handling.
pub fn run() -> Result<(), AppError> {
    let mut config = Config::new();
    config.initialize();

    run_with(
        std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned()),
        &config,
        Console::new(),
        Box::new(SystemIdentityResolver::new()),
    )
}

/// Run one listing with explicit collaborators.
///
/// Fatal errors (bad arguments, unreadable directory) are returned before
/// anything is listed.  Per-entry failures, during enumeration or status
/// reads, are reported as they happen; the rest of the listing is still
/// printed and `PartialListing` is returned.
pub fn run_with<I, S>(
    args: I,
    config: &Config,
    mut console: Console,
    resolver: Box<dyn IdentityResolver>,
) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    usage::display_env_var_issues(&mut console, config);

    let cmd = match CommandLine::parse_with_config(args, config) {
        Ok(cmd) => cmd,
        Err(e) => {
            usage::display_usage(&mut console);
            console.flush()?;
            return Err(e);
        }
    };

    if cmd.show_help {
        usage::display_usage(&mut console);
        return console.flush();
    }

    let names = name_collector::collect_names(&cmd.directory, cmd.show_hidden, &mut console)?;

    let mut displayer = Displayer::new(console, &cmd, config, resolver);
    displayer.display_results(&cmd.directory, &names);

    let mut console = displayer.into_console();
    console.flush()?;

    match console.error_count() {
        0 => Ok(()),
        n => Err(AppError::PartialListing(n)),
    }
}
