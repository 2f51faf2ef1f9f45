// results_displayer — Short and long listing output
//
// Module structure:
//   mod.rs   — ResultsDisplayer trait and the Displayer enum wrapper
//   short.rs — ShortDisplayer: names in padded columns
//   long.rs  — LongDisplayer: one decoded, aligned line per entry

mod long;
mod short;

use std::path::Path;

use crate::command_line::CommandLine;
use crate::config::Config;
use crate::console::Console;
use crate::name_collector::EntryName;
use crate::owner::IdentityResolver;

pub use self::long::{LongDisplayer, decode_entry};
pub use self::short::ShortDisplayer;





/// Renders one directory's sorted names to the console.
pub trait ResultsDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Display `names` (already filtered and sorted) from directory `dir`.
    //  Per-entry failures are reported through the console and skipped.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, dir: &Path, names: &[EntryName]);
}





////////////////////////////////////////////////////////////////////////////////

/// Short or long displayer, chosen once from the command line.
pub enum Displayer {
    Short(ShortDisplayer),
    Long(LongDisplayer),
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Displayer
//
//  Construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl Displayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Long form when requested, short form otherwise.  The resolver is
    //  only used by the long form.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(
        console: Console,
        cmd: &CommandLine,
        config: &Config,
        resolver: Box<dyn IdentityResolver>,
    ) -> Self {
        if cmd.long_listing {
            Displayer::Long(LongDisplayer::new(console, resolver))
        } else {
            Displayer::Short(ShortDisplayer::new(console, config.column_count, config.padding))
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  into_console
    //
    //  Consume the displayer and return the Console.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn into_console(self) -> Console {
        match self {
            Displayer::Short(d) => d.into_console(),
            Displayer::Long(d)  => d.into_console(),
        }
    }





    #[cfg(test)]
    pub fn console_mut(&mut self) -> &mut Console {
        match self {
            Displayer::Short(d) => d.console_mut(),
            Displayer::Long(d)  => d.console_mut(),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for Displayer
//
//  Dispatch to the underlying variant.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for Displayer {
    fn display_results(&mut self, dir: &Path, names: &[EntryName]) {
        match self {
            Displayer::Short(d) => d.display_results(dir, names),
            Displayer::Long(d)  => d.display_results(dir, names),
        }
    }
}
