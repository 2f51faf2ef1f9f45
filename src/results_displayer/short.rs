// short.rs — Multi-column name-only displayer

use std::path::Path;

use crate::column_layout;
use crate::console::Console;
use crate::name_collector::EntryName;

use super::ResultsDisplayer;





////////////////////////////////////////////////////////////////////////////////

/// Names only, laid out in `column_count` padded columns.
pub struct ShortDisplayer {
    console:      Console,
    column_count: usize,
    padding:      usize,
}





impl ShortDisplayer {
    pub fn new(console: Console, column_count: usize, padding: usize) -> Self {
        ShortDisplayer { console, column_count, padding }
    }

    pub fn into_console(self) -> Console {
        self.console
    }

    #[cfg(test)]
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for ShortDisplayer
//
//  Lay the names out and print one line per row.  Short form never
//  touches entry status, so it cannot fail per entry.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for ShortDisplayer {
    fn display_results(&mut self, _dir: &Path, names: &[EntryName]) {
        let display: Vec<String> = names.iter().map(|n| n.display.clone()).collect();
        let rows = column_layout::layout(&display, self.column_count, self.padding);

        for row in &rows {
            self.console.puts(&row.to_line());
        }
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    fn displayer(cols: usize, padding: usize) -> ShortDisplayer {
        let console = Console::with_writers(Box::new(io::sink()), Box::new(io::sink()));
        ShortDisplayer::new(console, cols, padding)
    }

    fn names(list: &[&str]) -> Vec<EntryName> {
        list.iter().map(|&s| EntryName::from(s)).collect()
    }

    #[test]
    fn prints_rows_in_order() {
        let mut d = displayer(3, 2);
        d.display_results(Path::new("."), &names(&["a.txt", "bb", "ccc", "d"]));
        assert_eq!(d.console_mut().contents(), "a.txt  ccc  \nbb     d    \n");
    }

    #[test]
    fn empty_prints_nothing() {
        let mut d = displayer(3, 2);
        d.display_results(Path::new("."), &[]);
        assert_eq!(d.console_mut().contents(), "");
    }
}
