// column_layout.rs — Short-form column layout
//
// Names arrive sorted.  They are cut into contiguous column-major groups of
// `row_count` names, each group is padded to its own width, and the padded
// grid is transposed into row-major print order by modular index.

/// One layout column: its padded members share a single display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub width:   usize,
    pub members: Vec<String>,
}

/// One printable row: already-padded cells, one per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// The row as a single output line.
    pub fn to_line(&self) -> String {
        self.cells.concat()
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  layout
//
//  Arrange `names` into at most `column_count` columns and return the rows
//  in print order.  Empty input yields no rows.
//
////////////////////////////////////////////////////////////////////////////////

pub fn layout(names: &[String], column_count: usize, padding: usize) -> Vec<Row> {
    if names.is_empty() || column_count == 0 {
        return Vec::new();
    }

    let rows = row_count(names.len(), column_count);

    let columns: Vec<Column> = split_into_columns(names, rows)
        .into_iter()
        .map(|group| pad_column(group, padding))
        .collect();

    let flat: Vec<String> = columns.into_iter().flat_map(|c| c.members).collect();

    transpose_into_rows(flat, rows)
}





////////////////////////////////////////////////////////////////////////////////
//
//  row_count
//
//  ceil(item_count / column_count).  Used for both the column split and
//  the transpose so the two always agree.
//
////////////////////////////////////////////////////////////////////////////////

pub fn row_count(item_count: usize, column_count: usize) -> usize {
    item_count.div_ceil(column_count)
}





////////////////////////////////////////////////////////////////////////////////
//
//  split_into_columns
//
//  Contiguous groups of `rows` names; the last one may be shorter.
//
////////////////////////////////////////////////////////////////////////////////

pub fn split_into_columns(names: &[String], rows: usize) -> Vec<&[String]> {
    if rows == 0 {
        return Vec::new();
    }

    names.chunks(rows).collect()
}





////////////////////////////////////////////////////////////////////////////////
//
//  pad_column
//
//  Left-justify every member to the longest member plus `padding`.
//  Widths are measured in chars, matching how `{:<w$}` pads.
//
////////////////////////////////////////////////////////////////////////////////

pub fn pad_column(group: &[String], padding: usize) -> Column {
    let longest = group.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    let width = longest + padding;

    let members = group
        .iter()
        .map(|n| format!("{:<width$}", n, width = width))
        .collect();

    Column { width, members }
}





////////////////////////////////////////////////////////////////////////////////
//
//  transpose_into_rows
//
//  Flat column-major cells → rows: cell `i` goes to row `i % rows`.
//  Correct because every column but the last holds exactly `rows` cells.
//
////////////////////////////////////////////////////////////////////////////////

pub fn transpose_into_rows(flat: Vec<String>, rows: usize) -> Vec<Row> {
    if rows == 0 {
        return Vec::new();
    }

    let mut out = vec![Row::default(); rows];

    for (idx, cell) in flat.into_iter().enumerate() {
        out[idx % rows].cells.push(cell);
    }

    out
}





#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lines(rows: &[Row]) -> Vec<String> {
        rows.iter().map(Row::to_line).collect()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  empty_input_has_no_rows
    //
    //  No names, no rows, no arithmetic.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn empty_input_has_no_rows() {
        assert!(layout(&[], 3, 2).is_empty());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  four_names_three_columns
    //
    //  Two rows; groups of two, so only two columns are filled.  Column 1 is
    //  5+2 wide, column 2 is 3+2 wide.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn four_names_three_columns() {
        let input = names(&["a.txt", "bb", "ccc", "d"]);

        let groups = split_into_columns(&input, row_count(input.len(), 3));
        assert_eq!(groups.len(), 2);
        assert_eq!(pad_column(groups[0], 2).width, 7);
        assert_eq!(pad_column(groups[1], 2).width, 5);

        let rows = layout(&input, 3, 2);
        assert_eq!(lines(&rows), vec!["a.txt  ccc  ", "bb     d    "]);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  uneven_last_column
    //
    //  Seven names, three columns: rows of 3 and a one-name last column that
    //  only appears in the first row.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn uneven_last_column() {
        let input = names(&["a", "b", "c", "d", "e", "f", "long_name"]);
        let rows = layout(&input, 3, 1);

        assert_eq!(lines(&rows), vec![
            "a d long_name ",
            "b e ",
            "c f ",
        ]);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  column_width_is_local
    //
    //  A long name widens only its own column.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn column_width_is_local() {
        let input = names(&["x", "y", "a_very_long_name", "z"]);
        let rows = layout(&input, 2, 2);

        assert_eq!(rows[0].cells[0], "x  ");
        assert_eq!(rows[0].cells[1], "a_very_long_name  ");
        assert_eq!(rows[1].cells[0], "y  ");
        assert_eq!(rows[1].cells[1], "z                 ");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  every_name_once_and_row_count
    //
    //  For a spread of sizes and column counts, row count is ceil(n/c) and
    //  each name appears exactly once.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn every_name_once_and_row_count() {
        for n in 1..=20usize {
            let input: Vec<String> = (0..n).map(|i| format!("f{}", i)).collect();

            for cols in 1..=6 {
                let rows = layout(&input, cols, 2);
                assert_eq!(rows.len(), n.div_ceil(cols), "n={} cols={}", n, cols);

                let mut seen: Vec<String> = rows
                    .iter()
                    .flat_map(|r| r.cells.iter().map(|c| c.trim_end().to_string()))
                    .collect();
                seen.sort();

                let mut expected = input.clone();
                expected.sort();
                assert_eq!(seen, expected, "n={} cols={}", n, cols);
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  row_count_ignores_name_length
    //
    //  Same count, different lengths → same number of rows.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn row_count_ignores_name_length() {
        let short = names(&["a", "b", "c", "d", "e"]);
        let long  = names(&["aaaaaaaaaa", "b", "cccccccccccccccc", "d", "eeeeeee"]);

        assert_eq!(layout(&short, 3, 2).len(), layout(&long, 3, 2).len());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  fewer_names_than_columns
    //
    //  One row holding every name.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn fewer_names_than_columns() {
        let rows = layout(&names(&["one", "two"]), 3, 2);
        assert_eq!(lines(&rows), vec!["one  two  "]);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  zero_padding
    //
    //  Padding 0 pads only up to the column's longest member.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn zero_padding() {
        let col = pad_column(&names(&["ab", "abcd"]), 0);
        assert_eq!(col.width, 4);
        assert_eq!(col.members, vec!["ab  ", "abcd"]);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  width_counts_chars_not_bytes
    //
    //  Multi-byte names pad by character count.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn width_counts_chars_not_bytes() {
        let col = pad_column(&names(&["héllo", "abc"]), 1);
        assert_eq!(col.width, 6);
        assert_eq!(col.members[1], "abc   ");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  transpose_explicit_counts
    //
    //  Transpose in isolation with a non-divisible cell count.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn transpose_explicit_counts() {
        let flat = names(&["0", "1", "2", "3", "4"]);
        let rows = transpose_into_rows(flat, 2);

        assert_eq!(rows[0].cells, names(&["0", "2", "4"]));
        assert_eq!(rows[1].cells, names(&["1", "3"]));
        assert!(transpose_into_rows(Vec::new(), 0).is_empty());
    }
}
