// detailed_formatter.rs — Long-form line rendering
//
// Every field width is the maximum over the whole listing, so all entries
// must be decoded before the first line is produced.

use crate::metadata_decoder::DecodedMetadata;

/// Widest rendered value of each aligned field across one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldWidths {
    pub link_count: usize,
    pub owner:      usize,
    pub group:      usize,
    pub size:       usize,
}

impl FieldWidths {
    pub fn compute(entries: &[DecodedMetadata]) -> Self {
        entries.iter().fold(FieldWidths::default(), |w, md| FieldWidths {
            link_count: w.link_count.max(md.link_count.to_string().len()),
            owner:      w.owner.max(md.owner_name.chars().count()),
            group:      w.group.max(md.group_name.chars().count()),
            size:       w.size.max(md.size_bytes.to_string().len()),
        })
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  format_entries
//
//  One aligned line per entry, in input order.
//
////////////////////////////////////////////////////////////////////////////////

pub fn format_entries(entries: &[DecodedMetadata]) -> Vec<String> {
    let widths = FieldWidths::compute(entries);

    entries.iter().map(|md| format_line(md, &widths)).collect()
}





////////////////////////////////////////////////////////////////////////////////
//
//  format_line
//
//  <type><perms>  <links> <owner>  <group>  <size> <mtime> <name>
//  links and size right-justified, owner and group left-justified.
//
////////////////////////////////////////////////////////////////////////////////

pub fn format_line(md: &DecodedMetadata, widths: &FieldWidths) -> String {
    format!(
        "{}{}  {:>lw$} {:<ow$}  {:<gw$}  {:>sw$} {} {}",
        md.type_char,
        md.permissions,
        md.link_count,
        md.owner_name,
        md.group_name,
        md.size_bytes,
        md.mtime_display,
        md.display_name,
        lw = widths.link_count,
        ow = widths.owner,
        gw = widths.group,
        sw = widths.size,
    )
}
