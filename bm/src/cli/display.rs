// src/cli/display.rs

use crate::cli::error::CliResult;
use crate::domain::bookmark::Bookmark;
use std::io::Write;

/// Writes one line per bookmark: `name|url|tags`, plus an `archived`
/// column when archived bookmarks are part of the listing.
pub fn write_bookmarks<W: Write>(
    out: &mut W,
    bookmarks: &[Bookmark],
    separator: char,
    show_archived: bool,
) -> CliResult<()> {
    for bookmark in bookmarks {
        write!(
            out,
            "{}{sep}{}{sep}{}",
            bookmark.name,
            bookmark.url,
            bookmark.formatted_tags(),
            sep = separator
        )?;
        if show_archived {
            write!(out, "{}{}", separator, bookmark.archived)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the bookmarks as a pretty printed JSON array.
/// Standard output is used for pipeable content without colors or formatting
pub fn write_bookmarks_as_json<W: Write>(out: &mut W, bookmarks: &[Bookmark]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, bookmarks)?;
    writeln!(out)?;
    Ok(())
}
