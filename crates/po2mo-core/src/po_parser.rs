use tracing::debug;

use crate::cursor::LineCursor;
use crate::entry::{Catalog, Entry};

const SOURCE_MARKER: &str = "msgid ";
const TRANSLATION_MARKER: &str = "msgstr ";
const METADATA_LINE: &str = "msgid \"\"";

/// Parses PO text into a catalog of source/translation pairs.
///
/// Unrecognized lines are skipped. A `msgid` not followed by a `msgstr` (after its
/// continuation lines) is discarded, as is any pair with an empty side. The `msgid ""`
/// header record is skipped without reading its contents.
pub fn parse_po(input: &str) -> Catalog {
    let mut catalog = Catalog::default();
    let mut cursor = LineCursor::new(input);

    while let Some(line) = cursor.advance() {
        if line == METADATA_LINE {
            debug!(line = cursor.line_number() - 1, "skipping metadata record");
            catalog.stats.skipped_metadata += 1;
            continue;
        }
        let Some(head) = line.strip_prefix(SOURCE_MARKER) else {
            continue;
        };

        let start_line = cursor.line_number() - 1;
        let mut source = marker_payload(head);
        append_continuations(&mut cursor, &mut source);

        let Some(head) = cursor
            .peek()
            .and_then(|next| next.strip_prefix(TRANSLATION_MARKER))
        else {
            debug!(line = start_line, "msgid without msgstr, discarding record");
            catalog.stats.incomplete += 1;
            continue;
        };
        cursor.advance();
        let mut translation = marker_payload(head);
        append_continuations(&mut cursor, &mut translation);

        let entry = Entry::new(source, translation);
        if entry.is_complete() {
            catalog.entries.push(entry);
        } else {
            debug!(line = start_line, "empty source or translation, dropping entry");
            catalog.stats.dropped_empty += 1;
        }
    }

    catalog
}

/// Removes exactly one leading and one trailing character. Escapes are kept verbatim.
pub fn strip_quotes(line: &str) -> &str {
    let mut chars = line.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}

fn marker_payload(head: &str) -> String {
    if head.ends_with('"') {
        strip_quotes(head).to_string()
    } else {
        head.to_string()
    }
}

fn append_continuations(cursor: &mut LineCursor<'_>, value: &mut String) {
    for line in cursor.consume_while(|line| line.starts_with('"')) {
        value.push_str(strip_quotes(line));
    }
}
