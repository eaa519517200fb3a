//! Pure text measuring helpers and dimensional constants for `TextField`.
//!
//! Stateless; no dependency on `TextField` itself.

use unicode_width::UnicodeWidthStr;

/// Columns taken by the rounded border and one column of padding per side.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Rows taken by the border.
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Where the first text cell sits relative to the field's top-left corner.
pub(super) const CONTENT_OFFSET_X: u16 = 2;
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Same wrapping rules the field renders with.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Text columns available inside a field `area_width` wide (0 if too narrow).
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Rows `text` occupies at `width`. A trailing newline opens a new row
/// even though textwrap drops it.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    if width == 0 || text.is_empty() {
        return 1;
    }

    let lines = textwrap::wrap(text, wrap_options(width));
    let mut count = (lines.len() as u16).max(1);

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }

    count
}

/// Which wrapped line (0-based) the byte offset `pos` falls on.
pub(super) fn line_of(text: &str, pos: usize, width: u16) -> u16 {
    if width == 0 || pos == 0 {
        return 0;
    }
    let before = &text[..pos];
    let lines = textwrap::wrap(before, wrap_options(width));
    let mut line = lines.len().saturating_sub(1) as u16;
    if before.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        line += 1;
    }
    line
}

/// Display column of `pos` within its wrapped line.
///
/// Counts from the last newline rather than using the wrapped segment,
/// since textwrap trims trailing whitespace.
pub(super) fn column_of(text: &str, pos: usize, width: u16) -> u16 {
    let before = &text[..pos];
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let logical = &before[line_start..];
    if width == 0 || logical.is_empty() {
        return 0;
    }
    let wrapped = textwrap::wrap(logical, wrap_options(width));
    let consumed: usize = wrapped
        .iter()
        .take(wrapped.len().saturating_sub(1))
        .map(|seg| seg.width())
        .sum();
    logical.width().saturating_sub(consumed) as u16
}

/// Byte offset of the char that ends at `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    (0..pos).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

/// Byte offset just past the char that starts at `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    (pos + 1..=text.len())
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len())
}
