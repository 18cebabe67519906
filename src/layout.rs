//! Rendering a keymap into the essential line and the full help grid.
//!
//! Both views only read the keymap. The essential view is a single line of
//! `key - description` pairs joined by a separator:
//!
//! ```text
//!          s - switch context • h - help
//! ```
//!
//! The full view lays every visible binding out in columns, filling them
//! top to bottom, left to right:
//!
//! ```text
//! s   - switch context   h - help
//! esc - quit             ? - more
//! ```
//!
//! # Column planning
//!
//! [`plan_columns`] decides which entries land in which column. It aims for
//! `ceil(n / columns)` rows, but never leaves a single entry alone in a final
//! column: when exactly one entry would remain after a column fills up, that
//! entry joins the column instead. The last column takes whatever is left.

use crate::keymap::{Entry, Keymap};
use crate::style::Styles;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits `count` entries into consecutive column ranges for a grid that
/// targets `columns` columns.
///
/// ```rust
/// use bubblehelp::layout::plan_columns;
/// use std::num::NonZeroUsize;
///
/// let two = NonZeroUsize::new(2).unwrap();
/// assert_eq!(plan_columns(5, two), vec![0..3, 3..5]);
///
/// // The seventh entry joins the second column instead of standing alone.
/// let three = NonZeroUsize::new(3).unwrap();
/// assert_eq!(plan_columns(7, three), vec![0..3, 3..7]);
/// ```
pub fn plan_columns(count: usize, columns: NonZeroUsize) -> Vec<Range<usize>> {
    let mut plan = Vec::new();
    if count == 0 {
        return plan;
    }

    let row_count = count.div_ceil(columns.get());

    // `parts` counts emitted columns plus the separator slots between them;
    // `nominal` grows by one per separator so `parts + 1 < nominal` keeps
    // meaning "this is not the last column".
    let mut nominal = columns.get();
    let mut parts = 0;
    let mut start = 0;

    for i in 0..count {
        let placed = i + 1 - start;
        let remaining = count - i - 1;
        let last_column = parts + 1 >= nominal;
        let tail_merge = remaining == 1 && !last_column;

        if remaining == 0 || (placed >= row_count && !last_column && !tail_merge) {
            plan.push(start..i + 1);
            parts += 1;
            if remaining > 0 {
                parts += 1;
                nominal += 1;
            }
            start = i + 1;
        }
    }

    plan
}

/// Renders the essential line of a keymap: every visible essential binding,
/// in order, centred within `width`. A `width` of 0 skips centring.
///
/// An empty keymap still yields a (blank) centred line.
pub fn view_essential(keymap: &Keymap, width: usize) -> String {
    let styles = &keymap.styles;
    let key_separator = Styles::paint(
        &styles.essential_separator,
        &styles.essential_separator_value,
    );
    let column_separator = Styles::paint(
        &styles.essential_col_separator,
        &styles.essential_col_separator_value,
    );

    let line = keymap
        .visible_essential_entries()
        .into_iter()
        .map(|entry| {
            format!(
                "{}{}{}",
                Styles::paint(&styles.essential_key, entry.label()),
                key_separator,
                Styles::paint(&styles.essential_desc, entry.description()),
            )
        })
        .collect::<Vec<_>>()
        .join(column_separator.as_str());

    center(line, width)
}

/// Renders the full help grid of a keymap: every visible binding, arranged
/// by [`plan_columns`] and centred within `width`. A `width` of 0 skips
/// centring. A keymap with nothing visible renders as an empty string.
pub fn view_full(keymap: &Keymap, width: usize) -> String {
    let entries = keymap.visible_entries();
    if entries.is_empty() {
        return String::new();
    }

    let styles = &keymap.styles;
    let column_separator = Styles::paint(
        &styles.full_col_separator,
        &styles.full_col_separator_value,
    );

    let mut parts: Vec<String> = Vec::new();
    for range in plan_columns(entries.len(), keymap.columns()) {
        if !parts.is_empty() {
            parts.push(column_separator.clone());
        }
        parts.push(render_column(styles, &entries[range]));
    }

    let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
    center(lipgloss::join_horizontal(lipgloss::TOP, &parts), width)
}

// One grid column: the keys, the separators and the descriptions as three
// aligned blocks side by side.
fn render_column(styles: &Styles, column: &[&Entry]) -> String {
    let separator = Styles::paint(&styles.full_separator, &styles.full_separator_value);

    let keys = column
        .iter()
        .map(|e| Styles::paint(&styles.full_key, e.label()))
        .collect::<Vec<_>>()
        .join("\n");
    let separators = vec![separator.as_str(); column.len()].join("\n");
    let descriptions = column
        .iter()
        .map(|e| Styles::paint(&styles.full_desc, e.description()))
        .collect::<Vec<_>>()
        .join("\n");

    lipgloss::join_horizontal(
        lipgloss::TOP,
        &[keys.as_str(), separators.as_str(), descriptions.as_str()],
    )
}

// Width of the widest line; a grid is measured row by row, not end to end.
fn block_width(block: &str) -> usize {
    block
        .lines()
        .map(|line| lipgloss::width_visible(line))
        .max()
        .unwrap_or(0)
}

fn center(block: String, width: usize) -> String {
    // A narrower box would make lipgloss wrap the block.
    if width == 0 || block_width(&block) > width {
        return block;
    }
    Style::new()
        .width(i32::try_from(width).unwrap_or(i32::MAX))
        .align_horizontal(lipgloss::CENTER)
        .render(&block)
}
