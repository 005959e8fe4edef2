//! Plain-text rendering of note views.

use chrono::{DateTime, FixedOffset, Utc};
use quicknote_core::Note;

pub const EMPTY_VIEW_MESSAGE: &str = "No notes yet. Add one first.";
const CONTENT_INDENT: &str = "    ";

/// Renders notes in the given order, separated by blank lines.
pub fn render_notes(notes: &[&Note], offset: FixedOffset) -> String {
    if notes.is_empty() {
        return format!("{EMPTY_VIEW_MESSAGE}\n");
    }

    notes
        .iter()
        .map(|note| render_note(note, offset))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_note(note: &Note, offset: FixedOffset) -> String {
    let mut out = format!("{}  ({})\n", strip_controls(&note.title), note.id);
    out.push_str(&format_created_at(note.created_at, offset));
    out.push('\n');
    if note.has_tag() {
        out.push_str(&format!("#{}\n", strip_controls(&note.tag)));
    }
    for line in strip_controls(&note.content).lines() {
        out.push_str(CONTENT_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Formats as `16 January 2025, 13:30 UTC+07:00`.
pub fn format_created_at(created_at: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = created_at.with_timezone(&offset);
    format!("{} UTC{offset}", local.format("%-d %B %Y, %H:%M"))
}

/// Drops control characters except newlines.
pub fn strip_controls(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{format_created_at, render_notes, strip_controls, EMPTY_VIEW_MESSAGE};
    use chrono::{FixedOffset, TimeZone, Utc};
    use quicknote_core::{Note, NoteDraft};

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn formats_in_display_offset() {
        let at = Utc.with_ymd_and_hms(2025, 1, 16, 6, 30, 0).unwrap();
        assert_eq!(format_created_at(at, wib()), "16 January 2025, 13:30 UTC+07:00");
    }

    #[test]
    fn offset_can_roll_the_date() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 20, 5, 0).unwrap();
        assert_eq!(format_created_at(at, wib()), "1 January 2025, 03:05 UTC+07:00");
    }

    #[test]
    fn empty_view_shows_hint() {
        assert_eq!(render_notes(&[], wib()), format!("{EMPTY_VIEW_MESSAGE}\n"));
    }

    #[test]
    fn content_lines_are_preserved_and_tag_is_optional() {
        let at = Utc.with_ymd_and_hms(2025, 1, 16, 6, 30, 0).unwrap();
        let tagged = Note::with_id(
            "a",
            NoteDraft::new("Groceries", "home", "milk\neggs").validate().unwrap(),
            at,
        );
        let plain = Note::with_id("b", NoteDraft::new("Plain", "", "x").validate().unwrap(), at);

        let out = render_notes(&[&tagged, &plain], wib());

        assert!(out.contains("Groceries  (a)\n"));
        assert!(out.contains("#home\n    milk\n    eggs\n"));
        assert!(!out.contains("#\n"));
        assert!(out.contains("Plain  (b)\n16 January 2025, 13:30 UTC+07:00\n    x\n"));
    }

    #[test]
    fn strip_controls_keeps_newlines() {
        assert_eq!(strip_controls("a\x1b[31mb\nc\t"), "a[31mb\nc");
    }
}
