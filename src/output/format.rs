use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::stats::DurationParts;

/// Render an hour-of-day (0-23) the way the original tool did: hours up to
/// and including 12 are labeled "am" (0 prints as "0 am"), 13-23 shift down
/// by twelve and get "pm". Not true 12-hour-clock semantics; kept verbatim
/// for output compatibility.
pub(super) fn format_clock_hour(hour: u32) -> String {
    if hour <= 12 {
        format!("{hour} am")
    } else {
        format!("{} pm", hour - 12)
    }
}

pub(super) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub(super) fn format_duration(parts: &DurationParts) -> String {
    format!(
        "{}d {}h {}m {}s",
        parts.days, parts.hours, parts.minutes, parts.seconds
    )
}

/// Mean durations surface only minutes and seconds
pub(super) fn format_mean_duration(parts: &DurationParts) -> String {
    format!("{}m {}s", parts.minutes, parts.seconds)
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_hour_midnight_quirk() {
        assert_eq!(format_clock_hour(0), "0 am");
    }

    #[test]
    fn clock_hour_noon_stays_am() {
        assert_eq!(format_clock_hour(12), "12 am");
    }

    #[test]
    fn clock_hour_afternoon_shifts_to_pm() {
        assert_eq!(format_clock_hour(13), "1 pm");
        assert_eq!(format_clock_hour(23), "11 pm");
    }

    #[test]
    fn clock_hour_morning() {
        assert_eq!(format_clock_hour(9), "9 am");
    }

    #[test]
    fn count_gets_thousand_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn duration_text() {
        let parts = DurationParts::from_secs(93_784);
        assert_eq!(format_duration(&parts), "1d 2h 3m 4s");
        assert_eq!(format_mean_duration(&parts), "3m 4s");
    }
}
