use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the form screen.
pub struct FormAreas {
    pub header: Rect,
    /// Area, rooms, baths.
    pub left: [Rect; 3],
    /// Parking, fee, neighborhood.
    pub right: [Rect; 3],
    pub button: Rect,
    pub result: Rect,
    pub hints: Rect,
}

/// Splits the screen into the form regions.
///
/// # Returns
/// The header, the two field columns, the submit button, the result panel and the hint line.
pub fn form(area: Rect) -> FormAreas {
    let outer = centered_rect(84, 96, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(9), // fields
            Constraint::Length(1), // spacer
            Constraint::Length(3), // button
            Constraint::Length(1), // spacer
            Constraint::Min(6),    // result
            Constraint::Length(1), // hints
        ])
        .split(outer);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    FormAreas {
        header: rows[0],
        left: field_rows(cols[0]),
        right: field_rows(cols[1]),
        button: centered_rect(50, 100, rows[3]),
        result: rows[5],
        hints: rows[6],
    }
}

fn field_rows(area: Rect) -> [Rect; 3] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    [rows[0], rows[1], rows[2]]
}

/// A rectangle of the given percentages centered inside `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
