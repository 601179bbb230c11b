use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the two-column view collapses to one column, the way
/// the narrow breakpoint works in a responsive page.
pub const MIN_TWO_COLUMN_WIDTH: u16 = 100;

/// Viewer layout: header block, one or two message columns, status bar.
pub struct ViewerLayout {
    pub header_area: Rect,
    pub columns: Vec<Rect>,
    pub status_area: Rect,
}

impl ViewerLayout {
    pub fn new(area: Rect, two_columns: bool) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header: title, date, window position
                Constraint::Min(3),    // Message columns
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let columns = if two_columns && area.width >= MIN_TWO_COLUMN_WIDTH {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(vertical_chunks[1])
                .to_vec()
        } else {
            vec![vertical_chunks[1]]
        };

        Self { header_area: vertical_chunks[0], columns, status_area: vertical_chunks[2] }
    }
}
