//! Modal plumbing shared by the pages panel and the page dialog

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area, clamped to the area
///
/// ```
/// use ratatui::layout::Rect;
/// use fforge_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area so the modal stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Dim `area`, draw an empty titled modal of the given size centered in it
/// and return the modal's inner area
pub fn modal_frame(buf: &mut Buffer, area: Rect, width: u16, height: u16, title: &str) -> Rect {
    dim_background(buf, area);
    let modal = centered_rect(width, height, area);
    Clear.render(modal, buf);

    let block = styles::modal_block(title);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}
