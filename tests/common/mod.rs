//! Shared helpers for integration tests.
#![allow(dead_code)]

use counter_tui::ui::render::{render_tree, Hit};
use counter_tui::ui::tree::Node;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Each row of the buffer as a plain string.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

/// Render `tree` on a `width`x`height` screen and return the screen rows
/// together with the reported button areas.
pub fn render<A>(
    tree: &Node<A>,
    focused: Option<usize>,
    width: u16,
    height: u16,
) -> (Vec<String>, Vec<Hit>) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = Vec::new();
    terminal
        .draw(|frame| hits = render_tree(frame, Rect::new(0, 0, width, height), tree, focused))
        .unwrap();
    (buffer_lines(terminal.backend().buffer()), hits)
}

/// The content line of the body row (middle line of the bordered boxes).
pub fn content_row(lines: &[String], hits: &[Hit]) -> String {
    let y = hits.first().map(|hit| hit.area.y + 1).unwrap_or(0) as usize;
    lines[y].clone()
}
