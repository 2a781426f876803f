use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_boxes, centered_row, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, GLOBAL_BORDER, VALUE_TEXT};
use crate::ui::tree::Node;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Height of every box in the body row: border, content, border.
const BOX_HEIGHT: u16 = 3;
const MIN_TEXT_WIDTH: u16 = 7;

/// Screen area occupied by a button, for routing mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub area: Rect,
    /// Activation index of the button (see [`Node::buttons`]).
    pub button: usize,
}

impl Hit {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

pub fn draw(frame: &mut Frame<'_>, app: &App) -> Vec<Hit> {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.overflow()).widget(), header);
    frame.render_widget(Clear, body);
    let hits = render_tree(frame, body, &app.tree(), Some(app.focus()));
    frame.render_widget(Footer::widget(footer), footer);

    hits
}

/// Draw the leaves of `tree` as one centered row of boxes.
///
/// `focused` is the activation index of the highlighted button, if any.
pub fn render_tree<A>(
    frame: &mut Frame<'_>,
    area: Rect,
    tree: &Node<A>,
    focused: Option<usize>,
) -> Vec<Hit> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let leaves = tree.leaves();
    let widths: Vec<u16> = leaves.iter().map(|leaf| box_width(*leaf)).collect();
    let row = centered_row(area, BOX_HEIGHT);
    let boxes = centered_boxes(row, &widths);

    let mut hits = Vec::new();
    let mut button_idx = 0;
    for (leaf, rect) in leaves.into_iter().zip(boxes) {
        match leaf {
            Node::Text(text) => {
                let widget = Paragraph::new(text.clone())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(VALUE_TEXT).add_modifier(Modifier::BOLD))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(GLOBAL_BORDER)),
                    );
                frame.render_widget(widget, rect);
            }
            Node::Button { label, .. } => {
                let is_focused = focused == Some(button_idx);
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BUTTON_BORDER));
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if is_focused {
                    block = block.border_style(Style::default().fg(ACCENT));
                    style = style.bg(ACTIVE_HIGHLIGHT);
                }
                let widget = Paragraph::new(label.clone())
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(block);
                frame.render_widget(widget, rect);
                hits.push(Hit {
                    area: rect,
                    button: button_idx,
                });
                button_idx += 1;
            }
            Node::Fragment(_) => {}
        }
    }

    hits
}

fn box_width<A>(leaf: &Node<A>) -> u16 {
    match leaf {
        Node::Text(text) => (text.chars().count() as u16 + 4).max(MIN_TEXT_WIDTH),
        Node::Button { label, .. } => label.chars().count() as u16 + 6,
        Node::Fragment(_) => 0,
    }
}
