use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::theme;
use crate::animation::spinner;
use crate::app::App;

const TITLE: &str = "Bézier Curve Editor";
const DESCRIPTION: &str = "Click to place or drag control points, then animate the curve";

/// Render the application header bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {}", theme::ICON_CURVE), theme::style_accent_bold()),
        Span::styled(format!("{TITLE} "), theme::style_accent_bold()),
    ]);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::style_border_focused())
        .style(theme::style_default());

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2).min(1),
    };

    let description = Paragraph::new(Line::from(Span::styled(
        format!("  {DESCRIPTION}"),
        theme::style_dim(),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(description, inner);

    let status = Paragraph::new(Line::from(status_spans(app))).alignment(Alignment::Right);
    frame.render_widget(status, inner);
}

/// Animation indicator on the right of the header
fn status_spans(app: &App) -> Vec<Span<'static>> {
    let scene = app.editor.scene();
    if scene.animating {
        let spin = spinner::spinner_frame(app.editor.frame_count());
        vec![
            Span::styled(format!("{spin} "), theme::style_animating()),
            Span::styled("Animating… ", theme::style_animating()),
        ]
    } else {
        Vec::new()
    }
}
