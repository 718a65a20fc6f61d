use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use super::theme;
use crate::app::App;

/// Keybinding entries: (key, description)
fn keybindings(app: &App) -> Vec<(String, &'static str)> {
    let keys = &app.config.keys;
    let mut entries = vec![
        (keys.add.clone(), "Add a control point at random"),
        (keys.animate.clone(), "Animate the curve"),
        (keys.clear.clone(), "Clear all points"),
        (keys.curve_color.clone(), "Next curve color"),
        (keys.point_color.clone(), "Next point color"),
    ];
    if app.config.mouse_enabled() {
        entries.extend([
            ("Click".to_string(), "Place or select a point"),
            ("Drag".to_string(), "Move the selected point"),
        ]);
    }
    entries.extend([
        (keys.help.clone(), "Toggle this help"),
        (keys.quit.clone(), "Quit"),
    ]);
    entries
}

/// Render the help overlay
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let entries = keybindings(app);
    let width = 52_u16.min(area.width.saturating_sub(4));
    let height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));

    let dialog = super::centered_rect_fixed(width, height, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" ", theme::style_accent()),
            Span::styled(" Keybindings ", theme::style_accent_bold()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::style_accent())
        .style(theme::style_default());

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme::style_key_hint()),
            Span::styled(desc, theme::style_default()),
        ]));
    }

    lines.push(Line::from(""));

    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, dialog);
}
