pub mod canvas;
pub mod header;
pub mod help;
pub mod status_bar;
pub mod theme;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, Mode};
use canvas::{TerminalSurface, Viewport};

/// Top-level draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);

    header::render(f, app, chunks[0]);
    draw_canvas(f, app, chunks[1]);
    status_bar::render(f, app, chunks[2]);

    if app.mode == Mode::Help {
        help::render(f, app, area);
    }

    if let Some(ref msg) = app.toast_message {
        render_toast(f, msg);
    }
}

/// Render the editor scene and remember where it landed for mouse mapping
fn draw_canvas(f: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.editor.scene().animating {
        theme::style_border_focused()
    } else {
        theme::style_border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme::style_default());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bounds = app.editor.bounds();
    app.viewport = Some(Viewport::new(inner, bounds));

    let mut surface = TerminalSurface::new(bounds, app.config.colors.background);
    app.editor.render(&mut surface);
    f.render_widget(&surface, inner);
}

/// Temporary notification at the top-right
fn render_toast(f: &mut Frame, message: &str) {
    let area = f.area();
    let width = (message.chars().count() as u16 + 6).min(area.width.saturating_sub(4));
    let x = area.width.saturating_sub(width + 2);
    let toast_area = Rect::new(x, 1, width, 3).intersection(area);

    f.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::style_warning());

    let text = Paragraph::new(Line::from(vec![
        Span::styled(" ! ", theme::style_warning().add_modifier(Modifier::BOLD)),
        Span::styled(message, theme::style_default()),
    ]))
    .block(block);

    f.render_widget(text, toast_area);
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn centered_rect_clamps() {
        let area = Rect::new(10, 10, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(15, 13, 10, 4));
        assert_eq!(centered_rect_fixed(50, 50, area), area);
    }

    #[test]
    fn draw_records_viewport() {
        let mut app = App::new(Config::default());
        let text = screen(&mut app, 80, 30);
        assert!(text.contains("Bézier Curve Editor"));
        assert_eq!(app.viewport.map(|v| v.area), Some(Rect::new(1, 4, 78, 23)));
    }

    #[test]
    fn labels_reach_the_screen() {
        let mut app = App::new(Config::default());
        app.editor.pointer_down(crate::curve::Point::new(400.0, 300.0));
        app.editor.pointer_up();
        let text = screen(&mut app, 80, 30);
        assert!(text.contains("P0"));
        assert!(text.contains("1 point"));
    }

    #[test]
    fn help_overlay_and_toast() {
        let mut app = App::new(Config::default());
        app.mode = Mode::Help;
        app.show_toast("Need at least 2 points to animate");
        let text = screen(&mut app, 100, 40);
        assert!(text.contains("Keybindings"));
        assert!(text.contains("Need at least 2 points to animate"));
    }
}
