use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::theme;
use crate::animation::spinner;
use crate::app::{App, Mode};
use crate::config::KeysConfig;
use crate::curve::geometry::polyline_length;
use crate::curve::path::{build_path, CurveKind};
use crate::editor::interaction::{InteractionController, PointerState};

const PROGRESS_WIDTH: usize = 20;

/// Render the scene summary line and the keybinding hints below it
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(summary(app))), rows[0]);

    let hints = match app.mode {
        Mode::Normal => normal_hints(&app.config.keys),
        Mode::Help => help_hints(&app.config.keys),
    };
    let para = Paragraph::new(Line::from(hints)).alignment(Alignment::Center);
    frame.render_widget(para, rows[1]);
}

fn summary(app: &App) -> Vec<Span<'static>> {
    let scene = app.editor.scene();
    let count = scene.points.len();
    let noun = if count == 1 { "point" } else { "points" };

    let mut spans = vec![
        Span::styled(format!(" {}", theme::ICON_POINT), theme::style_accent()),
        Span::styled(format!("{count} {noun}"), theme::style_default()),
        Span::styled("  │  ", theme::style_dim()),
        Span::styled(CurveKind::of(&scene.points).to_string(), theme::style_default()),
        Span::styled("  │  ", theme::style_dim()),
    ];

    if count >= 2 {
        let length = polyline_length(&build_path(&scene.points, 1.0));
        spans.push(Span::styled(format!("{length:.0}px"), theme::style_dim()));
        spans.push(Span::styled("  │  ", theme::style_dim()));
    }

    if let (PointerState::Dragging, Some(index)) =
        (InteractionController::state(scene), scene.selected)
    {
        spans.push(Span::styled(format!("dragging P{index}"), theme::style_accent()));
        spans.push(Span::styled("  │  ", theme::style_dim()));
    }

    if scene.animating {
        spans.push(Span::styled(
            spinner::progress_bar(scene.progress, PROGRESS_WIDTH),
            theme::style_animating(),
        ));
        spans.push(Span::styled(
            format!(" {:>3.0}%", scene.progress * 100.0),
            theme::style_animating(),
        ));
        spans.push(Span::styled("  │  ", theme::style_dim()));
    }

    spans.extend([
        Span::styled("curve ", theme::style_dim()),
        Span::styled(theme::SWATCH, theme::style_swatch(scene.stroke_color)),
        Span::styled(format!(" {}", scene.stroke_color), theme::style_dim()),
        Span::styled("  points ", theme::style_dim()),
        Span::styled(theme::SWATCH, theme::style_swatch(scene.point_color)),
        Span::styled(format!(" {}", scene.point_color), theme::style_dim()),
    ]);
    spans
}

fn normal_hints(keys: &KeysConfig) -> Vec<Span<'static>> {
    vec![
        key(&keys.add),
        desc("Add point "),
        key(&keys.animate),
        desc("Animate "),
        key(&keys.clear),
        desc("Clear "),
        key(&keys.curve_color),
        desc("Curve color "),
        key(&keys.point_color),
        desc("Point color "),
        key(&keys.help),
        desc("Help "),
        key(&keys.quit),
        desc("Quit"),
    ]
}

fn help_hints(keys: &KeysConfig) -> Vec<Span<'static>> {
    vec![key(&keys.help), desc("Close "), key("Esc"), desc("Close")]
}

fn key(k: &str) -> Span<'static> {
    Span::styled(format!(" [{k}] "), theme::style_key_hint())
}

fn desc(d: &'static str) -> Span<'static> {
    Span::styled(d, theme::style_key_desc())
}
