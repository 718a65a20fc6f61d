use ratatui::style::{Color, Modifier, Style};

use crate::curve::Rgb;
use crate::editor::render::SceneStyle;

// ─── Glyphs ──────────────────────────────────────────────────────────────

pub const ICON_CURVE: &str = "∿ ";
pub const ICON_POINT: &str = "● ";
pub const SWATCH: &str = "██";

// ─── Color Palette (terminal-adaptive, transparency-friendly) ──────────

/// Background: always Reset (transparent), so the terminal background shows
pub const BG: Color = Color::Reset;

/// Primary text color
pub const FG: Color = Color::White;

/// Dimmed text (labels, inactive elements)
pub const FG_DIM: Color = Color::DarkGray;

/// Accent color (titles, keybinding hints)
pub const ACCENT: Color = Color::Cyan;

/// Border color (inactive)
pub const BORDER: Color = Color::DarkGray;

/// Border color (focused/active panel)
pub const BORDER_FOCUSED: Color = Color::Cyan;

/// Animation in progress
pub const ANIMATING: Color = Color::Green;

/// Warning color (toasts about refused actions)
pub const WARNING: Color = Color::Yellow;

// ─── Canvas Palette ─────────────────────────────────────────────────────
// The canvas paints its own light backdrop, so these stay fixed regardless
// of the terminal theme.

pub const CANVAS_GUIDE: Rgb = Rgb::new(0xaa, 0xaa, 0xaa);
pub const CANVAS_OUTLINE: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const CANVAS_LABEL: Rgb = Rgb::BLACK;

/// Scene colors used on the terminal canvas
pub fn scene_style() -> SceneStyle {
    SceneStyle {
        guide: CANVAS_GUIDE,
        outline: CANVAS_OUTLINE,
        label: CANVAS_LABEL,
        halo: Rgb::WHITE.with_alpha(0.5),
    }
}

// ─── Style Constructors ──────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(FG).bg(BG)
}

pub fn style_dim() -> Style {
    Style::default().fg(FG_DIM).bg(BG)
}

pub fn style_accent() -> Style {
    Style::default().fg(ACCENT).bg(BG)
}

pub fn style_accent_bold() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(BG)
        .add_modifier(Modifier::BOLD)
}

pub fn style_animating() -> Style {
    Style::default()
        .fg(ANIMATING)
        .bg(BG)
        .add_modifier(Modifier::BOLD)
}

pub fn style_warning() -> Style {
    Style::default().fg(WARNING).bg(BG)
}

pub fn style_border() -> Style {
    Style::default().fg(BORDER).bg(BG)
}

pub fn style_border_focused() -> Style {
    Style::default().fg(BORDER_FOCUSED).bg(BG)
}

pub fn style_key_hint() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(BG)
        .add_modifier(Modifier::BOLD)
}

pub fn style_key_desc() -> Style {
    Style::default().fg(FG_DIM).bg(BG)
}

/// Foreground style showing a configured color as a swatch
pub fn style_swatch(color: Rgb) -> Style {
    Style::default().fg(Color::Rgb(color.r, color.g, color.b)).bg(BG)
}
