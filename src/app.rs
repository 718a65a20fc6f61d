use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};

use crate::animation::scheduler::FrameClock;
use crate::config::{matches_binding, Config};
use crate::curve::Rgb;
use crate::editor::Editor;
use crate::event::Event;
use crate::ui::canvas::Viewport;
use crate::ui::theme;

/// Seconds a toast stays on screen
const TOAST_SECONDS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// Which of the two scene colors a palette key cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Curve,
    Points,
}

// ── Application State ─────────────────────────────────────────────────

pub struct App {
    pub editor: Editor,
    pub config: Config,
    pub mode: Mode,
    pub should_quit: bool,

    /// Where the canvas was last drawn; set by the UI on every frame
    pub viewport: Option<Viewport>,

    curve_palette_index: usize,
    point_palette_index: usize,

    // Toast notification
    pub toast_message: Option<String>,
    pub toast_ticks: u64,

    dirty: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let editor = Editor::new(FrameClock::new(), config.bounds())
            .with_hit_radius(config.canvas.hit_radius)
            .with_colors(config.colors.curve, config.colors.points)
            .with_style(theme::scene_style());

        let palette = &config.colors.palette;
        let curve_palette_index = palette
            .iter()
            .position(|c| *c == config.colors.curve)
            .unwrap_or(0);
        let point_palette_index = palette
            .iter()
            .position(|c| *c == config.colors.points)
            .unwrap_or(0);

        Self {
            editor,
            config,
            mode: Mode::Normal,
            should_quit: false,
            viewport: None,
            curve_palette_index,
            point_palette_index,
            toast_message: None,
            toast_ticks: 0,
            dirty: true,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Tick => {
                self.editor.tick();
                self.tick_toast();
            }
            Event::Resize(w, h) => {
                // The viewport is recomputed on the next draw
                debug!(w, h, "terminal resized");
                self.viewport = None;
                self.dirty = true;
            }
        }
    }

    /// Handle a key event, dispatching on the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        let keys = &self.config.keys;
        if self.mode == Mode::Help {
            if matches_binding(&keys.help, &key) || key.code == KeyCode::Esc {
                self.mode = Mode::Normal;
                self.dirty = true;
            } else if matches_binding(&keys.quit, &key) {
                self.quit();
            }
            return;
        }

        if matches_binding(&keys.quit, &key) {
            self.quit();
        } else if matches_binding(&keys.help, &key) {
            // The overlay swallows mouse motion, so drop any drag in progress
            self.editor.pointer_leave();
            self.mode = Mode::Help;
            self.dirty = true;
        } else if matches_binding(&keys.add, &key) {
            self.add_point();
        } else if matches_binding(&keys.clear, &key) {
            self.editor.clear();
        } else if matches_binding(&keys.animate, &key) {
            self.animate();
        } else if matches_binding(&keys.curve_color, &key) {
            self.cycle_color(ColorTarget::Curve);
        } else if matches_binding(&keys.point_color, &key) {
            self.cycle_color(ColorTarget::Points);
        }
    }

    /// Translate terminal mouse events into canvas pointer events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // A release always ends a drag, whatever the mode or pointer position
        if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
            self.editor.pointer_up();
            return;
        }
        if self.mode != Mode::Normal {
            return;
        }
        let Some(viewport) = self.viewport else {
            return;
        };
        let at = viewport.to_canvas(mouse.column, mouse.row);

        match (mouse.kind, at) {
            (MouseEventKind::Down(MouseButton::Left), Some(at)) => self.editor.pointer_down(at),
            (MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved, Some(at)) => {
                self.editor.pointer_move(at)
            }
            (MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved, None) => {
                self.editor.pointer_leave()
            }
            _ => {}
        }
    }

    fn add_point(&mut self) {
        if self.editor.add_control_point().is_none() {
            self.show_toast("Wait for the animation to finish");
        }
    }

    fn animate(&mut self) {
        if !self.editor.animate_curve() {
            self.show_toast("Need at least 2 points to animate");
        }
    }

    /// Step the curve or point color to the next palette entry
    pub fn cycle_color(&mut self, target: ColorTarget) {
        let palette = &self.config.colors.palette;
        if palette.is_empty() {
            self.show_toast("Color palette is empty");
            return;
        }
        let index = match target {
            ColorTarget::Curve => &mut self.curve_palette_index,
            ColorTarget::Points => &mut self.point_palette_index,
        };
        *index = (*index + 1) % palette.len();
        let color: Rgb = palette[*index];
        debug!(?target, %color, "color changed");
        match target {
            ColorTarget::Curve => self.editor.set_stroke_color(color),
            ColorTarget::Points => self.editor.set_point_color(color),
        }
    }

    fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast_message = Some(message.to_string());
        self.toast_ticks = u64::from(self.config.animation.fps.max(1)) * TOAST_SECONDS;
        self.dirty = true;
    }

    pub fn tick_toast(&mut self) {
        if self.toast_ticks > 0 {
            self.toast_ticks -= 1;
            if self.toast_ticks == 0 {
                self.toast_message = None;
                self.dirty = true;
            }
        }
    }

    /// Whether the screen needs repainting since the last call
    pub fn take_redraw(&mut self) -> bool {
        let editor = self.editor.take_redraw();
        std::mem::take(&mut self.dirty) | editor
    }
}
