use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::curve::Rgb;
use crate::editor::CanvasBounds;
use crate::error::{BezierError, BezierResult};

// ─── Embedded Default ────────────────────────────────────────────────────
/// Baked into the binary at compile time. The app can never crash due to a
/// missing config file; this is always available as the base layer.
const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

// ─── CLI Arguments (override layer) ─────────────────────────────────────
/// bezier-tui: draw, drag and animate Bézier curves in the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bezier-tui", version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the default config to stdout and exit
    #[arg(long)]
    pub print_default_config: bool,

    /// Log file path (defaults to a daily log in the data directory)
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "log")]
    pub no_log: bool,

    /// Log level filter (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Animation frames per second (overrides config file)
    #[arg(long)]
    pub fps: Option<u16>,

    /// Curve stroke color, e.g. "#0066ff" (overrides config file)
    #[arg(long)]
    pub curve_color: Option<String>,

    /// Control point color, e.g. "#ff6600" (overrides config file)
    #[arg(long)]
    pub point_color: Option<String>,

    /// Disable mouse support (keyboard-only: add/clear/animate)
    #[arg(long)]
    pub no_mouse: bool,
}

// ─── TOML Structs ───────────────────────────────────────────────────────

/// Root configuration, parsed from TOML, then overridden by CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub keys: KeysConfig,
    /// Set from `--no-mouse`; not part of the file
    #[serde(skip)]
    pub mouse: MouseSupport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseSupport {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub hit_radius: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fps: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub curve: Rgb,

    #[serde(deserialize_with = "deserialize_color")]
    pub points: Rgb,

    #[serde(deserialize_with = "deserialize_color")]
    pub background: Rgb,

    #[serde(deserialize_with = "deserialize_palette")]
    pub palette: Vec<Rgb>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub add: String,
    pub clear: String,
    pub animate: String,
    pub curve_color: String,
    pub point_color: String,
    pub help: String,
    pub quit: String,
}

// ─── Defaults ───────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            canvas: CanvasConfig::default(),
            animation: AnimationConfig::default(),
            colors: ColorsConfig::default(),
            keys: KeysConfig::default(),
            mouse: MouseSupport::Enabled,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let bounds = CanvasBounds::default();
        Self {
            width: bounds.width,
            height: bounds.height,
            margin: bounds.margin,
            hit_radius: crate::editor::interaction::HIT_RADIUS,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            curve: crate::editor::scene::DEFAULT_STROKE,
            points: crate::editor::scene::DEFAULT_POINT,
            background: Rgb::new(0xee, 0xf1, 0xfb),
            palette: vec![
                crate::editor::scene::DEFAULT_STROKE,
                crate::editor::scene::DEFAULT_POINT,
            ],
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            add: "a".into(),
            clear: "c".into(),
            animate: "Space".into(),
            curve_color: "k".into(),
            point_color: "p".into(),
            help: "?".into(),
            quit: "q".into(),
        }
    }
}

// ─── Color Deserializers ────────────────────────────────────────────────

fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Rgb, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

fn deserialize_palette<'de, D>(deserializer: D) -> std::result::Result<Vec<Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|s| s.parse().map_err(serde::de::Error::custom))
        .collect()
}

// ─── Key Bindings ───────────────────────────────────────────────────────

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
///
/// Supports single characters, named keys ("Space", "Enter", "Esc", "Tab")
/// and a "Ctrl-" prefix.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return matches!(rest.chars().next(), Some(c) if event.code == KeyCode::Char(c));
    }

    // Plain bindings never fire with Ctrl or Alt held
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    match binding {
        "Space" => event.code == KeyCode::Char(' '),
        "Enter" => event.code == KeyCode::Enter,
        "Esc" => event.code == KeyCode::Esc,
        "Tab" => event.code == KeyCode::Tab,
        "Backspace" => event.code == KeyCode::Backspace,
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => event.code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

// ─── Path Resolution ────────────────────────────────────────────────────

impl Config {
    /// Standard config file path: ~/.config/bezier-tui/config.toml
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bezier-tui")
            .join("config.toml")
    }

    /// Log directory: ~/.local/share/bezier-tui/
    pub fn log_dir() -> BezierResult<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bezier-tui");
        ensure_dir(data_dir)
    }

    /// Parse a config from TOML text
    pub fn from_toml(toml_str: &str) -> BezierResult<Self> {
        toml::from_str(toml_str).map_err(|e| BezierError::Config(e.to_string()))
    }

    /// Convenience: tick interval from FPS
    pub fn tick_rate_ms(&self) -> u64 {
        let fps = self.animation.fps.max(1);
        1000 / fps as u64
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds {
            width: self.canvas.width.max(1.0),
            height: self.canvas.height.max(1.0),
            margin: self.canvas.margin.max(0.0),
        }
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse == MouseSupport::Enabled
    }

    /// Apply CLI flags on top of the file values
    pub fn apply_cli(&mut self, cli: &CliArgs) -> BezierResult<()> {
        if let Some(ref level) = cli.log_level {
            self.general.log_level = level.clone();
        }
        if let Some(fps) = cli.fps {
            self.animation.fps = fps;
        }
        if let Some(ref color) = cli.curve_color {
            self.colors.curve = color.parse()?;
        }
        if let Some(ref color) = cli.point_color {
            self.colors.points = color.parse()?;
        }
        if cli.no_mouse {
            self.mouse = MouseSupport::Disabled;
        }
        Ok(())
    }
}

/// Create `dir` and its parents if missing
fn ensure_dir(dir: PathBuf) -> BezierResult<PathBuf> {
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

// ─── Bootloader ─────────────────────────────────────────────────────────

/// The single entry point for configuration. Called exactly once at startup.
///
/// 1. Resolve config file path (CLI override or default)
/// 2. If config file doesn't exist, create directory tree + write defaults
/// 3. Parse TOML from disk into Config
/// 4. Apply CLI overrides on top
pub fn load(cli: &CliArgs) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Bootstrap: ensure the file exists on disk
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).wrap_err_with(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(&config_path, DEFAULT_CONFIG_TOML).wrap_err_with(|| {
            format!(
                "Failed to write default config to {}",
                config_path.display()
            )
        })?;
        info!("Created default config at {}", config_path.display());
    }

    let toml_str = std::fs::read_to_string(&config_path)
        .wrap_err_with(|| format!("Failed to read config from {}", config_path.display()))?;

    let mut config = Config::from_toml(&toml_str).wrap_err_with(|| {
        format!(
            "Failed to parse config at {}.\n\
             Delete the file to regenerate defaults, or run:\n  \
             bezier-tui --print-default-config > {:?}",
            config_path.display(),
            config_path
        )
    })?;

    config
        .apply_cli(cli)
        .wrap_err("Invalid command-line option")?;

    Ok(config)
}

/// Returns the embedded default config TOML string.
pub fn default_config_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn embedded_default_parses() {
        let config = Config::from_toml(default_config_toml()).unwrap();
        assert_eq!(config.colors.curve, Rgb::new(0x00, 0x66, 0xff));
        assert_eq!(config.colors.points, Rgb::new(0xff, 0x66, 0x00));
        assert_eq!(config.colors.palette.len(), 7);
        assert_eq!(config.canvas.hit_radius, 8.0);
        assert_eq!(config.bounds(), CanvasBounds::default());
        assert_eq!(config.keys.animate, "Space");
        assert_eq!(config.tick_rate_ms(), 16);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::from_toml("[animation]\nfps = 0\n").unwrap();
        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.keys.quit, "q");
        assert_eq!(config.tick_rate_ms(), 1000);
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = Config::from_toml("[colors]\ncurve = \"#12345\"\n").unwrap_err();
        assert!(err.to_string().contains("#12345"), "{err}");
    }

    #[test]
    fn cli_overrides_file() {
        let mut config = Config::default();
        let cli = CliArgs {
            fps: Some(30),
            curve_color: Some("#abc".into()),
            no_mouse: true,
            ..Default::default()
        };
        config.apply_cli(&cli).unwrap();
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.colors.curve, Rgb::new(0xaa, 0xbb, 0xcc));
        assert!(!config.mouse_enabled());
    }

    #[test]
    fn cli_rejects_bad_color() {
        let mut config = Config::default();
        let cli = CliArgs {
            point_color: Some("nope".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.apply_cli(&cli),
            Err(BezierError::InvalidColor(_))
        ));
    }

    #[test]
    fn ensure_dir_reports_io_errors() {
        let base = std::env::temp_dir().join(format!("bezier-tui-{}", std::process::id()));
        let nested = ensure_dir(base.join("logs")).unwrap();
        assert!(nested.is_dir());

        // A regular file cannot hold a subdirectory
        let file = base.join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(ensure_dir(file.join("logs")), Err(BezierError::Io(_))));

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn bindings_match_keys() {
        let none = KeyModifiers::NONE;
        assert!(matches_binding("Space", &key(KeyCode::Char(' '), none)));
        assert!(matches_binding("a", &key(KeyCode::Char('a'), none)));
        assert!(!matches_binding("a", &key(KeyCode::Char('a'), KeyModifiers::ALT)));
        assert!(matches_binding("?", &key(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        assert!(matches_binding("Ctrl-c", &key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!matches_binding("Ctrl-c", &key(KeyCode::Char('c'), none)));
        assert!(!matches_binding("ab", &key(KeyCode::Char('a'), none)));
    }
}
