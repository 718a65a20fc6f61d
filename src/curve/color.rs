use std::fmt;
use std::str::FromStr;

use crate::error::BezierError;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An sRGB color with straight (non-premultiplied) alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn opaque(self) -> Rgba {
        Rgba {
            rgb: self,
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// Rotate the hue by `degrees` in HSL space, keeping saturation and lightness.
    pub fn shift_hue(self, degrees: f64) -> Rgb {
        let (h, s, l) = self.to_hsl();
        let h = (h + degrees).rem_euclid(360.0);
        Rgb::from_hsl(h, s, l)
    }

    /// Convert to (hue in degrees [0, 360), saturation [0, 1], lightness [0, 1])
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Rgb {
        if saturation == 0.0 {
            let v = channel(lightness);
            return Rgb::new(v, v, v);
        }

        let h = hue.rem_euclid(360.0) / 360.0;
        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Rgb::new(
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Linear blend toward `other` by `t` in [0, 1]
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let m = |a: u8, b: u8| channel((a as f64 + (b as f64 - a as f64) * t) / 255.0);
        Rgb::new(m(self.r, other.r), m(self.g, other.g), m(self.b, other.b))
    }
}

impl Rgba {
    /// Composite over an opaque backdrop
    pub fn over(self, backdrop: Rgb) -> Rgb {
        backdrop.mix(self.rgb, self.alpha)
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = BezierError;

    /// Accepts `#rrggbb`, `#rgb`, and a handful of named colors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let invalid = || BezierError::InvalidColor(s.to_string());

        let named = match trimmed.as_str() {
            "black" => Some(Rgb::BLACK),
            "white" => Some(Rgb::WHITE),
            "red" => Some(Rgb::new(0xff, 0x00, 0x00)),
            "green" => Some(Rgb::new(0x00, 0x80, 0x00)),
            "blue" => Some(Rgb::new(0x00, 0x00, 0xff)),
            "yellow" => Some(Rgb::new(0xff, 0xff, 0x00)),
            "cyan" => Some(Rgb::new(0x00, 0xff, 0xff)),
            "magenta" => Some(Rgb::new(0xff, 0x00, 0xff)),
            "orange" => Some(Rgb::new(0xff, 0xa5, 0x00)),
            "gray" | "grey" => Some(Rgb::new(0x80, 0x80, 0x80)),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
            }
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(invalid()),
        }
    }
}
