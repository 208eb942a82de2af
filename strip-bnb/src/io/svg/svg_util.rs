use crate::geometry::primitives::{Point, Rect};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    ///Label every item with its placement rank
    #[serde(default = "default_true")]
    pub item_labels: bool,
    ///Draw the corner points of the final skyline
    #[serde(default)]
    pub corner_points: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            item_labels: true,
            corner_points: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
    Custom(SvgLayoutTheme),
}

impl SvgLayoutThemes {
    pub fn theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => SvgLayoutTheme::EARTH_TONES,
            SvgLayoutThemes::Gray => SvgLayoutTheme::GRAY,
            SvgLayoutThemes::Custom(theme) => *theme,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub strip_fill: Color,
    pub item_fill: Color,
    pub corner_fill: Color,
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        strip_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        corner_fill: Color(0xFF, 0x00, 0x00), // RED
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        strip_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        corner_fill: Color(0x00, 0x00, 0x00), // BLACK
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let scale = |c: u8| (c as f32 * fraction).clamp(0.0, 255.0) as u8;
    Color(scale(r), scale(g), scale(b))
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> anyhow::Result<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(
            s.len() == 6 && s.is_ascii(),
            "expected a color of the form #RRGGBB, got '{s}'"
        );
        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

/// Path data of a rectangle, in a frame with the y-axis pointing down and the strip top at `y_top`.
pub fn rect_data(rect: &Rect, y_top: f32) -> Data {
    let y_min = y_top - rect.y_max();
    let y_max = y_top - rect.y();
    Data::new()
        .move_to((rect.x(), y_min))
        .line_to((rect.x_max(), y_min))
        .line_to((rect.x_max(), y_max))
        .line_to((rect.x(), y_max))
        .close()
}

/// Path data of the strip outline up to `height`.
pub fn strip_data(width: f32, height: f32) -> Data {
    let zero = 0.0_f32;
    Data::new()
        .move_to((zero, zero))
        .line_to((width, zero))
        .line_to((width, height))
        .line_to((zero, height))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, y_top: f32, fill: Option<&str>, rad: Option<f32>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y_top - y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}
