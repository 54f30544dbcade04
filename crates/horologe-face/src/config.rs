use horologe_engine::coords::Vec2;
use horologe_engine::paint::{Color, LinearGradient, Paint};

use crate::surface::Surface;

pub const DEFAULT_FONT_FAMILY: &str = "Arial";

// ── keywords ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FaceKind {
    #[default]
    Analog,
    Digital,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TickStyle {
    #[default]
    Lines,
    Circles,
    None,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum NumeralStyle {
    #[default]
    None,
    Arabic,
    Roman,
}

impl FaceKind {
    pub fn parse(s: &str) -> Option<Self> {
        keyword(s, &[("analog", Self::Analog), ("digital", Self::Digital)])
    }
}

impl TickStyle {
    pub fn parse(s: &str) -> Option<Self> {
        keyword(s, &[("lines", Self::Lines), ("circles", Self::Circles), ("none", Self::None)])
    }
}

impl NumeralStyle {
    pub fn parse(s: &str) -> Option<Self> {
        keyword(s, &[("none", Self::None), ("arabic", Self::Arabic), ("roman", Self::Roman)])
    }

    /// Labels for the 1..=12 positions, or `None` when numerals are off.
    pub fn labels(self) -> Option<[&'static str; 12]> {
        match self {
            NumeralStyle::None => None,
            NumeralStyle::Arabic => Some(["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]),
            NumeralStyle::Roman => Some(["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII"]),
        }
    }
}

fn keyword<T: Copy>(s: &str, table: &[(&str, T)]) -> Option<T> {
    let s = s.trim();
    table.iter().find(|(name, _)| name.eq_ignore_ascii_case(s)).map(|(_, v)| *v)
}

// ── Background ────────────────────────────────────────────────────────────

/// Face fill: one color, or two or more colors spread along a linear gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(Color),
    Gradient(Vec<Color>),
}

impl Background {
    /// Parses a color or a comma-separated color list.
    ///
    /// Commas inside `rgb(..)`/`hsl(..)` belong to that color, not the list.
    pub fn parse(s: &str) -> Option<Self> {
        let colors = list_items(s).into_iter().map(Color::parse).collect::<Option<Vec<_>>>()?;
        match colors.as_slice() {
            [] => None,
            [single] => Some(Background::Solid(*single)),
            _ => Some(Background::Gradient(colors)),
        }
    }
}

/// Splits on commas outside parentheses.
fn list_items(s: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let (mut depth, mut start) = (0usize, 0);
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&s[start..]);
    items
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(Color::WHITE)
    }
}

// ── ClockConfig ───────────────────────────────────────────────────────────

/// Everything a paint reads from a surface's attributes.
///
/// Built fresh for every paint. Missing attributes take their default; values
/// that do not parse are logged at `warn` and take their default as well.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub face: FaceKind,
    pub ticks: TickStyle,
    pub outer_color: Color,
    /// Stroke color for outlines, ticks, numerals, and hands.
    pub color: Color,
    pub background: Background,
    /// Gradient endpoints `x0, y0, x1, y1`; `None` components use `0, 0, width, height`.
    pub gradient: [Option<f32>; 4],
    pub numerals: NumeralStyle,
    pub font_family: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            face: FaceKind::default(),
            ticks: TickStyle::default(),
            outer_color: Color::TRANSPARENT,
            color: Color::BLACK,
            background: Background::default(),
            gradient: [None; 4],
            numerals: NumeralStyle::default(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl ClockConfig {
    pub fn from_surface(surface: &Surface) -> Self {
        let defaults = Self::default();
        Self {
            face: attr(surface, "type", FaceKind::parse).unwrap_or(defaults.face),
            ticks: attr(surface, "ticks", TickStyle::parse).unwrap_or(defaults.ticks),
            outer_color: attr(surface, "outer-color", Color::parse).unwrap_or(defaults.outer_color),
            color: attr(surface, "color", Color::parse).unwrap_or(defaults.color),
            background: attr(surface, "background", Background::parse).unwrap_or(defaults.background),
            gradient: surface.attr("gradient").map(parse_gradient).unwrap_or(defaults.gradient),
            numerals: attr(surface, "numerals", NumeralStyle::parse).unwrap_or(defaults.numerals),
            font_family: surface
                .attr("font-family")
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.font_family),
        }
    }

    /// The fill used for the face: the solid background, or a linear gradient
    /// with stops at `i / (n - 1)` between the configured endpoints.
    pub fn background_paint(&self, width: f32, height: f32) -> Paint {
        match &self.background {
            Background::Solid(c) => Paint::Solid(*c),
            Background::Gradient(colors) => {
                let [x0, y0, x1, y1] = self.gradient;
                let start = Vec2::new(x0.unwrap_or(0.0), y0.unwrap_or(0.0));
                let end = Vec2::new(x1.unwrap_or(width), y1.unwrap_or(height));
                LinearGradient::evenly_spaced(start, end, colors).into()
            }
        }
    }
}

/// Reads and parses one attribute; unparseable values are logged and dropped.
fn attr<T>(surface: &Surface, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let value = surface.attr(name)?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!("surface {}: ignoring invalid {name} `{value}`", surface.label());
    }
    parsed
}

/// `x0,y0,x1,y1`. Missing, empty, or non-finite components stay `None`.
fn parse_gradient(s: &str) -> [Option<f32>; 4] {
    let mut out = [None; 4];
    for (slot, part) in out.iter_mut().zip(s.split(',')) {
        *slot = part.trim().parse::<f32>().ok().filter(|v| v.is_finite());
    }
    out
}

#[cfg(test)]
mod tests {
    use horologe_engine::paint::ColorStop;

    use super::*;

    fn surface(attrs: &[(&str, &str)]) -> Surface {
        attrs.iter().fold(Surface::new(200, 100), |s, (k, v)| s.with_attr(k, *v))
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn no_attributes_means_defaults() {
        assert_eq!(ClockConfig::from_surface(&surface(&[])), ClockConfig::default());
    }

    #[test]
    fn default_values() {
        let c = ClockConfig::default();
        assert_eq!(c.face, FaceKind::Analog);
        assert_eq!(c.ticks, TickStyle::Lines);
        assert_eq!(c.numerals, NumeralStyle::None);
        assert_eq!(c.outer_color, Color::TRANSPARENT);
        assert_eq!(c.color, Color::BLACK);
        assert_eq!(c.background, Background::Solid(Color::WHITE));
        assert_eq!(c.font_family, "Arial");
    }

    // ── keywords ──────────────────────────────────────────────────────────

    #[test]
    fn keywords_ignore_case() {
        let c = ClockConfig::from_surface(&surface(&[
            ("type", "Digital"),
            ("ticks", "CIRCLES"),
            ("data-numerals", "Roman"),
        ]));
        assert_eq!(c.face, FaceKind::Digital);
        assert_eq!(c.ticks, TickStyle::Circles);
        assert_eq!(c.numerals, NumeralStyle::Roman);
    }

    #[test]
    fn unknown_keywords_fall_back() {
        let c = ClockConfig::from_surface(&surface(&[("type", "sundial"), ("ticks", "dots"), ("numerals", "greek")]));
        assert_eq!(c.face, FaceKind::Analog);
        assert_eq!(c.ticks, TickStyle::Lines);
        assert_eq!(c.numerals, NumeralStyle::None);
    }

    // ── colors ────────────────────────────────────────────────────────────

    #[test]
    fn colors_parse_or_fall_back() {
        let c = ClockConfig::from_surface(&surface(&[("color", "red"), ("outer-color", "not-a-color")]));
        assert_eq!(c.color, Color::from_srgb_u8(255, 0, 0, 255));
        assert_eq!(c.outer_color, Color::TRANSPARENT);
    }

    #[test]
    fn background_list_is_a_gradient() {
        let bg = Background::parse("red, blue ,green").unwrap();
        let Background::Gradient(colors) = bg else { panic!("expected a gradient") };
        assert_eq!(colors.len(), 3);
        assert_eq!(Background::parse("navy"), Some(Background::Solid(Color::parse("navy").unwrap())));
        assert_eq!(Background::parse("red,,blue"), None);
    }

    #[test]
    fn functional_colors_inside_a_background_list() {
        let bg = Background::parse("rgb(255, 0, 0), hsl(240, 100%, 50%) ,lightyellow").unwrap();
        let Background::Gradient(colors) = bg else { panic!("expected a gradient") };
        assert_eq!(colors[0], Color::from_srgb_u8(255, 0, 0, 255));
        assert_eq!(colors[2], Color::from_srgb_u8(0xff, 0xff, 0xe0, 255));
        assert_eq!(colors.len(), 3);
        assert_eq!(Background::parse("rgba(0, 0, 0, 0.5)").map(|b| matches!(b, Background::Solid(_))), Some(true));
    }

    #[test]
    fn modern_css_colors_are_accepted() {
        let c = ClockConfig::from_surface(&surface(&[
            ("color", "darkorange"),
            ("outer-color", "hsl(120, 100%, 50%)"),
        ]));
        assert_eq!(c.color, Color::from_srgb_u8(0xff, 0x8c, 0x00, 255));
        assert_ne!(c.outer_color, Color::TRANSPARENT);
        assert!((c.outer_color.g - 1.0).abs() < 1e-3 && c.outer_color.r.abs() < 1e-3);
    }

    // ── gradient ──────────────────────────────────────────────────────────

    #[test]
    fn gradient_stops_are_evenly_spaced() {
        let c = ClockConfig::from_surface(&surface(&[("background", "red,blue,green")]));
        let Paint::LinearGradient(g) = c.background_paint(200.0, 100.0) else { panic!("expected a gradient") };
        let offsets: Vec<f32> = g.stops.iter().map(|s: &ColorStop| s.t).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.start, Vec2::new(0.0, 0.0));
        assert_eq!(g.end, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn gradient_components_fall_back_individually() {
        assert_eq!(parse_gradient("10,,x"), [Some(10.0), None, None, None]);
        assert_eq!(parse_gradient("1,2,3,4,5"), [Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        assert_eq!(parse_gradient("NaN, 5"), [None, Some(5.0), None, None]);

        let c = ClockConfig::from_surface(&surface(&[("background", "red,blue"), ("gradient", "0,50")]));
        let Paint::LinearGradient(g) = c.background_paint(200.0, 100.0) else { panic!("expected a gradient") };
        assert_eq!(g.start, Vec2::new(0.0, 50.0));
        assert_eq!(g.end, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn font_family_is_trimmed() {
        let c = ClockConfig::from_surface(&surface(&[("font-family", "  Georgia ")]));
        assert_eq!(c.font_family, "Georgia");
        let c = ClockConfig::from_surface(&surface(&[("font-family", " ")]));
        assert_eq!(c.font_family, "Arial");
    }
}
