/// Premultiplied RGBA color, channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Parses a CSS color string.
    ///
    /// Accepted forms:
    /// - the CSS named colors, plus `transparent`
    /// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    /// - `rgb()`/`rgba()` with byte or percent channels
    /// - `hsl()`/`hsla()` with a hue in `deg` (default), `rad`, `grad` or `turn`
    ///
    /// Functional forms take comma-separated arguments or the space-separated
    /// syntax with an optional `/ alpha`; alpha may be a number or a percent.
    /// Surrounding whitespace and case are ignored. Returns `None` for
    /// anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some((name, rest)) = s.split_once('(') {
            let args = rest.strip_suffix(')')?;
            return match name.trim_end() {
                "rgb" | "rgba" => parse_rgb(args),
                "hsl" | "hsla" => parse_hsl(args),
                _ => None,
            };
        }
        named(&s)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    let nibble = |i: usize| byte(&hex[i..i + 1]).map(|v| v * 17);
    let [r, g, b, a] = match hex.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
        4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
        6 => [byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 255],
        8 => [byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, byte(&hex[6..8])?],
        _ => return None,
    };
    Some(Color::from_srgb_u8(r, g, b, a))
}

// ── functional notation ───────────────────────────────────────────────────

/// Splits `a, b, c[, d]` or `a b c[ / d]` into three components and an optional alpha.
fn components(args: &str) -> Option<([&str; 3], Option<&str>)> {
    let (main, alpha): (Vec<&str>, Option<&str>) = if args.contains(',') {
        let mut parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let alpha = if parts.len() == 4 { parts.pop() } else { None };
        (parts, alpha)
    } else {
        let (main, alpha) = match args.split_once('/') {
            Some((main, alpha)) => (main, Some(alpha.trim())),
            None => (args, None),
        };
        (main.split_whitespace().collect(), alpha)
    };
    match main.as_slice() {
        [a, b, c] => Some(([*a, *b, *c], alpha)),
        _ => None,
    }
}

fn number(s: &str) -> Option<f32> {
    s.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// `50%` → `0.5`; a bare number is divided by `scale`.
fn fraction(s: &str, scale: f32) -> Option<f32> {
    match s.strip_suffix('%') {
        Some(pct) => number(pct).map(|v| v / 100.0),
        None => number(s).map(|v| v / scale),
    }
}

fn alpha(s: Option<&str>) -> Option<f32> {
    s.map_or(Some(1.0), |s| fraction(s, 1.0))
}

fn parse_rgb(args: &str) -> Option<Color> {
    let ([r, g, b], a) = components(args)?;
    Some(Color::from_straight(fraction(r, 255.0)?, fraction(g, 255.0)?, fraction(b, 255.0)?, alpha(a)?))
}

/// Hue angle in degrees.
fn hue(s: &str) -> Option<f32> {
    let units: [(&str, f32); 4] = [
        ("deg", 1.0),
        ("grad", 0.9),
        ("rad", 180.0 / std::f32::consts::PI),
        ("turn", 360.0),
    ];
    for (suffix, factor) in units {
        if let Some(v) = s.strip_suffix(suffix) {
            return number(v).map(|v| v * factor);
        }
    }
    number(s)
}

fn parse_hsl(args: &str) -> Option<Color> {
    let ([h, s, l], a) = components(args)?;
    let h = hue(h)?.rem_euclid(360.0);
    let s = fraction(s, 100.0)?.clamp(0.0, 1.0);
    let l = fraction(l, 100.0)?.clamp(0.0, 1.0);

    let reach = s * l.min(1.0 - l);
    let channel = |n: f32| {
        let k = (n + h / 30.0) % 12.0;
        l - reach * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    Some(Color::from_straight(channel(0.0), channel(8.0), channel(4.0), alpha(a)?))
}

// ── named colors ──────────────────────────────────────────────────────────

fn named(name: &str) -> Option<Color> {
    if name == "transparent" {
        return Some(Color::TRANSPARENT);
    }
    let &(_, rgb) = NAMED.iter().find(|(n, _)| *n == name)?;
    Some(Color::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255))
}

const NAMED: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-3 && (a.g - b.g).abs() < 1e-3 && (a.b - b.b).abs() < 1e-3 && (a.a - b.a).abs() < 1e-3
    }

    // ── named ─────────────────────────────────────────────────────────────

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(Color::parse("Black"), Some(Color::BLACK));
        assert_eq!(Color::parse("  white "), Some(Color::WHITE));
        assert_eq!(Color::parse("transparent"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Color::parse("notacolor"), None);
        assert_eq!(Color::parse(""), None);
    }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_forms() {
        assert!(approx(Color::parse("#f00").unwrap(), Color::from_srgb_u8(255, 0, 0, 255)));
        assert!(approx(Color::parse("#ff000080").unwrap(), Color::from_srgb_u8(255, 0, 0, 128)));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#gggggg"), None);
    }

    // ── functional ────────────────────────────────────────────────────────

    #[test]
    fn rgba_with_spaces() {
        assert_eq!(Color::parse("rgba( 0,0,0,0 )"), Some(Color::TRANSPARENT));
        assert!(approx(Color::parse("rgb(255, 0, 0)").unwrap(), Color::from_srgb_u8(255, 0, 0, 255)));
    }

    #[test]
    fn rgba_is_premultiplied() {
        let c = Color::parse("rgba(255, 255, 255, 0.5)").unwrap();
        assert!((c.r - 0.5).abs() < 1e-6);
        assert_eq!(c.to_straight().0, 1.0);
    }

    #[test]
    fn rgb_wrong_arity() {
        assert_eq!(Color::parse("rgb(1, 2)"), None);
        assert_eq!(Color::parse("rgb(1 2 3 4)"), None);
        assert_eq!(Color::parse("rgb(1, 2, 3, 4, 5)"), None);
        assert_eq!(Color::parse("rgb(1, 2, 3"), None);
        assert_eq!(Color::parse("cmyk(1, 2, 3)"), None);
    }

    #[test]
    fn rgb_accepts_every_argument_syntax() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        for s in ["rgb(255 0 0)", "rgb(100%, 0%, 0%)", "rgb(100% 0% 0%)", "rgba(255, 0, 0)", "rgb(255 0 0 / 1)"] {
            assert!(approx(Color::parse(s).unwrap(), red), "{s}");
        }
        let half = Color::parse("rgb(255 0 0 / 50%)").unwrap();
        assert!((half.a - 0.5).abs() < 1e-6);
        assert_eq!(Color::parse("rgb(255, 0, 0, 0.5)"), Some(half));
    }

    #[test]
    fn hsl_forms() {
        let lime = Color::from_srgb_u8(0, 255, 0, 255);
        for s in ["hsl(120, 100%, 50%)", "hsl(120deg 100% 50%)", "hsl(0.3333turn, 100%, 50%)", "hsl(480, 100%, 50%)"] {
            assert!(approx(Color::parse(s).unwrap(), lime), "{s}");
        }
        assert!(approx(Color::parse("hsl(0, 0%, 100%)").unwrap(), Color::WHITE));
        assert!(approx(Color::parse("hsl(240, 100%, 25%)").unwrap(), Color::from_straight(0.0, 0.0, 0.5, 1.0)));

        let faded = Color::parse("hsla(0, 100%, 50%, 0.25)").unwrap();
        assert!(approx(faded, Color::from_straight(1.0, 0.0, 0.0, 0.25)));
        assert_eq!(Color::parse("hsl(0, 100%)"), None);
    }

    #[test]
    fn full_named_table() {
        let cases = [
            ("lightyellow", 0xffffe0),
            ("darkorange", 0xff8c00),
            ("rebeccapurple", 0x663399),
            ("aliceblue", 0xf0f8ff),
            ("LightGoldenrodYellow", 0xfafad2),
        ];
        for (name, rgb) in cases {
            let expected = Color::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255);
            assert_eq!(Color::parse(name), Some(expected), "{name}");
        }
        assert_eq!(NAMED.len(), 148);
        assert!(NAMED.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
