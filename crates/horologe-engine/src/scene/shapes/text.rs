use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Horizontal anchoring of a text run relative to its anchor point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Whether glyphs were filled or outlined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextMode {
    Fill,
    /// Outlined text; `width` is the stroke width in surface pixels.
    Stroke { width: f32 },
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Requested font family; resolved against `text::FontSystem` at raster time.
    pub family: String,
    /// Font size in surface pixels.
    pub size: f32,
    pub paint: Paint,
    /// Anchor on the alphabetic baseline.
    pub anchor: Vec2,
    pub align: TextAlign,
    pub mode: TextMode,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, cmd: TextCmd) {
        if !cmd.text.is_empty() {
            self.push(DrawCmd::Text(cmd));
        }
    }
}
