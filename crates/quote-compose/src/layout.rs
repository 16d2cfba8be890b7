//! Page templates: the four layout kinds, their content frames, and the
//! decoration hooks fired once per rendered page of each layout.

use printpdf::Op;

use crate::decor::{self, DecorContext};

// A4 geometry in points. Margins follow the quotation document:
// 1.5 cm left/right, 0.75 cm bottom, 1 in top.
pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
pub const MARGIN_LEFT_PT: f32 = 42.52;
pub const MARGIN_RIGHT_PT: f32 = 42.52;
pub const MARGIN_TOP_PT: f32 = 72.0;
pub const MARGIN_BOTTOM_PT: f32 = 21.26;

pub const BODY_WIDTH_PT: f32 = PAGE_WIDTH_PT - MARGIN_LEFT_PT - MARGIN_RIGHT_PT;
pub const BODY_HEIGHT_PT: f32 = PAGE_HEIGHT_PT - MARGIN_TOP_PT - MARGIN_BOTTOM_PT;

/// Rectangle in PDF user space (origin bottom-left), in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// The four page templates of the document, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Cover,
    Gallery,
    Specifications,
    Standard,
}

/// A per-page painter. Plain function values, not trait objects: only the
/// Cover layout differs in decoration, and that is a variant case.
pub type DecorFn = fn(&DecorContext<'_>) -> Vec<Op>;

pub struct LayoutConfig {
    pub kind: LayoutKind,
    /// The frame flowed content is laid into. The cover frame has zero
    /// height: its content is entirely decoration.
    pub frame: Region,
    pub decorations: &'static [DecorFn],
}

static COVER_DECORATIONS: &[DecorFn] = &[decor::paint_cover_background, decor::paint_cover];
static CHROME_DECORATIONS: &[DecorFn] = &[decor::paint_header, decor::paint_footer];
static SPECIFICATION_DECORATIONS: &[DecorFn] = &[
    decor::paint_header,
    decor::paint_footer,
    decor::paint_specs_overlay,
];

/// All page layouts of one document build, registered once and referenced
/// by kind when the flow transitions.
pub struct LayoutRegistry {
    configs: [LayoutConfig; 4],
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self {
            // Indexed by `LayoutKind` discriminant.
            configs: [
                LayoutConfig {
                    kind: LayoutKind::Cover,
                    frame: Region::new(0.0, 0.0, PAGE_WIDTH_PT, 0.0),
                    decorations: COVER_DECORATIONS,
                },
                LayoutConfig {
                    kind: LayoutKind::Gallery,
                    frame: Region::new(
                        MARGIN_LEFT_PT,
                        MARGIN_BOTTOM_PT,
                        BODY_WIDTH_PT,
                        BODY_HEIGHT_PT,
                    ),
                    decorations: CHROME_DECORATIONS,
                },
                LayoutConfig {
                    kind: LayoutKind::Specifications,
                    // Shortened so the flowed feature grid stays clear of the
                    // fixed-position specifications overlay above it.
                    frame: Region::new(
                        MARGIN_LEFT_PT,
                        MARGIN_BOTTOM_PT * 3.0,
                        BODY_WIDTH_PT,
                        BODY_HEIGHT_PT - (MARGIN_TOP_PT * 2.0 + 70.0),
                    ),
                    decorations: SPECIFICATION_DECORATIONS,
                },
                LayoutConfig {
                    kind: LayoutKind::Standard,
                    frame: Region::new(
                        MARGIN_LEFT_PT,
                        MARGIN_BOTTOM_PT * 3.0,
                        BODY_WIDTH_PT,
                        BODY_HEIGHT_PT - MARGIN_TOP_PT + 30.0,
                    ),
                    decorations: CHROME_DECORATIONS,
                },
            ],
        }
    }

    pub fn config(&self, kind: LayoutKind) -> &LayoutConfig {
        &self.configs[kind as usize]
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
