//! Low-level op builders shared by the decoration painters and the
//! pagination engine.

use printpdf::*;

use crate::layout::Region;

/// A registered image xobject plus its native pixel size.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    pub id: XObjectId,
    pub width_px: usize,
    pub height_px: usize,
}

pub(crate) fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

pub(crate) fn black() -> Color {
    rgb(0.0, 0.0, 0.0)
}

pub(crate) fn white() -> Color {
    rgb(1.0, 1.0, 1.0)
}

pub(crate) fn light_grey() -> Color {
    rgb(0.83, 0.83, 0.83)
}

fn line_point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point {
            x: Pt(x),
            y: Pt(y),
        },
        bezier: false,
    }
}

/// Text in the builtin Helvetica face, baseline at `(x, y)`.
pub(crate) fn builtin_text(text: &str, size: f32, x: f32, y: f32, color: Color) -> Vec<Op> {
    vec![
        Op::SetFillColor { col: color },
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(x),
                y: Pt(y),
            },
        },
        Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(size),
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        },
        Op::EndTextSection,
    ]
}

/// Text in the embedded body font, baseline at `(x, y)`.
pub(crate) fn body_text(
    font: &FontId,
    text: &str,
    size: f32,
    x: f32,
    y: f32,
    color: Color,
) -> Vec<Op> {
    vec![
        Op::SetFillColor { col: color },
        Op::StartTextSection,
        Op::SetFontSize {
            font: font.clone(),
            size: Pt(size),
        },
        Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Pt(x), Pt(y)),
        },
        Op::WriteText {
            items: vec![TextItem::Text(text.to_string())],
            font: font.clone(),
        },
        Op::EndTextSection,
    ]
}

pub(crate) fn fill_rect(region: Region, color: Color) -> Vec<Op> {
    let points = vec![
        line_point(region.x, region.y),
        line_point(region.x + region.width, region.y),
        line_point(region.x + region.width, region.y + region.height),
        line_point(region.x, region.y + region.height),
    ];
    vec![
        Op::SetFillColor { col: color },
        Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        },
    ]
}

pub(crate) fn stroke_line(
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    thickness: f32,
    color: Color,
) -> Vec<Op> {
    vec![
        Op::SetOutlineColor { col: color },
        Op::SetOutlineThickness { pt: Pt(thickness) },
        Op::DrawLine {
            line: Line {
                points: vec![line_point(x1, y1), line_point(x2, y2)],
                is_closed: false,
            },
        },
    ]
}

/// Place an image inside a box, scaled uniformly to fit and centered.
/// Pixels map 1:1 to points before scaling (dpi 72).
pub(crate) fn image_fit(handle: &ImageHandle, region: Region) -> Vec<Op> {
    if handle.width_px == 0 || handle.height_px == 0 {
        return Vec::new();
    }
    let scale = (region.width / handle.width_px as f32)
        .min(region.height / handle.height_px as f32);
    let width = handle.width_px as f32 * scale;
    let height = handle.height_px as f32 * scale;
    let x = region.x + (region.width - width) / 2.0;
    let y = region.y + (region.height - height) / 2.0;
    vec![Op::UseXobject {
        id: handle.id.clone(),
        transform: XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(y)),
            rotate: None,
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
        },
    }]
}

/// Width of a run of text in the embedded font, from its glyph advances.
pub(crate) fn parsed_text_width(font: &ParsedFont, text: &str, size: f32) -> f32 {
    text.chars()
        .filter_map(|ch| font.lookup_glyph_index(ch as u32))
        .map(|glyph| font.get_horizontal_advance(glyph) as f32 / 1000.0 * size)
        .sum()
}

/// Approximate width for the builtin Helvetica face, which ships without
/// metrics. Per-character class estimates (fractions of the em, from the
/// AFM widths) keep centered headings visually centered.
pub(crate) fn builtin_text_width(text: &str, size: f32) -> f32 {
    text.chars()
        .map(|ch| match ch {
            'i' | 'j' | 'l' | 'I' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | ' ' => 0.28,
            'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '/' => 0.33,
            'm' | 'w' | 'M' | 'W' | '%' | '@' => 0.89,
            'A'..='Z' | '&' => 0.70,
            _ => 0.55,
        })
        .sum::<f32>()
        * size
}
