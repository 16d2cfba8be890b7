//! Per-page decoration painters: background, cover composition, running
//! header/footer, and the specifications overlay. Each is invoked once per
//! rendered page of the layout it is attached to, independent of flowed
//! content. Positions are absolute page coordinates by design.

use printpdf::Op;

use crate::draw::{self, ImageHandle};
use crate::layout::{
    BODY_HEIGHT_PT, BODY_WIDTH_PT, MARGIN_BOTTOM_PT, MARGIN_LEFT_PT, MARGIN_TOP_PT,
    PAGE_HEIGHT_PT, PAGE_WIDTH_PT, Region,
};
use crate::types::CommercialInputs;

pub const COMPANY_NAME: &str = "G&O GmbH Kfz export service";

/// Everything the painters can reach: the commercial terms, the scraped
/// specification pairs, the resolved document date, and the registered
/// static images.
pub struct DecorContext<'a> {
    pub inputs: &'a CommercialInputs,
    pub specifications: &'a [(String, String)],
    pub date: String,
    pub cover_logo: ImageHandle,
    pub cover_background: ImageHandle,
    pub footer_logo: ImageHandle,
}

/// Full-page black fill under the cover composition.
pub fn paint_cover_background(_ctx: &DecorContext<'_>) -> Vec<Op> {
    draw::fill_rect(
        Region::new(0.0, 0.0, PAGE_WIDTH_PT, PAGE_HEIGHT_PT),
        draw::black(),
    )
}

/// The cover page: logo, hero image, title block and the recipient/sender
/// address block, all white on the black background.
pub fn paint_cover(ctx: &DecorContext<'_>) -> Vec<Op> {
    let mut ops = Vec::new();

    ops.extend(draw::image_fit(
        &ctx.cover_logo,
        Region::new(
            BODY_WIDTH_PT / 2.0 - MARGIN_LEFT_PT,
            BODY_HEIGHT_PT - 160.0,
            180.0,
            180.0,
        ),
    ));
    ops.extend(draw::image_fit(
        &ctx.cover_background,
        Region::new(
            (PAGE_WIDTH_PT - BODY_WIDTH_PT) / 2.0,
            PAGE_HEIGHT_PT / 4.0,
            500.0,
            500.0,
        ),
    ));

    ops.extend(draw::builtin_text(
        "Vehicle Purchase Quotation",
        24.0,
        MARGIN_LEFT_PT,
        237.0,
        draw::white(),
    ));
    ops.extend(draw::builtin_text(
        "Presented by G&O-KFZ",
        10.0,
        MARGIN_LEFT_PT,
        219.0,
        draw::white(),
    ));
    ops.extend(draw::builtin_text(
        "Berlin, Germany.",
        10.0,
        MARGIN_LEFT_PT,
        204.0,
        draw::white(),
    ));

    let address_rows: [(&str, &str); 6] = [
        ("To:", "G&O-KFZ"),
        (&ctx.inputs.purchaser_name, "Uhlandstrasse 82, 10717"),
        (&ctx.inputs.purchaser_phone, "Berlin, Germany"),
        (&ctx.inputs.purchaser_email, &ctx.inputs.seller_name),
        ("", &ctx.inputs.seller_phone),
        ("", "www.go-kfz.com"),
    ];
    let right_col_x = MARGIN_LEFT_PT + BODY_WIDTH_PT / 2.0 + 80.0;
    let block_bottom = MARGIN_BOTTOM_PT * 2.0;
    for (i, (left, right)) in address_rows.iter().enumerate() {
        let y = block_bottom + (address_rows.len() - 1 - i) as f32 * 15.0 + 4.0;
        if !left.is_empty() {
            ops.extend(draw::builtin_text(left, 11.0, MARGIN_LEFT_PT, y, draw::white()));
        }
        if !right.is_empty() {
            ops.extend(draw::builtin_text(right, 11.0, right_col_x, y, draw::white()));
        }
    }

    ops
}

/// Company-name label row near the top margin.
pub fn paint_header(_ctx: &DecorContext<'_>) -> Vec<Op> {
    let y = BODY_HEIGHT_PT + MARGIN_BOTTOM_PT + MARGIN_TOP_PT - 50.0;
    draw::builtin_text(COMPANY_NAME, 12.0, MARGIN_LEFT_PT, y, draw::black())
}

/// Footer logo plus the quotation number and date column. Runs on every
/// non-cover page so both stay visible throughout the document.
pub fn paint_footer(ctx: &DecorContext<'_>) -> Vec<Op> {
    let mut ops = Vec::new();

    ops.extend(draw::image_fit(
        &ctx.footer_logo,
        Region::new(MARGIN_LEFT_PT, MARGIN_BOTTOM_PT, 60.0, 60.0),
    ));

    let text_x = MARGIN_LEFT_PT + BODY_WIDTH_PT / 2.0 + 155.0;
    ops.extend(draw::builtin_text(
        &format!("Quotation No. {}", ctx.inputs.quotation_num),
        8.0,
        text_x,
        MARGIN_BOTTOM_PT + 17.0,
        draw::black(),
    ));
    ops.extend(draw::builtin_text(
        &format!("Date: {}", ctx.date),
        8.0,
        text_x,
        MARGIN_BOTTOM_PT + 3.0,
        draw::black(),
    ));

    ops
}

// The overlay sits above the Specifications frame top (the frame is
// shortened for exactly this reason); rows grow upward from this offset.
const OVERLAY_BOTTOM_PT: f32 = 610.0;
const OVERLAY_ROW_HEIGHT_PT: f32 = 18.0;
const OVERLAY_LABEL_X_PT: f32 = 157.0;
const OVERLAY_VALUE_X_PT: f32 = 297.0;

/// The raw label/value specification pairs, as a fixed-width two-column
/// table at a fixed vertical offset. Independent of pairization and of the
/// flowed feature grid.
pub fn paint_specs_overlay(ctx: &DecorContext<'_>) -> Vec<Op> {
    let mut ops = Vec::new();
    let count = ctx.specifications.len();
    for (i, (label, value)) in ctx.specifications.iter().enumerate() {
        let y = OVERLAY_BOTTOM_PT + (count - 1 - i) as f32 * OVERLAY_ROW_HEIGHT_PT + 5.0;
        ops.extend(draw::builtin_text(
            &crate::format::strip_unprintable(label),
            12.0,
            OVERLAY_LABEL_X_PT,
            y,
            draw::black(),
        ));
        ops.extend(draw::builtin_text(
            &crate::format::strip_unprintable(value),
            12.0,
            OVERLAY_VALUE_X_PT,
            y,
            draw::black(),
        ));
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ImageHandle;
    use printpdf::XObjectId;

    fn test_context(
        inputs: &CommercialInputs,
        specs: &'static [(String, String)],
    ) -> DecorContext<'static> {
        let handle = || ImageHandle {
            id: XObjectId::new(),
            width_px: 800,
            height_px: 600,
        };
        DecorContext {
            inputs: Box::leak(Box::new(inputs.clone())),
            specifications: specs,
            date: "01.01.2026".to_string(),
            cover_logo: handle(),
            cover_background: handle(),
            footer_logo: handle(),
        }
    }

    #[test]
    fn test_footer_mentions_quotation_and_date() {
        let ctx = test_context(&CommercialInputs::default(), &[]);
        let ops = paint_footer(&ctx);
        let text: Vec<String> = ops
            .iter()
            .filter_map(|op| match op {
                Op::WriteTextBuiltinFont { items, .. } => items.iter().find_map(|i| match i {
                    printpdf::TextItem::Text(t) => Some(t.clone()),
                    _ => None,
                }),
                _ => None,
            })
            .collect();
        assert!(text.iter().any(|t| t == "Quotation No. XX"));
        assert!(text.iter().any(|t| t == "Date: 01.01.2026"));
    }

    #[test]
    fn test_footer_logo_fits_sixty_point_box() {
        let ctx = test_context(&CommercialInputs::default(), &[]);
        let ops = paint_footer(&ctx);
        let transform = ops
            .iter()
            .find_map(|op| match op {
                Op::UseXobject { transform, .. } => Some(transform),
                _ => None,
            })
            .expect("footer paints its logo");
        let scale = transform.scale_x.unwrap();
        assert_eq!(scale, transform.scale_y.unwrap());
        // 800x600 px source scales to the full 60 pt width, 45 pt height
        assert!((800.0 * scale - 60.0).abs() < 0.01);
        assert!(600.0 * scale <= 60.0);
    }

    #[test]
    fn test_empty_specifications_paint_nothing() {
        let ctx = test_context(&CommercialInputs::default(), &[]);
        assert!(paint_specs_overlay(&ctx).is_empty());
    }
}
