//! One-shot document build: load assets, compute the money figures, build
//! the flow, paginate, write `<car_id>.pdf`.

use printpdf::{ParsedFont, PdfDocument, PdfSaveOptions, PdfWarnMsg, RawImage};
use std::path::PathBuf;

use crate::assets::{BuildConfig, RawAssets, read_gallery};
use crate::decor::DecorContext;
use crate::draw::ImageHandle;
use crate::financial;
use crate::flow;
use crate::layout::LayoutRegistry;
use crate::render::{self, RenderContext};
use crate::types::{CommercialInputs, QuoteError, Result, VehicleData};

/// Build one quotation document and return the path it was written to.
///
/// The inputs are a fully-materialized snapshot; the build is synchronous
/// under the hood and either completes or fails without leaving a partial
/// file behind.
pub async fn build_quotation(
    vehicle: &VehicleData,
    inputs: &CommercialInputs,
    config: &BuildConfig,
) -> Result<PathBuf> {
    let vehicle = vehicle.clone();
    let inputs = inputs.clone();
    let config = config.clone();
    let output_path = config.output_dir.join(format!("{}.pdf", vehicle.car_id));

    // Composition is CPU-bound, spawn blocking
    let bytes =
        tokio::task::spawn_blocking(move || compose(&vehicle, &inputs, &config)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    Ok(output_path)
}

fn compose(
    vehicle: &VehicleData,
    inputs: &CommercialInputs,
    config: &BuildConfig,
) -> Result<Vec<u8>> {
    tracing::info!(car_id = %vehicle.car_id, "building quotation document");

    let raw = RawAssets::load(&config.asset_dir)?;

    let mut warnings = Vec::new();
    let body_font = ParsedFont::from_bytes(&raw.body_font, 0, &mut warnings)
        .ok_or_else(|| QuoteError::Asset("failed to parse body font".to_string()))?;

    let mut doc = PdfDocument::new("Vehicle Purchase Quotation");
    let font_id = doc.add_font(&body_font);

    let cover_logo = register_image(&mut doc, &raw.cover_logo, &mut warnings)?;
    let cover_background = register_image(&mut doc, &raw.cover_background, &mut warnings)?;
    let footer_logo = register_image(&mut doc, &raw.footer_logo, &mut warnings)?;

    let gallery_paths = vehicle.gallery_images();
    let mut gallery = Vec::with_capacity(gallery_paths.len());
    for bytes in read_gallery(&gallery_paths)? {
        gallery.push(register_image(&mut doc, &bytes, &mut warnings)?);
    }

    let vehicle_price = vehicle.car_price.as_f64()?;
    let totals = financial::breakdown(
        vehicle_price,
        inputs.shipping_fees,
        inputs.customs,
        inputs.logistics_fees,
        inputs.company_fees,
    );

    let document_flow = flow::build_flow(vehicle, inputs, vehicle_price, &totals, gallery.len());

    let ctx = RenderContext {
        font_id,
        body_font: &body_font,
        gallery,
        decor: DecorContext {
            inputs,
            specifications: &vehicle.car_specifications,
            date: inputs.document_date(),
            cover_logo,
            cover_background,
            footer_logo,
        },
        registry: LayoutRegistry::new(),
    };

    doc.pages = render::paginate(&document_flow, &ctx);

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    tracing::info!(
        car_id = %vehicle.car_id,
        pages = doc.pages.len(),
        "quotation composed"
    );
    Ok(bytes)
}

fn register_image(
    doc: &mut PdfDocument,
    bytes: &[u8],
    warnings: &mut Vec<PdfWarnMsg>,
) -> Result<ImageHandle> {
    let image = RawImage::decode_from_bytes(bytes, warnings)
        .map_err(|e| QuoteError::Asset(e.to_string()))?;
    let (width_px, height_px) = (image.width, image.height);
    let id = doc.add_image(&image);
    Ok(ImageHandle {
        id,
        width_px,
        height_px,
    })
}
