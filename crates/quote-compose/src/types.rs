use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("format error: {0}")]
    Format(String),
    #[error("missing asset: {0}")]
    AssetMissing(PathBuf),
    #[error("asset error: {0}")]
    Asset(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, QuoteError>;

/// The listing price arrives either as a bare number or as a numeric string,
/// depending on which marketplace the scraper pulled it from.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            PriceField::Number(n) => Ok(*n),
            PriceField::Text(s) => crate::format::parse_decimal(s),
        }
    }
}

/// One scraped vehicle listing. Produced by the scraping collaborator and
/// read-only to the composition engine.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleData {
    /// Used as the output filename key (`<car_id>.pdf`).
    pub car_id: String,
    pub car_price: PriceField,
    /// Ordered label/value pairs, rendered as the specifications overlay.
    #[serde(default)]
    pub car_specifications: Vec<(String, String)>,
    #[serde(default)]
    pub car_features: Vec<String>,
    /// Paths to pre-normalized image files on disk.
    #[serde(default)]
    pub car_images: Vec<PathBuf>,
}

impl VehicleData {
    /// Images shown in the gallery grid. The primary/cover shot (file stem
    /// containing "main") is excluded.
    pub fn gallery_images(&self) -> Vec<&PathBuf> {
        self.car_images
            .iter()
            .filter(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(|stem| !stem.contains("main"))
                    .unwrap_or(true)
            })
            .collect()
    }
}

/// User-supplied commercial terms. Every key is optional; absent keys take
/// the documented defaults. Immutable for the duration of one build.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommercialInputs {
    pub seller_name: String,
    pub seller_phone: String,
    pub purchaser_name: String,
    pub purchaser_phone: String,
    pub purchaser_email: String,
    pub shipping_fees: f64,
    pub customs: f64,
    pub logistics_fees: f64,
    pub company_fees: f64,
    pub quotation_num: String,
    /// `dd.mm.yyyy`; today's date when absent.
    pub date: Option<String>,
}

impl Default for CommercialInputs {
    fn default() -> Self {
        Self {
            seller_name: "Mr.".to_string(),
            seller_phone: "xxxxxxxxxxx".to_string(),
            purchaser_name: "(PURCHASER NAME)".to_string(),
            purchaser_phone: "(PHONE NO)".to_string(),
            purchaser_email: "(EMAIL)".to_string(),
            shipping_fees: 0.0,
            customs: 0.0,
            logistics_fees: 0.0,
            company_fees: 7.0,
            quotation_num: "XX".to_string(),
            date: None,
        }
    }
}

impl CommercialInputs {
    pub fn document_date(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%d.%m.%Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes_with_string_price() {
        let json = r#"{
            "car_id": "366683071",
            "car_price": "23650",
            "car_specifications": [["Mileage", "45.000 km"], ["Fuel", "Petrol"]],
            "car_features": ["LED headlights"],
            "car_images": ["images/img-0.jpg", "images/img-main.jpg"]
        }"#;
        let vehicle: VehicleData = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.car_id, "366683071");
        assert_eq!(vehicle.car_price.as_f64().unwrap(), 23650.0);
        assert_eq!(vehicle.car_specifications.len(), 2);
    }

    #[test]
    fn test_listing_deserializes_with_numeric_price() {
        let json = r#"{"car_id": "x", "car_price": 19900.5}"#;
        let vehicle: VehicleData = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.car_price.as_f64().unwrap(), 19900.5);
        assert!(vehicle.car_features.is_empty());
        assert!(vehicle.car_images.is_empty());
    }

    #[test]
    fn test_bad_price_is_a_format_error() {
        let json = r#"{"car_id": "x", "car_price": "on request"}"#;
        let vehicle: VehicleData = serde_json::from_str(json).unwrap();
        assert!(matches!(
            vehicle.car_price.as_f64(),
            Err(QuoteError::Format(_))
        ));
    }

    #[test]
    fn test_gallery_excludes_primary_image() {
        let vehicle: VehicleData = serde_json::from_str(
            r#"{"car_id": "x", "car_price": 1,
                "car_images": ["a/img-0.jpg", "a/img-main.jpg", "a/img-1.jpg"]}"#,
        )
        .unwrap();
        let gallery = vehicle.gallery_images();
        assert_eq!(gallery.len(), 2);
        assert!(gallery.iter().all(|p| !p.to_string_lossy().contains("main")));
    }

    #[test]
    fn test_commercial_inputs_defaults() {
        let inputs: CommercialInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(inputs.company_fees, 7.0);
        assert_eq!(inputs.quotation_num, "XX");
        assert_eq!(inputs.shipping_fees, 0.0);
        assert!(inputs.date.is_none());
    }

    #[test]
    fn test_explicit_date_is_kept() {
        let inputs: CommercialInputs =
            serde_json::from_str(r#"{"date": "01.02.2026"}"#).unwrap();
        assert_eq!(inputs.document_date(), "01.02.2026");
    }
}
