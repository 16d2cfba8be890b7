pub mod assets;
pub mod builder;
pub mod decor;
mod draw;
pub mod financial;
pub mod flow;
pub mod format;
pub mod grid;
pub mod layout;
mod render;
mod types;

pub use assets::{BuildConfig, RawAssets};
pub use builder::build_quotation;
pub use draw::ImageHandle;
pub use financial::{FinancialBreakdown, breakdown};
pub use flow::{Block, Cell, DocumentFlow, Paragraph, Table, build_flow};
pub use format::{calculate_percentage, format_price, parse_decimal};
pub use grid::pairize;
pub use layout::{LayoutKind, LayoutRegistry, Region};
pub use types::*;
