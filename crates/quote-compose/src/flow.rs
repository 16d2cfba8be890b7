//! The document flow: the single ordered sequence of content blocks and
//! layout transitions handed to the pagination engine. Built once per
//! invocation, consumed once, discarded.

use crate::financial::FinancialBreakdown;
use crate::format::{format_price, strip_unprintable, trim_number};
use crate::grid::pairize;
use crate::layout::{BODY_WIDTH_PT, LayoutKind};
use crate::types::{CommercialInputs, VehicleData};

pub const PAYMENT_TERM_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellText {
    pub text: String,
    pub size: f32,
    pub align: Align,
}

/// One table cell. `Empty` doubles as the placeholder the pairization
/// helper fills odd rows with.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(CellText),
    /// Index into the registered gallery images.
    Image(usize),
}

impl Cell {
    pub fn text(text: impl Into<String>, size: f32) -> Self {
        Cell::Text(CellText {
            text: text.into(),
            size,
            align: Align::Left,
        })
    }

    pub fn centered(text: impl Into<String>, size: f32) -> Self {
        Cell::Text(CellText {
            text: text.into(),
            size,
            align: Align::Center,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
    pub col_widths: Vec<f32>,
    pub row_height: f32,
    /// Repeat the first row at the top of every continuation page.
    pub repeat_header: bool,
    pub grid_lines: bool,
    /// Leading columns excluded from grid lines and fills (the summary
    /// table is pushed right by an undecorated spacer column).
    pub grid_skip_cols: usize,
    pub header_fill: bool,
    pub footer_fill: bool,
}

impl Table {
    fn plain(rows: Vec<Vec<Cell>>, col_widths: Vec<f32>, row_height: f32) -> Self {
        Self {
            rows,
            col_widths,
            row_height,
            repeat_header: false,
            grid_lines: false,
            grid_skip_cols: 0,
            header_fill: false,
            footer_fill: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphFont {
    /// Builtin Helvetica: headings, labels, table text.
    Builtin,
    /// The embedded body face: guide paragraphs and the closing statement.
    Body,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub size: f32,
    pub leading: f32,
    pub align: Align,
    pub font: ParagraphFont,
    pub indent: f32,
}

fn heading(text: impl Into<String>, size: f32) -> Paragraph {
    Paragraph {
        text: text.into(),
        size,
        leading: size * 1.25,
        align: Align::Left,
        font: ParagraphFont::Builtin,
        indent: 0.0,
    }
}

fn centered_heading(text: impl Into<String>, size: f32) -> Paragraph {
    Paragraph {
        align: Align::Center,
        ..heading(text, size)
    }
}

fn body_paragraph(text: impl Into<String>) -> Paragraph {
    Paragraph {
        text: text.into(),
        size: 10.0,
        leading: 14.0,
        align: Align::Left,
        font: ParagraphFont::Body,
        indent: 19.0,
    }
}

/// An atomic renderable unit of the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Table(Table),
    Paragraph(Paragraph),
    Spacer(f32),
    /// A thin horizontal rule of the given width.
    Rule(f32),
    PageBreak,
    /// Latches the layout the next page break switches into.
    SwitchLayout(LayoutKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFlow {
    pub blocks: Vec<Block>,
}

/// Assemble the full flow. Layout transitions are strictly linear:
/// Cover -> Gallery -> Specifications -> Standard; the terms stay on the
/// financial page and the guide gets a plain page break.
pub fn build_flow(
    vehicle: &VehicleData,
    inputs: &CommercialInputs,
    vehicle_price: f64,
    totals: &FinancialBreakdown,
    gallery_len: usize,
) -> DocumentFlow {
    let mut blocks = vec![
        Block::SwitchLayout(LayoutKind::Gallery),
        Block::PageBreak,
        Block::Table(gallery_table(gallery_len)),
        Block::SwitchLayout(LayoutKind::Specifications),
        Block::PageBreak,
        Block::Table(features_table(&vehicle.car_features)),
        Block::SwitchLayout(LayoutKind::Standard),
        Block::PageBreak,
        Block::Spacer(35.0),
        Block::Paragraph(heading("Financial Offer:", 16.0)),
        Block::Spacer(25.0),
        Block::Table(itemized_costs_table(vehicle_price, inputs)),
        Block::Table(summary_table(totals, inputs)),
        Block::Spacer(100.0),
        Block::Paragraph(heading("Payment terms:", 16.0)),
        Block::Spacer(6.0),
    ];

    for i in 0..PAYMENT_TERM_LINES {
        blocks.push(Block::Paragraph(heading(format!("{}-", i + 1), 16.0)));
        blocks.push(Block::Spacer(6.0));
    }
    blocks.push(Block::PageBreak);

    blocks.push(Block::Paragraph(centered_heading("EXPORT GUIDE", 22.0)));
    blocks.push(Block::Spacer(80.0));
    blocks.extend(export_guide_blocks());

    if vehicle.car_specifications.is_empty() {
        tracing::warn!(car_id = %vehicle.car_id, "listing has no specifications");
    }

    DocumentFlow { blocks }
}

fn gallery_table(gallery_len: usize) -> Table {
    if gallery_len == 0 {
        tracing::warn!("gallery is empty; rendering an empty grid");
    }
    let cells: Vec<Cell> = (0..gallery_len).map(Cell::Image).collect();
    let rows = pairize(cells).into_iter().map(Vec::from).collect();
    // 4 pt cell padding on each side leaves a 230 pt image box.
    Table::plain(rows, vec![BODY_WIDTH_PT / 2.0; 2], 238.0)
}

fn features_table(features: &[String]) -> Table {
    if features.is_empty() {
        tracing::warn!("listing has no feature list; rendering the header only");
    }
    let bullets: Vec<Cell> = features
        .iter()
        .map(|feature| Cell::text(format!("\u{2022} {}", strip_unprintable(feature)), 12.0))
        .collect();

    let mut rows: Vec<Vec<Cell>> = vec![vec![Cell::text("Features", 12.0), Cell::Empty]];
    rows.extend(pairize(bullets).into_iter().map(Vec::from));

    let mut table = Table::plain(rows, vec![BODY_WIDTH_PT / 2.0; 2], 18.0);
    table.repeat_header = true;
    table
}

fn euro(value: f64) -> String {
    format!("\u{20ac}{}", format_price(value))
}

fn itemized_costs_table(vehicle_price: f64, inputs: &CommercialInputs) -> Table {
    let line = |no: &str, label: &str, amount: f64| {
        vec![
            Cell::centered(no, 11.0),
            Cell::text(label, 11.0),
            Cell::centered(euro(amount), 11.0),
        ]
    };
    let rows = vec![
        vec![
            Cell::centered("S.NO.", 11.0),
            Cell::text("DETAILS", 11.0),
            Cell::centered("TOTAL PRICE \u{20ac}", 11.0),
        ],
        line("1.", "Car Net Price", vehicle_price),
        line("2.", "Shipping Fees", inputs.shipping_fees),
        line("3.", "Customs", inputs.customs),
        line("4.", "Clearance and shipping to Cairo", inputs.logistics_fees),
    ];

    let mut table = Table::plain(rows, vec![35.0, 238.0, 238.0], 26.0);
    table.grid_lines = true;
    table.header_fill = true;
    table
}

fn summary_table(totals: &FinancialBreakdown, inputs: &CommercialInputs) -> Table {
    let fee_label = format!("G&O fees (%{})", trim_number(inputs.company_fees));
    let rows = vec![
        vec![
            Cell::Empty,
            Cell::text("Subtotal", 11.0),
            Cell::centered(euro(totals.subtotal), 11.0),
        ],
        vec![
            Cell::Empty,
            Cell::text(fee_label, 11.0),
            Cell::centered(euro(totals.company_fee), 11.0),
        ],
        vec![
            Cell::Empty,
            Cell::text("Grand Total", 14.0),
            Cell::centered(euro(totals.grand_total), 14.0),
        ],
    ];

    let mut table = Table::plain(rows, vec![273.0, 119.0, 119.0], 26.0);
    table.grid_lines = true;
    table.grid_skip_cols = 1;
    table.footer_fill = true;
    table
}

const GUIDE_SECTIONS: [(&str, &str); 5] = [
    (
        "Discover your ideal car",
        "Select your desired car from reputable marketplaces such as Mobile.de or \
         AutoScout24.de, and our team of specialists will assist you in the selection \
         process, ensuring that you make an informed decision.",
    ),
    (
        "Confirm availability",
        "Our representative will contact the seller on your behalf to confirm the \
         availability and condition of the car. We take every measure to ensure that you \
         receive a car that meets your expectations and requirements.",
    ),
    (
        "Sign contract",
        "We work closely with the Egyptian Embassy in Berlin to prepare an official \
         binding Contract, verified by a German Notar and the Egyptian Embassy. This \
         ensures that the transaction is legally binding, secure, and transparent.",
    ),
    (
        "Complete payment",
        "Once the full payment is made, we will arrange for the car to be picked up by a \
         reputable transporter and shipped to Alexandria, Egypt. We ensure that your car \
         is shipped safely and securely, and we provide regular updates on the shipping \
         status.",
    ),
    (
        "Shipping & customs clearance",
        "Our team of representatives in Egypt will handle all the necessary customs \
         clearance procedures, ensuring that your car is cleared for import into Egypt. \
         We will then arrange for the delivery of your car to your doorstep in Egypt, \
         providing you with a seamless and hassle-free experience.",
    ),
];

const GUIDE_CLOSING: &str =
    "Thank you for considering our car export services. We are confident that we can \
     meet your requirements and deliver a seamless experience. Should you have any \
     questions or need further clarification, please do not hesitate to contact our \
     dedicated customer support team. We look forward to the opportunity of working \
     with you and ensuring a successful car export. Sincerely,";

fn export_guide_blocks() -> Vec<Block> {
    let mut blocks = vec![Block::Rule(510.0)];
    for (title, body) in GUIDE_SECTIONS {
        blocks.push(Block::Spacer(12.0));
        blocks.push(Block::Paragraph(heading(format!("\u{2022} {title}"), 14.0)));
        blocks.push(Block::Spacer(4.0));
        blocks.push(Block::Paragraph(body_paragraph(body)));
        blocks.push(Block::Spacer(14.0));
    }
    blocks.push(Block::Spacer(15.0));
    blocks.push(Block::Rule(510.0));
    blocks.push(Block::Paragraph(body_paragraph(GUIDE_CLOSING)));
    blocks.push(Block::Spacer(70.0));
    blocks.push(Block::Paragraph(centered_heading("THANK YOU", 18.0)));
    blocks
}
