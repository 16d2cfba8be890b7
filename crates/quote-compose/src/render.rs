//! The pagination engine: consumes the document flow once and produces the
//! final page sequence, firing each layout's decoration hooks on every page
//! rendered under that layout.

use printpdf::{FontId, Mm, Op, ParsedFont, PdfPage};

use crate::decor::DecorContext;
use crate::draw::{self, ImageHandle};
use crate::flow::{Align, Block, Cell, DocumentFlow, Paragraph, ParagraphFont, Table};
use crate::layout::{LayoutKind, LayoutRegistry, Region};

pub(crate) struct RenderContext<'a> {
    pub font_id: FontId,
    pub body_font: &'a ParsedFont,
    pub gallery: Vec<ImageHandle>,
    pub decor: DecorContext<'a>,
    pub registry: LayoutRegistry,
}

pub(crate) fn paginate(flow: &DocumentFlow, ctx: &RenderContext<'_>) -> Vec<PdfPage> {
    let mut pager = Pager::new(ctx);
    for block in &flow.blocks {
        pager.push(block);
    }
    pager.finish()
}

/// State machine over layout transitions. The cover page is open from the
/// start; every explicit page break closes the current page and opens a
/// fresh one in the latched layout. Content that overflows its frame forces
/// an implicit break that keeps the current layout.
struct Pager<'a, 'b> {
    ctx: &'b RenderContext<'a>,
    current: LayoutKind,
    pending: Option<LayoutKind>,
    cursor: f32,
    ops: Vec<Op>,
    pages: Vec<PdfPage>,
}

impl<'a, 'b> Pager<'a, 'b> {
    fn new(ctx: &'b RenderContext<'a>) -> Self {
        let cursor = ctx.registry.config(LayoutKind::Cover).frame.top();
        Self {
            ctx,
            current: LayoutKind::Cover,
            pending: None,
            cursor,
            ops: Vec::new(),
            pages: Vec::new(),
        }
    }

    fn frame(&self) -> Region {
        self.ctx.registry.config(self.current).frame
    }

    fn close_page(&mut self) {
        let config = self.ctx.registry.config(self.current);
        let mut page_ops = Vec::new();
        for paint in config.decorations {
            page_ops.extend(paint(&self.ctx.decor));
        }
        page_ops.append(&mut self.ops);
        self.pages.push(PdfPage::new(Mm(210.0), Mm(297.0), page_ops));
    }

    fn break_page(&mut self, switch: bool) {
        self.close_page();
        if switch {
            if let Some(kind) = self.pending.take() {
                self.current = kind;
            }
        }
        self.cursor = self.frame().top();
    }

    fn push(&mut self, block: &Block) {
        match block {
            Block::SwitchLayout(kind) => self.pending = Some(*kind),
            Block::PageBreak => self.break_page(true),
            Block::Spacer(height) => {
                if self.cursor - height < self.frame().y {
                    self.break_page(false);
                } else {
                    self.cursor -= height;
                }
            }
            Block::Rule(width) => self.push_rule(*width),
            Block::Paragraph(paragraph) => self.push_paragraph(paragraph),
            Block::Table(table) => self.push_table(table),
        }
    }

    fn push_rule(&mut self, width: f32) {
        if self.cursor - 8.0 < self.frame().y {
            self.break_page(false);
        }
        let frame = self.frame();
        let y = self.cursor - 3.0;
        let clamped = width.min(frame.width);
        self.ops.extend(draw::stroke_line(
            frame.x,
            y,
            frame.x + clamped,
            y,
            0.5,
            draw::light_grey(),
        ));
        self.cursor -= 8.0;
    }

    fn measure(&self, font: ParagraphFont, text: &str, size: f32) -> f32 {
        match font {
            ParagraphFont::Body => draw::parsed_text_width(self.ctx.body_font, text, size),
            ParagraphFont::Builtin => draw::builtin_text_width(text, size),
        }
    }

    fn push_paragraph(&mut self, paragraph: &Paragraph) {
        let max_width = self.frame().width - paragraph.indent;
        let lines = wrap_text(&paragraph.text, max_width, |text| {
            self.measure(paragraph.font, text, paragraph.size)
        });

        for line in lines {
            if self.cursor - paragraph.leading < self.frame().y {
                self.break_page(false);
            }
            let frame = self.frame();
            let x = match paragraph.align {
                Align::Left => frame.x + paragraph.indent,
                Align::Center => {
                    let width = self.measure(paragraph.font, &line, paragraph.size);
                    frame.x + (frame.width - width) / 2.0
                }
            };
            let baseline = self.cursor - paragraph.size * 0.8;
            let ops = match paragraph.font {
                ParagraphFont::Builtin => {
                    draw::builtin_text(&line, paragraph.size, x, baseline, draw::black())
                }
                ParagraphFont::Body => draw::body_text(
                    &self.ctx.font_id,
                    &line,
                    paragraph.size,
                    x,
                    baseline,
                    draw::black(),
                ),
            };
            self.ops.extend(ops);
            self.cursor -= paragraph.leading;
        }
    }

    fn push_table(&mut self, table: &Table) {
        if table.rows.is_empty() {
            return;
        }
        let mut idx = 0;
        while idx < table.rows.len() {
            if self.cursor - table.row_height < self.frame().y {
                self.break_page(false);
                if table.repeat_header && idx > 0 {
                    self.draw_row(table, 0);
                }
            }
            self.draw_row(table, idx);
            idx += 1;
        }
    }

    fn draw_row(&mut self, table: &Table, row_idx: usize) {
        let frame = self.frame();
        let row = &table.rows[row_idx];
        let y_top = self.cursor;
        let y_bottom = y_top - table.row_height;

        let skip_width: f32 = table.col_widths.iter().take(table.grid_skip_cols).sum();
        let grid_x = frame.x + skip_width;
        let grid_width: f32 = table.col_widths.iter().skip(table.grid_skip_cols).sum();

        let fill_row = (table.header_fill && row_idx == 0)
            || (table.footer_fill && row_idx == table.rows.len() - 1);
        if fill_row {
            self.ops.extend(draw::fill_rect(
                Region::new(grid_x, y_bottom, grid_width, table.row_height),
                draw::light_grey(),
            ));
        }

        let mut x = frame.x;
        for (col, cell) in row.iter().enumerate() {
            let width = table
                .col_widths
                .get(col)
                .copied()
                .unwrap_or(frame.width / row.len() as f32);
            match cell {
                Cell::Empty => {}
                Cell::Text(text) => {
                    let baseline =
                        y_bottom + (table.row_height - text.size) / 2.0 + text.size * 0.25;
                    let tx = match text.align {
                        Align::Left => x + 4.0,
                        Align::Center => {
                            x + (width - draw::builtin_text_width(&text.text, text.size)) / 2.0
                        }
                    };
                    self.ops.extend(draw::builtin_text(
                        &text.text,
                        text.size,
                        tx,
                        baseline,
                        draw::black(),
                    ));
                }
                Cell::Image(index) => {
                    if let Some(handle) = self.ctx.gallery.get(*index) {
                        self.ops.extend(draw::image_fit(
                            handle,
                            Region::new(
                                x + 4.0,
                                y_bottom + 4.0,
                                width - 8.0,
                                table.row_height - 8.0,
                            ),
                        ));
                    }
                }
            }
            x += width;
        }

        if table.grid_lines {
            let grey = draw::light_grey;
            self.ops
                .extend(draw::stroke_line(grid_x, y_top, grid_x + grid_width, y_top, 0.5, grey()));
            self.ops.extend(draw::stroke_line(
                grid_x,
                y_bottom,
                grid_x + grid_width,
                y_bottom,
                0.5,
                grey(),
            ));
            let mut vx = grid_x;
            self.ops
                .extend(draw::stroke_line(vx, y_bottom, vx, y_top, 0.5, grey()));
            for width in table.col_widths.iter().skip(table.grid_skip_cols) {
                vx += width;
                self.ops
                    .extend(draw::stroke_line(vx, y_bottom, vx, y_top, 0.5, grey()));
            }
        }

        self.cursor = y_bottom;
    }

    fn finish(mut self) -> Vec<PdfPage> {
        self.close_page();
        self.pages
    }
}

/// Greedy word wrap against a measuring function. A single word wider than
/// the limit still gets its own line.
pub(crate) fn wrap_text(
    text: &str,
    max_width: f32,
    measure: impl Fn(&str) -> f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
