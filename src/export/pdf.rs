use crate::models::granularity::Granularity;
use crate::models::grid_cell::GridCell;
use crate::models::milestone::Milestone;
use crate::utils::color::hex_to_rgb_f32;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const PAST_RGB: (f32, f32, f32) = (0.24, 0.47, 0.71);
const CURRENT_RGB: (f32, f32, f32) = (0.95, 0.77, 0.06);
const FUTURE_RGB: (f32, f32, f32) = (0.93, 0.93, 0.93);
const FALLBACK_MILESTONE_RGB: (f32, f32, f32) = (0.88, 0.35, 0.54);

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // Hand-managed object ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Single global font
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,

            next_id,
            font_id,

            font_size: 8.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and its content stream
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_square(&self, content: &mut Content, x: f32, y: f32, side: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, side, side);
        content.fill_nonzero();
        content.restore_state();
    }

    fn cell_rgb(cell: &GridCell) -> (f32, f32, f32) {
        if let Some(m) = cell.milestone {
            return hex_to_rgb_f32(&m.color).unwrap_or(FALLBACK_MILESTONE_RGB);
        }
        if cell.is_current {
            CURRENT_RGB
        } else if cell.is_past {
            PAST_RGB
        } else {
            FUTURE_RGB
        }
    }

    /// Paint the life grid across as many pages as needed: one row per age
    /// year, `units_per_year` squares per row, age labels on the left, a
    /// milestone legend after the last row.
    pub fn draw_grid(&mut self, title: &str, cells: &[GridCell], granularity: Granularity) {
        let units = granularity.units_per_year() as usize;
        let label_w = 40.0;

        let usable_w = self.page_w - 2.0 * self.margin - label_w;
        let side = (usable_w / units as f32).min(10.0);
        let gap = side * 0.15;
        let row_h = side + gap;

        let top = self.page_h - self.margin - 30.0;
        let bottom = self.margin;

        let rows: Vec<&[GridCell]> = cells.chunks(units).collect();
        let mut remaining: &[&[GridCell]] = &rows;

        let mut content = self.new_page();
        self.draw_text(
            &mut content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );
        let mut y = top;

        while !remaining.is_empty() {
            if y - row_h < bottom {
                self.finalize_page(content);
                content = self.new_page();
                y = top;
            }

            let row = remaining[0];
            remaining = &remaining[1..];

            if let Some(first) = row.first() {
                // Label every 5th year to keep the margin readable
                if first.age_year % 5 == 0 {
                    self.draw_text(
                        &mut content,
                        self.margin,
                        y + side * 0.2,
                        self.font_size,
                        &format!("Age {}", first.age_year),
                    );
                }

                let mut x = self.margin + label_w;
                for cell in row {
                    self.draw_square(&mut content, x, y, side, Self::cell_rgb(cell));
                    x += side + gap;
                }
            }

            y -= row_h;
        }

        // Legend
        let milestones = dedup_milestones(cells);
        if !milestones.is_empty() {
            let legend_h = (milestones.len() as f32 + 1.5) * 12.0;
            if y - legend_h < bottom {
                self.finalize_page(content);
                content = self.new_page();
                y = top;
            }

            y -= 16.0;
            self.draw_text(&mut content, self.margin, y, 11.0, "Milestones");
            y -= 14.0;

            for m in milestones {
                let rgb = hex_to_rgb_f32(&m.color).unwrap_or(FALLBACK_MILESTONE_RGB);
                self.draw_square(&mut content, self.margin, y - 1.0, 8.0, rgb);
                self.draw_text(
                    &mut content,
                    self.margin + 14.0,
                    y,
                    self.font_size,
                    &format!("{} ({})", m.name, m.date_str()),
                );
                y -= 12.0;
            }
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        // Catalog + Pages are built exactly once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn dedup_milestones<'a>(cells: &[GridCell<'a>]) -> Vec<&'a Milestone> {
    let mut out: Vec<&Milestone> = Vec::new();
    for m in cells.iter().filter_map(|c| c.milestone) {
        if !out.iter().any(|x| x.id == m.id) {
            out.push(m);
        }
    }
    out
}
