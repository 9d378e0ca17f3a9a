//! Multi-page PDF assembly.
//!
//! Chart pages arrive as raw RGB buffers from the chart renderer and are
//! embedded one per A4-landscape page.

use crate::reports::charts::{PAGE_HEIGHT, PAGE_WIDTH};
use anyhow::{anyhow, Context, Result};
use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument, PdfDocumentReference};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PAGE_WIDTH_MM: f32 = 297.0;
const PAGE_HEIGHT_MM: f32 = 210.0;
const IMAGE_DPI: f32 = 110.0;

/// A paginated report document under construction.
pub struct ReportDocument {
    doc: PdfDocumentReference,
    pages: usize,
}

impl ReportDocument {
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::empty(title),
            pages: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Append one chart page. The buffer must be exactly the renderer's
    /// fixed page size.
    pub fn add_chart_page(&mut self, rgb: Vec<u8>) -> Result<()> {
        let image = RgbImage::from_raw(PAGE_WIDTH, PAGE_HEIGHT, rgb)
            .ok_or_else(|| anyhow!("chart buffer does not match page dimensions"))?;

        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            format!("page {}", self.pages + 1),
        );
        let layer = self.doc.get_page(page).get_layer(layer);

        // Center the bitmap on the page.
        let image_width_mm = PAGE_WIDTH as f32 * 25.4 / IMAGE_DPI;
        let image_height_mm = PAGE_HEIGHT as f32 * 25.4 / IMAGE_DPI;
        let transform = ImageTransform {
            translate_x: Some(Mm((PAGE_WIDTH_MM - image_width_mm) / 2.0)),
            translate_y: Some(Mm((PAGE_HEIGHT_MM - image_height_mm) / 2.0)),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        };

        let pdf_image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(image));
        pdf_image.add_to_layer(layer, transform);
        self.pages += 1;
        Ok(())
    }

    /// Write the document out. Fails if the file cannot be created.
    pub fn save(self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| anyhow!("cannot save {}: {}", path.display(), e))?;
        Ok(())
    }
}
