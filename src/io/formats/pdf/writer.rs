// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Document writer capability used by the PDF export.
//!
//! The crate does not draw PDF primitives itself. Callers supply a
//! [`DocumentWriter`] backed by whatever PDF library they use; the
//! generator only lays out text and rules through it.

use async_trait::async_trait;

use crate::Result;

/// Font weight/slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREY: Color = Color::rgb(96, 96, 96);
    pub const RED: Color = Color::rgb(192, 0, 0);
    pub const AMBER: Color = Color::rgb(204, 122, 0);
    pub const GREEN: Color = Color::rgb(0, 112, 60);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// US Letter, portrait.
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

/// Drawing surface for the PDF export.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// current page; `y` grows downwards. Measurement uses the font most
/// recently selected with [`set_font`](Self::set_font).
#[async_trait]
pub trait DocumentWriter: Send {
    fn page_size(&self) -> PageSize;

    /// Vertical cursor on the current page.
    fn cursor_y(&self) -> f32;

    fn set_cursor_y(&mut self, y: f32);

    fn set_font(&mut self, style: FontStyle, size: f32);

    fn set_color(&mut self, color: Color);

    /// Width of `text` on a single line.
    fn text_width(&self, text: &str) -> f32;

    /// Height of `text` once wrapped to `width`.
    fn text_height(&self, text: &str, width: f32) -> f32;

    /// Draw `text` with its top edge at `y`, wrapping within `width`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, width: f32);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Start a new page; the cursor moves to the top.
    fn add_page(&mut self);

    /// Complete the document and return its bytes.
    async fn finish(self: Box<Self>) -> Result<Vec<u8>>;
}
