// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! In-memory document writer with fixed font metrics, for tests.

use async_trait::async_trait;

use super::writer::{Color, DocumentWriter, FontStyle, PageSize};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Font(FontStyle, f32),
    Color(Color),
    Text {
        text: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line(f32, f32, f32, f32),
    AddPage,
}

/// Glyphs are half the font size wide; lines are 1.2 times the size tall.
#[derive(Debug, Clone)]
pub struct RecordingWriter {
    pub page: PageSize,
    pub ops: Vec<Op>,
    cursor: f32,
    size: f32,
}

impl Default for RecordingWriter {
    fn default() -> Self {
        Self {
            page: PageSize::LETTER,
            ops: Vec::new(),
            cursor: 0.0,
            size: 12.0,
        }
    }
}

#[async_trait]
impl DocumentWriter for RecordingWriter {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn cursor_y(&self) -> f32 {
        self.cursor
    }

    fn set_cursor_y(&mut self, y: f32) {
        self.cursor = y;
    }

    fn set_font(&mut self, style: FontStyle, size: f32) {
        self.size = size;
        self.ops.push(Op::Font(style, size));
    }

    fn set_color(&mut self, color: Color) {
        self.ops.push(Op::Color(color));
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * 0.5
    }

    fn text_height(&self, text: &str, width: f32) -> f32 {
        let lines = if width > 0.0 {
            (self.text_width(text) / width).ceil().max(1.0)
        } else {
            1.0
        };
        lines * self.size * 1.2
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, width: f32) {
        let height = self.text_height(text, width);
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            width,
            height,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(Op::Line(x1, y1, x2, y2));
    }

    fn add_page(&mut self) {
        self.cursor = 0.0;
        self.ops.push(Op::AddPage);
    }

    async fn finish(self: Box<Self>) -> Result<Vec<u8>> {
        Ok(format!("%PDF recorded {} ops", self.ops.len()).into_bytes())
    }
}
