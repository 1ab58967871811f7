// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Page layout for the PDF export.

use super::writer::{Color, DocumentWriter, FontStyle};
use crate::core::{Checklist, ChecklistFile, ChecklistGroup, ChecklistItem, GroupCategory, ItemKind};
use crate::io::formats::utils::{CAUTION_PREFIX, WARNING_PREFIX};

/// Page margin on every side, in points.
pub const MARGIN: f32 = 36.0;
/// Horizontal offset per indent level.
pub const INDENT_STEP: f32 = 18.0;

const TITLE_SIZE: f32 = 28.0;
const SUBTITLE_SIZE: f32 = 14.0;
const GROUP_SIZE: f32 = 20.0;
const CHECKLIST_SIZE: f32 = 14.0;
const ITEM_SIZE: f32 = 11.0;
const NOTE_SIZE: f32 = 10.0;
const ITEM_GAP: f32 = 4.0;
const SECTION_GAP: f32 = 10.0;
const LEADER: &str = ".";
const LEADER_PAD: f32 = 4.0;

fn category_color(category: GroupCategory) -> Color {
    match category {
        GroupCategory::Normal => Color::GREEN,
        GroupCategory::Abnormal => Color::AMBER,
        GroupCategory::Emergency => Color::RED,
    }
}

fn item_style(kind: &ItemKind) -> (FontStyle, f32, Color) {
    match kind {
        ItemKind::Title(_) => (FontStyle::Bold, ITEM_SIZE + 1.0, Color::BLACK),
        ItemKind::Warning(_) => (FontStyle::Bold, ITEM_SIZE, Color::RED),
        ItemKind::Caution(_) => (FontStyle::Bold, ITEM_SIZE, Color::AMBER),
        ItemKind::Note(_) => (FontStyle::Italic, NOTE_SIZE, Color::GREY),
        ItemKind::ChallengeResponse { .. } | ItemKind::ChallengeOnly(_) => {
            (FontStyle::Regular, ITEM_SIZE, Color::BLACK)
        }
    }
}

/// Lays a checklist file out onto a [`DocumentWriter`].
pub struct PdfGenerator<'a> {
    writer: &'a mut dyn DocumentWriter,
    content_width: f32,
    bottom: f32,
}

impl<'a> PdfGenerator<'a> {
    pub fn new(writer: &'a mut dyn DocumentWriter) -> Self {
        let page = writer.page_size();
        Self {
            writer,
            content_width: page.width - 2.0 * MARGIN,
            bottom: page.height - MARGIN,
        }
    }

    /// Render the title page followed by every group.
    pub fn render(mut self, file: &ChecklistFile) {
        self.title_page(file);
        for group in &file.groups {
            self.group(group);
        }
    }

    fn title_page(&mut self, file: &ChecklistFile) {
        let page = self.writer.page_size();
        let mut y = page.height / 3.0;

        self.writer.set_color(Color::BLACK);
        self.writer.set_font(FontStyle::Bold, TITLE_SIZE);
        y += self.centered_line(&file.name, y);

        self.writer.set_font(FontStyle::Regular, SUBTITLE_SIZE);
        let metadata = &file.metadata;
        for line in [
            &metadata.make_model,
            &metadata.aircraft_registration,
            &metadata.copyright,
        ] {
            if !line.is_empty() {
                y += SECTION_GAP;
                y += self.centered_line(line, y);
            }
        }
        self.writer.set_cursor_y(y);
    }

    fn centered_line(&mut self, text: &str, y: f32) -> f32 {
        let width = self.writer.text_width(text).min(self.content_width);
        let x = MARGIN + (self.content_width - width) / 2.0;
        self.writer.draw_text(text, x, y, width);
        self.writer.text_height(text, width)
    }

    fn new_page(&mut self) {
        self.writer.add_page();
        self.writer.set_cursor_y(MARGIN);
    }

    /// Break before content that would cross the bottom margin.
    fn ensure_space(&mut self, height: f32) {
        if self.writer.cursor_y() + height > self.bottom {
            self.new_page();
        }
    }

    fn group(&mut self, group: &ChecklistGroup) {
        self.new_page();
        let color = category_color(group.category);
        self.writer.set_color(color);
        self.writer.set_font(FontStyle::Bold, GROUP_SIZE);
        let y = self.writer.cursor_y();
        let height = self.writer.text_height(&group.name, self.content_width);
        self.writer
            .draw_text(&group.name, MARGIN, y, self.content_width);
        let rule = y + height + 2.0;
        self.writer
            .draw_line(MARGIN, rule, MARGIN + self.content_width, rule);
        self.writer.set_cursor_y(rule + SECTION_GAP);

        for checklist in &group.checklists {
            self.checklist(checklist);
        }
    }

    fn header_height(&mut self, name: &str) -> f32 {
        self.writer.set_font(FontStyle::Bold, CHECKLIST_SIZE);
        self.writer.text_height(name, self.content_width) + ITEM_GAP
    }

    fn checklist(&mut self, checklist: &Checklist) {
        let header = self.header_height(&checklist.name);
        let first = checklist
            .items
            .first()
            .map(|item| self.item_height(item))
            .unwrap_or(0.0);
        self.ensure_space(header + first);

        self.writer.set_color(Color::BLACK);
        self.writer.set_font(FontStyle::Bold, CHECKLIST_SIZE);
        let y = self.writer.cursor_y();
        self.writer
            .draw_text(&checklist.name, MARGIN, y, self.content_width);
        self.writer.set_cursor_y(y + header);

        for item in &checklist.items {
            let height = self.item_height(item);
            self.ensure_space(height);
            self.item(item);
            let y = self.writer.cursor_y();
            self.writer.set_cursor_y(y + height);
        }
        let y = self.writer.cursor_y();
        self.writer.set_cursor_y(y + SECTION_GAP);
    }

    fn display_text(item: &ChecklistItem) -> String {
        match &item.kind {
            ItemKind::Warning(text) => format!("{WARNING_PREFIX}{text}"),
            ItemKind::Caution(text) => format!("{CAUTION_PREFIX}{text}"),
            kind => kind.text().to_string(),
        }
    }

    fn available_width(&self, item: &ChecklistItem) -> f32 {
        self.content_width - f32::from(item.indent) * INDENT_STEP
    }

    /// Split `available` into the challenge and response boxes.
    ///
    /// The response box never exceeds half the line; a longer response
    /// wraps inside it.
    fn columns(&self, available: f32, response: &str) -> (f32, f32) {
        let response_box = self
            .writer
            .text_width(response)
            .min(available / 2.0 - LEADER_PAD)
            .max(0.0);
        (available - response_box - 2.0 * LEADER_PAD, response_box)
    }

    fn item_height(&mut self, item: &ChecklistItem) -> f32 {
        let (style, size, _) = item_style(&item.kind);
        self.writer.set_font(style, size);
        let available = self.available_width(item);
        let height = match &item.kind {
            ItemKind::ChallengeResponse {
                challenge,
                response,
            } => {
                let (challenge_box, response_box) = self.columns(available, response);
                self.writer
                    .text_height(challenge, challenge_box)
                    .max(self.writer.text_height(response, response_box))
            }
            _ => self
                .writer
                .text_height(&Self::display_text(item), available),
        };
        height + ITEM_GAP
    }

    fn item(&mut self, item: &ChecklistItem) {
        let (style, size, color) = item_style(&item.kind);
        self.writer.set_font(style, size);
        self.writer.set_color(color);

        let y = self.writer.cursor_y();
        let available = self.available_width(item);
        let x = MARGIN + f32::from(item.indent) * INDENT_STEP;

        if let ItemKind::ChallengeResponse {
            challenge,
            response,
        } = &item.kind
        {
            self.challenge_response(challenge, response, x, y, available);
            return;
        }

        let text = Self::display_text(item);
        if item.centered {
            let width = self.writer.text_width(&text).min(available);
            let x = MARGIN + (self.content_width - width) / 2.0;
            self.writer.draw_text(&text, x, y, width);
        } else {
            self.writer.draw_text(&text, x, y, available);
        }
    }

    fn challenge_response(&mut self, challenge: &str, response: &str, x: f32, y: f32, available: f32) {
        let right = x + available;
        let (challenge_box, response_box) = self.columns(available, response);
        let challenge_width = self.writer.text_width(challenge);

        self.writer.draw_text(challenge, x, y, challenge_box);
        self.writer
            .draw_text(response, right - response_box, y, response_box);

        // Dot leader only when both sides stay on one line.
        if challenge_width > challenge_box || self.writer.text_width(response) > response_box {
            return;
        }
        let start = x + challenge_width + LEADER_PAD;
        let end = right - response_box - LEADER_PAD;
        let dot = self.writer.text_width(LEADER);
        if dot <= 0.0 || end <= start {
            return;
        }
        let count = ((end - start) / dot).floor() as usize;
        if count > 0 {
            let leader = LEADER.repeat(count);
            let width = dot * count as f32;
            self.writer.draw_text(&leader, end - width, y, width);
        }
    }
}
