use std::collections::HashMap;

use egui::{Frame, Margin, RichText, Rounding, Stroke};

use crate::models::section::SectionId;
use crate::services::site::View;
use crate::ui_egui::theme::SiteTheme;

pub mod hero;
pub mod intro;
pub mod nav_bar;
pub mod problem_statements;
pub mod sections;

/// What a view asks the app to do after it has been drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Navigate(SectionId),
    ShowView(View),
    Register,
}

/// Top of each rendered section, relative to the start of the page content.
#[derive(Debug, Default)]
pub struct SectionLayout {
    tops: HashMap<SectionId, f32>,
}

impl SectionLayout {
    pub fn record(&mut self, section: SectionId, top: f32) {
        self.tops.insert(section, top);
    }

    pub fn top_of(&self, section: SectionId) -> Option<f32> {
        self.tops.get(&section).copied()
    }
}

pub(crate) fn card_frame(theme: &SiteTheme) -> Frame {
    Frame::none()
        .fill(theme.surface)
        .rounding(Rounding::same(12.0))
        .stroke(Stroke::new(1.0, theme.surface_border))
        .inner_margin(Margin::same(18.0))
}

pub(crate) fn section_heading(ui: &mut egui::Ui, theme: &SiteTheme, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(36.0).strong().color(theme.accent));
    });
    ui.add_space(24.0);
}

/// Pads the section out to `min_height` so every section fills a screen.
pub(crate) fn fill_to_height(ui: &mut egui::Ui, started_at: f32, min_height: f32) {
    let used = ui.cursor().top() - started_at;
    if used < min_height {
        ui.add_space(min_height - used);
    }
}

pub(crate) fn accent_button(theme: &SiteTheme, label: &str) -> egui::Button<'static> {
    let text = RichText::new(label.to_string())
        .size(18.0)
        .strong()
        .color(egui::Color32::WHITE);
    egui::Button::new(text)
        .fill(theme.accent)
        .rounding(Rounding::same(24.0))
        .min_size(egui::vec2(160.0, 44.0))
}
