use egui::{RichText, Rounding, Stroke};

use super::{accent_button, PageAction};
use crate::models::countdown::RemainingTime;
use crate::models::section::SectionId;
use crate::models::settings::SiteSettings;
use crate::ui_egui::theme::SiteTheme;
use crate::utils::date::DateBadge;

const BOX_SIZE: f32 = 110.0;

pub struct Hero;

impl Hero {
    pub fn show(
        ui: &mut egui::Ui,
        theme: &SiteTheme,
        settings: &SiteSettings,
        badge: &DateBadge,
        remaining: RemainingTime,
        has_about: bool,
    ) -> Option<PageAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{} presents", settings.presenter))
                    .size(18.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&settings.event_name)
                    .size(64.0)
                    .strong()
                    .color(theme.accent),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(&settings.tagline).size(22.0));
            ui.add_space(20.0);

            Self::date_badge(ui, theme, badge);
            ui.add_space(28.0);

            ui.label(
                RichText::new(&settings.countdown_label)
                    .size(20.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(12.0);
            Self::countdown_boxes(ui, theme, remaining);
            ui.add_space(36.0);

            if ui.add(accent_button(theme, "Register Now")).clicked() {
                action = Some(PageAction::Register);
            }

            if has_about {
                ui.add_space(40.0);
                let explore = ui.add(
                    egui::Button::new(
                        RichText::new("Scroll to explore ⌄").color(theme.text_secondary),
                    )
                    .frame(false),
                );
                if explore.clicked() {
                    action = Some(PageAction::Navigate(SectionId::About));
                }
            }
        });

        action
    }

    fn date_badge(ui: &mut egui::Ui, theme: &SiteTheme, badge: &DateBadge) {
        egui::Frame::none()
            .stroke(Stroke::new(1.0, theme.accent_with_alpha(140)))
            .rounding(Rounding::same(20.0))
            .inner_margin(egui::Margin::symmetric(16.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(RichText::new(&badge.day).size(18.0).strong());
                    ui.label(RichText::new(badge.suffix).size(11.0).strong());
                    ui.label(
                        RichText::new(format!(" {} · {}", badge.month_year, badge.time))
                            .size(18.0),
                    );
                });
            });
    }

    fn countdown_boxes(ui: &mut egui::Ui, theme: &SiteTheme, remaining: RemainingTime) {
        let units = remaining.units();
        let spacing = 16.0;
        let total = units.len() as f32 * BOX_SIZE + (units.len() as f32 - 1.0) * spacing;
        let indent = ((ui.available_width() - total) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.spacing_mut().item_spacing.x = spacing;
            for (label, value) in units {
                egui::Frame::none()
                    .fill(theme.surface)
                    .stroke(Stroke::new(1.0, theme.accent_with_alpha(90)))
                    .rounding(Rounding::same(12.0))
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(BOX_SIZE, BOX_SIZE));
                        ui.set_max_width(BOX_SIZE);
                        ui.vertical_centered(|ui| {
                            ui.add_space(18.0);
                            ui.label(
                                RichText::new(format!("{:02}", value))
                                    .size(40.0)
                                    .strong()
                                    .color(theme.accent),
                            );
                            ui.label(
                                RichText::new(label).size(12.0).color(theme.text_secondary),
                            );
                        });
                    });
            }
        });
    }
}
