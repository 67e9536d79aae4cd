use egui::RichText;

use super::hero::Hero;
use super::{accent_button, card_frame, fill_to_height, section_heading, PageAction, SectionLayout};
use crate::models::content::{
    featured_tracks, ABOUT_BLURBS, FAQ_ENTRIES, PRIZE_TIERS, TIMELINE, WHY_PARTICIPATE,
};
use crate::models::countdown::RemainingTime;
use crate::models::section::{SectionId, SectionList};
use crate::models::settings::SiteSettings;
use crate::services::site::View;
use crate::ui_egui::theme::SiteTheme;
use crate::utils::date::DateBadge;

const CONTENT_WIDTH: f32 = 960.0;
const TEASER_TRACKS: usize = 3;

/// Single-page landing layout: one full-height block per configured section.
pub struct HomePage<'a> {
    pub theme: &'a SiteTheme,
    pub settings: &'a SiteSettings,
    pub badge: &'a DateBadge,
    pub remaining: RemainingTime,
    pub sections: &'a SectionList,
    pub header_height: f32,
    pub section_height: f32,
}

impl HomePage<'_> {
    pub fn show(&self, ui: &mut egui::Ui, layout: &mut SectionLayout) -> Option<PageAction> {
        let mut action = None;
        let origin = ui.cursor().top();

        for (index, section) in self.sections.iter().enumerate() {
            let top = ui.cursor().top();
            // Later sections are scrolled to just below the header; the
            // first one sits at offset zero and must clear it itself
            let padding = if index == 0 {
                self.header_height + 32.0
            } else {
                32.0
            };
            layout.record(section, top - origin);

            let side = ((ui.available_width() - CONTENT_WIDTH) / 2.0).max(24.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_max_width(CONTENT_WIDTH.min(ui.available_width() - side));
                    ui.add_space(padding);
                    let clicked = self.render_section(ui, section);
                    action = action.take().or(clicked);
                });
            });

            fill_to_height(ui, top, self.section_height);
        }

        action
    }

    fn render_section(&self, ui: &mut egui::Ui, section: SectionId) -> Option<PageAction> {
        match section {
            SectionId::Home => Hero::show(
                ui,
                self.theme,
                self.settings,
                self.badge,
                self.remaining,
                self.sections.contains(SectionId::About),
            ),
            SectionId::About => {
                self.about(ui);
                None
            }
            SectionId::Timeline => {
                self.timeline(ui);
                None
            }
            SectionId::ProblemStatements => self.problem_teaser(ui),
            SectionId::PrizePool => {
                self.prizes(ui);
                None
            }
            SectionId::Faq => {
                self.faq(ui);
                None
            }
            SectionId::Contact => self.contact(ui),
        }
    }

    fn about(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        section_heading(ui, theme, SectionId::About.label());

        ui.columns(ABOUT_BLURBS.len(), |columns| {
            for (column, blurb) in columns.iter_mut().zip(ABOUT_BLURBS.iter()) {
                card_frame(theme).show(column, |ui| {
                    ui.label(RichText::new(blurb.icon).size(28.0));
                    ui.label(RichText::new(blurb.heading).size(20.0).strong().color(theme.accent));
                    ui.add_space(6.0);
                    ui.label(RichText::new(blurb.body).color(theme.text_secondary));
                });
            }
        });

        ui.add_space(28.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Why Participate?").size(24.0).strong());
        });
        ui.add_space(12.0);
        ui.columns(WHY_PARTICIPATE.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(WHY_PARTICIPATE.iter()) {
                card_frame(theme).show(column, |ui| {
                    ui.label(RichText::new(card.icon).size(24.0));
                    ui.label(RichText::new(card.heading).strong());
                    ui.label(RichText::new(card.body).small().color(theme.text_secondary));
                });
            }
        });
    }

    fn timeline(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        section_heading(ui, theme, SectionId::Timeline.label());

        for entry in TIMELINE.iter() {
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").color(theme.accent));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(entry.when).small().color(theme.accent));
                    ui.label(RichText::new(entry.title).size(18.0).strong());
                    ui.label(RichText::new(entry.detail).color(theme.text_secondary));
                });
            });
            ui.add_space(18.0);
        }
    }

    fn problem_teaser(&self, ui: &mut egui::Ui) -> Option<PageAction> {
        let theme = self.theme;
        section_heading(ui, theme, SectionId::ProblemStatements.label());

        let tracks: Vec<_> = featured_tracks(TEASER_TRACKS).collect();
        ui.columns(tracks.len().max(1), |columns| {
            for (column, track) in columns.iter_mut().zip(tracks.iter()) {
                card_frame(theme).show(column, |ui| {
                    ui.label(RichText::new(track.icon).size(26.0));
                    ui.label(RichText::new(track.title).strong().color(theme.accent));
                    ui.label(RichText::new(track.domain).small().color(theme.text_secondary));
                });
            }
        });

        ui.add_space(24.0);
        let mut action = None;
        ui.vertical_centered(|ui| {
            if ui.add(accent_button(theme, "View All Problem Statements")).clicked() {
                action = Some(PageAction::ShowView(View::ProblemStatements));
            }
        });
        action
    }

    fn prizes(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        section_heading(ui, theme, SectionId::PrizePool.label());

        ui.columns(2, |columns| {
            for (i, tier) in PRIZE_TIERS.iter().enumerate() {
                card_frame(theme).show(&mut columns[i % 2], |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(RichText::new(tier.icon).size(30.0));
                    ui.label(RichText::new(tier.title).size(20.0).strong().color(theme.accent));
                    ui.label(RichText::new(tier.detail).color(theme.text_secondary));
                });
                columns[i % 2].add_space(12.0);
            }
        });
    }

    fn faq(&self, ui: &mut egui::Ui) {
        let theme = self.theme;
        section_heading(ui, theme, SectionId::Faq.label());

        for entry in FAQ_ENTRIES.iter() {
            card_frame(theme).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                egui::CollapsingHeader::new(RichText::new(entry.question).strong())
                    .id_source(entry.question)
                    .show(ui, |ui| {
                        ui.label(RichText::new(entry.answer).color(theme.text_secondary));
                    });
            });
            ui.add_space(10.0);
        }
    }

    fn contact(&self, ui: &mut egui::Ui) -> Option<PageAction> {
        let theme = self.theme;
        let settings = self.settings;
        section_heading(ui, theme, SectionId::Contact.label());

        let mut action = None;
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Have questions? Reach out to the organising team.")
                    .color(theme.text_secondary),
            );
            ui.add_space(16.0);
            ui.label(RichText::new(format!("✉ {}", settings.contact_email)).size(18.0));
            ui.label(RichText::new(format!("☎ {}", settings.contact_phone)).size(18.0));
            ui.add_space(24.0);
            if ui.add(accent_button(theme, "Register Now")).clicked() {
                action = Some(PageAction::Register);
            }
            ui.add_space(40.0);
            ui.label(
                RichText::new(format!("© 2025 {} · {}", settings.presenter, settings.event_name))
                    .small()
                    .color(theme.text_secondary),
            );
        });
        action
    }
}
