use std::time::Instant;

use egui::RichText;

use crate::models::settings::SiteSettings;
use crate::services::intro::{IntroPhase, IntroSequence};
use crate::ui_egui::theme::SiteTheme;

/// Full-screen loading sequence shown before the page.
pub struct IntroScreen;

impl IntroScreen {
    pub fn show(
        ctx: &egui::Context,
        theme: &SiteTheme,
        settings: &SiteSettings,
        intro: &IntroSequence,
        at: Instant,
    ) {
        let phase = intro.phase(at);
        let fade = intro.phase_fraction(at);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme.background))
            .show(ctx, |ui| {
                let height = ui.available_height();
                ui.add_space(height * 0.3);

                ui.vertical_centered(|ui| {
                    let title_alpha = match phase {
                        IntroPhase::Logo => fade,
                        _ => 1.0,
                    };
                    ui.label(
                        RichText::new(&settings.event_name)
                            .size(56.0)
                            .strong()
                            .color(theme.accent.gamma_multiply(title_alpha)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("presented by {}", settings.presenter))
                            .size(16.0)
                            .color(theme.text_secondary.gamma_multiply(title_alpha)),
                    );

                    ui.add_space(24.0);
                    if matches!(phase, IntroPhase::Tagline | IntroPhase::Settling) {
                        let tagline_alpha = if phase == IntroPhase::Tagline { fade } else { 1.0 };
                        ui.label(
                            RichText::new(&settings.tagline)
                                .size(22.0)
                                .italics()
                                .color(theme.text_primary.gamma_multiply(tagline_alpha)),
                        );
                    } else {
                        ui.add_space(28.0);
                    }

                    ui.add_space(32.0);
                    let progress = intro.progress(at);
                    ui.add(
                        egui::ProgressBar::new(progress)
                            .desired_width(320.0)
                            .fill(theme.accent)
                            .text(format!("{:.0}%", progress * 100.0)),
                    );
                });
            });
    }
}
