use egui::RichText;

use super::{card_frame, PageAction};
use crate::models::content::{ProblemStatement, PROBLEM_STATEMENTS};
use crate::services::site::View;
use crate::ui_egui::theme::SiteTheme;

const CARD_COLUMNS: usize = 3;

/// Full list of tracks, reached from the landing page teaser.
pub struct ProblemStatementsView;

impl ProblemStatementsView {
    pub fn show(ui: &mut egui::Ui, theme: &SiteTheme, header_height: f32) -> Option<PageAction> {
        let mut action = None;
        ui.add_space(header_height + 32.0);

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Problem Statements")
                    .size(40.0)
                    .strong()
                    .color(theme.accent),
            );
            ui.label(
                RichText::new("Pick a track, or bring your own idea to Open Innovation.")
                    .color(theme.text_secondary),
            );
        });
        ui.add_space(28.0);

        let (regular, highlighted): (Vec<&ProblemStatement>, Vec<&ProblemStatement>) =
            PROBLEM_STATEMENTS.iter().partition(|p| !p.highlighted);

        for row in regular.chunks(CARD_COLUMNS) {
            ui.columns(CARD_COLUMNS, |columns| {
                for (column, statement) in columns.iter_mut().zip(row) {
                    Self::card(column, theme, statement);
                }
            });
            ui.add_space(16.0);
        }

        for statement in highlighted {
            egui::Frame::none()
                .stroke(egui::Stroke::new(2.0, theme.accent))
                .rounding(egui::Rounding::same(14.0))
                .show(ui, |ui| Self::card(ui, theme, statement));
            ui.add_space(16.0);
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if ui
                .button(RichText::new("← Back to Home").size(16.0).color(theme.accent))
                .clicked()
            {
                action = Some(PageAction::ShowView(View::Home));
            }
        });
        ui.add_space(48.0);

        action
    }

    fn card(ui: &mut egui::Ui, theme: &SiteTheme, statement: &ProblemStatement) {
        card_frame(theme).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(statement.icon).size(26.0));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(statement.title)
                            .size(18.0)
                            .strong()
                            .color(theme.accent),
                    );
                    ui.label(RichText::new(statement.domain).small().color(theme.text_secondary));
                });
            });
            ui.add_space(8.0);
            ui.label(statement.summary);
            ui.add_space(8.0);
            ui.label(RichText::new(statement.requirements_heading()).strong());
            for requirement in statement.requirements {
                ui.label(format!("• {}", requirement));
            }
        });
    }
}
