use egui::{Align, Layout, RichText};

use super::PageAction;
use crate::models::section::{SectionId, SectionList};
use crate::services::site::View;
use crate::ui_egui::theme::SiteTheme;

/// Fixed header drawn above the page content. The page scrolls underneath
/// it, which is why scroll targets are offset by its height.
pub struct NavBar;

impl NavBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &SiteTheme,
        title: &str,
        height: f32,
        sections: &SectionList,
        current: SectionId,
        view: View,
    ) -> Option<PageAction> {
        let mut action = None;
        let width = ctx.screen_rect().width();
        // right_to_left layout: links are added backwards to keep page order
        let mut links: Vec<SectionId> = sections.iter().collect();
        links.reverse();

        egui::Area::new(egui::Id::new("site_nav_bar"))
            .fixed_pos(egui::pos2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.header_background)
                    .inner_margin(egui::Margin::symmetric(24.0, 0.0))
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(width - 48.0, height));
                        ui.set_max_height(height);

                        ui.horizontal_centered(|ui| {
                            let brand = ui.add(
                                egui::Label::new(
                                    RichText::new(title).size(22.0).strong().color(theme.accent),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if brand.clicked() {
                                action = Some(match view {
                                    View::Home => PageAction::Navigate(sections.first()),
                                    View::ProblemStatements => PageAction::ShowView(View::Home),
                                });
                            }

                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| match view {
                                View::Home => {
                                    for &section in &links {
                                        let selected = section == current;
                                        let color = if selected {
                                            theme.accent
                                        } else {
                                            theme.text_secondary
                                        };
                                        let text =
                                            RichText::new(section.label()).size(15.0).color(color);
                                        let link = ui.add(
                                            egui::Label::new(text).sense(egui::Sense::click()),
                                        );
                                        if link.clicked() {
                                            action = Some(PageAction::Navigate(section));
                                        }
                                        ui.add_space(12.0);
                                    }
                                }
                                View::ProblemStatements => {
                                    let back = RichText::new("← Back to Home").color(theme.accent);
                                    if ui.button(back).clicked() {
                                        action = Some(PageAction::ShowView(View::Home));
                                    }
                                }
                            });
                        });
                    });
            });

        action
    }
}
