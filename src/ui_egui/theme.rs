//! Theme module for the hackathon site
//!
//! Defines the SiteTheme palette (black background, pink accent) and
//! applies it to the egui context once at startup.

use egui::Color32;

/// All colours used by the page shell and its views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteTheme {
    /// Page background
    pub background: Color32,

    /// Card and box fill
    pub surface: Color32,

    /// Card outline
    pub surface_border: Color32,

    /// Brand pink: buttons, headings, countdown digits
    pub accent: Color32,

    /// Hover and pressed state for accent widgets
    pub accent_strong: Color32,

    /// Fixed header fill, drawn over scrolled content
    pub header_background: Color32,

    pub text_primary: Color32,

    pub text_secondary: Color32,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self::heal_o_code()
    }
}

impl SiteTheme {
    pub fn heal_o_code() -> Self {
        Self {
            background: Color32::from_rgb(0, 0, 0),
            surface: Color32::from_rgb(18, 18, 22),
            surface_border: Color32::from_rgb(70, 30, 55),
            accent: Color32::from_rgb(236, 72, 153),
            accent_strong: Color32::from_rgb(219, 39, 119),
            header_background: Color32::from_rgba_unmultiplied(0, 0, 0, 230),
            text_primary: Color32::from_rgb(245, 245, 245),
            text_secondary: Color32::from_rgb(160, 160, 170),
        }
    }

    /// Accent colour at reduced alpha, for glows and soft borders
    pub fn accent_with_alpha(&self, alpha: u8) -> Color32 {
        Color32::from_rgba_unmultiplied(self.accent.r(), self.accent.g(), self.accent.b(), alpha)
    }

    pub fn color_to_hex(color: Color32) -> String {
        format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.surface;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent_with_alpha(120);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.surface_border);
        visuals.widgets.inactive.weak_bg_fill = self.surface;
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.hovered.weak_bg_fill = self.accent_strong;
        visuals.widgets.hovered.bg_fill = self.accent_strong;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.bg_fill = self.accent;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
        log::debug!(
            "Applied site theme (accent {})",
            Self::color_to_hex(self.accent)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_black_and_pink() {
        let theme = SiteTheme::default();
        assert_eq!(theme.background, Color32::BLACK);
        assert_eq!(SiteTheme::color_to_hex(theme.accent), "#EC4899");
    }

    #[test]
    fn accent_alpha_keeps_hue() {
        let theme = SiteTheme::default();
        let soft = theme.accent_with_alpha(64);
        assert_eq!(soft.a(), 64);
    }
}
