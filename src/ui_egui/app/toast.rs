//! Brief bottom-right feedback messages, e.g. after the Register button.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

use crate::ui_egui::theme::SiteTheme;

const TOAST_DURATION: Duration = Duration::from_secs(3);
const FADE_OUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    fn text_color(&self, theme: &SiteTheme) -> Color32 {
        match self {
            ToastLevel::Success => theme.accent,
            ToastLevel::Error => Color32::from_rgb(255, 120, 120),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel, created_at: Instant) -> Self {
        Self {
            message: message.into(),
            level,
            created_at,
            duration: TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, at: Instant) -> bool {
        at.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Full opacity until the last half second, then a linear fade.
    pub fn opacity(&self, at: Instant) -> f32 {
        let elapsed = at.saturating_duration_since(self.created_at);
        let fade_start = self.duration.saturating_sub(FADE_OUT);

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let left = (self.duration - elapsed).as_secs_f32();
            (left / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts
            .push(Toast::new(message, ToastLevel::Success, Instant::now()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts
            .push(Toast::new(message, ToastLevel::Error, Instant::now()));
    }

    pub fn cleanup(&mut self, at: Instant) {
        self.toasts.retain(|t| !t.is_expired(at));
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn render(&mut self, ctx: &Context, theme: &SiteTheme) {
        let at = Instant::now();
        self.cleanup(at);

        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while fading
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 320.0;
        let toast_height = 40.0;
        let margin = 16.0;
        let spacing = 6.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity(at);
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let text_color = toast.level.text_color(theme).gamma_multiply(opacity);
                    let bg_color = theme.surface.gamma_multiply(0.95 * opacity);

                    egui::Frame::none()
                        .fill(bg_color)
                        .rounding(8.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text_color.gamma_multiply(0.4)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(toast.level.icon()).color(text_color).strong(),
                                );
                                ui.label(RichText::new(&toast.message).color(text_color));
                            });
                        });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_fades_in_last_half_second() {
        let t0 = Instant::now();
        let toast = Toast::new("Opened", ToastLevel::Success, t0);

        assert_eq!(toast.opacity(t0 + Duration::from_millis(2000)), 1.0);
        let mid_fade = toast.opacity(t0 + Duration::from_millis(2750));
        assert!((mid_fade - 0.5).abs() < 1e-3);
        assert_eq!(toast.opacity(t0 + TOAST_DURATION), 0.0);
        assert!(toast.is_expired(t0 + TOAST_DURATION));
    }

    #[test]
    fn cleanup_drops_expired_toasts() {
        let mut manager = ToastManager::new();
        manager.error("Could not open browser");
        assert!(manager.has_toasts());

        manager.cleanup(Instant::now() + Duration::from_secs(10));
        assert!(!manager.has_toasts());
    }
}
