mod context;
mod countdown;
mod lifecycle;
mod navigation;
mod toast;

use self::context::AppContext;
use self::toast::ToastManager;
use crate::services::site::{SiteEvent, SiteState};
use crate::ui_egui::theme::SiteTheme;
use crate::ui_egui::views::SectionLayout;

pub struct HackathonApp {
    /// Settings, wall clock and derived display values
    context: AppContext,
    /// Page state; replaced wholesale by each dispatched event
    state: SiteState,
    theme: SiteTheme,
    /// Section tops measured during the last home render
    layout: SectionLayout,
    /// Offset the home page is animating toward
    scroll_target: f32,
    toast_manager: ToastManager,
}

impl eframe::App for HackathonApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.dispatch(SiteEvent::Teardown);
        log::info!(
            "Shutting down after {} countdown tick(s)",
            self.state.countdown().refreshes()
        );
    }
}

impl HackathonApp {
    fn dispatch(&mut self, event: SiteEvent) {
        self.state = self.state.update(event);
    }
}
