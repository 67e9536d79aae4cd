use std::time::Instant;

use super::context::AppContext;
use super::toast::ToastManager;
use super::HackathonApp;
use crate::models::settings::{SettingsError, SiteSettings};
use crate::services::site::{SiteEvent, SiteState, View};
use crate::ui_egui::theme::SiteTheme;
use crate::ui_egui::views::intro::IntroScreen;
use crate::ui_egui::views::nav_bar::NavBar;
use crate::ui_egui::views::problem_statements::ProblemStatementsView;
use crate::ui_egui::views::sections::HomePage;
use crate::ui_egui::views::{PageAction, SectionLayout};

impl HackathonApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: SiteSettings,
    ) -> Result<Self, SettingsError> {
        let deadline = settings.deadline()?;
        log::info!(
            "Counting down to {} ({})",
            deadline.local().format("%Y-%m-%d %H:%M:%S %Z"),
            deadline.utc().to_rfc3339()
        );

        let state = SiteState::new(&settings, Instant::now())?;
        let theme = SiteTheme::default();
        theme.apply_to_context(&cc.egui_ctx);

        Ok(Self {
            context: AppContext::new(settings, &deadline),
            state,
            theme,
            layout: SectionLayout::default(),
            scroll_target: 0.0,
            toast_manager: ToastManager::new(),
        })
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let at = Instant::now();
        self.refresh_countdown(at);

        if !self.state.intro().is_complete(at) {
            IntroScreen::show(
                ctx,
                &self.theme,
                self.context.settings(),
                self.state.intro(),
                at,
            );
            ctx.request_repaint();
            return;
        }

        self.handle_wheel_input(ctx, at);

        let header_height = self.context.settings().header_height;
        let nav_action = NavBar::show(
            ctx,
            &self.theme,
            &self.context.settings().event_name,
            header_height,
            self.state.navigator().sections(),
            self.state.current_section(),
            self.state.view(),
        );

        let page_action = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| match self.state.view() {
                View::Home => self.render_home(ui),
                View::ProblemStatements => self.render_problem_statements(ui),
            })
            .inner;

        if let Some(action) = nav_action.or(page_action) {
            self.handle_page_action(action, at);
        }

        self.toast_manager.render(ctx, &self.theme);
        self.schedule_repaint(ctx, at);
    }

    fn render_home(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let offset = self.animated_scroll_offset(ui.ctx());
        let section_height = ui.available_height();
        let remaining = self.state.countdown().remaining();

        let page = HomePage {
            theme: &self.theme,
            settings: self.context.settings(),
            badge: self.context.date_badge(),
            remaining,
            sections: self.state.navigator().sections(),
            header_height: self.context.settings().header_height,
            section_height,
        };
        let layout = &mut self.layout;

        egui::ScrollArea::vertical()
            .id_source("home_page")
            .enable_scrolling(false)
            .vertical_scroll_offset(offset)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                page.show(ui, layout)
            })
            .inner
    }

    fn render_problem_statements(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let mut area = egui::ScrollArea::vertical().id_source("problem_statements");
        if self.state.scroll_to_top() {
            area = area.vertical_scroll_offset(0.0);
            self.dispatch(SiteEvent::ScrollApplied);
        }

        let header_height = self.context.settings().header_height;
        let theme = &self.theme;
        area.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ProblemStatementsView::show(ui, theme, header_height)
        })
        .inner
    }

    fn handle_page_action(&mut self, action: PageAction, at: Instant) {
        match action {
            PageAction::Navigate(section) => self.dispatch(SiteEvent::NavigateTo(section)),
            PageAction::ShowView(view) => self.dispatch(SiteEvent::ShowView { view, at }),
            PageAction::Register => self.open_registration(),
        }
    }

    fn open_registration(&mut self) {
        let url = self.context.settings().registration_url.clone();
        match webbrowser::open(&url) {
            Ok(()) => {
                log::info!("Opened registration page {}", url);
                self.toast_manager.success("Registration page opened in your browser");
            }
            Err(err) => {
                log::error!("Failed to open registration page {}: {}", url, err);
                self.toast_manager
                    .error(format!("Could not open browser. Register at {}", url));
            }
        }
    }
}
