//! Main application UI.

use std::path::PathBuf;

use eframe::egui::{self, Align, Layout, RichText, Visuals};
use egui_phosphor::regular::{
    BELL, CALENDAR, CHART_BAR, FIRST_AID_KIT, GEAR, HOUSE, MAGNIFYING_GLASS, SIGN_OUT, STETHOSCOPE, USERS,
    USERS_THREE,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::auth::{
    AuthPending, Banner, FixedCode, LoginForm, PasswordResetWizard, Progress, RegistrationWizard,
    simulate_latency,
};
use crate::config::AppConfig;
use crate::export::{self, ClinicSnapshot};
use crate::forms::{AppointmentForm, PatientForm, PhysiotherapistForm, StaffForm};
use crate::models::{ActiveStatus, Appointment, NewNotification, NotificationKind, Patient, Physiotherapist, Staff};
use crate::notifications::NotificationStore;
use crate::registry::{Outcome, RecordId, Registry};
use crate::seed;
use crate::treatments::TreatmentCatalog;

use super::components::{colors, modal};
use super::{
    appointment_panel, auth_screens, dashboard, notification_panel, patient_panel, physio_panel, reports_panel,
    settings_panel, staff_panel, treatment_panel,
};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    ForgotPassword,
    Console,
}

/// Console section chosen in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Patients,
    Physiotherapists,
    Staff,
    Appointments,
    Treatments,
    Notifications,
    Reports,
    Settings,
}

impl Section {
    pub const SIDEBAR: [Section; 9] = [
        Section::Dashboard,
        Section::Patients,
        Section::Physiotherapists,
        Section::Staff,
        Section::Appointments,
        Section::Treatments,
        Section::Notifications,
        Section::Reports,
        Section::Settings,
    ];

    /// Get the display name for the section.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Patients => "Patients",
            Section::Physiotherapists => "Physiotherapists",
            Section::Staff => "Staff",
            Section::Appointments => "Appointments",
            Section::Treatments => "Treatments",
            Section::Notifications => "Notifications",
            Section::Reports => "Reports",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => HOUSE,
            Section::Patients => USERS,
            Section::Physiotherapists => STETHOSCOPE,
            Section::Staff => USERS_THREE,
            Section::Appointments => CALENDAR,
            Section::Treatments => FIRST_AID_KIT,
            Section::Notifications => BELL,
            Section::Reports => CHART_BAR,
            Section::Settings => GEAR,
        }
    }

    /// Whether the header search box filters this section.
    pub fn is_searchable(&self) -> bool {
        matches!(
            self,
            Section::Patients | Section::Physiotherapists | Section::Staff | Section::Appointments
        )
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    AuthResolved(AuthPending),
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Patient(RecordId, String),
    Physiotherapist(RecordId, String),
    Staff(RecordId, String),
}

/// Cancel-with-reason dialog state.
#[derive(Debug, Clone)]
pub struct CancelDialog {
    pub id: RecordId,
    pub reason: String,
}

/// Main application state.
pub struct ConsoleApp {
    // Runtime and message channel for async communication
    pub rt: tokio::runtime::Runtime,
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Configuration
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub config_modified: bool,
    verifier: FixedCode,

    // Navigation
    pub screen: Screen,
    pub section: Section,

    // Sign-in flows
    pub login: LoginForm,
    pub registration: RegistrationWizard,
    pub reset: PasswordResetWizard,

    // Records
    pub patients: Registry<Patient>,
    pub physiotherapists: Registry<Physiotherapist>,
    pub staff: Registry<Staff>,
    pub appointments: Registry<Appointment>,
    pub notifications: NotificationStore,
    pub catalog: TreatmentCatalog,

    // Forms
    pub patient_form: PatientForm,
    pub physio_form: PhysiotherapistForm,
    pub staff_form: StaffForm,
    pub appointment_form: AppointmentForm,

    // Search/filter state
    pub search: String,
    pub staff_status_filter: Option<ActiveStatus>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub cancel_dialog: Option<CancelDialog>,
    pub reason_viewer: Option<(String, String)>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl ConsoleApp {
    pub fn new(
        config: AppConfig,
        config_path: PathBuf,
        rt: tokio::runtime::Runtime,
        initial_error: Option<String>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let verifier = FixedCode::new(config.auth.verification_code.clone());

        Self {
            rt,
            tx,
            rx,
            config,
            config_path,
            config_modified: false,
            verifier,
            screen: Screen::default(),
            section: Section::default(),
            login: LoginForm::new(),
            registration: RegistrationWizard::new(),
            reset: PasswordResetWizard::new(),
            patients: Registry::with_records(seed::patients()),
            physiotherapists: Registry::with_records(seed::physiotherapists()),
            staff: Registry::with_records(seed::staff()),
            appointments: Registry::with_records(seed::appointments()),
            notifications: NotificationStore::seeded(),
            catalog: TreatmentCatalog::new(),
            patient_form: PatientForm::default(),
            physio_form: PhysiotherapistForm::default(),
            staff_form: StaffForm::default(),
            appointment_form: AppointmentForm::default(),
            search: String::new(),
            staff_status_filter: None,
            show_delete_confirm: false,
            delete_target: None,
            cancel_dialog: None,
            reason_viewer: None,
            error_message: initial_error,
            success_message: None,
        }
    }

    /// Run the simulated delay for `pending` and post it back to the UI.
    pub fn dispatch(&self, ctx: &egui::Context, pending: AuthPending) {
        let delay = pending.latency().duration(&self.config.auth);
        let tx = self.tx.clone();
        let ctx = ctx.clone();

        self.rt.spawn(async move {
            let pending = simulate_latency(delay, pending).await;
            let _ = tx.send(UiMessage::AuthResolved(pending));
            ctx.request_repaint();
        });
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::AuthResolved(pending) => self.resolve_auth(pending),
            }
        }
    }

    fn resolve_auth(&mut self, pending: AuthPending) {
        match pending {
            AuthPending::Login(attempt) => {
                if self.login.resolve(attempt) {
                    self.screen = Screen::Console;
                    self.section = Section::Dashboard;
                }
            }
            AuthPending::Register(pending) => {
                if self.registration.resolve(pending, &self.verifier) == Progress::Completed {
                    self.login.banner = Some(Banner::success(
                        "Account created successfully",
                        "You can now sign in with your new account.",
                    ));
                    self.screen = Screen::Login;
                }
            }
            AuthPending::Reset(pending) => {
                if self.reset.resolve(pending, &self.verifier) == Progress::Completed {
                    self.login.banner = Some(Banner::success(
                        "Password reset successful",
                        "Sign in with your new password.",
                    ));
                    self.screen = Screen::Login;
                }
            }
        }
    }

    pub fn go_to(&mut self, screen: Screen) {
        debug!(?screen, "screen changed");
        self.screen = screen;
    }

    pub fn navigate(&mut self, section: Section) {
        if self.section != section {
            info!(section = section.name(), "navigated");
            self.section = section;
            self.search.clear();
        }
    }

    pub fn logout(&mut self) {
        info!("administrator signed out");
        self.login = LoginForm::new();
        self.screen = Screen::Login;
        self.section = Section::Dashboard;
    }

    /// Raise a notification if its section is enabled in settings.
    pub fn notify(&mut self, content: NewNotification) {
        if self.config.notifications.allows(&content.section) {
            self.notifications.add(content);
        } else {
            debug!(section = %content.section, "notification suppressed by preferences");
        }
    }

    /// Report an operation on a record that disappeared in the meantime.
    pub fn report_missing(&mut self, outcome: Outcome, what: &str) {
        if outcome == Outcome::Missing {
            debug!(what, "operation skipped, record no longer exists");
        }
    }

    /// Export every registry to a workbook chosen with a save dialog.
    pub fn export_registries(&mut self) {
        let filename = export::generate_export_filename("clinic_export");
        let Some(path) = export::show_save_dialog(&filename) else {
            debug!("export cancelled");
            return;
        };

        let snapshot = ClinicSnapshot {
            patients: &self.patients,
            physiotherapists: &self.physiotherapists,
            staff: &self.staff,
            appointments: &self.appointments,
        };
        let total = snapshot.total_records();

        match export::export_clinic_to_excel(snapshot, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.notify(NewNotification::new(
                    NotificationKind::Success,
                    "system",
                    "Export Completed",
                    format!("{total} records exported to {}", path.display()),
                ));
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.error_message = Some(format!("Export failed: {e}"));
            }
        }
    }

    /// Validate and write the configuration file.
    fn persist_settings(&self) -> crate::Result<()> {
        self.config.validate()?;
        self.config.save(&self.config_path)?;
        Ok(())
    }

    pub fn save_settings(&mut self) {
        match self.persist_settings() {
            Ok(()) => {
                info!(path = %self.config_path.display(), "settings saved");
                self.config_modified = false;
                self.success_message = Some("Settings saved".to_string());
            }
            Err(e) => {
                error!("Failed to save config: {}", e);
                self.error_message = Some(format!("Failed to save settings: {e}"));
            }
        }
    }

    /// Render the left navigation.
    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(210.0)
            .show(ctx, |ui| {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(STETHOSCOPE).size(24.0).color(colors::ACCENT));
                    ui.label(RichText::new("PhysioHMS").size(20.0).strong());
                });
                ui.add_space(20.0);

                let unread = self.notifications.unread_count();
                for section in Section::SIDEBAR {
                    let mut text = format!("{}  {}", section.icon(), section.name());
                    if section == Section::Notifications && unread > 0 {
                        text.push_str(&format!(" ({unread})"));
                    }
                    let label = ui.add_sized(
                        [ui.available_width(), 32.0],
                        egui::Button::selectable(self.section == section, RichText::new(text).size(15.0)),
                    );
                    if label.clicked() {
                        self.navigate(section);
                    }
                }

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(15.0);
                    if ui.button(format!("{SIGN_OUT}  Logout")).clicked() {
                        self.logout();
                    }
                });
            });
    }

    /// Render header with search, notifications bell and shortcuts.
    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").min_height(44.0).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new(self.section.name()).size(18.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(SIGN_OUT).on_hover_text("Logout").clicked() {
                        self.logout();
                        return;
                    }
                    if ui.button(GEAR).on_hover_text("Settings").clicked() {
                        self.navigate(Section::Settings);
                    }

                    let unread = self.notifications.unread_count();
                    let bell = if unread > 0 { format!("{BELL} {unread}") } else { BELL.to_string() };
                    ui.menu_button(bell, |ui| {
                        ui.set_min_width(280.0);
                        ui.horizontal(|ui| {
                            ui.strong("Notifications");
                            if unread > 0 && ui.small_button("Mark all as read").clicked() {
                                self.notifications.mark_all_read();
                            }
                        });
                        ui.separator();
                        let mut to_mark = None;
                        for n in self.notifications.latest(5) {
                            let title = RichText::new(&n.title).color(super::components::kind_color(n.kind));
                            let title = if n.read { title } else { title.strong() };
                            if ui.selectable_label(false, title).clicked() {
                                to_mark = Some(n.id);
                            }
                            ui.label(RichText::new(format!("{} · {}", n.message, n.time)).small().weak());
                        }
                        if let Some(id) = to_mark {
                            let outcome = self.notifications.mark_read(id);
                            self.report_missing(outcome, "notification");
                        }
                        ui.separator();
                        if ui.button("View all").clicked() {
                            self.navigate(Section::Notifications);
                            ui.close();
                        }
                    });

                    if self.section.is_searchable() {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search)
                                .desired_width(220.0)
                                .hint_text(format!("{MAGNIFYING_GLASS} Search {}...", self.section.name().to_lowercase())),
                        );
                    }
                });
            });
        });
    }

    /// Render modal dialogs (error, success, delete confirmation, appointment reasons).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            modal("Error").show(ctx, |ui| {
                ui.colored_label(colors::ERROR, error);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.error_message = None;
                }
            });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            modal("Success").show(ctx, |ui| {
                ui.colored_label(colors::SUCCESS, msg);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.success_message = None;
                }
            });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Patient(_, name) => ("Delete Patient", format!("Delete patient '{name}'?")),
                DeleteTarget::Physiotherapist(_, name) => {
                    ("Delete Physiotherapist", format!("Delete physiotherapist '{name}'?"))
                }
                DeleteTarget::Staff(_, name) => ("Delete Staff Member", format!("Delete staff member '{name}'?")),
            };

            modal(title).show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.show_delete_confirm = false;
                        self.delete_target = None;
                    }
                    if ui.button("Delete").clicked() {
                        self.confirm_delete();
                        self.show_delete_confirm = false;
                    }
                });
            });
        }

        // Cancel appointment dialog
        if let Some(mut dialog) = self.cancel_dialog.take() {
            let mut keep_open = true;
            modal("Cancel Appointment").show(ctx, |ui| {
                ui.label("Reason for cancellation (optional):");
                ui.add(
                    egui::TextEdit::multiline(&mut dialog.reason)
                        .desired_rows(3)
                        .hint_text(crate::models::DEFAULT_CANCEL_REASON),
                );
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Keep Appointment").clicked() {
                        keep_open = false;
                    }
                    if ui.button(RichText::new("Cancel Appointment").color(colors::ERROR)).clicked() {
                        appointment_panel::cancel(self, &dialog.id, &dialog.reason);
                        keep_open = false;
                    }
                });
            });
            if keep_open {
                self.cancel_dialog = Some(dialog);
            }
        }

        // Reason viewer
        if let Some((title, reason)) = self.reason_viewer.clone() {
            modal(&title).show(ctx, |ui| {
                ui.label(reason);
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    self.reason_viewer = None;
                }
            });
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take() {
            let outcome = match &target {
                DeleteTarget::Patient(id, _) => self.patients.remove(id),
                DeleteTarget::Physiotherapist(id, _) => self.physiotherapists.remove(id),
                DeleteTarget::Staff(id, _) => self.staff.remove(id),
            };
            self.report_missing(outcome, "delete");
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        ctx.set_visuals(if self.config.ui.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        // Modal dialogs
        self.show_dialogs(ctx);

        if self.screen != Screen::Console {
            egui::CentralPanel::default().show(ctx, |ui| auth_screens::show(self, ui));
            return;
        }

        self.show_sidebar(ctx);
        self.show_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.section {
            Section::Dashboard => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.navigate(next);
                }
            }
            Section::Patients => patient_panel::show(self, ui),
            Section::Physiotherapists => physio_panel::show(self, ui),
            Section::Staff => staff_panel::show(self, ui),
            Section::Appointments => appointment_panel::show(self, ui),
            Section::Treatments => treatment_panel::show(self, ui),
            Section::Notifications => notification_panel::show(self, ui),
            Section::Reports => reports_panel::show(self, ui),
            Section::Settings => settings_panel::show(self, ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ConsoleApp {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        ConsoleApp::new(AppConfig::default(), PathBuf::from("config.toml"), rt, None)
    }

    #[test]
    fn test_notify_respects_preferences() {
        let mut app = app();
        let before = app.notifications.len();

        app.notify(NewNotification::new(NotificationKind::Info, "treatments", "t", "m"));
        assert_eq!(app.notifications.len(), before);

        app.notify(NewNotification::new(NotificationKind::Info, "patients", "p", "m"));
        assert_eq!(app.notifications.len(), before + 1);
    }

    #[test]
    fn test_login_resolution_enters_console() {
        let mut app = app();
        app.login.identifier = "admin@hospital.com".to_string();
        app.login.password = "secret1".to_string();
        let attempt = app.login.submit().unwrap();

        app.resolve_auth(AuthPending::Login(attempt));

        assert_eq!(app.screen, Screen::Console);
        assert_eq!(app.section, Section::Dashboard);
    }

    #[test]
    fn test_registration_completion_returns_to_login() {
        let mut app = app();
        app.screen = Screen::Register;
        let wizard = &mut app.registration;
        wizard.first_name = "Alex".to_string();
        wizard.last_name = "Morgan".to_string();
        wizard.mobile = "+15551234567".to_string();
        wizard.email = "alex@clinic.com".to_string();
        wizard.password = "abc12345".to_string();
        wizard.confirm_password = "abc12345".to_string();

        let pending = app.registration.submit().unwrap();
        app.resolve_auth(AuthPending::Register(pending));
        app.registration.otp = "123456".to_string();
        let pending = app.registration.submit().unwrap();
        app.resolve_auth(AuthPending::Register(pending));

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(
            app.login.banner.as_ref().map(|b| b.title.as_str()),
            Some("Account created successfully")
        );
    }

    #[test]
    fn test_navigate_clears_search() {
        let mut app = app();
        app.screen = Screen::Console;
        app.search = "sarah".to_string();
        app.navigate(Section::Staff);
        assert!(app.search.is_empty());
        assert_eq!(app.section, Section::Staff);
    }

    #[test]
    fn test_confirm_delete_removes_record() {
        let mut app = app();
        app.delete_target = Some(DeleteTarget::Staff(RecordId::from("3"), "Maria Garcia".to_string()));
        app.confirm_delete();
        assert_eq!(app.staff.len(), 2);
        assert!(app.delete_target.is_none());
    }

    #[test]
    fn test_logout_resets_login() {
        let mut app = app();
        app.screen = Screen::Console;
        app.login.identifier = "admin@hospital.com".to_string();
        app.logout();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.login.identifier.is_empty());
    }
}
