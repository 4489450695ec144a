//! Sign-in, registration and password-reset screens.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{ARROW_LEFT, ENVELOPE, LOCK_KEY, PHONE, STETHOSCOPE};

use super::app::{ConsoleApp, Screen};
use super::components::{banner, card_frame, colors, field_error, labeled_input, password_input, primary_button_with_icon};
use crate::auth::{AuthPending, LoginMethod, RegisterStep, ResetStep};

const CARD_WIDTH: f32 = 380.0;

pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(STETHOSCOPE).size(40.0).color(colors::ACCENT));
            ui.label(RichText::new("PhysioHMS").size(28.0).strong());
            ui.label(RichText::new("Physiotherapy clinic administration").weak());
            ui.add_space(20.0);

            card_frame(ui).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| match app.screen {
                    Screen::Login => login(app, ui),
                    Screen::Register => register(app, ui),
                    Screen::ForgotPassword => forgot_password(app, ui),
                    Screen::Console => {}
                });
            });
        });
    });
}

fn method_toggle(ui: &mut Ui, current: LoginMethod) -> LoginMethod {
    let mut method = current;
    ui.horizontal(|ui| {
        for m in LoginMethod::ALL {
            let icon = match m {
                LoginMethod::Email => ENVELOPE,
                LoginMethod::Mobile => PHONE,
            };
            ui.selectable_value(&mut method, m, format!("{icon} {}", m.label()));
        }
    });
    ui.add_space(8.0);
    method
}

/// Submit button that turns into a spinner while a submission is in flight.
fn submit_button(ui: &mut Ui, busy: bool, label: &str, busy_label: &str) -> bool {
    if busy {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(busy_label);
        });
        false
    } else {
        primary_button_with_icon(ui, "", label).clicked()
    }
}

fn login(app: &mut ConsoleApp, ui: &mut Ui) {
    ui.heading("Admin Login");
    ui.add_space(10.0);

    if let Some(b) = &app.login.banner {
        banner(ui, b);
    }

    let method = method_toggle(ui, app.login.method);
    app.login.set_method(method);

    let form = &mut app.login;
    let label = match form.method {
        LoginMethod::Email => "Email",
        LoginMethod::Mobile => "Mobile number",
    };
    labeled_input(ui, label, &mut form.identifier, form.method.hint(), &form.errors, "identifier");

    ui.label("Password");
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.password)
                .password(!form.show_password)
                .desired_width(CARD_WIDTH - 60.0),
        );
        ui.checkbox(&mut form.show_password, "Show");
    });
    field_error(ui, &form.errors, "password");
    ui.add_space(12.0);

    let submitted = submit_button(ui, form.busy, &format!("{LOCK_KEY} Sign In"), "Signing in...");
    if submitted && let Some(attempt) = app.login.submit() {
        app.dispatch(ui.ctx(), AuthPending::Login(attempt));
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.link("Forgot password?").clicked() {
            app.reset.restart();
            app.go_to(Screen::ForgotPassword);
        }
        ui.label("·");
        if ui.link("Create an account").clicked() {
            app.go_to(Screen::Register);
        }
    });
}

fn register(app: &mut ConsoleApp, ui: &mut Ui) {
    let wizard = &mut app.registration;
    ui.heading(match wizard.step {
        RegisterStep::Form => "Create Account",
        RegisterStep::Otp => "Verify Mobile Number",
    });
    ui.add_space(10.0);

    if let Some(b) = &wizard.banner {
        banner(ui, b);
    }

    let mut submitted = false;
    let mut go_back = false;
    match wizard.step {
        RegisterStep::Form => {
            ui.columns(2, |cols| {
                labeled_input(&mut cols[0], "First name", &mut wizard.first_name, "", &wizard.errors, "first_name");
                labeled_input(&mut cols[1], "Last name", &mut wizard.last_name, "", &wizard.errors, "last_name");
            });
            labeled_input(ui, "Mobile number", &mut wizard.mobile, "+1234567890", &wizard.errors, "mobile");
            labeled_input(ui, "Email", &mut wizard.email, "admin@hospital.com", &wizard.errors, "email");
            password_input(ui, "Password", &mut wizard.password, &wizard.errors, "password");
            password_input(ui, "Confirm password", &mut wizard.confirm_password, &wizard.errors, "confirm_password");
            ui.add_space(8.0);
            submitted = submit_button(ui, wizard.busy, "Send Verification Code", "Sending code...");
        }
        RegisterStep::Otp => {
            labeled_input(ui, "Verification code", &mut wizard.otp, "6-digit code", &wizard.errors, "otp");
            ui.add_space(8.0);
            submitted = submit_button(ui, wizard.busy, "Verify & Create Account", "Verifying...");
            ui.add_space(6.0);
            go_back = ui
                .add_enabled(!wizard.busy, egui::Button::new(format!("{ARROW_LEFT} Back to registration")))
                .clicked();
        }
    }

    if go_back {
        app.registration.back();
    }
    if submitted && let Some(pending) = app.registration.submit() {
        app.dispatch(ui.ctx(), AuthPending::Register(pending));
    }

    ui.add_space(12.0);
    if ui.link("Already have an account? Sign in").clicked() {
        app.go_to(Screen::Login);
    }
}

fn forgot_password(app: &mut ConsoleApp, ui: &mut Ui) {
    ui.heading(match app.reset.step {
        ResetStep::Identifier => "Reset Password",
        ResetStep::Otp => "Enter Verification Code",
        ResetStep::Reset => "Choose a New Password",
    });
    ui.add_space(10.0);

    if let Some(b) = &app.reset.banner {
        banner(ui, b);
    }

    let mut submitted = false;
    match app.reset.step {
        ResetStep::Identifier => {
            let method = method_toggle(ui, app.reset.method);
            app.reset.set_method(method);
            let wizard = &mut app.reset;
            let label = match wizard.method {
                LoginMethod::Email => "Email",
                LoginMethod::Mobile => "Mobile number",
            };
            labeled_input(ui, label, &mut wizard.identifier, wizard.method.hint(), &wizard.errors, "identifier");
            ui.add_space(8.0);
            submitted = submit_button(ui, wizard.busy, "Send Code", "Sending code...");
        }
        ResetStep::Otp => {
            let wizard = &mut app.reset;
            if let Some(account) = wizard.account() {
                ui.label(RichText::new(format!("Code sent to {account}")).weak());
            }
            labeled_input(ui, "Verification code", &mut wizard.otp, "6-digit code", &wizard.errors, "otp");
            ui.add_space(8.0);
            submitted = submit_button(ui, wizard.busy, "Verify Code", "Verifying...");
        }
        ResetStep::Reset => {
            let wizard = &mut app.reset;
            password_input(ui, "New password", &mut wizard.new_password, &wizard.errors, "new_password");
            password_input(ui, "Confirm password", &mut wizard.confirm_password, &wizard.errors, "confirm_password");
            ui.add_space(8.0);
            submitted = submit_button(ui, wizard.busy, "Reset Password", "Saving...");
        }
    }

    if submitted && let Some(pending) = app.reset.submit() {
        app.dispatch(ui.ctx(), AuthPending::Reset(pending));
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        match app.reset.step {
            ResetStep::Identifier => {}
            ResetStep::Otp => {
                let label = format!("{ARROW_LEFT} Back to {}", app.reset.method.label().to_lowercase());
                if ui.add_enabled(!app.reset.busy, egui::Link::new(label)).clicked() {
                    app.reset.back();
                }
            }
            ResetStep::Reset => {
                if ui.add_enabled(!app.reset.busy, egui::Link::new("Start over")).clicked() {
                    app.reset.restart();
                }
            }
        }
        if ui.link("Back to sign in").clicked() {
            app.go_to(Screen::Login);
        }
    });
}
