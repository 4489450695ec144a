//! Appointment schedule with confirm and cancel workflow.

use chrono::Local;
use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{CHECK, INFO, PLUS, X};
use tracing::warn;

use super::app::{CancelDialog, ConsoleApp};
use super::components::{
    action_button, appointment_color, badge, danger_action_button, field_error, modal, panel_header,
    primary_button_with_icon, styled_button,
};
use crate::forms::{self, AppointmentForm, Saved};
use crate::models::{AppointmentStatus, NewNotification, NotificationKind};
use crate::registry::RecordId;

pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Appointments", "Schedule, confirm and cancel patient sessions");

    if primary_button_with_icon(ui, PLUS, "Schedule Appointment").clicked() {
        app.appointment_form = AppointmentForm::open_new();
    }

    ui.add_space(15.0);

    let mut filtered = app.appointments.search(&app.search);
    filtered.sort_by_key(|a| (a.date, a.time));
    let mut confirm_id = None;

    ui.label(format!(
        "Showing {} of {} appointments",
        filtered.len(),
        app.appointments.len()
    ));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("appointments_scroll").show(ui, |ui| {
        egui::Grid::new("appointments_grid")
            .num_columns(7)
            .striped(true)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Date");
                ui.strong("Time");
                ui.strong("Patient");
                ui.strong("Doctor");
                ui.strong("Purpose");
                ui.strong("Status");
                ui.strong("Actions");
                ui.end_row();

                for a in filtered {
                    ui.label(a.date.format("%Y-%m-%d").to_string());
                    ui.label(a.time_label());
                    ui.label(&a.patient_name);
                    ui.label(&a.doctor_name);
                    ui.label(&a.purpose);
                    badge(ui, a.status.label(), appointment_color(a.status));

                    ui.horizontal(|ui| {
                        if a.status == AppointmentStatus::Pending {
                            if action_button(ui, CHECK, "Confirm").clicked() {
                                confirm_id = Some(a.id.clone());
                            }
                            if danger_action_button(ui, X, "Cancel").clicked() {
                                app.cancel_dialog = Some(CancelDialog {
                                    id: a.id.clone(),
                                    reason: String::new(),
                                });
                            }
                        }
                        if a.has_viewable_reason() && action_button(ui, INFO, "View reason").clicked() {
                            let title = match a.status {
                                AppointmentStatus::Cancelled => "Cancellation Reason",
                                _ => "Pending Reason",
                            };
                            app.reason_viewer = Some((title.to_string(), a.reason.clone()));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    if let Some(id) = confirm_id {
        confirm(app, &id);
    }

    if app.appointment_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

/// Confirm a pending appointment and raise its notification.
pub fn confirm(app: &mut ConsoleApp, id: &RecordId) {
    match app.appointments.confirm(id) {
        Ok(outcome) if outcome.is_applied() => {
            let label = describe(app, id);
            app.notify(NewNotification::new(
                NotificationKind::Success,
                "appointments",
                "Appointment Confirmed",
                format!("{label} has been confirmed"),
            ));
        }
        Ok(outcome) => app.report_missing(outcome, "confirm appointment"),
        Err(e) => {
            warn!("{}", e);
            app.error_message = Some(e.to_string());
        }
    }
}

/// Cancel a pending appointment with an optional reason.
pub fn cancel(app: &mut ConsoleApp, id: &RecordId, reason: &str) {
    match app.appointments.cancel(id, Some(reason)) {
        Ok(outcome) if outcome.is_applied() => {
            let label = describe(app, id);
            app.notify(NewNotification::new(
                NotificationKind::Warning,
                "appointments",
                "Appointment Cancelled",
                format!("{label} has been cancelled"),
            ));
        }
        Ok(outcome) => app.report_missing(outcome, "cancel appointment"),
        Err(e) => {
            warn!("{}", e);
            app.error_message = Some(e.to_string());
        }
    }
}

fn describe(app: &ConsoleApp, id: &RecordId) -> String {
    app.appointments
        .get(id)
        .map(|a| format!("{}'s appointment on {} at {}", a.patient_name, a.date.format("%b %-d"), a.time_label()))
        .unwrap_or_default()
}

fn show_form_dialog(app: &mut ConsoleApp, ctx: &egui::Context) {
    let mut save = false;
    let mut cancel = false;
    let doctors = AppointmentForm::doctor_options(&app.physiotherapists);
    let today = Local::now().date_naive();

    modal("Schedule Appointment").default_width(450.0).show(ctx, |ui| {
        let form = &mut app.appointment_form;
        ui.add_space(10.0);

        egui::Grid::new("appointment_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Patient:");
                ui.vertical(|ui| {
                    let selected = if form.patient_name.is_empty() { "Select patient..." } else { form.patient_name.as_str() };
                    egui::ComboBox::from_id_salt("appointment_patient")
                        .width(250.0)
                        .selected_text(selected.to_string())
                        .show_ui(ui, |ui| {
                            for name in AppointmentForm::patient_options() {
                                ui.selectable_value(&mut form.patient_name, name.to_string(), *name);
                            }
                        });
                    field_error(ui, &form.errors, "patient_name");
                });
                ui.end_row();

                ui.label("Doctor:");
                ui.vertical(|ui| {
                    let selected = if form.doctor_name.is_empty() { "Select doctor..." } else { form.doctor_name.as_str() };
                    egui::ComboBox::from_id_salt("appointment_doctor")
                        .width(250.0)
                        .selected_text(selected.to_string())
                        .show_ui(ui, |ui| {
                            for name in &doctors {
                                ui.selectable_value(&mut form.doctor_name, name.clone(), name.as_str());
                            }
                        });
                    field_error(ui, &form.errors, "doctor_name");
                });
                ui.end_row();

                ui.label("Date:");
                ui.vertical(|ui| {
                    let mut date = form.date.unwrap_or(today);
                    ui.horizontal(|ui| {
                        if ui
                            .add(DatePickerButton::new(&mut date).id_salt("appointment_date"))
                            .changed()
                        {
                            form.date = Some(date);
                        }
                        if form.date.is_none() {
                            ui.label(RichText::new("not selected").weak());
                        }
                    });
                    field_error(ui, &form.errors, "date");
                });
                ui.end_row();

                ui.label("Time:");
                ui.vertical(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.time)
                            .hint_text("HH:MM (24h)")
                            .desired_width(100.0),
                    );
                    field_error(ui, &form.errors, "time");
                });
                ui.end_row();

                ui.label("Purpose:");
                ui.vertical(|ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut form.purpose)
                            .desired_rows(2)
                            .desired_width(250.0),
                    );
                    field_error(ui, &form.errors, "purpose");
                });
                ui.end_row();
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if styled_button(ui, "Cancel").clicked() {
                cancel = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button_with_icon(ui, "", "Schedule").clicked() {
                    save = true;
                }
            });
        });
    });

    if cancel {
        app.appointment_form = AppointmentForm::default();
    } else if save && let Some(Saved::Added(id)) = forms::save(&mut app.appointment_form, &mut app.appointments) {
        let label = describe(app, &id);
        app.notify(NewNotification::new(
            NotificationKind::Info,
            "appointments",
            "Appointment Scheduled",
            format!("{label} is awaiting confirmation"),
        ));
    }
}
