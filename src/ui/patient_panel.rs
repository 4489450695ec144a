//! Patient records panel with add, edit, delete and search.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FILE_XLS, PENCIL, PLUS, TRASH};
use tracing::debug;

use super::app::{ConsoleApp, DeleteTarget};
use super::components::{
    action_button, danger_action_button, field_error, modal, panel_header, primary_button_with_icon, styled_button,
};
use crate::forms::{self, PatientForm, Saved};
use crate::models::{Gender, NewNotification, NotificationKind};
use crate::validation::FieldErrors;

/// Show the patients panel.
pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Patients", "Manage patient records and medical history");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Patient").clicked() {
            app.patient_form = PatientForm::open_new();
        }
        ui.add_space(10.0);
        if styled_button(ui, &format!("{FILE_XLS} Export")).clicked() {
            app.export_registries();
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.patient_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut ConsoleApp, ui: &mut Ui) {
    let filtered = app.patients.search(&app.search);

    ui.label(format!("Showing {} of {} patients", filtered.len(), app.patients.len()));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("patients_scroll").show(ui, |ui| {
        egui::Grid::new("patients_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Age");
                ui.strong("Gender");
                ui.strong("Contact");
                ui.strong("Medical History");
                ui.strong("Actions");
                ui.end_row();

                for patient in filtered {
                    ui.label(patient.full_name());
                    ui.label(patient.age.to_string());
                    ui.label(patient.gender.map(|g| g.label()).unwrap_or("-"));
                    ui.label(&patient.contact_number);
                    ui.label(RichText::new(&patient.medical_history).weak());

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.patient_form = PatientForm::edit(patient);
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.delete_target = Some(DeleteTarget::Patient(patient.id.clone(), patient.full_name()));
                            app.show_delete_confirm = true;
                        }
                    });
                    ui.end_row();
                }
            });
    });
}

/// Single-line input with its validation message underneath.
fn text_cell(ui: &mut Ui, value: &mut String, hint: &str, errors: &FieldErrors, field: &str) -> egui::Response {
    ui.vertical(|ui| {
        let response = ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(250.0));
        field_error(ui, errors, field);
        response
    })
    .inner
}

fn show_form_dialog(app: &mut ConsoleApp, ctx: &egui::Context) {
    let mut save = false;
    let mut cancel = false;

    modal(app.patient_form.title()).default_width(450.0).show(ctx, |ui| {
        let form = &mut app.patient_form;
        ui.add_space(10.0);

        egui::Grid::new("patient_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("First Name:");
                text_cell(ui, &mut form.first_name, "", &form.errors, "first_name");
                ui.end_row();

                ui.label("Last Name:");
                text_cell(ui, &mut form.last_name, "", &form.errors, "last_name");
                ui.end_row();

                ui.label("Age:");
                text_cell(ui, &mut form.age, "1-120", &form.errors, "age");
                ui.end_row();

                ui.label("Gender:");
                egui::ComboBox::from_id_salt("patient_form_gender")
                    .width(150.0)
                    .selected_text(form.gender.map(|g| g.label()).unwrap_or("Select..."))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut form.gender, None, "Not specified");
                        for gender in Gender::ALL {
                            ui.selectable_value(&mut form.gender, Some(gender), gender.label());
                        }
                    });
                ui.end_row();

                ui.label("Contact Number:");
                if text_cell(ui, &mut form.contact_number, "10 digits", &form.errors, "contact_number").changed() {
                    form.sanitize_contact();
                }
                ui.end_row();

                ui.label("Medical History:");
                ui.vertical(|ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut form.medical_history)
                            .desired_rows(3)
                            .desired_width(250.0),
                    );
                    field_error(ui, &form.errors, "medical_history");
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
                let label = if form.is_editing() { "Update" } else { "Add Patient" };
                if primary_button_with_icon(ui, "", label).clicked() {
                    save = true;
                }
            });
        });
    });

    if cancel {
        app.patient_form = PatientForm::default();
    } else if save {
        save_patient(app);
    }
}

fn save_patient(app: &mut ConsoleApp) {
    match forms::save(&mut app.patient_form, &mut app.patients) {
        None => {}
        Some(Saved::Added(id)) => {
            let name = app.patients.get(&id).map(|p| p.full_name()).unwrap_or_default();
            app.notify(NewNotification::new(
                NotificationKind::Success,
                "patients",
                "New Patient Registration",
                format!("{name} has been registered"),
            ));
        }
        Some(Saved::Updated(_)) => {}
        Some(Saved::Missing(id)) => debug!(%id, "patient removed while being edited"),
    }
}
