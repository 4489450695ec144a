//! Physiotherapist roster panel.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{PENCIL, PLUS, TOGGLE_LEFT, TOGGLE_RIGHT, TRASH};
use tracing::debug;

use super::app::{ConsoleApp, DeleteTarget};
use super::components::{
    action_button, active_color, badge, danger_action_button, field_error, modal, panel_header,
    primary_button_with_icon, styled_button,
};
use crate::forms::{self, PhysiotherapistForm, Saved};
use crate::models::{ActiveStatus, NewNotification, NotificationKind};

pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Physiotherapists", "Therapist roster, specializations and availability");

    if primary_button_with_icon(ui, PLUS, "Add Physiotherapist").clicked() {
        app.physio_form = PhysiotherapistForm::open_new();
    }

    ui.add_space(15.0);

    let filtered = app.physiotherapists.search(&app.search);
    let mut toggle = None;

    ui.label(format!(
        "Showing {} of {} physiotherapists",
        filtered.len(),
        app.physiotherapists.len()
    ));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("physio_scroll").show(ui, |ui| {
        egui::Grid::new("physio_grid")
            .num_columns(6)
            .striped(true)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Specialization");
                ui.strong("Contact");
                ui.strong("Availability");
                ui.strong("Status");
                ui.strong("Actions");
                ui.end_row();

                for p in filtered {
                    ui.label(&p.name);
                    ui.label(&p.specialization);
                    ui.label(&p.contact);
                    ui.label(&p.availability);
                    badge(ui, p.status.label(), active_color(p.status));

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.physio_form = PhysiotherapistForm::edit(p);
                        }
                        let (icon, tip) = if p.status.is_active() {
                            (TOGGLE_RIGHT, "Deactivate")
                        } else {
                            (TOGGLE_LEFT, "Activate")
                        };
                        if action_button(ui, icon, tip).clicked() {
                            toggle = Some(p.id.clone());
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.delete_target = Some(DeleteTarget::Physiotherapist(p.id.clone(), p.name.clone()));
                            app.show_delete_confirm = true;
                        }
                    });
                    ui.end_row();
                }
            });
    });

    if let Some(id) = toggle {
        let outcome = app.physiotherapists.toggle_status(&id);
        app.report_missing(outcome, "toggle physiotherapist");
    }

    if app.physio_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_form_dialog(app: &mut ConsoleApp, ctx: &egui::Context) {
    let mut save = false;
    let mut cancel = false;

    modal(app.physio_form.title()).default_width(420.0).show(ctx, |ui| {
        let form = &mut app.physio_form;
        ui.add_space(10.0);

        egui::Grid::new("physio_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                for (label, value, hint, field) in [
                    ("Name:", &mut form.name, "Dr. Jane Doe", "name"),
                    ("Specialization:", &mut form.specialization, "Sports Therapy", "specialization"),
                    ("Contact:", &mut form.contact, "+1-555-0100", "contact"),
                    ("Availability:", &mut form.availability, "Mon-Fri 9AM-5PM", "availability"),
                ] {
                    ui.label(label);
                    ui.vertical(|ui| {
                        ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(240.0));
                        field_error(ui, &form.errors, field);
                    });
                    ui.end_row();
                }

                ui.label("Status:");
                ui.horizontal(|ui| {
                    for status in ActiveStatus::ALL {
                        ui.selectable_value(&mut form.status, status, status.label());
                    }
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
                if primary_button_with_icon(ui, "", "Save").clicked() {
                    save = true;
                }
            });
        });
    });

    if cancel {
        app.physio_form = PhysiotherapistForm::default();
    } else if save {
        match forms::save(&mut app.physio_form, &mut app.physiotherapists) {
            Some(Saved::Added(id)) => {
                let name = app.physiotherapists.get(&id).map(|p| p.name.clone()).unwrap_or_default();
                app.notify(NewNotification::new(
                    NotificationKind::Success,
                    "physiotherapists",
                    "New Physiotherapist Added",
                    format!("{name} has joined the team"),
                ));
            }
            Some(Saved::Missing(id)) => debug!(%id, "physiotherapist removed while being edited"),
            Some(Saved::Updated(_)) | None => {}
        }
    }
}
