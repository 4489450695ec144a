//! Staff management panel with add, edit, delete, status toggle and filters.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{PENCIL, PLUS, TOGGLE_LEFT, TOGGLE_RIGHT, TRASH};
use tracing::debug;

use super::app::{ConsoleApp, DeleteTarget};
use super::components::{
    action_button, active_color, badge, danger_action_button, field_error, modal, panel_header,
    primary_button_with_icon, styled_button,
};
use crate::forms::{self, Saved, StaffForm};
use crate::models::{ActiveStatus, NewNotification, NotificationKind, StaffRole};

/// Show the staff panel.
pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Staff", "Reception, support and administrative team");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Staff Member").clicked() {
            app.staff_form = StaffForm::open_new();
        }

        ui.add_space(20.0);

        ui.label("Status:");
        ui.selectable_value(&mut app.staff_status_filter, None, "All");
        for status in ActiveStatus::ALL {
            ui.selectable_value(&mut app.staff_status_filter, Some(status), status.label());
        }
    });

    ui.add_space(15.0);

    let status_filter = app.staff_status_filter;
    let filtered: Vec<_> = app
        .staff
        .search(&app.search)
        .into_iter()
        .filter(|s| status_filter.is_none_or(|f| s.status == f))
        .collect();
    let mut toggle = None;

    ui.label(format!("Showing {} of {} staff members", filtered.len(), app.staff.len()));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("staff_scroll").show(ui, |ui| {
        egui::Grid::new("staff_grid")
            .num_columns(6)
            .striped(true)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Name");
                ui.strong("Role");
                ui.strong("Contact");
                ui.strong("Email");
                ui.strong("Status");
                ui.strong("Actions");
                ui.end_row();

                for member in filtered {
                    ui.label(&member.name);
                    ui.label(member.role.label());
                    ui.label(&member.contact);
                    ui.label(&member.email);
                    badge(ui, member.status.label(), active_color(member.status));

                    ui.horizontal(|ui| {
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            app.staff_form = StaffForm::edit(member);
                        }
                        let (icon, tip) = if member.status.is_active() {
                            (TOGGLE_RIGHT, "Deactivate")
                        } else {
                            (TOGGLE_LEFT, "Activate")
                        };
                        if action_button(ui, icon, tip).clicked() {
                            toggle = Some(member.id.clone());
                        }
                        if danger_action_button(ui, TRASH, "Delete").clicked() {
                            app.delete_target = Some(DeleteTarget::Staff(member.id.clone(), member.name.clone()));
                            app.show_delete_confirm = true;
                        }
                    });
                    ui.end_row();
                }
            });
    });

    if let Some(id) = toggle {
        let outcome = app.staff.toggle_status(&id);
        app.report_missing(outcome, "toggle staff");
    }

    if app.staff_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_form_dialog(app: &mut ConsoleApp, ctx: &egui::Context) {
    let mut save = false;
    let mut cancel = false;

    modal(app.staff_form.title()).default_width(450.0).show(ctx, |ui| {
        let form = &mut app.staff_form;
        ui.add_space(10.0);

        egui::Grid::new("staff_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.vertical(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                    field_error(ui, &form.errors, "name");
                });
                ui.end_row();

                ui.label("Role:");
                ui.vertical(|ui| {
                    egui::ComboBox::from_id_salt("staff_form_role")
                        .width(250.0)
                        .selected_text(form.role.map(|r| r.label()).unwrap_or("Select role..."))
                        .show_ui(ui, |ui| {
                            for role in StaffRole::ALL {
                                ui.selectable_value(&mut form.role, Some(role), role.label());
                            }
                        });
                    field_error(ui, &form.errors, "role");
                });
                ui.end_row();

                ui.label("Contact:");
                ui.vertical(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.contact)
                            .hint_text("+1 (555) 123-4567")
                            .desired_width(250.0),
                    );
                    field_error(ui, &form.errors, "contact");
                });
                ui.end_row();

                ui.label("Email:");
                ui.vertical(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.email)
                            .hint_text("name@physio.com")
                            .desired_width(250.0),
                    );
                    field_error(ui, &form.errors, "email");
                });
                ui.end_row();

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
        app.staff_form = StaffForm::default();
    } else if save {
        match forms::save(&mut app.staff_form, &mut app.staff) {
            Some(Saved::Added(id)) => {
                let (name, role) = app
                    .staff
                    .get(&id)
                    .map(|s| (s.name.clone(), s.role.label()))
                    .unwrap_or_default();
                app.notify(NewNotification::new(
                    NotificationKind::Success,
                    "staff",
                    "New Staff Member Added",
                    format!("{name} joined as {role}"),
                ));
            }
            Some(Saved::Missing(id)) => debug!(%id, "staff member removed while being edited"),
            Some(Saved::Updated(_)) | None => {}
        }
    }
}
