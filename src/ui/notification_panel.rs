//! Full notification list with read tracking.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CHECK, CHECKS};

use super::app::{ConsoleApp, Section};
use super::components::{action_button, badge, card_frame, colors, kind_color, panel_header, styled_button};

pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Notifications", "Activity across the clinic");

    let unread = app.notifications.unread_count();
    ui.horizontal(|ui| {
        ui.label(format!("{} notifications, {unread} unread", app.notifications.len()));
        ui.add_space(10.0);
        if ui
            .add_enabled(unread > 0, egui::Button::new(format!("{CHECKS} Mark all as read")))
            .clicked()
        {
            app.notifications.mark_all_read();
        }
    });

    ui.add_space(15.0);

    let mut mark = None;
    ScrollArea::vertical().id_salt("notifications_scroll").show(ui, |ui| {
        if app.notifications.is_empty() {
            ui.label(RichText::new("No notifications yet").weak());
        }
        for n in app.notifications.all() {
            let response = card_frame(ui)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        badge(ui, n.kind.label(), kind_color(n.kind));
                        let title = RichText::new(&n.title);
                        ui.label(if n.read { title } else { title.strong() });
                        if !n.read {
                            ui.label(RichText::new("●").color(colors::ACCENT));
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if !n.read && action_button(ui, CHECK, "Mark as read").clicked() {
                                mark = Some(n.id);
                            }
                            ui.label(RichText::new(&n.time).small().weak());
                        });
                    });
                    ui.label(RichText::new(&n.message).weak());
                })
                .response
                .interact(egui::Sense::click());
            if response.clicked() && !n.read {
                mark = Some(n.id);
            }
            ui.add_space(6.0);
        }
    });

    if let Some(id) = mark {
        let outcome = app.notifications.mark_read(id);
        app.report_missing(outcome, "mark notification read");
    }

    ui.add_space(10.0);
    if styled_button(ui, "Back to Dashboard").clicked() {
        app.navigate(Section::Dashboard);
    }
}
