//! Dashboard panel with stats, navigation cards, today's schedule and recent notifications.

use chrono::Local;
use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{
    CALENDAR, CHART_BAR, CHART_LINE_UP, CURRENCY_DOLLAR, FIRST_AID_KIT, PULSE, STETHOSCOPE, USERS, USERS_THREE,
};

use super::app::{ConsoleApp, Section};
use super::components::{appointment_color, badge, card_frame, colors, dashboard_card, kind_color, stat_card, trend_color};
use crate::forms::{AppointmentForm, PatientForm};
use crate::seed::SUMMARY_METRICS;

fn summary_icon(title: &str) -> &'static str {
    match title {
        "Total Users" => USERS,
        "Active Sessions" => PULSE,
        "Monthly Revenue" => CURRENCY_DOLLAR,
        _ => CHART_LINE_UP,
    }
}

/// Show the dashboard panel.
///
/// Returns `Some(section)` if navigation is requested.
pub fn show(app: &mut ConsoleApp, ui: &mut Ui) -> Option<Section> {
    let mut next = None;
    let today = Local::now().date_naive();

    ScrollArea::vertical().id_salt("dashboard_scroll").show(ui, |ui| {
        ui.add_space(10.0);
        ui.label(RichText::new(format!("Welcome to {}", app.config.clinic.name)).size(26.0).strong());
        ui.label(RichText::new(today.format("%A, %B %-d, %Y").to_string()).weak());
        ui.add_space(20.0);

        // Stat cards row
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, USERS, "Patients", &app.patients.len().to_string(), "Registered patients");
            let active = app.physiotherapists.iter().filter(|p| p.status.is_active()).count();
            stat_card(
                ui,
                STETHOSCOPE,
                "Physiotherapists",
                &app.physiotherapists.len().to_string(),
                &format!("{active} active"),
            );
            stat_card(ui, USERS_THREE, "Staff", &app.staff.len().to_string(), "Support team");
            stat_card(
                ui,
                CALENDAR,
                "Today's Appointments",
                &app.appointments.scheduled_on(today).to_string(),
                "Excluding cancelled",
            );
        });

        ui.add_space(10.0);

        ui.horizontal_wrapped(|ui| {
            for metric in &SUMMARY_METRICS {
                card_frame(ui).show(ui, |ui| {
                    ui.set_min_width(170.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(summary_icon(metric.title)).color(colors::ACCENT));
                        ui.label(RichText::new(metric.title).small());
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(metric.value).heading().strong());
                        ui.label(RichText::new(metric.trend).color(trend_color(metric.trend)));
                    });
                    ui.label(RichText::new(metric.subtitle).small().weak());
                });
            }
        });

        ui.add_space(20.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 4.0;
        let spacing = 20.0;
        let card_width = ((available - spacing * (num_cards - 1.0)) / num_cards).clamp(140.0, 220.0);
        let card_size = egui::vec2(card_width, card_width * 0.7);

        ui.horizontal(|ui| {
            if dashboard_card(ui, "Patients", "Records & history", USERS, card_size).clicked() {
                next = Some(Section::Patients);
            }
            ui.add_space(spacing);
            if dashboard_card(ui, "Appointments", "Schedule & approvals", CALENDAR, card_size).clicked() {
                next = Some(Section::Appointments);
            }
            ui.add_space(spacing);
            if dashboard_card(ui, "Treatments", "Therapy catalog", FIRST_AID_KIT, card_size).clicked() {
                next = Some(Section::Treatments);
            }
            ui.add_space(spacing);
            if dashboard_card(ui, "Reports", "Performance & export", CHART_BAR, card_size).clicked() {
                next = Some(Section::Reports);
            }
        });

        ui.add_space(20.0);

        let column_width = (ui.available_width() - 30.0) / 2.0;
        ui.horizontal(|ui| {
            // Left column - Quick actions and pending appointments
            ui.vertical(|ui| {
                ui.set_width(column_width);
                card_frame(ui).show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);
                    ui.label(RichText::new("Quick Actions").strong());
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Register Patient").clicked() {
                            app.patient_form = PatientForm::open_new();
                            next = Some(Section::Patients);
                        }
                        if ui.button("Schedule Appointment").clicked() {
                            app.appointment_form = AppointmentForm::open_new();
                            next = Some(Section::Appointments);
                        }
                    });
                });

                card_frame(ui).show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);
                    ui.label(RichText::new("Upcoming Appointments").strong());
                    ui.add_space(10.0);
                    let mut upcoming: Vec<_> = app.appointments.iter().filter(|a| !a.status.is_terminal()).collect();
                    upcoming.sort_by_key(|a| (a.date, a.time));
                    if upcoming.is_empty() {
                        ui.label(RichText::new("No pending appointments").weak());
                    }
                    for a in upcoming.into_iter().take(5) {
                        ui.horizontal(|ui| {
                            ui.label(format!("{} {}", a.date.format("%b %-d"), a.time_label()));
                            ui.label(RichText::new(&a.patient_name).strong());
                            ui.label(RichText::new(&a.doctor_name).weak());
                            badge(ui, a.status.label(), appointment_color(a.status));
                        });
                    }
                });
            });

            ui.add_space(10.0);

            // Right column - Recent notifications
            ui.vertical(|ui| {
                ui.set_width(column_width);
                card_frame(ui).show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Recent Notifications").strong());
                        if ui.small_button("View all").clicked() {
                            next = Some(Section::Notifications);
                        }
                    });
                    ui.add_space(10.0);

                    if app.notifications.is_empty() {
                        ui.label(RichText::new("No recent activity").weak());
                    }
                    for n in app.notifications.latest(5) {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(n.time.as_str()).small().weak());
                            ui.label(RichText::new(&n.title).color(kind_color(n.kind)));
                        });
                    }
                });
            });
        });
    });

    next
}
