//! Reports panel with monthly activity, treatment distribution and Excel export.

use eframe::egui::{self, ProgressBar, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CALENDAR, FILE_XLS, STETHOSCOPE, USERS, USERS_THREE};

use super::app::ConsoleApp;
use super::components::{card_frame, panel_header, primary_button_with_icon, stat_card, trend_color};
use crate::seed::{self, Metric, MONTHLY_STATS, PERFORMANCE_METRICS, TREATMENT_STATS};

/// Share of the best month, in `0.0..=1.0`.
fn revenue_fraction(revenue: u32, peak: u32) -> f32 {
    if peak == 0 { 0.0 } else { revenue as f32 / peak as f32 }
}

fn metric_card(ui: &mut Ui, metric: &Metric) {
    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(170.0);
        ui.label(RichText::new(metric.title).small());
        ui.horizontal(|ui| {
            ui.label(RichText::new(metric.value).heading().strong());
            ui.label(RichText::new(metric.trend).color(trend_color(metric.trend)));
        });
    });
}

/// Show the reports panel.
pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Reports", "Clinic performance overview");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_registries();
        }
        ui.add_space(10.0);
        let total = app.patients.len() + app.physiotherapists.len() + app.staff.len() + app.appointments.len();
        ui.label(RichText::new(format!("{total} records across all registries")).weak());
    });

    ui.add_space(15.0);

    ScrollArea::vertical().id_salt("reports_scroll").show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, USERS, "Patients", &app.patients.len().to_string(), "Registered");
            stat_card(ui, STETHOSCOPE, "Physiotherapists", &app.physiotherapists.len().to_string(), "On the roster");
            stat_card(ui, USERS_THREE, "Staff", &app.staff.len().to_string(), "Support team");
            stat_card(ui, CALENDAR, "Appointments", &app.appointments.len().to_string(), "All statuses");
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.heading(format!("{CALENDAR} Monthly Activity"));
            ui.add_space(5.0);
            let peak = seed::peak_monthly_revenue();

            egui::Grid::new("monthly_stats_grid")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Month");
                    ui.strong("Patients");
                    ui.strong("Appointments");
                    ui.strong("Revenue");
                    ui.end_row();

                    for m in &MONTHLY_STATS {
                        ui.label(m.month);
                        ui.label(m.patients.to_string());
                        ui.label(m.appointments.to_string());
                        ui.add(
                            ProgressBar::new(revenue_fraction(m.revenue, peak))
                                .desired_width(220.0)
                                .text(format!("${}", m.revenue)),
                        );
                        ui.end_row();
                    }
                });
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.heading("Treatment Distribution");
            ui.add_space(5.0);

            egui::Grid::new("treatment_stats_grid")
                .num_columns(3)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for t in &TREATMENT_STATS {
                        ui.label(t.name);
                        ui.add(
                            ProgressBar::new(t.percentage as f32 / 100.0)
                                .desired_width(220.0)
                                .text(format!("{}%", t.percentage)),
                        );
                        ui.label(RichText::new(format!("{} sessions", t.count)).weak());
                        ui.end_row();
                    }
                });
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.heading("Performance");
            ui.add_space(5.0);
            ui.horizontal_wrapped(|ui| {
                for metric in &PERFORMANCE_METRICS {
                    metric_card(ui, metric);
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_fraction_of_peak_month() {
        let peak = seed::peak_monthly_revenue();
        assert_eq!(revenue_fraction(peak, peak), 1.0);
        assert!(revenue_fraction(12_800, peak) < 0.6);
    }

    #[test]
    fn test_revenue_fraction_zero_peak() {
        assert_eq!(revenue_fraction(100, 0), 0.0);
    }
}
