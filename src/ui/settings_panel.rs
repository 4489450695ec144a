//! Settings panel for appearance, regional, notification and clinic configuration.

use eframe::egui::{self, RichText};

use super::app::ConsoleApp;
use super::components::{colors, panel_header};
use crate::config::{AppConfig, LANGUAGES, TIMEZONES};

fn option_label(options: &[(&'static str, &'static str)], code: &str) -> String {
    options
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Show the settings panel.
pub fn show(app: &mut ConsoleApp, ui: &mut egui::Ui) {
    panel_header(ui, "Settings", "Console preferences and clinic information");

    egui::ScrollArea::vertical().id_salt("settings_scroll").show(ui, |ui| {
        ui.group(|ui| {
            ui.heading("Appearance");
            ui.add_space(5.0);

            if ui.checkbox(&mut app.config.ui.dark_mode, "Dark mode").changed() {
                app.config_modified = true;
            }
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.heading("Regional");
            ui.add_space(5.0);

            egui::Grid::new("regional_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Language:");
                    let before = app.config.ui.language.clone();
                    egui::ComboBox::from_id_salt("settings_language")
                        .width(200.0)
                        .selected_text(option_label(&LANGUAGES, &app.config.ui.language))
                        .show_ui(ui, |ui| {
                            for (code, label) in LANGUAGES {
                                ui.selectable_value(&mut app.config.ui.language, code.to_string(), label);
                            }
                        });
                    if app.config.ui.language != before {
                        app.config_modified = true;
                    }
                    ui.end_row();

                    ui.label("Timezone:");
                    let before = app.config.ui.timezone.clone();
                    egui::ComboBox::from_id_salt("settings_timezone")
                        .width(200.0)
                        .selected_text(option_label(&TIMEZONES, &app.config.ui.timezone))
                        .show_ui(ui, |ui| {
                            for (code, label) in TIMEZONES {
                                ui.selectable_value(&mut app.config.ui.timezone, code.to_string(), label);
                            }
                        });
                    if app.config.ui.timezone != before {
                        app.config_modified = true;
                    }
                    ui.end_row();
                });
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.heading("Notifications");
            ui.add_space(5.0);

            let prefs = &mut app.config.notifications;
            let mut changed = false;
            changed |= ui.checkbox(&mut prefs.appointments, "Appointment updates").changed();
            changed |= ui.checkbox(&mut prefs.patients, "Patient registrations").changed();
            changed |= ui.checkbox(&mut prefs.treatments, "Treatment bookings").changed();
            changed |= ui.checkbox(&mut prefs.system, "System and staff alerts").changed();
            if changed {
                app.config_modified = true;
            }
        });

        ui.add_space(15.0);

        ui.group(|ui| {
            ui.heading("Clinic Information");
            ui.add_space(5.0);

            egui::Grid::new("clinic_settings_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    let clinic = &mut app.config.clinic;
                    let mut changed = false;
                    for (label, value) in [
                        ("Clinic name:", &mut clinic.name),
                        ("Email:", &mut clinic.email),
                        ("Phone:", &mut clinic.phone),
                        ("Address:", &mut clinic.address),
                        ("Working hours:", &mut clinic.hours),
                        ("Timezone:", &mut clinic.timezone),
                    ] {
                        ui.label(label);
                        changed |= ui
                            .add(egui::TextEdit::singleline(value).desired_width(280.0))
                            .changed();
                        ui.end_row();
                    }
                    if changed {
                        app.config_modified = true;
                    }
                });
        });

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let save_btn = egui::Button::new("Save Settings");
            if ui.add_enabled(app.config_modified, save_btn).clicked() {
                app.save_settings();
            }

            if app.config_modified {
                ui.label(RichText::new("(unsaved changes)").color(colors::WARNING).italics());
            }

            if ui.button("Reset to Defaults").clicked() {
                app.config = AppConfig::default();
                app.config_modified = true;
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new(format!("Config file: {}", app.config_path.display())).small().weak());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label_known_code() {
        assert_eq!(option_label(&LANGUAGES, "en-us"), "English (US)");
    }

    #[test]
    fn test_option_label_unknown_code_falls_back() {
        assert_eq!(option_label(&TIMEZONES, "utc+13"), "utc+13");
    }
}
