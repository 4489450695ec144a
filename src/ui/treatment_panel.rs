//! Therapy catalog with category filter and flip cards.

use eframe::egui::{self, RichText, ScrollArea, Sense, Ui};
use egui_phosphor::regular::{CLOCK, CROSSHAIR, FIRST_AID_KIT, HAND_PALM, LIGHTNING, SNOWFLAKE, THERMOMETER_HOT, WAVE_SINE};

use super::app::ConsoleApp;
use super::components::{badge, card_frame, colors, panel_header, primary_button_with_icon};
use crate::models::{Therapy, TherapyCategory};
use crate::treatments::booking_request;

const CARD_WIDTH: f32 = 260.0;
const CARD_HEIGHT: f32 = 230.0;

fn therapy_icon(id: &str) -> &'static str {
    match id {
        "manual-therapy" => HAND_PALM,
        "ultrasound" => WAVE_SINE,
        "heat-therapy" => THERMOMETER_HOT,
        "cold-therapy" => SNOWFLAKE,
        "needling" => CROSSHAIR,
        "electrotherapy" => LIGHTNING,
        _ => FIRST_AID_KIT,
    }
}

pub fn show(app: &mut ConsoleApp, ui: &mut Ui) {
    panel_header(ui, "Treatments", "Therapies offered by the clinic. Click a card for details.");

    ui.horizontal(|ui| {
        ui.label("Category:");
        let mut filter = app.catalog.filter;
        ui.selectable_value(&mut filter, None, "All");
        for category in TherapyCategory::ALL {
            ui.selectable_value(&mut filter, Some(category), category.label());
        }
        if filter != app.catalog.filter {
            app.catalog.set_filter(filter);
        }
    });

    ui.add_space(15.0);

    let mut flip = None;
    let mut book = None;

    ScrollArea::vertical().id_salt("treatments_scroll").show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for therapy in app.catalog.visible() {
                let flipped = app.catalog.is_flipped(therapy.id);
                let response = card_frame(ui)
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(CARD_WIDTH, CARD_HEIGHT));
                        ui.set_max_width(CARD_WIDTH);
                        if flipped {
                            if card_back(ui, therapy) {
                                book = Some(therapy.id);
                            }
                        } else {
                            card_front(ui, therapy);
                        }
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    flip = Some(therapy.id);
                }
            }
        });
    });

    if let Some(therapy) = book.and_then(|id| app.catalog.get(id)) {
        let note = booking_request(therapy);
        let message = format!("Booking request sent for {}", therapy.name);
        app.notify(note);
        app.success_message = Some(message);
    } else if let Some(id) = flip {
        app.catalog.toggle_flip(id);
    }
}

fn card_front(ui: &mut Ui, therapy: &Therapy) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.label(RichText::new(therapy_icon(therapy.id)).size(40.0).color(colors::ACCENT));
        ui.add_space(8.0);
        ui.label(RichText::new(therapy.name).size(18.0).strong());
        ui.label(RichText::new(therapy.short_description).weak());
        ui.add_space(8.0);
        ui.label(format!("{CLOCK} {}", therapy.duration));
        badge(ui, therapy.category.label(), colors::INFO);
    });
}

/// Detail side of the card. Returns true when a session is requested.
fn card_back(ui: &mut Ui, therapy: &Therapy) -> bool {
    ui.label(RichText::new(therapy.name).strong());
    ui.add_space(4.0);
    ui.label(RichText::new(therapy.detailed_description).small());
    ui.add_space(6.0);
    ui.label(RichText::new("Benefits").strong().small());
    for benefit in therapy.benefits {
        ui.label(RichText::new(format!("• {benefit}")).small());
    }
    ui.add_space(6.0);
    primary_button_with_icon(ui, "", "Book Therapy").clicked()
}
