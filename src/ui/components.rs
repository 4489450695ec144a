//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, StrokeKind, Ui};

use crate::auth::Banner;
use crate::models::{ActiveStatus, AppointmentStatus, NotificationKind};
use crate::validation::FieldErrors;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const INFO: Color32 = Color32::from_rgb(100, 150, 230);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const ACCENT: Color32 = Color32::from_rgb(0x44, 0x72, 0xC4);
}

pub fn kind_color(kind: NotificationKind) -> Color32 {
    match kind {
        NotificationKind::Info => colors::INFO,
        NotificationKind::Success => colors::SUCCESS,
        NotificationKind::Warning => colors::WARNING,
        NotificationKind::Error => colors::ERROR,
    }
}

pub fn appointment_color(status: AppointmentStatus) -> Color32 {
    match status {
        AppointmentStatus::Pending => colors::WARNING,
        AppointmentStatus::Confirmed => colors::SUCCESS,
        AppointmentStatus::Cancelled => colors::ERROR,
    }
}

pub fn active_color(status: ActiveStatus) -> Color32 {
    if status.is_active() { colors::SUCCESS } else { colors::NEUTRAL }
}

/// A leading minus marks a declining figure.
pub fn trend_color(trend: &str) -> Color32 {
    if trend.starts_with('-') { colors::WARNING } else { colors::SUCCESS }
}

/// Render a panel header with title and a muted subtitle.
pub fn panel_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).size(24.0));
    if !subtitle.is_empty() {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(15.0);
}

/// Standard card frame used by dashboard and report sections.
pub fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, icon: &str, title: &str, value: &str, subtitle: &str) {
    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(170.0);

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(18.0).color(colors::ACCENT));
                ui.label(RichText::new(title).small());
            });
            ui.label(RichText::new(value).heading().strong());
            ui.label(RichText::new(subtitle).small().weak());
        });
    });
}

/// Render a clickable navigation card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn dashboard_card(ui: &mut Ui, title: &str, description: &str, icon: &str, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let scale = size.x / 200.0;

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        let painter = ui.painter();
        painter.text(
            egui::pos2(rect.center().x, rect.top() + size.y * 0.25),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(32.0 * scale),
            colors::ACCENT,
        );
        painter.text(
            egui::pos2(rect.center().x, rect.center().y + size.y * 0.08),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(16.0 * scale),
            visuals.text_color(),
        );
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - size.y * 0.17),
            egui::Align2::CENTER_CENTER,
            description,
            egui::FontId::proportional(11.0 * scale),
            ui.visuals().weak_text_color(),
        );
    }

    response
}

pub fn styled_button(ui: &mut Ui, text: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(text).size(14.0)).min_size(egui::vec2(80.0, 28.0)))
}

pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() { text.to_string() } else { format!("{icon} {text}") };
    ui.add(
        egui::Button::new(RichText::new(label).size(14.0).color(Color32::WHITE))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(80.0, 28.0)),
    )
}

/// Small icon button for table rows.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
        .on_hover_text(tooltip)
}

pub fn danger_action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0).color(colors::ERROR)).frame(false))
        .on_hover_text(tooltip)
}

/// Colored pill label.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.25))
        .inner_margin(Margin::symmetric(8, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

/// Inline message under a form field, if it failed validation.
pub fn field_error(ui: &mut Ui, errors: &FieldErrors, field: &str) {
    if let Some(message) = errors.get(field) {
        ui.label(RichText::new(message).small().color(colors::ERROR));
    }
}

/// Labelled single-line input followed by its error. Returns the text response.
pub fn labeled_input(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    errors: &FieldErrors,
    field: &str,
) -> Response {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    field_error(ui, errors, field);
    ui.add_space(6.0);
    response
}

/// Password input with an error line.
pub fn password_input(ui: &mut Ui, label: &str, value: &mut String, errors: &FieldErrors, field: &str) -> Response {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .password(true)
            .desired_width(f32::INFINITY),
    );
    field_error(ui, errors, field);
    ui.add_space(6.0);
    response
}

/// Title and message box above a form.
pub fn banner(ui: &mut Ui, banner: &Banner) {
    let color = kind_color(banner.kind);
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(Margin::same(10))
        .corner_radius(CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(&banner.title).strong().color(color));
            ui.label(&banner.message);
        });
    ui.add_space(10.0);
}

/// Centered modal window with the standard options.
pub fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}
