//! Therapy catalog browsing state.

use tracing::info;

use crate::models::{NewNotification, NotificationKind, Therapy, TherapyCategory};
use crate::seed;

#[derive(Debug, Clone)]
pub struct TreatmentCatalog {
    therapies: Vec<Therapy>,
    /// `None` shows every category.
    pub filter: Option<TherapyCategory>,
    flipped: Option<&'static str>,
}

impl Default for TreatmentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TreatmentCatalog {
    pub fn new() -> Self {
        Self {
            therapies: seed::therapies(),
            filter: None,
            flipped: None,
        }
    }

    /// Therapies matching the current category filter.
    pub fn visible(&self) -> impl Iterator<Item = &Therapy> {
        self.therapies
            .iter()
            .filter(|t| self.filter.is_none_or(|c| t.category == c))
    }

    pub fn set_filter(&mut self, filter: Option<TherapyCategory>) {
        self.filter = filter;
        // A hidden card cannot stay flipped.
        if let Some(id) = self.flipped {
            if !self.visible().any(|t| t.id == id) {
                self.flipped = None;
            }
        }
    }

    /// Flip the card for `id`, unflipping whichever card was showing details.
    pub fn toggle_flip(&mut self, id: &'static str) {
        self.flipped = if self.flipped == Some(id) { None } else { Some(id) };
    }

    pub fn is_flipped(&self, id: &str) -> bool {
        self.flipped == Some(id)
    }

    pub fn get(&self, id: &str) -> Option<&Therapy> {
        self.therapies.iter().find(|t| t.id == id)
    }
}

/// Notification raised when a session is requested from a card.
pub fn booking_request(therapy: &Therapy) -> NewNotification {
    info!(therapy = therapy.id, "therapy booking requested");
    NewNotification::new(
        NotificationKind::Info,
        "treatments",
        "Therapy Booking Requested",
        format!("A {} session ({}) was requested", therapy.name, therapy.duration),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_category() {
        let mut catalog = TreatmentCatalog::new();
        assert_eq!(catalog.visible().count(), 6);

        catalog.set_filter(Some(TherapyCategory::Thermal));
        let names: Vec<_> = catalog.visible().map(|t| t.name).collect();
        assert_eq!(names, ["Heat Therapy", "Cold Therapy"]);

        catalog.set_filter(Some(TherapyCategory::Manual));
        assert_eq!(catalog.visible().count(), 1);
    }

    #[test]
    fn test_only_one_card_flipped() {
        let mut catalog = TreatmentCatalog::new();
        catalog.toggle_flip("ultrasound");
        assert!(catalog.is_flipped("ultrasound"));

        catalog.toggle_flip("needling");
        assert!(catalog.is_flipped("needling"));
        assert!(!catalog.is_flipped("ultrasound"));

        catalog.toggle_flip("needling");
        assert!(!catalog.is_flipped("needling"));
    }

    #[test]
    fn test_filter_clears_hidden_flip() {
        let mut catalog = TreatmentCatalog::new();
        catalog.toggle_flip("heat-therapy");
        catalog.set_filter(Some(TherapyCategory::Electrotherapy));
        assert!(!catalog.is_flipped("heat-therapy"));

        catalog.toggle_flip("ultrasound");
        catalog.set_filter(None);
        assert!(catalog.is_flipped("ultrasound"));
    }

    #[test]
    fn test_booking_request_notification() {
        let catalog = TreatmentCatalog::new();
        let note = booking_request(catalog.get("manual-therapy").unwrap());
        assert_eq!(note.section, "treatments");
        assert!(note.message.contains("Manual Therapy"));
    }
}
