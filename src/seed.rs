//! Startup data shared by every view.
//!
//! The physiotherapist list seeds both the physiotherapist registry and the
//! appointment form's doctor choices, so there is exactly one copy.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    ActiveStatus, Appointment, AppointmentStatus, Gender, NewNotification, NotificationKind, Patient, Physiotherapist,
    Staff, StaffRole, Therapy, TherapyCategory,
};
use crate::registry::RecordId;

/// Patients offered by the appointment form.
pub const APPOINTMENT_PATIENTS: [&str; 5] = [
    "Sarah Johnson",
    "Mike Davis",
    "Emma Wilson",
    "John Anderson",
    "Lisa Chen",
];

/// Doctors offered by the appointment form in addition to the active
/// physiotherapists.
pub const DOCTORS: [&str; 4] = [
    "Dr. Sarah Smith",
    "Dr. Michael Brown",
    "Dr. Jennifer Taylor",
    "Dr. Robert Wilson",
];

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: RecordId::from("1"),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            age: 32,
            gender: Some(Gender::Female),
            contact_number: "+1-555-0123".to_string(),
            medical_history: "Lower back pain, previous physiotherapy".to_string(),
        },
        Patient {
            id: RecordId::from("2"),
            first_name: "Mike".to_string(),
            last_name: "Davis".to_string(),
            age: 28,
            gender: Some(Gender::Male),
            contact_number: "+1-555-0124".to_string(),
            medical_history: "Sports injury - knee rehabilitation".to_string(),
        },
    ]
}

pub fn physiotherapists() -> Vec<Physiotherapist> {
    vec![
        Physiotherapist {
            id: RecordId::from("1"),
            name: "Dr. Sarah Smith".to_string(),
            specialization: "Sports Therapy".to_string(),
            contact: "+1-555-0201".to_string(),
            availability: "Mon-Fri 9AM-5PM".to_string(),
            status: ActiveStatus::Active,
        },
        Physiotherapist {
            id: RecordId::from("2"),
            name: "Dr. Michael Brown".to_string(),
            specialization: "Orthopedic Rehabilitation".to_string(),
            contact: "+1-555-0202".to_string(),
            availability: "Tue-Sat 10AM-6PM".to_string(),
            status: ActiveStatus::Active,
        },
    ]
}

pub fn staff() -> Vec<Staff> {
    vec![
        Staff {
            id: RecordId::from("1"),
            name: "Jennifer Wilson".to_string(),
            role: StaffRole::Receptionist,
            contact: "+1-555-0301".to_string(),
            email: "jennifer@physio.com".to_string(),
            status: ActiveStatus::Active,
        },
        Staff {
            id: RecordId::from("2"),
            name: "Robert Johnson".to_string(),
            role: StaffRole::PhysicalTherapyAssistant,
            contact: "+1-555-0302".to_string(),
            email: "robert@physio.com".to_string(),
            status: ActiveStatus::Active,
        },
        Staff {
            id: RecordId::from("3"),
            name: "Maria Garcia".to_string(),
            role: StaffRole::AdministrativeAssistant,
            contact: "+1-555-0303".to_string(),
            email: "maria@physio.com".to_string(),
            status: ActiveStatus::Inactive,
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
    vec![
        Appointment {
            id: RecordId::from("1"),
            patient_name: "Sarah Johnson".to_string(),
            doctor_name: "Dr. Sarah Smith".to_string(),
            date,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            purpose: "Lower back pain therapy".to_string(),
            status: AppointmentStatus::Confirmed,
            reason: String::new(),
        },
        Appointment {
            id: RecordId::from("2"),
            patient_name: "Mike Davis".to_string(),
            doctor_name: "Dr. Michael Brown".to_string(),
            date,
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default(),
            purpose: "Knee rehabilitation".to_string(),
            status: AppointmentStatus::Pending,
            reason: "Waiting for insurance approval".to_string(),
        },
    ]
}

/// Notifications present when the console opens, oldest last.
/// Each pair is (content, relative time label).
pub fn notifications() -> Vec<(NewNotification, &'static str)> {
    vec![
        (
            NewNotification::new(
                NotificationKind::Success,
                "patients",
                "New Patient Registration",
                "Sarah Johnson has registered as a new patient",
            ),
            "2 mins ago",
        ),
        (
            NewNotification::new(
                NotificationKind::Info,
                "appointments",
                "Appointment Scheduled",
                "New appointment scheduled for tomorrow at 10:00 AM",
            ),
            "15 mins ago",
        ),
    ]
}

pub fn therapies() -> Vec<Therapy> {
    vec![
        Therapy {
            id: "manual-therapy",
            name: "Manual Therapy",
            short_description: "Hands-on treatment techniques",
            detailed_description: "Manual therapy involves skilled hand movements and techniques to diagnose and treat \
                                   soft tissues and joint structures. It includes joint mobilization, soft tissue \
                                   mobilization, and muscle energy techniques.",
            duration: "45-60 minutes",
            benefits: [
                "Improved joint mobility",
                "Pain reduction",
                "Enhanced circulation",
                "Muscle relaxation",
            ],
            category: TherapyCategory::Physical,
        },
        Therapy {
            id: "ultrasound",
            name: "Ultrasound Therapy",
            short_description: "Sound wave healing therapy",
            detailed_description: "Therapeutic ultrasound uses high-frequency sound waves to stimulate tissue healing \
                                   and reduce inflammation. The sound waves create gentle heat in deep tissues, \
                                   promoting blood flow and cellular repair.",
            duration: "10-15 minutes",
            benefits: [
                "Tissue healing",
                "Inflammation reduction",
                "Pain relief",
                "Improved blood flow",
            ],
            category: TherapyCategory::Electrotherapy,
        },
        Therapy {
            id: "heat-therapy",
            name: "Heat Therapy",
            short_description: "Therapeutic heat application",
            detailed_description: "Heat therapy involves applying controlled heat to affected areas to increase blood \
                                   flow, relax muscles, and reduce pain. Methods include hot packs, infrared heat, \
                                   and hydrotherapy.",
            duration: "15-20 minutes",
            benefits: [
                "Muscle relaxation",
                "Increased flexibility",
                "Pain relief",
                "Improved circulation",
            ],
            category: TherapyCategory::Thermal,
        },
        Therapy {
            id: "cold-therapy",
            name: "Cold Therapy",
            short_description: "Cryotherapy treatment",
            detailed_description: "Cold therapy uses controlled cold application to reduce inflammation, numb pain, \
                                   and decrease muscle spasms. Techniques include ice packs, cold baths, and \
                                   cryotherapy chambers.",
            duration: "10-15 minutes",
            benefits: [
                "Inflammation reduction",
                "Pain numbing",
                "Swelling control",
                "Muscle spasm relief",
            ],
            category: TherapyCategory::Thermal,
        },
        Therapy {
            id: "needling",
            name: "Dry Needling",
            short_description: "Trigger point needling",
            detailed_description: "Dry needling involves inserting thin needles into trigger points in muscles to \
                                   release tension and improve function. It targets myofascial trigger points to \
                                   reduce pain and restore movement.",
            duration: "20-30 minutes",
            benefits: [
                "Trigger point release",
                "Muscle function improvement",
                "Pain reduction",
                "Movement restoration",
            ],
            category: TherapyCategory::Manual,
        },
        Therapy {
            id: "electrotherapy",
            name: "Electrotherapy",
            short_description: "Electrical stimulation therapy",
            detailed_description: "Electrotherapy uses electrical currents to stimulate nerves and muscles for pain \
                                   relief and healing. Includes TENS, NMES, and interferential therapy to promote \
                                   recovery and reduce discomfort.",
            duration: "15-25 minutes",
            benefits: [
                "Pain management",
                "Muscle strengthening",
                "Nerve stimulation",
                "Healing acceleration",
            ],
            category: TherapyCategory::Electrotherapy,
        },
    ]
}

/// One month of clinic activity for the reports view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyStat {
    pub month: &'static str,
    pub patients: u32,
    pub appointments: u32,
    pub revenue: u32,
}

pub const MONTHLY_STATS: [MonthlyStat; 6] = [
    MonthlyStat { month: "Jan", patients: 45, appointments: 120, revenue: 15_000 },
    MonthlyStat { month: "Feb", patients: 52, appointments: 145, revenue: 18_500 },
    MonthlyStat { month: "Mar", patients: 38, appointments: 98, revenue: 12_800 },
    MonthlyStat { month: "Apr", patients: 63, appointments: 178, revenue: 22_300 },
    MonthlyStat { month: "May", patients: 71, appointments: 195, revenue: 25_600 },
    MonthlyStat { month: "Jun", patients: 58, appointments: 167, revenue: 21_200 },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreatmentStat {
    pub name: &'static str,
    pub count: u32,
    pub percentage: u32,
}

pub const TREATMENT_STATS: [TreatmentStat; 5] = [
    TreatmentStat { name: "Manual Therapy", count: 85, percentage: 32 },
    TreatmentStat { name: "Ultrasound", count: 67, percentage: 25 },
    TreatmentStat { name: "Heat Therapy", count: 54, percentage: 20 },
    TreatmentStat { name: "Cold Therapy", count: 38, percentage: 14 },
    TreatmentStat { name: "Electrotherapy", count: 24, percentage: 9 },
];

/// Headline figure with its trend, used by the dashboard and reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub trend: &'static str,
}

pub const PERFORMANCE_METRICS: [Metric; 4] = [
    Metric { title: "Patient Satisfaction", value: "96%", subtitle: "", trend: "+2.3%" },
    Metric { title: "Treatment Success Rate", value: "89%", subtitle: "", trend: "+5.1%" },
    Metric { title: "Average Session Duration", value: "45 min", subtitle: "", trend: "-3 min" },
    Metric { title: "No-Show Rate", value: "8%", subtitle: "", trend: "-1.2%" },
];

pub const SUMMARY_METRICS: [Metric; 4] = [
    Metric { title: "Total Users", value: "180", subtitle: "Active system users", trend: "+12%" },
    Metric { title: "Active Sessions", value: "89", subtitle: "Current active users", trend: "+5%" },
    Metric { title: "Monthly Revenue", value: "$23,450", subtitle: "This month's earnings", trend: "+18%" },
    Metric { title: "Quick Insights", value: "96%", subtitle: "Patient satisfaction rate", trend: "+3%" },
];

/// Revenue of the best month, the 100% mark of the revenue bars.
pub fn peak_monthly_revenue() -> u32 {
    MONTHLY_STATS.iter().map(|m| m.revenue).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_per_collection() {
        fn unique(ids: Vec<&str>) -> bool {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.len() == ids.len()
        }
        assert!(unique(patients().iter().map(|p| p.id.as_str()).collect()));
        assert!(unique(physiotherapists().iter().map(|p| p.id.as_str()).collect()));
        assert!(unique(staff().iter().map(|s| s.id.as_str()).collect()));
        assert!(unique(appointments().iter().map(|a| a.id.as_str()).collect()));
    }

    #[test]
    fn test_every_category_has_a_therapy() {
        let therapies = therapies();
        for category in TherapyCategory::ALL {
            assert!(therapies.iter().any(|t| t.category == category), "{category:?}");
        }
    }

    #[test]
    fn test_peak_revenue() {
        assert_eq!(peak_monthly_revenue(), 25_600);
    }
}
