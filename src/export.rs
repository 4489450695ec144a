//! Excel export of the clinic registries.

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::error::Result;
use crate::models::{Appointment, Patient, Physiotherapist, Staff};
use crate::registry::Registry;

/// Borrowed view of every registry written to the workbook.
#[derive(Debug, Clone, Copy)]
pub struct ClinicSnapshot<'a> {
    pub patients: &'a Registry<Patient>,
    pub physiotherapists: &'a Registry<Physiotherapist>,
    pub staff: &'a Registry<Staff>,
    pub appointments: &'a Registry<Appointment>,
}

impl ClinicSnapshot<'_> {
    pub fn total_records(&self) -> usize {
        self.patients.len() + self.physiotherapists.len() + self.staff.len() + self.appointments.len()
    }
}

enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

/// Write a header row, column widths and data rows to `worksheet`.
fn write_table(worksheet: &mut Worksheet, columns: &[(&str, f64)], rows: Vec<Vec<Cell>>) -> std::result::Result<(), XlsxError> {
    let header_format = header_format();
    for (col, (header, width)) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, *width)?;
    }

    let row_count = rows.len();
    for (idx, row) in rows.into_iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, cell) in row.into_iter().enumerate() {
            match cell {
                Cell::Text(text) => worksheet.write_string(row_num, col as u16, text)?,
                Cell::Number(n) => worksheet.write_number(row_num, col as u16, n)?,
            };
        }
    }

    if row_count > 0 {
        worksheet.autofilter(0, 0, row_count as u32, (columns.len() - 1) as u16)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Export all registries to one workbook, one worksheet each.
pub fn export_clinic_to_excel(snapshot: ClinicSnapshot<'_>, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet().set_name("Patients")?;
    let rows: Vec<Vec<Cell>> = snapshot
        .patients
        .iter()
        .map(|p| {
            vec![
                p.first_name.as_str().into(),
                p.last_name.as_str().into(),
                Cell::Number(f64::from(p.age)),
                p.gender.map(|g| g.label()).unwrap_or("").into(),
                p.contact_number.as_str().into(),
                p.medical_history.as_str().into(),
            ]
        })
        .collect();
    write_table(
        sheet,
        &[
            ("First Name", 15.0),
            ("Last Name", 15.0),
            ("Age", 6.0),
            ("Gender", 10.0),
            ("Contact", 15.0),
            ("Medical History", 40.0),
        ],
        rows,
    )?;

    let sheet = workbook.add_worksheet().set_name("Physiotherapists")?;
    let rows: Vec<Vec<Cell>> = snapshot
        .physiotherapists
        .iter()
        .map(|p| {
            vec![
                p.name.as_str().into(),
                p.specialization.as_str().into(),
                p.contact.as_str().into(),
                p.availability.as_str().into(),
                p.status.label().into(),
            ]
        })
        .collect();
    write_table(
        sheet,
        &[
            ("Name", 25.0),
            ("Specialization", 28.0),
            ("Contact", 15.0),
            ("Availability", 20.0),
            ("Status", 10.0),
        ],
        rows,
    )?;

    let sheet = workbook.add_worksheet().set_name("Staff")?;
    let rows: Vec<Vec<Cell>> = snapshot
        .staff
        .iter()
        .map(|s| {
            vec![
                s.name.as_str().into(),
                s.role.label().into(),
                s.contact.as_str().into(),
                s.email.as_str().into(),
                s.status.label().into(),
            ]
        })
        .collect();
    write_table(
        sheet,
        &[
            ("Name", 25.0),
            ("Role", 28.0),
            ("Contact", 15.0),
            ("Email", 30.0),
            ("Status", 10.0),
        ],
        rows,
    )?;

    let sheet = workbook.add_worksheet().set_name("Appointments")?;
    let rows: Vec<Vec<Cell>> = snapshot
        .appointments
        .iter()
        .map(|a| {
            vec![
                a.patient_name.as_str().into(),
                a.doctor_name.as_str().into(),
                a.date.to_string().into(),
                a.time_label().into(),
                a.purpose.as_str().into(),
                a.status.label().into(),
                a.reason.as_str().into(),
            ]
        })
        .collect();
    write_table(
        sheet,
        &[
            ("Patient", 20.0),
            ("Doctor", 22.0),
            ("Date", 12.0),
            ("Time", 10.0),
            ("Purpose", 30.0),
            ("Status", 12.0),
            ("Reason", 30.0),
        ],
        rows,
    )?;

    workbook.save(path)?;
    info!(path = %path.display(), records = snapshot.total_records(), "clinic export written");
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_export_filename_shape() {
        let name = generate_export_filename("clinic_export");
        assert!(name.starts_with("clinic_export_"));
        assert!(name.ends_with(".xlsx"));
        // prefix + '_' + YYYYmmdd_HHMMSS + ".xlsx"
        assert_eq!(name.len(), "clinic_export_".len() + 15 + 5);
    }

    #[test]
    fn test_export_writes_workbook() {
        let patients = Registry::with_records(seed::patients());
        let physiotherapists = Registry::with_records(seed::physiotherapists());
        let staff = Registry::with_records(seed::staff());
        let appointments = Registry::with_records(seed::appointments());
        let snapshot = ClinicSnapshot {
            patients: &patients,
            physiotherapists: &physiotherapists,
            staff: &staff,
            appointments: &appointments,
        };
        assert_eq!(snapshot.total_records(), 9);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic.xlsx");
        export_clinic_to_excel(snapshot, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_export_empty_registries() {
        let patients = Registry::new();
        let physiotherapists = Registry::new();
        let staff = Registry::new();
        let appointments = Registry::new();
        let snapshot = ClinicSnapshot {
            patients: &patients,
            physiotherapists: &physiotherapists,
            staff: &staff,
            appointments: &appointments,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        assert!(export_clinic_to_excel(snapshot, &path).is_ok());
        assert!(path.exists());
    }
}
