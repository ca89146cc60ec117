use crate::domain::model::{Certificate, Report};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use chrono::NaiveDate;

pub const SERIAL_MIN: u32 = 100_000;
pub const SERIAL_MAX: u32 = 999_999;

/// Summarises a report for the shareable certificate. The serial and date
/// come from the caller so the same report always yields the same
/// certificate for the same arguments.
pub fn issue_certificate(report: &Report, serial: u32, issued_on: NaiveDate) -> Result<Certificate> {
    validate_range("certificate.serial", serial, SERIAL_MIN, SERIAL_MAX)?;

    Ok(Certificate {
        serial: format!("NUM-{}", serial),
        name: report.name.clone(),
        life_path: report.life_path.number,
        soul_urge: report.soul_urge.number,
        expression: report.expression.number,
        karmic_lessons: report.karmic_lessons_text.clone(),
        issued_on,
    })
}

/// Maps any seed (clock nanos, a hash) into the six-digit serial range.
pub fn serial_from_seed(seed: u64) -> u32 {
    let span = u64::from(SERIAL_MAX - SERIAL_MIN + 1);
    SERIAL_MIN + (seed % span) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::generate_report;
    use crate::domain::model::{Language, RawInput};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_issue_certificate() {
        let report = generate_report(&RawInput::new("Abcdefghi", "1990-01-01"), Language::English).unwrap();
        let cert = issue_certificate(&report, 123456, date()).unwrap();
        assert_eq!(cert.serial, "NUM-123456");
        assert_eq!(cert.name, "Abcdefghi");
        assert_eq!(cert.life_path.value(), 3);
        assert_eq!(cert.karmic_lessons, "None");
        assert_eq!(cert.issued_on, date());
    }

    #[test]
    fn test_serial_out_of_range_is_rejected() {
        let report = generate_report(&RawInput::new("Asha", "1990-01-01"), Language::Hindi).unwrap();
        assert!(issue_certificate(&report, 99_999, date()).is_err());
        assert!(issue_certificate(&report, 1_000_000, date()).is_err());
    }

    #[test]
    fn test_serial_from_seed_stays_in_range() {
        for seed in [0, 1, 899_999, 900_000, u64::MAX] {
            let serial = serial_from_seed(seed);
            assert!((SERIAL_MIN..=SERIAL_MAX).contains(&serial), "{}", serial);
        }
        assert_eq!(serial_from_seed(0), SERIAL_MIN);
        assert_eq!(serial_from_seed(899_999), SERIAL_MAX);
    }
}
