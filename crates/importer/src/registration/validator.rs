use super::models::{FORMAT_VERSION, RegistrationFile};
use crate::{ImporterError, Result};
use meet::models::TimeValue;
use std::collections::HashSet;
use tracing::warn;
use validator::Validate;

/// Checks a registration before any of it reaches seeding. This is where a
/// malformed entry time is reported; past this point it would silently sort last.
pub struct RegistrationValidator;

impl RegistrationValidator {
    pub fn validate(registration: &RegistrationFile) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if registration.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                registration.format_version, FORMAT_VERSION
            ));
        }

        if registration.meet.name.trim().is_empty() {
            report.errors.push("Meet name is required".to_string());
        }
        if registration.meet.venue.is_none() {
            report
                .warnings
                .push("Meet venue is not specified".to_string());
        }

        if registration.events.is_empty() {
            report
                .errors
                .push("At least one event is required".to_string());
        }

        let mut event_names = HashSet::new();
        for event in &registration.events {
            if event.trim().is_empty() {
                report.errors.push("Event name cannot be empty".to_string());
            }
            if !event_names.insert(event.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate event name: '{}'", event));
            }
        }

        if registration.swimmers.is_empty() {
            report
                .warnings
                .push("Registration has no swimmers".to_string());
        }

        let mut swimmer_names = HashSet::new();
        for (idx, swimmer) in registration.swimmers.iter().enumerate() {
            let swimmer_label = format!("{}. {}", idx + 1, swimmer.name.trim());

            if let Err(errors) = swimmer.validate() {
                for (field, field_errors) in errors.field_errors() {
                    for error in field_errors.iter() {
                        report.errors.push(format!(
                            "Swimmer '{}': {}: {}",
                            swimmer_label,
                            field,
                            error
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| error.code.to_string())
                        ));
                    }
                }
            }

            if !swimmer.name.trim().is_empty()
                && !swimmer_names.insert(swimmer.name.trim().to_lowercase())
            {
                report
                    .errors
                    .push(format!("Duplicate swimmer name: '{}'", swimmer.name.trim()));
            }

            if swimmer.team.trim().is_empty() {
                report
                    .warnings
                    .push(format!("Swimmer '{}' has no team", swimmer_label));
            }

            for (event, time) in &swimmer.entry_times {
                if !event_names.contains(event.as_str()) {
                    report.errors.push(format!(
                        "Swimmer '{}' has an entry for unknown event: '{}'",
                        swimmer_label, event
                    ));
                }
                if let Err(err) = TimeValue::validate(Some(time.as_str())) {
                    report.errors.push(format!(
                        "Swimmer '{}', event '{}': {}",
                        swimmer_label, event, err
                    ));
                }
            }

            if swimmer.entered_events().next().is_none() {
                report
                    .warnings
                    .push(format!("Swimmer '{}' is not entered in any event", swimmer_label));
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::models::{MeetData, SwimmerData};

    fn swimmer(name: &str, times: &[(&str, &str)]) -> SwimmerData {
        SwimmerData {
            name: name.to_string(),
            team: "Sharks".to_string(),
            age: 12,
            category: "11-12".to_string(),
            gender: "F".to_string(),
            entry_times: times
                .iter()
                .map(|(event, time)| (event.to_string(), time.to_string()))
                .collect(),
        }
    }

    fn registration(swimmers: Vec<SwimmerData>) -> RegistrationFile {
        RegistrationFile {
            format_version: FORMAT_VERSION.to_string(),
            meet: MeetData {
                name: "Spring Invitational".to_string(),
                date: None,
                venue: Some("Aquatic Centre".to_string()),
            },
            events: vec!["50 Free".to_string(), "50 Back".to_string()],
            swimmers,
        }
    }

    fn error_message(registration: &RegistrationFile) -> String {
        RegistrationValidator::validate(registration)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_valid_registration() {
        let reg = registration(vec![
            swimmer("Ana", &[("50 Free", "35.20"), ("50 Back", "")]),
            swimmer("Bea", &[("50 Back", "0:41,10")]),
        ]);

        let report = RegistrationValidator::validate(&reg).unwrap();
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_malformed_entry_time_is_reported() {
        let reg = registration(vec![swimmer("Ana", &[("50 Free", "35.2.0")])]);
        let message = error_message(&reg);
        assert!(message.contains("Malformed time: '35.2.0'"));
    }

    #[test]
    fn test_unknown_event_and_duplicate_swimmer() {
        let reg = registration(vec![
            swimmer("Ana", &[("200 Fly", "2:40.00")]),
            swimmer("ana", &[("50 Free", "35.00")]),
        ]);

        let message = error_message(&reg);
        assert!(message.contains("unknown event: '200 Fly'"));
        assert!(message.contains("Duplicate swimmer name: 'ana'"));
    }

    #[test]
    fn test_field_errors_are_collected() {
        let mut bad = swimmer("Ana", &[("50 Free", "35.00")]);
        bad.gender = "?".to_string();
        bad.age = 0;

        let message = error_message(&registration(vec![bad]));
        assert!(message.contains("invalid_gender"));
        assert!(message.contains("Age must be between 1 and 120"));
    }

    #[test]
    fn test_meet_level_errors() {
        let mut reg = registration(vec![swimmer("Ana", &[("50 Free", "35.00")])]);
        reg.format_version = "0.9".to_string();
        reg.meet.name = " ".to_string();
        reg.events.push("50 Free".to_string());

        let message = error_message(&reg);
        assert!(message.contains("Unsupported format version"));
        assert!(message.contains("Meet name is required"));
        assert!(message.contains("Duplicate event name: '50 Free'"));
    }

    #[test]
    fn test_warnings() {
        let mut reg = registration(vec![swimmer("Ana", &[("50 Free", " ")])]);
        reg.meet.venue = None;
        reg.swimmers[0].team = String::new();

        let report = RegistrationValidator::validate(&reg).unwrap();
        assert_eq!(report.warnings.len(), 3);
    }
}
