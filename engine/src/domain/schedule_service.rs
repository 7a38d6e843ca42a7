//! Schedule business logic.
//!
//! Validation and creation of date-ranged schedule events. This is the
//! collaborator that rejects inverted ranges (`end_date < start_date`)
//! before they can reach the layout engine, which has no defined behavior
//! for them.

use shared::{parse_iso_date, CreateScheduleRequest, ScheduleEvent, ScheduleValidationError};
use uuid::Uuid;

/// Limits applied to schedule input.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub max_title_length: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_title_length: 120,
        }
    }
}

/// Schedule service handling validation, creation, and list ordering.
#[derive(Debug, Clone, Default)]
pub struct ScheduleService {
    config: ScheduleConfig,
}

impl ScheduleService {
    pub fn new() -> Self {
        Self {
            config: ScheduleConfig::default(),
        }
    }

    pub fn with_config(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Validate a creation request. Empty result means valid.
    pub fn validate_schedule(
        &self,
        request: &CreateScheduleRequest,
    ) -> Vec<ScheduleValidationError> {
        let mut errors = Vec::new();

        let title = request.title.trim();
        if title.is_empty() {
            errors.push(ScheduleValidationError::EmptyTitle);
        } else if title.chars().count() > self.config.max_title_length {
            errors.push(ScheduleValidationError::TitleTooLong(title.chars().count()));
        }

        let start = parse_iso_date(&request.start_date);
        if start.is_none() {
            errors.push(ScheduleValidationError::InvalidDate(
                request.start_date.clone(),
            ));
        }
        let end = parse_iso_date(&request.end_date);
        if end.is_none() {
            errors.push(ScheduleValidationError::InvalidDate(
                request.end_date.clone(),
            ));
        }

        // Only meaningful once both dates parse
        if start.is_some() && end.is_some() && request.end_date < request.start_date {
            errors.push(ScheduleValidationError::EndBeforeStart {
                start: request.start_date.clone(),
                end: request.end_date.clone(),
            });
        }

        errors
    }

    /// Create a schedule from a request, rejecting invalid input.
    pub fn create_schedule(
        &self,
        request: &CreateScheduleRequest,
    ) -> Result<ScheduleEvent, Vec<ScheduleValidationError>> {
        let errors = self.validate_schedule(request);
        if !errors.is_empty() {
            return Err(errors);
        }

        let schedule = ScheduleEvent {
            id: format!("schedule::{}", Uuid::new_v4()),
            title: request.title.trim().to_string(),
            description: request
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            is_all_day: request.is_all_day,
        };
        log::info!(
            "created schedule {} from {} to {}",
            schedule.id,
            schedule.start_date,
            schedule.end_date
        );
        Ok(schedule)
    }

    /// Order schedules for the list view: start date ascending, original
    /// order preserved among equal starts.
    pub fn sort_for_list<'a>(&self, schedules: &'a [ScheduleEvent]) -> Vec<&'a ScheduleEvent> {
        let mut sorted: Vec<&'a ScheduleEvent> = schedules.iter().collect();
        sorted.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, start: &str, end: &str) -> CreateScheduleRequest {
        CreateScheduleRequest {
            title: title.to_string(),
            description: None,
            start_date: start.to_string(),
            end_date: end.to_string(),
            is_all_day: true,
        }
    }

    #[test]
    fn test_create_schedule_valid() {
        let service = ScheduleService::new();

        let created = service
            .create_schedule(&request(" Jeju trip ", "2024-04-08", "2024-04-11"))
            .unwrap();
        assert_eq!(created.title, "Jeju trip");
        assert_eq!(created.start_date, "2024-04-08");
        assert_eq!(created.end_date, "2024-04-11");
        assert!(created.id.starts_with("schedule::"));
        assert!(created.description.is_none());
    }

    #[test]
    fn test_create_single_day_schedule() {
        let service = ScheduleService::new();

        let created = service
            .create_schedule(&request("Dinner", "2024-04-09", "2024-04-09"))
            .unwrap();
        assert!(created.is_single_day());
    }

    #[test]
    fn test_rejects_end_before_start() {
        let service = ScheduleService::new();

        let errors = service.validate_schedule(&request("Trip", "2024-04-11", "2024-04-08"));
        assert_eq!(
            errors,
            vec![ScheduleValidationError::EndBeforeStart {
                start: "2024-04-11".to_string(),
                end: "2024-04-08".to_string(),
            }]
        );
        assert!(service
            .create_schedule(&request("Trip", "2024-04-11", "2024-04-08"))
            .is_err());
    }

    #[test]
    fn test_rejects_malformed_dates() {
        let service = ScheduleService::new();

        let errors = service.validate_schedule(&request("Trip", "2024-4-8", "2024-04-11"));
        assert_eq!(
            errors,
            vec![ScheduleValidationError::InvalidDate("2024-4-8".to_string())]
        );

        // Ordering is not reported when a date does not even parse
        let errors = service.validate_schedule(&request("Trip", "bad", "worse"));
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ScheduleValidationError::InvalidDate(_))));
    }

    #[test]
    fn test_rejects_empty_title() {
        let service = ScheduleService::new();

        let errors = service.validate_schedule(&request("  ", "2024-04-08", "2024-04-11"));
        assert_eq!(errors, vec![ScheduleValidationError::EmptyTitle]);
    }

    #[test]
    fn test_blank_description_dropped() {
        let service = ScheduleService::new();
        let mut req = request("Trip", "2024-04-08", "2024-04-11");
        req.description = Some("   ".to_string());

        let created = service.create_schedule(&req).unwrap();
        assert!(created.description.is_none());
    }

    #[test]
    fn test_sort_for_list_stable() {
        let service = ScheduleService::new();
        let schedules = vec![
            ScheduleEvent {
                id: "b".to_string(),
                title: "B".to_string(),
                description: None,
                start_date: "2024-04-10".to_string(),
                end_date: "2024-04-10".to_string(),
                is_all_day: true,
            },
            ScheduleEvent {
                id: "a".to_string(),
                title: "A".to_string(),
                description: None,
                start_date: "2024-04-02".to_string(),
                end_date: "2024-04-05".to_string(),
                is_all_day: true,
            },
            ScheduleEvent {
                id: "c".to_string(),
                title: "C".to_string(),
                description: None,
                start_date: "2024-04-02".to_string(),
                end_date: "2024-04-02".to_string(),
                is_all_day: false,
            },
        ];

        let sorted = service.sort_for_list(&schedules);
        let ids: Vec<&str> = sorted.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }
}
