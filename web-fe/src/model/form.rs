use time::{
    format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

use crate::{error::SubmitError, model::event::EventDraft, sys::locale::Locale};

/// Raw values of the create-event form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub attendees: String,
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub draft: EventDraft,
    pub csrf_token: String,
}

impl EventForm {
    pub fn into_submission(self, locale: &impl Locale) -> Result<Submission, SubmitError> {
        let start_time = parse_input_time("start_time", &self.start_time, locale)?;
        let end_time = parse_input_time("end_time", &self.end_time, locale)?;

        Ok(Submission {
            draft: EventDraft {
                attendees: parse_attendees(&self.attendees),
                title: self.title,
                description: self.description,
                start_time,
                end_time,
            },
            csrf_token: self.csrf_token,
        })
    }
}

/// Splits on commas and trims; blank entries are dropped rather than sent.
pub fn parse_attendees(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_input_time(
    field: &'static str,
    value: &str,
    locale: &impl Locale,
) -> Result<OffsetDateTime, SubmitError> {
    let value = value.trim();
    if let Ok(at) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(at.to_offset(UtcOffset::UTC));
    }

    // what an `<input type="datetime-local">` produces; seconds only show up when step < 60
    let local = PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]"),
    )
    .map_err(|_| SubmitError::InvalidTime {
        field,
        value: value.to_string(),
    })?;
    Ok(local
        .assume_offset(locale.offset_at(local))
        .to_offset(UtcOffset::UTC))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sys::locale::FixedLocale;
    use time::macros::{datetime, offset};

    fn form() -> EventForm {
        EventForm {
            title: "Design review".to_string(),
            description: "bring drafts".to_string(),
            start_time: "2024-05-01T10:30".to_string(),
            end_time: "2024-05-01T11:45:30".to_string(),
            attendees: "a@x.com, b@y.com".to_string(),
            csrf_token: "token-1".to_string(),
        }
    }

    #[test]
    fn test_parse_attendees() {
        assert_eq!(parse_attendees("a@x.com, b@y.com"), vec!["a@x.com", "b@y.com"]);
        assert_eq!(parse_attendees("  c@z.com  "), vec!["c@z.com"]);
        assert!(parse_attendees("").is_empty());
    }

    #[test]
    fn test_blank_attendee_entries_dropped() {
        // a bare split-and-trim would send ["a@x.com", "", "b@y.com", ""] and [""];
        // the server rejects blank addresses, so they never leave the form
        assert_eq!(parse_attendees("a@x.com,, b@y.com,"), vec!["a@x.com", "b@y.com"]);
        assert!(parse_attendees("   ").is_empty());
        assert!(parse_attendees(" , ,").is_empty());
    }

    #[test]
    fn test_local_input_converted_to_utc() {
        let submission = form()
            .into_submission(&FixedLocale::new(offset!(+2)))
            .unwrap();

        assert_eq!(submission.csrf_token, "token-1");
        assert_eq!(
            submission.draft,
            EventDraft {
                title: "Design review".to_string(),
                description: "bring drafts".to_string(),
                start_time: datetime!(2024-05-01 08:30 UTC),
                end_time: datetime!(2024-05-01 09:45:30 UTC),
                attendees: vec!["a@x.com".to_string(), "b@y.com".to_string()],
            }
        );
        assert_eq!(submission.draft.start_time.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_zoned_input_kept() {
        let submission = EventForm {
            start_time: "2024-05-01T10:30:00-05:00".to_string(),
            ..form()
        }
        .into_submission(&FixedLocale::new(offset!(+9)))
        .unwrap();

        assert_eq!(submission.draft.start_time, datetime!(2024-05-01 15:30 UTC));
    }

    #[test]
    fn test_invalid_time() {
        let err = EventForm {
            end_time: "".to_string(),
            ..form()
        }
        .into_submission(&FixedLocale::new(UtcOffset::UTC))
        .unwrap_err();

        assert!(matches!(
            err,
            SubmitError::InvalidTime { field: "end_time", .. }
        ));
    }
}
