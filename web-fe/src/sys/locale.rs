use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use wasm_bindgen::JsValue;

pub trait Locale {
    /// Offset in effect at the given wall-clock time.
    fn offset_at(&self, local: PrimitiveDateTime) -> UtcOffset;

    fn display(&self, at: OffsetDateTime) -> String;
}

/// Follows the browser's time zone and language settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocale;

impl Locale for BrowserLocale {
    fn offset_at(&self, local: PrimitiveDateTime) -> UtcOffset {
        let fields = JsDateFields::from(local);
        // Date(y, m, ...) reads years 0..=99 as 1900 + y, the setters don't
        let date = js_sys::Date::new_0();
        date.set_full_year_with_month_date(fields.year, fields.month, fields.day);
        date.set_hours(fields.hour);
        date.set_minutes(fields.minute);
        date.set_seconds(fields.second);
        date.set_milliseconds(0);
        // getTimezoneOffset is UTC minus local, in minutes
        let minutes = -(date.get_timezone_offset() as i32);
        UtcOffset::from_whole_seconds(minutes * 60).unwrap_or(UtcOffset::UTC)
    }

    fn display(&self, at: OffsetDateTime) -> String {
        let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
        js_sys::Date::new(&JsValue::from_f64(millis))
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into()
    }
}

/// Local wall-clock fields in the shape `Date` setters take.
#[derive(Debug, Clone, Copy, PartialEq)]
struct JsDateFields {
    year: u32,
    // zero-based
    month: i32,
    day: i32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl From<PrimitiveDateTime> for JsDateFields {
    fn from(local: PrimitiveDateTime) -> Self {
        Self {
            year: local.year().max(0) as u32,
            month: local.month() as i32 - 1,
            day: local.day() as i32,
            hour: local.hour() as u32,
            minute: local.minute() as u32,
            second: local.second() as u32,
        }
    }
}


#[cfg(test)]
pub use fixed::FixedLocale;
