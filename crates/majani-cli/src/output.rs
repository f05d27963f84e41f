// Rust guideline compliant 2026-10-12

//! Output formatting module for the Majani CLI.
//!
//! This module provides functionality for formatting listings
//! in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use chrono::{DateTime, Utc};
use majani_app::{category_tag, AppError, DiscoveryHit, ErrorEnvelope, SuccessEnvelope};
use majani_core::labels::localize_digits;
use majani_core::{relative_time, Category, Label, Listing, Locale, OutputFormat};
use serde_json::{json, Value};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting Majani data in different output formats.
pub trait OutputFormatter {
    /// Formats a single listing, optionally with its distance from the caller.
    fn format_listing(&self, listing: &Listing, distance_km: Option<f64>) -> String;

    /// Formats discovery results.
    fn format_hits(&self, hits: &[DiscoveryHit<'_>]) -> String;

    /// Formats a list of listings without distances.
    fn format_listings(&self, listings: &[&Listing]) -> String;

    /// Formats the category table.
    fn format_categories(&self, categories: &[Category]) -> String;

    /// Formats a short confirmation message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Renders a distance in the locale's digits and unit.
pub fn format_distance(km: f64, locale: Locale) -> String {
    match locale {
        Locale::Fa => format!("{} کیلومتر", localize_digits(&format!("{:.1}", km), locale)),
        Locale::En => format!("{:.1} km", km),
    }
}

/// JSON output formatter.
///
/// Formats listings as valid JSON for machine consumption.
pub struct JsonFormatter {
    now: DateTime<Utc>,
}

impl JsonFormatter {
    /// Creates a JSON formatter; `now` anchors the `age_secs` field.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    fn listing_value(&self, listing: &Listing, distance_km: Option<f64>) -> Value {
        let mut value = serde_json::to_value(listing).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert(
                "age_secs".to_string(),
                json!((self.now - listing.created_at).num_seconds().max(0)),
            );
            if let Some(km) = distance_km {
                map.insert("distance_km".to_string(), json!(km));
            }
        }
        value
    }

    fn list_value(&self, items: Vec<Value>) -> String {
        let total = items.len();
        let output = json!({
            "listings": items,
            "total": total,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize listings" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, listing: &Listing, distance_km: Option<f64>) -> String {
        serde_json::to_string_pretty(&self.listing_value(listing, distance_km))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize listing" }).to_string())
    }

    fn format_hits(&self, hits: &[DiscoveryHit<'_>]) -> String {
        self.list_value(
            hits.iter()
                .map(|hit| self.listing_value(hit.listing, Some(hit.distance_km)))
                .collect(),
        )
    }

    fn format_listings(&self, listings: &[&Listing]) -> String {
        self.list_value(
            listings
                .iter()
                .map(|listing| self.listing_value(listing, None))
                .collect(),
        )
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let items: Vec<Value> = categories
            .iter()
            .map(|category| {
                json!({
                    "tag": category_tag(*category),
                    "fa": category.label(Locale::Fa),
                    "en": category.label(Locale::En),
                })
            })
            .collect();
        serde_json::to_string_pretty(&json!({ "categories": items }))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize categories" }).to_string())
    }

    fn format_message(&self, message: &str) -> String {
        serde_json::to_string(&SuccessEnvelope::new(json!({ "message": message })))
            .unwrap_or_else(|_| json!({ "status": "ok" }).to_string())
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let envelope = if let Some(app) = error.downcast_ref::<AppError>() {
            ErrorEnvelope::from_error(app)
        } else if let Some(core) = error.downcast_ref::<majani_core::Error>() {
            ErrorEnvelope::from_core(core)
        } else {
            ErrorEnvelope::unknown(error.to_string())
        };
        serde_json::to_string(&envelope)
            .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() }).to_string())
    }
}

/// Table output formatter.
///
/// Formats listings as human-readable tables with localized labels.
pub struct TableFormatter {
    use_color: bool,
    locale: Locale,
    now: DateTime<Utc>,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `locale` - Language of labels, digits and relative times
    /// * `now` - Reference time for relative times
    pub fn new(use_color: bool, locale: Locale, now: DateTime<Utc>) -> Self {
        Self {
            use_color,
            locale,
            now,
        }
    }

    fn headers(&self, with_distance: bool) -> Vec<&'static str> {
        let mut headers = match self.locale {
            Locale::Fa => vec!["شناسه", "عنوان", "دسته", "وضعیت"],
            Locale::En => vec!["ID", "Title", "Category", "Status"],
        };
        if with_distance {
            headers.push(match self.locale {
                Locale::Fa => "فاصله",
                Locale::En => "Distance",
            });
        }
        headers.push(match self.locale {
            Locale::Fa => "زمان",
            Locale::En => "Posted",
        });
        headers
    }

    fn row(&self, listing: &Listing, distance_km: Option<f64>) -> Vec<String> {
        let mut row = vec![
            listing.id.clone(),
            listing.title.clone(),
            listing.category.label(self.locale).to_string(),
            listing.status.label(self.locale).to_string(),
        ];
        if let Some(km) = distance_km {
            row.push(format_distance(km, self.locale));
        }
        row.push(relative_time(listing.created_at, self.now, self.locale));
        row
    }

    fn empty(&self) -> String {
        match self.locale {
            Locale::Fa => "آگهی‌ای پیدا نشد.".to_string(),
            Locale::En => "No listings found.".to_string(),
        }
    }

    fn table(&self, headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
        let mut builder = Builder::default();
        builder.push_record(headers);
        for row in rows {
            builder.push_record(row);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_listing(&self, listing: &Listing, distance_km: Option<f64>) -> String {
        let locale = self.locale;
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", listing.id));
        output.push_str(&format!("Title:       {}\n", listing.title));
        output.push_str(&format!("Category:    {}\n", listing.category.label(locale)));
        output.push_str(&format!("Condition:   {}\n", listing.condition.label(locale)));
        output.push_str(&format!("Status:      {}\n", listing.status.label(locale)));
        output.push_str(&format!("City:        {}\n", listing.city));
        if let Some(address) = &listing.location.address {
            output.push_str(&format!("Address:     {}\n", address));
        }
        if let Some(km) = distance_km {
            output.push_str(&format!("Distance:    {}\n", format_distance(km, locale)));
        }
        output.push_str(&format!(
            "Posted:      {}\n",
            relative_time(listing.created_at, self.now, locale)
        ));
        output.push_str(&format!(
            "Views:       {}\n",
            localize_digits(&listing.views.to_string(), locale)
        ));
        output.push_str(&format!(
            "Images:      {}\n",
            localize_digits(&listing.images.len().to_string(), locale)
        ));

        if !listing.description.is_empty() {
            output.push_str(&format!(
                "Description: {}\n",
                wrap_text(&listing.description, 13)
            ));
        }

        output
    }

    fn format_hits(&self, hits: &[DiscoveryHit<'_>]) -> String {
        if hits.is_empty() {
            return self.empty();
        }
        let rows = hits
            .iter()
            .map(|hit| self.row(hit.listing, Some(hit.distance_km)))
            .collect();
        self.table(self.headers(true), rows)
    }

    fn format_listings(&self, listings: &[&Listing]) -> String {
        if listings.is_empty() {
            return self.empty();
        }
        let rows = listings.iter().map(|l| self.row(l, None)).collect();
        self.table(self.headers(false), rows)
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let rows = categories
            .iter()
            .map(|c| vec![category_tag(*c).to_string(), c.label(self.locale).to_string()])
            .collect();
        let headers = match self.locale {
            Locale::Fa => vec!["برچسب", "دسته"],
            Locale::En => vec!["Tag", "Category"],
        };
        self.table(headers, rows)
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats listings as tab-separated lines without colors or tables.
pub struct PlainFormatter {
    locale: Locale,
    now: DateTime<Utc>,
}

impl PlainFormatter {
    /// Creates a plain formatter.
    pub fn new(locale: Locale, now: DateTime<Utc>) -> Self {
        Self { locale, now }
    }

    fn line(&self, listing: &Listing, distance_km: Option<f64>) -> String {
        let mut fields = vec![
            listing.id.clone(),
            listing.title.clone(),
            listing.status.label(self.locale).to_string(),
        ];
        if let Some(km) = distance_km {
            fields.push(format_distance(km, self.locale));
        }
        fields.push(relative_time(listing.created_at, self.now, self.locale));
        fields.join("\t")
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_listing(&self, listing: &Listing, distance_km: Option<f64>) -> String {
        let line = self.line(listing, distance_km);
        if listing.description.is_empty() {
            line
        } else {
            format!("{}\n{}", line, listing.description)
        }
    }

    fn format_hits(&self, hits: &[DiscoveryHit<'_>]) -> String {
        hits.iter()
            .map(|hit| self.line(hit.listing, Some(hit.distance_km)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_listings(&self, listings: &[&Listing]) -> String {
        listings
            .iter()
            .map(|listing| self.line(listing, None))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        categories
            .iter()
            .map(|c| format!("{}\t{}", category_tag(*c), c.label(self.locale)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
/// * `locale` - Display locale
/// * `now` - Reference time for relative times
pub fn create_formatter(
    format: OutputFormat,
    use_color: bool,
    locale: Locale,
    now: DateTime<Utc>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(now)),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color, locale, now)),
        OutputFormat::Plain => Box::new(PlainFormatter::new(locale, now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use majani_core::{Condition, ListingDraft, Location};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn listing() -> Listing {
        let draft = ListingDraft {
            owner_id: "usr-0a1b2c".to_string(),
            title: "Old wooden chair".to_string(),
            description: "Needs sanding".to_string(),
            images: vec![],
            category: Category::Home,
            condition: Condition::Used,
            location: Location::new(35.6892, 51.3890).with_address("Enghelab Sq."),
            city: "Tehran".to_string(),
        };
        Listing::from_draft(draft, now() - Duration::hours(2))
    }

    #[test]
    fn test_format_distance_locales() {
        assert_eq!(format_distance(6.104, Locale::En), "6.1 km");
        assert_eq!(format_distance(6.104, Locale::Fa), "۶.۱ کیلومتر");
    }

    #[test]
    fn test_json_hits_include_distance() {
        let listing = listing();
        let hits = [DiscoveryHit {
            listing: &listing,
            distance_km: 1.5,
        }];
        let output = JsonFormatter::new(now()).format_hits(&hits);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["listings"][0]["distance_km"], 1.5);
        assert_eq!(value["listings"][0]["age_secs"], 7200);
    }

    #[test]
    fn test_json_error_uses_envelope() {
        let error = anyhow::Error::from(AppError::InvalidInput("bad".to_string()));
        let output = JsonFormatter::new(now()).format_error(&error);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "invalid_input");
    }

    #[test]
    fn test_json_error_from_core() {
        let error = anyhow::Error::from(majani_core::Error::NotFound("lst-abc123".to_string()));
        let output = JsonFormatter::new(now()).format_error(&error);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["code"], "not_found");
    }

    #[test]
    fn test_table_detail_in_english() {
        let output = TableFormatter::new(false, Locale::En, now()).format_listing(&listing(), None);
        assert!(output.contains("Old wooden chair"));
        assert!(output.contains("Home & Kitchen"));
        assert!(output.contains("2 hours ago"));
        assert!(output.contains("Enghelab Sq."));
    }

    #[test]
    fn test_table_empty_list() {
        let output = TableFormatter::new(false, Locale::En, now()).format_listings(&[]);
        assert_eq!(output, "No listings found.");
    }

    #[test]
    fn test_plain_line_persian() {
        let listing = listing();
        let output = PlainFormatter::new(Locale::Fa, now()).format_listings(&[&listing]);
        assert!(output.contains("۲ ساعت پیش"));
        assert!(output.contains("موجود"));
    }

    #[test]
    fn test_plain_error() {
        let error = anyhow::anyhow!("boom");
        assert_eq!(PlainFormatter::new(Locale::En, now()).format_error(&error), "Error: boom");
    }
}
