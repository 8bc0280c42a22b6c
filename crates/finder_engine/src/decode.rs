use finder_logging::{finder_error, finder_warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{Failure, FailureKind, FetchError, ListingRecord};

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Parse the text the model produced into listing records.
///
/// Blank text means "no listings". Anything else must be a JSON array of
/// objects; failures are logged and normalized into a [`FetchError`].
pub fn decode_listings(text: &str) -> Result<Vec<ListingRecord>, FetchError> {
    parse_listing_text(text).map_err(|failure| {
        finder_error!("Listing payload rejected ({}): {}", failure.kind, failure.detail);
        FetchError::new(failure.kind)
    })
}

/// Pull the generated text out of a `generateContent` response body.
pub(crate) fn extract_response_text(body: &str) -> Result<String, Failure> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| Failure::new(FailureKind::InvalidPayload, err.to_string()))?;

    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        Failure::new(FailureKind::InvalidPayload, "response contained no candidates")
    })?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = candidate.finish_reason {
            finder_warn!("Model returned no text (finishReason={})", reason);
        }
    }
    Ok(text)
}

pub(crate) fn parse_listing_text(text: &str) -> Result<Vec<ListingRecord>, Failure> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|err| Failure::new(FailureKind::InvalidPayload, err.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Failure::new(
                FailureKind::MalformedResponse,
                format!("expected a JSON array, got {}", json_kind(&other)),
            ));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let fields = match item {
            Value::Object(fields) => fields,
            other => {
                return Err(Failure::new(
                    FailureKind::MalformedResponse,
                    format!("item {index} is {}, expected an object", json_kind(&other)),
                ));
            }
        };
        let record = record_from_fields(&fields);
        if record.apply_link.trim().is_empty() {
            finder_warn!(
                "Dropping listing {} ({:?} at {:?}): no application link",
                index,
                record.job_title,
                record.company_name
            );
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

fn record_from_fields(fields: &Map<String, Value>) -> ListingRecord {
    let website = string_field(fields, "companyWebsite");
    ListingRecord {
        job_title: string_field(fields, "jobTitle"),
        company_name: string_field(fields, "companyName"),
        location: string_field(fields, "location"),
        description: string_field(fields, "description"),
        apply_link: string_field(fields, "applyLink"),
        company_website: if website.trim().is_empty() {
            None
        } else {
            Some(website)
        },
    }
}

/// Strings pass through untouched; scalars keep their JSON text; anything else is empty.
fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => value.to_string(),
        _ => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
