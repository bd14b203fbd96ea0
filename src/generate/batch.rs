//! Batch generation: N unique records from one template.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generate::registry::{FieldKind, UniquenessRegistry};
use crate::generate::template::{self, ProjectedFields, Template};
use crate::generate::{fields, names};
use crate::ports::clock::Clock;
use crate::ports::random::RandomSource;

/// Smallest accepted batch size.
pub const MIN_COUNT: usize = 1;
/// Largest accepted batch size.
pub const MAX_COUNT: usize = 5000;

/// Knobs for one generation run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Requested record count; clamped to `[1, 5000]`.
    pub count: usize,
    /// Prefix for generated request ids.
    pub request_id_prefix: String,
    /// Domain appended to generated emails.
    pub email_domain: String,
}

/// The generated field values of one record, for index rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Request id.
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// Given name.
    #[serde(rename = "givenName")]
    pub given_name: String,
    /// Surname.
    #[serde(rename = "surName")]
    pub sur_name: String,
    /// Middle name placeholder.
    #[serde(rename = "middleName")]
    pub middle_name: String,
    /// EDIPI-shaped identifier.
    #[serde(rename = "EDIPI")]
    pub edipi: String,
    /// National provider identifier.
    #[serde(rename = "NPI")]
    pub npi: String,
    /// Secondary id.
    #[serde(rename = "secId")]
    pub sec_id: String,
    /// Primary email.
    pub email: String,
}

impl FieldSummary {
    /// Reads a summary back out of a projected payload.
    ///
    /// Fields missing from the payload come back empty; useful when
    /// records are reloaded from disk for dispatch.
    #[must_use]
    pub fn from_payload(body: &Value) -> Self {
        let read = |path| {
            template::get_path(body, path).and_then(Value::as_str).unwrap_or_default().to_string()
        };
        Self {
            request_id: read(template::REQUEST_ID_PATH),
            given_name: read(template::GIVEN_NAME_PATH),
            sur_name: read(template::SUR_NAME_PATH),
            middle_name: read(template::MIDDLE_NAME_PATH),
            edipi: read(template::EDIPI_PATH),
            npi: read(template::NPI_PATH),
            sec_id: read(template::SEC_ID_PATH),
            email: read(template::PRIMARY_EMAIL_PATH),
        }
    }
}

/// One generated payload: body, derived filename, and field summary.
#[derive(Debug, Clone)]
pub struct Record {
    /// Derived filename, safe for portable filesystems.
    pub filename: String,
    /// The projected JSON document.
    pub body: Value,
    /// The generated field values.
    pub summary: FieldSummary,
}

/// Result of one generation run.
#[derive(Debug)]
pub struct BatchReport {
    /// The generated records, in generation order (1..count).
    pub records: Vec<Record>,
    /// How many uniqueness claims ran out of attempts and accepted a
    /// possibly colliding value.
    pub exhausted_claims: usize,
}

/// Derives a record filename from its identifying fields.
///
/// Colons are invalid in portable filenames and get replaced.
#[must_use]
pub fn record_filename(request_id: &str, sur_name: &str, given_name: &str) -> String {
    format!("{request_id}__{sur_name}_{given_name}.json").replace(':', "-")
}

/// Generates `options.count` records from the template.
///
/// The count is clamped to `[1, 5000]`. Each record draws a unique name
/// triple, request id, EDIPI, NPI, secId, and email (seeded by the record's
/// 1-based index), then projects them into a fresh template clone.
///
/// # Errors
///
/// Returns a descriptive error when the template fails the structural
/// check or a projection path has no parent object. Uniqueness-retry
/// exhaustion is not an error; it is counted in the report.
pub fn generate_batch(
    template: &Template,
    options: &BatchOptions,
    clock: &dyn Clock,
    rng: &dyn RandomSource,
) -> Result<BatchReport, String> {
    template.check_structure()?;

    let count = options.count.clamp(MIN_COUNT, MAX_COUNT);
    let mut registry = UniquenessRegistry::new();
    let mut records = Vec::with_capacity(count);
    let mut exhausted_claims = 0usize;

    for seq in 1..=count {
        let mut given = "";
        let mut sur = "";
        let mut middle = String::new();
        let name = registry.claim(FieldKind::Name, || {
            given = names::pick_given(rng);
            sur = names::pick_surname(rng);
            middle = fields::make_middle_name(rng);
            format!("{given}|{sur}|{middle}")
        });
        exhausted_claims += usize::from(name.exhausted);

        let rid = registry.claim(FieldKind::RequestId, || {
            fields::make_request_id(&options.request_id_prefix, clock.now(), rng)
        });
        exhausted_claims += usize::from(rid.exhausted);

        let edipi = registry.claim(FieldKind::Edipi, || fields::make_edipi(rng));
        exhausted_claims += usize::from(edipi.exhausted);

        let npi = registry.claim(FieldKind::Npi, || fields::make_npi(rng));
        exhausted_claims += usize::from(npi.exhausted);

        let sec_id = registry.claim(FieldKind::SecId, || fields::make_sec_id(rng));
        exhausted_claims += usize::from(sec_id.exhausted);

        let email = registry.claim(FieldKind::Email, || {
            fields::make_email(given, sur, seq, &options.email_domain)
        });
        exhausted_claims += usize::from(email.exhausted);

        let summary = FieldSummary {
            request_id: rid.value.clone(),
            given_name: given.to_string(),
            sur_name: sur.to_string(),
            middle_name: middle.clone(),
            edipi: edipi.value.clone(),
            npi: npi.value.clone(),
            sec_id: sec_id.value.clone(),
            email: email.value.clone(),
        };

        let body = template.project(&ProjectedFields {
            request_id: rid.value,
            request_datetime: template::request_timestamp(clock.now()),
            given_name: given.to_string(),
            sur_name: sur.to_string(),
            middle_name: middle,
            primary_email: email.value,
            edipi: edipi.value,
            sec_id: sec_id.value,
            npi: npi.value,
        })?;

        let filename = record_filename(&summary.request_id, sur, given);
        records.push(Record { filename, body, summary });
    }

    Ok(BatchReport { records, exhausted_claims })
}
