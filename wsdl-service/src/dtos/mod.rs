use crate::utils::RequestDate;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Accepted BIK lengths, counted in characters.
pub const BIK_LENGTHS: [usize; 2] = [10, 12];

/// Request body of `POST /api/wsdl`.
///
/// Decoding is forgiving in the way clients of this endpoint rely on: keys
/// match case-insensitively, unknown keys are skipped, and absent or `null`
/// values (including a `null` body) leave the field at `""` / `false`, which
/// validation then judges.
#[derive(Debug, Clone, Default, Validate)]
pub struct InputData {
    #[validate(custom(function = "validate_bik"))]
    pub bik: String,

    #[validate(custom(function = "validate_from_date"))]
    pub from_date: String,

    #[validate(custom(function = "validate_to_date"))]
    pub to_date: String,

    pub with_deleted: bool,
}

#[derive(Debug, Clone, Copy)]
enum InputKey {
    Bik,
    FromDate,
    ToDate,
    WithDeleted,
}

impl InputKey {
    fn lookup(key: &str) -> Option<Self> {
        [
            ("bik", InputKey::Bik),
            ("fromDate", InputKey::FromDate),
            ("toDate", InputKey::ToDate),
            ("withDeleted", InputKey::WithDeleted),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, field)| field)
    }
}

impl<'de> Deserialize<'de> for InputData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(InputDataVisitor)
    }
}

struct InputDataVisitor;

impl<'de> Visitor<'de> for InputDataVisitor {
    type Value = InputData;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<InputData, E> {
        Ok(InputData::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<InputData, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = InputData::default();

        // Repeated keys overwrite earlier ones.
        while let Some(key) = map.next_key::<String>()? {
            match InputKey::lookup(&key) {
                Some(InputKey::Bik) => {
                    input.bik = map.next_value::<Option<String>>()?.unwrap_or_default()
                }
                Some(InputKey::FromDate) => {
                    input.from_date = map.next_value::<Option<String>>()?.unwrap_or_default()
                }
                Some(InputKey::ToDate) => {
                    input.to_date = map.next_value::<Option<String>>()?.unwrap_or_default()
                }
                Some(InputKey::WithDeleted) => {
                    input.with_deleted = map.next_value::<Option<bool>>()?.unwrap_or_default()
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Bik,
    FromDate,
    ToDate,
}

impl RequestField {
    /// Order in which failures are reported; only the first one surfaces.
    pub const VALIDATION_ORDER: [RequestField; 3] =
        [RequestField::Bik, RequestField::FromDate, RequestField::ToDate];

    pub fn json_name(self) -> &'static str {
        match self {
            RequestField::Bik => "bik",
            RequestField::FromDate => "fromDate",
            RequestField::ToDate => "toDate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid '{}' field", .0.json_name())]
pub struct InvalidField(pub RequestField);

impl InputData {
    /// Runs every field rule and reports the first failing field.
    pub fn check(&self) -> Result<(), InvalidField> {
        self.validate()
            .map_err(|errors| InvalidField(first_invalid_field(&errors)))
    }
}

// Each rule tags its error with the field's JSON name, so the lookup does not
// depend on how the derive keys the error map.
fn first_invalid_field(errors: &ValidationErrors) -> RequestField {
    let field_errors = errors.field_errors();
    RequestField::VALIDATION_ORDER
        .into_iter()
        .find(|field| {
            field_errors
                .values()
                .any(|errs| errs.iter().any(|e| e.code == field.json_name()))
        })
        .unwrap_or(RequestField::Bik)
}

fn validate_bik(bik: &str) -> Result<(), ValidationError> {
    if BIK_LENGTHS.contains(&bik.chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::new(RequestField::Bik.json_name()))
    }
}

fn validate_from_date(value: &str) -> Result<(), ValidationError> {
    validate_date(value, RequestField::FromDate)
}

fn validate_to_date(value: &str) -> Result<(), ValidationError> {
    validate_date(value, RequestField::ToDate)
}

fn validate_date(value: &str, field: RequestField) -> Result<(), ValidationError> {
    value
        .parse::<RequestDate>()
        .map(|_| ())
        .map_err(|e| {
            let mut error = ValidationError::new(field.json_name());
            error.message = Some(e.to_string().into());
            error
        })
}
