//! Field validation for candidate submissions.
//!
//! Checks run in a fixed order and stop at the first failure; the order decides
//! which message the form shows, so keep it stable.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::candidates::submission::{
    CandidateSubmission, CvInput, EducationInput, WorkExperienceInput,
};

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const ADDRESS_MAX_CHARS: usize = 100;
const FIELD_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 200;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZñÑáéíóúÁÉÍÓÚ ]+$").expect("name pattern is valid")
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[679][0-9]{8}$").expect("phone pattern is valid"));
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid name")]
    Name,
    #[error("Invalid email")]
    Email,
    #[error("Invalid phone")]
    Phone,
    #[error("Invalid address")]
    Address,
    #[error("Invalid date")]
    Date,
    #[error("Invalid institution")]
    Institution,
    #[error("Invalid title")]
    Title,
    #[error("Invalid company")]
    Company,
    #[error("Invalid position")]
    Position,
    #[error("Invalid description")]
    Description,
    #[error("Invalid CV data")]
    Cv,
}

/// Validates a whole submission, returning the first failing field.
pub fn validate_candidate_data(data: &CandidateSubmission) -> Result<(), ValidationError> {
    validate_name(data.first_name.as_deref())?;
    validate_name(data.last_name.as_deref())?;
    validate_email(data.email.as_deref())?;
    validate_phone(data.phone.as_deref())?;
    validate_address(data.address.as_deref())?;

    for education in data.educations.iter().flatten() {
        validate_education(education)?;
    }
    for experience in data.work_experiences.iter().flatten() {
        validate_experience(experience)?;
    }
    if let Some(cv) = data.cv.as_ref().filter(|cv| !cv.is_empty()) {
        validate_cv(cv)?;
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_RE.is_match(value) {
        return Err(ValidationError::Date);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::Date)
}

fn validate_name(name: Option<&str>) -> Result<(), ValidationError> {
    let name = name.ok_or(ValidationError::Name)?;
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) || !NAME_RE.is_match(name) {
        return Err(ValidationError::Name);
    }
    Ok(())
}

fn validate_email(email: Option<&str>) -> Result<(), ValidationError> {
    match email {
        Some(email) if EMAIL_RE.is_match(email) => Ok(()),
        _ => Err(ValidationError::Email),
    }
}

fn validate_phone(phone: Option<&str>) -> Result<(), ValidationError> {
    match present(phone) {
        Some(phone) if !PHONE_RE.is_match(phone) => Err(ValidationError::Phone),
        _ => Ok(()),
    }
}

fn validate_address(address: Option<&str>) -> Result<(), ValidationError> {
    match present(address) {
        Some(address) if address.chars().count() > ADDRESS_MAX_CHARS => {
            Err(ValidationError::Address)
        }
        _ => Ok(()),
    }
}

fn validate_required_date(date: Option<&str>) -> Result<(), ValidationError> {
    parse_date(date.ok_or(ValidationError::Date)?).map(|_| ())
}

fn validate_optional_date(date: Option<&str>) -> Result<(), ValidationError> {
    present(date).map_or(Ok(()), |d| parse_date(d).map(|_| ()))
}

fn validate_bounded(
    value: Option<&str>,
    max_chars: usize,
    err: ValidationError,
) -> Result<(), ValidationError> {
    match present(value) {
        Some(v) if v.chars().count() <= max_chars => Ok(()),
        _ => Err(err),
    }
}

fn validate_education(education: &EducationInput) -> Result<(), ValidationError> {
    validate_bounded(
        education.institution.as_deref(),
        FIELD_MAX_CHARS,
        ValidationError::Institution,
    )?;
    validate_bounded(
        education.title.as_deref(),
        FIELD_MAX_CHARS,
        ValidationError::Title,
    )?;
    validate_required_date(education.start_date.as_deref())?;
    validate_optional_date(education.end_date.as_deref())
}

fn validate_experience(experience: &WorkExperienceInput) -> Result<(), ValidationError> {
    validate_bounded(
        experience.company.as_deref(),
        FIELD_MAX_CHARS,
        ValidationError::Company,
    )?;
    validate_bounded(
        experience.position.as_deref(),
        FIELD_MAX_CHARS,
        ValidationError::Position,
    )?;
    if let Some(description) = present(experience.description.as_deref()) {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::Description);
        }
    }
    validate_required_date(experience.start_date.as_deref())?;
    validate_optional_date(experience.end_date.as_deref())
}

fn validate_cv(cv: &CvInput) -> Result<(), ValidationError> {
    if present(cv.file_path.as_deref()).is_none() || present(cv.file_type.as_deref()).is_none() {
        return Err(ValidationError::Cv);
    }
    Ok(())
}

/// Optional fields sent as `""` count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
