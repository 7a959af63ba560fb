//! Input validator. Checks user-supplied gender and dress code against the
//! configured enumerations before anything downstream runs.

use serde::Serialize;

use super::errors::{DomainError, InputField};

/// Legal values for the form fields. Injected from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumerations {
    pub genders: Vec<String>,
    pub dress_codes: Vec<String>,
    pub skin_tones: Vec<String>,
}

impl Default for Enumerations {
    fn default() -> Self {
        let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        Self {
            genders: owned(&["Female", "Male", "Non-Binary"]),
            dress_codes: owned(&["Formal", "Business", "Casual", "Party", "Traditional"]),
            skin_tones: owned(&["Fair", "Medium", "Olive", "Deep"]),
        }
    }
}

/// Gender and dress code that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub gender: String,
    pub dress_code: String,
}

#[derive(Debug, Clone)]
pub struct InputValidator {
    enumerations: Enumerations,
}

impl InputValidator {
    pub fn new(enumerations: Enumerations) -> Self {
        Self { enumerations }
    }

    pub fn enumerations(&self) -> &Enumerations {
        &self.enumerations
    }

    /// Gender is checked first; the first failing field is reported.
    pub fn validate(&self, gender: &str, dress_code: &str) -> Result<ValidatedInput, DomainError> {
        check(InputField::Gender, gender, &self.enumerations.genders)?;
        check(InputField::DressCode, dress_code, &self.enumerations.dress_codes)?;
        Ok(ValidatedInput {
            gender: gender.to_string(),
            dress_code: dress_code.to_string(),
        })
    }
}

fn check(field: InputField, value: &str, allowed: &[String]) -> Result<(), DomainError> {
    if allowed.iter().any(|legal| legal == value) {
        return Ok(());
    }
    Err(DomainError::InvalidInput {
        field,
        value: value.to_string(),
        allowed: allowed.to_vec(),
    })
}
