use serde::Serialize;

use crate::error::RequestError;

/// Symptom text that has passed validation: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symptoms(String);

impl Symptoms {
    pub fn parse(input: &str) -> Result<Self, RequestError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RequestError::EmptySymptoms);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// JSON body posted to the analysis service.
#[derive(Debug, Serialize)]
pub struct SymptomRequest<'a> {
    pub symptoms: &'a str,
}

impl SymptomRequest<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<'a> From<&'a Symptoms> for SymptomRequest<'a> {
    fn from(s: &'a Symptoms) -> Self {
        Self {
            symptoms: s.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn rejects_empty_symptoms(#[case] input: &str) {
        let err = Symptoms::parse(input).unwrap_err();
        assert!(matches!(err, RequestError::EmptySymptoms));
        assert_eq!(
            err.to_string(),
            "Please describe your symptoms before analyzing."
        );
    }

    #[test]
    fn trims_symptoms() {
        let s = Symptoms::parse("  headache and fever \n").unwrap();
        assert_eq!(s.as_str(), "headache and fever");
    }

    #[test]
    fn request_body_shape() {
        let s = Symptoms::parse("sore throat").unwrap();
        let body = SymptomRequest::from(&s).to_json().unwrap();
        assert_eq!(body, r#"{"symptoms":"sore throat"}"#);
    }
}
