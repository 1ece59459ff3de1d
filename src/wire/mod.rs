use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::GenerateError;

/// ========================================
/// Inbound generation request / response
/// ========================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
}

impl GenerateRequest {
    /// Decodes a request body. Malformed JSON and a missing or blank prompt
    /// are both rejected as invalid requests.
    pub fn parse(body: &[u8]) -> Result<Self, GenerateError> {
        let req: GenerateRequest =
            serde_json::from_slice(body).map_err(|e| GenerateError::InvalidRequest(e.to_string()))?;
        if req.prompt.trim().is_empty() {
            return Err(GenerateError::InvalidRequest("prompt is required".into()));
        }
        Ok(req)
    }

    /// Business name with blank values treated as absent.
    pub fn business_name(&self) -> Option<&str> {
        self.business_name.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// What the enrichment step should describe: the business type when given,
    /// otherwise the caller's prompt.
    pub fn subject(&self) -> &str {
        self.business_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.prompt.trim())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl GenerateResponse {
    pub fn failure(error: impl Into<String>, debug: Option<String>) -> Self {
        Self {
            success: false,
            html: None,
            description: None,
            tech_stack: None,
            error: Some(error.into()),
            debug,
        }
    }
}

/// Description and tech stack produced by the enrichment call. Each field is
/// decoded on its own: a null or mistyped value empties that field only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrichment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub tech_stack: Vec<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// ========================================
/// Auxiliary endpoints
/// ========================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Live,
    Cached,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobIdeasResponse {
    pub success: bool,
    pub jobs: Vec<String>,
    pub source: JobSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub port: u16,
    pub api_key: String,
    pub mode: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_camel_case_request() {
        let body = br#"{"prompt":"CRM for vets","temperature":0.9,"businessName":"Pawdesk","businessType":"clinic CRM"}"#;
        let req = GenerateRequest::parse(body).expect("valid request");
        assert_eq!(req.prompt, "CRM for vets");
        assert_eq!(req.temperature, Some(0.9));
        assert_eq!(req.business_name(), Some("Pawdesk"));
        assert_eq!(req.subject(), "clinic CRM");
    }

    #[test]
    fn rejects_malformed_and_blank() {
        assert!(matches!(GenerateRequest::parse(b"{not json"), Err(GenerateError::InvalidRequest(_))));
        assert!(matches!(GenerateRequest::parse(b"{}"), Err(GenerateError::InvalidRequest(_))));
        assert!(matches!(
            GenerateRequest::parse(br#"{"prompt":"   "}"#),
            Err(GenerateError::InvalidRequest(_))
        ));
        assert!(matches!(GenerateRequest::parse(b"[]"), Err(GenerateError::InvalidRequest(_))));
    }

    #[test]
    fn subject_falls_back_to_prompt() {
        let req = GenerateRequest::parse(br#"{"prompt":" tide tables ","businessType":""}"#).expect("valid");
        assert_eq!(req.subject(), "tide tables");
        assert_eq!(req.business_name(), None);
    }

    #[test]
    fn response_omits_absent_fields() {
        let ok = GenerateResponse {
            success: true,
            html: Some("<p>x</p>".into()),
            description: Some(String::new()),
            tech_stack: Some(vec![]),
            error: None,
            debug: None,
        };
        assert_eq!(
            serde_json::to_value(&ok).expect("serializes"),
            json!({"success": true, "html": "<p>x</p>", "description": "", "techStack": []})
        );
        let failed = GenerateResponse::failure("Invalid request", None);
        assert_eq!(
            serde_json::to_value(&failed).expect("serializes"),
            json!({"success": false, "error": "Invalid request"})
        );
    }

    #[test]
    fn enrichment_tolerates_missing_fields() {
        let e: Enrichment = serde_json::from_str(r#"{"description":"Helps bakers."}"#).expect("parses");
        assert_eq!(e, Enrichment { description: "Helps bakers.".into(), tech_stack: vec![] });
    }

    #[test]
    fn enrichment_keeps_good_field_next_to_null() {
        let e: Enrichment =
            serde_json::from_str(r#"{"description": null, "techStack": ["Rust", "Postgres"]}"#).expect("parses");
        assert_eq!(e, Enrichment { description: String::new(), tech_stack: vec!["Rust".into(), "Postgres".into()] });

        let e: Enrichment =
            serde_json::from_str(r#"{"description": "Tracks tides.", "techStack": null}"#).expect("parses");
        assert_eq!(e, Enrichment { description: "Tracks tides.".into(), tech_stack: vec![] });

        let e: Enrichment = serde_json::from_str(r#"{"description": 7, "techStack": ["Go", 3, "Redis"]}"#).expect("parses");
        assert_eq!(e, Enrichment { description: String::new(), tech_stack: vec!["Go".into(), "Redis".into()] });
    }
}
