use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const LEAD_FIELDS: [&str; 4] = ["full_name", "email", "phone", "interest"];

/// Named form fields, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadForm {
    fields: BTreeMap<String, String>,
}

impl LeadForm {
    /// The empty lead form with the four standard fields.
    pub fn lead() -> Self {
        let fields = LEAD_FIELDS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        Self { fields }
    }

    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|value| value.is_empty())
    }

    /// Clears every value, keeping the field names.
    pub fn reset(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    #[serde(default)]
    pub registered_at: Option<String>,
}

impl LeadSummary {
    pub fn registered_label(&self) -> String {
        match self.registered_at.as_deref() {
            Some(raw) => format_timestamp(raw),
            None => String::new(),
        }
    }
}

/// Reply of the leads listing. `success: false` carries the backend's reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadListing {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub leads: Vec<LeadSummary>,
    #[serde(default)]
    pub message: String,
}

fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw) {
        Ok(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_field_names() {
        let mut form = LeadForm::lead();
        form.set("full_name", "Ada Lovelace");
        form.set("referrer", "newsletter");
        form.reset();

        assert!(form.is_blank());
        assert_eq!(form.fields().len(), 5);
        assert!(form.fields().contains_key("referrer"));
    }

    #[test]
    fn form_serializes_flat() {
        let mut form = LeadForm::lead();
        form.set("email", "ada@example.com");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["full_name"], "");
    }

    #[test]
    fn reply_without_message_defaults_empty() {
        let reply: ApiReply = serde_json::from_str(r#"{"success":true,"lead_id":7}"#).unwrap();
        assert!(reply.success);
        assert!(reply.message.is_empty());
    }

    #[test]
    fn registered_label_formats_http_dates() {
        let mut lead = LeadSummary {
            id: 1,
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
            interest: "Consulting".into(),
            registered_at: Some("Sun, 18 Oct 2026 10:04:00 GMT".into()),
        };
        assert_eq!(lead.registered_label(), "2026-10-18 10:04");

        lead.registered_at = Some("yesterday".into());
        assert_eq!(lead.registered_label(), "yesterday");
    }
}
