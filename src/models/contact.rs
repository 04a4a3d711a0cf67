//! Contact model

use serde::{Deserialize, Serialize};

use super::{apply_field, CreateOutcome, FieldRejection, Record, RecordId};
use crate::audit::EntityType;
use crate::error::AssistantResult;
use crate::interchange::CsvRow;
use crate::validation;

/// An address-book entry; phone and email are free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    /// Case-insensitive substring match on the name, or substring match on the phone
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }
}

impl Record for Contact {
    type Draft = ContactDraft;
    type Patch = ContactPatch;

    const KIND: EntityType = EntityType::Contact;
    const CSV_HEADERS: &'static [&'static str] = &["id", "name", "phone", "email"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn from_draft(id: RecordId, draft: ContactDraft) -> AssistantResult<CreateOutcome<Self>> {
        let name = validation::non_empty_text("name", &draft.name)?;

        Ok(CreateOutcome::clean(Self {
            id,
            name,
            phone: draft.phone,
            email: draft.email,
        }))
    }

    fn apply_patch(&mut self, patch: ContactPatch) -> Vec<FieldRejection> {
        let mut rejected = Vec::new();

        apply_field(&mut rejected, "name", patch.name, &mut self.name, |s| {
            validation::non_empty_text("name", s)
        });
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }

        rejected
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    fn from_csv_row(row: &CsvRow<'_>) -> AssistantResult<Self> {
        Ok(Self {
            id: row.id()?,
            name: row.text("name")?,
            phone: row.text("phone")?,
            email: row.text("email")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Contact {
        Contact {
            id: 1,
            name: "Ada Lovelace".into(),
            phone: "+44 20 7946 0018".into(),
            email: "ada@example.org".into(),
        }
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let contact = ada();
        assert!(contact.matches_query("lovelace"));
        assert!(contact.matches_query("ADA"));
        assert!(!contact.matches_query("babbage"));
    }

    #[test]
    fn test_matches_phone_substring() {
        let contact = ada();
        assert!(contact.matches_query("7946"));
        assert!(contact.matches_query(" 0018 "));
        assert!(!contact.matches_query("5550"));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Contact::from_draft(1, ContactDraft::default()).is_err());

        let mut contact = ada();
        let rejected = contact.apply_patch(ContactPatch {
            name: Some(" ".into()),
            email: Some("countess@example.org".into()),
            ..ContactPatch::default()
        });
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.email, "countess@example.org");
        assert_eq!(rejected.len(), 1);
    }
}
