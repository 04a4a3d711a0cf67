//! Contact service

use crate::error::AssistantResult;
use crate::models::Contact;
use crate::storage::Storage;

/// Service for contact lookups
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Contacts whose name contains `query` ignoring case, or whose phone
    /// contains it verbatim
    pub fn search(&self, query: &str) -> AssistantResult<Vec<Contact>> {
        self.storage.contacts.filter(|c| c.matches_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssistantPaths, Settings};
    use crate::models::ContactDraft;
    use tempfile::TempDir;

    #[test]
    fn test_search_by_name_and_phone() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        for (name, phone) in [("Ada Lovelace", "555-0100"), ("Bob", "555-0199"), ("ada", "")] {
            storage
                .contacts
                .create(ContactDraft {
                    name: name.into(),
                    phone: phone.into(),
                    email: String::new(),
                })
                .unwrap();
        }
        let service = ContactService::new(&storage);

        let by_name: Vec<u64> = service.search("ADA").unwrap().iter().map(|c| c.id).collect();
        assert_eq!(by_name, vec![1, 3]);

        let by_phone: Vec<u64> = service.search("0199").unwrap().iter().map(|c| c.id).collect();
        assert_eq!(by_phone, vec![2]);

        assert!(service.search("zed").unwrap().is_empty());
    }
}
