//! Contact display formatting

use super::column_width;
use crate::models::Contact;

/// Format contacts as a table of name, phone and email
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let name_width = column_width("Name", contacts.iter().map(|c| c.name.as_str()));
    let phone_width = column_width("Phone", contacts.iter().map(|c| c.phone.as_str()));

    let mut output = format!(
        "{:>4}  {:<name_width$}  {:<phone_width$}  {}\n",
        "ID",
        "Name",
        "Phone",
        "Email",
        name_width = name_width,
        phone_width = phone_width
    );
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<phone_width$}  {:-<5}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        phone_width = phone_width
    ));

    for contact in contacts {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<phone_width$}  {}\n",
            contact.id,
            contact.name,
            contact.phone,
            contact.email,
            name_width = name_width,
            phone_width = phone_width
        ));
    }

    output
}

pub fn format_contact_details(contact: &Contact) -> String {
    format!(
        "Contact #{}: {}\n  Phone: {}\n  Email: {}\n",
        contact.id, contact.name, contact.phone, contact.email
    )
}
