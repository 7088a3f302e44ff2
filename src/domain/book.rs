use std::collections::HashSet;

use uuid::Uuid;

use super::contact::Contact;

/// In-memory contact state: the ordered contact list, the favourites id
/// set, and the active filter query.
///
/// Every mutating operation reports what it did through its return value;
/// nothing here touches storage or emits notifications. The orchestrator
/// in `store` decides both from the outcome.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    favourites: HashSet<Uuid>,
    filter: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Contact),
    DuplicateName,
    DuplicateNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(contacts: Vec<Contact>, favourites: HashSet<Uuid>) -> Self {
        Self {
            contacts,
            favourites,
            filter: String::new(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn favourites(&self) -> &HashSet<Uuid> {
        &self.favourites
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_favourite(&self, id: &Uuid) -> bool {
        self.favourites.contains(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    pub fn contact_name(&self, id: &Uuid) -> Option<&str> {
        self.contacts
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Appends a freshly-id'd contact unless its name or number is already
    /// taken. The name check runs first, so a candidate colliding on both
    /// fields reports only the name collision.
    pub fn add(&mut self, name: &str, number: &str) -> AddOutcome {
        if self.contacts.iter().any(|c| c.name == name) {
            return AddOutcome::DuplicateName;
        }
        if self.contacts.iter().any(|c| c.number == number) {
            return AddOutcome::DuplicateNumber;
        }

        let contact = Contact::new(name.to_string(), number.to_string());
        self.contacts.push(contact.clone());
        AddOutcome::Added(contact)
    }

    /// Removes and returns the contact with `id`, if any. The favourites
    /// set keeps the id; stale entries are expected.
    pub fn remove(&mut self, id: &Uuid) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| &c.id == id)?;
        Some(self.contacts.remove(index))
    }

    /// Flips favourite membership for `id`. The id does not have to belong
    /// to a contact in the list.
    pub fn toggle_favourite(&mut self, id: Uuid) -> Toggle {
        if self.favourites.remove(&id) {
            Toggle::Removed
        } else {
            self.favourites.insert(id);
            Toggle::Added
        }
    }

    pub fn set_filter(&mut self, value: &str) {
        self.filter = value.to_string();
    }

    /// The contacts visible under the current filter, sorted ascending by
    /// case-insensitive name. Recomputed from scratch on every call.
    pub fn visible(&self) -> Vec<&Contact> {
        let mut visible: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| c.matches(&self.filter))
            .collect();

        visible.sort_by_key(|c| c.name_key());
        visible
    }

    /// True when a non-empty filter produced an empty projection.
    pub fn filter_missed(&self) -> bool {
        !self.filter.trim().is_empty() && self.visible().is_empty()
    }
}
