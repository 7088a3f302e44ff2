use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{AddOutcome, Contact, ContactBook, Toggle};
use crate::errors::AppError;
use crate::notify::{DedupSink, Notifier, StoreEvent};
use crate::storage::{KeyValueStore, CONTACTS_KEY, FAVOURITES_KEY};

/// The contact store: owns the in-memory state, keeps the persistence
/// adapter in sync with it, and emits events through the notification
/// sink.
///
/// Each mutating operation persists the collection it changed before
/// notifying; operations whose outcome reports no change write nothing.
pub struct ContactStore {
    book: ContactBook,
    storage: Box<dyn KeyValueStore>,
    notifier: DedupSink,
}

impl ContactStore {
    /// Builds the store and loads persisted state. Absent or malformed
    /// values leave the corresponding collection at its empty default;
    /// loading never writes anything back.
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, AppError> {
        let contacts: Vec<Contact> = match storage.read(CONTACTS_KEY)? {
            Some(raw) => parse_or_default(CONTACTS_KEY, &raw),
            None => Vec::new(),
        };
        let favourites: HashSet<Uuid> = match storage.read(FAVOURITES_KEY)? {
            Some(raw) => parse_or_default(FAVOURITES_KEY, &raw),
            None => HashSet::new(),
        };
        debug!(
            medium = storage.medium(),
            contacts = contacts.len(),
            favourites = favourites.len(),
            "loaded persisted state"
        );

        Ok(Self {
            book: ContactBook::from_parts(contacts, favourites),
            storage,
            notifier: DedupSink::new(notifier),
        })
    }

    pub fn contacts(&self) -> &[Contact] {
        self.book.contacts()
    }

    pub fn favourites(&self) -> &HashSet<Uuid> {
        self.book.favourites()
    }

    pub fn filter(&self) -> &str {
        self.book.filter()
    }

    pub fn is_favourite(&self, id: &Uuid) -> bool {
        self.book.is_favourite(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.book.find_by_name(name)
    }

    /// Adds a candidate contact. A duplicate name or number leaves state
    /// and storage untouched and emits exactly one warning event; the
    /// name check takes precedence.
    pub fn add_contact(&mut self, name: &str, number: &str) -> Result<AddOutcome, AppError> {
        let outcome = self.book.add(name, number);

        match &outcome {
            AddOutcome::Added(contact) => {
                self.save_contacts()?;
                self.notifier.notify(StoreEvent::ContactAdded {
                    name: contact.name.clone(),
                });
            }
            AddOutcome::DuplicateName => {
                self.notifier.notify(StoreEvent::DuplicateName {
                    name: name.to_string(),
                });
            }
            AddOutcome::DuplicateNumber => {
                self.notifier.notify(StoreEvent::DuplicateNumber {
                    number: number.to_string(),
                });
            }
        }

        Ok(outcome)
    }

    /// Deletes the contact with `id`. A miss is a silent no-op: no event,
    /// no write. The favourites set is deliberately not pruned.
    pub fn delete_contact(&mut self, id: &Uuid) -> Result<Option<Contact>, AppError> {
        let removed = self.book.remove(id);

        if let Some(contact) = &removed {
            self.save_contacts()?;
            self.notifier.notify(StoreEvent::ContactDeleted {
                name: contact.name.clone(),
            });
        }

        Ok(removed)
    }

    /// Flips favourite membership for `id`, which need not belong to an
    /// existing contact.
    pub fn toggle_favourite(&mut self, id: Uuid) -> Result<Toggle, AppError> {
        let toggle = self.book.toggle_favourite(id);
        self.save_favourites()?;

        let name = match self.book.contact_name(&id) {
            Some(name) => name.to_string(),
            None => id.to_string(),
        };
        match toggle {
            Toggle::Added => self.notifier.notify(StoreEvent::FavouriteAdded { name }),
            Toggle::Removed => self.notifier.notify(StoreEvent::FavouriteRemoved { name }),
        }

        Ok(toggle)
    }

    /// Replaces the filter query. State only: nothing is persisted and no
    /// event is emitted.
    pub fn set_filter(&mut self, value: &str) {
        self.book.set_filter(value);
    }

    /// The visible projection under the current filter. When a non-empty
    /// filter matches nothing, emits the keyed no-match event; the sink
    /// collapses repeats while the previous one is still visible.
    pub fn visible_contacts(&mut self) -> Vec<Contact> {
        let visible: Vec<Contact> = self.book.visible().into_iter().cloned().collect();

        if self.book.filter_missed() {
            self.notifier.notify(StoreEvent::NoMatches);
        }

        visible
    }

    fn save_contacts(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string(self.book.contacts())?;
        self.storage.write(CONTACTS_KEY, &payload)
    }

    fn save_favourites(&self) -> Result<(), AppError> {
        let payload = serde_json::to_string(self.book.favourites())?;
        self.storage.write(FAVOURITES_KEY, &payload)
    }
}

fn parse_or_default<T>(key: &str, raw: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, %err, "malformed persisted value, starting empty");
            T::default()
        }
    }
}
