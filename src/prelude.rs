pub use crate::cli::run_app;
pub use crate::domain::{
    book::{AddOutcome, ContactBook, Toggle},
    contact::Contact,
};
pub use crate::errors::AppError;
pub use crate::notify::{DedupSink, Level, Notifier, StoreEvent};
pub use crate::storage::{parse_storage_type, KeyValueStore, CONTACTS_KEY, FAVOURITES_KEY};
pub use crate::store::ContactStore;
