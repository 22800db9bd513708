//! Small capability traits, composed only where a consumer needs more than one.

pub mod documents;
pub mod sport;
pub mod storage;

pub use documents::{copy_document, print_documents, MultiFunctionDevice, OfficeDevice, Reader, SimpleWriter, Writer};
pub use sport::{sprint, training_session, AllRounder, MultiSportsman, Runner, SimpleRunner, Walker};
pub use storage::{read_all, refresh, write_all, Hdd, Readable, Ssd, Storable, Writable};
