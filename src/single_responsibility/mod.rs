//! Each type does one job: log writers only write, the file manager only moves
//! bytes, the validator only validates and the store only saves.

pub mod file_manager;
pub mod log_writer;
pub mod user;

pub use file_manager::{ByteStore, FileManager, FsStore, MemoryStore};
pub use log_writer::{ConsoleWriter, FileWriter, LogWriter, Logger};
pub use user::{ConsoleUserStore, UserRecord, UserRegistration, UserStore, UserValidator};
