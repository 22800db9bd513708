//! High-level types own a trait object and never name the implementation
//! behind it.

pub mod printer;
pub mod user_controller;
pub mod web_service;

pub use printer::{Application, ConsolePrinter, FilePrinter, MessagePrinter};
pub use user_controller::{UserController, UserDirectory, UserService};
pub use web_service::{WebService, GREETING};
