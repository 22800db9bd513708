//! # SOLID Principles in Rust
//!
//! Small, self-contained illustrations of the five SOLID principles, each
//! built from one or two capability traits, a couple of implementations and a
//! consumer that only ever sees the trait.
//!
//! ## Single responsibility (`single_responsibility`)
//! - Log writers that only write
//! - A file manager over an injected byte store
//! - User validation separated from persistence
//!
//! ## Open/closed (`open_closed`)
//! - Total area over any mix of shapes
//! - Payment processing over pluggable methods
//! - Notification broadcast over registered notifiers
//!
//! ## Liskov substitution (`substitution`)
//! - Printing the area of any shape
//! - A zoo of animals that all speak
//! - Freight cost over trucks and ships
//!
//! ## Interface segregation (`segregation`)
//! - Separate reader and writer traits, composed only where needed
//! - Runners and walkers
//! - Read-only and write-only views of storage devices
//!
//! ## Dependency inversion (`inversion`)
//! - A web service that depends on a notifier trait
//! - A controller that depends on a user service trait
//! - An application that depends on a message printer trait
//!
//! Run the drivers with: `cargo run --bin <srp|ocp|lsp|isp|dip|solid_tour>`

pub mod config;
pub mod console;
pub mod demos;
pub mod error;
pub mod inversion;
pub mod logging;
pub mod open_closed;
pub mod segregation;
pub mod single_responsibility;
pub mod substitution;

pub use config::DemoConfig;
pub use console::{Console, Stdout, Transcript};
pub use demos::{run_driver, Principle};
pub use error::{Result, SolidError};
