//! User validation and persistence kept as separate responsibilities.

use log::debug;

use crate::console::{Console, Stdout};
use crate::error::{Result, SolidError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserValidator;

impl UserValidator {
    /// Only emptiness is checked. Any non-empty string passes, special
    /// characters included.
    pub fn validate(&self, name: &str, email: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SolidError::EmptyField { field: "name" });
        }
        if email.is_empty() {
            return Err(SolidError::EmptyField { field: "email" });
        }
        Ok(())
    }
}

pub trait UserStore {
    fn save(&self, user: &UserRecord) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct ConsoleUserStore<C = Stdout> {
    console: C,
}

impl ConsoleUserStore {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> ConsoleUserStore<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> UserStore for ConsoleUserStore<C> {
    fn save(&self, user: &UserRecord) -> Result<()> {
        self.console
            .print_line(&format!("User '{}' ({}) saved", user.name, user.email));
        Ok(())
    }
}

/// Validates first and saves only when validation passes.
pub struct UserRegistration<S> {
    validator: UserValidator,
    store: S,
}

impl<S: UserStore> UserRegistration<S> {
    pub fn new(store: S) -> Self {
        Self {
            validator: UserValidator,
            store,
        }
    }

    pub fn register(&self, name: &str, email: &str) -> Result<UserRecord> {
        self.validator.validate(name, email)?;
        let user = UserRecord::new(name, email);
        self.store.save(&user)?;
        debug!("registered user {}", user.name);
        Ok(user)
    }
}
