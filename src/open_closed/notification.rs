//! Broadcasting one message over every registered notifier.
//!
//! A failing notifier does not stop the broadcast. Every notifier is tried in
//! registration order and the failures come back in a [`BroadcastReport`].

use log::{debug, warn};

use crate::console::{Console, Stdout};
use crate::error::{Result, SolidError};

pub trait Notifier {
    fn send_notification(&self, message: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct EmailNotifier<C = Stdout> {
    console: C,
}

impl EmailNotifier {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> EmailNotifier<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Notifier for EmailNotifier<C> {
    fn send_notification(&self, message: &str) -> Result<()> {
        self.console
            .print_line(&format!("Email notification sent: {message}"));
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct SmsNotifier<C = Stdout> {
    console: C,
}

impl SmsNotifier {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> SmsNotifier<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Notifier for SmsNotifier<C> {
    fn send_notification(&self, message: &str) -> Result<()> {
        self.console
            .print_line(&format!("SMS notification sent: {message}"));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failures: Vec<SolidError>,
}

impl BroadcastReport {
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_result(self) -> std::result::Result<usize, Vec<SolidError>> {
        if self.is_complete() {
            Ok(self.delivered)
        } else {
            Err(self.failures)
        }
    }
}

#[derive(Default)]
pub struct NotificationService {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationService {
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    pub fn send_notification(&self, message: &str) -> BroadcastReport {
        debug!("broadcasting to {} notifiers", self.notifiers.len());
        let mut report = BroadcastReport::default();

        for notifier in &self.notifiers {
            match notifier.send_notification(message) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    warn!("notifier failed, continuing broadcast: {err}");
                    report.failures.push(err);
                }
            }
        }

        report
    }
}
