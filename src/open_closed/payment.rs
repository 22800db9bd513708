use crate::console::{Console, Stdout};
use crate::error::Result;

pub trait PaymentMethod {
    fn process_payment(&self, amount: f64) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct Sberbank<C = Stdout> {
    console: C,
}

impl Sberbank {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> Sberbank<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> PaymentMethod for Sberbank<C> {
    fn process_payment(&self, amount: f64) -> Result<()> {
        self.console
            .print_line(&format!("Payment of {amount:.2} RUB processed via Sberbank"));
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PayPal<C = Stdout> {
    console: C,
}

impl PayPal {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> PayPal<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> PaymentMethod for PayPal<C> {
    fn process_payment(&self, amount: f64) -> Result<()> {
        self.console
            .print_line(&format!("Payment of {amount:.2} RUB processed via PayPal"));
        Ok(())
    }
}

/// New payment methods plug in without touching this type.
pub struct PaymentProcessor {
    method: Box<dyn PaymentMethod>,
}

impl PaymentProcessor {
    pub fn new(method: Box<dyn PaymentMethod>) -> Self {
        Self { method }
    }

    pub fn process_payment(&self, amount: f64) -> Result<()> {
        self.method.process_payment(amount)
    }
}
