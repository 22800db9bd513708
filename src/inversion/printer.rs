use crate::console::{Console, Stdout};

pub trait MessagePrinter {
    fn print(&self, message: &str);
}

#[derive(Debug, Default, Clone)]
pub struct ConsolePrinter<C = Stdout> {
    console: C,
}

impl ConsolePrinter {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> ConsolePrinter<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> MessagePrinter for ConsolePrinter<C> {
    fn print(&self, message: &str) {
        self.console.print_line(&format!("Console: {message}"));
    }
}

#[derive(Debug, Default, Clone)]
pub struct FilePrinter<C = Stdout> {
    console: C,
}

impl FilePrinter {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> FilePrinter<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> MessagePrinter for FilePrinter<C> {
    fn print(&self, message: &str) {
        self.console.print_line(&format!("File: {message}"));
    }
}

pub struct Application {
    printer: Box<dyn MessagePrinter>,
}

impl Application {
    pub fn new(printer: Box<dyn MessagePrinter>) -> Self {
        Self { printer }
    }

    pub fn send_message(&self, message: &str) {
        self.printer.print(message);
    }
}
