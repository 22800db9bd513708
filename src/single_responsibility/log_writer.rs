use crate::console::{Console, Stdout};

pub trait LogWriter {
    fn write_log(&self, message: &str);
}

#[derive(Debug, Default, Clone)]
pub struct ConsoleWriter<C = Stdout> {
    console: C,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> ConsoleWriter<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> LogWriter for ConsoleWriter<C> {
    fn write_log(&self, message: &str) {
        self.console.print_line(&format!("Console: {message}"));
    }
}

/// Records which log file a message is destined for. No file is touched.
#[derive(Debug, Clone)]
pub struct FileWriter<C = Stdout> {
    file_name: String,
    console: C,
}

impl FileWriter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self::with_console(file_name, Stdout)
    }
}

impl<C: Console> FileWriter<C> {
    pub fn with_console(file_name: impl Into<String>, console: C) -> Self {
        Self {
            file_name: file_name.into(),
            console,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl<C: Console> LogWriter for FileWriter<C> {
    fn write_log(&self, message: &str) {
        self.console
            .print_line(&format!("File '{}': {message}", self.file_name));
    }
}

/// Formats nothing and stores nothing; it only routes a message to whichever
/// writer the caller hands it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    pub fn write_log(&self, writer: &dyn LogWriter, message: &str) {
        writer.write_log(message);
    }
}
