use crate::console::{Console, Stdout};

pub trait Writer {
    fn write(&self, document: &str);
}

pub trait Reader {
    fn read(&self, document: &str);
}

/// Both faces at once. Anything that is a [`Writer`] and a [`Reader`] is one.
pub trait MultiFunctionDevice: Writer + Reader {}

impl<T: Writer + Reader + ?Sized> MultiFunctionDevice for T {}

/// Can only write, so it is never asked to read.
#[derive(Debug, Default, Clone)]
pub struct SimpleWriter<C = Stdout> {
    console: C,
}

impl SimpleWriter {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> SimpleWriter<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Writer for SimpleWriter<C> {
    fn write(&self, document: &str) {
        self.console
            .print_line(&format!("SimpleWriter wrote '{document}'"));
    }
}

#[derive(Debug, Default, Clone)]
pub struct OfficeDevice<C = Stdout> {
    console: C,
}

impl OfficeDevice {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> OfficeDevice<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Writer for OfficeDevice<C> {
    fn write(&self, document: &str) {
        self.console
            .print_line(&format!("OfficeDevice wrote '{document}'"));
    }
}

impl<C: Console> Reader for OfficeDevice<C> {
    fn read(&self, document: &str) {
        self.console
            .print_line(&format!("OfficeDevice read '{document}'"));
    }
}

pub fn print_documents(writer: &dyn Writer, documents: &[&str]) {
    for document in documents {
        writer.write(document);
    }
}

/// Reads the source document and writes a copy. Needs both faces.
pub fn copy_document(device: &dyn MultiFunctionDevice, document: &str) {
    device.read(document);
    device.write(document);
}
