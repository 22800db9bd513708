//! Storage devices seen through read-only and write-only views.

use crate::console::{Console, Stdout};

pub trait Readable {
    fn read(&self) -> String;
}

pub trait Writable {
    fn write(&self, data: &str);
}

pub trait Storable: Readable + Writable {}

impl<T: Readable + Writable + ?Sized> Storable for T {}

#[derive(Debug, Default, Clone)]
pub struct Hdd<C = Stdout> {
    console: C,
}

impl Hdd {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> Hdd<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Readable for Hdd<C> {
    fn read(&self) -> String {
        "Reading data from the hard disk drive".to_string()
    }
}

impl<C: Console> Writable for Hdd<C> {
    fn write(&self, data: &str) {
        self.console
            .print_line(&format!("Writing '{data}' to the hard disk drive"));
    }
}

#[derive(Debug, Default, Clone)]
pub struct Ssd<C = Stdout> {
    console: C,
}

impl Ssd {
    pub fn new() -> Self {
        Self { console: Stdout }
    }
}

impl<C: Console> Ssd<C> {
    pub fn with_console(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> Readable for Ssd<C> {
    fn read(&self) -> String {
        "Reading data from the solid-state drive".to_string()
    }
}

impl<C: Console> Writable for Ssd<C> {
    fn write(&self, data: &str) {
        self.console
            .print_line(&format!("Writing '{data}' to the solid-state drive"));
    }
}

pub fn read_all(devices: &[&dyn Readable]) -> Vec<String> {
    devices.iter().map(|device| device.read()).collect()
}

pub fn write_all(devices: &[&dyn Writable], data: &str) {
    for device in devices {
        device.write(data);
    }
}

/// Reads a device and writes what it returned back to it.
pub fn refresh(device: &dyn Storable) -> String {
    let contents = device.read();
    device.write(&contents);
    contents
}
