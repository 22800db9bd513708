//! Line-oriented output sink shared by every printing variant.
//!
//! Variants never call `println!` directly. They hold a [`Console`] so the
//! same variant can print to the terminal in a driver and record into a
//! [`Transcript`] under test.

use std::sync::{Arc, Mutex, PoisonError};

pub trait Console: Send + Sync {
    fn print_line(&self, line: &str);
}

/// Prints every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Records lines in memory. Clones share the same buffer, so several variants
/// can write into one transcript and the order of their calls is preserved.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Console for Transcript {
    fn print_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

impl<C: Console + ?Sized> Console for &C {
    fn print_line(&self, line: &str) {
        (**self).print_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.print_line("first");
        transcript.print_line("second");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_transcript_clones_share_buffer() {
        let transcript = Transcript::new();
        let writer = transcript.clone();
        writer.print_line("shared");
        assert_eq!(transcript.lines(), vec!["shared"]);
    }

    #[test]
    fn test_console_through_reference() {
        fn emit(console: impl Console) {
            console.print_line("via reference");
        }

        let transcript = Transcript::new();
        emit(&transcript);
        assert_eq!(transcript.len(), 1);
    }
}
