use crate::error::Result;
use crate::open_closed::notification::Notifier;

pub const GREETING: &str = "Hello, world!";

/// Knows it has to notify someone on every request, not how.
pub struct WebService {
    notifier: Box<dyn Notifier>,
}

impl WebService {
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub fn handle_request(&self) -> Result<()> {
        self.notifier.send_notification(GREETING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use crate::open_closed::notification::{EmailNotifier, SmsNotifier};

    #[test]
    fn test_request_goes_through_injected_notifier() {
        let transcript = Transcript::new();
        let service = WebService::new(Box::new(EmailNotifier::with_console(transcript.clone())));
        service.handle_request().unwrap();
        assert_eq!(
            transcript.lines(),
            vec!["Email notification sent: Hello, world!"]
        );
    }

    #[test]
    fn test_notifier_swapped_without_changing_service() {
        let transcript = Transcript::new();
        let service = WebService::new(Box::new(SmsNotifier::with_console(transcript.clone())));
        service.handle_request().unwrap();
        assert_eq!(transcript.lines(), vec!["SMS notification sent: Hello, world!"]);
    }
}
