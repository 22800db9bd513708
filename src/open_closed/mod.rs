//! New shapes, payment methods and notifiers extend these consumers without
//! modifying them.

pub mod notification;
pub mod payment;
pub mod shapes;

pub use notification::{BroadcastReport, EmailNotifier, NotificationService, Notifier, SmsNotifier};
pub use payment::{PayPal, PaymentMethod, PaymentProcessor, Sberbank};
pub use shapes::{total_area, Circle, Rectangle, Shape};
