use fibre_autowire::{resolve, Container};
use std::sync::Arc;

// --- Abstraction and Implementations ---
trait MessageSender: Send + Sync {
  fn send(&self, to: &str, message: &str) -> String;
}

struct EmailSender;
impl MessageSender for EmailSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending email to {}: '{}'", to, message)
  }
}

struct SmsSender;
impl MessageSender for SmsSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending SMS to {}: '{}'", to, message)
  }
}

type Sender = Arc<dyn MessageSender>;

fn main() -> fibre_autowire::Result<()> {
  let container = Container::new();

  // --- Registration ---
  // Both implementations live under their own identifiers.
  container.bind("email", |_| Ok(Arc::new(EmailSender) as Sender))?;
  container.bind("sms", |_| Ok(Arc::new(SmsSender) as Sender))?;

  // --- Resolution ---
  let email_notifier = resolve!(container, Sender, "email");
  let sms_notifier = resolve!(container, Sender, "sms");

  let result1 = email_notifier.send("test@example.com", "Hello from Fibre!");
  let result2 = sms_notifier.send("+123456789", "Hello from Fibre!");

  println!("{}", result1);
  println!("{}", result2);

  assert!(result1.contains("email"));
  assert!(result2.contains("SMS"));
  Ok(())
}
