use std::time::Duration;

use crate::domain::BookingRecord;

/// Simulated ticket delivery.
///
/// There is no real mail server behind this: `send` suspends for a fixed delay, then produces the
/// confirmation block that would have gone out. Delivery cannot fail and cannot be cancelled once
/// dispatched, so the return type is the message itself rather than a `Result`.
#[derive(Clone)]
pub struct ConfirmationSender {
    delay: Duration,
}

impl ConfirmationSender {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[tracing::instrument(
        name = "Sending ticket confirmation",
        skip(self, record),
        fields(
            email = %record.email(),
            ticket_count = record.ticket_count()
        )
    )]
    pub async fn send(&self, record: BookingRecord) -> String {
        tokio::time::sleep(self.delay).await;

        let ticket = format!(
            "{} tickets for {}, {}",
            record.ticket_count(),
            record.first_name(),
            record.last_name()
        );
        tracing::info!("Confirmation delivered");

        format!(
            "################\nSending ticket:\n {}\n to email address {}\n################",
            ticket,
            record.email()
        )
    }
}
