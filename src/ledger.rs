use crate::domain::BookingRecord;

/// The in-memory booking ledger: every accepted reservation in insertion order, plus a running
/// count of how many tickets are still available.
///
/// The ledger is an explicit value owned by the session, never a process-wide global. It upholds
/// one conservation invariant: the ticket counts of all records plus the remaining capacity always
/// add up to the capacity the ledger started with.
pub struct BookingLedger {
    records: Vec<BookingRecord>,
    remaining_capacity: u32,
}

impl BookingLedger {
    pub fn new(total_capacity: u32) -> Self {
        Self {
            records: Vec::new(),
            remaining_capacity: total_capacity,
        }
    }

    /// Record an accepted booking.
    ///
    /// The record must already have passed validation: `book` does not re-check the ticket count
    /// against the remaining capacity.
    #[tracing::instrument(
        name = "Recording a booking in the ledger",
        skip(self, record),
        fields(
            first_name = %record.first_name(),
            ticket_count = record.ticket_count()
        )
    )]
    pub fn book(&mut self, record: BookingRecord) {
        debug_assert!(
            record.ticket_count() <= self.remaining_capacity,
            "booking exceeds remaining capacity, validation did not run"
        );
        self.remaining_capacity -= record.ticket_count();
        self.records.push(record);
        tracing::info!(
            remaining_capacity = self.remaining_capacity,
            "Booking recorded"
        );
    }

    /// The first name of every booking, in the order they were accepted. Recomputed on each call.
    pub fn first_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.first_name().to_owned())
            .collect()
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.remaining_capacity
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining_capacity == 0
    }
}
