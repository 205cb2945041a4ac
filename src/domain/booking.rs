/// The four fields read from the prompts, before any validation has run. All of them are exactly
/// as typed by the user.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ticket_count: u32,
}

/// # Type Driven Development
/// Making an incorrect usage pattern unrepresentable, by construction is known as *type driven
/// development*. `BookingRecord` keeps its fields private: the rest of the program can read them
/// through the accessors below but has no way to mutate an accepted booking, which is exactly the
/// immutability guarantee we want for ledger entries.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    first_name: String,
    last_name: String,
    email: String,
    ticket_count: u32,
}

impl BookingRecord {
    /// Turn a request into an accepted record.
    ///
    /// Callers must have run `validate` on the request first: `accept` performs no re-validation
    /// of its own.
    pub fn accept(request: BookingRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            ticket_count: request.ticket_count,
        }
    }

    /// The caller gets a shared reference to the inner string. This gives the caller **read-only**
    /// access, they have no way to compromise our invariants!
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn ticket_count(&self) -> u32 {
        self.ticket_count
    }
}
