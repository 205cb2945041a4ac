use crate::domain::BookingRequest;
use unicode_segmentation::UnicodeSegmentation;

/// The result of checking a booking request: three independent predicates, reported separately so
/// the session can print one diagnostic per failing check. A request is accepted only when all
/// three hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub name_valid: bool,
    pub email_valid: bool,
    pub ticket_count_valid: bool,
}

impl ValidationOutcome {
    pub fn is_acceptable(&self) -> bool {
        self.name_valid && self.email_valid && self.ticket_count_valid
    }
}

/// Check a booking request against the remaining capacity.
///
/// Pure and total: no side effects, no error path, always three booleans.
///
/// - `name_valid`: both names are at least two characters long. A grapheme is defined by the
///   Unicode standard as a "user-perceived" character: `å` is a single grapheme, but it may be
///   composed of two characters (`a` and `̊`). `graphemes` returns an iterator over the graphemes
///   in the input; `true` specifies that we want to use the extended grapheme definition set,
///   the recommended one.
/// - `email_valid`: the address contains an `@`. Deliberately not an RFC-grade check.
/// - `ticket_count_valid`: at least one ticket, and no more than are left.
pub fn validate(request: &BookingRequest, remaining_capacity: u32) -> ValidationOutcome {
    let name_valid = request.first_name.graphemes(true).count() >= 2
        && request.last_name.graphemes(true).count() >= 2;
    let email_valid = request.email.contains('@');
    let ticket_count_valid =
        request.ticket_count > 0 && request.ticket_count <= remaining_capacity;

    ValidationOutcome {
        name_valid,
        email_valid,
        ticket_count_valid,
    }
}
