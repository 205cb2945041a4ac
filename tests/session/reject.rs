use crate::helpers::{output_of, spawn_session};
use claims::assert_ok;

#[tokio::test]
async fn a_one_character_first_name_is_rejected_and_the_ledger_stays_untouched() {
    let mut session = spawn_session("A\nSmith\na@b.com\n10\n");

    assert_ok!(session.run().await);

    assert_eq!(session.ledger().remaining_capacity(), 50);
    assert!(session.ledger().first_names().is_empty());

    let output = output_of(session);
    assert!(output.contains("The first name or last name you entered is too short"));
    assert!(!output.contains("Thank you"));
}

#[tokio::test]
async fn an_email_without_an_at_symbol_is_rejected() {
    let mut session = spawn_session("Al\nSmith\nnoatsign\n10\n");

    assert_ok!(session.run().await);

    assert_eq!(session.ledger().remaining_capacity(), 50);

    let output = output_of(session);
    assert!(output.contains("The email address you entered is not valid"));
    assert!(!output.contains("too short"));
}

#[tokio::test]
async fn asking_for_more_tickets_than_remain_is_rejected() {
    let mut session = spawn_session("Al\nSmith\na@b.com\n60\n");

    assert_ok!(session.run().await);

    assert_eq!(session.ledger().remaining_capacity(), 50);

    let output = output_of(session);
    assert!(output.contains("The number of tickets you entered is invalid"));
}

#[tokio::test]
async fn every_failing_check_gets_its_own_diagnostic_line() {
    let mut session = spawn_session("A\nS\nnoatsign\n0\n");

    assert_ok!(session.run().await);

    let output = output_of(session);
    assert!(output.contains("The first name or last name you entered is too short"));
    assert!(output.contains("The email address you entered is not valid"));
    assert!(output.contains("The number of tickets you entered is invalid"));
}

#[tokio::test]
async fn a_non_numeric_ticket_count_is_reported_as_a_parse_diagnostic() {
    let mut session = spawn_session("Al\nSmith\na@b.com\nten\n");

    // The run still finishes cleanly: a parse failure is a diagnostic, not an error.
    assert_ok!(session.run().await);

    assert_eq!(session.ledger().remaining_capacity(), 50);

    let output = output_of(session);
    assert!(output.contains("'ten' is not a valid number of tickets"));
    assert!(!output.contains("Thank you"));
}

#[tokio::test]
async fn an_exhausted_input_stream_still_terminates_cleanly() {
    let mut session = spawn_session("");

    assert_ok!(session.run().await);

    assert_eq!(session.ledger().remaining_capacity(), 50);

    // Empty tokens make it as far as the ticket-count parse, which rejects them.
    let output = output_of(session);
    assert!(output.contains("'' is not a valid number of tickets"));
}
