use std::io::{BufRead, Write};

use anyhow::Context;
use tokio::task::JoinHandle;

use crate::configuration::Settings;
use crate::confirmation::ConfirmationSender;
use crate::domain::{validate, BookingRecord, BookingRequest, ValidationOutcome};
use crate::ledger::BookingLedger;

/// Reading the booking request can fail in exactly two ways: the input stream itself breaks, or
/// the ticket count is not a number. The latter gets its own variant so the session can surface a
/// parse diagnostic to the user instead of crashing.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("failed to read from the input stream")]
    Io(#[from] std::io::Error),
    #[error("'{input}' is not a valid number of tickets")]
    InvalidTicketCount {
        input: String,
        source: std::num::ParseIntError,
    },
}

/// One interactive booking pass: greet, collect a request, validate it, record it, dispatch the
/// confirmation, report, and drain.
///
/// Generic over the input and output streams so tests can drive a session with in-memory buffers
/// while `main` hands it locked stdin/stdout.
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
    ledger: BookingLedger,
    sender: ConfirmationSender,
    // Handles of every confirmation task launched by this session. `drain` awaits all of them
    // before `run` is allowed to return.
    outstanding: Vec<JoinHandle<String>>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        let ledger = BookingLedger::new(settings.total_capacity);
        let sender = ConfirmationSender::new(settings.confirmation_delay());
        Self {
            input,
            output,
            settings,
            ledger,
            sender,
            outstanding: Vec::new(),
        }
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// Give up the session and hand back its output stream. Useful in tests to inspect what was
    /// written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the session end to end. Only returns once every confirmation task launched along the
    /// way has completed, so the process never exits with a delivery still pending.
    ///
    /// A rejected or unparseable request is not an error: the diagnostics go to the output stream
    /// and the session still finishes cleanly. The `Err` path is reserved for broken streams and
    /// panicked tasks.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.greet()?;

        match self.collect() {
            Ok(request) => {
                let outcome = validate(&request, self.ledger.remaining_capacity());
                if outcome.is_acceptable() {
                    self.accept(request)?;
                    self.report()?;
                } else {
                    self.reject(&outcome)?;
                }
            }
            Err(error @ InputError::InvalidTicketCount { .. }) => {
                tracing::warn!("Booking request could not be parsed: {error}");
                writeln!(self.output, "{error}")?;
            }
            Err(InputError::Io(error)) => {
                return Err(error).context("failed to read the booking request");
            }
        }

        self.drain().await
    }

    fn greet(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "Welcome to {} booking application",
            self.settings.conference_name
        )?;
        writeln!(
            self.output,
            "We have a total of {} tickets and only {} are remaining",
            self.settings.total_capacity,
            self.ledger.remaining_capacity()
        )?;
        writeln!(self.output, "Purchase your tickets now to attend")?;
        Ok(())
    }

    /// Read the four booking fields, in fixed order. One token per prompt, no retry on bad input:
    /// this is a single-pass session.
    fn collect(&mut self) -> Result<BookingRequest, InputError> {
        let first_name = self.prompt("Enter your first name: ")?;
        let last_name = self.prompt("Enter your last name: ")?;
        let email = self.prompt("Enter your email: ")?;

        let raw_ticket_count = self.prompt("Enter your number of tickets: ")?;
        let ticket_count =
            raw_ticket_count
                .parse()
                .map_err(|source| InputError::InvalidTicketCount {
                    input: raw_ticket_count,
                    source,
                })?;

        Ok(BookingRequest {
            first_name,
            last_name,
            email,
            ticket_count,
        })
    }

    /// Print a prompt, then read back the first whitespace-delimited token of the next line. An
    /// exhausted stream yields an empty token, which validation will reject downstream.
    fn prompt(&mut self, message: &str) -> Result<String, InputError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_owned())
    }

    #[tracing::instrument(
        name = "Accepting a booking",
        skip(self, request),
        fields(
            first_name = %request.first_name,
            email = %request.email,
            ticket_count = request.ticket_count
        )
    )]
    fn accept(&mut self, request: BookingRequest) -> std::io::Result<()> {
        let record = BookingRecord::accept(request);

        writeln!(
            self.output,
            "Thank you {} {} for booking {} tickets. You will receive a confirmation email at {}",
            record.first_name(),
            record.last_name(),
            record.ticket_count(),
            record.email()
        )?;

        self.ledger.book(record.clone());
        writeln!(
            self.output,
            "{} tickets remaining for {}",
            self.ledger.remaining_capacity(),
            self.settings.conference_name
        )?;
        writeln!(self.output, "List of bookings is {:?}", self.ledger.records())?;

        self.dispatch(record);
        Ok(())
    }

    /// Launch the confirmation task without blocking: the session moves straight on to reporting
    /// while the delivery delay runs in the background.
    fn dispatch(&mut self, record: BookingRecord) {
        let sender = self.sender.clone();
        self.outstanding
            .push(tokio::spawn(async move { sender.send(record).await }));
    }

    fn reject(&mut self, outcome: &ValidationOutcome) -> std::io::Result<()> {
        if !outcome.name_valid {
            writeln!(
                self.output,
                "The first name or last name you entered is too short"
            )?;
        }
        if !outcome.email_valid {
            writeln!(self.output, "The email address you entered is not valid")?;
        }
        if !outcome.ticket_count_valid {
            writeln!(self.output, "The number of tickets you entered is invalid")?;
        }
        Ok(())
    }

    fn report(&mut self) -> std::io::Result<()> {
        writeln!(
            self.output,
            "The bookings available currently are: {:?}",
            self.ledger.first_names()
        )?;
        if self.ledger.is_sold_out() {
            writeln!(
                self.output,
                "Our conference is booked out. Come back next year"
            )?;
        }
        Ok(())
    }

    /// Wait for every outstanding confirmation task and deliver each produced block to the output
    /// stream. By the time the delivery delay elapses this is the only thing the session is doing,
    /// so the block appears the moment the task completes.
    async fn drain(&mut self) -> anyhow::Result<()> {
        for handle in self.outstanding.drain(..) {
            let message = handle
                .await
                .context("a confirmation task failed to complete")?;
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }
}
