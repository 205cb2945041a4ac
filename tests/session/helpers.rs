use boxoffice::configuration::Settings;
use boxoffice::session::Session;
use boxoffice::telemetry;
use once_cell::sync::Lazy;
use std::io::Cursor;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // We cannot assign the output of `get_subscriber` to a variable based on the value TEST_LOG because
    // the sink is part of the type returned by `get_subscriber`, therefore they are not the same type.
    // We could work around it, but this is the most straight-forward way of moving forward.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub(crate) type TestSession = Session<Cursor<String>, Vec<u8>>;

pub(crate) fn test_settings() -> Settings {
    Settings {
        conference_name: "Rust Conference".to_owned(),
        total_capacity: 50,
        confirmation_delay_secs: 30,
    }
}

/// Build a session over in-memory buffers: the given string plays the part of the user typing at
/// the terminal, and everything the session prints is captured for inspection.
pub(crate) fn spawn_session(input: &str) -> TestSession {
    spawn_session_with(test_settings(), input)
}

pub(crate) fn spawn_session_with(settings: Settings, input: &str) -> TestSession {
    // The first time `initialize` is invoked the code in `TRACING` is executed. All other invocations
    // will instead skip execution.
    Lazy::force(&TRACING);

    Session::new(settings, Cursor::new(input.to_owned()), Vec::new())
}

pub(crate) fn output_of(session: TestSession) -> String {
    String::from_utf8(session.into_output()).expect("session output was not valid UTF-8")
}
