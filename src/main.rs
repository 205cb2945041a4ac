use boxoffice::session::Session;
use boxoffice::{configuration, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Spans go to stderr so the interactive prompts on stdout stay readable.
    let subscriber = telemetry::get_subscriber("boxoffice".into(), "info".into(), std::io::stderr);
    telemetry::init_subscriber(subscriber);

    // Panic if we can't read configuration
    let settings = configuration::get_configuration().expect("Failed to read configuration");

    let mut session = Session::new(settings, std::io::stdin().lock(), std::io::stdout());
    session.run().await
}
