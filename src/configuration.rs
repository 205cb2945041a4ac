use std::time::Duration;

/// Everything the booking session needs to know before it starts: which conference it is selling
/// tickets for, how many tickets exist in total, and how long the simulated confirmation delivery
/// takes.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub conference_name: String,
    pub total_capacity: u32,
    pub confirmation_delay_secs: u64,
}

impl Settings {
    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_secs(self.confirmation_delay_secs)
    }
}

/// Build the settings from code-level defaults, optionally overridden by a `configuration.*` file
/// next to the binary. The defaults are the interesting part: the program is fully functional
/// without any file on disk.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("conference_name", "Rust Conference")?
        .set_default("total_capacity", 50_i64)?
        .set_default("confirmation_delay_secs", 30_i64)?
        // `required(false)`: a missing file is not an error, we just run on defaults.
        .add_source(config::File::with_name("configuration").required(false))
        .build()?;

    settings.try_deserialize::<Settings>()
}
