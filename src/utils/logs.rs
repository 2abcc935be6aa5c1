use tracing::Level;
use crate::core::domain::Configuration;

// setup_tracing installs the process-wide subscriber. Later calls keep the first subscriber.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let res = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = res {
        tracing::debug!("tracing already initialized {}", err);
    }
}
