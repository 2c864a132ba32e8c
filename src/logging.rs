use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Initialise console logging at the given level.
///
/// For embedding applications without a logging setup of their own; one that
/// configures `log4rs` (or any `log` backend) itself should skip this. Fails
/// if a global logger is already installed.
pub fn init_console(level: LevelFilter) -> Result<(), SetLoggerError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .expect("console logging config is valid");
    log4rs::init_config(config).map(|_| ())
}
