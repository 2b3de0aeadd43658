use rupture_domain::config::LoggingConfig;
use rupture_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;

#[test]
#[serial]
fn second_install_returns_subscriber_error() {
    // Another test in this binary may already have installed the subscriber.
    let _first = Logger::builder().level(LevelFilter::INFO).init();

    let err = Logger::builder()
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");
    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error for second init, got {err}"
    );
}

#[test]
#[serial]
fn console_only_install_has_no_guard() {
    if let Ok(logger) = Logger::from_config(&LoggingConfig::default()) {
        assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
    }
}

#[test]
fn unknown_level_is_rejected_without_installing() {
    let config = LoggingConfig { level: "verbose".to_owned(), ..LoggingConfig::default() };
    let err = Logger::from_config(&config).expect_err("unknown level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
