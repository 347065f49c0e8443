use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use aura_lounge::utils::config::Config;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file(
        "AURA_AI_DELAY_MS=10\nAURA_AR_DELAY_MS=20\nAURA_NFC_DELAY_MS=30\nAURA_PAYMENT_DELAY_MS=0\nLOG_LEVEL=debug\nAPP_ENV=production\n",
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.ai_delay, Duration::from_millis(10));
    assert_eq!(config.ar_delay, Duration::from_millis(20));
    assert_eq!(config.nfc_delay, Duration::from_millis(30));
    assert_eq!(config.payment_delay, Duration::ZERO);
    assert_eq!(config.log_level, "debug");
    assert!(config.is_production());
}

#[test]
fn test_missing_keys_keep_defaults() {
    let file = config_file("# only the AI delay\nAURA_AI_DELAY_MS=150\n");

    let config = Config::from_file(file.path()).unwrap();
    let defaults = Config::default();
    assert_eq!(config.ai_delay, Duration::from_millis(150));
    assert_eq!(config.ar_delay, defaults.ar_delay);
    assert_eq!(config.log_level, defaults.log_level);
    assert!(!config.is_production());
}

#[test]
fn test_rejects_bad_delays() {
    let not_a_number = config_file("AURA_NFC_DELAY_MS=soon\n");
    assert!(Config::from_file(not_a_number.path()).is_err());

    let too_slow = config_file("AURA_PAYMENT_DELAY_MS=60000\n");
    let err = Config::from_file(too_slow.path()).unwrap_err();
    assert!(err.to_string().contains("AURA_PAYMENT_DELAY_MS"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("absent.env")).is_err());
}
