//! Configuration tests

use std::fs;

use brandkit_config::{BrandkitConfig, RateSource, resolve_exchange_rate_with};
use brandkit_types::{EurAmount, convert_eur_to_usd};

use crate::common::approx;

#[test]
fn config_file_rate_drives_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[currency]\neur_to_usd = 1.5\n").unwrap();

    let config = BrandkitConfig::load_from(&path).unwrap();
    let resolved = resolve_exchange_rate_with(None, config.as_ref());
    assert_eq!(resolved.source, RateSource::ConfigFile);

    let usd = convert_eur_to_usd(EurAmount::from_unverified(10.0), resolved.rate);
    assert!(approx(*usd, 15.0));
}

#[test]
fn missing_config_uses_default_rate() {
    let dir = tempfile::tempdir().unwrap();
    let config = BrandkitConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(config.is_none());

    let resolved = resolve_exchange_rate_with(None, config.as_ref());
    assert_eq!(resolved.source, RateSource::Default);
    assert!(approx(resolved.rate.value(), 1.18));
}

#[test]
fn unknown_sections_are_ignored() {
    let config = BrandkitConfig::parse("[display]\ntheme = \"dark\"\n").unwrap();
    assert!(config.currency.is_none());
}
