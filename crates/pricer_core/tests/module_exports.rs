//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that option types and errors are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::{ConfigError, PricingError};
    use pricer_core::types::option_type::OptionType;

    let call: OptionType = "CALL".parse().unwrap();
    assert_eq!(call, OptionType::Call);

    let err: PricingError = "forward".parse::<OptionType>().unwrap_err();
    assert!(err.to_string().contains("forward"));

    let cfg_err = ConfigError::Parse("bad".to_string());
    assert!(cfg_err.to_string().contains("bad"));
}

/// Test that re-exports at module level match the full paths.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{OptionType, PricingError};

    let result: Result<OptionType, PricingError> = "p".parse();
    assert_eq!(result, Ok(OptionType::Put));
}

/// Test that the rounding helper is accessible via both paths.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::round_to_decimals;
    use pricer_core::math::rounding::round_to_decimals as full_path;

    assert_eq!(round_to_decimals(1.2345_f64, 2), 1.23);
    assert_eq!(full_path(1.2355_f64, 3), round_to_decimals(1.2355_f64, 3));
}

/// Test that configuration is accessible and serialisable.
#[test]
fn test_config_module_exports() {
    use pricer_core::config::{PrecisionConfig, MAX_DECIMALS};

    let config = PrecisionConfig::new(MAX_DECIMALS, 0);
    assert!(config.validate().is_ok());

    let text = toml::to_string(&config).unwrap();
    let decoded = PrecisionConfig::from_toml_str(&text).unwrap();
    assert_eq!(decoded, config);
}
