use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_VALIDATION_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_VALIDATION_FAILED, EXIT_CONFIG_ERROR);
}

#[test]
fn result_alias_carries_crate_error() {
    let result: Result<()> = Err(PromoAdminError::Validation("empty batch".to_string()));
    assert!(result.unwrap_err().is_validation());
}
