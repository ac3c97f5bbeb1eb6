use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_CHECKS_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_codes_match_documented_values() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_CHECKS_FAILED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
