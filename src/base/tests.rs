use crate::base::cookieerror::CookieError;

#[test]
fn test_reserved_field_message_names_the_key() {
    let err = CookieError::reserved_field("Max-Age");
    assert!(matches!(err, CookieError::ReservedField { ref name } if name == "Max-Age"));
    assert!(err.to_string().contains("Max-Age"));
}

#[test]
fn test_format_error_grouping() {
    assert!(CookieError::invalid_expires("yesterday").is_format_error());
    assert!(CookieError::invalid_max_age("soon").is_format_error());
    assert!(!CookieError::reserved_field("path").is_format_error());
    assert!(!CookieError::malformed_token("garbage").is_format_error());
    assert!(!CookieError::InvalidHeaderValue.is_format_error());
}

#[test]
fn test_from_invalid_header_value() {
    let http_err = http::HeaderValue::from_str("bad\nvalue").unwrap_err();
    let err: CookieError = http_err.into();
    assert_eq!(err, CookieError::InvalidHeaderValue);
}
