use biscuit::{Biscuit, CookieError, Directive};

const RESERVED: [&str; 12] = [
    "domain", "path", "expires", "max-age", "secure", "httponly", "Domain", "PATH", "Expires",
    "MAX-AGE", "Secure", "HttpOnly",
];

#[test]
fn test_reserved_keys_rejected_without_mutation() {
    let mut b = Biscuit::create("keep", "me").path("/").build().unwrap();
    let before = b.clone();

    for name in RESERVED {
        assert_eq!(
            b.set_key(name, "anything", true),
            Err(CookieError::reserved_field(name))
        );
        assert_eq!(
            b.set_key(name, "anything", false),
            Err(CookieError::reserved_field(name))
        );
        assert!(b.insert(name, "anything").is_err());
    }
    assert_eq!(b, before);
}

#[test]
fn test_every_directive_is_reserved() {
    let mut b = Biscuit::new();
    for d in Directive::ALL {
        assert!(b.set_key(d.wire_name(), "v", true).is_err());
    }
    assert!(b.is_empty());
}

#[test]
fn test_overwrite_policy() {
    let mut b = Biscuit::new();
    b.set_key("k", "v1", true).unwrap();
    assert!(!b.set_key("k", "v2", false).unwrap());
    assert_eq!(b.get_key("k"), "v1");
    assert!(b.set_key("k", "v2", true).unwrap());
    assert_eq!(b.get_key("k"), "v2");
}

#[test]
fn test_clear_keys() {
    let mut b = biscuit::parse("a=1; b=2; c=3; path=/");
    let mut removed = b.clear_keys();
    removed.sort();
    assert_eq!(removed, vec!["a", "b", "c"]);
    for key in ["a", "b", "c"] {
        assert!(!b.has_key(key));
    }
    // Directives survive.
    assert_eq!(b.path(), "/");
}

#[test]
fn test_iteration_reflects_current_state() {
    let mut b = biscuit::parse("a=1; b=2");
    assert_eq!(b.iter().count(), 2);
    b.insert("c", "3").unwrap();
    let keys: Vec<_> = b.keys().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    let total: usize = b.values().map(str::len).sum();
    assert_eq!(total, 3);
    for (key, value) in &b {
        assert_eq!(b.get_key(key), value);
    }
}

#[test]
fn test_index_sugar() {
    let mut b = Biscuit::new();
    b.insert("lang", "en").unwrap();
    b.insert("lang", "fr").unwrap();
    assert_eq!(&b["lang"], "fr");
    assert_eq!(&b["missing"], "");
}

#[test]
fn test_directive_accessors() {
    let mut b = Biscuit::new();
    assert_eq!(b.domain_or("default.com"), "default.com");
    assert_eq!(b.set_domain("example.com"), "");
    assert!(b.has_domain());
    assert_eq!(b.set_expires("Wed, 30 Dec 2015 12:00:00 UTC"), "");
    assert_eq!(b.set_expires(""), "Wed, 30 Dec 2015 12:00:00 UTC");
    assert!(!b.has_expires());
    assert_eq!(b.expires_or("never"), "never");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let b = biscuit::parse("a=1; path=/; secure");
    let json = serde_json::to_string(&b).unwrap();
    let back: Biscuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_reserved_data_key() {
    let json = r#"{"data": {"Path": "/"}}"#;
    let err = serde_json::from_str::<Biscuit>(json).unwrap_err();
    assert!(err.to_string().contains("reserved"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_normalises_empty_directives() {
    let json = r#"{"data": {"a": "1"}, "domain": "", "secure": true}"#;
    let b: Biscuit = serde_json::from_str(json).unwrap();
    assert!(!b.has_domain());
    assert!(b.is_secure());
    assert_eq!(b, biscuit::parse("a=1; secure"));
}
