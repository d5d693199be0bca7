// ═══════════════════════════════════════════════════════════════════
// Error Tests: CoreError display and conversions
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;

#[test]
fn serialization_display() {
    let e = CoreError::Serialization("bad value".into());
    assert_eq!(e.to_string(), "Serialization error: bad value");
}

#[test]
fn deserialization_display() {
    let e = CoreError::Deserialization("unexpected token".into());
    assert_eq!(e.to_string(), "Deserialization error: unexpected token");
}

#[test]
fn storage_io_display() {
    let e = CoreError::StorageIo("disk full".into());
    assert_eq!(e.to_string(), "Storage I/O error: disk full");
}

#[test]
fn invalid_key_display_names_the_key() {
    let e = CoreError::InvalidKey("../escape".into());
    assert!(e.to_string().contains("../escape"));
}

#[test]
fn io_error_converts_to_storage_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let e: CoreError = io.into();
    assert!(matches!(e, CoreError::StorageIo(_)));
    assert!(e.to_string().contains("denied"));
}

#[test]
fn serde_json_error_converts_to_deserialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let e: CoreError = json_err.into();
    assert!(matches!(e, CoreError::Deserialization(_)));
}

#[test]
fn errors_are_debug_printable() {
    let e = CoreError::InvalidKey("k".into());
    assert!(format!("{e:?}").contains("InvalidKey"));
}
