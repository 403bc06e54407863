use examdesk_types::EntityId;
use std::collections::HashSet;
use std::str::FromStr;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_ids_are_unique() {
    let ids: HashSet<EntityId> = (0..100).map(|_| EntityId::new()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn default_is_a_fresh_id() {
    let a = EntityId::default();
    let b = EntityId::default();
    assert_ne!(a, b);
}

#[test]
fn from_uuid_roundtrip() {
    let id = EntityId::new();
    assert_eq!(EntityId::from_uuid(id.as_uuid()), id);
}

// ── Parsing & display ────────────────────────────────────────────

#[test]
fn parse_display_roundtrip() {
    let id = EntityId::new();
    let parsed = EntityId::parse(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn from_str_matches_parse() {
    let id = EntityId::new();
    let s = id.to_string();
    assert_eq!(EntityId::from_str(&s).unwrap(), EntityId::parse(&s).unwrap());
}

#[test]
fn parse_rejects_garbage() {
    assert!(EntityId::parse("not-a-uuid").is_err());
    assert!(EntityId::parse("").is_err());
}

#[test]
fn display_is_canonical_uuid_form() {
    let id = EntityId::new();
    let s = id.to_string();
    assert_eq!(s.len(), 36);
    assert_eq!(s.matches('-').count(), 4);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let id = EntityId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

#[test]
fn deserializes_from_plain_string() {
    let id = EntityId::new();
    let json = format!("\"{id}\"");
    let back: EntityId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
