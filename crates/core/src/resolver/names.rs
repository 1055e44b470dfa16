// Candidate-name construction for the cascade.

/// Basic-view override looked up after the prefix default.
pub(crate) const BASIC_VIEW_NAME: &str = "dspacebasic";
/// Prefix of the type-specific override name.
pub(crate) const TYPE_NAME_PREFIX: &str = "dspace";
/// Property module holding the system-entity declarations.
pub(crate) const ENTITY_MODULE: &str = "cris";
/// Property key prefix, completed with the item's type label.
pub(crate) const ENTITY_KEY_PREFIX: &str = "facet.type.";
/// Field delimiter inside a system-entity payload.
pub(crate) const ENTITY_PAYLOAD_DELIMITER: &str = "###";

/// Join an optional prefix and a name with a dot.
pub(crate) fn qualified(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}.{name}"),
        None => name.to_string(),
    }
}

/// Type-specific override name for an item type label.
pub(crate) fn type_override_name(type_label: &str) -> String {
    format!("{TYPE_NAME_PREFIX}{type_label}")
}

/// Property key of the system-entity declaration for a type label.
pub(crate) fn entity_property_key(type_label: &str) -> String {
    format!("{ENTITY_KEY_PREFIX}{type_label}")
}

/// Extract the override name from a system-entity payload.
///
/// The payload carries delimiter-separated fields and the override name is
/// the second one. A payload with no delimiter, or with a blank second
/// field, yields no override rather than a fault.
pub(crate) fn entity_override_name(payload: &str) -> Option<&str> {
    let second = payload.split(ENTITY_PAYLOAD_DELIMITER).nth(1)?;
    let second = second.trim();
    (!second.is_empty()).then_some(second)
}
