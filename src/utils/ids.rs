use uuid::Uuid;

/// Identifiers arrive as opaque strings. Anything that is not a stored
/// UUID can never resolve, so it is reported as `None` rather than as a
/// format error.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Treats empty and whitespace-only strings as missing.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
