//! Field annotations.
//!
//! Fixed lookup tables that turn raw Envoy access-log values into short
//! human-readable explanations. Every function is total: no match simply
//! yields `None`.

/// Reason phrases for the response codes worth explaining.
///
/// `0` is what Envoy logs when no upstream response was received at all.
pub const RESPONSE_CODES: &[(&str, &str)] = &[
    ("200", "OK"),
    ("400", "Bad Request"),
    ("401", "Unauthorized"),
    ("403", "Forbidden"),
    ("404", "Not Found"),
    ("500", "Internal Server Error"),
    ("502", "Bad Gateway"),
    ("503", "Service Unavailable"),
    ("504", "Gateway Timeout"),
    ("0", "no response (connection failed)"),
];

/// Envoy `%RESPONSE_FLAGS%` short codes.
pub const RESPONSE_FLAGS: &[(&str, &str)] = &[
    ("UH", "upstream unhealthy"),
    ("UF", "upstream connection failure"),
    ("UO", "upstream overflow"),
    ("NR", "no route configured"),
    ("URX", "upstream request timeout"),
    ("DC", "downstream connection termination"),
    ("LH", "local service healthy"),
    ("UR", "upstream retry"),
    ("UC", "upstream connection termination"),
    ("DT", "downstream request timeout"),
    ("LR", "local service rejected"),
    ("RL", "rate limited"),
    ("UAEX", "unauthorized external service"),
    ("RLSE", "rate limited service error"),
    ("IH", "invalid HTTP response"),
    ("SI", "stream idle timeout"),
    ("DPE", "downstream protocol error"),
    ("UPE", "upstream protocol error"),
    ("NC", "no cluster found"),
];

/// Substring of `upstream_transport_failure_reason` and its explanation.
pub const TRANSPORT_FAILURES: &[(&str, &str)] =
    &[("delayed_connect_error", "connection to upstream service failed")];

/// Fields whose values are `host:port` addresses.
pub const ADDRESS_FIELDS: &[&str] = &[
    "downstream_local_address",
    "downstream_remote_address",
    "upstream_host",
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, explanation)| *explanation)
}

/// Short reason phrase for a response code, e.g. `"503"` → `Service Unavailable`.
pub fn explain_response_code(code: &str) -> Option<String> {
    lookup(RESPONSE_CODES, code).map(str::to_string)
}

/// Expand a comma-separated response-flag string.
///
/// Unrecognized codes are skipped; recognized ones are joined with `", "`.
pub fn explain_response_flags(flags: &str) -> Option<String> {
    let explanations: Vec<&str> = flags
        .split(',')
        .filter_map(|flag| lookup(RESPONSE_FLAGS, flag.trim()))
        .collect();

    if explanations.is_empty() {
        None
    } else {
        Some(explanations.join(", "))
    }
}

/// Explain a transport failure reason by substring match.
pub fn explain_transport_failure(reason: &str) -> Option<String> {
    TRANSPORT_FAILURES
        .iter()
        .find(|(needle, _)| reason.contains(needle))
        .map(|(_, explanation)| explanation.to_string())
}

/// Split a `host:port` address. Any other shape (IPv6, no port) yields `None`.
pub fn explain_address(address: &str) -> Option<String> {
    let mut parts = address.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(host), Some(port), None) => Some(format!("IP: {}, Port: {}", host, port)),
        _ => None,
    }
}

/// A zero duration means the request never completed.
pub fn explain_duration(duration: &str) -> Option<String> {
    (duration == "0").then(|| "request did not complete".to_string())
}

/// Dispatch a field to its explainer.
///
/// `value` is the canonical string form of the field. Fields without an
/// explainer yield `None`.
pub fn explain_field(field: &str, value: &str) -> Option<String> {
    match field {
        "response_code" => explain_response_code(value),
        "response_flags" => explain_response_flags(value),
        "upstream_transport_failure_reason" => explain_transport_failure(value),
        "duration" => explain_duration(value),
        f if ADDRESS_FIELDS.contains(&f) => explain_address(value),
        _ => None,
    }
}
