//! Client-side reduction of raw search results.
//!
//! The search endpoint returns a mixed list of stop and line entries. The
//! filter here is a plain linear pass: entries are kept or dropped in the
//! order the service returned them, and no pagination is compensated for.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use ptvsign_core::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Percent-encoding for the search query path segment.
///
/// RFC 3986 unreserved characters and `/` pass through; everything else,
/// space included, becomes `%XX`. Never `+`: that form belongs to query
/// strings, not path segments.
const QUERY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Build the search route for a free-text query.
pub(crate) fn search_path(query: &str) -> String {
    format!("search/{}", utf8_percent_encode(query, QUERY_SEGMENT))
}

/// The kind of entity a search entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A stop record.
    Stop,
    /// A line record.
    Line,
}

impl EntityKind {
    /// The `type` tag the service uses for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Stop => "stop",
            EntityKind::Line => "line",
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(rename = "type")]
    kind: String,
    result: serde_json::Map<String, Value>,
}

/// Reduce a raw search response to the `result` records matching `kind` and,
/// when given, `transport_type`.
///
/// The service includes a `distance` field in each result; it is stripped
/// before the record is yielded. Input order is preserved and a response
/// with no matches is an empty vector, not an error.
pub(crate) fn filter_results(
    response: Value,
    kind: EntityKind,
    transport_type: Option<&str>,
) -> Result<Vec<Value>> {
    let Value::Array(entries) = response else {
        return Err(Error::decode_failed("search response is not an array"));
    };

    let mut out = Vec::new();
    for entry in entries {
        let entry: SearchEntry = serde_json::from_value(entry)
            .map_err(|e| Error::decode_failed("malformed search entry").with_source(e))?;

        if entry.kind != kind.as_str() {
            continue;
        }
        if let Some(wanted) = transport_type {
            let actual = entry.result.get("transport_type").and_then(Value::as_str);
            if actual != Some(wanted) {
                continue;
            }
        }

        let mut result = entry.result;
        result.remove("distance");
        out.push(Value::Object(result));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Value {
        json!([
            {
                "type": "stop",
                "result": {
                    "stop_id": 1104,
                    "location_name": "Hoddle St",
                    "transport_type": "train",
                    "distance": 0.0
                }
            },
            {
                "type": "line",
                "result": {
                    "route_id": 15,
                    "line_name": "Hoddle St Loop",
                    "transport_type": "bus",
                    "distance": 0.0
                }
            },
            {
                "type": "stop",
                "result": {
                    "stop_id": 2211,
                    "location_name": "Hoddle St / Victoria Pde",
                    "transport_type": "tram",
                    "distance": 1.5
                }
            },
            {
                "type": "stop",
                "result": {
                    "stop_id": 2240,
                    "location_name": "Victoria Park",
                    "transport_type": "train",
                    "distance": 2.25
                }
            }
        ])
    }

    #[test]
    fn test_search_path_encodes_spaces_as_percent20() {
        assert_eq!(search_path("Hoddle St"), "search/Hoddle%20St");
        assert_eq!(search_path("flinders street"), "search/flinders%20street");
    }

    #[test]
    fn test_search_path_keeps_unreserved_chars() {
        assert_eq!(search_path("st_kilda-rd.7~x"), "search/st_kilda-rd.7~x");
        assert_eq!(search_path("a&b"), "search/a%26b");
    }

    #[test]
    fn test_filter_by_kind_and_mode() {
        let stops = filter_results(sample_response(), EntityKind::Stop, Some("train")).unwrap();

        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0]["stop_id"], 1104);
        assert_eq!(stops[1]["stop_id"], 2240);
        // distance is stripped from every yielded record
        for stop in &stops {
            assert!(stop.get("distance").is_none());
            assert_eq!(stop["transport_type"], "train");
        }
    }

    #[test]
    fn test_filter_without_mode_keeps_all_of_kind() {
        let stops = filter_results(sample_response(), EntityKind::Stop, None).unwrap();
        assert_eq!(stops.len(), 3);
        // input order is preserved
        assert_eq!(stops[0]["stop_id"], 1104);
        assert_eq!(stops[1]["stop_id"], 2211);
        assert_eq!(stops[2]["stop_id"], 2240);
    }

    #[test]
    fn test_filter_lines() {
        let lines = filter_results(sample_response(), EntityKind::Line, Some("bus")).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["route_id"], 15);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let lines = filter_results(sample_response(), EntityKind::Line, Some("train")).unwrap();
        assert!(lines.is_empty());

        let nothing = filter_results(json!([]), EntityKind::Stop, None).unwrap();
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_non_array_response_is_decode_error() {
        let err = filter_results(json!({"status": "ok"}), EntityKind::Stop, None).unwrap_err();
        assert_eq!(err.kind(), ptvsign_core::ErrorKind::DecodeFailed);
    }

    #[test]
    fn test_entry_missing_transport_type_is_dropped_when_filtered() {
        let response = json!([
            {"type": "stop", "result": {"stop_id": 7}}
        ]);
        assert!(filter_results(response.clone(), EntityKind::Stop, Some("train"))
            .unwrap()
            .is_empty());
        assert_eq!(
            filter_results(response, EntityKind::Stop, None).unwrap().len(),
            1
        );
    }
}
