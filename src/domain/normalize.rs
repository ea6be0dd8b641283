//! Turning raw process output into a payload
//!
//! Structured parsing is all-or-nothing: one unparseable record sends the
//! whole output down the freeform path.

use serde_json::Value;
use tracing::debug;

use crate::domain::cleanup::clean_text;
use crate::domain::templates::MIN_FRAGMENT_LEN;
use crate::domain::{Payload, ResponseShape};

/// Parse `raw` according to the declared shape.
///
/// The returned payload may be freeform even when `declared` is structured.
pub fn parse_output(declared: ResponseShape, raw: &str, delimiter: &str) -> Payload {
    match declared {
        ResponseShape::Structured => match parse_records(raw, delimiter) {
            Ok(records) => Payload::Structured(records),
            Err(e) => {
                debug!("structured parse failed, falling back to text: {}", e);
                Payload::Freeform(clean_text(raw))
            }
        },
        ResponseShape::Freeform => Payload::Freeform(clean_text(raw)),
    }
}

/// Split on the delimiter and parse every record-sized fragment as JSON.
pub fn parse_records(raw: &str, delimiter: &str) -> Result<Vec<Value>, serde_json::Error> {
    raw.split(delimiter)
        .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_LEN)
        .map(|fragment| serde_json::from_str::<Value>(fragment))
        .collect()
}
