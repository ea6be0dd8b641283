//! Domain entities: core data structures

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Invocation mode of the external container tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFamily {
    /// Primary tool: `docker`
    Docker,
    /// Secondary, compose-style tool: `docker-compose`
    DockerCompose,
}

impl CommandFamily {
    /// Program name used as command prefix.
    pub fn program(&self) -> &'static str {
        match self {
            CommandFamily::Docker => "docker",
            CommandFamily::DockerCompose => "docker-compose",
        }
    }
}

impl fmt::Display for CommandFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// How a response payload is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseShape {
    /// Delimiter-separated JSON records
    #[serde(rename = "JSON")]
    Structured,
    /// Cleaned free text
    #[serde(rename = "STRING")]
    Freeform,
}

/// Outcome of the attempt chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => f.write_str("SUCCESS"),
            Status::Failure => f.write_str("FAILURE"),
        }
    }
}

/// One step of a family's fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTemplate {
    /// Position in the chain, starting at 1
    pub rank: u8,
    /// Shape the output is expected to have when this attempt succeeds
    pub shape: ResponseShape,
    /// Format string with `$command` and `$delimiter` slots
    pub format: &'static str,
}

/// Response payload. The variant always agrees with the response shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Parsed records in output order
    Structured(Vec<Value>),
    /// Single cleaned text blob
    Freeform(String),
}

impl Payload {
    /// Shape matching this payload variant.
    pub fn shape(&self) -> ResponseShape {
        match self {
            Payload::Structured(_) => ResponseShape::Structured,
            Payload::Freeform(_) => ResponseShape::Freeform,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Freeform(text) => Some(text),
            Payload::Structured(_) => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Value]> {
        match self {
            Payload::Structured(records) => Some(records),
            Payload::Freeform(_) => None,
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Structured(records) => records.serialize(serializer),
            Payload::Freeform(text) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(text)?;
                seq.end()
            }
        }
    }
}

/// Uniform envelope returned for every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse {
    /// Family-prefixed command, e.g. `docker ps -a`
    pub command: String,
    pub status: Status,
    #[serde(rename = "type")]
    pub shape: ResponseShape,
    #[serde(rename = "data")]
    pub payload: Payload,
}

impl NormalizedResponse {
    /// Build a response; the shape is taken from the payload so both always agree.
    pub fn new(command: String, status: Status, payload: Payload) -> Self {
        Self {
            command,
            status,
            shape: payload.shape(),
            payload,
        }
    }
}
