//! Runtime format selection.

use crate::core::config::{Format, Generation, ParseOptions};
use crate::core::error::Result;
use crate::{v1, v2};
use serde::Serialize;
use std::io::Read;

/// A decoded status of either generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyStatus {
    V1(v1::Status),
    V2(v2::Status),
}

impl AnyStatus {
    pub fn generation(&self) -> Generation {
        match self {
            AnyStatus::V1(_) => Generation::V1,
            AnyStatus::V2(_) => Generation::V2,
        }
    }

    /// Encodes back into the wire form of `format`'s framing.
    pub fn encode(&self, format: Format) -> Vec<u8> {
        match self {
            AnyStatus::V1(status) => status.encode(format.framing()),
            AnyStatus::V2(status) => status.encode(format.framing()),
        }
    }
}

/// Decodes `reader` as the given porcelain format.
pub fn decode<R: Read>(reader: R, format: Format, options: &ParseOptions<'_>) -> Result<AnyStatus> {
    log::debug!("decoding status as {format}");
    match format.generation() {
        Generation::V1 => v1::parse_with(reader, format.framing(), options).map(AnyStatus::V1),
        Generation::V2 => v2::parse_with(reader, format.framing(), options).map(AnyStatus::V2),
    }
}
