use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::SerializationError;
use crate::ports::outbound::RecordSerializer;

/// Self-describing JSON encoding for blocks and file records.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordSerializer {
    pretty: bool,
}

impl JsonRecordSerializer {
    /// Compact single-line JSON.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON, easier to inspect by hand.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl RecordSerializer for JsonRecordSerializer {
    fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
