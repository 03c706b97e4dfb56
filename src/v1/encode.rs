use crate::core::config::Framing;
use crate::v1::status::{Entry, Status};

impl Status {
    /// Serializes headers, then entries, with the given framing.
    ///
    /// In line framing an empty original path cannot be represented and does
    /// not decode back. In NUL framing `orig_path` is written only for
    /// rename/copy entries, so on any other entry it is lost.
    pub fn encode(&self, framing: Framing) -> Vec<u8> {
        let mut out = Vec::new();
        for header in &self.headers {
            out.extend_from_slice(header.as_bytes());
            out.push(framing.terminator());
        }
        for entry in &self.entries {
            out.extend_from_slice(&entry.to_record(framing));
            out.push(framing.terminator());
        }
        out
    }
}

impl Entry {
    pub fn to_record(&self, framing: Framing) -> Vec<u8> {
        let mut record = self.xy.to_bytes().to_vec();
        record.push(b' ');
        match (&self.orig_path, framing) {
            (Some(orig), Framing::Lines) => {
                record.extend_from_slice(orig.as_bytes());
                record.extend_from_slice(b" -> ");
                record.extend_from_slice(self.path.as_bytes());
            }
            // The NUL splitter only expects a second path after R or C.
            (Some(orig), Framing::Nul) if self.xy.is_rename_or_copy() => {
                record.extend_from_slice(self.path.as_bytes());
                record.push(b'\0');
                record.extend_from_slice(orig.as_bytes());
            }
            _ => record.extend_from_slice(self.path.as_bytes()),
        }
        record
    }
}
