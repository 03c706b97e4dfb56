//! Non-fatal decoder notices.
//!
//! Decoders report recoverable events (a dropped header, a skipped unknown
//! record) to a [`DiagnosticSink`] passed in by the caller. Nothing here is
//! global: the default sink discards everything, and [`LogSink`] forwards to
//! whatever `log` backend the host application installed.

/// A recoverable event observed while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice<'a> {
    /// A `#` header with a key this decoder does not know
    UnknownHeader { line: &'a str },
    /// A recognized header whose value did not parse; the header was dropped
    MalformedHeader { key: &'a str, value: &'a str },
    /// A header line that is not `# <key> <value>` or not valid UTF-8
    UnreadableHeader { line: &'a [u8] },
    /// A record whose leading byte is not a known entry kind
    UnknownRecord { discriminant: u8 },
}

/// Receiver for [`Notice`]s
pub trait DiagnosticSink: Sync {
    fn notice(&self, notice: &Notice<'_>);
}

/// Discards every notice
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn notice(&self, _notice: &Notice<'_>) {}
}

/// Forwards notices to the `log` facade
///
/// Malformed known headers are logged at `warn`, everything else at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn notice(&self, notice: &Notice<'_>) {
        match notice {
            Notice::UnknownHeader { line } => {
                log::debug!("unrecognized status header: {line}");
            }
            Notice::MalformedHeader { key, value } => {
                log::warn!("invalid {key} header value {value:?}, header dropped");
            }
            Notice::UnreadableHeader { line } => {
                log::debug!(
                    "unreadable status header: {:?}",
                    String::from_utf8_lossy(line)
                );
            }
            Notice::UnknownRecord { discriminant } => {
                log::debug!(
                    "skipping record with unknown discriminant {:?}",
                    char::from(*discriminant)
                );
            }
        }
    }
}

pub(crate) static NOOP: NoopSink = NoopSink;
