//! LZW encoder: greedy longest-match against the trie dictionary.

use trielz_core::bitstream::MsbBitWriter;

use crate::dictionary::Dictionary;
use crate::error::Result;

/// One code together with the width it occupied on the wire.
///
/// Recorded only by the lock-step test harness; the public entry points
/// pass no sink and pay nothing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodeEvent {
    pub code: u32,
    pub width: u8,
}

/// Compress `input` into a packed code stream.
///
/// Each iteration matches the longest dictionary entry starting at the
/// cursor, emits its code at the current width, then (while input remains
/// and the dictionary may grow) widens the code width if needed and records
/// the matched sequence plus the next byte as a new entry. Empty input
/// produces an empty stream.
pub(crate) fn encode(input: &[u8], mut trace: Option<&mut Vec<CodeEvent>>) -> Result<Vec<u8>> {
    let mut dict = Dictionary::new()?;
    let mut writer = MsbBitWriter::new();

    let mut pos = 0;
    while pos < input.len() {
        let mut node = dict.lookup_root(input[pos]);
        pos += 1;

        while pos < input.len()
            && let Some(child) = dict.child(node, input[pos])
        {
            node = child;
            pos += 1;
        }

        let code = dict.node(node).code;
        let width = dict.code_width();
        writer.write(code, width);
        if let Some(events) = trace.as_deref_mut() {
            events.push(CodeEvent { code, width });
        }

        if pos < input.len() && dict.allow_growth() {
            dict.reserve_width();
            dict.update_node(node, input[pos])?;
        }
    }

    Ok(writer.into_vec())
}
