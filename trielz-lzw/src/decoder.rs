//! LZW decoder: code-indexed expansion with lock-step dictionary rebuild.

use trielz_core::bitstream::MsbBitReader;

use crate::dictionary::{Dictionary, NodeId};
use crate::encoder::CodeEvent;
use crate::error::{LzwError, Result};

/// Expand a packed code stream back into the original bytes.
///
/// The decoder cannot do prefix search, so it keeps a code-indexed table of
/// node handles that grows in the same order, and to the same length, as the
/// encoder's dictionary. One entry lags by design: the encoder creates an
/// entry the moment it emits the preceding code, so a stream may reference
/// the entry one slot past the table. That happens exactly when the new
/// entry's sequence starts and ends with the same byte (a run of identical
/// bytes), and its first byte is then known to equal the previous tail's
/// first byte. Any other out-of-range code is a corrupt stream.
///
/// Trailing bits narrower than the current code width are padding left by
/// the encoder and are ignored.
pub(crate) fn decode(input: &[u8], mut trace: Option<&mut Vec<CodeEvent>>) -> Result<Vec<u8>> {
    let mut dict = Dictionary::new()?;
    let mut table: Vec<NodeId> = (0..=255u8).map(|b| dict.lookup_root(b)).collect();

    let mut reader = MsbBitReader::new(input);
    let mut result = Vec::new();
    let mut prev_tail: Option<NodeId> = None;

    while reader.remaining_bits() >= u64::from(dict.code_width()) {
        let width = dict.code_width();
        let code = reader.read(width)?;
        if let Some(events) = trace.as_deref_mut() {
            events.push(CodeEvent { code, width });
        }

        // After expansion, result[old_len] is the first byte of the
        // sequence this code denotes.
        let old_len = result.len();
        if (code as usize) < table.len() {
            dict.expand_into(table[code as usize], &mut result);
        } else if code as usize == table.len()
            && let Some(tail) = prev_tail
        {
            dict.expand_into(tail, &mut result);
            result.push(result[old_len]);
        } else {
            return Err(LzwError::InvalidCode {
                code,
                table_len: table.len() as u32,
            });
        }

        if let Some(tail) = prev_tail
            && dict.allow_growth()
        {
            let new_node = dict.update_node(tail, result[old_len])?;
            table.push(new_node);
        }
        dict.reserve_width();

        prev_tail = Some(table[code as usize]);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn empty_stream_decodes_to_empty() {
        assert!(decode(&[], None).unwrap().is_empty());
    }

    #[test]
    fn single_code_stream() {
        assert_eq!(decode(&[0x41], None).unwrap(), b"A");
    }

    #[test]
    fn fresh_entry_reference_is_resolved() {
        // "AAAA" references code 256 one step after its creation.
        assert_eq!(decode(&[0x41, 0x80, 0x10, 0x40], None).unwrap(), b"AAAA");
    }

    #[test]
    fn trailing_partial_code_is_ignored() {
        // 'A'@8 then 'B'@9 leaves 7 padding bits, too narrow for a code.
        assert_eq!(decode(&[0x41, 0x21, 0x00], None).unwrap(), b"AB");
    }

    #[test]
    fn decode_matches_encode_events() {
        let input = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut enc_events = Vec::new();
        let compressed = encode(input, Some(&mut enc_events)).unwrap();

        let mut dec_events = Vec::new();
        let output = decode(&compressed, Some(&mut dec_events)).unwrap();

        assert_eq!(output, input);
        assert_eq!(enc_events, dec_events);
    }
}
