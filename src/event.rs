//! Completed messages bundled with their parameters.

use crate::{
    classify,
    message::{status, Message, SystemCommon},
    parser::Parser,
    prelude::*,
};

/// A completed message along with a copy of its parameter bytes.
///
/// Produced by [`Parser::accept_event`](struct.Parser.html#method.accept_event) and
/// [`Parser::feed`](struct.Parser.html#method.feed).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Event {
    /// The message type.
    pub message: Message,
    /// The parameter bytes as they were stored when the message completed.
    ///
    /// Parameters are right-aligned: a two-parameter message fills both slots, while the single
    /// byte of a one-parameter message lands in `data[1]` and `data[0]` keeps stale content.
    /// Use [`params`](#method.params) to get only the meaningful bytes.
    pub data: [u7; 2],
}
impl Event {
    /// Parse a complete MIDI message from its raw bytes.
    ///
    /// This is meant for "packet-like" input, such as the buffers handed out by OS MIDI APIs,
    /// where every buffer holds exactly one message.
    /// SysEx packets must be terminated by `0xF7`, and their payload is not retained.
    /// Realtime bytes interleaved with the SysEx payload are skipped, as they would be on the
    /// wire.
    pub fn parse(raw: &[u8]) -> Result<Event> {
        let (&status, rest) = raw
            .split_first()
            .ok_or_else(|| Error::new(err_invalid!("no status byte")))?;
        ensure!(
            classify::is_message_start(status),
            err_invalid!("packet does not start with a status byte")
        );

        let mut parser = Parser::new();
        let mut done = parser.accept_event(status);
        if let Some(ev) = done {
            if ev.message == Message::Common(SystemCommon::SysEx) {
                let end = rest
                    .iter()
                    .position(|&byte| {
                        classify::is_message_start(byte) && !classify::is_realtime(byte)
                    })
                    .ok_or_else(|| Error::new(err_invalid!("unterminated sysex")))?;
                ensure!(
                    rest[end] == status::ENDEX,
                    err_invalid!("unexpected status byte inside sysex")
                );
                ensure!(end + 1 == rest.len(), err_invalid!("trailing bytes after message"));
                return Ok(ev);
            }
        }

        for &byte in rest {
            ensure!(done.is_none(), err_invalid!("trailing bytes after message"));
            ensure!(
                !classify::is_message_start(byte),
                err_invalid!("unexpected status byte in packet")
            );
            done = parser.accept_event(byte);
        }
        done.ok_or_else(|| Error::new(err_invalid!("missing data bytes")))
    }

    /// The parameter bytes that are meaningful for this message.
    ///
    /// Empty for realtime messages, SysEx boundaries and zero-parameter messages.
    pub fn params(&self) -> &[u7] {
        let count = self.message.param_count().max(0) as usize;
        &self.data[2 - count..]
    }

    /// The parameters joined as a 14-bit value, LSB first.
    ///
    /// Meaningful for pitch bend and song position messages.
    #[inline]
    pub fn int14(&self) -> u14 {
        u14::from_lsb_msb(self.data[0], self.data[1])
    }
}
