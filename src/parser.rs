//! The byte-at-a-time stream parser.

use crate::{
    classify::{self, INDEFINITE},
    event::Event,
    message::{status, Message},
    prelude::*,
};

/// A streaming raw MIDI parser, taking raw, undelimited MIDI bytes, presumably from a serial
/// port or a 5-pin DIN cable.
///
/// Feed it bytes one at a time through [`accept`](#method.accept), and it will return a message
/// whenever one has been fully received.
/// The parser keeps only the last status byte, a count of pending data bytes and the last two
/// data bytes, so it never allocates and every call takes constant time.
///
/// Handles the quirks specific to raw MIDI streams:
///
/// - **Running status**: once a message completes, further data bytes without a new status
///     byte are decoded as another message of the same type.
/// - **Realtime interruption**: System Realtime bytes are returned immediately and leave the
///     in-progress message untouched, so they may appear between a status byte and its data.
/// - **SysEx**: the `0xF0` status is returned immediately and its payload bytes are then
///     skipped until the closing `0xF7`, which is returned as a message of its own.
///     Callers that need the payload should capture the raw bytes themselves between the two.
///
/// Data bytes that arrive out of context are silently dropped.
///
/// Instantiate a separate `Parser` for each physical input stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parser {
    /// The last non-realtime status byte, kept around for running status.
    message: u8,
    /// Data bytes still missing, or `INDEFINITE` while skipping a SysEx payload.
    pending: i8,
    /// The data bytes of the message being received.
    data: [u7; 2],
}
impl Parser {
    /// Create a fresh parser, with no running status.
    #[inline]
    pub const fn new() -> Parser {
        Parser {
            message: 0,
            pending: 0,
            data: [u7::new(0); 2],
        }
    }

    /// Forget all state, including running status.
    ///
    /// After a reset the parser behaves exactly like a freshly created one.
    pub fn reset(&mut self) {
        log_debug!(status = self.message, pending = self.pending, "parser reset");
        *self = Parser::new();
    }

    /// Accept the next byte of the stream.
    ///
    /// Returns `Some` when the byte completes a message, and `None` otherwise.
    /// The parameters of a completed message can be read through [`data`](#method.data) and
    /// friends until the next call to `accept`.
    pub fn accept(&mut self, byte: u8) -> Option<Message> {
        if classify::is_realtime(byte) {
            // Must not touch any state, the interrupted message carries on afterwards
            return Message::from_status(byte);
        }

        if classify::is_message_start(byte) {
            // A new status abandons whatever message was in progress
            self.message = byte;
            self.pending = classify::expected_parameter_count(byte);
            if self.pending == INDEFINITE {
                log_debug!(status = byte, "sysex started, skipping payload");
                return Message::from_status(byte);
            }
        } else if self.pending > 0 {
            self.data[(2 - self.pending) as usize] = u7::new(byte);
            self.pending -= 1;
        } else {
            log_trace!(byte, pending = self.pending, "dropped data byte");
            return None;
        }

        if self.pending == 0 {
            // Re-arm for running status
            self.pending = classify::expected_parameter_count(self.message);
            if self.message == status::ENDEX {
                log_debug!("sysex ended");
            }
            return Message::from_status(self.message);
        }
        None
    }

    /// Accept the next byte, and snapshot the parameters along with the completed message.
    #[inline]
    pub fn accept_event(&mut self, byte: u8) -> Option<Event> {
        self.accept(byte).map(|message| Event {
            message,
            data: self.data,
        })
    }

    /// Feeds a slice of bytes to the parser, calling the `handle_ev` closure whenever a complete
    /// message is read.
    ///
    /// Calling `feed` with many small slices is equivalent to calling `feed` with one large
    /// concatenation of them all.
    pub fn feed(&mut self, bytes: &[u8], mut handle_ev: impl FnMut(Event)) {
        for &byte in bytes {
            if let Some(ev) = self.accept_event(byte) {
                handle_ev(ev);
            }
        }
    }

    /// Feed a slice of bytes, collecting all completed messages.
    #[cfg(feature = "alloc")]
    pub fn collect(&mut self, bytes: &[u8]) -> Vec<Event> {
        let mut events = Vec::new();
        self.feed(bytes, |ev| events.push(ev));
        events
    }

    /// The raw code of the last non-realtime message, including its channel.
    ///
    /// `0` if no message has been seen since the last reset.
    #[inline]
    pub fn message(&self) -> u8 {
        self.message
    }

    /// The first of the two parameter slots.
    ///
    /// Holds the first byte of two-parameter messages. One-parameter messages leave it untouched.
    #[inline]
    pub fn data_a(&self) -> u7 {
        self.data[0]
    }

    /// The second of the two parameter slots.
    ///
    /// Holds the second byte of two-parameter messages, and the only byte of one-parameter
    /// messages such as program change, channel pressure, song select or MTC quarter frame.
    #[inline]
    pub fn data_b(&self) -> u7 {
        self.data[1]
    }

    /// Both parameter bytes.
    ///
    /// Only meaningful right after `accept` returns a message that takes parameters.
    /// The slots are filled right-aligned, so a one-parameter message writes only the second
    /// slot, and the first keeps stale content from earlier messages.
    #[inline]
    pub fn data(&self) -> [u7; 2] {
        self.data
    }

    /// Some messages use a 14-bit parameter, sent LSB first.
    #[inline]
    pub fn int14(&self) -> u14 {
        u14::from_lsb_msb(self.data[0], self.data[1])
    }

    /// Whether the parser is currently skipping the payload of a SysEx dump.
    #[inline]
    pub fn in_sysex(&self) -> bool {
        self.pending == INDEFINITE
    }
}
