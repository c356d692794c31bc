//! Stateless classification of single bytes from a MIDI stream.
//!
//! In the MIDI protocol every byte with the top bit set starts a message (a *status* byte), and
//! every byte with the top bit clear is a data byte carrying 7 bits of payload.
//! Status bytes are further split into three families:
//!
//! - `0x80 ..= 0xEF`: channel messages. The high nibble selects the message type and the low
//!     nibble carries the channel number.
//! - `0xF0 ..= 0xF7`: system common messages. The low 3 bits select the message type.
//! - `0xF8 ..= 0xFF`: system realtime messages. These never carry data bytes and may appear
//!     anywhere in the stream, even between the data bytes of another message.

use crate::prelude::*;

/// Parameter count of a message whose data runs until the next status byte (SysEx).
pub const INDEFINITE: i8 = -1;

/// Data bytes expected by each channel message, indexed by the low 3 bits of the high nibble.
///
/// Note off, note on, aftertouch, control change, program change, channel pressure, pitch bend.
const CHANNEL_PARAMS: [i8; 7] = [2, 2, 2, 2, 1, 1, 2];

/// Data bytes expected by each system common message, indexed by the low 3 bits.
///
/// SysEx, MTC quarter frame, song position, song select, undefined, undefined, tune request and
/// SysEx end.
const COMMON_PARAMS: [i8; 8] = [INDEFINITE, 1, 2, 1, 0, 0, 0, 0];

/// The broad category of a single stream byte.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ByteKind {
    /// A data byte, top bit clear.
    Data,
    /// The status byte of a channel message.
    Channel,
    /// The status byte of a system common message.
    SystemCommon,
    /// The status byte of a system realtime message.
    Realtime,
}

/// Whether the byte starts a message, ie. has its top bit set.
#[inline]
pub const fn is_message_start(byte: u8) -> bool {
    byte & 0x80 == 0x80
}

/// Whether the byte is a system common status byte (`0xF0 ..= 0xF7`).
#[inline]
pub const fn is_system_common(byte: u8) -> bool {
    byte & 0xF8 == 0xF0
}

/// Whether the byte is a system realtime status byte (`0xF8 ..= 0xFF`).
#[inline]
pub const fn is_realtime(byte: u8) -> bool {
    byte & 0xF8 == 0xF8
}

/// Classify a byte into its broad category.
#[inline]
pub const fn byte_kind(byte: u8) -> ByteKind {
    if !is_message_start(byte) {
        ByteKind::Data
    } else if is_realtime(byte) {
        ByteKind::Realtime
    } else if is_system_common(byte) {
        ByteKind::SystemCommon
    } else {
        ByteKind::Channel
    }
}

/// The message type of a channel status byte, with the channel number masked off.
#[inline]
pub const fn message_value(status: u8) -> u8 {
    status & 0xF0
}

/// The channel number carried in the low nibble of a channel status byte.
#[inline]
pub fn channel_of(status: u8) -> u4 {
    u4::from(bit_range(status, 0..4))
}

/// How many data bytes must follow the given status byte before the message is complete.
///
/// Returns [`INDEFINITE`](constant.INDEFINITE.html) for SysEx, whose payload runs until the next
/// status byte.
/// Realtime messages always take zero parameters.
///
/// The result is meaningless for data bytes, which should be filtered out with
/// [`is_message_start`](fn.is_message_start.html) first.
#[inline]
pub fn expected_parameter_count(status: u8) -> i8 {
    match byte_kind(status) {
        ByteKind::Channel => CHANNEL_PARAMS[bit_range(status, 4..7) as usize],
        ByteKind::SystemCommon => COMMON_PARAMS[bit_range(status, 0..3) as usize],
        ByteKind::Realtime | ByteKind::Data => 0,
    }
}
