//! The completed-message model produced by the parser.

use crate::{
    classify::{self, ByteKind},
    prelude::*,
};

/// Raw status codes, as they appear on the wire.
///
/// Channel message codes do not include the channel number, which is or-ed into the low nibble.
pub mod status {
    /// Note off. Key, velocity.
    pub const NOTE_OFF: u8 = 0x80;
    /// Note on. Key, velocity.
    pub const NOTE_ON: u8 = 0x90;
    /// Polyphonic aftertouch. Key, pressure.
    pub const AFTERTOUCH: u8 = 0xA0;
    /// Control change. Controller, value.
    pub const CONTROL_CHANGE: u8 = 0xB0;
    /// Program change. Program number.
    pub const PROGRAM_CHANGE: u8 = 0xC0;
    /// Channel pressure. Pressure.
    pub const CHANNEL_PRESSURE: u8 = 0xD0;
    /// Pitch bend. 14 bits, LSB first.
    pub const PITCH_BEND: u8 = 0xE0;

    /// Start of a system-exclusive dump, closed by `ENDEX`.
    pub const SYSEX: u8 = 0xF0;
    /// MIDI Time Code quarter frame. One data byte.
    pub const MTC_QUARTER_FRAME: u8 = 0xF1;
    /// Song position pointer, in MIDI beats. 14 bits, LSB first.
    pub const SONG_POSITION: u8 = 0xF2;
    /// Song select. Song number.
    pub const SONG_SELECT: u8 = 0xF3;
    /// Tune request. No data.
    pub const TUNE_REQUEST: u8 = 0xF6;
    /// End of a system-exclusive dump.
    pub const ENDEX: u8 = 0xF7;

    /// Timing clock, 24 per quarter note.
    pub const TIMING_CLOCK: u8 = 0xF8;
    /// Start playing from the beginning of the sequence.
    pub const START: u8 = 0xFA;
    /// Resume playing from the current song position.
    pub const CONTINUE: u8 = 0xFB;
    /// Stop playing, keeping the song position.
    pub const STOP: u8 = 0xFC;
    /// Keep-alive, sent every 300ms on a live connection.
    pub const ACTIVE_SENSING: u8 = 0xFE;
    /// Reset devices to their power-up state.
    pub const RESET: u8 = 0xFF;
}

/// A complete message recognized by the parser.
///
/// Only the message type is stored here.
/// The parameter bytes live in the parser (see
/// [`Parser::data`](struct.Parser.html#method.data)) or in an [`Event`](struct.Event.html)
/// snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Message {
    /// A message scoped to one of the 16 MIDI channels.
    Channel {
        /// The type of channel message.
        kind: ChannelKind,
        /// The channel this message is associated with.
        channel: u4,
    },
    /// A system common message, carrying no channel.
    Common(SystemCommon),
    /// A system realtime message, which may interrupt any other message.
    Realtime(SystemRealtime),
}
impl Message {
    /// Interpret a status byte as a message.
    ///
    /// Returns `None` for data bytes.
    pub fn from_status(status: u8) -> Option<Message> {
        Some(match classify::byte_kind(status) {
            ByteKind::Data => return None,
            ByteKind::Channel => Message::Channel {
                kind: ChannelKind::from_nibble(bit_range(status, 4..8))?,
                channel: classify::channel_of(status),
            },
            ByteKind::SystemCommon => Message::Common(SystemCommon::new(status)),
            ByteKind::Realtime => Message::Realtime(SystemRealtime::new(status)),
        })
    }

    /// Like `from_status`, but produces an error for data bytes.
    pub fn try_from_status(status: u8) -> Result<Message> {
        Message::from_status(status).ok_or_else(|| Error::new(err_invalid!("not a status byte")))
    }

    /// The raw status byte of this message, including the channel number if any.
    pub fn status(&self) -> u8 {
        match self {
            Message::Channel { kind, channel } => kind.status_nibble() << 4 | channel.as_int(),
            Message::Common(common) => common.encode(),
            Message::Realtime(realtime) => realtime.encode(),
        }
    }

    /// How many data bytes complete this message.
    ///
    /// `-1` ([`INDEFINITE`](classify/constant.INDEFINITE.html)) for SysEx.
    #[inline]
    pub fn param_count(&self) -> i8 {
        classify::expected_parameter_count(self.status())
    }

    /// Whether this is a channel message.
    #[inline]
    pub fn is_channel(&self) -> bool {
        matches!(self, Message::Channel { .. })
    }

    /// Whether this is a system common message.
    #[inline]
    pub fn is_common(&self) -> bool {
        matches!(self, Message::Common(_))
    }

    /// Whether this is a system realtime message.
    #[inline]
    pub fn is_realtime(&self) -> bool {
        matches!(self, Message::Realtime(_))
    }
}

/// The seven kinds of channel messages.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ChannelKind {
    /// Key, velocity.
    NoteOff,
    /// Key, velocity.
    NoteOn,
    /// Key, pressure.
    Aftertouch,
    /// Controller, value.
    Controller,
    /// Program number.
    ProgramChange,
    /// Pressure, applying to the whole channel.
    ChannelAftertouch,
    /// A 14-bit bend amount, least significant byte first.
    PitchBend,
}
impl ChannelKind {
    /// Get the channel message kind from the high nibble of its status byte.
    ///
    /// Returns `None` for nibbles outside `0x8 ..= 0xE`.
    pub fn from_nibble(nibble: u8) -> Option<ChannelKind> {
        use ChannelKind::*;
        Some(match nibble {
            0x8 => NoteOff,
            0x9 => NoteOn,
            0xA => Aftertouch,
            0xB => Controller,
            0xC => ProgramChange,
            0xD => ChannelAftertouch,
            0xE => PitchBend,
            _ => return None,
        })
    }

    /// The high nibble of the status byte for this kind of message.
    pub fn status_nibble(self) -> u8 {
        use ChannelKind::*;
        match self {
            NoteOff => 0x8,
            NoteOn => 0x9,
            Aftertouch => 0xA,
            Controller => 0xB,
            ProgramChange => 0xC,
            ChannelAftertouch => 0xD,
            PitchBend => 0xE,
        }
    }

    /// How many data bytes follow a message of this kind. Either 1 or 2.
    #[inline]
    pub fn param_count(self) -> i8 {
        classify::expected_parameter_count(self.status_nibble() << 4)
    }
}

/// A "system common message", as defined by the MIDI spec.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum SystemCommon {
    /// Start of a system-exclusive dump.
    ///
    /// The payload bytes that follow are skipped by the parser until `EndEx` arrives.
    SysEx,
    /// A single nibble of a MIDI Time Code, carried in one data byte.
    MtcQuarterFrame,
    /// The number of MIDI beats (6 x MIDI clocks) since the start of the sequence, as a 14-bit
    /// value.
    SongPosition,
    /// Select a song index, carried in one data byte.
    SongSelect,
    /// Request that analog oscillators be tuned.
    TuneRequest,
    /// End of a system-exclusive dump.
    EndEx,
    /// One of the undefined system common codes (`0xF4` or `0xF5`).
    Undefined(u8),
}
impl SystemCommon {
    /// Interpret a system common status byte.
    ///
    /// The byte should be in the `0xF0 ..= 0xF7` range, the low 3 bits select the message.
    pub fn new(status: u8) -> SystemCommon {
        use SystemCommon::*;
        match status {
            0xF0 => SysEx,
            0xF1 => MtcQuarterFrame,
            0xF2 => SongPosition,
            0xF3 => SongSelect,
            0xF6 => TuneRequest,
            0xF7 => EndEx,
            _ => Undefined(status),
        }
    }

    /// The status byte of this message.
    pub fn encode(self) -> u8 {
        use SystemCommon::*;
        match self {
            SysEx => status::SYSEX,
            MtcQuarterFrame => status::MTC_QUARTER_FRAME,
            SongPosition => status::SONG_POSITION,
            SongSelect => status::SONG_SELECT,
            TuneRequest => status::TUNE_REQUEST,
            EndEx => status::ENDEX,
            Undefined(byte) => byte,
        }
    }
}

/// Messages that can occur at ANY time, even during transmission of other message data bytes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum SystemRealtime {
    /// If sent, they should be sent 24 times per quarter note.
    TimingClock,
    /// Indicates MIDI devices to start playing at the beginning of the sequence.
    Start,
    /// Indicates MIDI devices to continue playing from the current song position.
    Continue,
    /// Indicates MIDI devices to stop playing immediately.
    Stop,
    /// Once one of these messages is transmitted, a message should arrive every 300ms or else the
    /// connection is considered broken.
    ActiveSensing,
    /// Indicates MIDI devices to reset to the power-up condition.
    Reset,
    /// One of the undefined realtime codes (`0xF9` or `0xFD`).
    Undefined(u8),
}
impl SystemRealtime {
    /// Interpret a system realtime status byte, in the `0xF8 ..= 0xFF` range.
    pub fn new(status: u8) -> SystemRealtime {
        use SystemRealtime::*;
        match status {
            0xF8 => TimingClock,
            0xFA => Start,
            0xFB => Continue,
            0xFC => Stop,
            0xFE => ActiveSensing,
            0xFF => Reset,
            _ => {
                //Unknown system realtime message
                Undefined(status)
            }
        }
    }

    /// The status byte of this message.
    pub fn encode(self) -> u8 {
        use SystemRealtime::*;
        match self {
            TimingClock => status::TIMING_CLOCK,
            Start => status::START,
            Continue => status::CONTINUE,
            Stop => status::STOP,
            ActiveSensing => status::ACTIVE_SENSING,
            Reset => status::RESET,
            Undefined(byte) => byte,
        }
    }
}
