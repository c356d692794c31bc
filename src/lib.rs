//! # Overview
//!
//! `midi-machine` decodes a raw MIDI 1.0 byte stream, such as the bytes arriving from a UART
//! wired to a 5-pin DIN socket, into complete messages, one byte at a time.
//!
//! The [`Parser`](struct.Parser.html) holds three bytes of state and never allocates, so it can be
//! driven straight from an interrupt handler:
//!
//! ```rust
//! use midi_machine::{status, ChannelKind, Message, Parser};
//!
//! let mut parser = Parser::new();
//!
//! // Note on, channel 3, key 64, velocity 127
//! assert_eq!(parser.accept(status::NOTE_ON | 3), None);
//! assert_eq!(parser.accept(64), None);
//! let msg = parser.accept(127).unwrap();
//!
//! assert_eq!(msg.status(), 0x93);
//! match msg {
//!     Message::Channel { kind: ChannelKind::NoteOn, channel } => {
//!         assert_eq!(channel.as_int(), 3);
//!         assert_eq!(parser.data_a().as_int(), 64);
//!         assert_eq!(parser.data_b().as_int(), 127);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Stream quirks
//!
//! Raw MIDI streams differ from the "packet-like" messages produced by OS MIDI APIs:
//!
//! - Senders may omit repeated status bytes (*running status*).
//!     The parser keeps the last status byte and decodes bare data bytes against it.
//! - System Realtime bytes (`0xF8 ..= 0xFF`) can show up anywhere, even between the data bytes
//!     of another message.
//!     They are returned immediately and do not disturb the message in progress.
//! - System Exclusive dumps have no predefined length.
//!     The parser reports the opening `0xF0` and the closing `0xF7` and skips everything in
//!     between.
//!     Applications that care about the payload capture the raw bytes themselves while
//!     [`Parser::in_sysex`](struct.Parser.html#method.in_sysex) is true.
//!
//! Data bytes that arrive out of context are dropped. The parser has no error channel: every
//! byte, in every state, has a defined outcome.
//!
//! # Delimited packets
//!
//! When a buffer is known to hold exactly one message, [`Event::parse`](struct.Event.html) decodes
//! it and reports malformed buffers as [`Error`](struct.Error.html)s.
//!
//! # About features
//!
//! - The `alloc` feature enables the helpers that return `Vec`s.
//! - The `std` feature implements `std::error::Error` for the error type.
//!     This feature is enabled by default. Disabling it with `default-features = false` makes the
//!     crate `no_std`.
//! - The `parallel` feature decodes large batches of independent streams on multiple threads
//!     through the `rayon` dependency, see [`decode_streams`](fn.decode_streams.html).
//! - The `tracing` feature emits diagnostics for dropped bytes and SysEx boundaries through the
//!     `tracing` crate.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! bail {
    ($err:expr) => {{
        return Err($err.into());
    }};
}
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            bail!($err)
        }
    }};
}

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

/// All of the errors this crate produces.
#[macro_use]
mod error;

mod prelude {
    pub(crate) use crate::{
        error::{Error, ErrorKind, Result},
        primitive::{u14, u4, u7},
    };
    #[cfg(feature = "alloc")]
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::{fmt, ops};

    pub(crate) fn bit_range<T>(val: T, range: ops::Range<u32>) -> T
    where
        T: From<u8>
            + ops::Shr<u32, Output = T>
            + ops::Shl<u32, Output = T>
            + ops::Not<Output = T>
            + ops::BitAnd<Output = T>,
    {
        let mask = !((!T::from(0)) << (range.end - range.start));
        (val >> range.start) & mask
    }
}

pub mod classify;
mod event;
mod message;
mod parser;
mod primitive;
mod streams;

#[cfg(feature = "alloc")]
pub use crate::streams::decode_streams;
pub use crate::{
    error::{Error, ErrorKind, Result},
    event::Event,
    message::{status, ChannelKind, Message, SystemCommon, SystemRealtime},
    parser::Parser,
};

/// Exotically-sized integers used by the MIDI standard.
pub mod num {
    pub use crate::primitive::{u14, u4, u7};
}
