use core::fmt;

/// Represents an error while decoding a delimited MIDI packet or converting a raw byte.
///
/// The streaming parser itself never fails: every byte in every state has a defined transition.
/// Errors only come from the fallible conversions built on top of it, such as
/// [`Event::parse`](struct.Event.html#method.parse) or
/// [`Message::try_from_status`](enum.Message.html#method.try_from_status).
///
/// In release and debug mode alike this is a thin pointer to a static `ErrorKind`.
///
/// If the `std` feature is enabled, this type implements `std::error::Error`.
/// Otherwise, only `Display` and `Debug` are implemented.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    inner: &'static ErrorKind,
}
impl Error {
    /// Create a new error with the given `ErrorKind`.
    #[inline]
    pub fn new(kind: &'static ErrorKind) -> Error {
        Error { inner: kind }
    }

    /// More information about the error itself.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        *self.inner
    }
}
impl From<&'static ErrorKind> for Error {
    #[inline]
    fn from(kind: &'static ErrorKind) -> Error {
        Error::new(kind)
    }
}
impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.inner, f)
    }
}
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The type of error that occurred.
///
/// As a library consumer, detailed errors about what specific part of the MIDI protocol was
/// violated are not very useful.
/// For this reason, there is a single broad class of errors, and specific error info is provided
/// as a non-normative string literal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The input bytes do not form the expected MIDI message.
    Invalid(&'static str),
}
impl ErrorKind {
    /// Get the informative message on what exact part of the MIDI protocol was not respected.
    #[inline]
    pub fn message(&self) -> &'static str {
        match *self {
            ErrorKind::Invalid(msg) => msg,
        }
    }
}
impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Invalid(msg) => write!(f, "invalid midi: {}", msg),
        }
    }
}

macro_rules! err_invalid {
    ($msg:expr) => {{
        const ERR_KIND: &'static ErrorKind = &ErrorKind::Invalid($msg);
        ERR_KIND
    }};
}

/// The result type used by the fallible conversions in this crate.
pub type Result<T> = StdResult<T, Error>;
pub(crate) use core::result::Result as StdResult;
