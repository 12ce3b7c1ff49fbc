//! Argument validation errors.
//!
//! Every failure of a bufxor operation is an invalid argument: either a value
//! that cannot be viewed as a byte buffer with the needed capability, or a
//! buffer too short for (or overlapping) the output. Validation always runs
//! before the first write, so an error means the output is untouched.

use core::fmt;

/// Position of an argument in an operation's parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Out,
    In,
    /// Second operand of the three-operand form.
    B,
}

impl Arg {
    pub fn name(self) -> &'static str {
        match self {
            Arg::Out => "out",
            Arg::In => "in",
            Arg::B => "b",
        }
    }

    /// Position `0` is `out`; positions past the last operand map to `B`.
    pub fn from_position(position: usize) -> Arg {
        match position {
            0 => Arg::Out,
            1 => Arg::In,
            _ => Arg::B,
        }
    }
}

/// Error classes raised to the host. There is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The argument does not expose a contiguous byte buffer with the
    /// requested capability.
    NotABuffer { arg: Arg },
    /// An input operand is shorter than `out`.
    InputTooShort { arg: Arg, out_len: usize, in_len: usize },
    /// An input operand partially overlaps `out`.
    Overlap { arg: Arg },
    /// The host passed the wrong number of arguments.
    ArgCount { expected: usize, got: usize },
}

impl InvalidArgument {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// The offending argument. For an argument count mismatch, the first
    /// missing or first surplus position.
    pub fn arg(&self) -> Arg {
        match *self {
            InvalidArgument::NotABuffer { arg }
            | InvalidArgument::InputTooShort { arg, .. }
            | InvalidArgument::Overlap { arg } => arg,
            InvalidArgument::ArgCount { expected, got } => {
                if got < expected {
                    Arg::from_position(got)
                } else {
                    Arg::from_position(expected)
                }
            }
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NotABuffer { arg } => {
                write!(f, "argument '{}' is not a byte buffer", arg.name())
            }
            InvalidArgument::InputTooShort { arg, out_len, in_len } => write!(
                f,
                "argument '{}' has {} bytes, need at least {}",
                arg.name(),
                in_len,
                out_len
            ),
            InvalidArgument::Overlap { arg } => {
                write!(f, "argument '{}' overlaps 'out'", arg.name())
            }
            InvalidArgument::ArgCount { expected, got } => {
                write!(f, "expected {} arguments, got {}", expected, got)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_argument() {
        let e = InvalidArgument::InputTooShort { arg: Arg::In, out_len: 3, in_len: 2 };
        assert_eq!(e.to_string(), "argument 'in' has 2 bytes, need at least 3");
        assert_eq!(
            InvalidArgument::NotABuffer { arg: Arg::Out }.to_string(),
            "argument 'out' is not a byte buffer"
        );
    }

    #[test]
    fn test_single_kind() {
        for e in [
            InvalidArgument::NotABuffer { arg: Arg::In },
            InvalidArgument::InputTooShort { arg: Arg::B, out_len: 1, in_len: 0 },
            InvalidArgument::Overlap { arg: Arg::In },
        ] {
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(InvalidArgument::Overlap { arg: Arg::B }.arg(), Arg::B);
        assert_eq!(InvalidArgument::ArgCount { expected: 2, got: 1 }.arg(), Arg::In);
        assert_eq!(InvalidArgument::ArgCount { expected: 2, got: 3 }.kind(), ErrorKind::InvalidArgument);
    }
}
