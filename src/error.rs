//! When a ranged magnitude operation or a digit string is rejected.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::Box;
use core::result;

/// This type represents all possible errors that can occur when calling into
/// the ranged magnitude operations or when building a [`BigSigned`] from a
/// digit string.
///
/// The scalar mutators on [`BigSigned`] never fail.
///
/// [`BigSigned`]: crate::BigSigned
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigsigned::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Name of the operation that rejected its input, for example
    /// `"multiply_ranges"`.
    pub fn operation(&self) -> &'static str {
        self.err.operation
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Window` - an operand window does not fit its array
    /// - `Category::Capacity` - the result buffer is too small
    /// - `Category::Ordering` - a subtraction whose subtrahend is larger
    /// - `Category::Syntax` - a digit string that is not a decimal integer
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::WindowStartAfterEnd { .. } | ErrorCode::WindowOutOfBounds { .. } => {
                Category::Window
            }
            ErrorCode::ResultTooSmall { .. } => Category::Capacity,
            ErrorCode::SubtrahendTooLarge => Category::Ordering,
            ErrorCode::EmptyDigits | ErrorCode::InvalidDigit { .. } => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by arguments that violate a
    /// precondition of a ranged magnitude operation.
    pub fn is_precondition(&self) -> bool {
        match self.classify() {
            Category::Window | Category::Capacity | Category::Ordering => true,
            Category::Syntax => false,
        }
    }

    /// Returns true if this error was caused by a malformed digit string.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }
}

/// Categorizes the cause of a `bigsigned::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// An operand window starts after it ends or reaches past its array.
    Window,

    /// The result buffer cannot hold every limb the operation writes.
    Capacity,

    /// A magnitude subtraction would go negative.
    Ordering,

    /// The input was not a decimal digit string.
    Syntax,
}

struct ErrorImpl {
    code: ErrorCode,
    operation: &'static str,
}

/// This type describes all possible errors that can occur in this crate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Window start index is greater than its inclusive end index.
    WindowStartAfterEnd {
        /// First limb of the window.
        start: usize,
        /// Last limb of the window.
        end: usize,
    },

    /// Window end index is outside of the backing array.
    WindowOutOfBounds {
        /// Last limb of the window.
        end: usize,
        /// Length of the backing array.
        len: usize,
    },

    /// Result buffer is shorter than the operation requires.
    ResultTooSmall {
        /// Minimum length of the result buffer.
        required: usize,
        /// Actual length of the result buffer.
        len: usize,
    },

    /// Subtraction of a larger magnitude from a smaller one.
    SubtrahendTooLarge,

    /// Digit string with no digits.
    EmptyDigits,

    /// Byte that is not an ASCII decimal digit.
    InvalidDigit {
        /// Byte offset into the input.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode, operation: &'static str) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, operation }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::WindowStartAfterEnd { start, end } => {
                write!(f, "window start {} is after window end {}", start, end)
            }
            ErrorCode::WindowOutOfBounds { end, len } => {
                write!(f, "window end {} is out of bounds for {} limbs", end, len)
            }
            ErrorCode::ResultTooSmall { required, len } => write!(
                f,
                "result buffer holds {} limbs, but {} are required",
                len, required
            ),
            ErrorCode::SubtrahendTooLarge => f.write_str("subtrahend is larger than minuend"),
            ErrorCode::EmptyDigits => f.write_str("no digits to parse"),
            ErrorCode::InvalidDigit { index, byte } => {
                write!(f, "invalid digit {:?} at index {}", byte as char, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} in `{}`", self.code, self.operation)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, operation: {:?})", self.err.code, self.err.operation)
    }
}
