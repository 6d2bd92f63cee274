//! calc - Interactive two-operand arithmetic calculator
//!
//! Reads two operands and an operator per cycle, prints a formatted result
//! line, and offers a retry-or-abort choice on invalid input.
//!
//! # Example
//!
//! ```rust
//! use calc::{Exit, Locale, Session, TokenReader};
//! use std::io::Cursor;
//!
//! let input = TokenReader::new(Cursor::new("-5 * 2\nq\n"));
//! let mut session = Session::new(input, Vec::new(), Locale::En).with_banner(false);
//!
//! assert_eq!(session.run().unwrap(), Exit::Quit);
//! let out = String::from_utf8(session.into_output()).unwrap();
//! assert!(out.contains("Result: (-5.0) * 2.0 = -10.00"));
//! ```
//!
//! # Operators
//!
//! | Symbol | Operation | Failure |
//! |--------|-----------|---------|
//! | `+` | addition | none (overflow gives infinity) |
//! | `-` | subtraction | none |
//! | `*` | multiplication | none |
//! | `/` | division | divisor exactly `0.0` |

pub mod error;
pub mod input;
pub mod messages;
pub mod number;
pub mod operation;
pub mod session;

// Re-exports for convenience
pub use error::{CalcError, Result};
pub use input::{is_quit, TokenReader, TokenSource};
pub use messages::{Locale, Messages, UnknownLocale};
pub use number::{format_operand, format_result, parse_number};
pub use operation::{Calculation, Operator};
pub use session::{Exit, Session, SessionStats};
