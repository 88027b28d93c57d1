//! Field validation for sparkform.
//!
//! A [`Validator`] is a pure function from the field's text to
//! `Result<(), ValidationError>`. Validators compose with
//! [`Validator::group`]: rules run in order and the first failure wins.
//!
//! # Example
//!
//! ```
//! use sparkform::validation::{ValidationMessages, Validator};
//!
//! let messages = ValidationMessages::default();
//! let username = Validator::group([
//!     Validator::not_empty(&messages),
//!     Validator::min_length(3, &messages),
//! ]);
//!
//! assert!(username.validate("").is_err());
//! assert_eq!(
//!     username.validate("ab").unwrap_err().message(),
//!     "Min length must be 3"
//! );
//! assert!(username.validate("abc").is_ok());
//! ```

mod error;
mod messages;
mod validator;

pub use error::{ValidationError, ValidationErrorKind};
pub use messages::ValidationMessages;
pub use validator::Validator;
