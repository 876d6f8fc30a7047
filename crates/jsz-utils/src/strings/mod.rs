//! String helpers: case conversion and email shape validation.

mod case;
mod email;

pub use case::{lower_case, upper_case};
pub use email::is_email;
