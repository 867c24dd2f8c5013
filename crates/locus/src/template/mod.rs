//! Parameter interpolation for translation texts.
//!
//! Two independent syntaxes are supported:
//! - named placeholders `%{name}` and `%<name>.fmt`, filled from a [`Params`]
//!   map by [`interpolate`]
//! - positional placeholders `{N}` and `{}`, filled from a list of
//!   pre-rendered strings by [`interpolate_positional`]
//!
//! [`Params`]: crate::Params

mod named;
mod positional;

pub use named::interpolate;
pub use positional::interpolate_positional;
