//! Interactive terminal form.

mod form;
mod input;

pub use form::run;
