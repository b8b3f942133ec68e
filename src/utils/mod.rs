//! Request extraction helpers.

pub mod validate;
