// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::config::Attribute;

/// Errors produced while parsing declarative carousel configuration.
///
/// The engine never fails on bad configuration: [`crate::CarouselConfig::set_attribute`]
/// applies the documented default for the affected field and returns the
/// error so hosts can surface it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The value does not start with a number.
    #[error("`{attribute}` expects a number, got {value:?}")]
    InvalidNumber {
        /// Attribute being parsed.
        attribute: Attribute,
        /// Raw attribute value.
        value: String,
    },
    /// The value parsed but is outside the accepted range.
    #[error("`{attribute}` value {value} is out of range")]
    OutOfRange {
        /// Attribute being parsed.
        attribute: Attribute,
        /// Parsed value.
        value: f64,
    },
    /// `peek-type` is neither `hard` nor `fade`.
    #[error("unknown peek type {0:?}, expected `hard` or `fade`")]
    InvalidPeekType(String),
    /// The attribute name is not recognized.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
}
