// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single simple selectors.
//!
//! This module intentionally stays small: a selector is one predicate over a
//! single element (no combinators, no compound selectors, no pseudo-classes).
//! That is all the widgets need to locate their roots and markers.

use alloc::string::{String, ToString};
use core::fmt;

/// A parsed simple selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `*`: every element.
    Universal,
    /// `div`: elements with this tag name (ASCII case-insensitive).
    Tag(String),
    /// `.name`: elements whose `class` attribute contains `name`.
    Class(String),
    /// `#name`: elements whose `id` attribute equals `name`.
    Id(String),
    /// `[name]` or `[name=value]`.
    Attribute {
        /// Attribute name.
        name: String,
        /// Required value, if any.
        value: Option<String>,
    },
}

/// Why a selector string was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector was empty or only whitespace.
    Empty,
    /// The selector combines several simple selectors or uses a combinator.
    Unsupported(String),
    /// A name contained characters outside `[A-Za-z0-9_-]`.
    InvalidName(String),
    /// An attribute selector was missing its closing `]`.
    UnclosedBracket(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty selector"),
            Self::Unsupported(s) => write!(f, "unsupported selector {s:?}: only simple selectors are accepted"),
            Self::InvalidName(s) => write!(f, "invalid name in selector {s:?}"),
            Self::UnclosedBracket(s) => write!(f, "unclosed attribute selector {s:?}"),
        }
    }
}

impl core::error::Error for SelectorError {}

impl Selector {
    /// Parses a single simple selector.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }
        if s == "*" {
            return Ok(Self::Universal);
        }
        if let Some(rest) = s.strip_prefix('.') {
            return name(s, rest).map(|n| Self::Class(n.to_string()));
        }
        if let Some(rest) = s.strip_prefix('#') {
            return name(s, rest).map(|n| Self::Id(n.to_string()));
        }
        if let Some(rest) = s.strip_prefix('[') {
            let inner = rest
                .strip_suffix(']')
                .ok_or_else(|| SelectorError::UnclosedBracket(s.to_string()))?;
            return match inner.split_once('=') {
                None => name(s, inner.trim()).map(|n| Self::Attribute {
                    name: n.to_string(),
                    value: None,
                }),
                Some((attr, value)) => {
                    let attr = name(s, attr.trim())?;
                    Ok(Self::Attribute {
                        name: attr.to_string(),
                        value: Some(unquote(value.trim()).to_string()),
                    })
                }
            };
        }
        name(s, s).map(|n| Self::Tag(n.to_ascii_lowercase()))
    }

    /// Returns `true` if an element with `tag` and the given attribute lookup matches.
    pub fn matches<'a>(&self, tag: &str, attribute: impl Fn(&str) -> Option<&'a str>) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(t) => tag.eq_ignore_ascii_case(t),
            Self::Class(c) => attribute("class")
                .is_some_and(|classes| classes.split_ascii_whitespace().any(|x| x == c)),
            Self::Id(id) => attribute("id") == Some(id.as_str()),
            Self::Attribute { name, value: None } => attribute(name).is_some(),
            Self::Attribute {
                name,
                value: Some(v),
            } => attribute(name) == Some(v.as_str()),
        }
    }
}

fn name<'a>(selector: &str, candidate: &'a str) -> Result<&'a str, SelectorError> {
    if candidate.is_empty() {
        return Err(SelectorError::InvalidName(selector.to_string()));
    }
    if candidate
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '.' | '#' | '[' | ']' | ':' | '>' | '+' | '~' | ','))
    {
        return Err(SelectorError::Unsupported(selector.to_string()));
    }
    if !candidate
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SelectorError::InvalidName(selector.to_string()));
    }
    Ok(candidate)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
