//! Requested slide count.
use crate::common::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of content slides a caller may request.
///
/// Only whole numbers from [`SlideCount::MIN`] to [`SlideCount::MAX`] are
/// accepted; anything else is rejected before any generation work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideCount(u8);

impl SlideCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Parse user input, ignoring surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deckhand::pipeline::SlideCount;
    ///
    /// assert_eq!(SlideCount::parse(" 7 ").unwrap().get(), 7);
    /// assert!(SlideCount::parse("0").is_err());
    /// assert!(SlideCount::parse("21").is_err());
    /// assert!(SlideCount::parse("abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let value: u32 = trimmed.parse().map_err(|_| Error::InvalidSlideCount {
            input: input.to_string(),
            reason: "not a whole number".to_string(),
        })?;
        Self::new(value).ok_or_else(|| Error::InvalidSlideCount {
            input: input.to_string(),
            reason: format!("must be between {} and {}", Self::MIN, Self::MAX),
        })
    }

    /// Build a count from a number, `None` when out of range.
    pub fn new(value: u32) -> Option<Self> {
        (u32::from(Self::MIN)..=u32::from(Self::MAX))
            .contains(&value)
            .then_some(Self(value as u8))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl FromStr for SlideCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SlideCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
