use crate::error::OrderError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Total number of pages in the document. Always positive and a multiple of 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageCount(u32);

impl PageCount {
    pub const MULTIPLE: u32 = 4;

    pub fn new(value: i64) -> Result<Self, OrderError> {
        if value <= 0 {
            return Err(OrderError::NotPositive(value));
        }
        if value % i64::from(Self::MULTIPLE) != 0 {
            return Err(OrderError::NotMultipleOfFour(value));
        }
        let pages = u32::try_from(value).map_err(|_| OrderError::TooLarge {
            got: value,
            max: u32::MAX,
        })?;
        Ok(Self(pages))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for PageCount {
    type Error = OrderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for PageCount {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| OrderError::Parse(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses user input and applies the configured upper bound.
pub fn parse_page_count(raw: &str, max_pages: u32) -> Result<PageCount, OrderError> {
    let pages: PageCount = raw.parse()?;
    if pages.get() > max_pages {
        return Err(OrderError::TooLarge {
            got: i64::from(pages.get()),
            max: max_pages,
        });
    }
    Ok(pages)
}
