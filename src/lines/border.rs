use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Position of a line relative to the two ends of its diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderClass {
    /// Touches neither end.
    Interior,
    /// Starts at the first cell only.
    LeftBorder,
    /// Ends at the last cell only.
    RightBorder,
    /// Covers the whole diagonal.
    BothBorder,
}

/// Classify a 1-indexed inclusive run `(start, end)` on a diagonal of length `len`.
///
/// # Example
/// ```
/// use rqa_border::lines::{BorderClass, classify};
///
/// assert_eq!(classify(1, 4, 4), BorderClass::BothBorder);
/// assert_eq!(classify(2, 3, 8), BorderClass::Interior);
/// assert_eq!(classify(5, 8, 8), BorderClass::RightBorder);
/// ```
pub fn classify(start: usize, end: usize, len: usize) -> BorderClass {
    match (start == 1, end == len) {
        (true, true) => BorderClass::BothBorder,
        (true, false) => BorderClass::LeftBorder,
        (false, true) => BorderClass::RightBorder,
        (false, false) => BorderClass::Interior,
    }
}

/// Which lines count as border lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderMode {
    /// Only lines touching both ends of their diagonal.
    #[default]
    Normal,
    /// Lines touching at least one end.
    Semi,
}

impl BorderMode {
    /// Whether a line of the given class is a border line in this mode.
    pub fn is_border(self, class: BorderClass) -> bool {
        match self {
            BorderMode::Normal => class == BorderClass::BothBorder,
            BorderMode::Semi => class != BorderClass::Interior,
        }
    }

    /// Parse a mode name, falling back to [`BorderMode::Normal`] with a
    /// warning when the name is not recognised.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown border mode `{name}`, falling back to `normal`");
            BorderMode::Normal
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BorderMode::Normal => "normal",
            BorderMode::Semi => "semi",
        }
    }
}

impl FromStr for BorderMode {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "normal" => Ok(BorderMode::Normal),
            "semi" => Ok(BorderMode::Semi),
            _ => Err(Error::InvalidParameter {
                name: "border_mode",
                value: name.to_string(),
                reason: "expected `normal` or `semi`".to_string(),
            }),
        }
    }
}

impl fmt::Display for BorderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
