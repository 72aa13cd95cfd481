use core::fmt::{self, Display};

use crate::value::ValueKind;

/// The set of spellings that identify a particular option (`-short`,
/// `--long`). Spellings include their dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tags<'a> {
    /// This option uses only a long spelling
    Long { long: &'a str },

    /// This option uses only a short spelling
    Short { short: &'a str },

    /// This option uses both a long and short spelling
    LongShort { long: &'a str, short: &'a str },
}

impl<'a> Tags<'a> {
    /// Assemble tags from optional spellings; `None` if both are absent.
    #[inline]
    #[must_use]
    pub const fn new(short: Option<&'a str>, long: Option<&'a str>) -> Option<Self> {
        match (short, long) {
            (None, None) => None,
            (Some(short), None) => Some(Tags::Short { short }),
            (None, Some(long)) => Some(Tags::Long { long }),
            (Some(short), Some(long)) => Some(Tags::LongShort { long, short }),
        }
    }

    /// Get the long spelling, if any
    #[inline]
    #[must_use]
    pub const fn long(&self) -> Option<&'a str> {
        match *self {
            Tags::Long { long } | Tags::LongShort { long, .. } => Some(long),
            Tags::Short { .. } => None,
        }
    }

    /// Get the short spelling, if any
    #[inline]
    #[must_use]
    pub const fn short(&self) -> Option<&'a str> {
        match *self {
            Tags::Short { short } | Tags::LongShort { short, .. } => Some(short),
            Tags::Long { .. } => None,
        }
    }

    /// The spelling to mention when only one fits: the long one if there is
    /// one.
    #[inline]
    #[must_use]
    pub const fn preferred(&self) -> &'a str {
        match *self {
            Tags::Long { long } | Tags::LongShort { long, .. } => long,
            Tags::Short { short } => short,
        }
    }
}

/// The combined spelling: `-n, --num`, or whichever half exists. Used in
/// error messages and help output alike.
impl Display for Tags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tags::Long { long } => f.write_str(long),
            Tags::Short { short } => f.write_str(short),
            Tags::LongShort { long, short } => write!(f, "{short}, {long}"),
        }
    }
}

/// A compiled option: its spellings, whether it takes a value, its help
/// text, and the field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor<'a> {
    pub(crate) tags: Tags<'a>,
    pub(crate) short_placeholder: Option<&'a str>,
    pub(crate) long_placeholder: Option<&'a str>,
    pub(crate) help: Option<&'a str>,
    pub(crate) field: usize,
    pub(crate) kind: ValueKind,
}

impl<'a> OptionDescriptor<'a> {
    #[inline]
    #[must_use]
    pub fn tags(&self) -> Tags<'a> {
        self.tags
    }

    #[inline]
    #[must_use]
    pub fn short_placeholder(&self) -> Option<&'a str> {
        self.short_placeholder
    }

    #[inline]
    #[must_use]
    pub fn long_placeholder(&self) -> Option<&'a str> {
        self.long_placeholder
    }

    /// The placeholder to show for this option's value; the long spelling's
    /// placeholder wins if both have one.
    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> Option<&'a str> {
        self.long_placeholder.or(self.short_placeholder)
    }

    /// True if either spelling carries a placeholder. In that case, both
    /// spellings require a value.
    #[inline]
    #[must_use]
    pub fn takes_value(&self) -> bool {
        self.short_placeholder.is_some() || self.long_placeholder.is_some()
    }

    #[inline]
    #[must_use]
    pub fn help(&self) -> Option<&'a str> {
        self.help
    }

    /// Index of the target field in the record's declaration
    #[inline]
    #[must_use]
    pub fn field(&self) -> usize {
        self.field
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::Tags;

    #[test]
    fn combined_spelling() {
        let both = Tags::new(Some("-n"), Some("--num")).unwrap();
        assert_eq!(both.to_string(), "-n, --num");
        assert_eq!(both.to_string(), both.to_string());
        assert_eq!(both.preferred(), "--num");

        let short = Tags::new(Some("-n"), None).unwrap();
        assert_eq!(short.to_string(), "-n");
        assert_eq!(short.preferred(), "-n");
        assert_eq!(short.long(), None);

        let long = Tags::new(None, Some("--num")).unwrap();
        assert_eq!(long.to_string(), "--num");
        assert_eq!(long.short(), None);

        assert_eq!(Tags::new(None, None), None);
    }
}
