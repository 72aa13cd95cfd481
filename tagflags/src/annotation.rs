/*!
The annotation grammar: compiles a compact, human-written string like
`-n, --num=NUMBER  specify number` into its spellings, value placeholders,
and help text.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::GrammarError;

// Matches "-a=ARG1, --long-opt=ARG2    help text", or any subset of it. The
// long spelling follows the short one directly or after a comma. Trailing
// content starting with a dash is swallowed, unless it's shaped like a long
// spelling.
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^",
        r"(?:(?P<short>-[a-zA-Z0-9-])(?:=(?P<arg1>[^,\s]+))?)?",
        r"(?:(?:\s*,\s*)?(?P<long>--[a-zA-Z0-9][a-zA-Z0-9-]+)(?:=(?P<arg2>[^,\s]+))?)?",
        r"(?:[,\s]+(?:(?P<help>[^-\s].+)|-(?:[^-].*)?|--(?:[^a-zA-Z0-9].*)?))?",
        r"$",
    ))
    .expect("static regex must compile")
});

/**
The compiled form of a single annotation. Every part is optional as far as
the grammar is concerned; whether at least one spelling is present is checked
when the annotation is turned into an
[`OptionDescriptor`][crate::descriptor::OptionDescriptor].

All of the parts borrow from the annotation string itself.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotation<'a> {
    /// The short spelling, dash included, such as `-n`
    pub short: Option<&'a str>,

    /// The value placeholder attached to the short spelling (`-n=NUM`)
    pub short_placeholder: Option<&'a str>,

    /// The long spelling, dashes included, such as `--num`
    pub long: Option<&'a str>,

    /// The value placeholder attached to the long spelling (`--num=NUM`)
    pub long_placeholder: Option<&'a str>,

    /// Free help text following the spellings
    pub help: Option<&'a str>,
}

impl<'a> Annotation<'a> {
    /// Compile an annotation. Fails only if the string doesn't match the
    /// grammar at all; absent parts are `None`.
    pub fn compile(raw: &'a str) -> Result<Self, GrammarError> {
        let captures = ANNOTATION.captures(raw).ok_or_else(|| GrammarError {
            raw: raw.to_owned(),
        })?;

        let group = |name| {
            captures
                .name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };

        Ok(Self {
            short: group("short"),
            short_placeholder: group("arg1"),
            long: group("long"),
            long_placeholder: group("arg2"),
            help: group("help"),
        })
    }

    /// An option takes a value if either of its spellings names a
    /// placeholder.
    #[inline]
    #[must_use]
    pub fn takes_value(&self) -> bool {
        self.short_placeholder.is_some() || self.long_placeholder.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Annotation;

    fn compile(raw: &str) -> Annotation<'_> {
        Annotation::compile(raw).unwrap_or_else(|err| panic!("{err}"))
    }

    #[test]
    fn short() {
        let annotation = compile("-q");
        assert_eq!(annotation.short, Some("-q"));
        assert_eq!(annotation.long, None);
        assert!(!annotation.takes_value());
    }

    #[test]
    fn long() {
        let annotation = compile("--quiet");
        assert_eq!(annotation.short, None);
        assert_eq!(annotation.long, Some("--quiet"));
    }

    #[test]
    fn short_and_long() {
        let annotation = compile("-q, --quiet");
        assert_eq!(annotation.short, Some("-q"));
        assert_eq!(annotation.long, Some("--quiet"));
        assert_eq!(annotation.help, None);
    }

    #[test]
    fn short_directly_followed_by_long() {
        for raw in ["-q--quiet", "-q,--quiet", "-q ,--quiet", ", --quiet"] {
            let annotation = compile(raw);
            assert_eq!(annotation.long, Some("--quiet"), "{raw}");
        }
        assert_eq!(compile("-q--quiet").short, Some("-q"));
    }

    #[test]
    fn long_needs_a_comma_or_nothing_before_it() {
        for raw in ["-q --quiet", " --quiet"] {
            assert!(Annotation::compile(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn short_with_placeholder() {
        let annotation = compile("-n=NUM");
        assert_eq!(annotation.short, Some("-n"));
        assert_eq!(annotation.short_placeholder, Some("NUM"));
        assert!(annotation.takes_value());
    }

    #[test]
    fn long_with_placeholder() {
        let annotation = compile("--num=NUM");
        assert_eq!(annotation.long, Some("--num"));
        assert_eq!(annotation.long_placeholder, Some("NUM"));
        assert!(annotation.takes_value());
    }

    #[test]
    fn placeholder_on_one_spelling_only() {
        let annotation = compile("-n, --num=NUM");
        assert_eq!(annotation.short, Some("-n"));
        assert_eq!(annotation.short_placeholder, None);
        assert_eq!(annotation.long, Some("--num"));
        assert_eq!(annotation.long_placeholder, Some("NUM"));
        assert!(annotation.takes_value());
    }

    #[test]
    fn help_text() {
        assert_eq!(compile("-q help message").help, Some("help message"));
        assert_eq!(compile("--quiet help message").help, Some("help message"));
        assert_eq!(
            compile("-n=NUM help message"),
            Annotation {
                short: Some("-n"),
                short_placeholder: Some("NUM"),
                help: Some("help message"),
                ..Annotation::default()
            }
        );
        assert_eq!(
            compile("-n, --num=NUM help message"),
            Annotation {
                short: Some("-n"),
                short_placeholder: None,
                long: Some("--num"),
                long_placeholder: Some("NUM"),
                help: Some("help message"),
            }
        );
    }

    #[test]
    fn wide_help_column() {
        let annotation = compile("-v, --verbose           be more verbose (may be given multiple times)");
        assert_eq!(annotation.long, Some("--verbose"));
        assert_eq!(
            annotation.help,
            Some("be more verbose (may be given multiple times)")
        );
    }

    #[test]
    fn help_after_comma() {
        assert_eq!(compile("-q, suppress output").help, Some("suppress output"));
    }

    #[test]
    fn help_starting_with_dash_is_dropped() {
        let annotation = compile("-q, --quiet -- not help");
        assert_eq!(annotation.long, Some("--quiet"));
        assert_eq!(annotation.help, None);
    }

    #[test]
    fn dash_content_after_short_is_dropped() {
        for raw in ["-q -x", "-q -", "-q -- comment"] {
            assert_eq!(
                compile(raw),
                Annotation {
                    short: Some("-q"),
                    ..Annotation::default()
                },
                "{raw}"
            );
        }
    }

    #[test]
    fn dash_content_keeps_both_spellings() {
        let annotation = compile("-q, --quiet -x");
        assert_eq!(annotation.short, Some("-q"));
        assert_eq!(annotation.long, Some("--quiet"));
        assert_eq!(annotation.help, None);
    }

    #[test]
    fn one_character_help_is_an_error() {
        let err = Annotation::compile("-n, --num=NUMBER x").unwrap_err();
        assert_eq!(err.raw, "-n, --num=NUMBER x");

        assert!(Annotation::compile("-q x").is_err());
    }

    #[test]
    fn malformed_long_is_never_dropped() {
        for raw in ["-q, --q", "-q --quiet", "-q, --quiet --verbose"] {
            assert!(Annotation::compile(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn empty_annotation_matches_with_no_parts() {
        assert_eq!(compile(""), Annotation::default());
    }

    #[test]
    fn garbage_is_an_error() {
        let err = Annotation::compile("blurp").unwrap_err();
        assert_eq!(err.raw, "blurp");
    }

    #[test]
    fn single_char_long_is_an_error() {
        assert!(Annotation::compile("--x").is_err());
    }
}
