#![no_std]

/*!
Low-level scanning of command-line tokens. Takes care of distinguishing
positionals, inline `--option=value` pairs, standalone options, clusters of
short options, and the `--` terminator. No descriptor lookup or type handling
happens here; usually this is too low level to use directly, and
[`tagflags`](https://docs.rs/tagflags) drives it for you.
*/

mod populated_str;

use populated_str::PopulatedStr;

/**
The [`ArgumentsParser`] operates by passing each token it classifies into a
[`Visitor`], to be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// A positional parameter. Includes the empty string and everything
    /// after a `--` terminator.
    fn visit_positional(self, argument: &'arg str) -> Self::Value;

    /// An option that definitely has a value, because it was given as
    /// `--option=value` or `-o=value`. `option` includes its dashes.
    fn visit_option_with_value(self, option: &'arg str, value: &'arg str) -> Self::Value;

    /// A standalone option or flag, such as `--option` or `-o`. `option` is
    /// the whole token, dashes included.
    fn visit_option(self, option: &'arg str, value: impl ArgAccess<'arg>) -> Self::Value;

    /// A single short option from a cluster like `-abc`. `cluster` is the
    /// whole token, for error reporting.
    fn visit_clustered(
        self,
        option: char,
        cluster: &'arg str,
        value: impl ArgAccess<'arg>,
    ) -> Self::Value;
}

/// The reason an [`ArgAccess`] couldn't produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValue {
    /// The command line ran out of tokens.
    Exhausted,

    /// The option is in the middle of a short cluster; only the final
    /// option of a cluster can take a value.
    InsideCluster,
}

/**
[`ArgAccess`] allows a visitor to decide if a given option needs a value,
based on the identity of the option.

Consider `--file foo`. Is this a pair of parameters (the flag `--file` and
the positional parameter `foo`) or a single option that takes a value? The
[`ArgumentsParser`] can't independently classify it, so a visitor requests a
value via this trait only for options that need them.
*/
pub trait ArgAccess<'arg>: Sized {
    /**
    Get the value for this option. This should only be called by options
    that need it; flags should simply ignore it, so that the next token is
    classified on its own.

    The value is the next token, taken wholesale: even `--` or something
    shaped like an option is returned as-is.
    */
    fn take(self) -> Result<&'arg str, MissingValue>;
}

#[derive(Debug, Clone)]
enum State<'arg> {
    Ready,
    PositionalOnly,
    ClusterInProgress {
        cluster: &'arg str,
        rest: &'arg PopulatedStr,
    },
}

/**
An `ArgumentsParser` is the main entry point into `tagflags_parser`. It
classifies one token in each call to [`next_arg`][ArgumentsParser::next_arg],
sending it to the given [`Visitor`].

It operates entirely on borrowed data; the ubiquitous `'arg` lifetime refers
to the borrowed command line.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<'arg, I> {
    state: State<'arg>,
    args: I,
}

impl<'arg, I> ArgumentsParser<'arg, I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`ArgumentsParser`] from an iterator of tokens. This list
    should *exclude* the name of the program, which is commonly passed as the
    first argument.
     */
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            state: State::Ready,
            args: args.into_iter(),
        }
    }

    /// True once a `--` terminator has been seen.
    #[inline]
    #[must_use]
    pub fn is_positional_only(&self) -> bool {
        matches!(self.state, State::PositionalOnly)
    }

    /// Put `self` into a `PositionalOnly` state, then process a positional
    /// argument
    #[inline]
    fn positional_only_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        debug_assert!(!matches!(self.state, State::ClusterInProgress { .. }));

        self.state = State::PositionalOnly;
        self.args.next().map(|arg| visitor.visit_positional(arg))
    }

    /// Put `self` into a `Ready` state, then return a StandardArgAccess
    #[inline]
    fn standard_arg(&mut self) -> StandardArgAccess<'_, I> {
        debug_assert!(!matches!(self.state, State::PositionalOnly));

        self.state = State::Ready;
        StandardArgAccess {
            args: &mut self.args,
        }
    }

    /// Handle the next short option of a cluster. The last option of the
    /// cluster may take the following token as its value; the others can't
    /// take a value at all.
    #[inline]
    fn handle_clustered<V>(
        &mut self,
        cluster: &'arg str,
        rest: &'arg PopulatedStr,
        visitor: V,
    ) -> V::Value
    where
        V: Visitor<'arg>,
    {
        let (option, rest) = rest.split_first();

        match PopulatedStr::new(rest) {
            None => visitor.visit_clustered(option, cluster, self.standard_arg()),
            Some(rest) => {
                self.state = State::ClusterInProgress { cluster, rest };
                visitor.visit_clustered(option, cluster, ClusterArgAccess)
            }
        }
    }

    /// Classify the next token and send it to `visitor`. Returns `None` once
    /// the tokens are exhausted.
    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        match self.state {
            State::Ready => match self.args.next()? {
                "--" => self.positional_only_arg(visitor),
                argument => Some(match argument.as_bytes() {
                    [] => visitor.visit_positional(argument),
                    [b'-', ..] => match split_once(argument, b'=') {
                        Some((option, value)) => visitor.visit_option_with_value(option, value),
                        None => match argument.as_bytes() {
                            [b'-', second, _, ..] if *second != b'-' => {
                                match PopulatedStr::new(&argument[1..]) {
                                    Some(rest) => self.handle_clustered(argument, rest, visitor),
                                    None => visitor.visit_option(argument, self.standard_arg()),
                                }
                            }
                            _ => visitor.visit_option(argument, self.standard_arg()),
                        },
                    },
                    _ => visitor.visit_positional(argument),
                }),
            },
            State::PositionalOnly => self.positional_only_arg(visitor),
            State::ClusterInProgress { cluster, rest } => {
                Some(self.handle_clustered(cluster, rest, visitor))
            }
        }
    }
}

/// ArgAccess implementation that gets the next token from the list.
struct StandardArgAccess<'a, I> {
    args: &'a mut I,
}

impl<'arg, I> ArgAccess<'arg> for StandardArgAccess<'_, I>
where
    I: Iterator<Item = &'arg str>,
{
    fn take(self) -> Result<&'arg str, MissingValue> {
        self.args.next().ok_or(MissingValue::Exhausted)
    }
}

/// ArgAccess implementation for a short option that isn't the last one in
/// its cluster.
struct ClusterArgAccess;

impl<'arg> ArgAccess<'arg> for ClusterArgAccess {
    fn take(self) -> Result<&'arg str, MissingValue> {
        Err(MissingValue::InsideCluster)
    }
}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // `delimiter` is ascii, so both halves are on char boundaries
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{format, vec::Vec};

    use super::{ArgAccess, ArgumentsParser, MissingValue, Visitor};

    #[derive(Debug, PartialEq, Eq)]
    enum Event<'arg> {
        Positional(&'arg str),
        WithValue(&'arg str, &'arg str),
        Option(&'arg str, Option<Result<&'arg str, MissingValue>>),
        Clustered(char, &'arg str, Option<Result<&'arg str, MissingValue>>),
    }

    /// Records everything it visits. Options named in `valued` take a value.
    struct Recorder {
        valued: &'static [&'static str],
    }

    impl<'arg> Visitor<'arg> for &Recorder {
        type Value = Event<'arg>;

        fn visit_positional(self, argument: &'arg str) -> Event<'arg> {
            Event::Positional(argument)
        }

        fn visit_option_with_value(self, option: &'arg str, value: &'arg str) -> Event<'arg> {
            Event::WithValue(option, value)
        }

        fn visit_option(self, option: &'arg str, value: impl ArgAccess<'arg>) -> Event<'arg> {
            let value = self.valued.iter().any(|v| *v == option).then(|| value.take());
            Event::Option(option, value)
        }

        fn visit_clustered(
            self,
            option: char,
            cluster: &'arg str,
            value: impl ArgAccess<'arg>,
        ) -> Event<'arg> {
            let spelled = format!("-{option}");
            let value = self.valued.iter().any(|v| *v == spelled).then(|| value.take());
            Event::Clustered(option, cluster, value)
        }
    }

    fn scan<'arg>(valued: &'static [&'static str], args: &[&'arg str]) -> Vec<Event<'arg>> {
        let recorder = Recorder { valued };
        let mut parser = ArgumentsParser::new(args.iter().copied());
        let mut events = Vec::new();

        while let Some(event) = parser.next_arg(&recorder) {
            events.push(event);
        }

        events
    }

    #[test]
    fn positionals_pass_through() {
        assert_eq!(
            scan(&[], &["foo", "", "bar"]),
            [
                Event::Positional("foo"),
                Event::Positional(""),
                Event::Positional("bar"),
            ]
        );
    }

    #[test]
    fn terminator_makes_everything_positional() {
        let mut parser = ArgumentsParser::new(["--", "-q", "--", "--num=3"]);
        let recorder = Recorder { valued: &[] };

        assert!(!parser.is_positional_only());
        assert_eq!(parser.next_arg(&recorder), Some(Event::Positional("-q")));
        assert!(parser.is_positional_only());
        assert_eq!(parser.next_arg(&recorder), Some(Event::Positional("--")));
        assert_eq!(parser.next_arg(&recorder), Some(Event::Positional("--num=3")));
        assert_eq!(parser.next_arg(&recorder), None);
    }

    #[test]
    fn inline_values_split_on_first_equals() {
        assert_eq!(
            scan(&[], &["--num=a=b", "-n=", "-qv=1"]),
            [
                Event::WithValue("--num", "a=b"),
                Event::WithValue("-n", ""),
                Event::WithValue("-qv", "1"),
            ]
        );
    }

    #[test]
    fn standalone_options_take_the_next_token_wholesale() {
        assert_eq!(
            scan(&["--file", "-f"], &["--file", "--", "-f", "-q", "-", "--x"]),
            [
                Event::Option("--file", Some(Ok("--"))),
                Event::Option("-f", Some(Ok("-q"))),
                Event::Option("-", None),
                Event::Option("--x", None),
            ]
        );
    }

    #[test]
    fn missing_value_at_end_of_input() {
        assert_eq!(
            scan(&["--file"], &["--file"]),
            [Event::Option("--file", Some(Err(MissingValue::Exhausted)))]
        );
    }

    #[test]
    fn clusters_are_split_into_short_options() {
        assert_eq!(
            scan(&["-n"], &["-qvn", "5", "rest"]),
            [
                Event::Clustered('q', "-qvn", None),
                Event::Clustered('v', "-qvn", None),
                Event::Clustered('n', "-qvn", Some(Ok("5"))),
                Event::Positional("rest"),
            ]
        );
    }

    #[test]
    fn valued_option_inside_cluster_gets_no_value() {
        assert_eq!(
            scan(&["-n"], &["-nq"])[0],
            Event::Clustered('n', "-nq", Some(Err(MissingValue::InsideCluster)))
        );
    }
}
