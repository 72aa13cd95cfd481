/*!
Command-line options bound directly onto a struct, described by one compact
annotation per field.

Each annotated field names its short and/or long spelling, whether it takes
a value, and its help text, all in a single string:

```
use tagflags::Flags;

#[derive(Flags, Default, Debug)]
struct Options {
    #[flags("-q, --quiet             suppress output")]
    quiet: bool,

    #[flags("-v, --verbose           be more verbose (may be given multiple times)")]
    verbose: u32,

    #[flags("-n, --num=NUMBER        specify number")]
    num: i64,

    #[flags("-f, --file=FILE         specify filename")]
    file: String,
}

let argv = ["prog", "-vvq", "input.txt", "--num=10", "-f", "out.txt"];
let mut options = Options::default();
let args = tagflags::parse(&argv, &mut options)?;

assert_eq!(args, ["input.txt"]);
assert!(options.quiet);
assert_eq!(options.verbose, 2);
assert_eq!(options.num, 10);
assert_eq!(options.file, "out.txt");
# Ok::<(), tagflags::Error>(())
```

Scanning follows the usual conventions: short options can be clustered
(`-vvq`), values can be given inline (`--num=10`) or as the next argument
(`-f out.txt`), options and positional arguments can be freely interleaved,
and `--` ends option processing. Booleans may be repeated; integers given
without a value count how often they appear. An option that takes a value
may be given only once, through any of its spellings.

There are two kinds of errors: a [`DefinitionError`] means an annotation is
malformed, and a [`ParseError`] means the command line is. [`parse`] reports
either; split the steps with [`OptionTable::of`] and [`OptionTable::parse`]
to handle them separately, or to reuse one table for several command lines.
*/

pub mod annotation;
pub mod arguments;
pub mod descriptor;
pub mod errors;
pub mod help;
pub mod record;
mod scan;
pub mod table;
pub mod value;

pub use tagflags_derive::Flags;

pub use crate::{
    arguments::LoadedArguments,
    descriptor::{OptionDescriptor, Tags},
    errors::{DefinitionError, Error, ErrorKind, GrammarError, HelpError, ParseError},
    help::{HelpLayout, print_help, write_help},
    record::{FieldDecl, Flags},
    table::OptionTable,
    value::{FlagValue, Slot, ValueKind},
};

/**
Scan `argv` into `record`, returning the positional arguments. `argv[0]` is
the program name and is skipped.

This builds the record's [`OptionTable`] first, so a malformed annotation is
reported as [`Error::Definition`] before any argument is looked at.
 */
pub fn parse<T, S>(argv: &[S], record: &mut T) -> Result<Vec<String>, Error>
where
    T: Flags + ?Sized,
    S: AsRef<str>,
{
    let table = OptionTable::<T>::of()?;
    Ok(table.parse(argv, record)?)
}
