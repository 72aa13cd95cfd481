/*!
The descriptor table: every option of a bound record, compiled from its
field annotations, with an index from spelling to option.
 */

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    marker::PhantomData,
};

use tracing::debug;

use crate::{
    annotation::Annotation,
    descriptor::{OptionDescriptor, Tags},
    errors::{DefinitionError, ParseError},
    record::{FieldDecl, Flags},
    scan,
    value::ValueKind,
};

/**
The compiled options of a bound record `T`, in declaration order, plus a
lookup from each spelling (`-x` or `--xyz`) to its option.

The table is built once from a record's declaration and isn't modified
afterwards. Building it is where malformed annotations are caught; see
[`DefinitionError`]. A table only fills records of the type it was built
for:

```compile_fail
use tagflags::{Flags, OptionTable};

#[derive(Flags, Default)]
struct Quiet {
    #[flags("-q, --quiet")]
    quiet: bool,
}

#[derive(Flags, Default)]
struct Count {
    #[flags("-n, --num=N")]
    num: u32,
}

let table = OptionTable::<Quiet>::of().unwrap();
let mut count = Count::default();
let _ = table.parse(&["prog", "-n", "1"], &mut count);
```
 */
pub struct OptionTable<'a, T: ?Sized> {
    descriptors: Vec<OptionDescriptor<'a>>,
    spellings: HashMap<&'a str, usize>,
    record: PhantomData<fn(&mut T)>,
}

impl<T: ?Sized> fmt::Debug for OptionTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionTable")
            .field("descriptors", &self.descriptors)
            .field("spellings", &self.spellings)
            .finish()
    }
}

impl<T: ?Sized> Clone for OptionTable<'_, T> {
    fn clone(&self) -> Self {
        Self {
            descriptors: self.descriptors.clone(),
            spellings: self.spellings.clone(),
            record: PhantomData,
        }
    }
}

impl<T: Flags + ?Sized> OptionTable<'static, T> {
    /// Build the table for the bound record type `T`.
    #[inline]
    pub fn of() -> Result<Self, DefinitionError> {
        Self::build(T::FIELDS)
    }
}

impl<'a, T: ?Sized> OptionTable<'a, T> {
    /// Build a table from field declarations. The position of each
    /// declaration in `fields` is the field index its option writes to.
    pub(crate) fn build(fields: &'a [FieldDecl]) -> Result<Self, DefinitionError> {
        let mut descriptors: Vec<OptionDescriptor<'a>> = Vec::with_capacity(fields.len());
        let mut spellings: HashMap<&'a str, usize> = HashMap::with_capacity(fields.len() * 2);

        for (index, decl) in fields.iter().enumerate() {
            let annotation = Annotation::compile(decl.annotation).map_err(|source| {
                DefinitionError::Grammar {
                    field: decl.name,
                    source,
                }
            })?;

            let tags = Tags::new(annotation.short, annotation.long).ok_or(
                DefinitionError::NoSpelling {
                    field: decl.name,
                    annotation: decl.annotation,
                },
            )?;

            if decl.kind == ValueKind::Text && !annotation.takes_value() {
                return Err(DefinitionError::TextWithoutValue {
                    field: decl.name,
                    option: tags.preferred().to_owned(),
                });
            }

            let descriptor = OptionDescriptor {
                tags,
                short_placeholder: annotation.short_placeholder,
                long_placeholder: annotation.long_placeholder,
                help: annotation.help,
                field: index,
                kind: decl.kind,
            };

            for spelling in [tags.short(), tags.long()].into_iter().flatten() {
                match spellings.entry(spelling) {
                    Entry::Occupied(entry) => {
                        let first = descriptors[*entry.get()].field;
                        return Err(DefinitionError::DuplicateSpelling {
                            spelling: spelling.to_owned(),
                            first: fields[first].name,
                            second: decl.name,
                        });
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(descriptors.len());
                    }
                }
            }

            debug!(
                field = decl.name,
                option = %tags,
                takes_value = descriptor.takes_value(),
                kind = ?decl.kind,
                "registered option"
            );

            descriptors.push(descriptor);
        }

        Ok(Self {
            descriptors,
            spellings,
            record: PhantomData,
        })
    }

    /// All options, in declaration order
    #[inline]
    #[must_use]
    pub fn descriptors(&self) -> &[OptionDescriptor<'a>] {
        &self.descriptors
    }

    /// Find an option by its exact spelling, dashes included
    #[inline]
    #[must_use]
    pub fn lookup(&self, spelling: &str) -> Option<(usize, &OptionDescriptor<'a>)> {
        self.spellings
            .get(spelling)
            .map(|&index| (index, &self.descriptors[index]))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<T: Flags + ?Sized> OptionTable<'_, T> {
    /**
    Scan a command line into `record`, returning the positional arguments.
    `argv[0]` is the program name and is skipped.

    On failure, scanning stops at the offending token; the error carries
    the positional arguments collected so far, and `record` keeps whatever
    was written to it before that point.
    */
    pub fn parse<S>(&self, argv: &[S], record: &mut T) -> Result<Vec<String>, ParseError>
    where
        S: AsRef<str>,
    {
        let args = argv.get(1..).unwrap_or(&[]);
        scan::scan(self, args.iter().map(AsRef::as_ref), record)
    }
}
