use crate::value::{Slot, ValueKind};

/// The declaration of one annotated field of a bound record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// The field's name, for error messages
    pub name: &'static str,

    /// The option annotation, like `-n, --num=NUMBER  specify number`
    pub annotation: &'static str,

    /// The field's semantic type
    pub kind: ValueKind,
}

impl FieldDecl {
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, annotation: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            annotation,
            kind,
        }
    }
}

/**
A type whose fields can be filled in from command-line options.

Usually this is derived with [`#[derive(Flags)]`][derive@crate::Flags]:

```
use tagflags::Flags;

#[derive(Flags, Default)]
struct Options {
    #[flags("-q, --quiet         suppress output")]
    quiet: bool,

    #[flags("-n, --num=NUMBER    specify number")]
    num: i64,

    // Not annotated, so not an option
    cache: Vec<String>,
}
```

Implementing it by hand is also fine: `FIELDS` lists the annotated fields in
declaration order, and `slot_mut` hands out the field at a given position in
that list.
*/
pub trait Flags {
    /// The annotated fields, in declaration order
    const FIELDS: &'static [FieldDecl];

    /// Mutable access to the field at `field`, which is an index into
    /// [`FIELDS`][Flags::FIELDS]. May panic for indexes out of that range.
    fn slot_mut(&mut self, field: usize) -> Slot<'_>;
}
