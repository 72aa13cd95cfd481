/*!
Value coercion: the types a bound field may have, how a textual value is
converted into them, and what happens when their option appears without a
value.
 */

use core::{fmt::Display, num::ParseIntError, str::FromStr};

/// The semantic type of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `bool`. Set to `true` when its option appears.
    Boolean,

    /// A signed integer. Counts the appearances of its option, or parses a
    /// value with an optional leading sign.
    Signed,

    /// An unsigned integer. Counts the appearances of its option, or parses
    /// a value without a sign.
    Unsigned,

    /// `String`. Always takes a value, stored verbatim.
    Text,
}

/// A textual value couldn't be converted to the field's type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ValueError {
    pub reason: String,
}

impl ValueError {
    fn new(reason: impl Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

/**
A type that can be the target of a command-line option.

Implemented for `bool`, the signed and unsigned integer types, and
[`String`]; those are the only kinds of options `tagflags` knows how to fill.
 */
#[diagnostic::on_unimplemented(
    message = "`{Self}` can't be bound to a command-line option",
    note = "supported field types are `bool`, signed and unsigned integers, and `String`"
)]
pub trait FlagValue {
    const KIND: ValueKind;

    /// The option appeared without a value. Booleans become `true`; integers
    /// count up.
    fn bump(&mut self);

    /// The option appeared with a value
    fn assign(&mut self, value: &str) -> Result<(), ValueError>;
}

impl FlagValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    #[inline]
    fn bump(&mut self) {
        *self = true;
    }

    fn assign(&mut self, value: &str) -> Result<(), ValueError> {
        *self = match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
            "0" | "f" | "F" | "FALSE" | "false" | "False" => false,
            _ => return Err(ValueError::new("expected true or false")),
        };

        Ok(())
    }
}

macro_rules! signed {
    ($($type:ident)*) => {
        $(
            impl FlagValue for $type {
                const KIND: ValueKind = ValueKind::Signed;

                #[inline]
                fn bump(&mut self) {
                    *self = self.saturating_add(1);
                }

                #[inline]
                fn assign(&mut self, value: &str) -> Result<(), ValueError> {
                    *self = parse_int(value)?;
                    Ok(())
                }
            }
        )*
    };
}

macro_rules! unsigned {
    ($($type:ident)*) => {
        $(
            impl FlagValue for $type {
                const KIND: ValueKind = ValueKind::Unsigned;

                #[inline]
                fn bump(&mut self) {
                    *self = self.saturating_add(1);
                }

                #[inline]
                fn assign(&mut self, value: &str) -> Result<(), ValueError> {
                    // `FromStr` for unsigned integers tolerates a `+`
                    if value.starts_with('+') {
                        return Err(ValueError::new("unsigned value can't have a sign"));
                    }

                    *self = parse_int(value)?;
                    Ok(())
                }
            }
        )*
    };
}

signed! { i8 i16 i32 i64 i128 isize }
unsigned! { u8 u16 u32 u64 u128 usize }

fn parse_int<T>(value: &str) -> Result<T, ValueError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(ValueError::new)
}

impl FlagValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn bump(&mut self) {
        // Text options without a placeholder are rejected when the table is
        // built, so this only happens through a hand-written table.
        tracing::warn!("text option given without a value; ignoring it");
    }

    #[inline]
    fn assign(&mut self, value: &str) -> Result<(), ValueError> {
        value.clone_into(self);
        Ok(())
    }
}

/// Object-safe counterpart of [`FlagValue`], so that differently-typed
/// fields can be handled uniformly by index.
trait DynFlagValue {
    fn bump(&mut self);
    fn assign(&mut self, value: &str) -> Result<(), ValueError>;
}

impl<T: FlagValue> DynFlagValue for T {
    #[inline]
    fn bump(&mut self) {
        FlagValue::bump(self)
    }

    #[inline]
    fn assign(&mut self, value: &str) -> Result<(), ValueError> {
        FlagValue::assign(self, value)
    }
}

/**
Mutable access to one field of a bound record. Returned by
[`Flags::slot_mut`][crate::Flags::slot_mut]; the `#[derive(Flags)]` macro
creates these with [`Slot::new`].
 */
pub struct Slot<'a> {
    kind: ValueKind,
    value: &'a mut dyn DynFlagValue,
}

impl<'a> Slot<'a> {
    #[inline]
    #[must_use]
    pub fn new<T: FlagValue>(value: &'a mut T) -> Self {
        Self {
            kind: T::KIND,
            value,
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Apply the no-value mutation
    #[inline]
    pub fn bump(self) {
        self.value.bump()
    }

    /// Coerce `value` and store it
    #[inline]
    pub fn assign(self, value: &str) -> Result<(), ValueError> {
        self.value.assign(value)
    }
}

impl core::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slot").field("kind", &self.kind).finish_non_exhaustive()
    }
}
