/*!
The table-aware half of the argument scanner. [`tagflags_parser`] classifies
each token; the [`Scan`] visitor looks options up in the [`OptionTable`],
enforces the per-call rules, and writes values into the bound record.
 */

use tagflags_parser::{ArgAccess, ArgumentsParser, MissingValue, Visitor};
use tracing::trace;

use crate::{
    descriptor::OptionDescriptor,
    errors::{ErrorKind, ParseError},
    record::Flags,
    table::OptionTable,
};

/// Scan `args` (which excludes the program name) into `record`.
pub(crate) fn scan<'arg, T>(
    table: &OptionTable<'_, T>,
    args: impl IntoIterator<Item = &'arg str>,
    record: &mut T,
) -> Result<Vec<String>, ParseError>
where
    T: Flags + ?Sized,
{
    let mut parser = ArgumentsParser::new(args);
    let mut scan = Scan {
        table,
        record,
        args: Vec::new(),
        assigned: vec![false; table.len()],
    };

    while let Some(result) = parser.next_arg(&mut scan) {
        if let Err(kind) = result {
            trace!(error = %kind, "scan stopped");
            return Err(ParseError::new(kind, scan.args));
        }
    }

    Ok(scan.args)
}

/// State for a single scan of the command line
struct Scan<'t, 'a, 'r, T: ?Sized> {
    table: &'t OptionTable<'a, T>,
    record: &'r mut T,

    /// Positional arguments, in the order they were found
    args: Vec<String>,

    /// Per option, whether it already received a value during this scan
    assigned: Vec<bool>,
}

impl<T: Flags + ?Sized> Scan<'_, '_, '_, T> {
    /// Handle a known option given as its own token (or at the end of a
    /// cluster). `typed` is the spelling as it appeared.
    fn handle<'arg>(
        &mut self,
        typed: &str,
        index: usize,
        descriptor: &OptionDescriptor<'_>,
        cluster: Option<&str>,
        value: impl ArgAccess<'arg>,
    ) -> Result<(), ErrorKind> {
        if !descriptor.takes_value() {
            self.record.slot_mut(descriptor.field()).bump();
            return Ok(());
        }

        let value = value.take().map_err(|missing| match missing {
            MissingValue::Exhausted => ErrorKind::TruncatedOption {
                option: typed.to_owned(),
                placeholder: descriptor.placeholder().unwrap_or_default().to_owned(),
            },
            MissingValue::InsideCluster => ErrorKind::MissingValueInCluster {
                option: typed.to_owned(),
                cluster: cluster.unwrap_or(typed).to_owned(),
            },
        })?;

        self.assign(typed, index, descriptor, value)
    }

    /// Store a value for a value-taking option. Fails if the option already
    /// got one through any of its spellings.
    fn assign(
        &mut self,
        typed: &str,
        index: usize,
        descriptor: &OptionDescriptor<'_>,
        value: &str,
    ) -> Result<(), ErrorKind> {
        if self.assigned[index] {
            return Err(ErrorKind::DuplicateOption {
                option: descriptor.tags().to_string(),
            });
        }

        self.record
            .slot_mut(descriptor.field())
            .assign(value)
            .map_err(|error| ErrorKind::InvalidValue {
                option: typed.to_owned(),
                value: value.to_owned(),
                reason: error.reason,
            })?;

        self.assigned[index] = true;
        Ok(())
    }
}

impl<'arg, T: Flags + ?Sized> Visitor<'arg> for &mut Scan<'_, '_, '_, T> {
    type Value = Result<(), ErrorKind>;

    fn visit_positional(self, argument: &'arg str) -> Self::Value {
        trace!(argument, "positional");
        self.args.push(argument.to_owned());
        Ok(())
    }

    fn visit_option_with_value(self, option: &'arg str, value: &'arg str) -> Self::Value {
        trace!(option, value, "option with inline value");

        let table = self.table;
        let (index, descriptor) = table.lookup(option).ok_or_else(|| ErrorKind::UnknownOption {
            option: option.to_owned(),
            cluster: None,
        })?;

        if !descriptor.takes_value() {
            return Err(ErrorKind::OptionTakesNoValue {
                option: option.to_owned(),
            });
        }

        self.assign(option, index, descriptor, value)
    }

    fn visit_option(self, option: &'arg str, value: impl ArgAccess<'arg>) -> Self::Value {
        trace!(option, "option");

        let table = self.table;
        let (index, descriptor) = table.lookup(option).ok_or_else(|| ErrorKind::UnknownOption {
            option: option.to_owned(),
            cluster: None,
        })?;

        self.handle(option, index, descriptor, None, value)
    }

    fn visit_clustered(
        self,
        option: char,
        cluster: &'arg str,
        value: impl ArgAccess<'arg>,
    ) -> Self::Value {
        trace!(%option, cluster, "clustered option");

        let spelling = format!("-{option}");
        let table = self.table;
        let (index, descriptor) =
            table
                .lookup(&spelling)
                .ok_or_else(|| ErrorKind::UnknownOption {
                    option: spelling.clone(),
                    cluster: Some(cluster.to_owned()),
                })?;

        self.handle(&spelling, index, descriptor, Some(cluster), value)
    }
}
