/*!
Help rendering for an [`OptionTable`]. Options are listed in declaration
order, one per line, with their help text aligned in a second column.
Options without help text are left out.
 */

use std::{
    fmt::Display,
    io::{self, Write},
};

use lazy_format::lazy_format;

use crate::{
    descriptor::OptionDescriptor,
    errors::HelpError,
    record::Flags,
    table::OptionTable,
};

/// Layout settings for [`write_help`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLayout {
    /// Width of the spelling column, not counting the two spaces of
    /// indentation before it and the two spaces of separation after it.
    /// Spellings at least this wide get a line of their own.
    pub column_width: usize,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self { column_width: 28 }
    }
}

/// The combined spelling of an option, plus `=PLACEHOLDER` if it takes a
/// value
fn spelling<'a>(descriptor: &'a OptionDescriptor<'_>) -> impl Display + 'a {
    lazy_format!(match (descriptor.placeholder()) {
        Some(placeholder) => ("{tags}={placeholder}", tags = descriptor.tags()),
        None => ("{tags}", tags = descriptor.tags()),
    })
}

/**
Write the help listing for `table` to `out`:

```text
  -q, --quiet                   suppress output
  -n, --num=NUMBER              specify number
  -w, --a-rather-long-option=VALUE
                                has its help on the next line
```
 */
pub fn write_help<T: ?Sized>(
    out: &mut impl Write,
    table: &OptionTable<'_, T>,
    layout: &HelpLayout,
) -> io::Result<()> {
    let width = layout.column_width;

    for descriptor in table.descriptors() {
        let Some(help) = descriptor.help() else {
            continue;
        };

        let spelling = spelling(descriptor).to_string();

        if spelling.chars().count() >= width {
            writeln!(out, "  {spelling}")?;
            writeln!(out, "  {:width$}  {help}", "")?;
        } else {
            writeln!(out, "  {spelling:width$}  {help}")?;
        }
    }

    Ok(())
}

/// Print the help listing for the bound record type `T` to stdout, with the
/// default layout.
pub fn print_help<T: Flags + ?Sized>() -> Result<(), HelpError> {
    let table = OptionTable::<T>::of()?;
    let mut stdout = io::stdout().lock();
    write_help(&mut stdout, &table, &HelpLayout::default())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{HelpLayout, write_help};
    use crate::{record::FieldDecl, table::OptionTable, value::ValueKind};

    fn render(fields: &[FieldDecl], layout: HelpLayout) -> String {
        let table = OptionTable::<()>::build(fields).unwrap();
        let mut out = Vec::new();
        write_help(&mut out, &table, &layout).unwrap();
        String::from_utf8(out).unwrap()
    }

    const FIELDS: &[FieldDecl] = &[
        FieldDecl::new("help", "-h, --help", ValueKind::Boolean),
        FieldDecl::new("quiet", "-q, --quiet   suppress output", ValueKind::Boolean),
        FieldDecl::new("num", "-n, --num=NUMBER  specify number", ValueKind::Signed),
        FieldDecl::new("file", "-f=FILE  specify filename", ValueKind::Text),
        FieldDecl::new("level", "--level=N  level", ValueKind::Unsigned),
        FieldDecl::new(
            "long",
            "-w, --a-rather-long-option=VALUE  has its help on the next line",
            ValueKind::Text,
        ),
    ];

    #[test]
    fn default_layout() {
        let expected = concat!(
            "  -q, --quiet                   suppress output\n",
            "  -n, --num=NUMBER              specify number\n",
            "  -f=FILE                       specify filename\n",
            "  --level=N                     level\n",
            "  -w, --a-rather-long-option=VALUE\n",
            "                                has its help on the next line\n",
        );

        assert_eq!(render(FIELDS, HelpLayout::default()), expected);
    }

    #[test]
    fn column_width_is_exclusive() {
        let expected = concat!(
            "  -q, --quiet\n",
            "              suppress output\n",
            "  -n, --num=NUMBER\n",
            "              specify number\n",
            "  -f=FILE     specify filename\n",
        );

        let layout = HelpLayout { column_width: 10 };
        assert_eq!(render(&FIELDS[..4], layout), expected);
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(render(&FIELDS[..1], HelpLayout::default()), "");
        assert_eq!(render(&[], HelpLayout::default()), "");
    }
}
