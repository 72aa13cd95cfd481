use crate::{errors::Error, record::Flags, table::OptionTable};

/// Helper type for loading arguments from the environment.
///
/// Provides a convenient owned container for the command line retrieved from
/// [`std::env`], with the program name kept separate from the arguments that
/// get scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedArguments {
    arguments: Vec<String>,
}

impl LoadedArguments {
    /// Load the command line of the current process. Arguments that aren't
    /// valid UTF-8 are converted lossily.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        )
    }

    /// Use an explicit command line. The first element is the program name.
    #[inline]
    #[must_use]
    pub fn new(arguments: Vec<String>) -> Self {
        Self { arguments }
    }

    /// The program name, or an empty string if the command line is empty
    #[must_use]
    pub fn argv0(&self) -> &str {
        self.arguments.first().map(String::as_str).unwrap_or_default()
    }

    /// Everything after the program name
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.arguments.get(1..).unwrap_or(&[])
    }

    /// Scan these arguments into `record`, returning the positional
    /// arguments.
    pub fn parse_into<T: Flags + ?Sized>(&self, record: &mut T) -> Result<Vec<String>, Error> {
        let table = OptionTable::<T>::of()?;
        Ok(table.parse(&self.arguments, record)?)
    }
}
