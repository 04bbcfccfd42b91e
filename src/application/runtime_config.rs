use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory whose entries are dumped. Always the process working
    /// directory when built from the CLI.
    pub root: PathBuf,
}

impl RuntimeConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TryFrom<Cli> for RuntimeConfig {
    type Error = std::io::Error;

    fn try_from(_cli: Cli) -> Result<Self, Self::Error> {
        std::env::current_dir().map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_root_is_current_dir() {
        let cli = Cli::parse_from(["dirdump"]);

        let config = RuntimeConfig::try_from(cli).expect("Failed to build runtime config");

        assert_eq!(
            config.root,
            std::env::current_dir().expect("Failed to get current dir")
        );
    }
}
