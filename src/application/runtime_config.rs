use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub prompt: String,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self { prompt: cli.prompt }
    }
}
