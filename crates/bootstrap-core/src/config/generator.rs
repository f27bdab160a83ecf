//! Generator command resolution

use crate::product::ProductConfig;

/// External program that performs the actual project generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: String,
    /// Arguments placed before the generated ones (e.g. `npx --yes <pkg>`)
    pub leading_args: Vec<String>,
}

impl GeneratorCommand {
    /// Parse a whitespace-separated command line; `None` when blank
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self {
            program,
            leading_args: parts.collect(),
        })
    }

    /// Environment override first, then the product default
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        Self::resolve(
            std::env::var(config.generator_env()).ok().as_deref(),
            config.generator_program(),
        )
    }

    fn resolve(override_value: Option<&str>, default: &str) -> Self {
        override_value
            .and_then(Self::parse)
            .or_else(|| Self::parse(default))
            .unwrap_or_else(|| Self {
                program: default.to_string(),
                leading_args: Vec::new(),
            })
    }
}
