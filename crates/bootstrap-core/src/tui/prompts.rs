//! Charm-style CLI prompts using cliclack

use crate::catalog::{CatalogSource, ManifestFetchResult, ManifestFetcher};
use crate::dispatch::{dispatch, Generator, EXIT_FAILURE};
use crate::error::{ResolveError, Result};
use crate::product::ProductConfig;
use crate::resolve::{
    self, Answer, InvocationArgs, Prompter, Question, QuestionKind, ResolutionFlow,
    ResolvedConfig,
};
use async_trait::async_trait;
use colored::Colorize;
use std::io;

/// Prompter that renders questions with cliclack
#[derive(Debug, Clone)]
pub struct ClackPrompter {
    intro: String,
}

impl ClackPrompter {
    pub fn new(intro: impl Into<String>) -> Self {
        Self {
            intro: intro.into(),
        }
    }
}

impl Prompter for ClackPrompter {
    fn start(&mut self) -> io::Result<()> {
        cliclack::intro(&self.intro)
    }

    fn ask(&mut self, question: &Question) -> io::Result<Answer> {
        match &question.kind {
            QuestionKind::Input { default, required } => {
                let mut input = cliclack::input(&question.message).required(*required);
                if let Some(default) = default {
                    input = input.placeholder(default).default_input(default);
                }
                let text: String = input.interact()?;
                Ok(Answer::Text(text))
            }
            QuestionKind::Select { choices } => {
                let mut select = cliclack::select(&question.message);
                for (idx, choice) in choices.iter().enumerate() {
                    select = select.item(idx, &choice.label, &choice.hint);
                }
                let selected_idx: usize = select.interact()?;

                choices
                    .get(selected_idx)
                    .map(|choice| choice.value.clone())
                    .ok_or_else(|| {
                        io::Error::new(io::ErrorKind::InvalidInput, "selection out of range")
                    })
            }
            QuestionKind::Confirm { default } => {
                let confirmed: bool = cliclack::confirm(&question.message)
                    .initial_value(*default)
                    .interact()?;
                Ok(Answer::Flag(confirmed))
            }
        }
    }
}

/// Resolve the configuration interactively, then hand it to the generator.
/// Returns the process exit status.
pub async fn run<C, G>(config: &C, args: InvocationArgs, generator: &G) -> u8
where
    C: ProductConfig,
    G: Generator + ?Sized,
{
    let resolved = match resolve_interactive(config, &args).await {
        Ok(resolved) => resolved,
        Err(ResolveError::Cancelled) => {
            cliclack::outro_cancel("Setup cancelled.").ok();
            return EXIT_FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return EXIT_FAILURE;
        }
    };

    dispatch(generator, &resolved).await
}

async fn resolve_interactive<C: ProductConfig>(
    config: &C,
    args: &InvocationArgs,
) -> Result<ResolvedConfig> {
    let flow = ResolutionFlow::from_config(config);
    let catalog = SpinnerCatalog::new(
        ManifestFetcher::from_config(config),
        config.offering().plural(),
    );
    let mut prompter =
        ClackPrompter::new(format!("Create a new {} project", config.display_name()));

    let resolved = resolve::resolve(&flow, args, &catalog, &mut prompter).await?;
    print_summary(&resolved)?;

    Ok(resolved)
}

/// Shows a spinner while the wrapped catalog loads
pub struct SpinnerCatalog<S> {
    inner: S,
    plural: &'static str,
}

impl<S: CatalogSource> SpinnerCatalog<S> {
    pub fn new(inner: S, plural: &'static str) -> Self {
        Self { inner, plural }
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for SpinnerCatalog<S> {
    async fn fetch(&self) -> ManifestFetchResult {
        let spinner = cliclack::spinner();
        spinner.start(format!("Loading {}...", self.plural));

        let manifest = self.inner.fetch().await;
        match &manifest {
            ManifestFetchResult::Available(entries) => {
                spinner.stop(format!("Loaded {} {}", entries.len(), self.plural));
            }
            ManifestFetchResult::Unavailable => {
                spinner.stop(format!("Could not load the list of {}", self.plural));
                cliclack::log::info("You can still enter a GitHub URL manually").ok();
            }
        }

        manifest
    }
}

fn print_summary(resolved: &ResolvedConfig) -> io::Result<()> {
    let offering = resolved.offering.title_word();
    cliclack::log::success(format!("Project: {}", resolved.directory))?;
    match &resolved.offering_url {
        Some(url) => cliclack::log::info(format!("{}: {}", offering, url))?,
        None => cliclack::log::info(format!("{}: default", offering))?,
    }
    let mode = if resolved.quickstart {
        "Quickstart"
    } else {
        "Custom"
    };
    cliclack::log::info(format!("Installation: {}", mode))?;

    cliclack::outro(format!("Creating {}...", resolved.directory))?;

    Ok(())
}
