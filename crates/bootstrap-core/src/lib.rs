//! Bootstrap Core - Shared library for the Strapi project bootstrappers
//!
//! This library decides *what* to generate: which template or starter, which
//! installation mode, and which target directory. It is used by the
//! `create-strapi-app` and `create-strapi-starter` binaries, which share the
//! same resolution engine but have different product configurations.
//!
//! # Architecture
//!
//! - **Catalog** - fetch the remote list of templates/starters, degrading to
//!   [`ManifestFetchResult::Unavailable`] on any failure
//! - **Resolution** - build the remaining questions, collect answers, merge
//!   them with flags and defaults into a [`ResolvedConfig`]
//! - **Dispatch** - hand the result to an external [`Generator`] and map the
//!   outcome to an exit status
//! - **TUI** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use bootstrap_core::resolve::{resolve, ResolutionFlow};
//! use bootstrap_core::{ManifestFetcher, OfferingKind};
//!
//! let flow = ResolutionFlow::new(OfferingKind::Template);
//! let fetcher = ManifestFetcher::new(TEMPLATES_URL, "my-agent");
//! let resolved = resolve(&flow, &args, &fetcher, &mut my_prompter).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod product;
pub mod resolve;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{CatalogSource, ManifestFetchResult, ManifestFetcher, RemoteManifestEntry};
pub use config::GeneratorCommand;
pub use dispatch::{dispatch, Generator, ProcessGenerator, EXIT_FAILURE, EXIT_SUCCESS};
pub use error::ResolveError;
pub use product::{OfferingKind, ProductConfig};
pub use resolve::{InstallMode, InvocationArgs, PassthroughFlags, ResolvedConfig};

#[cfg(feature = "tui")]
pub use tui::run;
