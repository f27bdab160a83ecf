//! Configuration resolution
//!
//! Reconciles command-line flags, interactive answers and the remote catalog
//! into a single [`ResolvedConfig`]:
//!
//! 1. Quickstart gating (fails before the session starts)
//! 2. Catalog fetch, only when the offering question is still open
//! 3. Question building
//! 4. Answer collection
//! 5. Merge

pub mod args;
pub mod collect;
pub mod merge;
pub mod questions;

pub use args::{InstallMode, InvocationArgs, PassthroughFlags};
pub use collect::{collect, Prompter};
pub use merge::{merge, ResolvedConfig};
pub use questions::{
    build_questions, Answer, Answers, Choice, Condition, Question, QuestionId, QuestionKind,
};

use crate::catalog::{CatalogSource, ManifestFetchResult};
use crate::error::Result;
use crate::product::{OfferingKind, ProductConfig, DEFAULT_DIRECTORY};
use tracing::debug;

/// The product-specific shape of the question flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFlow {
    pub offering: OfferingKind,
    /// Product display name used in prompt messages
    pub product: &'static str,
    pub default_directory: &'static str,
    pub order: &'static [QuestionId],
    pub confirm_before_offering: bool,
}

impl ResolutionFlow {
    /// Canonical flow: directory, offering, installation mode
    pub fn new(offering: OfferingKind) -> Self {
        Self {
            offering,
            product: "Strapi",
            default_directory: DEFAULT_DIRECTORY,
            order: &[
                QuestionId::Directory,
                QuestionId::Offering,
                QuestionId::InstallMode,
            ],
            confirm_before_offering: false,
        }
    }

    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        Self {
            offering: config.offering(),
            product: config.display_name(),
            default_directory: config.default_directory(),
            order: config.question_order(),
            confirm_before_offering: config.confirm_before_offering(),
        }
    }
}

/// Run the whole resolution for one invocation
pub async fn resolve<S, P>(
    flow: &ResolutionFlow,
    args: &InvocationArgs,
    catalog: &S,
    prompter: &mut P,
) -> Result<ResolvedConfig>
where
    S: CatalogSource + ?Sized,
    P: Prompter + ?Sized,
{
    args.check_quickstart(flow.offering)?;
    prompter.start()?;

    let manifest = if args.needs_catalog() {
        catalog.fetch().await
    } else {
        ManifestFetchResult::Unavailable
    };

    let questions = build_questions(flow, args, &manifest);
    debug!(
        count = questions.len(),
        available = manifest.is_available(),
        "questions built"
    );

    let answers = collect(&questions, prompter)?;
    let resolved = merge(flow, args, &answers);
    debug!(
        directory = %resolved.directory,
        offering_url = ?resolved.offering_url,
        quickstart = resolved.quickstart,
        "configuration resolved"
    );

    Ok(resolved)
}
