//! Merging flags, answers and defaults into the final configuration
//!
//! Precedence: explicit flag > collected answer > default.

use super::args::{non_blank, InvocationArgs, PassthroughFlags};
use super::questions::{Answer, Answers, QuestionId};
use super::ResolutionFlow;
use crate::product::OfferingKind;

/// The configuration handed to the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Project name / target directory, never empty
    pub directory: String,

    /// Template or starter URL; `None` lets the generator use its default
    pub offering_url: Option<String>,

    pub quickstart: bool,

    pub offering: OfferingKind,

    pub passthrough: PassthroughFlags,
}

/// Combine flags and answers. Never fails.
pub fn merge(flow: &ResolutionFlow, args: &InvocationArgs, answers: &Answers) -> ResolvedConfig {
    let directory = args
        .directory
        .clone()
        .or_else(|| answered_text(answers))
        .unwrap_or_else(|| flow.default_directory.to_string());

    let offering_url = args.offering_url.clone().or_else(|| answered_offering(answers));

    let quickstart = match args.install_mode {
        Some(mode) => mode.is_quickstart(),
        None => matches!(answers.get(&QuestionId::InstallMode), Some(Answer::Flag(true))),
    };

    ResolvedConfig {
        directory,
        offering_url,
        quickstart,
        offering: flow.offering,
        passthrough: args.passthrough.clone(),
    }
}

fn answered_text(answers: &Answers) -> Option<String> {
    match answers.get(&QuestionId::Directory) {
        Some(Answer::Text(text)) => non_blank(Some(text.clone())),
        _ => None,
    }
}

fn answered_offering(answers: &Answers) -> Option<String> {
    if let Some(Answer::Flag(false)) = answers.get(&QuestionId::UseOffering) {
        return None;
    }

    match answers.get(&QuestionId::Offering) {
        Some(Answer::Url(url)) => url.clone(),
        Some(Answer::Text(text)) => non_blank(Some(text.clone())),
        _ => None,
    }
}
