//! Question construction
//!
//! Builds the ordered list of questions still needed after flags are applied.
//! Building is pure: the same inputs always produce the same list.

use super::args::InvocationArgs;
use super::ResolutionFlow;
use crate::catalog::ManifestFetchResult;
use std::collections::BTreeMap;

/// Identifies what a question resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionId {
    /// Project name / target directory
    Directory,
    /// "Use a template?" gate before the offering question
    UseOffering,
    /// Template or starter URL
    Offering,
    /// Quickstart vs custom
    InstallMode,
}

/// A collected answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free-text input
    Text(String),
    /// Catalog selection; `None` when the operator picked no offering
    Url(Option<String>),
    /// Yes/no confirmation or a boolean choice
    Flag(bool),
}

/// Answers keyed by question
pub type Answers = BTreeMap<QuestionId, Answer>;

/// One entry in a select question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub hint: String,
    pub value: Answer,
}

impl Choice {
    fn new(label: impl Into<String>, hint: impl Into<String>, value: Answer) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Input {
        default: Option<String>,
        required: bool,
    },
    /// The first choice is the default
    Select { choices: Vec<Choice> },
    Confirm { default: bool },
}

/// Condition on earlier answers; a question is skipped when it does not hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Confirmed(QuestionId),
}

impl Condition {
    pub fn holds(&self, answers: &Answers) -> bool {
        match self {
            Condition::Confirmed(id) => matches!(answers.get(id), Some(Answer::Flag(true))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub message: String,
    pub kind: QuestionKind,
    pub condition: Option<Condition>,
}

impl Question {
    /// Whether this question should be asked given the answers so far
    pub fn applies(&self, answers: &Answers) -> bool {
        self.condition.map_or(true, |c| c.holds(answers))
    }
}

/// Build the questions still needed, in the flow's order
pub fn build_questions(
    flow: &ResolutionFlow,
    args: &InvocationArgs,
    catalog: &ManifestFetchResult,
) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();

    for id in flow.order {
        if questions.iter().any(|q| q.id == *id) {
            continue;
        }

        match id {
            QuestionId::Directory if args.directory.is_none() => {
                questions.push(directory_question(flow));
            }
            QuestionId::Offering if args.offering_url.is_none() => {
                if flow.confirm_before_offering {
                    questions.push(use_offering_question(flow));
                }
                questions.push(offering_question(flow, catalog));
            }
            QuestionId::InstallMode if args.install_mode.is_none() => {
                questions.push(install_mode_question());
            }
            _ => {}
        }
    }

    questions
}

fn directory_question(flow: &ResolutionFlow) -> Question {
    Question {
        id: QuestionId::Directory,
        message: "What would you like to name your project?".to_string(),
        kind: QuestionKind::Input {
            default: Some(flow.default_directory.to_string()),
            required: false,
        },
        condition: None,
    }
}

fn use_offering_question(flow: &ResolutionFlow) -> Question {
    Question {
        id: QuestionId::UseOffering,
        message: format!("Would you like to use a {}?", flow.offering.title_word().to_lowercase()),
        kind: QuestionKind::Confirm { default: false },
        condition: None,
    }
}

fn offering_question(flow: &ResolutionFlow, catalog: &ManifestFetchResult) -> Question {
    let condition = flow
        .confirm_before_offering
        .then_some(Condition::Confirmed(QuestionId::UseOffering));

    // Fall back to manual input when the catalog could not be loaded
    let ManifestFetchResult::Available(entries) = catalog else {
        return Question {
            id: QuestionId::Offering,
            message: flow.offering.input_message().to_string(),
            kind: QuestionKind::Input {
                default: None,
                required: !flow.offering.allows_none(),
            },
            condition,
        };
    };

    let mut choices = Vec::with_capacity(entries.len() + 1);
    if flow.offering.allows_none() && !flow.confirm_before_offering {
        choices.push(Choice::new("None", "", Answer::Url(None)));
    }
    choices.extend(entries.iter().map(|entry| {
        let url = entry.url();
        Choice::new(entry.label(flow.offering.title_word()), url.clone(), Answer::Url(Some(url)))
    }));

    Question {
        id: QuestionId::Offering,
        message: flow.offering.select_message(flow.product),
        kind: QuestionKind::Select { choices },
        condition,
    }
}

fn install_mode_question() -> Question {
    Question {
        id: QuestionId::InstallMode,
        message: "Choose your installation type".to_string(),
        kind: QuestionKind::Select {
            choices: vec![
                Choice::new("Quickstart (recommended)", "", Answer::Flag(true)),
                Choice::new("Custom (manual settings)", "", Answer::Flag(false)),
            ],
        },
        condition: None,
    }
}
