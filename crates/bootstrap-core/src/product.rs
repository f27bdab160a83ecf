//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product (app, starter) must implement
//! to configure the resolution flow for their specific needs.

use crate::resolve::questions::QuestionId;

/// Default project directory when none is supplied or answered
pub const DEFAULT_DIRECTORY: &str = "my-strapi-project";

/// The kind of offering listed in the remote catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferingKind {
    /// Backend-only configuration seeding a single application
    Template,
    /// Fullstack configuration seeding a monorepo
    Starter,
}

impl OfferingKind {
    /// Word stripped from catalog titles when building choice labels
    pub fn title_word(&self) -> &'static str {
        match self {
            OfferingKind::Template => "Template",
            OfferingKind::Starter => "Starter",
        }
    }

    /// Plural noun used in spinner and log messages
    pub fn plural(&self) -> &'static str {
        match self {
            OfferingKind::Template => "templates",
            OfferingKind::Starter => "starters",
        }
    }

    /// Flag used to hand the selected URL to the generator
    pub fn generator_flag(&self) -> &'static str {
        match self {
            OfferingKind::Template => "--template",
            OfferingKind::Starter => "--starter",
        }
    }

    /// Templates are optional, so the catalog list starts with a "None" entry
    pub fn allows_none(&self) -> bool {
        matches!(self, OfferingKind::Template)
    }

    /// Placeholder names shown when quickstart is missing required values
    pub fn quickstart_requirements(&self) -> &'static str {
        match self {
            OfferingKind::Template => "<directory>",
            OfferingKind::Starter => "<directory> and <starterurl>",
        }
    }

    pub fn select_message(&self, product: &str) -> String {
        match self {
            OfferingKind::Template => format!(
                "Would you like to use a template? (Templates are {} configurations designed for a specific use case)",
                product
            ),
            OfferingKind::Starter => format!(
                "Which starter would you like to use? (Starters are fullstack {} applications designed for a specific use case)",
                product
            ),
        }
    }

    pub fn input_message(&self) -> &'static str {
        match self {
            OfferingKind::Template => "Please provide the GitHub URL for your template:",
            OfferingKind::Starter => {
                "Please provide the GitHub URL for the starter you would like to use:"
            }
        }
    }
}

/// Configuration trait for different CLI products
///
/// Each product (app, starter) implements this trait to define:
/// - Product identity (name, display name)
/// - Catalog location and offering kind
/// - Question ordering
/// - The external generator command
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Whether this product scaffolds from templates or starters
    fn offering(&self) -> OfferingKind;

    /// Fixed URL of the remote catalog (GitHub contents API)
    fn manifest_url(&self) -> &'static str;

    /// Project name used when none is supplied
    fn default_directory(&self) -> &'static str {
        DEFAULT_DIRECTORY
    }

    /// Order in which the remaining questions are asked
    fn question_order(&self) -> &'static [QuestionId] {
        &[
            QuestionId::Directory,
            QuestionId::Offering,
            QuestionId::InstallMode,
        ]
    }

    /// Ask a yes/no "use a template?" question before listing the catalog
    fn confirm_before_offering(&self) -> bool {
        false
    }

    /// Default generator program (may include leading arguments)
    fn generator_program(&self) -> &'static str;

    /// Environment variable name for overriding the generator program
    fn generator_env(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
