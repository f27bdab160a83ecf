//! create-strapi-starter - Create a fullstack monorepo from a Strapi starter

use bootstrap_core::{
    GeneratorCommand, InstallMode, InvocationArgs, OfferingKind, PassthroughFlags,
    ProcessGenerator, ProductConfig, EXIT_SUCCESS,
};
use clap::Parser;
use std::process::ExitCode;

/// Strapi starter product configuration
#[derive(Clone)]
pub struct StarterConfig;

impl ProductConfig for StarterConfig {
    fn name(&self) -> &'static str {
        "create-strapi-starter"
    }

    fn display_name(&self) -> &'static str {
        "Strapi"
    }

    fn offering(&self) -> OfferingKind {
        OfferingKind::Starter
    }

    fn manifest_url(&self) -> &'static str {
        "https://api.github.com/repos/strapi/community-content/contents/starters/starters.yml"
    }

    fn generator_program(&self) -> &'static str {
        "npx --yes strapi-generate-new"
    }

    fn generator_env(&self) -> &'static str {
        "STRAPI_STARTER_GENERATOR"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-strapi-starter")]
#[command(
    about = "Create a fullstack monorepo application using the strapi backend template specified in the provided starter"
)]
#[command(version)]
pub struct Args {
    /// Project name / directory to create
    pub directory: Option<String>,

    /// GitHub URL of the starter to use
    #[arg(value_name = "STARTERURL")]
    pub starter_url: Option<String>,

    /// Quickstart app creation
    #[arg(long)]
    pub quickstart: bool,

    #[command(flatten)]
    pub passthrough: PassthroughFlags,
}

impl From<Args> for InvocationArgs {
    fn from(args: Args) -> Self {
        InvocationArgs::new(
            args.directory,
            args.starter_url,
            args.quickstart.then_some(InstallMode::Quickstart),
            args.passthrough,
        )
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    bootstrap_core::logging::init_tracing();

    let args = Args::parse();
    let config = StarterConfig;
    let generator = ProcessGenerator::new(GeneratorCommand::from_config(&config));

    let status = bootstrap_core::run(&config, args.into(), &generator).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    // The generator can leave a handle open on Windows; exit explicitly
    if cfg!(windows) && status == EXIT_SUCCESS {
        std::process::exit(0);
    }

    ExitCode::from(status)
}
