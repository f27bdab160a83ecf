//! create-strapi-app - Create a new Strapi application

use bootstrap_core::{
    GeneratorCommand, InstallMode, InvocationArgs, OfferingKind, PassthroughFlags,
    ProcessGenerator, ProductConfig, EXIT_SUCCESS,
};
use clap::Parser;
use std::process::ExitCode;

/// Strapi application product configuration
#[derive(Clone)]
pub struct AppConfig;

impl ProductConfig for AppConfig {
    fn name(&self) -> &'static str {
        "create-strapi-app"
    }

    fn display_name(&self) -> &'static str {
        "Strapi"
    }

    fn offering(&self) -> OfferingKind {
        OfferingKind::Template
    }

    fn manifest_url(&self) -> &'static str {
        "https://api.github.com/repos/strapi/community-content/contents/templates/templates.yml"
    }

    fn generator_program(&self) -> &'static str {
        "npx --yes strapi-generate-new"
    }

    fn generator_env(&self) -> &'static str {
        "STRAPI_GENERATOR"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-strapi-app")]
#[command(about = "create a new application")]
#[command(version)]
pub struct Args {
    /// Project name / directory to create
    pub directory: Option<String>,

    /// Specify a Strapi template
    #[arg(long, value_name = "TEMPLATEURL")]
    pub template: Option<String>,

    /// Quickstart app creation
    #[arg(long)]
    pub quickstart: bool,

    /// Do not start the application after it is created
    #[arg(long = "no-run")]
    pub no_run: bool,

    #[command(flatten)]
    pub passthrough: PassthroughFlags,
}

impl From<Args> for InvocationArgs {
    fn from(args: Args) -> Self {
        let passthrough = PassthroughFlags {
            no_run: args.no_run,
            ..args.passthrough
        };

        InvocationArgs::new(
            args.directory,
            args.template,
            args.quickstart.then_some(InstallMode::Quickstart),
            passthrough,
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
    let config = AppConfig;
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
