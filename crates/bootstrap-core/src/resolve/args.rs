//! Non-interactive input: everything known before the first prompt

use crate::error::{ResolveError, Result};
use crate::product::OfferingKind;
use clap::Args;

/// Installation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    /// Non-interactive setup with default database settings
    Quickstart,
    /// Manual database settings, asked for by the generator
    Custom,
}

impl InstallMode {
    pub fn is_quickstart(&self) -> bool {
        matches!(self, InstallMode::Quickstart)
    }
}

/// Database and runtime flags forwarded to the generator untouched
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PassthroughFlags {
    /// Force usage of npm instead of yarn to create the project
    #[arg(long = "use-npm")]
    pub use_npm: bool,

    /// Display database connection error
    #[arg(long)]
    pub debug: bool,

    /// Database client
    #[arg(long, value_name = "DBCLIENT")]
    pub dbclient: Option<String>,

    /// Database host
    #[arg(long, value_name = "DBHOST")]
    pub dbhost: Option<String>,

    /// Database srv
    #[arg(long, value_name = "DBSRV")]
    pub dbsrv: Option<String>,

    /// Database port
    #[arg(long, value_name = "DBPORT")]
    pub dbport: Option<String>,

    /// Database name
    #[arg(long, value_name = "DBNAME")]
    pub dbname: Option<String>,

    /// Database username
    #[arg(long, value_name = "DBUSERNAME")]
    pub dbusername: Option<String>,

    /// Database password
    #[arg(long, value_name = "DBPASSWORD")]
    pub dbpassword: Option<String>,

    /// Database SSL
    #[arg(long, value_name = "DBSSL")]
    pub dbssl: Option<String>,

    /// Authentication Database
    #[arg(long, value_name = "DBAUTH")]
    pub dbauth: Option<String>,

    /// Database file path for sqlite
    #[arg(long, value_name = "DBFILE")]
    pub dbfile: Option<String>,

    /// Overwrite database content if any
    #[arg(long)]
    pub dbforce: bool,

    /// Do not start the application after it is created (set by products that support it)
    #[arg(skip)]
    pub no_run: bool,
}

impl PassthroughFlags {
    /// Render the flags as generator command-line arguments
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        let valued = [
            ("--dbclient", &self.dbclient),
            ("--dbhost", &self.dbhost),
            ("--dbsrv", &self.dbsrv),
            ("--dbport", &self.dbport),
            ("--dbname", &self.dbname),
            ("--dbusername", &self.dbusername),
            ("--dbpassword", &self.dbpassword),
            ("--dbssl", &self.dbssl),
            ("--dbauth", &self.dbauth),
            ("--dbfile", &self.dbfile),
        ];
        for (flag, value) in valued {
            if let Some(value) = value {
                args.push(flag.to_string());
                args.push(value.clone());
            }
        }

        let switches = [
            ("--dbforce", self.dbforce),
            ("--use-npm", self.use_npm),
            ("--debug", self.debug),
            ("--no-run", self.no_run),
        ];
        for (flag, set) in switches {
            if set {
                args.push(flag.to_string());
            }
        }

        args
    }
}

/// Everything supplied on the command line, normalised once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArgs {
    /// Project name / target directory
    pub directory: Option<String>,

    /// Template or starter URL
    pub offering_url: Option<String>,

    /// Explicit installation mode; `None` means ask
    pub install_mode: Option<InstallMode>,

    pub passthrough: PassthroughFlags,
}

impl InvocationArgs {
    pub fn new(
        directory: Option<String>,
        offering_url: Option<String>,
        install_mode: Option<InstallMode>,
        passthrough: PassthroughFlags,
    ) -> Self {
        Self {
            directory: non_blank(directory),
            offering_url: non_blank(offering_url),
            install_mode,
            passthrough,
        }
    }

    /// The catalog is only worth fetching while the offering is still open
    pub fn needs_catalog(&self) -> bool {
        self.offering_url.is_none()
    }

    /// Reject a quickstart invocation that is missing what the flow cannot ask for.
    ///
    /// A template run only fails when neither the directory nor the template was
    /// given; a missing directory is asked for, since it has a default. A starter
    /// run needs both up front.
    pub fn check_quickstart(&self, offering: OfferingKind) -> Result<()> {
        if self.install_mode != Some(InstallMode::Quickstart) {
            return Ok(());
        }

        let complete = match offering {
            OfferingKind::Template => self.directory.is_some() || self.offering_url.is_some(),
            OfferingKind::Starter => self.directory.is_some() && self.offering_url.is_some(),
        };

        if complete {
            Ok(())
        } else {
            Err(ResolveError::QuickstartIncomplete {
                required: offering.quickstart_requirements(),
            })
        }
    }
}

/// Treat empty or whitespace-only values as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
