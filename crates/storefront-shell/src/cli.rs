//! `storefront-routes` command line: check route files and resolve paths

use crate::{load_routes, storefront_router, RoutesFile, View};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use storefront_router::{Destination, Outcome, Router};

#[derive(Debug, Parser)]
#[command(name = "storefront-routes", version, about = "Storefront route table tooling")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a route file (or the built-in table) and list its routes
    Check {
        /// TOML route file; the built-in storefront table when omitted
        #[arg(long)]
        routes: Option<PathBuf>,
    },
    /// Resolve paths and print the outcome for each
    Resolve {
        #[arg(long)]
        routes: Option<PathBuf>,
        /// Follow redirects and apply the not-found policy
        #[arg(long)]
        follow: bool,
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the built-in storefront table as a route file
    Dump,
}

fn open(routes: Option<&Path>) -> Result<Router<View>, Box<dyn Error>> {
    Ok(match routes {
        Some(path) => load_routes(path)?,
        None => storefront_router()?,
    })
}

/// Run one command, writing its report to `out`.
///
/// Returns whether every requested operation succeeded. Configuration
/// errors are returned as `Err`.
pub fn run(command: Command, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::Check { routes } => {
            let router = open(routes.as_deref())?;
            for route in router.routes() {
                let name = route.name().unwrap_or("-");
                match (route.view(), route.redirect_to()) {
                    (Some(view), _) => writeln!(out, "{:<16} {:<16} {}", route.path(), name, view)?,
                    (None, Some(to)) => writeln!(out, "{:<16} {:<16} -> {}", route.path(), name, to)?,
                    (None, None) => {}
                }
            }
            writeln!(out, "ok: {} routes", router.len())?;
            Ok(true)
        }
        Command::Resolve {
            routes,
            follow,
            paths,
        } => {
            let router = open(routes.as_deref())?;
            let mut ok = true;
            for path in &paths {
                if !follow {
                    match router.resolve(path) {
                        Outcome::Resolved(r) => writeln!(out, "{path}: resolved {} {}", r.name, r.view)?,
                        Outcome::Redirect(l) => writeln!(out, "{path}: redirect {l}")?,
                        Outcome::NotFound(_) => writeln!(out, "{path}: not-found")?,
                    }
                    continue;
                }
                match router.navigate(path) {
                    Ok(nav) => {
                        let via: Vec<String> =
                            nav.redirected_from.iter().map(|l| l.to_string()).collect();
                        let line = match &nav.destination {
                            Destination::Resolved(r) => format!("resolved {} {}", r.name, r.view),
                            Destination::Fallback(r) => format!("fallback {} {}", r.name, r.view),
                            Destination::NotFound(l) => format!("not-found {l}"),
                        };
                        if via.is_empty() {
                            writeln!(out, "{path}: {line}")?;
                        } else {
                            writeln!(out, "{path}: {line} (via {})", via.join(" -> "))?;
                        }
                    }
                    Err(e) => {
                        ok = false;
                        writeln!(out, "{path}: error {e}")?;
                    }
                }
            }
            Ok(ok)
        }
        Command::Dump => {
            let router = storefront_router()?;
            write!(out, "{}", RoutesFile::from_router(&router).to_toml()?)?;
            Ok(true)
        }
    }
}
