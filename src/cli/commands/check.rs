//! Check command implementation
//!
//! Resolves every site declared in a site manifest and reports the ones
//! that would fail inside the running service.

use crate::cli::Cli;
use crate::core::UNRESOLVED_PLACEHOLDER;
use crate::site::load_manifest;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the site manifest (TOML)
    pub manifest: PathBuf,

    /// Also fail for keys that resolve to the unresolved placeholder
    #[arg(long)]
    pub strict: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        tracing::info!(manifest = %self.manifest.display(), "Checking site manifest");

        let registry = match load_manifest(&self.manifest) {
            Ok(registry) => registry,
            Err(e) => {
                println!("❌ Failed to load site manifest");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let provider = match cli.build_provider() {
            Ok(provider) => provider,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        provider.apply_pending_overrides();

        println!("🔍 Checking {} site(s) against {}", registry.len(), provider.source());
        println!();

        let mut failures = 0usize;
        for (id, site) in registry.iter() {
            let undefined = site
                .element
                .annotation()
                .is_some_and(|key| provider.lookup(key).is_none());

            match provider.resolve_registered(&registry, id) {
                Ok(value) if undefined && self.strict => {
                    failures += 1;
                    println!(
                        "❌ {id}: key not defined, resolves to placeholder '{}' ({value})",
                        UNRESOLVED_PLACEHOLDER
                    );
                }
                Ok(value) if undefined => {
                    println!("⚠️  {id} = {value} (key not defined)");
                }
                Ok(value) => println!("✅ {id} = {value}"),
                Err(e) => {
                    failures += 1;
                    println!("❌ {id}: {e}");
                }
            }
        }

        println!();
        if failures > 0 {
            println!("{failures} of {} site(s) failed", registry.len());
            Ok(2)
        } else {
            println!("All {} site(s) resolved", registry.len());
            Ok(0)
        }
    }
}
