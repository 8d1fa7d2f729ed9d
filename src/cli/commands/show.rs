//! Show command implementation
//!
//! Prints the selected bootstrap source and the effective property table.
//! Values of secret-looking keys are redacted unless `--reveal` is given.

use crate::cli::Cli;
use crate::core::ValueOrigin;
use crate::domain::ConfigKey;
use clap::Args;

const SECRET_MARKERS: [&str; 4] = ["password", "secret", "token", "credential"];

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print secret values instead of redacting them
    #[arg(long)]
    pub reveal: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let provider = match cli.build_provider() {
            Ok(provider) => provider,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        provider.apply_pending_overrides();

        println!("📄 Bootstrap source: {}", provider.source());
        println!("   Lifecycle: {}", provider.state());
        println!();

        let snapshot = provider.snapshot();
        if snapshot.is_empty() {
            println!("No properties defined.");
            return Ok(0);
        }

        for name in snapshot.keys() {
            let Ok(key) = ConfigKey::new(name.clone()) else {
                continue;
            };
            let Some((value, origin)) = provider.lookup_with_origin(&key) else {
                continue;
            };

            let shown = if self.reveal || !is_secret(name) {
                value
            } else {
                "********".to_string()
            };
            let marker = match origin {
                ValueOrigin::Environment => format!("  [env {}]", key.env_var_name()),
                ValueOrigin::Table => String::new(),
            };
            println!("{name} = {shown}{marker}");
        }

        Ok(0)
    }
}

fn is_secret(key: &str) -> bool {
    let key = key.to_lowercase();
    SECRET_MARKERS.iter().any(|marker| key.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_secret() {
        assert!(is_secret("database.password"));
        assert!(is_secret("auth.Token.value"));
        assert!(is_secret("CLIENT_SECRET"));
        assert!(!is_secret("server.port"));
    }
}
