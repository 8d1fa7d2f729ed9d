//! Resolve command implementation
//!
//! Resolves a single configuration key through the same precedence chain
//! and coercion a service would see.

use crate::cli::Cli;
use crate::core::{InjectionResolver, ValueOrigin};
use crate::domain::{ConfigKey, ScalarType};
use crate::site::InjectionSite;
use clap::Args;

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Configuration key, e.g. `server.port`
    pub key: String,

    /// Scalar type to coerce into (String, int, boolean)
    #[arg(short = 't', long = "type", default_value = "String")]
    pub required_type: String,

    /// Print the result (or the error object) as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub async fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let key = match ConfigKey::new(self.key.clone()) {
            Ok(key) => key,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };
        let required_type = ScalarType::from_name(&self.required_type);

        let provider = match cli.build_provider() {
            Ok(provider) => provider,
            Err(e) => {
                eprintln!("❌ Failed to load configuration");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        tracing::info!(key = %key, required_type = %required_type, "Resolving property");

        provider.apply_pending_overrides();

        let site = InjectionSite::field(key.as_str(), required_type.clone(), key.clone());
        let origin = provider.lookup_with_origin(&key).map(|(_, origin)| origin);

        match provider.resolve(&site) {
            Ok(value) => {
                if self.json {
                    let output = serde_json::json!({
                        "key": key,
                        "type": required_type,
                        "value": value,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                } else {
                    println!("{value}");
                    match origin {
                        Some(ValueOrigin::Environment) => {
                            eprintln!("(from environment variable {})", key.env_var_name())
                        }
                        Some(ValueOrigin::Table) => eprintln!("(from {})", provider.source()),
                        None => eprintln!("⚠️  Key '{key}' is not defined anywhere"),
                    }
                }
                Ok(0)
            }
            Err(e) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&e.to_error_object())?);
                } else {
                    eprintln!("❌ Resolution of '{key}' as {required_type} failed");
                    eprintln!("   Error: {e}");
                    eprintln!("   See the log output for the cause.");
                }
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_args_creation() {
        let args = ResolveArgs {
            key: "server.port".to_string(),
            required_type: "int".to_string(),
            json: false,
        };
        let _ = format!("{args:?}");
    }
}
