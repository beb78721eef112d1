use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikiConfig {
    /// Build configuration
    pub build: BuildConfig,
    /// Site configuration (from mdwiki-core)
    #[serde(flatten)]
    pub site: mdwiki_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Directory of markdown content
    pub content: String,
    /// Output directory for the generated site
    pub output: String,
    /// Theme directory
    pub theme: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "./content".to_string(),
            output: "./out".to_string(),
            theme: "./theme".to_string(),
            config: "./wiki.toml".to_string(),
        }
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            site: mdwiki_core::config::Config::default(),
        }
    }
}

impl WikiConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (MDWIKI_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| "./wiki.toml".to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with MDWIKI_ prefix
        builder = builder.add_source(
            Environment::with_prefix("MDWIKI")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        let mut cli_overrides = std::collections::HashMap::new();

        if let Some(content) = args.get_one::<String>("content") {
            cli_overrides.insert("build.content".to_string(), content.clone());
        }
        if let Some(output) = args.get_one::<String>("output") {
            cli_overrides.insert("build.output".to_string(), output.clone());
        }
        if let Some(theme) = args.get_one::<String>("theme") {
            cli_overrides.insert("build.theme".to_string(), theme.clone());
        }
        cli_overrides.insert("build.config".to_string(), config_file);

        builder = builder.add_source(config::Config::try_from(&cli_overrides)?);

        // Build and deserialize
        let merged = builder.build()?;
        let wiki_config: WikiConfig = merged.try_deserialize()?;

        Ok(wiki_config)
    }
}
