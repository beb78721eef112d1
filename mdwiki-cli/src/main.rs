use anyhow::{Context as _, Result};
use clap::{Arg, Command};
use mdwiki_core::SiteBuilder;

mod config;

fn make_command() -> Command {
    Command::new("mdwiki")
        .about("Build a static HTML wiki from a tree of markdown files")
        .arg(
            Arg::new("content")
                .value_name("CONTENT_DIR")
                .required(true)
                .help("Directory of markdown content"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUT_DIR")
                .required(true)
                .help("Directory the generated site is written to"),
        )
        .arg(
            Arg::new("theme")
                .value_name("THEME_DIR")
                .help(
                    "Theme directory with templates and stylesheets \
                     [default: ./theme, resolved against the current directory]",
                ),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("./wiki.toml")
                .help("Configuration file"),
        )
}

fn main() -> Result<()> {
    let matches = make_command().get_matches();
    let wiki_config = config::WikiConfig::load(&matches)?;

    let report = SiteBuilder::new(&wiki_config.build.content)
        .output_dir(&wiki_config.build.output)
        .theme_dir(&wiki_config.build.theme)
        .site_config(wiki_config.site.site.unwrap_or_default())
        .build()
        .with_context(|| format!("failed to build site from {}", wiki_config.build.content))?;

    println!("Wrote {} pages", report.pages_written);
    println!("Copied {} files", report.files_copied);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_help_states_the_cwd_relative_default() {
        let mut command = make_command();
        let help = command.render_long_help().to_string();
        assert!(help.contains("./theme"), "{help}");
        assert!(help.contains("current directory"), "{help}");
    }
}
