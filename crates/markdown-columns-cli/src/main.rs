use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markdown_columns_config::Settings;
use markdown_columns_engine::{ColumnSession, Platform, RenderEnv, html, io, render_markdown};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "markdown-columns",
    version,
    about = "Render markdown with [begin]/[col]/[end] column blocks to HTML"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of ~/.config/markdown-columns/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a markdown file to HTML
    Render(RenderArgs),

    /// Show or change the stored settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Markdown file to render
    file: PathBuf,

    /// Write the HTML here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Render as on a mobile device
    #[arg(long)]
    mobile: bool,

    /// Emit a complete HTML page including the column stylesheet
    #[arg(long)]
    standalone: bool,

    /// Arrange blocks right-to-left for this run
    #[arg(long)]
    rtl: bool,

    /// Let columns wrap for this run
    #[arg(long)]
    wrap: bool,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective settings
    Show,

    /// Change one setting and save it
    Set {
        /// One of rtl_by_default, wrap_by_default, render_on_mobile
        key: String,

        /// true/false (also yes/no, on/off, 1/0)
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        value: bool,
    },

    /// Print the settings file location
    Path,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    log::debug!("Config path: {}", config_path.display());

    match cli.command {
        Command::Render(args) => {
            let settings = Settings::load_or_default(&config_path)
                .with_context(|| format!("loading settings from {}", config_path.display()))?;
            let html = render_file(&args, settings)?;
            match &args.output {
                Some(output) => {
                    io::write_file(output, &html)
                        .with_context(|| format!("writing {}", output.display()))?;
                    log::info!("Rendered {} to {}", args.file.display(), output.display());
                }
                None => print!("{html}"),
            }
        }
        Command::Config(ConfigCommand::Show) => {
            let settings = Settings::load_or_default(&config_path)
                .with_context(|| format!("loading settings from {}", config_path.display()))?;
            print!("{}", format_settings(&settings)?);
        }
        Command::Config(ConfigCommand::Set { key, value }) => {
            let settings = set_setting(&config_path, &key, value)?;
            log::info!("Saved {key} = {value} to {}", config_path.display());
            print!("{}", format_settings(&settings)?);
        }
        Command::Config(ConfigCommand::Path) => println!("{}", config_path.display()),
    }

    Ok(())
}

fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => Settings::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Settings::config_path(),
    }
}

/// Renders `args.file` with the stored settings plus the per-run overrides.
fn render_file(args: &RenderArgs, mut settings: Settings) -> Result<String> {
    let markdown = io::read_file(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    if args.rtl {
        settings.rtl_by_default = true;
    }
    if args.wrap {
        settings.wrap_by_default = true;
    }
    let platform = if args.mobile {
        Platform::Mobile
    } else {
        Platform::Desktop
    };

    let env = RenderEnv::new(settings, platform);
    let doc = render_markdown(&mut ColumnSession::new(), &markdown, &env);
    let body = doc.to_html();

    if args.standalone {
        let title = args
            .file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(html::standalone_page(&title, &body))
    } else {
        Ok(body)
    }
}

fn set_setting(config_path: &Path, key: &str, value: bool) -> Result<Settings> {
    let mut settings = Settings::load_or_default(config_path)
        .with_context(|| format!("loading settings from {}", config_path.display()))?;
    settings.set(key, value)?;
    settings
        .save_to_path(config_path)
        .with_context(|| format!("saving settings to {}", config_path.display()))?;
    Ok(settings)
}

fn format_settings(settings: &Settings) -> Result<String> {
    let mut out = String::new();
    for name in Settings::NAMES {
        out.push_str(&format!("{name} = {}\n", settings.get(name)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(file: PathBuf) -> RenderArgs {
        RenderArgs {
            file,
            output: None,
            mobile: false,
            standalone: false,
            rtl: false,
            wrap: false,
        }
    }

    fn write_markdown(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("notes.md");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["markdown-columns", "config", "set", "wrap_by_default", "yes"])
            .unwrap();

        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Set { ref key, value: true }) if key == "wrap_by_default"
        ));
    }

    #[test]
    fn test_render_file() {
        let dir = TempDir::new().unwrap();
        let file = write_markdown(&dir, "[begin]\na\n[col]2\nb\n[end]\n");

        let html = render_file(&args(file), Settings::default()).unwrap();

        assert_eq!(
            html,
            "<div class=\"columns-parent\"><div style=\"flex:1\"><p>a</p></div><div style=\"flex:2\"><p>b</p></div></div>\n"
        );
    }

    #[test]
    fn test_render_overrides() {
        let dir = TempDir::new().unwrap();
        let file = write_markdown(&dir, "[begin]\na\n[end]\n");
        let mut render_args = args(file);
        render_args.rtl = true;
        render_args.wrap = true;

        let html = render_file(&render_args, Settings::default()).unwrap();

        assert!(html.contains("columns-parent-rtl"));
        assert!(html.contains("class=\"columns-wrap\""));
    }

    #[test]
    fn test_render_standalone_page() {
        let dir = TempDir::new().unwrap();
        let file = write_markdown(&dir, "hello\n");
        let mut render_args = args(file);
        render_args.standalone = true;

        let html = render_file(&render_args, Settings::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>notes</title>"));
        assert!(html.contains("<div><p>hello</p></div>"));
    }

    #[test]
    fn test_render_missing_file() {
        let dir = TempDir::new().unwrap();

        let err = render_file(&args(dir.path().join("nope.md")), Settings::default()).unwrap_err();

        assert!(format!("{err:#}").contains("nope.md"));
    }

    #[test]
    fn test_set_setting_persists() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        set_setting(&config_path, "rtl_by_default", true).unwrap();
        let settings = set_setting(&config_path, "render_on_mobile", false).unwrap();

        assert_eq!(
            settings,
            Settings {
                rtl_by_default: true,
                wrap_by_default: false,
                render_on_mobile: false,
            }
        );
        assert_eq!(
            Settings::load_from_path(&config_path).unwrap(),
            Some(settings)
        );
    }

    #[test]
    fn test_set_unknown_setting_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        assert!(set_setting(&config_path, "columns", true).is_err());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_format_settings() {
        assert_eq!(
            format_settings(&Settings::default()).unwrap(),
            "rtl_by_default = false\nwrap_by_default = false\nrender_on_mobile = true\n"
        );
    }
}
