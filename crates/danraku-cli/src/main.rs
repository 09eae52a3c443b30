//! `danraku`: converts Markdown to HTML with Japanese paragraph indentation
//! and punctuation spacing.
//!
//! Usage:
//!   danraku [OPTIONS] [INPUT]...
//!
//! Inputs are Markdown files or directories (scanned recursively for `*.md`).
//! Without inputs, Markdown is read from stdin. HTML goes to stdout unless
//! `--output` names a directory for `<stem>.html` files.

use anyhow::{Context, Result, bail};
use clap::Parser;
use danraku_config::Config;
use danraku_engine::{DanrakuOptions, RuleSet, convert_with_rules, io};
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "danraku", version, about)]
struct Cli {
    /// Markdown files or directories. Reads stdin when empty.
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Write one `.html` file per input into this directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/danraku/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not indent paragraphs that open with an ASCII letter or digit
    #[arg(long)]
    ignore_alphabet: bool,

    /// Indent paragraphs that open with `―`
    #[arg(long)]
    no_ignore_dash: bool,

    /// Never insert spaces after `!`, `?`, `！` or `？`
    #[arg(long)]
    no_spacing: bool,

    /// Always use a full-width space after punctuation
    #[arg(long)]
    no_byte_sensitive: bool,

    /// Write a config file with the default settings and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Command-line flags win over the config file.
    fn options(&self, config: &Config) -> DanrakuOptions {
        let mut options = config.options();
        if self.ignore_alphabet {
            options.jisage.ignore_alphabet = true;
        }
        if self.no_ignore_dash {
            options.jisage.ignore_dash = false;
        }
        if self.no_spacing {
            options.yakumono.spacing_enabled = false;
        }
        if self.no_byte_sensitive {
            options.yakumono.byte_sensitive = false;
        }
        options
    }
}

/// One Markdown file and where its HTML goes (`None` for stdout).
#[derive(Debug, PartialEq, Eq)]
struct Job {
    input: PathBuf,
    output: Option<PathBuf>,
}

/// Expands directories and pairs every input file with its output path.
/// Files found in a directory keep their relative location under `out_dir`.
fn plan(inputs: &[PathBuf], out_dir: Option<&Path>) -> Result<Vec<Job>> {
    let mut jobs = vec![];
    for input in inputs {
        if input.is_dir() {
            let files = io::scan_markdown_files(input)
                .with_context(|| format!("Failed to scan {}", input.display()))?;
            for file in files {
                let output = out_dir.map(|out| {
                    let rel_dir = file
                        .strip_prefix(input)
                        .ok()
                        .and_then(Path::parent)
                        .unwrap_or(Path::new(""));
                    io::html_path_for(&file, &out.join(rel_dir))
                });
                jobs.push(Job {
                    input: file,
                    output,
                });
            }
        } else {
            jobs.push(Job {
                input: input.clone(),
                output: out_dir.map(|out| io::html_path_for(input, out)),
            });
        }
    }
    Ok(jobs)
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write config file at {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    if cli.init_config {
        return init_config(&config_path);
    }

    let config = Config::load_from_path(&config_path)?.unwrap_or_default();
    let options = cli.options(&config);
    let rules = RuleSet::standard();
    log::debug!("options: {options:?}");

    if cli.inputs.is_empty() {
        if cli.output.is_some() {
            bail!("--output needs at least one input file or directory");
        }
        let mut markdown = String::new();
        std::io::stdin()
            .read_to_string(&mut markdown)
            .context("Failed to read stdin")?;
        print!("{}", convert_with_rules(&markdown, &rules, &options));
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for job in plan(&cli.inputs, cli.output.as_deref())? {
        log::info!("Converting {}", job.input.display());
        let markdown = io::read_markdown(&job.input)
            .with_context(|| format!("Failed to read {}", job.input.display()))?;
        let html = convert_with_rules(&markdown, &rules, &options);
        match &job.output {
            Some(path) => {
                io::write_html(path, &html)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                log::info!("Wrote {}", path.display());
            }
            None => stdout.write_all(html.as_bytes())?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("danraku").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["--ignore-alphabet", "--no-spacing"]);
        let options = cli.options(&Config::default());

        assert!(options.jisage.ignore_alphabet);
        assert!(options.jisage.ignore_dash);
        assert!(!options.yakumono.spacing_enabled);
        assert!(options.yakumono.byte_sensitive);
    }

    #[test]
    fn config_is_kept_without_flags() {
        let mut config = Config::default();
        config.yakumono.byte_sensitive = false;
        config.jisage.ignore_dash = false;

        let options = parse(&[]).options(&config);

        assert_eq!(options, config.options());
    }

    #[test]
    fn plan_mirrors_directory_layout() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("章")).unwrap();
        std::fs::write(dir.path().join("序.md"), "序文").unwrap();
        std::fs::write(dir.path().join("章/一.md"), "本文").unwrap();
        let out = PathBuf::from("site");

        let jobs = plan(&[dir.path().to_path_buf()], Some(&out)).unwrap();

        assert_eq!(
            jobs,
            vec![
                Job {
                    input: dir.path().join("序.md"),
                    output: Some(PathBuf::from("site/序.html")),
                },
                Job {
                    input: dir.path().join("章/一.md"),
                    output: Some(PathBuf::from("site/章/一.html")),
                },
            ]
        );
    }

    #[test]
    fn plan_without_output_dir_goes_to_stdout() {
        let jobs = plan(&[PathBuf::from("a.md")], None).unwrap();
        assert_eq!(
            jobs,
            vec![Job {
                input: PathBuf::from("a.md"),
                output: None,
            }]
        );
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path).unwrap();
        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, Config::default());

        assert!(init_config(&path).is_err());
    }

    #[test]
    fn run_writes_html_files() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.md");
        std::fs::write(&input, "素晴らしい!本当に").unwrap();
        let out = dir.path().join("out");
        let cli = parse(&[
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
        ]);

        run(&cli).unwrap();

        assert_eq!(
            std::fs::read_to_string(out.join("doc.html")).unwrap(),
            "<p>　素晴らしい! 本当に</p>\n"
        );
    }
}
