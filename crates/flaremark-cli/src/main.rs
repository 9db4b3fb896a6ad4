use anyhow::{Context, Result, bail};
use clap::Parser;
use flaremark_config::Config;
use flaremark_engine::{HtmlRenderer, Node, StyleMode, parse_document, standard_registry};
use std::path::{Path, PathBuf};
use std::{fs, io::Write, process};

mod args;

use args::Args;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let registry = standard_registry();
    let doc = parse_document(&registry, &text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let error_count = report_errors(&doc);
    if args.strict && error_count > 0 {
        bail!("{error_count} parse error(s) in {}", args.input.display());
    }

    let mut renderer = HtmlRenderer::new(config.html.clone());
    let html = if config.standalone {
        renderer.render_page(&doc, &page_title(&args.input))
    } else {
        renderer.render(&doc)
    };

    let output = output_path(&args.input, args.output.as_deref());
    write_output(output.as_deref(), &html)?;
    Ok(())
}

/// Loads the config file and applies command-line overrides on top.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?
        }
        None => Config::load()?.unwrap_or_default(),
    };

    if args.class_styles {
        config.html.style_mode = StyleMode::Class;
    }
    if let Some(width) = args.indent {
        config.html.indent_width = width;
    }
    config.standalone |= args.standalone;
    Ok(config)
}

/// Logs every contained parse error and returns how many there were.
fn report_errors(doc: &Node) -> usize {
    let mut count = 0;
    for error in doc.errors() {
        if let Node::Error { message, detail } = error {
            log::warn!("{message}");
            log::debug!("{detail}");
        }
        count += 1;
    }
    count
}

fn output_path(input: &Path, output: Option<&Path>) -> Option<PathBuf> {
    match output {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path.to_path_buf()),
        None => Some(input.with_extension("html")),
    }
}

fn page_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Writes to `path`, or to stdout when there is none.
fn write_output(path: Option<&Path>, html: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
