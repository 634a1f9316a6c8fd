//! Simple CLI that converts an HTML file (or stdin) to Markdown.
//!
//! Usage: `article-md [--json] [--url <base>] [FILE]`
//!
//! Markdown goes to stdout; with `--json` a `{"title", "markdown"}` object is
//! printed instead. Log output goes to stderr and follows `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::process;

use article_md::{convert_with_options, Options};
use tracing_subscriber::EnvFilter;

struct Args {
    json: bool,
    url: Option<String>,
    path: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        json: false,
        url: None,
        path: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--url" => {
                args.url = Some(iter.next().ok_or("--url needs a value")?);
            }
            "-h" | "--help" => {
                return Err("usage: article-md [--json] [--url <base>] [FILE]".to_string());
            }
            _ if arg.starts_with('-') => return Err(format!("unknown flag: {arg}")),
            _ => args.path = Some(arg),
        }
    }

    Ok(args)
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut html = String::new();
            io::stdin().read_to_string(&mut html)?;
            Ok(html)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let html = match read_input(args.path.as_deref()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            process::exit(1);
        }
    };

    let options = Options {
        url: args.url,
        ..Options::default()
    };

    let conversion = match convert_with_options(&html, &options) {
        Ok(conversion) => conversion,
        Err(err) => {
            eprintln!("Conversion failed: {err}");
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string(&conversion) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize output: {err}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", conversion.markdown);
    }
}
