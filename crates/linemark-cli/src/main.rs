use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linemark_config::{Config, RenderConfig};
use linemark_engine::{
    LineFormatter, RenderOptions, ServiceReply, SymptomRequest, Symptoms, build_prompt,
    parsing::snapshot,
};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "linemark", version, about = "Format generated replies as safe HTML")]
struct Cli {
    /// Config file to use instead of ~/.config/linemark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format raw reply text read from FILE or stdin
    Format {
        /// Input file; stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Treat input as a JSON reply body: {"result": ...} or {"error": ...}
        #[arg(long)]
        reply: bool,

        /// Print the block outline instead of HTML
        #[arg(long, conflicts_with = "page")]
        outline: bool,

        /// Wrap the fragment in a standalone HTML page
        #[arg(long)]
        page: bool,

        /// Page title used with --page
        #[arg(long, default_value = "Analysis")]
        title: String,
    },
    /// Validate symptoms and print the instruction text for the service
    Prompt {
        symptoms: String,

        /// Print the JSON request body instead of the prompt
        #[arg(long)]
        json: bool,
    },
    /// Write a config file with the default class names
    InitConfig,
}

fn render_options(config: RenderConfig) -> RenderOptions {
    RenderOptions {
        heading_class: config.heading_class,
        disclaimer_class: config.disclaimer_class,
        error_class: config.error_class,
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn wrap_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        html_escape::encode_text(title)
    )
}

struct FormatArgs<'a> {
    file: Option<&'a Path>,
    reply: bool,
    outline: bool,
    page: bool,
    title: &'a str,
}

fn run_format(formatter: &LineFormatter, args: FormatArgs<'_>) -> Result<String> {
    let input = read_input(args.file)?;

    let reply = if args.reply {
        ServiceReply::from_json(&input).context("Input is not a service reply")?
    } else {
        ServiceReply::Success {
            result: Some(input),
        }
    };

    if args.outline {
        return Ok(match &reply {
            ServiceReply::Success { result } => {
                snapshot::outline(&formatter.parse(result.as_deref()).blocks)
            }
            ServiceReply::Failure { error } => format!("error {error:?}\n"),
        });
    }

    let html = formatter.render_reply(&reply);
    Ok(if args.page {
        wrap_page(args.title, &html)
    } else {
        html
    })
}

fn run_prompt(symptoms: &str, json: bool) -> Result<String> {
    let symptoms = Symptoms::parse(symptoms)?;
    if json {
        return SymptomRequest::from(&symptoms)
            .to_json()
            .context("Failed to serialize request body");
    }
    Ok(build_prompt(&symptoms))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_config(path: Option<&Path>) -> Result<String> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);
    if path.exists() {
        anyhow::bail!("Config file already exists at {}", path.display());
    }
    Config::default()
        .save_to_path(&path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    log::info!("wrote default config to {}", path.display());
    Ok(format!("Wrote {}", path.display()))
}

fn load_formatter(config_path: Option<&Path>) -> Result<LineFormatter> {
    let config = Config::load_or_default(config_path)?;
    Ok(LineFormatter::with_options(render_options(config.render)))
}

fn run(cli: Cli) -> Result<()> {
    let output = match cli.command {
        Command::Format {
            file,
            reply,
            outline,
            page,
            title,
        } => run_format(
            &load_formatter(cli.config.as_deref())?,
            FormatArgs {
                file: file.as_deref(),
                reply,
                outline,
                page,
                title: &title,
            },
        )?,
        Command::Prompt { symptoms, json } => run_prompt(&symptoms, json)?,
        Command::InitConfig => init_config(cli.config.as_deref())?,
    };
    print(&output)
}

fn print(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
