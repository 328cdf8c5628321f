use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use specview_core::index::{self, Endpoint, HttpMethod};
use specview_core::parse::{self, Document};
use specview_core::parse::response::ResponseOrRef;
use specview_core::resolve::resolve_as;
use specview_core::synth;

/// Fallback document loaded when no `--input` is given.
const DEFAULT_SPEC: &str = "openapi.yaml";

#[derive(Parser)]
#[command(name = "specview", about = "OpenAPI 3.x documentation viewer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file is a valid OpenAPI document and print a summary
    Validate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the navigation index: endpoints grouped by tag
    Nav {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Show one endpoint: parameters, examples, and client snippets
    Show {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path template of the endpoint, e.g. /pets/{id}
        #[arg(short, long)]
        path: String,

        /// HTTP method of the endpoint
        #[arg(short, long)]
        method: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => cmd_validate(input),

        Commands::Nav { input, format } => cmd_nav(input, format),

        Commands::Show {
            input,
            path,
            method,
        } => cmd_show(input, path, method),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "specview", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load a document, falling back to `openapi.yaml` in the working directory
/// when no input was given. `.json` files are parsed as strict JSON,
/// anything else as YAML.
fn load_document(input: Option<PathBuf>) -> Result<Document> {
    let path = match input {
        Some(path) => path,
        None => {
            let fallback = PathBuf::from(DEFAULT_SPEC);
            if !fallback.exists() {
                bail!("no input given and {DEFAULT_SPEC} not found — pass --input <file>");
            }
            fallback
        }
    };

    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let doc = match ext {
        "json" => parse::from_json(&content),
        _ => parse::from_yaml(&content),
    }
    .with_context(|| format!("invalid OpenAPI file {}", path.display()))?;

    Ok(doc)
}

fn cmd_validate(input: Option<PathBuf>) -> Result<()> {
    let doc = load_document(input)?;

    eprintln!(
        "Valid OpenAPI {} document: {}",
        doc.spec.openapi, doc.spec.info.title
    );
    eprintln!("  Version: {}", doc.spec.info.version);
    eprintln!("  Paths: {}", doc.spec.paths.len());
    eprintln!("  Endpoints: {}", index::endpoints(&doc).len());
    if let Some(ref components) = doc.spec.components {
        eprintln!("  Schemas: {}", components.schemas.len());
    }

    Ok(())
}

fn cmd_nav(input: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let doc = load_document(input)?;
    let summary = build_nav_summary(&doc);

    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_nav_summary(doc: &Document) -> serde_json::Value {
    let groups: Vec<serde_json::Value> = index::index(doc)
        .iter()
        .map(|group| {
            let endpoints: Vec<serde_json::Value> = group
                .endpoints
                .iter()
                .map(|ep| {
                    serde_json::json!({
                        "method": ep.method.as_str(),
                        "path": ep.path,
                        "summary": ep.operation.summary,
                        "operationId": ep.operation.operation_id,
                    })
                })
                .collect();
            serde_json::json!({
                "tag": group.tag.name,
                "description": group.tag.description,
                "endpoints": endpoints,
            })
        })
        .collect();

    serde_json::json!({
        "title": doc.spec.info.title,
        "version": doc.spec.info.version,
        "groups": groups,
    })
}

fn cmd_show(input: Option<PathBuf>, path: String, method: String) -> Result<()> {
    let doc = load_document(input)?;

    let method = HttpMethod::parse(&method)
        .with_context(|| format!("unsupported HTTP method '{method}'"))?;
    let endpoint = index::endpoints(&doc)
        .into_iter()
        .find(|ep| ep.path == path && ep.method == method)
        .with_context(|| format!("no endpoint {} {path} in document", method.as_str()))?;

    print_endpoint(&endpoint, &doc);
    Ok(())
}

fn print_endpoint(endpoint: &Endpoint, doc: &Document) {
    let op = &endpoint.operation;

    println!("{} {}", endpoint.method.as_str(), endpoint.path);
    if let Some(summary) = &op.summary {
        println!("{summary}");
    }
    if let Some(description) = &op.description {
        println!("\n{description}");
    }

    let params = synth::resolved_parameters(op, doc);
    if !params.is_empty() {
        println!("\nParameters:");
        for p in &params {
            let required = if p.required { ", required" } else { "" };
            let location = serde_json::to_value(p.location)
                .ok()
                .and_then(|v| v.as_str().map(String::from))
                .unwrap_or_default();
            print!("  {} ({location}{required})", p.name);
            if let Some(description) = &p.description {
                print!(" — {description}");
            }
            println!();
        }
    }

    if let Some(body) = synth::request_body_example(op, doc) {
        println!("\nRequest body (application/json):");
        if let Ok(json) = serde_json::to_string_pretty(&body) {
            println!("{json}");
        }
    }

    print_responses(endpoint, doc);

    println!("\ncURL:");
    println!("{}", synth::curl(endpoint, doc));

    println!("\nJavaScript:");
    println!("{}", synth::fetch_snippet(endpoint, doc));

    for sample in &op.code_samples {
        println!("\nCode sample ({}):", sample.lang);
        println!("{}", sample.source);
    }
}

fn print_responses(endpoint: &Endpoint, doc: &Document) {
    if endpoint.operation.responses.is_empty() {
        return;
    }

    println!("\nResponses:");
    for (status, response_or_ref) in &endpoint.operation.responses {
        let response = match response_or_ref {
            ResponseOrRef::Response(r) => Some(r.clone()),
            ResponseOrRef::Ref { ref_path } => resolve_as(doc, ref_path),
        };
        let Some(response) = response else {
            log::warn!("skipping unresolvable response reference for status {status}");
            continue;
        };

        println!("  {status} — {}", response.description);
        for (media_type, media) in &response.content {
            let Some(schema) = &media.schema else { continue };
            let example = synth::example_of(schema, doc);
            if let Ok(json) = serde_json::to_string_pretty(&example) {
                println!("  {media_type}:");
                for line in json.lines() {
                    println!("    {line}");
                }
            }
        }
    }
}
