//! REST Adapter Generator CLI
//!
//! Command-line interface for generating REST adapters from `.proto` files
//! annotated with `google.api.http` bindings.

mod console;
mod discovery;
mod plugin;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use console::Console;
use rest_adapter_generator_common::{GeneratorConfig, Service};
use rest_adapter_generator_generator::{require_services, AdapterGenerator};
use rest_adapter_generator_parser::ProtoParser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rest-adapter-generator")]
#[command(version, about = "Generate REST adapters for gRPC services from google.api.http annotations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse proto files and display the recovered services and bindings
    #[command(after_help = "EXAMPLES:\n  \
        # Inspect one file\n  \
        rest-adapter-generator parse --proto proto/users.proto\n\n  \
        # Inspect a directory as JSON\n  \
        rest-adapter-generator parse --proto proto/ --json")]
    Parse {
        /// Proto file or directory of proto files
        #[arg(short, long)]
        proto: PathBuf,

        /// Print the model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a REST adapter from proto files
    #[command(after_help = "EXAMPLES:\n  \
        # Generate from explicit files\n  \
        rest-adapter-generator generate \\\n    \
        --protos users.proto,orders.proto \\\n    \
        --output ./src/gen\n\n  \
        # Scan a directory, with message types under crate::pb\n  \
        rest-adapter-generator generate \\\n    \
        --proto-dir ./proto \\\n    \
        --types-path crate::pb \\\n    \
        --output ./src/gen")]
    Generate {
        /// Comma-separated list of proto file paths
        #[arg(short, long, value_delimiter = ',', conflicts_with = "proto_dir")]
        protos: Option<Vec<PathBuf>>,

        /// Directory to scan recursively for proto files (alternative to --protos)
        #[arg(long, conflicts_with = "protos")]
        proto_dir: Option<PathBuf>,

        /// YAML generator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Module path of the request/response types (overrides config)
        #[arg(long)]
        types_path: Option<String>,

        /// Crate path of the adapter runtime (overrides config)
        #[arg(long)]
        runtime_crate: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,
    },

    /// Run as a plugin: JSON request on stdin, JSON response on stdout
    Plugin,
}

struct GenerateOptions<'a> {
    protos: Option<&'a [PathBuf]>,
    proto_dir: Option<&'a Path>,
    config: Option<&'a Path>,
    types_path: Option<&'a str>,
    runtime_crate: Option<&'a str>,
    output: &'a Path,
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plugin => {
            // stdout is the response channel
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            plugin::run(stdin.lock(), stdout.lock(), cli.verbose)?;
        }
        Commands::Parse { proto, json } => {
            let stdout = std::io::stdout();
            parse_command(&proto, json, cli.verbose, &mut stdout.lock())?;
        }
        Commands::Generate {
            protos,
            proto_dir,
            config,
            types_path,
            runtime_crate,
            output,
        } => {
            generate_command(GenerateOptions {
                protos: protos.as_deref(),
                proto_dir: proto_dir.as_deref(),
                config: config.as_deref(),
                types_path: types_path.as_deref(),
                runtime_crate: runtime_crate.as_deref(),
                output: &output,
                verbose: cli.verbose,
            })?;
        }
    }

    Ok(())
}

/// Print the model to `out`. With `json`, `out` receives only the JSON
/// document and progress goes to stderr.
fn parse_command<W: Write>(proto: &Path, json: bool, verbose: bool, out: &mut W) -> Result<()> {
    let console = if json {
        Console::stderr(verbose)
    } else {
        Console::stdout(verbose)
    };
    if verbose {
        console.step("Verbose mode enabled");
    }

    let paths = if proto.is_dir() {
        discovery::discover_protos(proto, &console)?
    } else {
        vec![proto.to_path_buf()]
    };

    let services = load_services(&paths, &console)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &services).context("Failed to serialize model")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "\n{}", "✓ Parse successful!".green().bold())?;
    writeln!(out, "  Services: {}", services.len())?;
    writeln!(
        out,
        "  Methods: {}",
        services.iter().map(|s| s.methods.len()).sum::<usize>()
    )?;

    for service in &services {
        writeln!(out, "\n{}", service.full_name.bold())?;
        for method in &service.methods {
            let binding = &method.binding;
            writeln!(
                out,
                "  • {} {} {}",
                method.name.cyan(),
                binding.verb.to_string().yellow(),
                binding.path_template
            )?;
            if verbose {
                writeln!(out, "    Input: {}", method.input_type)?;
                writeln!(out, "    Output: {}", method.output_type)?;
                if let Some(body) = &binding.body_selector {
                    writeln!(out, "    Body: {}", body)?;
                }
            }
        }
    }

    Ok(())
}

fn generate_command(options: GenerateOptions<'_>) -> Result<()> {
    let console = Console::stdout(options.verbose);
    if options.verbose {
        console.step("Verbose mode enabled");
    }

    let paths = match (options.protos, options.proto_dir) {
        (Some(protos), _) => protos.to_vec(),
        (None, Some(dir)) => {
            console.step(format!("Scanning directory: {}", dir.display()));
            discovery::discover_protos(dir, &console)?
        }
        (None, None) => anyhow::bail!("Either --protos or --proto-dir must be specified"),
    };

    if paths.is_empty() {
        anyhow::bail!("No proto files found");
    }

    let mut config = match options.config {
        Some(path) => GeneratorConfig::load(path).context("Failed to load config")?,
        None => GeneratorConfig::default(),
    };
    if let Some(types_path) = options.types_path {
        config.types_path = Some(types_path.to_string());
    }
    if let Some(runtime_crate) = options.runtime_crate {
        config.runtime_crate = runtime_crate.to_string();
    }

    console.detail(format!("Runtime crate: {}", config.runtime_crate));
    console.detail(format!(
        "Types path: {}",
        config.types_path.as_deref().unwrap_or("(including module)")
    ));
    console.detail(format!("Output: {}", options.output.display()));

    console.step(format!("Parsing {} proto files...", paths.len()));
    let services = load_services(&paths, &console)?;
    let services =
        require_services(&services).context("Nothing to generate from the given protos")?;

    console.step("Generating adapter...");
    let generator = AdapterGenerator::new(config).context("Failed to create generator")?;
    let adapter = generator
        .generate_to_directory(services, options.output)
        .context("Failed to generate adapter")?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Services:".bold());
    for name in &adapter.summary.services {
        println!("  • {}", name.cyan());
    }
    println!("  Methods: {}", adapter.summary.method_count);
    println!("\n{}", "Generated files:".bold());
    println!("  📄 {}", generator.output_path(options.output).display());

    Ok(())
}

/// Read and parse each proto file, concatenating services in path order
fn load_services(paths: &[PathBuf], console: &Console) -> Result<Vec<Service>> {
    let mut services = Vec::new();

    for path in paths {
        let parser = ProtoParser::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;

        let found = parser.parse();
        console.detail(format!(
            "{}: {} services",
            parser.origin(),
            found.len().to_string().yellow()
        ));
        services.extend(found);
    }

    Ok(services)
}
