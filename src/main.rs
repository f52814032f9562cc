use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use stockreport::{
    Company, DispatchOptions, EmailAddress, InventoryLine, PipelineError, ReportBuilder,
    ReportConfig,
};

/// Generates PDF inventory reports from company and inventory JSON exports.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lays out the report and writes it as a PDF file (or Base64 on stdout).
    Generate {
        /// Company JSON (`nit`, `nombre`, `direccion`, `telefono`).
        #[arg(long)]
        company: PathBuf,
        /// Inventory JSON: an array of lines or a paginated `{ "results": [...] }` page.
        #[arg(long)]
        inventory: PathBuf,
        /// Theme and output configuration.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        file_name: Option<String>,
        /// Print the document as Base64 instead of saving it.
        #[arg(long, default_value_t = false)]
        base64: bool,
    },
    /// Prints the JSON request the e-mail backend expects.
    EmailRequest {
        #[arg(long)]
        company: PathBuf,
        #[arg(long)]
        inventory: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Destination address.
        #[arg(long)]
        to: String,
        /// Skip the AI analysis attachment.
        #[arg(long, default_value_t = false)]
        no_ai: bool,
        /// Skip the blockchain integrity seal.
        #[arg(long, default_value_t = false)]
        no_seal: bool,
    },
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("stockreport=info"))
        .init();

    match Cli::parse().command {
        Command::Generate {
            company,
            inventory,
            config,
            out_dir,
            file_name,
            base64,
        } => {
            let mut config = load_config(config.as_deref())?;
            if out_dir.is_some() {
                config.output.directory = out_dir;
            }
            if file_name.is_some() {
                config.output.file_name = file_name;
            }
            let generator = ReportBuilder::new().with_config(config).build()?;
            let (company, lines) = load_inputs(&company, &inventory)?;
            let document = generator.build_report(&company, &lines)?;

            if base64 {
                println!("{}", generator.encode_base64(&document)?);
            } else {
                let path = generator.save(&company, &document)?;
                info!("{} pages written", document.page_count());
                println!("{}", path.display());
            }
        }
        Command::EmailRequest {
            company,
            inventory,
            config,
            to,
            no_ai,
            no_seal,
        } => {
            let destination = EmailAddress::parse(&to)?;
            let generator = ReportBuilder::new()
                .with_config(load_config(config.as_deref())?)
                .build()?;
            let (company, lines) = load_inputs(&company, &inventory)?;
            let document = generator.build_report(&company, &lines)?;
            let options = DispatchOptions {
                include_ai_analysis: !no_ai,
                include_blockchain_seal: !no_seal,
            };
            let request = generator.dispatch_request(&company, &document, destination, options)?;
            println!("{}", request.to_json()?);
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig, PipelineError> {
    match path {
        Some(path) => ReportConfig::from_file(path),
        None => Ok(ReportConfig::default()),
    }
}

fn load_inputs(
    company: &Path,
    inventory: &Path,
) -> Result<(Company, Vec<InventoryLine>), PipelineError> {
    let company = Company::from_json(&read_input(company)?)?;
    let lines = InventoryLine::list_from_json(&read_input(inventory)?)?;
    info!(
        "Loaded {} inventory lines for '{}'",
        lines.len(),
        company.display_name().unwrap_or("?")
    );
    Ok((company, lines))
}

fn read_input(path: &Path) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })
}
