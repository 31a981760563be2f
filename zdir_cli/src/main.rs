use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{error::ErrorKind, CommandFactory, Parser};
use path_clean::PathClean;
use zdir::{resolve, Layout, NameCatalog, Record, ResultExt};

#[derive(Parser, Debug)]
#[command(name = "zdir", author, version, about)]
struct Args {
    /// Input ZDIR directory file
    #[arg(index = 1)]
    directory: PathBuf,

    /// Input ZZDATA archive(s). Only the first one is read
    #[arg(index = 2, required = true, num_args = 1..)]
    archives: Vec<PathBuf>,

    /// Name list, one backslash separated path per line
    #[arg(short, long, env = "ZDIR_NAMES")]
    names: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = resolve::EXTRACTED)]
    output: PathBuf,

    /// Record layout of the directory file
    #[arg(long, default_value_t = Layout::Canonical)]
    layout: Layout,

    /// Detect the record layout from the directory file size
    #[arg(long, default_value = "false", conflicts_with = "layout")]
    detect: bool,

    /// Print resolved paths, offsets and sizes without extracting
    #[arg(short, long, default_value = "false")]
    list: bool,

    /// Verbose
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<ExitCode, zdir::Error> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Args::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => err.exit(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    run(args)?;
    Ok(ExitCode::SUCCESS)
}

fn run(args: Args) -> Result<(), zdir::Error> {
    let layout = match args.detect {
        true => zdir::detect_layout(&args.directory).context("failed to load headers")?,
        false => args.layout,
    };
    let records =
        zdir::read_records(&args.directory, layout).context("failed to load headers")?;

    let catalog = match &args.names {
        Some(path) => NameCatalog::load(path)
            .context(format!("failed to load name list {}", path.display()))?,
        None => {
            tracing::warn!("no name list given, every entry is written to {}", resolve::UNKNOWN);
            NameCatalog::new()
        }
    };

    if args.list {
        for record in records {
            let path = resolve::output_path(&args.output, record, &catalog);
            println!(
                "{} {:#x} {}",
                path.display(),
                record.byte_offset(),
                record.size()
            );
        }
        return Ok(());
    }

    if layout != Layout::Canonical {
        return Err(zdir::Error::UnsupportedLayout(layout)).context("failed to extract");
    }
    let archive = &args.archives[0];
    if args.archives.len() > 1 {
        tracing::warn!(
            unused = args.archives.len() - 1,
            "only {} is read, additional archives are ignored",
            archive.display()
        );
    }

    for record in records {
        let path = resolve::output_path(&args.output, record, &catalog);
        extract(archive, &args.output, &path, record).context(path.display().to_string())?;
        println!("{}", path.display());
    }
    Ok(())
}

fn extract(
    archive: &Path,
    output: &Path,
    path: &Path,
    record: Record,
) -> Result<(), zdir::Error> {
    match path.strip_prefix(output) {
        Ok(rel) if !rel.clean().starts_with("..") => {}
        _ => {
            return Err(zdir::Error::WriteOutsideOutput(
                path.to_string_lossy().to_string(),
            ))
        }
    }
    zdir::extract::extract_slice(archive, path, record.byte_offset(), record.size() as u64)?;
    Ok(())
}
