use clap::{Args, Parser, Subcommand};
use servercache::layout::{Region, NAME_OFFSET};
use servercache::locate::{detect_cache_path, INSTALL_PATH_ENV};
use servercache::{DecodeOptions, ServerCache};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "servercache", about = "Inspect a Call of Duty 4 servercache.dat")]
struct Cli {
    /// Cache file (default: servercache.dat under $COD4_INSTALL_PATH)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,
    /// Bound the favorites region by the count stored in the header
    #[arg(long, global = true)]
    honor_favorite_count: bool,
    /// Emit every decoded slot, even if an identical record was already shown
    #[arg(long, global = true)]
    keep_duplicates: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ListArgs {
    /// Print records as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List servers from the general region
    List(ListArgs),
    /// List favorite servers
    Favorites(ListArgs),
    /// Print the 16-byte file header as hex
    Header,
    /// Hex-dump the leading bytes of every general-region record
    Dump {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize slot usage of both regions
    Report,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cache = open_cache(&cli)?;

    match cli.command {

        // ── List / Favorites ─────────────────────────────────────────────────
        Commands::List(args) => print_region(&cache, Region::General, args.json)?,
        Commands::Favorites(args) => print_region(&cache, Region::Favorites, args.json)?,

        // ── Header ───────────────────────────────────────────────────────────
        Commands::Header => {
            let header = cache.header();
            println!("0x{}", header.to_hex());
            println!("favorite count {}", header.favorite_count());
        }

        // ── Dump ─────────────────────────────────────────────────────────────
        Commands::Dump { output } => {
            let sink: Box<dyn Write> = match &output {
                Some(path) => Box::new(File::create(path)?),
                None       => Box::new(io::stdout().lock()),
            };
            let mut out = BufWriter::new(sink);
            let ruler: String = (0..NAME_OFFSET as u8).map(|b| format!("{b:02X}")).collect();
            writeln!(out, "  {ruler}")?;
            for slot in cache.slots(Region::General).filter(|s| !s.is_sentinel()) {
                let record = slot.decode();
                writeln!(
                    out,
                    "0x{}{} {}",
                    hex::encode_upper(&slot.as_bytes()[..NAME_OFFSET]),
                    record.name,
                    record.ip,
                )?;
            }
            out.flush()?;
            if let Some(path) = output {
                println!("Dumped to: {}", path.display());
            }
        }

        // ── Report ───────────────────────────────────────────────────────────
        Commands::Report => {
            if let Some(path) = cache.path() {
                println!("Cache: {}", path.display());
            }
            for region in Region::ALL {
                println!("{}", cache.report(region).summary());
            }
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn open_cache(cli: &Cli) -> Result<ServerCache, Box<dyn std::error::Error>> {
    let options = DecodeOptions {
        honor_favorite_count: cli.honor_favorite_count,
        deduplicate:          !cli.keep_duplicates,
    };
    let path = match cli.path.clone().or_else(detect_cache_path) {
        Some(path) => path,
        None => {
            return Err(format!(
                "no cache file given and none found via ${INSTALL_PATH_ENV}; use --path"
            )
            .into())
        }
    };
    Ok(ServerCache::open_with(path, options)?)
}

fn print_region(cache: &ServerCache, region: Region, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let records = cache.records(region);
    if json {
        let records: Vec<_> = records.collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    let mut count = 0usize;
    println!("{:<32} {:<21} {:<20} {:<12} {:>7}", "Name", "Address", "Map", "Mode", "Players");
    for r in records {
        println!(
            "{:<32} {:<21} {:<20} {:<12} {:>3}/{:<3}",
            r.name,
            r.address().to_string(),
            r.map,
            r.game_mode,
            r.players_online,
            r.max_players,
        );
        count += 1;
    }
    println!("{count} {region} server(s)");
    Ok(())
}
