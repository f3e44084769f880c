use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use tally::barcode;
use tally::capability::{BarcodeSource, TallyView};
use tally::config::Config;
use tally::logging::init_tracing;
use tally::model::{Product, TallyEntry};
use tally::session::{SaveOutcome, TallySession};
use tally::store::{FileStore, TallyStore};

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Count inventory by barcode")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store file, overrides the configured one
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsCommand,
    },
    /// Show the current tally list
    List,
    /// Scan one barcode, adjust it, and save
    Scan {
        /// Barcode to record; read from stdin when omitted
        barcode: Option<String>,
        /// Press "+" this many times before saving
        #[arg(long, default_value_t = 0)]
        plus: u32,
        /// Press "-" this many times before saving
        #[arg(long, default_value_t = 0)]
        minus: u32,
        /// Override the product name
        #[arg(long)]
        name: Option<String>,
    },
    /// Interactive counting over stdin
    Count,
}

#[derive(Subcommand, Debug)]
enum ProductsCommand {
    /// Replace the catalog with a JSON array of products
    Import { file: PathBuf },
    /// Print the catalog
    List,
}

/// Reads codes line by line, dropping anything that is not EAN-8/EAN-13.
struct LineScanner<R> {
    input: R,
    verify_check_digit: bool,
}

impl<R: BufRead> BarcodeSource for LineScanner<R> {
    fn next_scan(&mut self) -> Option<String> {
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read scan input");
                    return None;
                }
            }
            let code = line.trim();
            if code.is_empty() {
                continue;
            }
            match barcode::recognize(code, self.verify_check_digit) {
                Ok(_) => return Some(code.to_string()),
                Err(e) => eprintln!("rejected '{code}': {e}"),
            }
        }
    }
}

struct TableView<W> {
    out: W,
}

impl<W: Write> TallyView for TableView<W> {
    fn render(&mut self, tallies: &[TallyEntry]) {
        if let Err(e) = write_table(&mut self.out, tallies) {
            tracing::warn!(error = %e, "failed to render tally list");
        }
    }
}

fn write_table<W: Write>(out: &mut W, tallies: &[TallyEntry]) -> io::Result<()> {
    if tallies.is_empty() {
        return writeln!(out, "(no tallies)");
    }
    writeln!(out, "{:>4}  {:<14}  {:>6}  {}", "ID", "BARCODE", "QTY", "NAME")?;
    for entry in tallies {
        writeln!(
            out,
            "{:>4}  {:<14}  {:>6}  {}",
            entry.id, entry.barcode, entry.quantity, entry.name
        )?;
    }
    Ok(())
}

fn print_outcome(outcome: &SaveOutcome) {
    let verb = if outcome.created { "added" } else { "updated" };
    println!(
        "{verb} #{} {} '{}' -> {}",
        outcome.entry.id, outcome.entry.barcode, outcome.entry.name, outcome.entry.quantity
    );
    if !outcome.persisted {
        eprintln!("warning: tally list could not be written to the store");
    }
}

fn run_scan(
    session: &mut TallySession<FileStore>,
    config: &Config,
    barcode_arg: Option<String>,
    plus: u32,
    minus: u32,
    name: Option<String>,
) -> Result<()> {
    match barcode_arg {
        Some(code) => {
            barcode::recognize(&code, config.scan.validate_checksum)
                .with_context(|| format!("invalid barcode '{code}'"))?;
            session.begin_scan();
            session.complete_scan(&code);
        }
        None => {
            let mut scanner = LineScanner {
                input: io::stdin().lock(),
                verify_check_digit: config.scan.validate_checksum,
            };
            if !session.scan_with(&mut scanner) {
                bail!("no barcode scanned");
            }
        }
    }

    for _ in 0..plus {
        session.increment();
    }
    for _ in 0..minus {
        session.decrement();
    }
    if let Some(name) = name {
        session.set_name(name);
    }

    if let Some(outcome) = session.save() {
        print_outcome(&outcome);
    }
    Ok(())
}

fn run_count<R: BufRead>(
    session: &mut TallySession<FileStore>,
    mut input: R,
    verify_check_digit: bool,
) -> Result<()> {
    println!("scan a barcode, or: list, quit");
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        let command = line.trim();

        if session.buffer().is_none() {
            match command {
                "" => continue,
                "quit" | "exit" => break,
                "list" => session.render(&mut TableView { out: io::stdout() }),
                code => match barcode::recognize(code, verify_check_digit) {
                    Ok(symbology) => {
                        session.begin_scan();
                        session.complete_scan(code);
                        if let Some(buffer) = session.buffer() {
                            println!(
                                "{} {} '{}' qty {}  (+, -, qty N, name TEXT, save, cancel)",
                                symbology.label(),
                                buffer.barcode,
                                buffer.name,
                                buffer.quantity
                            );
                        }
                    }
                    Err(e) => eprintln!("rejected '{code}': {e}"),
                },
            }
            continue;
        }

        match command {
            "+" => session.increment(),
            "-" => session.decrement(),
            "" | "save" => {
                if let Some(outcome) = session.save() {
                    print_outcome(&outcome);
                }
                continue;
            }
            "cancel" => {
                session.cancel();
                println!("discarded");
                continue;
            }
            other => {
                if let Some(name) = other.strip_prefix("name ") {
                    session.set_name(name.trim());
                } else if let Some(qty) = other.strip_prefix("qty ") {
                    match qty.trim().parse::<i64>() {
                        Ok(quantity) => session.set_quantity(quantity),
                        Err(_) => eprintln!("not a number: '{}'", qty.trim()),
                    }
                } else {
                    eprintln!("unknown command '{other}'");
                }
            }
        }
        if let Some(buffer) = session.buffer() {
            println!("  '{}' qty {}", buffer.name, buffer.quantity);
        }
    }

    if session.buffer().is_some() {
        eprintln!("unsaved edit discarded");
        session.cancel();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging.level);

    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(|| config.store.resolved_path());
    let store = TallyStore::new(FileStore::new(store_path));
    tracing::debug!(store = %store.backend().path().display(), "using store");

    let mut session = TallySession::open(store, config.scan.default_quantity);

    match cli.command {
        Command::Products { action } => match action {
            ProductsCommand::Import { file } => {
                let content = std::fs::read_to_string(&file)
                    .with_context(|| format!("reading {}", file.display()))?;
                let products: Vec<Product> = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", file.display()))?;
                let count = products.len();
                if !session.import_products(products) {
                    bail!("failed to write product catalog");
                }
                println!("imported {count} products");
            }
            ProductsCommand::List => {
                for product in session.products() {
                    println!(
                        "{:>4}  {:<14}  {:<10}  {}",
                        product.id, product.barcode, product.system_code, product.name
                    );
                }
            }
        },
        Command::List => session.render(&mut TableView { out: io::stdout() }),
        Command::Scan {
            barcode,
            plus,
            minus,
            name,
        } => run_scan(&mut session, &config, barcode, plus, minus, name)?,
        Command::Count => run_count(
            &mut session,
            io::stdin().lock(),
            config.scan.validate_checksum,
        )?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scanner_skips_invalid_codes() {
        let input = "\nabc\n7891000100104\n7891000100103\n";
        let mut scanner = LineScanner {
            input: input.as_bytes(),
            verify_check_digit: true,
        };
        assert_eq!(scanner.next_scan().as_deref(), Some("7891000100103"));
        assert_eq!(scanner.next_scan(), None);
    }

    #[test]
    fn table_lists_each_entry() {
        let tallies = vec![TallyEntry {
            id: 1,
            barcode: "7891000100103".to_string(),
            name: "Rice 1kg".to_string(),
            system_code: None,
            quantity: 3,
        }];
        let mut out = Vec::new();
        write_table(&mut out, &tallies).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("7891000100103"));
        assert!(text.contains("Rice 1kg"));
    }

    #[test]
    fn cli_parses_scan_flags() {
        let cli = Cli::parse_from(["tally", "scan", "12345670", "--plus", "2", "--name", "Beans"]);
        match cli.command {
            Command::Scan {
                barcode,
                plus,
                minus,
                name,
            } => {
                assert_eq!(barcode.as_deref(), Some("12345670"));
                assert_eq!(plus, 2);
                assert_eq!(minus, 0);
                assert_eq!(name.as_deref(), Some("Beans"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
