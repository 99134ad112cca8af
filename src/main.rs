extern crate clap;
extern crate symtab_reader;

mod backend {
    pub mod abstract_emitter;
    pub mod idc_emitter;
    pub mod txt_emitter;
    pub mod json_emitter;
}
use std::process::ExitCode;
use clap::{CommandFactory, Parser, ValueEnum};
use clap::error::ErrorKind;
use log::{debug, info, LevelFilter};
use anyhow::{Context, Result};
use symtab_reader::SymtabReader;
use backend::abstract_emitter::AbstractEmitter;
use backend::idc_emitter::{IdcEmitter, DEFAULT_BASE_ADDR};
use backend::txt_emitter::TxtEmitter;
use backend::json_emitter::JsonEmitter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    // IDA IDC script
    Idc,
    // "<name> 0x<address>" per line
    Txt,
    // array of {address, name} objects
    Json,
}

#[derive(Clone, Parser)]
#[command(name = "symtab-idc", version = "0.1.0", about = "Extract the embedded symbol table of a firmware image",
          after_help = "Paths starting with '-' go after a '--' separator.")]
struct Args {
    // path to the firmware image
    input_binary_file: String,
    // path to the generated script
    output_text_file: String,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Idc)]
    // output format
    format: OutputFormat,
    #[arg(short, long, value_parser = parse_hex)]
    // load address of the image, BASE_ADDR in the IDC script (default 0x10000000)
    base_addr: Option<u64>,
    #[arg(short, long, default_value_t = false)]
    // print debug messages
    verbose: bool,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value {:?}: {}", s, e))
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn make_emitter(args: &Args) -> Box<dyn AbstractEmitter> {
    match args.format {
        OutputFormat::Idc => Box::new(IdcEmitter::new(args.base_addr.unwrap_or(DEFAULT_BASE_ADDR))),
        OutputFormat::Txt => Box::new(TxtEmitter::new()),
        OutputFormat::Json => Box::new(JsonEmitter::new()),
    }
}

// the output file is only touched once the whole table parsed
fn extract(args: &Args) -> Result<()> {
    let reader = SymtabReader::new(&args.input_binary_file)?;
    let table = reader.parse()?;
    info!("{} symbols at {:#x}..{:#x}", table.len(), table.offset, table.end_offset);

    let mut emitter = make_emitter(args);
    let rendered = emitter.emit_table(&table)?;
    debug!("[{}] emitted {} entries, {} bytes", emitter.name(), emitter.checksum(), rendered.len());

    std::fs::write(&args.output_text_file, rendered)
        .with_context(|| format!("unable to write {}", args.output_text_file))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // anything but two paths is a usage error, --help included
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(_) => {
            println!("{}", Args::command().render_usage());
            return ExitCode::FAILURE;
        }
    };
    init_logger(args.verbose);

    match extract(&args) {
        Ok(()) => {
            println!("Symbol table extracted successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
