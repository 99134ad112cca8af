use std::env;
use symtab_reader::SymtabReader;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <firmware.bin>", args[0]);
        std::process::exit(1);
    }

    let reader = match SymtabReader::new(&args[1]) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error reading firmware image: {:#}", e);
            std::process::exit(1);
        }
    };

    let table = match reader.parse() {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error parsing symbol table: {}", e);
            std::process::exit(1);
        }
    };

    println!("table at {:#x}..{:#x}, {} symbols", table.offset, table.end_offset, table.len());
    for entry in &table {
        println!("{:#018x}: {}", entry.address().unwrap_or_default(), entry.name);
    }
}
