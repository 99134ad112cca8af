pub mod error;
pub mod reader;
pub mod signature;
pub mod symtab;

pub use error::FormatError;
pub use reader::SymtabReader;
pub use symtab::{SymbolEntry, SymbolTable};
