use crate::backend::abstract_emitter::{AbstractEmitter, BufferEmitter};
use anyhow::Result;
use std::io::Write;
use symtab_reader::SymbolEntry;

pub struct TxtEmitter {
    emitter: BufferEmitter,
}

impl TxtEmitter {
    pub fn new() -> Self {
        Self { emitter: BufferEmitter::new("txt") }
    }
}

impl AbstractEmitter for TxtEmitter {
    fn emitter(&mut self) -> &mut BufferEmitter {
        &mut self.emitter
    }

    fn _emit_header(&mut self) -> Result<()> {
        Ok(())
    }

    fn _emit_entry(&mut self, entry: &SymbolEntry) -> Result<()> {
        writeln!(self.emitter.buffer, "{} 0x{}", entry.name, entry.address_hex)?;
        Ok(())
    }

    fn _emit_footer(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symtab_reader::SymbolTable;

    #[test]
    fn test_one_line_per_symbol() -> Result<()> {
        let mut table = SymbolTable::new(0);
        table.add_entry(SymbolEntry::new("0000000000000000".to_string(), "_text".to_string()));
        table.add_entry(SymbolEntry::new("00000000000000A0".to_string(), "".to_string()));
        let out = String::from_utf8(TxtEmitter::new().emit_table(&table)?)?;
        assert_eq!(out, "_text 0x0000000000000000\n 0x00000000000000A0\n");
        Ok(())
    }
}
