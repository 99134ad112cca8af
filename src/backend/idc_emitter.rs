use crate::backend::abstract_emitter::{AbstractEmitter, BufferEmitter};
use anyhow::Result;
use log::warn;
use std::io::Write;
use symtab_reader::SymbolEntry;

pub const DEFAULT_BASE_ADDR: u64 = 0x1000_0000;

pub struct IdcEmitter {
    emitter: BufferEmitter,
    base_addr: u64,
}

impl IdcEmitter {
    pub fn new(base_addr: u64) -> Self {
        Self { emitter: BufferEmitter::new("idc"), base_addr }
    }
}

impl AbstractEmitter for IdcEmitter {
    fn emitter(&mut self) -> &mut BufferEmitter {
        &mut self.emitter
    }

    fn _emit_header(&mut self) -> Result<()> {
        let buffer = &mut self.emitter.buffer;
        writeln!(buffer, "#include <idc.idc>")?;
        writeln!(buffer, "#define BASE_ADDR {:#x}", self.base_addr)?;
        writeln!(buffer, "static main(void)")?;
        writeln!(buffer, "{{")?;
        Ok(())
    }

    // names go out verbatim, IDA scripts generated from older dumps rely on it
    fn _emit_entry(&mut self, entry: &SymbolEntry) -> Result<()> {
        if entry.name.contains(['"', '\\']) {
            warn!("symbol name {:?} at 0x{} breaks the IDC string literal", entry.name, entry.address_hex);
        }
        writeln!(self.emitter.buffer, "  set_name(BASE_ADDR + 0x{}, \"{}\");", entry.address_hex, entry.name)?;
        Ok(())
    }

    fn _emit_footer(&mut self) -> Result<()> {
        writeln!(self.emitter.buffer, "}}")?;
        Ok(())
    }
}
