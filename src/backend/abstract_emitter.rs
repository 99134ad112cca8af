use anyhow::Result;
use symtab_reader::{SymbolEntry, SymbolTable};

pub struct BufferEmitter {
    pub name: String, // name of the output format
    pub buffer: Vec<u8>,
    pub checksum: usize,
}

impl BufferEmitter {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), buffer: Vec::new(), checksum: 0 }
    }
}

// renders into memory; the caller writes the whole buffer out in one go
pub trait AbstractEmitter {
    fn emitter(&mut self) -> &mut BufferEmitter;
    fn emit_table(&mut self, table: &SymbolTable) -> Result<Vec<u8>> {
        self._emit_header()?;
        for entry in table {
            self._emit_entry(entry)?;
            self._bump_checksum();
        }
        self._emit_footer()?;
        Ok(std::mem::take(&mut self.emitter().buffer))
    }
    fn name(&mut self) -> String {
        self.emitter().name.clone()
    }
    fn checksum(&mut self) -> usize {
        self.emitter().checksum
    }
    fn _bump_checksum(&mut self) {
        self.emitter().checksum += 1;
    }
    fn _emit_header(&mut self) -> Result<()>;
    fn _emit_entry(&mut self, entry: &SymbolEntry) -> Result<()>;
    fn _emit_footer(&mut self) -> Result<()>;
}
