use crate::backend::abstract_emitter::{AbstractEmitter, BufferEmitter};
use anyhow::Result;
use std::io::Write;
use symtab_reader::SymbolEntry;

pub struct JsonEmitter {
    emitter: BufferEmitter,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self { emitter: BufferEmitter::new("json") }
    }
}

impl AbstractEmitter for JsonEmitter {
    fn emitter(&mut self) -> &mut BufferEmitter {
        &mut self.emitter
    }

    fn _emit_header(&mut self) -> Result<()> {
        self.emitter.buffer.write_all(b"[")?;
        Ok(())
    }

    fn _emit_entry(&mut self, entry: &SymbolEntry) -> Result<()> {
        if self.emitter.checksum > 0 {
            self.emitter.buffer.write_all(b",")?;
        }
        self.emitter.buffer.write_all(b"\n  ")?;
        serde_json::to_writer(&mut self.emitter.buffer, entry)?;
        Ok(())
    }

    fn _emit_footer(&mut self) -> Result<()> {
        self.emitter.buffer.write_all(b"\n]\n")?;
        Ok(())
    }
}
