use std::path::Path;
use anyhow::{Context, Result};
use log::{debug, trace};
use crate::error::FormatError;
use crate::signature::*;
use crate::symtab::*;

pub struct SymtabReader {
  data: Vec<u8>,
}

/*
  table:  record* empty
  record: char[16]:address char*:name char:0
  empty:  char:0
*/

enum ScanState {
  Scanning(usize),
  Done(usize),
}

pub fn locate(data: &[u8]) -> Result<usize, FormatError> {
  data.windows(SIGNATURE.len())
    .position(|window| window == SIGNATURE)
    .ok_or(FormatError::TableNotFound)
}

// bytes of the record starting at pos, without its terminator
fn read_record(data: &[u8], pos: usize) -> Result<&[u8], FormatError> {
  let len = data.get(pos..).unwrap_or_default().iter()
    .position(|&b| b == RECORD_TERMINATOR)
    .ok_or(FormatError::NoNullTerminator { offset: pos })?;
  Ok(&data[pos..pos + len])
}

fn parse_entry(record: &[u8], offset: usize) -> Result<SymbolEntry, FormatError> {
  if !record.is_ascii() {
    return Err(FormatError::NonAscii { offset });
  }
  if record.len() < ADDRESS_LEN {
    return Err(FormatError::EntryTooShort { offset });
  }
  // ascii from here on, the lossy conversions never substitute
  let (address_hex, name) = record.split_at(ADDRESS_LEN);
  let address_hex = String::from_utf8_lossy(address_hex).into_owned();
  if !address_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(FormatError::InvalidHexAddress { offset, address: address_hex });
  }
  Ok(SymbolEntry::new(address_hex, String::from_utf8_lossy(name).into_owned()))
}

fn step(data: &[u8], pos: usize, table: &mut SymbolTable) -> Result<ScanState, FormatError> {
  let record = read_record(data, pos)?;
  let next = pos + record.len() + 1;
  if record.is_empty() {
    trace!("{:08x}: end of table", pos);
    return Ok(ScanState::Done(next));
  }
  let entry = parse_entry(record, pos)?;
  trace!("{:08x}: {:?}", pos, entry);
  table.add_entry(entry);
  Ok(ScanState::Scanning(next))
}

/// Walks the records starting at `offset` until the empty record. Bytes past
/// the empty record are never looked at.
pub fn scan(data: &[u8], offset: usize) -> Result<SymbolTable, FormatError> {
  let mut table = SymbolTable::new(offset);
  let mut state = ScanState::Scanning(offset);
  loop {
    match state {
      ScanState::Scanning(pos) => {
        state = step(data, pos, &mut table).map_err(|e| {
          debug!("record at {:#x} rejected: {}", pos, e);
          e
        })?;
      }
      ScanState::Done(end) => {
        table.end_offset = end;
        return Ok(table);
      }
    }
  }
}

impl SymtabReader {
  pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    trace!("opening path: {:?}", path);
    let data = std::fs::read(path)
      .with_context(|| format!("unable to read {}", path.display()))?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(Self { data })
  }

  pub fn from_bytes(data: Vec<u8>) -> Self {
    Self { data }
  }

  pub fn locate(&self) -> Result<usize, FormatError> {
    locate(&self.data)
  }

  pub fn parse(&self) -> Result<SymbolTable, FormatError> {
    let offset = self.locate()?;
    debug!("symbol table found at {:#x}", offset);
    let table = scan(&self.data, offset)?;
    debug!("parsed {} symbols, table ends at {:#x}", table.len(), table.end_offset);
    Ok(table)
  }
}
