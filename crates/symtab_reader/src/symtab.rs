use std::fmt;
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
  // kept as found in the image, case included
  #[serde(rename = "address")]
  pub address_hex: String,
  pub name: String,
}

impl SymbolEntry {
  pub fn new(address_hex: String, name: String) -> Self {
    Self { address_hex, name }
  }

  /// Numeric value of the address field. Entries built by the reader always
  /// hold 16 validated hex digits, so this only fails for hand-built entries.
  pub fn address(&self) -> Option<u64> {
    u64::from_str_radix(&self.address_hex, 16).ok()
  }
}

impl fmt::Debug for SymbolEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} @ 0x{}", self.name, self.address_hex)
  }
}

#[derive(Clone, Default)]
pub struct SymbolTable {
  pub offset: usize,
  pub end_offset: usize,
  pub entries: Vec<SymbolEntry>,
}

impl SymbolTable {
  pub fn new(offset: usize) -> Self {
    Self { offset, end_offset: offset, entries: Vec::new() }
  }

  pub fn add_entry(&mut self, entry: SymbolEntry) {
    self.entries.push(entry);
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
    self.entries.iter()
  }
}

impl<'a> IntoIterator for &'a SymbolTable {
  type Item = &'a SymbolEntry;
  type IntoIter = std::slice::Iter<'a, SymbolEntry>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

impl fmt::Debug for SymbolTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "SymbolTable {{")?;
    writeln!(f, "    offset: {:#x},", self.offset)?;
    writeln!(f, "    end_offset: {:#x},", self.end_offset)?;
    writeln!(f, "    entries: [")?;
    for entry in &self.entries {
      writeln!(f, "        {:?},", entry)?;
    }
    writeln!(f, "    ]")?;
    write!(f, "}}")
  }
}
