use thiserror::Error;

// offsets point at the start of the offending record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
  #[error("Symbol table not found in the file.")]
  TableNotFound,

  #[error("Invalid symbol table format: no null terminator found.")]
  NoNullTerminator { offset: usize },

  #[error("Non-ASCII characters in symbol table.")]
  NonAscii { offset: usize },

  #[error("Invalid symbol entry: too short.")]
  EntryTooShort { offset: usize },

  #[error("Invalid hex address: {address}")]
  InvalidHexAddress { offset: usize, address: String },
}

impl FormatError {
  pub fn offset(&self) -> Option<usize> {
    match self {
      FormatError::TableNotFound => None,
      FormatError::NoNullTerminator { offset }
      | FormatError::NonAscii { offset }
      | FormatError::EntryTooShort { offset }
      | FormatError::InvalidHexAddress { offset, .. } => Some(*offset),
    }
  }
}
