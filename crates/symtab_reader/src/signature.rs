/// The first record of the table as it appears in the image: a zero address
/// followed by the `__image_copy_start` linker symbol, without its null.
pub const SIGNATURE: &[u8] = b"0000000000000000__image_copy_start";
/// Number of hex digits in the address field of every record.
pub const ADDRESS_LEN: usize = 16;
/// Terminates every record; a record made of nothing but this ends the table.
pub const RECORD_TERMINATOR: u8 = 0;
