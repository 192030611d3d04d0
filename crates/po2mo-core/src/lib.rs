#![forbid(unsafe_code)]

mod compile;
mod cursor;
mod entry;
mod error;
mod mo_encode;
mod mo_reader;
mod po_parser;

pub use compile::{CompileReport, compile_catalog};
pub use cursor::LineCursor;
pub use entry::{Catalog, Entry, ParseStats};
pub use error::{CompileError, MoReadError};
pub use mo_encode::{DESCRIPTOR_LEN, HEADER_LEN, MO_MAGIC, MO_VERSION, encode_mo, encoded_len, write_mo};
pub use mo_reader::{MoHeader, MoLayout, StringDescriptor, parse_mo_header, read_layout, read_string};
pub use po_parser::{parse_po, strip_quotes};
