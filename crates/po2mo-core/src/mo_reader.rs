use crate::error::MoReadError;
use crate::mo_encode::{DESCRIPTOR_LEN, HEADER_LEN, MO_MAGIC, MO_VERSION};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoHeader {
    pub magic: u32,
    pub version: u32,
    pub count: u32,
    pub sources_offset: u32,
    pub translations_offset: u32,
    pub hash_table_size: u32,
    pub hash_table_offset: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringDescriptor {
    pub length: u32,
    pub offset: u32,
}

/// Structural view of a compiled catalog: header plus both descriptor tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoLayout {
    pub header: MoHeader,
    pub sources: Vec<StringDescriptor>,
    pub translations: Vec<StringDescriptor>,
}

impl MoLayout {
    /// Total bytes referenced by descriptors, terminators included.
    pub fn pool_len(&self) -> u64 {
        self.sources
            .iter()
            .chain(self.translations.iter())
            .map(|descriptor| u64::from(descriptor.length) + 1)
            .sum()
    }
}

pub fn parse_mo_header(input: &[u8]) -> Result<MoHeader, MoReadError> {
    if input.len() < HEADER_LEN {
        return Err(MoReadError::TooShort);
    }
    let mut cursor = 0usize;
    let magic = read_u32(input, &mut cursor)?;
    if magic != MO_MAGIC {
        return Err(MoReadError::MagicMismatch(magic));
    }
    let version = read_u32(input, &mut cursor)?;
    if version != MO_VERSION {
        return Err(MoReadError::UnsupportedVersion(version));
    }
    Ok(MoHeader {
        magic,
        version,
        count: read_u32(input, &mut cursor)?,
        sources_offset: read_u32(input, &mut cursor)?,
        translations_offset: read_u32(input, &mut cursor)?,
        hash_table_size: read_u32(input, &mut cursor)?,
        hash_table_offset: read_u32(input, &mut cursor)?,
    })
}

/// Reads both descriptor tables and checks that every string lies inside
/// `input`, is followed by a NUL byte and is valid UTF-8.
pub fn read_layout(input: &[u8]) -> Result<MoLayout, MoReadError> {
    let header = parse_mo_header(input)?;
    let count = header.count as usize;
    let sources = read_descriptor_table(input, header.sources_offset, count, "source table")?;
    let translations = read_descriptor_table(
        input,
        header.translations_offset,
        count,
        "translation table",
    )?;
    for descriptor in sources.iter().chain(translations.iter()) {
        read_string(input, *descriptor)?;
    }
    Ok(MoLayout {
        header,
        sources,
        translations,
    })
}

pub fn read_string(input: &[u8], descriptor: StringDescriptor) -> Result<&str, MoReadError> {
    let start = descriptor.offset as usize;
    let end = start
        .checked_add(descriptor.length as usize)
        .ok_or(MoReadError::OutOfBounds("string"))?;
    let bytes = input
        .get(start..end)
        .ok_or(MoReadError::OutOfBounds("string"))?;
    if input.get(end) != Some(&0) {
        return Err(MoReadError::MissingTerminator(descriptor.offset));
    }
    std::str::from_utf8(bytes).map_err(|_| MoReadError::InvalidUtf8(descriptor.offset))
}

fn read_descriptor_table(
    input: &[u8],
    offset: u32,
    count: usize,
    what: &'static str,
) -> Result<Vec<StringDescriptor>, MoReadError> {
    let mut cursor = offset as usize;
    let table_len = count
        .checked_mul(DESCRIPTOR_LEN)
        .ok_or(MoReadError::OutOfBounds(what))?;
    if cursor.saturating_add(table_len) > input.len() {
        return Err(MoReadError::OutOfBounds(what));
    }
    let mut descriptors = Vec::with_capacity(count);
    for _ in 0..count {
        let length = read_u32(input, &mut cursor)?;
        let offset = read_u32(input, &mut cursor)?;
        descriptors.push(StringDescriptor { length, offset });
    }
    Ok(descriptors)
}

fn read_u32(input: &[u8], cursor: &mut usize) -> Result<u32, MoReadError> {
    let end = *cursor + 4;
    let bytes = input
        .get(*cursor..end)
        .ok_or(MoReadError::OutOfBounds("u32"))?;
    *cursor = end;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::{StringDescriptor, parse_mo_header, read_layout, read_string};
    use crate::entry::Entry;
    use crate::error::MoReadError;
    use crate::mo_encode::encode_mo;

    fn sample() -> Vec<u8> {
        encode_mo(&[Entry::new("Hello", "Bonjour"), Entry::new("Bye", "Au revoir")])
            .expect("encode")
    }

    #[test]
    fn parses_header_fields() {
        let header = parse_mo_header(&sample()).expect("header");
        assert_eq!(header.count, 2);
        assert_eq!(header.sources_offset, 28);
        assert_eq!(header.translations_offset, 44);
        assert_eq!(header.hash_table_size, 0);
        assert_eq!(header.hash_table_offset, 0);
    }

    #[test]
    fn descriptors_point_at_strings() {
        let bytes = sample();
        let layout = read_layout(&bytes).expect("layout");
        let sources: Vec<&str> = layout
            .sources
            .iter()
            .map(|descriptor| read_string(&bytes, *descriptor).expect("source"))
            .collect();
        let translations: Vec<&str> = layout
            .translations
            .iter()
            .map(|descriptor| read_string(&bytes, *descriptor).expect("translation"))
            .collect();
        assert_eq!(sources, vec!["Hello", "Bye"]);
        assert_eq!(translations, vec!["Bonjour", "Au revoir"]);
        assert_eq!(layout.pool_len(), 28);
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(parse_mo_header(&[0u8; 10]), Err(MoReadError::TooShort));
    }

    #[test]
    fn rejects_big_endian_magic() {
        let mut bytes = sample();
        bytes[0..4].copy_from_slice(&0x950412deu32.to_be_bytes());
        assert_eq!(
            parse_mo_header(&bytes),
            Err(MoReadError::MagicMismatch(0xde120495))
        );
    }

    #[test]
    fn rejects_truncated_pool() {
        let mut bytes = sample();
        bytes.truncate(bytes.len() - 3);
        assert!(read_layout(&bytes).is_err());
    }

    #[test]
    fn rejects_missing_terminator() {
        let bytes = b"abc\0def".to_vec();
        let err = read_string(&bytes, StringDescriptor { length: 2, offset: 0 })
            .expect_err("no nul");
        assert_eq!(err, MoReadError::MissingTerminator(0));
    }
}
