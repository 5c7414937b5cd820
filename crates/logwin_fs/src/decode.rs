use crate::error::Error;

/// Only the head of a file is inspected when guessing its encoding.
const SNIFF_LEN: usize = 512;

/// Byte order marks recognised at the start of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bom {
    Utf8,
    Utf16Be,
    Utf16Le,
}

impl Bom {
    fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
            [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
            [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
            _ => None,
        }
    }

    fn len(self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Be | Bom::Utf16Le => 2,
        }
    }
}

/// Decodes raw document bytes into text.
///
/// UTF-16 is transcoded, whether marked by a byte order mark or recognised
/// from where its NUL bytes fall; anything else is read as UTF-8 with
/// invalid sequences replaced. Content whose head contains NUL bytes that do
/// not follow a UTF-16 layout is rejected as binary.
pub fn decode(bytes: &[u8]) -> Result<String, Error> {
    match Bom::sniff(bytes) {
        Some(bom @ Bom::Utf16Be) => Ok(utf16(&bytes[bom.len()..], u16::from_be_bytes)),
        Some(bom @ Bom::Utf16Le) => Ok(utf16(&bytes[bom.len()..], u16::from_le_bytes)),
        Some(bom @ Bom::Utf8) => Ok(String::from_utf8_lossy(&bytes[bom.len()..]).into_owned()),
        None => match NulLayout::sniff(bytes) {
            None => Ok(String::from_utf8_lossy(bytes).into_owned()),
            Some(NulLayout::Utf16Le) => Ok(utf16(bytes, u16::from_le_bytes)),
            Some(NulLayout::Utf16Be) => Ok(utf16(bytes, u16::from_be_bytes)),
            Some(NulLayout::Binary) => {
                let kind = infer::get(bytes)
                    .map(|kind| kind.mime_type().to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                Err(Error::BinaryFileNotSupported(kind))
            }
        },
    }
}

fn utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Where NUL bytes fall in the head of a document without a byte order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NulLayout {
    /// Every odd byte is NUL, every even byte is not
    Utf16Le,
    /// Every even byte is NUL, every odd byte is not
    Utf16Be,
    Binary,
}

impl NulLayout {
    /// Returns `None` when the head holds no NUL byte at all.
    fn sniff(bytes: &[u8]) -> Option<Self> {
        let head = &bytes[..bytes.len().min(SNIFF_LEN)];
        if !head.contains(&0) {
            return None;
        }

        let nul_at = |odd: bool| {
            head.iter()
                .enumerate()
                .all(|(i, byte)| ((i % 2 == 1) == odd) == (*byte == 0))
        };

        if nul_at(true) {
            Some(NulLayout::Utf16Le)
        } else if nul_at(false) {
            Some(NulLayout::Utf16Be)
        } else {
            Some(NulLayout::Binary)
        }
    }
}
