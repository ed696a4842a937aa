use super::{ExtractError, ExtractResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ExtractError::ExtractionFailed(format!("text file is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(extract("Zoë Müller".as_bytes()).unwrap(), "Zoë Müller");
    }

    #[test]
    fn test_bom_is_dropped() {
        assert_eq!(extract(b"\xEF\xBB\xBFresume").unwrap(), "resume");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = extract(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }
}
