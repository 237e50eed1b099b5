use boytacean_common::error::Error;
use boytacean_hashing::crc32c::crc32c;

use crate::{
    huffman::{decode_huffman, encode_huffman},
    rle::{decode_rle, encode_rle},
};

/// Encodes the provided data using the Zippy codec, a composition of
/// RLE run-length packing followed by Huffman coding.
///
/// `level` is reserved for a future tunable compression level and is
/// currently ignored, Zippy always applies the same fixed RLE +
/// Huffman pipeline.
///
/// When `checksum` is `true` a trailing 4 byte CRC32C of the original
/// (uncompressed) data is appended, letting [`decode_zippy`] verify
/// the integrity of the round trip.
pub fn encode_zippy(
    data: &[u8],
    _level: Option<u8>,
    checksum: Option<bool>,
) -> Result<Vec<u8>, Error> {
    let mut encoded = encode_huffman(&encode_rle(data)?)?;
    if checksum.unwrap_or(false) {
        encoded.extend_from_slice(&crc32c(data).to_le_bytes());
    }
    Ok(encoded)
}

/// Decodes data previously produced by [`encode_zippy`].
///
/// `checksum` must match the value passed to the original
/// [`encode_zippy`] call: when `true` the trailing 4 byte CRC32C is
/// stripped and verified against the decoded data, returning an
/// error on mismatch.
pub fn decode_zippy(data: &[u8], checksum: Option<bool>) -> Result<Vec<u8>, Error> {
    if !checksum.unwrap_or(false) {
        return Ok(decode_rle(&decode_huffman(data)?)?);
    }

    if data.len() < 4 {
        return Err(Error::CustomError(String::from(
            "Zippy stream too short to contain a checksum",
        )));
    }

    let (payload, trailer) = data.split_at(data.len() - 4);
    let expected = u32::from_le_bytes(trailer.try_into().unwrap());
    let decoded = decode_rle(&decode_huffman(payload)?)?;

    if crc32c(&decoded) != expected {
        return Err(Error::CustomError(String::from("Zippy checksum mismatch")));
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::{decode_zippy, encode_zippy};

    #[test]
    fn test_zippy_round_trip() {
        let data = b"aaaaabbbccccccccccdddddddddddddddd";
        let encoded = encode_zippy(data, None, None).unwrap();
        let decoded = decode_zippy(&encoded, None).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_zippy_round_trip_with_checksum() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let encoded = encode_zippy(data, None, Some(true)).unwrap();
        let decoded = decode_zippy(&encoded, Some(true)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_zippy_checksum_mismatch() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let mut encoded = encode_zippy(data, None, Some(true)).unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xff;
        assert!(decode_zippy(&encoded, Some(true)).is_err());
    }
}
