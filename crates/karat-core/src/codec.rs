//! # Asset Record Codec
//!
//! Bijective mapping between an [`Asset`] value and its JSON byte
//! encoding. The same encoding is used for world-state storage and for
//! API transport, so `decode(encode(a)) == a` must hold for every valid
//! asset, including zero-valued fields.

use thiserror::Error;

use crate::asset::Asset;

/// Error produced when an asset cannot be encoded or decoded.
///
/// Decoding fails on malformed JSON, a missing required field, or a
/// wrong-typed field. Encoding failures are not expected in practice
/// since every asset field is a primitive, but the path is still
/// surfaced rather than swallowed.
#[derive(Error, Debug)]
#[error("asset encoding error: {0}")]
pub struct CodecError(#[from] serde_json::Error);

/// Encode an asset to its JSON byte representation.
pub fn encode(asset: &Asset) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(asset)?)
}

/// Decode an asset from its JSON byte representation.
pub fn decode(bytes: &[u8]) -> Result<Asset, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let asset = Asset::new("asset3", "green", 10, "Jin Soo", 500);
        let bytes = encode(&asset).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, asset);
    }

    #[test]
    fn test_round_trip_zero_values() {
        let asset = Asset::new("", "", 0, "", 0);
        let bytes = encode(&asset).unwrap();
        assert_eq!(decode(&bytes).unwrap(), asset);
    }

    #[test]
    fn test_round_trip_negative_integers() {
        let asset = Asset::new("asset9", "grey", -3, "Noor", -1);
        let bytes = encode(&asset).unwrap();
        assert_eq!(decode(&bytes).unwrap(), asset);
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(decode(b"not json").is_err());
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        // Owner and AppraisedValue are absent.
        let json = br#"{"ID":"asset1","Color":"blue","Size":5}"#;
        assert!(decode(json).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        let json = br#"{"ID":"asset1","Color":"blue","Size":"five","Owner":"Tomoko","AppraisedValue":300}"#;
        assert!(decode(json).is_err());
    }

    #[test]
    fn test_decode_error_mentions_cause() {
        let err = decode(b"{").unwrap_err();
        assert!(err.to_string().contains("asset encoding error"));
    }
}
