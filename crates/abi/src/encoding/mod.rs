//! Encoding of values into the 32-byte word layout of contract calls.

mod single;

use crate::{AbiConfig, AbiError, EncodableValue, Element, ParameterType};
use ambrosus_primitives::word::usize_word;
use std::vec::Vec;

/// Encodes values with a fixed [`AbiConfig`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AbiEncoder {
    config: AbiConfig,
}

impl AbiEncoder {
    /// Returns a new [`AbiEncoder`] using the provided configuration.
    pub const fn new(config: AbiConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the encoder.
    pub const fn config(&self) -> &AbiConfig {
        &self.config
    }

    /// Encodes the values as the parameter list described by the types.
    pub fn encode(
        &self,
        types: &[ParameterType],
        values: &[EncodableValue],
    ) -> Result<Vec<u8>, AbiError> {
        if types.len() != values.len() {
            return Err(AbiError::TypeCountMismatch { types: types.len(), values: values.len() })
        }
        self.encode_sequence(types.iter(), values, 0)
    }

    /// Encodes a single value. Static values occupy their head words, dynamic values are
    /// returned as the tail referenced from the head of their enclosing block.
    pub fn encode_single(
        &self,
        ty: &ParameterType,
        value: &EncodableValue,
    ) -> Result<Vec<u8>, AbiError> {
        self.encode_value(ty, value, 0)
    }

    /// Encodes the parameters of a call to the element. Functions are prefixed with their
    /// selector, constructors are not. Events and fallbacks have no parameters to encode.
    pub fn encode_call(
        &self,
        element: &Element,
        values: &[EncodableValue],
    ) -> Result<Vec<u8>, AbiError> {
        match element {
            Element::Function(function) => {
                let types: Vec<_> = function.inputs.iter().map(|input| input.ty.clone()).collect();
                let mut out = function.selector().to_vec();
                out.extend(self.encode(&types, values)?);
                Ok(out)
            }
            Element::Constructor(constructor) => {
                let types: Vec<_> =
                    constructor.inputs.iter().map(|input| input.ty.clone()).collect();
                self.encode(&types, values)
            }
            Element::Fallback(_) => Err(AbiError::UnsupportedElement("fallback")),
            Element::Event(_) => Err(AbiError::UnsupportedElement("event")),
        }
    }

    /// Encodes the values using the head/tail layout. Static values are placed in the heads,
    /// dynamic values are appended to the tails and referenced from the heads by their offset
    /// from the start of the block.
    pub(crate) fn encode_sequence<'a>(
        &self,
        types: impl Iterator<Item = &'a ParameterType>,
        values: &[EncodableValue],
        depth: usize,
    ) -> Result<Vec<u8>, AbiError> {
        // first pass: encode every value independently.
        let encoded = types
            .zip(values)
            .map(|(ty, value)| Ok((ty.is_static(), self.encode_value(ty, value, depth)?)))
            .collect::<Result<Vec<_>, AbiError>>()?;

        let heads_len: usize = encoded
            .iter()
            .map(|(is_static, encoding)| if *is_static { encoding.len() } else { 32 })
            .sum();

        // second pass: lay out the heads, pointing dynamic values to their tails.
        let mut out = Vec::with_capacity(heads_len);
        let mut tails = Vec::new();
        for (is_static, encoding) in encoded {
            if is_static {
                out.extend(encoding);
            } else {
                out.extend(usize_word(heads_len + tails.len()));
                tails.extend(encoding);
            }
        }
        out.extend(tails);

        Ok(out)
    }
}

/// Encodes the values as the parameter list described by the types, using the default
/// configuration.
pub fn encode(types: &[ParameterType], values: &[EncodableValue]) -> Result<Vec<u8>, AbiError> {
    AbiEncoder::default().encode(types, values)
}

/// Encodes a single value using the default configuration.
pub fn encode_single(ty: &ParameterType, value: &EncodableValue) -> Result<Vec<u8>, AbiError> {
    AbiEncoder::default().encode_single(ty, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, InOut};
    use ambrosus_primitives::{word::word_to_usize, StringEncoding};
    use std::vec;

    use alloy_primitives::{hex, U256};

    fn ty(s: &str) -> ParameterType {
        s.parse().unwrap()
    }

    fn words(encoded: &[u8]) -> Vec<&[u8]> {
        assert_eq!(encoded.len() % 32, 0, "encoding is not word aligned");
        encoded.chunks(32).collect()
    }

    #[test]
    fn test_should_encode_single_uint() -> eyre::Result<()> {
        let encoded = encode(&[ty("uint256")], &[U256::from(1).into()])?;
        assert_eq!(
            encoded,
            hex!("0000000000000000000000000000000000000000000000000000000000000001")
        );
        Ok(())
    }

    #[test]
    fn test_should_encode_string() -> eyre::Result<()> {
        let encoded = encode(&[ty("string")], &["hello".into()])?;
        assert_eq!(
            encoded,
            hex!(
                "0000000000000000000000000000000000000000000000000000000000000020"
                "0000000000000000000000000000000000000000000000000000000000000005"
                "68656c6c6f000000000000000000000000000000000000000000000000000000"
            )
        );

        let single = encode_single(&ty("string"), &"hello".into())?;
        assert_eq!(single.len(), 64);
        assert_eq!(single, encoded[32..]);
        Ok(())
    }

    #[test]
    fn test_should_encode_dynamic_array() -> eyre::Result<()> {
        let encoded = encode(&[ty("uint256[]")], &[EncodableValue::list([1u64, 2, 3])])?;
        let words = words(&encoded);
        assert_eq!(words.len(), 5);
        assert_eq!(word_to_usize(words[0]), Some(0x20));
        assert_eq!(word_to_usize(words[1]), Some(3));
        assert_eq!(word_to_usize(words[2]), Some(1));
        assert_eq!(word_to_usize(words[3]), Some(2));
        assert_eq!(word_to_usize(words[4]), Some(3));
        Ok(())
    }

    #[test]
    fn test_should_encode_empty_dynamic_array() -> eyre::Result<()> {
        let encoded = encode(&[ty("string[]")], &[EncodableValue::List(vec![])])?;
        let words = words(&encoded);
        assert_eq!(words.len(), 2);
        assert_eq!(word_to_usize(words[0]), Some(0x20));
        assert_eq!(word_to_usize(words[1]), Some(0));
        Ok(())
    }

    #[test]
    fn test_should_encode_static_types_without_tail() -> eyre::Result<()> {
        let types = [ty("uint8"), ty("int256"), ty("bool"), ty("bytes4"), ty("address")];
        let values = [
            EncodableValue::from(255u8),
            EncodableValue::from(-2i64),
            EncodableValue::from(true),
            EncodableValue::from(vec![0xde, 0xad, 0xbe, 0xef]),
            EncodableValue::from("0x8617E340B3D01FA5F11F306F4090FD50E238070D"),
        ];
        let encoded = encode(&types, &values)?;
        assert_eq!(encoded.len(), 32 * types.len());

        let words = words(&encoded);
        assert_eq!(words[1], [0xffu8; 31].iter().copied().chain([0xfe]).collect::<Vec<_>>());
        assert_eq!(&words[3][..4], &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(&words[4][12..], &hex!("8617e340b3d01fa5f11f306f4090fd50e238070d"));
        Ok(())
    }

    #[test]
    fn test_should_encode_mixed_heads_and_tails() -> eyre::Result<()> {
        // f(uint256,uint32[],bytes10,bytes) from the Solidity documentation.
        let types = [ty("uint256"), ty("uint32[]"), ty("bytes10"), ty("bytes")];
        let values = [
            EncodableValue::from(0x123u64),
            EncodableValue::list([0x456u32, 0x789]),
            EncodableValue::from("1234567890"),
            EncodableValue::from("Hello, world!"),
        ];
        let encoded = encode(&types, &values)?;
        assert_eq!(
            encoded,
            hex!(
                "0000000000000000000000000000000000000000000000000000000000000123"
                "0000000000000000000000000000000000000000000000000000000000000080"
                "3132333435363738393000000000000000000000000000000000000000000000"
                "00000000000000000000000000000000000000000000000000000000000000e0"
                "0000000000000000000000000000000000000000000000000000000000000002"
                "0000000000000000000000000000000000000000000000000000000000000456"
                "0000000000000000000000000000000000000000000000000000000000000789"
                "000000000000000000000000000000000000000000000000000000000000000d"
                "48656c6c6f2c20776f726c642100000000000000000000000000000000000000"
            )
        );
        Ok(())
    }

    #[test]
    fn test_should_encode_nested_dynamic_arrays() -> eyre::Result<()> {
        // g(uint256[][],string[]) from the Solidity documentation.
        let types = [ty("uint256[][]"), ty("string[]")];
        let values = [
            EncodableValue::List(vec![
                EncodableValue::list([1u64, 2]),
                EncodableValue::list([3u64]),
            ]),
            EncodableValue::list(["one", "two", "three"]),
        ];
        let encoded = encode(&types, &values)?;
        assert_eq!(
            encoded,
            hex!(
                "0000000000000000000000000000000000000000000000000000000000000040"
                "0000000000000000000000000000000000000000000000000000000000000140"
                "0000000000000000000000000000000000000000000000000000000000000002"
                "0000000000000000000000000000000000000000000000000000000000000040"
                "00000000000000000000000000000000000000000000000000000000000000a0"
                "0000000000000000000000000000000000000000000000000000000000000002"
                "0000000000000000000000000000000000000000000000000000000000000001"
                "0000000000000000000000000000000000000000000000000000000000000002"
                "0000000000000000000000000000000000000000000000000000000000000001"
                "0000000000000000000000000000000000000000000000000000000000000003"
                "0000000000000000000000000000000000000000000000000000000000000003"
                "0000000000000000000000000000000000000000000000000000000000000060"
                "00000000000000000000000000000000000000000000000000000000000000a0"
                "00000000000000000000000000000000000000000000000000000000000000e0"
                "0000000000000000000000000000000000000000000000000000000000000003"
                "6f6e650000000000000000000000000000000000000000000000000000000000"
                "0000000000000000000000000000000000000000000000000000000000000003"
                "74776f0000000000000000000000000000000000000000000000000000000000"
                "0000000000000000000000000000000000000000000000000000000000000005"
                "7468726565000000000000000000000000000000000000000000000000000000"
            )
        );
        Ok(())
    }

    #[test]
    fn test_should_encode_tuples() -> eyre::Result<()> {
        let static_tuple = encode(
            &[ty("(uint8,bool)"), ty("uint8")],
            &[EncodableValue::nested([EncodableValue::from(1u8), true.into()]), 2u8.into()],
        )?;
        assert_eq!(static_tuple.len(), 96);

        let dynamic_tuple = encode(
            &[ty("(uint8,string)")],
            &[EncodableValue::nested([EncodableValue::from(1u8), "a".into()])],
        )?;
        let words = words(&dynamic_tuple);
        assert_eq!(words.len(), 5);
        assert_eq!(word_to_usize(words[0]), Some(0x20));
        assert_eq!(word_to_usize(words[1]), Some(1));
        assert_eq!(word_to_usize(words[2]), Some(0x40));
        assert_eq!(word_to_usize(words[3]), Some(1));
        Ok(())
    }

    #[test]
    fn test_should_encode_fixed_array_of_dynamic_elements() -> eyre::Result<()> {
        let encoded = encode(&[ty("string[2]")], &[EncodableValue::list(["a", "b"])])?;
        let words = words(&encoded);
        // offset, then the two element offsets relative to the array block.
        assert_eq!(word_to_usize(words[0]), Some(0x20));
        assert_eq!(word_to_usize(words[1]), Some(0x40));
        assert_eq!(word_to_usize(words[2]), Some(0x80));
        assert_eq!(words.len(), 7);
        Ok(())
    }

    #[test]
    fn test_should_encode_signed_integers_as_twos_complement() -> eyre::Result<()> {
        let encoded = encode(&[ty("int8"), ty("int256")], &["-1".into(), "-0x10".into()])?;
        assert_eq!(&encoded[..32], &[0xff; 32]);
        assert_eq!(&encoded[32..63], &[0xff; 31]);
        assert_eq!(encoded[63], 0xf0);
        Ok(())
    }

    #[test]
    fn test_should_reject_invalid_values() {
        assert_eq!(
            encode(&[ty("uint256")], &[]),
            Err(AbiError::TypeCountMismatch { types: 1, values: 0 })
        );
        assert!(matches!(
            encode(&[ty("uint256")], &[true.into()]),
            Err(AbiError::TypeMismatch { found: "bool", .. })
        ));
        assert!(matches!(encode(&[ty("uint256")], &["hello".into()]), Err(AbiError::Number(_))));
        assert!(matches!(encode(&[ty("uint256")], &[(-1i64).into()]), Err(AbiError::Number(_))));
        assert!(matches!(
            encode(&[ty("uint8")], &[256u64.into()]),
            Err(AbiError::ValueOutOfRange(_))
        ));
        assert!(matches!(
            encode(&[ty("int8")], &[128u64.into()]),
            Err(AbiError::ValueOutOfRange(_))
        ));
        assert!(matches!(
            encode(&[ty("bytes2")], &[vec![1u8, 2, 3].into()]),
            Err(AbiError::LengthViolation { max: 2, actual: 3, .. })
        ));
        assert!(matches!(
            encode(&[ty("uint8[2]")], &[EncodableValue::list([1u8])]),
            Err(AbiError::ArrayLengthMismatch { expected: 2, actual: 1 })
        ));
        assert!(matches!(
            encode(&[ty("(uint8,bool)")], &[EncodableValue::nested([1u8])]),
            Err(AbiError::TypeCountMismatch { types: 2, values: 1 })
        ));
        assert!(matches!(
            encode(&[ty("address")], &["0x8617E340B3D01FA5F11F306F4090FD50E238070d".into()]),
            Err(AbiError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_should_only_sniff_hex_strings_when_configured() -> eyre::Result<()> {
        let plain = encode(&[ty("string")], &["0xcafe".into()])?;
        assert_eq!(word_to_usize(&plain[32..64]), Some(6));

        let config = AbiConfig::default().with_strings(StringEncoding::HexSniffing);
        let encoder = AbiEncoder::new(config);
        let sniffed = encoder.encode(&[ty("string")], &["0xcafe".into()])?;
        assert_eq!(word_to_usize(&sniffed[32..64]), Some(2));
        assert_eq!(&sniffed[64..66], &[0xca, 0xfe]);
        Ok(())
    }

    #[test]
    fn test_should_enforce_depth_limit() {
        let mut ty = ParameterType::UInt(8);
        let mut value = EncodableValue::from(1u8);
        for _ in 0..4 {
            ty = ParameterType::dynamic_array(ty);
            value = EncodableValue::List(vec![value]);
        }

        let encoder = AbiEncoder::new(AbiConfig::default().with_max_depth(3));
        assert_eq!(
            encoder.encode(&[ty.clone()], &[value.clone()]),
            Err(AbiError::DepthLimitExceeded(3))
        );
        assert!(encode(&[ty], &[value]).is_ok());
    }

    #[test]
    fn test_should_prefix_function_calls_with_selector() -> eyre::Result<()> {
        let transfer = Function {
            name: Some("transfer".into()),
            inputs: vec![InOut::new("to", ty("address")), InOut::new("value", ty("uint256"))],
            outputs: vec![InOut::new("", ty("bool"))],
            constant: false,
            payable: false,
        };
        let element = Element::from(transfer);
        let encoded = element.encode_parameters(&[
            "0x8617E340B3D01FA5F11F306F4090FD50E238070D".into(),
            1000u64.into(),
        ])?;
        assert_eq!(&encoded[..4], &hex!("a9059cbb"));
        assert_eq!(encoded.len(), 4 + 64);
        Ok(())
    }
}
