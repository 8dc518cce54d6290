//! Integration tests of the encoder against the decoder.

use alloy_primitives::{address, hex, Address, Bytes, I256, U256};
use ambrosus_abi::{decode_values, encode, encode_single, AbiValue, EncodableValue, ParameterType};

fn types(types: &[&str]) -> Vec<ParameterType> {
    types.iter().map(|ty| ty.parse().unwrap()).collect()
}

/// Reads the head word at the index as an offset.
fn head(encoded: &[u8], index: usize) -> usize {
    U256::from_be_slice(&encoded[index * 32..(index + 1) * 32]).to::<usize>()
}

#[test]
fn test_should_round_trip_every_type() -> eyre::Result<()> {
    // Given
    let types = types(&[
        "uint8",
        "int32",
        "address",
        "bool",
        "bytes3",
        "bytes",
        "string",
        "function",
        "uint16[]",
        "string[2]",
        "(bool,bytes,(uint256,string[]))",
        "int64[2][]",
    ]);
    let expected = vec![
        AbiValue::Uint(U256::from(200)),
        AbiValue::Int(I256::try_from(-70_000)?),
        AbiValue::Address(address!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")),
        AbiValue::Bool(true),
        AbiValue::FixedBytes(Bytes::copy_from_slice(&hex!("010203"))),
        AbiValue::Bytes(Bytes::from(vec![0xab; 70])),
        AbiValue::String("ambrosus ✓".into()),
        AbiValue::Function([0x11; 24].into()),
        AbiValue::Array(vec![AbiValue::Uint(U256::from(1)), AbiValue::Uint(U256::from(65535))]),
        AbiValue::Array(vec![AbiValue::String("".into()), AbiValue::String("two".into())]),
        AbiValue::Tuple(vec![
            AbiValue::Bool(false),
            AbiValue::Bytes(Bytes::from_static(b"nested")),
            AbiValue::Tuple(vec![
                AbiValue::Uint(U256::MAX),
                AbiValue::Array(vec![AbiValue::String("a".into())]),
            ]),
        ]),
        AbiValue::Array(vec![
            AbiValue::Array(vec![AbiValue::Int(I256::MINUS_ONE), AbiValue::Int(I256::ZERO)]),
            AbiValue::Array(vec![
                AbiValue::Int(I256::try_from(i64::MIN)?),
                AbiValue::Int(I256::try_from(i64::MAX)?),
            ]),
        ]),
    ];
    let values: Vec<EncodableValue> = expected.iter().cloned().map(Into::into).collect();

    // When
    let encoded = encode(&types, &values)?;
    let decoded = decode_values(&types, &encoded)?;

    // Then
    assert_eq!(encoded.len() % 32, 0);
    assert_eq!(decoded, expected);
    Ok(())
}

#[test]
fn test_should_encode_static_lists_without_tail() -> eyre::Result<()> {
    let types = types(&["uint256", "address", "bool", "bytes32", "int8", "function"]);
    let values = [
        EncodableValue::from(u128::MAX),
        EncodableValue::from(Address::ZERO),
        EncodableValue::from(true),
        EncodableValue::from("0x00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"),
        EncodableValue::from(-128i8),
        EncodableValue::from(vec![0u8; 24]),
    ];

    let encoded = encode(&types, &values)?;
    assert_eq!(encoded.len(), 32 * types.len());
    Ok(())
}

#[test]
fn test_should_point_heads_to_their_tails() -> eyre::Result<()> {
    // Given
    let types = types(&["string", "uint8", "bytes", "uint8[]"]);
    let values = [
        EncodableValue::from("first"),
        EncodableValue::from(9u8),
        EncodableValue::from(vec![1u8; 40]),
        EncodableValue::list([4u8, 5, 6]),
    ];

    // When
    let encoded = encode(&types, &values)?;

    // Then every dynamic head holds the offset at which its value decodes on its own.
    for (index, (ty, value)) in types.iter().zip(&values).enumerate() {
        if ty.is_static() {
            continue
        }
        let offset = head(&encoded, index);
        let single = encode_single(ty, value)?;
        assert_eq!(&encoded[offset..offset + single.len()], single.as_slice(), "{ty}");
    }
    Ok(())
}
