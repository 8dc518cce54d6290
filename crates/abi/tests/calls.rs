//! Integration tests of the contract element dispatch.

use alloy_primitives::{address, hex, Address, LogData, B256, U256};
use ambrosus_abi::{
    AbiError, AbiValue, Element, EncodableValue, Event, EventInput, Function, InOut,
    ParameterType,
};

fn ty(s: &str) -> ParameterType {
    s.parse().unwrap()
}

fn approve() -> Element {
    Function {
        name: Some("approve".into()),
        inputs: vec![InOut::new("spender", ty("address")), InOut::new("amount", ty("uint256"))],
        outputs: vec![InOut::new("", ty("bool"))],
        constant: false,
        payable: false,
    }
    .into()
}

#[test]
fn test_should_decode_encoded_call() -> eyre::Result<()> {
    // Given
    let function = approve();
    let spender = address!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");

    // When
    let call = function
        .encode_parameters(&[EncodableValue::from(spender), EncodableValue::from(U256::MAX)])?;
    let decoded = function.decode_input_data(&call)?;

    // Then
    assert_eq!(&call[..4], &hex!("095ea7b3"));
    assert_eq!(decoded.get("spender"), Some(&AbiValue::Address(spender)));
    assert_eq!(decoded.get("1"), Some(&AbiValue::Uint(U256::MAX)));
    Ok(())
}

#[test]
fn test_should_reject_call_for_other_function() -> eyre::Result<()> {
    let call = approve().encode_parameters(&[Address::ZERO.into(), 1u64.into()])?;

    let transfer: Element = Function {
        name: Some("transfer".into()),
        inputs: vec![InOut::new("to", ty("address")), InOut::new("value", ty("uint256"))],
        outputs: vec![],
        constant: false,
        payable: false,
    }
    .into();

    assert!(matches!(
        transfer.decode_input_data(&call),
        Err(AbiError::SelectorMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_should_return_empty_value_for_empty_return_data() -> eyre::Result<()> {
    let decoded = approve().decode_return_data(&[])?;
    assert_eq!(decoded.get_index(0), Some(&AbiValue::Bool(false)));
    assert_eq!(decoded.len(), 1);
    Ok(())
}

#[test]
fn test_should_decode_event_log_body() -> eyre::Result<()> {
    // Given
    let event = Event {
        name: "Deposit".into(),
        inputs: vec![
            EventInput::new("account", ty("address"), true),
            EventInput::new("amount", ty("uint256"), false),
            EventInput::new("memo", ty("string"), false),
        ],
        anonymous: false,
    };
    let body = ambrosus_abi::encode(&[ty("uint256"), ty("string")], &[42u64.into(), "hi".into()])?;
    let log = LogData::new_unchecked(vec![event.topic(), B256::ZERO], body.into());

    // When
    let decoded = event.decode_log(&log)?;

    // Then
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded.get("1"), Some(&AbiValue::Uint(U256::from(42))));
    assert_eq!(decoded.get("memo"), Some(&AbiValue::String("hi".into())));
    assert_eq!(decoded.get("account"), None);
    Ok(())
}

#[test]
fn test_should_skip_topic_check_for_anonymous_events() -> eyre::Result<()> {
    let event = Event {
        name: "Ping".into(),
        inputs: vec![EventInput::new("nonce", ty("uint64"), false)],
        anonymous: true,
    };
    let body = U256::from(3).to_be_bytes_vec();
    let log = LogData::new_unchecked(vec![B256::repeat_byte(1)], body.into());

    let decoded = event.decode_log(&log)?;
    assert_eq!(decoded.get("nonce"), Some(&AbiValue::Uint(U256::from(3))));
    Ok(())
}
