//! Contract interface elements: functions, constructors, fallbacks and events.

use crate::{AbiDecoder, AbiEncoder, AbiError, DecodedParams, EncodableValue, ParameterType};
use std::{
    string::{String, ToString},
    vec::Vec,
};

use alloy_primitives::{keccak256, LogData, Selector, B256};

/// A named parameter of a function or a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InOut {
    /// The name of the parameter, possibly empty.
    pub name: String,
    /// The type of the parameter.
    pub ty: ParameterType,
}

impl InOut {
    /// Returns a new [`InOut`].
    pub fn new(name: impl Into<String>, ty: ParameterType) -> Self {
        Self { name: name.into(), ty }
    }
}

/// A contract function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// The name of the function.
    pub name: Option<String>,
    /// The parameters of the function.
    pub inputs: Vec<InOut>,
    /// The values returned by the function.
    pub outputs: Vec<InOut>,
    /// Whether the function leaves the state unchanged.
    pub constant: bool,
    /// Whether the function accepts value.
    pub payable: bool,
}

impl Function {
    /// Returns the canonical signature of the function, e.g. `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        signature(
            self.name.as_deref().unwrap_or_default(),
            self.inputs.iter().map(|input| &input.ty),
        )
    }

    /// Returns the selector of the function: the first four bytes of the hash of its signature.
    pub fn selector(&self) -> Selector {
        Selector::from_slice(&keccak256(self.signature())[..4])
    }
}

/// A contract constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    /// The parameters of the constructor.
    pub inputs: Vec<InOut>,
    /// Whether the constructor leaves the state unchanged.
    pub constant: bool,
    /// Whether the constructor accepts value.
    pub payable: bool,
}

/// A contract fallback function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// Whether the fallback leaves the state unchanged.
    pub constant: bool,
    /// Whether the fallback accepts value.
    pub payable: bool,
}

/// An input of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInput {
    /// The name of the input, possibly empty.
    pub name: String,
    /// The type of the input.
    pub ty: ParameterType,
    /// Whether the input is stored in the topics of the log rather than in its body.
    pub indexed: bool,
}

impl EventInput {
    /// Returns a new [`EventInput`].
    pub fn new(name: impl Into<String>, ty: ParameterType, indexed: bool) -> Self {
        Self { name: name.into(), ty, indexed }
    }
}

/// A contract event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The name of the event.
    pub name: String,
    /// The inputs of the event.
    pub inputs: Vec<EventInput>,
    /// Whether the log omits the topic of the event.
    pub anonymous: bool,
}

impl Event {
    /// Returns the canonical signature of the event, e.g. `Transfer(address,address,uint256)`.
    pub fn signature(&self) -> String {
        signature(&self.name, self.inputs.iter().map(|input| &input.ty))
    }

    /// Returns the topic of the event: the hash of its signature.
    pub fn topic(&self) -> B256 {
        keccak256(self.signature())
    }

    /// Decodes the non-indexed inputs from the body of the log.
    pub fn decode_log(&self, log: &LogData) -> Result<DecodedParams, AbiError> {
        AbiDecoder::default().decode_log(self, log)
    }
}

/// An element of a contract interface.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Element {
    /// A function.
    Function(Function),
    /// A constructor.
    Constructor(Constructor),
    /// A fallback function.
    Fallback(Fallback),
    /// An event.
    Event(Event),
}

impl Element {
    /// Encodes the parameters of a call to the element.
    pub fn encode_parameters(&self, values: &[EncodableValue]) -> Result<Vec<u8>, AbiError> {
        AbiEncoder::default().encode_call(self, values)
    }

    /// Decodes the data returned by a call to the element.
    pub fn decode_return_data(&self, data: &[u8]) -> Result<DecodedParams, AbiError> {
        AbiDecoder::default().decode_return_data(self, data)
    }

    /// Decodes the input data of a call to the element.
    pub fn decode_input_data(&self, data: &[u8]) -> Result<DecodedParams, AbiError> {
        AbiDecoder::default().decode_input_data(self, data)
    }
}

fn signature<'a>(name: &str, types: impl Iterator<Item = &'a ParameterType>) -> String {
    let mut signature = name.to_string();
    signature.push('(');
    for (i, ty) in types.enumerate() {
        if i > 0 {
            signature.push(',');
        }
        signature.push_str(&ty.to_string());
    }
    signature.push(')');
    signature
}
