//! Tests for decoding revert payloads returned by `EntryPoint` simulations.

use aa_guard::{
    decode_revert, decode_revert_hex,
    test_utils::{encode_error, encode_failed_op, encode_failed_op_v07, encode_panic},
    DecodeError, DecodeMode, DecodedOutcome, RevertDecoder, RevertSelector,
};
use alloy_primitives::{address, hex, Address, Bytes, U256};

#[test]
fn test_plain_error() {
    let payload = encode_error("boom");
    for mode in [DecodeMode::Strict, DecodeMode::Lenient] {
        assert_eq!(
            decode_revert(&payload, mode).unwrap(),
            DecodedOutcome::PlainError { message: "boom".to_string() }
        );
    }
}

#[test]
fn test_failed_op_without_paymaster() {
    let payload = encode_failed_op(3, Address::ZERO, "bad sig");
    let outcome = decode_revert(&payload, DecodeMode::Strict).unwrap();
    assert_eq!(
        outcome,
        DecodedOutcome::FailedOperation {
            op_index: U256::from(3),
            paymaster: None,
            message: "bad sig".to_string(),
        }
    );
}

#[test]
fn test_failed_op_blames_paymaster() {
    let paymaster = address!("0x00000000000000000000000000000000000000aa");
    let payload = encode_failed_op(0, paymaster, "AA33 reverted");
    let outcome = RevertDecoder::default().decode(&payload).unwrap();
    let DecodedOutcome::FailedOperation { paymaster: blamed, message, .. } = outcome else {
        panic!("expected FailedOperation, got {outcome:?}");
    };
    assert_eq!(blamed, Some(paymaster));
    assert_eq!(message, "AA33 reverted");
}

#[test]
fn test_failed_op_v07() {
    let payload = encode_failed_op_v07(7, "AA23 reverted");
    assert_eq!(
        decode_revert(&payload, DecodeMode::Strict).unwrap(),
        DecodedOutcome::FailedOperation {
            op_index: U256::from(7),
            paymaster: None,
            message: "AA23 reverted".to_string(),
        }
    );
}

#[test]
fn test_panic_codes() {
    let cases = [
        (0x00, "generic compiler panic"),
        (0x01, "assertion failure"),
        (0x11, "arithmetic overflow/underflow"),
        (0x12, "divide by zero"),
        (0x32, "array index out of bounds or negative"),
        (0x51, "zero-initialized internal function pointer"),
        (0x99, "0x99"),
    ];
    for (code, description) in cases {
        let outcome = decode_revert(&encode_panic(code), DecodeMode::Strict).unwrap();
        assert_eq!(
            outcome,
            DecodedOutcome::Panic { code: U256::from(code), description: description.to_string() },
            "panic code {code:#x}"
        );
    }
}

#[test]
fn test_unknown_selector() {
    let payload = hex!("deadbeef0000");
    assert_eq!(
        decode_revert(&payload, DecodeMode::Lenient).unwrap(),
        DecodedOutcome::Unknown { raw: Bytes::copy_from_slice(&payload) }
    );
    let err = decode_revert(&payload, DecodeMode::Strict).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::SelectorMismatch { selector } if selector == hex!("deadbeef")
    ));
    assert_eq!(err.to_string(), "unknown selector 0xdeadbeef");
}

#[test]
fn test_short_payloads() {
    for payload in [&[][..], &hex!("00")[..], &hex!("08c379")[..]] {
        assert!(decode_revert(payload, DecodeMode::Lenient).unwrap().is_unknown());
        assert!(matches!(
            decode_revert(payload, DecodeMode::Strict),
            Err(DecodeError::TooShort { len }) if len == payload.len()
        ));
    }
}

#[test]
fn test_known_selector_with_bad_arguments() {
    // Right selector, argument tuple truncated after the offset word.
    let mut payload = encode_failed_op(1, Address::ZERO, "AA21 didn't pay prefund").to_vec();
    payload.truncate(4 + 32);
    for mode in [DecodeMode::Strict, DecodeMode::Lenient] {
        let err = decode_revert(&payload, mode).unwrap_err();
        assert!(
            matches!(err, DecodeError::ShapeMismatch { selector: RevertSelector::FailedOp, .. }),
            "{err}"
        );
    }
}

#[test]
fn test_non_canonical_arguments_are_rejected() {
    let payload = encode_failed_op(3, Address::ZERO, "bad sig").to_vec();

    // Non-zero padding in front of a zero paymaster.
    let mut dirty = payload.clone();
    dirty[36..48].fill(0xff);

    // Garbage after the encoded tuple.
    let mut trailing = payload.clone();
    trailing.extend_from_slice(&[0x5a; 7]);

    for malformed in [dirty, trailing] {
        for mode in [DecodeMode::Strict, DecodeMode::Lenient] {
            let err = decode_revert(&malformed, mode).unwrap_err();
            assert!(
                matches!(err, DecodeError::ShapeMismatch { selector: RevertSelector::FailedOp, .. }),
                "{err}"
            );
        }
    }
    assert!(decode_revert(&payload, DecodeMode::Strict).is_ok());
}

#[test]
fn test_hex_input() {
    let payload = encode_error("AA10 sender already constructed");
    let with_prefix = format!("0x{}", hex::encode(&payload));
    let without_prefix = hex::encode(&payload);
    assert_eq!(
        decode_revert_hex(&with_prefix, DecodeMode::Strict).unwrap(),
        decode_revert_hex(&without_prefix, DecodeMode::Strict).unwrap()
    );
    assert!(matches!(
        decode_revert_hex("0x08c3zz", DecodeMode::Lenient),
        Err(DecodeError::InvalidHex(_))
    ));
}

#[test]
fn test_outcome_json() {
    let payload = encode_failed_op(2, Address::ZERO, "AA25 invalid account nonce");
    let outcome = decode_revert(&payload, DecodeMode::Strict).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["kind"], "failedOperation");
    assert_eq!(json["opIndex"], "0x2");
    assert_eq!(json["paymaster"], serde_json::Value::Null);
    assert_eq!(json["message"], "AA25 invalid account nonce");
    assert_eq!(serde_json::from_value::<DecodedOutcome>(json).unwrap(), outcome);
}
