//! Property tests over arbitrary inputs.

use aa_guard::{
    calldata_gas, decode_revert, test_utils::encode_failed_op, CalldataCost, DecodeMode,
    DecodedOutcome,
};
use alloy_primitives::Address;
use proptest::prelude::*;

proptest! {
    #[test]
    fn calldata_gas_matches_byte_counts(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let zeros = data.iter().filter(|byte| **byte == 0).count() as u64;
        let non_zeros = data.len() as u64 - zeros;
        prop_assert_eq!(calldata_gas(&data), 4 * zeros + 16 * non_zeros);

        let cost = CalldataCost::of(&data);
        prop_assert_eq!(cost.len(), data.len() as u64);
        prop_assert_eq!(cost.gas(), calldata_gas(&data));
    }

    #[test]
    fn calldata_gas_is_additive(
        head in proptest::collection::vec(any::<u8>(), 0..128),
        tail in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let joined = [head.as_slice(), tail.as_slice()].concat();
        prop_assert_eq!(calldata_gas(&joined), calldata_gas(&head) + calldata_gas(&tail));
    }

    #[test]
    fn lenient_decoding_only_fails_on_bad_arguments(
        payload in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        match decode_revert(&payload, DecodeMode::Lenient) {
            Ok(_) => {}
            Err(err) => prop_assert!(err.is_shape_mismatch(), "{}", err),
        }
    }

    #[test]
    fn short_payloads_are_unknown(payload in proptest::collection::vec(any::<u8>(), 0..4)) {
        prop_assert!(decode_revert(&payload, DecodeMode::Lenient).unwrap().is_unknown());
    }

    #[test]
    fn failed_op_decodes_exactly(
        op_index in any::<u64>(),
        reason in ".{0,64}",
        trailing in proptest::collection::vec(any::<u8>(), 1..40),
    ) {
        let payload = encode_failed_op(op_index, Address::ZERO, &reason).to_vec();
        match decode_revert(&payload, DecodeMode::Strict) {
            Ok(DecodedOutcome::FailedOperation { message, paymaster: None, .. }) => {
                prop_assert_eq!(message, reason);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }

        let extended = [payload.as_slice(), trailing.as_slice()].concat();
        let err = decode_revert(&extended, DecodeMode::Lenient).unwrap_err();
        prop_assert!(err.is_shape_mismatch(), "{}", err);
    }
}
