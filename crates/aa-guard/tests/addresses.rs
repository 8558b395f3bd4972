//! Tests for counterfactual address derivation.

use aa_guard::{
    resolve_counterfactual_address, resolve_create_address, resolve_from_init_code_hash,
    try_resolve_counterfactual_address,
};
use alloy_primitives::{address, b256, keccak256, Address, B256};

const FACTORY: Address = address!("0x4e59b44847b379578588920ca78fbf26c0b4956c");
const SALT: B256 = b256!("0x00000000000000000000000000000000000000000000000000000000000000a1");
const INIT_CODE: &[u8] = &[0x60, 0x80, 0x60, 0x40, 0x52];

#[test]
fn test_deterministic() {
    let first = resolve_counterfactual_address(FACTORY, SALT, INIT_CODE);
    let second = resolve_counterfactual_address(FACTORY, SALT, INIT_CODE);
    assert_eq!(first, second);
    assert_eq!(first, resolve_from_init_code_hash(FACTORY, SALT, keccak256(INIT_CODE)));
}

#[test]
fn test_every_input_matters() {
    let base = resolve_counterfactual_address(FACTORY, SALT, INIT_CODE);

    let mut factory = FACTORY;
    factory.0[19] ^= 1;
    assert_ne!(resolve_counterfactual_address(factory, SALT, INIT_CODE), base);

    let mut salt = SALT;
    salt.0[0] ^= 1;
    assert_ne!(resolve_counterfactual_address(FACTORY, salt, INIT_CODE), base);

    let mut init_code = INIT_CODE.to_vec();
    init_code[2] ^= 1;
    assert_ne!(resolve_counterfactual_address(FACTORY, SALT, &init_code), base);
}

#[test]
fn test_raw_inputs() {
    assert_eq!(
        try_resolve_counterfactual_address(FACTORY.as_slice(), SALT.as_slice(), INIT_CODE).unwrap(),
        resolve_counterfactual_address(FACTORY, SALT, INIT_CODE)
    );

    let err = try_resolve_counterfactual_address(&FACTORY[..19], SALT.as_slice(), INIT_CODE)
        .unwrap_err();
    assert_eq!((err.expected, err.actual), (20, 19));

    let long_salt = [0u8; 33];
    let err = try_resolve_counterfactual_address(FACTORY.as_slice(), &long_salt, INIT_CODE)
        .unwrap_err();
    assert_eq!((err.expected, err.actual), (32, 33));
}

#[test]
fn test_create_address() {
    let deployer = address!("0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");
    assert_eq!(
        resolve_create_address(deployer, 0),
        address!("0xcd234a471b72ba2f1ccf0a70fcaba648a5eecd8d")
    );
    assert_eq!(
        resolve_create_address(deployer, 1),
        address!("0x343c43a37d37dff08ae8c4a11544c718abb4fcf8")
    );
}
