use elgamal_signature::{
    ElGamal, GroupParameters, Helper, Random, SignatureError, DEFAULT_PRIMALITY_ROUNDS,
};
use num_bigint::BigUint;
use rand::{rngs::StdRng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn end_to_end_with_fixed_nonce() {
    init_logger();
    let params = GroupParameters::new(BigUint::from(10007u32), BigUint::from(5u32)).unwrap();
    let x = BigUint::from(1234u32);
    let keys = Helper::key_pair_from_private(&params, &x).unwrap();
    assert_eq!(keys.public.y, BigUint::from(5u32).modpow(&x, &params.q));

    // gcd(9, 10006) = 1
    let k = BigUint::from(9u32);
    let signature = ElGamal::sign_with_nonce(b"fixed nonce", &keys.private, &k).unwrap();
    assert_eq!(signature.s1, BigUint::from(5u32).modpow(&k, &params.q));
    assert!(ElGamal::verify(b"fixed nonce", &signature, &keys.public));
    assert!(!ElGamal::verify(b"fixed nonc3", &signature, &keys.public));
}

#[test]
fn end_to_end_with_random_keys() {
    init_logger();
    let params = GroupParameters::new(BigUint::from(10007u32), BigUint::from(5u32)).unwrap();
    let mut rng = StdRng::seed_from_u64(2021);

    let keys = Helper::generate_key_pair(&params, &mut rng).unwrap();
    let messages: [&[u8]; 3] = [b"", b"vote", b"a somewhat longer message to sign"];
    for message in messages.iter() {
        let signature = ElGamal::sign(message, &keys.private, &mut rng).unwrap();
        assert!(ElGamal::verify_strict(message, &signature, &keys.public));
    }
}

#[test]
fn parameters_of_the_example_group_are_valid() {
    init_logger();
    let params = GroupParameters::new(BigUint::from(10007u32), BigUint::from(5u32)).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    // q - 1 = 10006 = 2 * 5003
    let factors = [BigUint::from(2u32), BigUint::from(5003u32)];
    assert!(Random::is_prime(&BigUint::from(5003u32), DEFAULT_PRIMALITY_ROUNDS, &mut rng));
    let result = Helper::validate(&params, &factors, DEFAULT_PRIMALITY_ROUNDS, &mut rng);
    assert!(result.is_ok());
}

#[test]
fn degenerate_parameters_are_rejected_consistently() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0);
    let params = GroupParameters {
        q: BigUint::from(2u32),
        a: BigUint::from(1u32),
    };

    let result = Helper::generate_key_pair(&params, &mut rng);
    assert!(matches!(result, Err(SignatureError::InvalidParameters(_))));
    assert!(matches!(
        GroupParameters::new(BigUint::from(2u32), BigUint::from(1u32)),
        Err(SignatureError::InvalidParameters(_))
    ));
}
