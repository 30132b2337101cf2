//! EdDSA-Poseidon walkthrough
//!
//! Exercises every public operation of the library.
//!
//! Run with: cargo run --example complete

use eddsa_poseidon::{
    derive_public_key, derive_secret_scalar, pack_public_key, pack_signature, point_to_decimal,
    sign_message, unpack_public_key, unpack_signature, verify_signature, BigUint, EdDSAPoseidon,
    HashingAlgorithm, Input,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = HashingAlgorithm::Blake512;

    println!("1. Keys from a text seed:");
    let secret_scalar = derive_secret_scalar("secret", algorithm)?;
    let public_key = derive_public_key("secret", algorithm)?;
    println!("Secret Scalar: {}", secret_scalar);
    println!("Public Key: {:?}\n", point_to_decimal(&public_key));

    println!("2. Sign and verify:");
    let signature = sign_message("secret", 2u64, algorithm)?;
    println!("Signature: {}", serde_json::to_string(&signature)?);
    println!(
        "Valid: {}\n",
        verify_signature(2u64, &signature, &public_key)?
    );

    println!("3. Packed public key:");
    let packed_public_key = pack_public_key(&public_key)?;
    println!("Packed: {}", packed_public_key);
    println!(
        "Round trip: {}\n",
        unpack_public_key(&packed_public_key)? == public_key
    );

    println!("4. Packed signature:");
    let packed_signature = pack_signature(&signature)?;
    println!("Packed (hex): {}", hex::encode(packed_signature));
    println!(
        "Round trip: {}\n",
        unpack_signature(&packed_signature)? == signature
    );

    println!("5. Seed forms:");
    let seeds = [
        Input::from("secret"),
        Input::from(b"secret"),
        Input::Hex("0x736563726574".to_string()),
        Input::from(BigUint::from_bytes_be(b"secret")),
    ];
    for seed in &seeds {
        let same = derive_public_key(seed, algorithm)? == public_key;
        println!("{:?} -> same key: {}", seed, same);
    }
    println!();

    println!("6. Identity wrapper:");
    let identity = EdDSAPoseidon::random(HashingAlgorithm::Blake2b)?;
    println!("{:?}", identity);
    let message = Input::from("Hello, World!");
    let signature = identity.sign_message(&message)?;
    println!(
        "Valid: {}",
        identity.verify_signature(&message, &signature)?
    );

    Ok(())
}
