use anyhow::Result;
use crypto_test_gen::{EdDSAData, EdDSAPoseidonTestVector, PointJson};
use eddsa_poseidon::{
    derive_public_key, derive_secret_scalar, pack_public_key, pack_signature, sign_message,
    unpack_signature, verify_signature, HashingAlgorithm, Input,
};
use num_bigint::BigUint;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT_DIR: &str = "e2e/crypto-test";

fn derive_vector(
    name: &str,
    description: &str,
    label: &str,
    seed: Input,
    algorithm: HashingAlgorithm,
) -> Result<EdDSAPoseidonTestVector> {
    let seed_bytes = seed.to_seed_bytes()?;
    let secret_scalar = derive_secret_scalar(&seed, algorithm)?;
    let public_key = derive_public_key(&seed, algorithm)?;

    Ok(EdDSAPoseidonTestVector {
        name: name.to_string(),
        description: description.to_string(),
        vector_type: "derivePublicKey".to_string(),
        algorithm: algorithm.to_string(),
        data: EdDSAData::DerivePublicKey {
            private_key: label.to_string(),
            private_key_bytes: hex::encode(&seed_bytes),
            secret_scalar: secret_scalar.to_string(),
            public_key: PointJson::from(&public_key),
            packed_public_key: pack_public_key(&public_key)?.to_string(),
        },
    })
}

fn sign_vector(
    name: &str,
    description: &str,
    seed: &[u8],
    message: Input,
    algorithm: HashingAlgorithm,
) -> Result<EdDSAPoseidonTestVector> {
    let public_key = derive_public_key(seed, algorithm)?;
    let signature = sign_message(seed, &message, algorithm)?;
    let valid = verify_signature(&message, &signature, &public_key)?;

    Ok(EdDSAPoseidonTestVector {
        name: name.to_string(),
        description: description.to_string(),
        vector_type: "signVerify".to_string(),
        algorithm: algorithm.to_string(),
        data: EdDSAData::SignVerify {
            private_key_bytes: hex::encode(seed),
            message: message.to_message()?.to_string(),
            public_key: PointJson::from(&public_key),
            signature,
            valid,
        },
    })
}

fn generate_vectors(algorithm: HashingAlgorithm) -> Result<Vec<EdDSAPoseidonTestVector>> {
    let seed = b"secret";
    let suffix = algorithm.to_string();

    let mut vectors = vec![
        derive_vector(
            &format!("derivePublicKey_string_secret_{suffix}"),
            "Derive public key from private key string 'secret'",
            "secret",
            Input::from("secret"),
            algorithm,
        )?,
        derive_vector(
            &format!("derivePublicKey_hex_secret_{suffix}"),
            "Derive public key from hex 0x736563726574 ('secret')",
            "0x736563726574",
            Input::Hex("0x736563726574".to_string()),
            algorithm,
        )?,
        derive_vector(
            &format!("derivePublicKey_bytes_{suffix}"),
            "Derive public key from bytes [3, 2]",
            "[3, 2]",
            Input::from(vec![3u8, 2]),
            algorithm,
        )?,
        sign_vector(
            &format!("signVerify_message_2_{suffix}"),
            "Sign and verify message value 2",
            seed,
            Input::from(2u64),
            algorithm,
        )?,
        sign_vector(
            &format!("signVerify_message_hex_0x12_{suffix}"),
            "Sign and verify message 0x12 (18 in decimal)",
            seed,
            Input::Hex("0x12".to_string()),
            algorithm,
        )?,
        sign_vector(
            &format!("signVerify_message_string_{suffix}"),
            "Sign and verify message string 'message' read as a big-endian integer",
            seed,
            Input::from(BigUint::from_bytes_be(b"message")),
            algorithm,
        )?,
    ];

    let signature = sign_message(&seed[..], 2u64, algorithm)?;
    let packed = pack_signature(&signature)?;
    anyhow::ensure!(
        unpack_signature(&packed)? == signature,
        "packed signature does not round trip"
    );
    vectors.push(EdDSAPoseidonTestVector {
        name: format!("packSignature_message_2_{suffix}"),
        description: "Pack signature for message 2".to_string(),
        vector_type: "packSignature".to_string(),
        algorithm: suffix,
        data: EdDSAData::PackSignature {
            signature,
            packed: hex::encode(packed),
        },
    });

    Ok(vectors)
}

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let mut vectors = Vec::new();
    for algorithm in [HashingAlgorithm::Blake512, HashingAlgorithm::Blake2b] {
        let generated = generate_vectors(algorithm)?;
        debug!(%algorithm, count = generated.len(), "generated vectors");
        vectors.extend(generated);
    }

    fs::create_dir_all(&output_dir)?;
    let output_path = output_dir.join("eddsa-poseidon-test-vectors.json");
    fs::write(&output_path, serde_json::to_string_pretty(&vectors)?)?;

    info!(
        count = vectors.len(),
        path = %output_path.display(),
        "saved EdDSA-Poseidon test vectors"
    );

    Ok(())
}
