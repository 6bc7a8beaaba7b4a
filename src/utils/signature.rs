use sha2::{Digest, Sha256};

/// Computes the signature for a signed upload request.
///
/// The parameters to be signed are sorted by key, joined as
/// `key=value` pairs with `&`, the API secret is appended, and the whole
/// string is hashed with SHA-256. The hex-encoded digest accompanies the
/// request alongside the API key and timestamp.
///
/// # Arguments
///
/// * `params` - The (key, value) pairs included in the signature, unsorted.
/// * `api_secret` - The account API secret.
///
/// # Returns
///
/// A hexadecimal string representation of the SHA-256 signature.
pub fn sign_request(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);

    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
