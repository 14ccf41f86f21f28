/// Secret decryption service of the host platform.
pub trait Encryptor: Send + Sync {
    fn decrypt(&self, ciphertext: &str) -> String;
}

/// Used when secrets reach the process already in clear text, e.g. through
/// environment variables injected by a secret manager.
#[derive(Debug, Default, Clone)]
pub struct PlaintextEncryptor;

impl Encryptor for PlaintextEncryptor {
    fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext.to_string()
    }
}
