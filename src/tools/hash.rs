//! File hashing

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

const CHUNK_SIZE: usize = 65536;

/// Hex digests computed over an uploaded byte stream
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileDigests {
    #[serde(rename = "MD5")]
    pub md5: String,
    #[serde(rename = "SHA1")]
    pub sha1: String,
    #[serde(rename = "SHA256")]
    pub sha256: String,
}

/// Compute MD5, SHA1 and SHA256 digests of the given bytes.
pub fn digest_bytes(data: &[u8]) -> FileDigests {
    let mut md5 = Md5::new();
    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();

    for chunk in data.chunks(CHUNK_SIZE) {
        md5.update(chunk);
        sha1.update(chunk);
        sha256.update(chunk);
    }

    FileDigests {
        md5: hex::encode(md5.finalize()),
        sha1: hex::encode(sha1.finalize()),
        sha256: hex::encode(sha256.finalize()),
    }
}
