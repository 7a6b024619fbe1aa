use anyhow::Result;

/// Opaque file storage (avatars, challenge images).
#[allow(async_fn_in_trait)]
pub trait BlobStore {
    /// Store the object and return its public URL.
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<String>;

    async fn public_url(&self, path: &str) -> Result<Option<String>>;
}
