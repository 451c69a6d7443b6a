//! Represents an object (file) stored in a container, as last read from the service.

use serde::Serialize;
use std::collections::BTreeMap;

/// Known attributes of a stored object after a successful read.
///
/// A descriptor only holds metadata, never the content bytes. It is built
/// fresh from the response headers of every create or get and is not updated
/// afterwards. Optional attributes the service did not return are left empty
/// (or zero for numeric fields).
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectDescriptor {
    /// Compound identifier, always `container/name`.
    pub id: String,

    /// Name of the object within its container.
    pub name: String,

    /// Name of the container holding the object.
    pub container: String,

    /// Type of ranges the object accepts (usually `bytes`).
    pub accept_ranges: String,

    /// Browser override behavior.
    pub content_disposition: String,

    pub content_encoding: String,

    /// Length of the object in bytes.
    pub content_length: u64,

    /// MIME type of the content.
    pub content_type: String,

    /// Date of the transaction, as sent by the service.
    pub date: String,

    /// MD5 checksum for objects under the segment threshold, or the checksum
    /// of the concatenated segment checksums for manifest objects.
    pub etag: String,

    /// When the object was created or last modified, as sent by the service.
    pub last_modified: String,

    /// Expiry instant in seconds since the epoch. Zero means no expiry.
    pub delete_at: u64,

    /// Manifest reference for segmented large objects.
    pub object_manifest: String,

    /// User-defined metadata carried as `X-Object-Meta-{key}` headers.
    pub metadata: BTreeMap<String, String>,

    /// When the object was first created as a current version.
    pub timestamp: String,

    /// Diagnostic token of the request, useful in bug reports to the provider.
    pub transaction_id: String,
}

impl ObjectDescriptor {
    /// Whether the service scheduled this object for deletion.
    pub fn expires(&self) -> bool {
        self.delete_at != 0
    }
}
