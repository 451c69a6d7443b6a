//! Inputs accepted by the object operations.

use bytes::Bytes;
use std::collections::BTreeMap;

/// Input for creating (or replacing) an object inside a container.
///
/// Either `body` or `copy_from` must be set. Optional fields left as `None`
/// (or empty) are not sent, so the service applies its own default.
#[derive(Clone, Debug, Default)]
pub struct CreateObjectInput {
    /// Name of the container to place the object in.
    pub container: String,

    /// Name of the object.
    pub name: String,

    /// Content to upload.
    pub body: Option<Bytes>,

    /// Override the behavior of the browser.
    pub content_disposition: Option<String>,

    pub content_encoding: Option<String>,

    /// MIME type of the object. The service defaults to `text/plain`.
    pub content_type: Option<String>,

    /// Source `container/object` to copy from, URL-encoded.
    pub copy_from: Option<String>,

    /// Expiry instant in seconds since the epoch.
    pub delete_at: Option<u64>,

    /// User-defined metadata, sent as `X-Object-Meta-{key}`. Keys must already
    /// be valid header-name characters.
    pub metadata: BTreeMap<String, String>,

    /// Unquoted MD5 checksum of the body.
    pub etag: Option<String>,

    /// Only `chunked` is meaningful to the service.
    pub transfer_encoding: Option<String>,
}

impl CreateObjectInput {
    pub fn new(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_copy_from(mut self, source: impl Into<String>) -> Self {
        self.copy_from = Some(source.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_content_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(encoding.into());
        self
    }

    pub fn with_content_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(disposition.into());
        self
    }

    pub fn with_delete_at(mut self, epoch_seconds: u64) -> Self {
        self.delete_at = Some(epoch_seconds);
        self
    }

    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    pub fn with_transfer_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.transfer_encoding = Some(encoding.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Fill in the ETag with the hex MD5 digest of the body.
    ///
    /// Leaves an explicitly set ETag alone, and does nothing for copies.
    pub fn with_computed_etag(mut self) -> Self {
        let missing = self.etag.as_deref().is_none_or(str::is_empty);
        if let (true, Some(body)) = (missing, self.body.as_ref()) {
            self.etag = Some(format!("{:x}", md5::compute(body)));
        }
        self
    }
}

/// Input for reading the descriptor of an existing object.
///
/// Either `id` or both `container` and `name` must be set.
#[derive(Clone, Debug, Default)]
pub struct GetObjectInput {
    /// Compound identifier `container/object`.
    pub id: String,

    pub name: String,

    pub container: String,

    /// Byte range such as `bytes=-5` or `bytes=10-15`; several ranges may be
    /// joined with commas. Always sent, even when empty.
    pub range: String,

    /// Ask the service to query every replica and answer with the most recent.
    /// Slower on the back end, so only set it when needed.
    pub newest: bool,
}

impl GetObjectInput {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn by_name(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_newest(mut self, newest: bool) -> Self {
        self.newest = newest;
        self
    }
}

/// Input for deleting an object. Either `id` or both `container` and `name`
/// must be set.
#[derive(Clone, Debug, Default)]
pub struct DeleteObjectInput {
    pub id: String,
    pub name: String,
    pub container: String,
}

impl DeleteObjectInput {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn by_name(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}
