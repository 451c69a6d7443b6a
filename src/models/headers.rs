//! Wire vocabulary for object requests and responses.
//!
//! Every core attribute of an object travels as one fixed HTTP header. The
//! table below is the single source of truth for those names, used by both
//! the request marshaler and the response unmarshaler.

/// Prefix that marks a header as user-defined metadata (`X-Object-Meta-{key}`).
pub const METADATA_PREFIX: &str = "X-Object-Meta-";

/// A core object header, mapped to its wire name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectHeader {
    AcceptRanges,
    ContentDisposition,
    ContentEncoding,
    ContentLength,
    ContentType,
    CopyFrom,
    Date,
    DeleteAt,
    ETag,
    LastModified,
    Newest,
    ObjectManifest,
    Range,
    Timestamp,
    TransactionId,
    TransferEncoding,
}

impl ObjectHeader {
    /// Canonical wire name of the header.
    pub const fn name(self) -> &'static str {
        match self {
            ObjectHeader::AcceptRanges => "Accept-Ranges",
            ObjectHeader::ContentDisposition => "Content-Disposition",
            ObjectHeader::ContentEncoding => "Content-Encoding",
            ObjectHeader::ContentLength => "Content-Length",
            ObjectHeader::ContentType => "Content-Type",
            ObjectHeader::CopyFrom => "X-Copy-From",
            ObjectHeader::Date => "Date",
            ObjectHeader::DeleteAt => "X-Delete-At",
            ObjectHeader::ETag => "ETag",
            ObjectHeader::LastModified => "Last-Modified",
            ObjectHeader::Newest => "X-Newest",
            ObjectHeader::ObjectManifest => "X-Object-Manifest",
            ObjectHeader::Range => "Range",
            ObjectHeader::Timestamp => "X-Timestamp",
            ObjectHeader::TransactionId => "X-Trans-Id",
            ObjectHeader::TransferEncoding => "Transfer-Encoding",
        }
    }
}
