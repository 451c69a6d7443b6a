//! Translation between object records and HTTP headers.
//!
//! Outgoing: optional fields of a [`CreateObjectInput`] become request headers,
//! skipping anything left empty so the service applies its default.
//! Incoming: response headers fill an [`ObjectDescriptor`]. Header names are
//! matched case-insensitively, so metadata keys come back in the lowercase
//! form HTTP libraries normalize names to.

use crate::{
    errors::{ObjectError, ObjectResult},
    models::{
        headers::{METADATA_PREFIX, ObjectHeader},
        object::ObjectDescriptor,
        requests::CreateObjectInput,
    },
};
use http::{HeaderMap, HeaderName, HeaderValue};

/// Build the request headers for a create.
///
/// Fails when neither a body nor a copy source is given, or when a metadata
/// key or any value cannot be carried in a header.
pub fn create_headers(input: &CreateObjectInput) -> ObjectResult<HeaderMap> {
    if input.body.is_none() && is_unset(input.copy_from.as_deref()) {
        return Err(ObjectError::validation("Body cannot be nil"));
    }

    let mut headers = HeaderMap::new();
    let scalars = [
        (ObjectHeader::ContentDisposition, &input.content_disposition),
        (ObjectHeader::ContentEncoding, &input.content_encoding),
        (ObjectHeader::ContentType, &input.content_type),
        (ObjectHeader::ETag, &input.etag),
        (ObjectHeader::TransferEncoding, &input.transfer_encoding),
        (ObjectHeader::CopyFrom, &input.copy_from),
    ];
    for (header, value) in scalars {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            insert(&mut headers, header.name(), value)?;
        }
    }

    if let Some(delete_at) = input.delete_at.filter(|at| *at != 0) {
        insert(
            &mut headers,
            ObjectHeader::DeleteAt.name(),
            &delete_at.to_string(),
        )?;
    }

    for (key, value) in &input.metadata {
        insert(&mut headers, &format!("{}{}", METADATA_PREFIX, key), value)?;
    }

    Ok(headers)
}

/// Build the request headers for a metadata read.
///
/// Both headers are always present: an empty range asks for the whole object.
pub fn get_headers(range: &str, newest: bool) -> ObjectResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ObjectHeader::Range.name(), range)?;
    insert(
        &mut headers,
        ObjectHeader::Newest.name(),
        if newest { "true" } else { "false" },
    )?;
    Ok(headers)
}

/// Read an object descriptor from response headers.
///
/// Missing headers leave their field empty. A numeric header that does not
/// parse fails the whole read. Identity fields (`id`, `container`, `name`)
/// are not carried in the response and stay empty.
pub fn read_descriptor(headers: &HeaderMap) -> ObjectResult<ObjectDescriptor> {
    Ok(ObjectDescriptor {
        accept_ranges: text(headers, ObjectHeader::AcceptRanges),
        content_disposition: text(headers, ObjectHeader::ContentDisposition),
        content_encoding: text(headers, ObjectHeader::ContentEncoding),
        content_length: number(headers, ObjectHeader::ContentLength)?,
        content_type: text(headers, ObjectHeader::ContentType),
        date: text(headers, ObjectHeader::Date),
        etag: text(headers, ObjectHeader::ETag),
        last_modified: text(headers, ObjectHeader::LastModified),
        delete_at: number(headers, ObjectHeader::DeleteAt)?,
        object_manifest: text(headers, ObjectHeader::ObjectManifest),
        metadata: metadata(headers),
        timestamp: text(headers, ObjectHeader::Timestamp),
        transaction_id: text(headers, ObjectHeader::TransactionId),
        ..Default::default()
    })
}

fn is_unset(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) -> ObjectResult<()> {
    let header = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ObjectError::validation(format!("invalid header name `{}`", name)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| ObjectError::validation(format!("invalid value for header `{}`", name)))?;
    headers.insert(header, value);
    Ok(())
}

fn lossy(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

fn text(headers: &HeaderMap, header: ObjectHeader) -> String {
    headers.get(header.name()).map(lossy).unwrap_or_default()
}

fn number(headers: &HeaderMap, header: ObjectHeader) -> ObjectResult<u64> {
    let value = text(headers, header);
    if value.is_empty() {
        return Ok(0);
    }
    value.parse::<u64>().map_err(|source| ObjectError::Format {
        header: header.name(),
        value,
        source,
    })
}

/// Strip the metadata prefix from a header name, ignoring case.
fn metadata_key(name: &str) -> Option<&str> {
    let prefix = METADATA_PREFIX.len();
    if name.len() > prefix
        && name.as_bytes()[..prefix].eq_ignore_ascii_case(METADATA_PREFIX.as_bytes())
    {
        Some(&name[prefix..])
    } else {
        None
    }
}

fn metadata(headers: &HeaderMap) -> std::collections::BTreeMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            let key = metadata_key(name.as_str())?;
            let value = headers
                .get_all(name)
                .iter()
                .map(lossy)
                .collect::<Vec<_>>()
                .join(" ");
            Some((key.to_string(), value))
        })
        .collect()
}
