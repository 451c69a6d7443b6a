//! ObjectClient: create, read and delete objects through a [`Transport`].
//!
//! Each call is one request (two for create, which reads the object back).
//! The client holds no state besides its transport, so it can be shared
//! between tasks whenever the transport can.

use crate::{
    config::ClientConfig,
    errors::ObjectResult,
    models::{
        object::ObjectDescriptor,
        requests::{CreateObjectInput, DeleteObjectInput, GetObjectInput},
    },
    services::{
        identifier::{compose_id, resolve_id, split_id},
        marshal::{create_headers, get_headers, read_descriptor},
    },
    transport::{HttpTransport, Transport},
};
use http::{HeaderMap, Method};
use tracing::{debug, info};

/// Object operations against a storage service.
#[derive(Clone, Debug)]
pub struct ObjectClient<T> {
    transport: T,
}

impl ObjectClient<HttpTransport> {
    /// Build a client talking HTTP to the configured endpoint.
    pub fn connect(config: ClientConfig) -> ObjectResult<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ObjectClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Upload (or server-side copy) an object, then read back its descriptor.
    ///
    /// The descriptor comes from a follow-up read rather than the write
    /// response.
    pub async fn create_object(&self, input: &CreateObjectInput) -> ObjectResult<ObjectDescriptor> {
        let id = resolve_id("", &input.container, &input.name)?;
        let headers = create_headers(input)?;

        debug!(
            id = %id,
            body_bytes = input.body.as_ref().map(|b| b.len()).unwrap_or(0),
            copy_from = input.copy_from.as_deref().unwrap_or(""),
            "creating object"
        );
        self.transport
            .issue(Method::PUT, &id, headers, input.body.clone())
            .await?;
        info!(id = %id, "object created");

        self.get_object(&GetObjectInput::by_name(&input.container, &input.name))
            .await
    }

    /// Read an object's descriptor without fetching its content.
    pub async fn get_object(&self, input: &GetObjectInput) -> ObjectResult<ObjectDescriptor> {
        let id = resolve_id(&input.id, &input.container, &input.name)?;

        // Identity fields are not part of the response, so take them from
        // the input.
        let (container, name) = if input.id.is_empty() {
            (input.container.clone(), input.name.clone())
        } else {
            split_id(&input.id)?
        };

        let headers = get_headers(&input.range, input.newest)?;
        debug!(id = %id, range = %input.range, newest = input.newest, "reading object");
        let response: HeaderMap = self
            .transport
            .issue(Method::HEAD, &id, headers, None)
            .await?;

        let mut object = read_descriptor(&response)?;
        object.id = compose_id(&container, &name);
        object.container = container;
        object.name = name;
        Ok(object)
    }

    /// Delete an object. Nothing is read from the response.
    pub async fn delete_object(&self, input: &DeleteObjectInput) -> ObjectResult<()> {
        let id = resolve_id(&input.id, &input.container, &input.name)?;

        debug!(id = %id, "deleting object");
        self.transport
            .issue(Method::DELETE, &id, HeaderMap::new(), None)
            .await?;
        info!(id = %id, "object deleted");
        Ok(())
    }
}
