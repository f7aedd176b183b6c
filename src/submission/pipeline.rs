use uuid::Uuid;

use crate::error::AppError;
use crate::store::ContactStore;

use super::{fields, parser};

/// Reserve a store connection, then parse, validate and insert.
///
/// The connection is taken before the body is looked at, so an unavailable
/// store answers every submission with a persistence error. Invalid
/// submissions never reach `insert`.
pub async fn run(
    store: &dyn ContactStore,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Uuid, AppError> {
    let mut writer = store.checkout().await?;

    let raw_data = parser::parse_body(content_type, body)?;
    let contact = fields::parse_contact(&raw_data)?;

    let id = writer.insert(&contact).await?;
    tracing::info!("Stored contact submission {id}");

    Ok(id)
}
