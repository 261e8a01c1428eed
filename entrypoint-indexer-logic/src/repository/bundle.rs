use crate::{
    repository,
    store::{Store, StoreError},
    types::{bundle::Bundle, common::hex_id, event::EventContext},
};

/// Counts one more operation event against the bundle of the event's
/// transaction, creating the bundle on first sight. Static fields are taken
/// from the first event only.
pub async fn add_to_bundle(store: &dyn Store, context: &EventContext) -> Result<Bundle, StoreError> {
    let id = hex_id(context.transaction_hash);
    let mut bundle = match repository::load::<Bundle>(store, &id).await? {
        Some(bundle) => bundle,
        None => Bundle::new(context),
    };
    bundle.user_ops_length += 1;
    repository::save(store, &bundle).await?;
    Ok(bundle)
}
