use crate::{
    repository,
    store::{Store, StoreError},
    types::checkpoint::Checkpoint,
};

pub async fn last_processed_block(
    store: &dyn Store,
    network: &str,
) -> Result<Option<u64>, StoreError> {
    let checkpoint = repository::load::<Checkpoint>(store, network).await?;
    Ok(checkpoint.map(|c| c.block_number))
}

pub async fn set_last_processed_block(
    store: &dyn Store,
    network: &str,
    block_number: u64,
) -> Result<(), StoreError> {
    let checkpoint = Checkpoint {
        id: network.to_string(),
        block_number,
    };
    repository::save(store, &checkpoint).await
}
