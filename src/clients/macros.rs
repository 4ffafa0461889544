/// Generates `get_<entity>`: an absent entity becomes `CatalogError::NotFound`.
macro_rules! impl_client_get {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](
                    &self,
                    id: <$entity as $crate::actor_framework::Entity>::Id,
                ) -> Result<$entity, $crate::error::CatalogError> {
                    tracing::debug!("Sending request");
                    let missing = format!(
                        "{} {}",
                        <$entity as $crate::actor_framework::Entity>::KIND,
                        id
                    );
                    self.inner
                        .get(id)
                        .await?
                        .ok_or($crate::error::CatalogError::NotFound(missing))
                }
            }
        }
    };
}

/// Generates `list_<entity>s`, returning every stored entity ordered by id.
macro_rules! impl_client_list {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_snake s>](
                    &self,
                ) -> Result<Vec<$entity>, $crate::error::CatalogError> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.list().await?)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_get!($client_name, $entity, $entity_name_snake);
    };
}
