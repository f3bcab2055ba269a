use axum::extract::FromRef;
use folio_database::Database;
use folio_domain::config::AppConfig;
use folio_domain::registry::{FeatureSlice, InitializedSlice};
use fxhash::FxHashMap;
use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[folio_derive::folio_error]
pub enum ApiStateError {
    /// A required part was not handed to the builder.
    #[error("Incomplete API state{}: {message}", format_context(.context))]
    Incomplete { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A handler asked for a slice that was never registered.
    #[error("Feature slice not registered{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Everything a request handler can reach: configuration, the store connection, and
/// the registered feature slices.
#[derive(Debug)]
pub struct ApiStateInner {
    pub config: AppConfig,
    pub database: Database,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared handle to [`ApiStateInner`]; one clone per request.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>())?.downcast_ref::<T>()
    }

    /// Like [`get_slice`](Self::get_slice), but a missing slice is an error that maps to a 500.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>()
            .ok_or_else(|| ApiStateError::MissingSlice { message: type_name::<T>().into(), context: None })
    }

    /// Type names of the registered slices.
    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.slices.values().map(|slice| slice.name)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for Database {
    fn from_ref(state: &ApiState) -> Self {
        state.database.clone()
    }
}

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<AppConfig>,
    database: Option<Database>,
    slices: Vec<InitializedSlice>,
}

impl ApiStateBuilder {
    /// Defaults to [`AppConfig::default`] when not set.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn db(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Adds slices; registering the same slice type twice keeps the last one.
    pub fn register_slices(mut self, slices: impl IntoIterator<Item = InitializedSlice>) -> Self {
        self.slices.extend(slices);
        self
    }

    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let Some(database) = self.database else {
            return Err(ApiStateError::Incomplete {
                message: "no database connection".into(),
                context: None,
            });
        };

        let slices = self.slices.into_iter().map(|slice| (slice.id, slice)).collect();
        let config = self.config.unwrap_or_default();

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, database, slices }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Greeter(&'static str);

    impl FeatureSlice for Greeter {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Unregistered;

    impl FeatureSlice for Unregistered {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    async fn database() -> Database {
        Database::builder().url("mem://").session("test", "state").init().await.expect("mem://")
    }

    #[tokio::test]
    async fn slices_are_found_by_type() {
        let state = ApiState::builder()
            .db(database().await)
            .register_slices([InitializedSlice::new(Greeter("hello"))])
            .build()
            .expect("state");

        assert_eq!(state.get_slice::<Greeter>().map(|g| g.0), Some("hello"));
        assert!(state.get_slice::<Unregistered>().is_none());
        assert!(matches!(
            state.try_get_slice::<Unregistered>(),
            Err(ApiStateError::MissingSlice { .. })
        ));
        assert_eq!(state.slice_names().count(), 1);
        assert_eq!(state.config.server.port, 8001);
    }

    #[test]
    fn database_is_required() {
        let err = ApiState::builder().build().unwrap_err();
        assert!(matches!(err, ApiStateError::Incomplete { .. }));
    }
}
