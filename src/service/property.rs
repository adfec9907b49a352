//! Operation semantics: not-found translation, create/update/delete outcomes.

use crate::error::AppError;
use crate::model::{Property, PropertyPayload};
use crate::store::PropertyStore;

/// Parse an `{id}` path segment. Only ASCII digits are accepted (no sign, no whitespace);
/// anything else, or a value past `i64::MAX`, cannot match a row.
pub fn parse_id(id_str: &str) -> Result<i64, AppError> {
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(id_str.to_string()));
    }
    id_str
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(id_str.to_string()))
}

pub struct PropertyService;

impl PropertyService {
    pub async fn list(store: &dyn PropertyStore) -> Result<Vec<Property>, AppError> {
        store.list_all().await
    }

    pub async fn get(store: &dyn PropertyStore, id: i64) -> Result<Property, AppError> {
        store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Insert a validated payload. Returns the id the store assigned.
    pub async fn create(store: &dyn PropertyStore, payload: &PropertyPayload) -> Result<i64, AppError> {
        let id = store.insert(payload).await?;
        tracing::info!(id, cidade = %payload.cidade, tipo = %payload.tipo, "imovel created");
        Ok(id)
    }

    /// Full replace. Existence is confirmed by the post-update read, not by the UPDATE itself.
    pub async fn update(
        store: &dyn PropertyStore,
        id: i64,
        payload: &PropertyPayload,
    ) -> Result<Property, AppError> {
        let row = store
            .update(id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tracing::info!(id, "imovel updated");
        Ok(row)
    }

    pub async fn delete(store: &dyn PropertyStore, id: i64) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(AppError::NotFound(id.to_string()));
        }
        tracing::info!(id, "imovel deleted");
        Ok(())
    }

    pub async fn by_tipo(store: &dyn PropertyStore, tipo: &str) -> Result<Vec<Property>, AppError> {
        store.find_by_tipo(tipo).await
    }

    pub async fn by_cidade(store: &dyn PropertyStore, cidade: &str) -> Result<Vec<Property>, AppError> {
        store.find_by_cidade(cidade).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{sample_rows, MemoryStore};

    fn payload() -> PropertyPayload {
        PropertyPayload {
            logradouro: "Nicole Common".into(),
            tipo_logradouro: "Rua".into(),
            bairro: "Lake Danielle".into(),
            cidade: "Judymouth".into(),
            cep: "00184".into(),
            tipo: "casa".into(),
            valor: 100.5,
            data_aquisicao: "2020-01-02".parse().unwrap(),
        }
    }

    #[test]
    fn parse_id_accepts_only_plain_digits() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
        for raw in ["", "abc", "-3", "+8", " 8", "8 ", "1e3", "99999999999999999999999"] {
            assert!(matches!(parse_id(raw), Err(AppError::NotFound(_))), "{raw:?}");
        }
    }

    #[tokio::test]
    async fn get_returns_row_or_not_found() {
        let store = MemoryStore::with_rows(sample_rows());
        assert_eq!(PropertyService::get(&store, 6).await.unwrap().cidade, "Lake Michael");
        for id in [3, -1, i64::MAX] {
            assert!(matches!(PropertyService::get(&store, id).await, Err(AppError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn create_assigns_a_fresh_id() {
        let store = MemoryStore::with_rows(sample_rows());
        let before = store.len();
        let id = PropertyService::create(&store, &payload()).await.unwrap();
        assert_eq!(store.len(), before + 1);
        assert!(sample_rows().iter().all(|p| p.id != id));
        assert_eq!(store.get(id).unwrap(), payload().into_property(id));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let store = MemoryStore::with_rows(sample_rows());
        let row = PropertyService::update(&store, 1, &payload()).await.unwrap();
        assert_eq!(row, payload().into_property(1));
        assert_eq!(store.get(1).unwrap(), row);
    }

    #[tokio::test]
    async fn update_missing_id_leaves_store_unchanged() {
        let store = MemoryStore::with_rows(sample_rows());
        let err = PropertyService::update(&store, 77, &payload()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len(), sample_rows().len());
        assert!(store.get(77).is_none());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let store = MemoryStore::with_rows(sample_rows());
        PropertyService::delete(&store, 8).await.unwrap();
        assert_eq!(store.len(), sample_rows().len() - 1);
        assert!(store.get(8).is_none());

        let err = PropertyService::delete(&store, 8).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len(), sample_rows().len() - 1);
    }

    #[tokio::test]
    async fn filters_are_exact_and_may_be_empty() {
        let store = MemoryStore::with_rows(sample_rows());
        let ids: Vec<i64> = PropertyService::by_cidade(&store, "Lake Michael")
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![6, 50]);
        assert!(PropertyService::by_tipo(&store, "casa").await.unwrap().iter().all(|p| p.tipo == "casa"));
        assert!(PropertyService::by_tipo(&store, "apartamento").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let store = MemoryStore::with_rows(sample_rows());
        store.fail();
        assert!(matches!(PropertyService::list(&store).await, Err(AppError::Store(_))));
    }
}
