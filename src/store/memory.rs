//! In-process `PropertyStore` for handler and service tests.

use super::PropertyStore;
use crate::error::AppError;
use crate::model::{Property, PropertyPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MemoryStore {
    rows: Mutex<BTreeMap<i64, Property>>,
    next_id: Mutex<i64>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub(crate) fn with_rows(rows: impl IntoIterator<Item = Property>) -> Self {
        let rows: BTreeMap<i64, Property> = rows.into_iter().map(|p| (p.id, p)).collect();
        let next_id = rows.keys().next_back().copied().unwrap_or(0);
        Self {
            rows: Mutex::new(rows),
            next_id: Mutex::new(next_id),
            failing: AtomicBool::new(false),
        }
    }

    /// Every subsequent call fails as if the pool could not hand out a connection.
    pub(crate) fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn get(&self, id: i64) -> Option<Property> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Store(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn select(&self, pred: impl Fn(&Property) -> bool) -> Vec<Property> {
        self.rows.lock().unwrap().values().filter(|p| pred(p)).cloned().collect()
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Property>, AppError> {
        self.check()?;
        Ok(self.select(|_| true))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>, AppError> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn insert(&self, payload: &PropertyPayload) -> Result<i64, AppError> {
        self.check()?;
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = *next;
        self.rows.lock().unwrap().insert(id, payload.clone().into_property(id));
        Ok(id)
    }

    async fn update(&self, id: i64, payload: &PropertyPayload) -> Result<Option<Property>, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&id) {
            *row = payload.clone().into_property(id);
        }
        Ok(rows.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn find_by_tipo(&self, tipo: &str) -> Result<Vec<Property>, AppError> {
        self.check()?;
        Ok(self.select(|p| p.tipo == tipo))
    }

    async fn find_by_cidade(&self, cidade: &str) -> Result<Vec<Property>, AppError> {
        self.check()?;
        Ok(self.select(|p| p.cidade == cidade))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Fixture rows shared by router and service tests.
pub(crate) fn sample_rows() -> Vec<Property> {
    #[allow(clippy::too_many_arguments)]
    fn row(
        id: i64,
        logradouro: &str,
        tipo_logradouro: &str,
        bairro: &str,
        cidade: &str,
        cep: &str,
        tipo: &str,
        valor: f64,
        data: &str,
    ) -> Property {
        Property {
            id,
            logradouro: logradouro.into(),
            tipo_logradouro: tipo_logradouro.into(),
            bairro: bairro.into(),
            cidade: cidade.into(),
            cep: cep.into(),
            tipo: tipo.into(),
            valor,
            data_aquisicao: data.parse().unwrap(),
        }
    }
    vec![
        row(1, "Nicole Common", "Travessa", "Lake Danielle", "Judymouth", "85184", "casa em condominio", 488423.52, "2017-07-29"),
        row(2, "Price Prairie", "Travessa", "Colonton", "North Garyville", "93354", "casa em condominio", 260069.89, "2021-11-30"),
        row(6, "Preston Terrace", "Rua", "North Lindseyview", "Lake Michael", "99549", "terreno", 946804.25, "2023-12-13"),
        row(8, "Richard Light", "Travessa", "New Rebeccaview", "Benjaminberg", "04598", "terreno", 684707.4, "2022-10-27"),
        row(50, "Lori Summit", "Travessa", "Kristaside", "Lake Michael", "24473", "casa", 498926.13, "2019-02-27"),
    ]
}
