// src/services/car_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CarRepository,
    models::{
        car::{Car, CarChanges, NewCar},
        car_filter::CarFilter,
    },
};

#[derive(Clone)]
pub struct CarService {
    repo: CarRepository,
}

impl CarService {
    pub fn new(repo: CarRepository) -> Self {
        Self { repo }
    }

    pub async fn list_cars<'e, E>(&self, executor: E, filter: &CarFilter) -> Result<Vec<Car>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor, filter).await
    }

    pub async fn get_car<'e, E>(&self, executor: E, id: Uuid) -> Result<Car, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_by_id(executor, id).await
    }

    pub async fn create_car<'e, E>(&self, executor: E, car: &NewCar) -> Result<Car, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let created = self.repo.create(executor, car).await?;
        tracing::info!("🚗 Carro cadastrado: {} ({} {})", created.id, created.brand, created.model);
        Ok(created)
    }

    pub async fn update_car<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &CarChanges,
    ) -> Result<Car, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update(executor, id, changes).await
    }

    pub async fn delete_car<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await?;
        tracing::info!("🗑️ Carro removido: {}", id);
        Ok(())
    }
}
