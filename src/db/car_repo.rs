// src/db/car_repo.rs

use sqlx::{Executor, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{ensure_affected, map_write_error},
        error::{AppError, Resource},
    },
    models::{
        car::{Car, CarChanges, NewCar},
        car_filter::CarFilter,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CarRepository;

impl CarRepository {
    pub fn new() -> Self {
        Self
    }

    /// Catálogo filtrado, do mais novo para o mais antigo.
    pub async fn list<'e, E>(&self, executor: E, filter: &CarFilter) -> Result<Vec<Car>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new("SELECT * FROM cars");
        filter.push_predicates(&mut qb);
        qb.push(" ORDER BY created_at DESC");

        let cars = qb.build_query_as::<Car>().fetch_all(executor).await?;
        Ok(cars)
    }

    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Car, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Car))
    }

    pub async fn create<'e, E>(&self, executor: E, car: &NewCar) -> Result<Car, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (
                brand, model, year, price, mileage, transmission, fuel_type,
                status, buyer_type, image_url, condition
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(car.mileage)
        .bind(&car.transmission)
        .bind(&car.fuel_type)
        .bind(car.status)
        .bind(&car.buyer_type)
        .bind(&car.image_url)
        .bind(car.condition)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    // Campos nulos no payload mantêm o valor atual (COALESCE).
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &CarChanges,
    ) -> Result<Car, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars SET
                brand        = COALESCE($2, brand),
                model        = COALESCE($3, model),
                year         = COALESCE($4, year),
                price        = COALESCE($5, price),
                mileage      = COALESCE($6, mileage),
                transmission = COALESCE($7, transmission),
                fuel_type    = COALESCE($8, fuel_type),
                status       = COALESCE($9, status),
                buyer_type   = COALESCE($10, buyer_type),
                image_url    = COALESCE($11, image_url),
                condition    = COALESCE($12, condition),
                updated_at   = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.brand)
        .bind(&changes.model)
        .bind(changes.year)
        .bind(changes.price)
        .bind(changes.mileage)
        .bind(&changes.transmission)
        .bind(&changes.fuel_type)
        .bind(changes.status)
        .bind(&changes.buyer_type)
        .bind(&changes.image_url)
        .bind(changes.condition)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::Car))
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::Car)
    }
}
