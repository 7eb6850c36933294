// src/db/content_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{ensure_affected, map_write_error},
        error::{AppError, Resource},
    },
    models::content::{
        HeroSlide, HeroSlideChanges, NewHeroSlide, NewTestimonial, Testimonial, TestimonialChanges,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ContentRepository;

impl ContentRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  HERO (carrossel da home)
    // =========================================================================

    pub async fn list_hero_slides<'e, E>(
        &self,
        executor: E,
        active_only: bool,
    ) -> Result<Vec<HeroSlide>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let slides = sqlx::query_as::<_, HeroSlide>(
            r#"
            SELECT * FROM hero_media
            WHERE ($1::boolean IS FALSE OR is_active)
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .bind(active_only)
        .fetch_all(executor)
        .await?;

        Ok(slides)
    }

    pub async fn find_hero_slide<'e, E>(&self, executor: E, id: Uuid) -> Result<HeroSlide, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, HeroSlide>("SELECT * FROM hero_media WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::HeroSlide))
    }

    pub async fn create_hero_slide<'e, E>(
        &self,
        executor: E,
        slide: &NewHeroSlide,
    ) -> Result<HeroSlide, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, HeroSlide>(
            r#"
            INSERT INTO hero_media (
                title, subtitle, image_url, cta_primary_text, cta_secondary_text,
                display_order, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&slide.title)
        .bind(&slide.subtitle)
        .bind(&slide.image_url)
        .bind(&slide.cta_primary_text)
        .bind(&slide.cta_secondary_text)
        .bind(slide.display_order)
        .bind(slide.is_active)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    pub async fn update_hero_slide<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &HeroSlideChanges,
    ) -> Result<HeroSlide, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, HeroSlide>(
            r#"
            UPDATE hero_media SET
                title              = COALESCE($2, title),
                subtitle           = COALESCE($3, subtitle),
                image_url          = COALESCE($4, image_url),
                cta_primary_text   = COALESCE($5, cta_primary_text),
                cta_secondary_text = COALESCE($6, cta_secondary_text),
                display_order      = COALESCE($7, display_order),
                is_active          = COALESCE($8, is_active),
                updated_at         = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.subtitle)
        .bind(&changes.image_url)
        .bind(&changes.cta_primary_text)
        .bind(&changes.cta_secondary_text)
        .bind(changes.display_order)
        .bind(changes.is_active)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::HeroSlide))
    }

    pub async fn delete_hero_slide<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM hero_media WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::HeroSlide)
    }

    // =========================================================================
    //  DEPOIMENTOS
    // =========================================================================

    /// `limit = None` vira `LIMIT NULL`, ou seja, sem limite.
    pub async fn list_testimonials<'e, E>(
        &self,
        executor: E,
        limit: Option<i64>,
    ) -> Result<Vec<Testimonial>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;

        Ok(testimonials)
    }

    pub async fn find_testimonial<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Testimonial, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Testimonial))
    }

    pub async fn create_testimonial<'e, E>(
        &self,
        executor: E,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (
                client_name, role, client_type, content, rating,
                avatar_url, car_purchased_image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&testimonial.client_name)
        .bind(&testimonial.role)
        .bind(testimonial.client_type)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(&testimonial.avatar_url)
        .bind(&testimonial.car_purchased_image_url)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    pub async fn update_testimonial<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &TestimonialChanges,
    ) -> Result<Testimonial, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials SET
                client_name             = COALESCE($2, client_name),
                role                    = COALESCE($3, role),
                client_type             = COALESCE($4, client_type),
                content                 = COALESCE($5, content),
                rating                  = COALESCE($6, rating),
                avatar_url              = COALESCE($7, avatar_url),
                car_purchased_image_url = COALESCE($8, car_purchased_image_url),
                updated_at              = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.client_name)
        .bind(&changes.role)
        .bind(changes.client_type)
        .bind(&changes.content)
        .bind(changes.rating)
        .bind(&changes.avatar_url)
        .bind(&changes.car_purchased_image_url)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::Testimonial))
    }

    pub async fn delete_testimonial<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::Testimonial)
    }
}
