// src/services/content_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ContentRepository,
    models::content::{
        HeroSlide, HeroSlideChanges, NewHeroSlide, NewTestimonial, Testimonial, TestimonialChanges,
    },
};

// Conteúdo editorial da home: carrossel e depoimentos.
#[derive(Clone)]
pub struct ContentService {
    repo: ContentRepository,
}

impl ContentService {
    pub fn new(repo: ContentRepository) -> Self {
        Self { repo }
    }

    // --- Hero ---

    pub async fn list_hero_slides<'e, E>(
        &self,
        executor: E,
        active_only: bool,
    ) -> Result<Vec<HeroSlide>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_hero_slides(executor, active_only).await
    }

    pub async fn get_hero_slide<'e, E>(&self, executor: E, id: Uuid) -> Result<HeroSlide, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_hero_slide(executor, id).await
    }

    pub async fn create_hero_slide<'e, E>(
        &self,
        executor: E,
        slide: &NewHeroSlide,
    ) -> Result<HeroSlide, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.create_hero_slide(executor, slide).await
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
        self.repo.update_hero_slide(executor, id, changes).await
    }

    pub async fn delete_hero_slide<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_hero_slide(executor, id).await
    }

    // --- Depoimentos ---

    pub async fn list_testimonials<'e, E>(
        &self,
        executor: E,
        limit: Option<i64>,
    ) -> Result<Vec<Testimonial>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_testimonials(executor, limit).await
    }

    pub async fn get_testimonial<'e, E>(&self, executor: E, id: Uuid) -> Result<Testimonial, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_testimonial(executor, id).await
    }

    pub async fn create_testimonial<'e, E>(
        &self,
        executor: E,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.create_testimonial(executor, testimonial).await
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
        self.repo.update_testimonial(executor, id, changes).await
    }

    pub async fn delete_testimonial<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_testimonial(executor, id).await
    }
}
