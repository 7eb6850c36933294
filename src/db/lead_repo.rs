// src/db/lead_repo.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::{ensure_affected, map_write_error},
        error::{AppError, Resource},
    },
    models::leads::{
        Appointment, AppointmentChanges, CorporateRequest, CorporateRequestChanges, Inquiry,
        InquiryChanges, NewAppointment, NewCorporateRequest, NewInquiry, NewPreorder, Preorder,
        PreorderChanges,
    },
};

#[derive(Debug, Clone, Default)]
pub struct LeadRepository;

impl LeadRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  AGENDAMENTOS
    // =========================================================================

    pub async fn list_appointments<'e, E>(&self, executor: E) -> Result<Vec<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments ORDER BY created_at DESC",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    pub async fn find_appointment<'e, E>(&self, executor: E, id: Uuid) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Appointment))
    }

    pub async fn create_appointment<'e, E>(
        &self,
        executor: E,
        payload: &NewAppointment,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                full_name, email, phone, appointment_date, message, visit_type, buyer_type
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.appointment_date)
        .bind(&payload.message)
        .bind(payload.visit_type)
        .bind(payload.buyer_type)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    pub async fn update_appointment<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &AppointmentChanges,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments SET
                full_name        = COALESCE($2, full_name),
                email            = COALESCE($3, email),
                phone            = COALESCE($4, phone),
                appointment_date = COALESCE($5, appointment_date),
                message          = COALESCE($6, message),
                visit_type       = COALESCE($7, visit_type),
                buyer_type       = COALESCE($8, buyer_type),
                updated_at       = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.full_name)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(changes.appointment_date)
        .bind(&changes.message)
        .bind(changes.visit_type)
        .bind(changes.buyer_type)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::Appointment))
    }

    pub async fn delete_appointment<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::Appointment)
    }

    // =========================================================================
    //  PRÉ-VENDAS
    // =========================================================================

    pub async fn list_preorders<'e, E>(&self, executor: E) -> Result<Vec<Preorder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, Preorder>("SELECT * FROM preorders ORDER BY created_at DESC")
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    pub async fn find_preorder<'e, E>(&self, executor: E, id: Uuid) -> Result<Preorder, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Preorder>("SELECT * FROM preorders WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Preorder))
    }

    pub async fn create_preorder<'e, E>(
        &self,
        executor: E,
        payload: &NewPreorder,
    ) -> Result<Preorder, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Preorder>(
            r#"
            INSERT INTO preorders (
                full_name, email, phone, brand, model, color,
                expected_delivery, notes, buyer_type
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.brand)
        .bind(&payload.model)
        .bind(&payload.color)
        .bind(payload.expected_delivery)
        .bind(&payload.notes)
        .bind(payload.buyer_type)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    pub async fn update_preorder<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &PreorderChanges,
    ) -> Result<Preorder, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Preorder>(
            r#"
            UPDATE preorders SET
                full_name         = COALESCE($2, full_name),
                email             = COALESCE($3, email),
                phone             = COALESCE($4, phone),
                brand             = COALESCE($5, brand),
                model             = COALESCE($6, model),
                color             = COALESCE($7, color),
                expected_delivery = COALESCE($8, expected_delivery),
                notes             = COALESCE($9, notes),
                buyer_type        = COALESCE($10, buyer_type),
                updated_at        = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.full_name)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(&changes.brand)
        .bind(&changes.model)
        .bind(&changes.color)
        .bind(changes.expected_delivery)
        .bind(&changes.notes)
        .bind(changes.buyer_type)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::Preorder))
    }

    pub async fn delete_preorder<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM preorders WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::Preorder)
    }

    // =========================================================================
    //  CONTATO
    // =========================================================================

    pub async fn list_inquiries<'e, E>(&self, executor: E) -> Result<Vec<Inquiry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries ORDER BY created_at DESC")
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    pub async fn find_inquiry<'e, E>(&self, executor: E, id: Uuid) -> Result<Inquiry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Inquiry))
    }

    pub async fn create_inquiry<'e, E>(
        &self,
        executor: E,
        payload: &NewInquiry,
    ) -> Result<Inquiry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.subject)
        .bind(&payload.message)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    pub async fn update_inquiry<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &InquiryChanges,
    ) -> Result<Inquiry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Inquiry>(
            r#"
            UPDATE inquiries SET
                name       = COALESCE($2, name),
                email      = COALESCE($3, email),
                phone      = COALESCE($4, phone),
                subject    = COALESCE($5, subject),
                message    = COALESCE($6, message),
                status     = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(&changes.subject)
        .bind(&changes.message)
        .bind(&changes.status)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::Inquiry))
    }

    pub async fn delete_inquiry<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::Inquiry)
    }

    // =========================================================================
    //  FROTAS CORPORATIVAS
    // =========================================================================

    pub async fn list_corporate_requests<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<CorporateRequest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, CorporateRequest>(
            "SELECT * FROM corporate_requests ORDER BY created_at DESC",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    pub async fn find_corporate_request<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<CorporateRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, CorporateRequest>("SELECT * FROM corporate_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::CorporateRequest))
    }

    pub async fn create_corporate_request<'e, E>(
        &self,
        executor: E,
        payload: &NewCorporateRequest,
    ) -> Result<CorporateRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, CorporateRequest>(
            r#"
            INSERT INTO corporate_requests (
                company_name, contact_person, email, phone, fleet_size_interest, message
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&payload.company_name)
        .bind(&payload.contact_person)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.fleet_size_interest)
        .bind(&payload.message)
        .fetch_one(executor)
        .await
        .map_err(map_write_error)
    }

    pub async fn update_corporate_request<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        changes: &CorporateRequestChanges,
    ) -> Result<CorporateRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, CorporateRequest>(
            r#"
            UPDATE corporate_requests SET
                company_name        = COALESCE($2, company_name),
                contact_person      = COALESCE($3, contact_person),
                email               = COALESCE($4, email),
                phone               = COALESCE($5, phone),
                fleet_size_interest = COALESCE($6, fleet_size_interest),
                message             = COALESCE($7, message),
                status              = COALESCE($8, status),
                updated_at          = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.company_name)
        .bind(&changes.contact_person)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(changes.fleet_size_interest)
        .bind(&changes.message)
        .bind(&changes.status)
        .fetch_optional(executor)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound(Resource::CorporateRequest))
    }

    pub async fn delete_corporate_request<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM corporate_requests WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        ensure_affected(result.rows_affected(), Resource::CorporateRequest)
    }
}
