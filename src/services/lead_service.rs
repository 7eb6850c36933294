// src/services/lead_service.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::{
        admin::CrmOverview,
        leads::{
            Appointment, AppointmentChanges, CorporateRequest, CorporateRequestChanges, Inquiry,
            InquiryChanges, NewAppointment, NewCorporateRequest, NewInquiry, NewPreorder,
            Preorder, PreorderChanges,
        },
    },
};

// Leads dos formulários públicos. Só o tipo e o id vão para o log (nunca o e-mail).
#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
}

impl LeadService {
    pub fn new(repo: LeadRepository) -> Self {
        Self { repo }
    }

    /// As quatro listas do CRM, buscadas em paralelo (uma conexão do pool para cada).
    pub async fn crm_overview(&self, pool: &PgPool) -> Result<CrmOverview, AppError> {
        let (appointments, preorders, inquiries, corporate_requests) = tokio::try_join!(
            self.repo.list_appointments(pool),
            self.repo.list_preorders(pool),
            self.repo.list_inquiries(pool),
            self.repo.list_corporate_requests(pool),
        )?;

        Ok(CrmOverview {
            appointments,
            preorders,
            inquiries,
            corporate_requests,
        })
    }

    // =========================================================================
    //  AGENDAMENTOS
    // =========================================================================

    pub async fn submit_appointment<'e, E>(
        &self,
        executor: E,
        payload: &NewAppointment,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = self.repo.create_appointment(executor, payload).await?;
        tracing::info!("📅 Novo lead (appointment): {}", appointment.id);
        Ok(appointment)
    }

    pub async fn list_appointments<'e, E>(&self, executor: E) -> Result<Vec<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_appointments(executor).await
    }

    pub async fn get_appointment<'e, E>(&self, executor: E, id: Uuid) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_appointment(executor, id).await
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
        self.repo.update_appointment(executor, id, changes).await
    }

    pub async fn delete_appointment<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_appointment(executor, id).await
    }

    // =========================================================================
    //  PRÉ-VENDAS
    // =========================================================================

    pub async fn submit_preorder<'e, E>(
        &self,
        executor: E,
        payload: &NewPreorder,
    ) -> Result<Preorder, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let preorder = self.repo.create_preorder(executor, payload).await?;
        tracing::info!("📝 Novo lead (preorder): {}", preorder.id);
        Ok(preorder)
    }

    pub async fn list_preorders<'e, E>(&self, executor: E) -> Result<Vec<Preorder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_preorders(executor).await
    }

    pub async fn get_preorder<'e, E>(&self, executor: E, id: Uuid) -> Result<Preorder, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_preorder(executor, id).await
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
        self.repo.update_preorder(executor, id, changes).await
    }

    pub async fn delete_preorder<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_preorder(executor, id).await
    }

    // =========================================================================
    //  CONTATO
    // =========================================================================

    pub async fn submit_inquiry<'e, E>(
        &self,
        executor: E,
        payload: &NewInquiry,
    ) -> Result<Inquiry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let inquiry = self.repo.create_inquiry(executor, payload).await?;
        tracing::info!("✉️ Novo lead (inquiry): {}", inquiry.id);
        Ok(inquiry)
    }

    pub async fn list_inquiries<'e, E>(&self, executor: E) -> Result<Vec<Inquiry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_inquiries(executor).await
    }

    pub async fn get_inquiry<'e, E>(&self, executor: E, id: Uuid) -> Result<Inquiry, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_inquiry(executor, id).await
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
        self.repo.update_inquiry(executor, id, changes).await
    }

    pub async fn delete_inquiry<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_inquiry(executor, id).await
    }

    // =========================================================================
    //  FROTAS CORPORATIVAS
    // =========================================================================

    pub async fn submit_corporate_request<'e, E>(
        &self,
        executor: E,
        payload: &NewCorporateRequest,
    ) -> Result<CorporateRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = self.repo.create_corporate_request(executor, payload).await?;
        tracing::info!("🏢 Novo lead (corporate request): {}", request.id);
        Ok(request)
    }

    pub async fn list_corporate_requests<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<CorporateRequest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_corporate_requests(executor).await
    }

    pub async fn get_corporate_request<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<CorporateRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_corporate_request(executor, id).await
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
        self.repo.update_corporate_request(executor, id, changes).await
    }

    pub async fn delete_corporate_request<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_corporate_request(executor, id).await
    }
}
