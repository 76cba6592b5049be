//! Credential API Handlers

use axum::extract::{Json, Query, State};
use axum::response::{IntoResponse, Response};
use chrono::Local;
use http::header;
use padron_card::CredentialCard;
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, affiliate};
use crate::utils::validation::validate_identifier;
use shared::models::AffiliateRecord;
use shared::{AppError, AppResult};

/// Association name printed as the card title
const CARD_TITLE: &str = "Mutual Camioneros Mendoza";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialParams {
    pub national_id: String,
}

/// GET /api/credential?nationalId= - download the membership credential PDF
pub async fn download(
    State(state): State<ServerState>,
    Query(params): Query<CredentialParams>,
) -> AppResult<Response> {
    issue(&state, &params.national_id).await
}

/// POST /api/credential - same download, national ID in the JSON body
pub async fn download_post(
    State(state): State<ServerState>,
    Json(params): Json<CredentialParams>,
) -> AppResult<Response> {
    issue(&state, &params.national_id).await
}

/// Look the record up and render it; 404 short-circuits before rendering.
async fn issue(state: &ServerState, national_id: &str) -> AppResult<Response> {
    let national_id = validate_identifier(national_id, "nationalId")?;

    let mut conn = state.pool.acquire().await.map_err(RepoError::from)?;
    let record = affiliate::find_by_national_id(&mut conn, &national_id)
        .await?
        .ok_or_else(|| AppError::affiliate_not_found(&national_id))?;

    let pdf = render_card(&record)?;

    tracing::info!(national_id = %record.national_id, "Credential issued");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"credencial_{}.pdf\"",
                record.national_id
            ),
        ),
    ];
    Ok((headers, pdf).into_response())
}

fn render_card(record: &AffiliateRecord) -> AppResult<Vec<u8>> {
    let issued = Local::now().format("%d/%m/%Y").to_string();

    let mut card = CredentialCard::new(CARD_TITLE);
    card.field("Nombre", &record.full_name)
        .field("DNI", &record.national_id)
        .field("N° Afiliado", &record.member_number)
        .field("Emitida", &issued);

    card.render()
        .map_err(|e| AppError::internal(format!("Credential rendering failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_card_produces_pdf() {
        let record = AffiliateRecord {
            id: 1,
            national_id: "30111222".into(),
            member_number: "1001".into(),
            full_name: "José Muñoz".into(),
            category: None,
            employer: None,
            admission_date: None,
            created_at: 0,
            updated_at: 0,
        };

        let pdf = render_card(&record).unwrap();
        assert!(pdf.starts_with(b"%PDF-1.5"));
    }
}
