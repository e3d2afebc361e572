use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::calculator::{LoanTerms, OfferCalculator, OfferEstimate};
use crate::error::AppError;
use crate::workflows::banks::BankCatalog;

/// Requested principal and term; either part may be missing on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub months: Option<u32>,
}

#[derive(Clone)]
pub(crate) struct OfferState {
    calculator: OfferCalculator,
    catalog: Arc<BankCatalog>,
}

/// Router exposing the installment calculator over JSON body and query string.
pub fn offer_router(calculator: OfferCalculator, catalog: Arc<BankCatalog>) -> Router {
    Router::new()
        .route(
            "/api/calculate",
            get(calculate_query_handler).post(calculate_handler),
        )
        .with_state(OfferState {
            calculator,
            catalog,
        })
}

pub(crate) async fn calculate_handler(
    State(state): State<OfferState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<OfferEstimate>, AppError> {
    let Json(request) = payload?;
    respond(&state, request)
}

pub(crate) async fn calculate_query_handler(
    State(state): State<OfferState>,
    query: Result<Query<CalculateRequest>, QueryRejection>,
) -> Result<Json<OfferEstimate>, AppError> {
    let Query(request) = query?;
    respond(&state, request)
}

fn respond(
    state: &OfferState,
    request: CalculateRequest,
) -> Result<Json<OfferEstimate>, AppError> {
    let terms = LoanTerms::from_parts(request.amount, request.months)?;
    let banks = state.catalog.list_active();
    let estimate = state.calculator.calculate(terms, &banks);
    debug!(
        amount = terms.amount(),
        months = terms.months(),
        model = ?state.calculator.model(),
        "offer calculated"
    );
    Ok(Json(estimate))
}
