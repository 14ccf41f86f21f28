use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bigdecimal::BigDecimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::{
    http_server::SharedState,
    service::laybuy::{
        config::Config,
        constants::SUPPORTED_CURRENCY_CODES,
        StoreId,
    },
};

use super::response;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderParams {
    pub store_id: Option<StoreId>,
    pub order: Map<String, Value>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TokenParams {
    pub store_id: Option<StoreId>,
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RefundOrderParams {
    pub store_id: Option<StoreId>,
    pub refund: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct StoreParams {
    pub store_id: Option<StoreId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmOrderResult {
    pub order_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelOrderResult {
    pub cancelled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefundOrderResult {
    pub refund_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResult {
    pub active: bool,
    pub title: Option<String>,
    pub logo_url: String,
    pub show_in_product_page: bool,
    pub show_in_category_page: bool,
    pub show_in_cart_page: bool,
    pub min_order_total: Option<BigDecimal>,
    pub max_order_total: Option<BigDecimal>,
    pub supported_currencies: Vec<String>,
}

/// Reads and validates a json body, answering 400 with a short message when
/// it cannot be used.
async fn parse_body<T: DeserializeOwned + Validate>(req: Request) -> Result<T, Response> {
    let body = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .map_err(|_| {
            response::error(StatusCode::BAD_REQUEST, "invalid request body").into_response()
        })?;
    let params: T = serde_json::from_slice(&body).map_err(|e| {
        let mut s = e.to_string();
        if s.contains(" at") {
            let parts: Vec<&str> = s.split(" at").collect();
            s = parts[0].to_string();
        }
        response::error(StatusCode::BAD_REQUEST, &s).into_response()
    })?;
    if let Err(e) = params.validate() {
        return Err(response::error(StatusCode::BAD_REQUEST, &e.to_string()).into_response());
    }
    Ok(params)
}

pub async fn create_order(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: CreateOrderParams = match parse_body(req).await {
        Ok(p) => p,
        Err(res) => return res,
    };
    let res = state
        .laybuy_client
        .get_redirect_url_and_token(&params.order, params.store_id)
        .await;
    match res {
        Ok(Some(res)) => response::success(res, "").into_response(),
        Ok(None) => response::error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "order was not accepted by laybuy",
        )
        .into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn confirm_order(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: TokenParams = match parse_body(req).await {
        Ok(p) => p,
        Err(res) => return res,
    };
    let res = state
        .laybuy_client
        .get_confirmation_order_id(&params.token, params.store_id)
        .await;
    match res {
        Ok(Some(order_id)) => {
            response::success(ConfirmOrderResult { order_id }, "").into_response()
        }
        Ok(None) => response::error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "order was not confirmed by laybuy",
        )
        .into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn cancel_order(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: TokenParams = match parse_body(req).await {
        Ok(p) => p,
        Err(res) => return res,
    };
    let res = state
        .laybuy_client
        .cancel_order(&params.token, params.store_id)
        .await;
    match res {
        Ok(cancelled) => response::success(CancelOrderResult { cancelled }, "").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn refund_order(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: RefundOrderParams = match parse_body(req).await {
        Ok(p) => p,
        Err(res) => return res,
    };
    let res = state
        .laybuy_client
        .refund_order(&params.refund, params.store_id)
        .await;
    match res {
        Ok(refund_id) => response::success(RefundOrderResult { refund_id }, "").into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn check_merchant_order(
    State(state): State<SharedState>,
    Path(reference): Path<String>,
    req: Request,
) -> impl IntoResponse {
    let params: Query<StoreParams> = match Query::try_from_uri(req.uri()) {
        Ok(p) => p,
        Err(_) => {
            return response::error(StatusCode::BAD_REQUEST, "store_id must be u32")
                .into_response();
        }
    };
    let res = state
        .laybuy_client
        .check_merchant_order(&reference, params.store_id)
        .await;
    match res {
        Ok(Some(body)) => response::success(body, "").into_response(),
        Ok(None) => response::error(
            StatusCode::NOT_FOUND,
            &format!("merchant order {} not found", reference),
        )
        .into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn settings(State(state): State<SharedState>, req: Request) -> impl IntoResponse {
    let params: Query<StoreParams> = match Query::try_from_uri(req.uri()) {
        Ok(p) => p,
        Err(_) => {
            return response::error(StatusCode::BAD_REQUEST, "store_id must be u32")
                .into_response();
        }
    };
    let store_id = params.store_id;
    let config = state.laybuy_client.config();
    let res = SettingsResult {
        active: config.is_active(store_id),
        title: config.title(store_id),
        logo_url: Config::asset_url(config.logo(store_id)),
        show_in_product_page: config.show_in_product_page(store_id),
        show_in_category_page: config.show_in_category_page(store_id),
        show_in_cart_page: config.show_in_cart_page(store_id),
        min_order_total: config.min_order_total(store_id),
        max_order_total: config.max_order_total(store_id),
        supported_currencies: SUPPORTED_CURRENCY_CODES
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };
    response::success(res, "").into_response()
}
