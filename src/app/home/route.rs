use askama::Template;
use axum::{extract::State, response::Html};

use crate::app::{error::AppResult, AppState};

#[derive(Template)]
#[template(path = "tela_pedidos.html")]
struct OrdersScreenTemplate;

/// `GET /` renders the orders screen with an empty context. The body is a
/// pure function of the template, so repeated requests are byte-identical.
#[tracing::instrument(name = "Orders screen", skip(state))]
pub async fn orders_screen(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = OrdersScreenTemplate
        .render()
        .map_err(|e| state.error(e))?;

    Ok(Html(page))
}
