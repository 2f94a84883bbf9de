//! HTTP routing and OpenAPI documentation.
//!
//! Every handler is registered through `utoipa_axum::routes!` so the OpenAPI document is
//! generated from the same `#[utoipa::path]` attributes that describe the routes. Handlers
//! sharing a path are registered together.

use axum::{routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::AppEnv,
    controller::{
        auth::{self, AUTH_TAG},
        dev,
        dish::{self, DISH_TAG},
        event::{self, EVENT_TAG},
        ingredient::{self, INGREDIENT_TAG},
        participant::{self, PARTICIPANT_TAG},
        user::{self, USER_TAG},
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipebook API",
        description = "Users, dishes, ingredients and cooking events"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = AUTH_TAG, description = "Registration, login and token refresh"),
        (name = USER_TAG, description = "User management"),
        (name = DISH_TAG, description = "Dishes and their ingredient lists"),
        (name = INGREDIENT_TAG, description = "Ingredients"),
        (name = EVENT_TAG, description = "Cooking events and invitations"),
        (name = PARTICIPANT_TAG, description = "Event participants"),
    )
)]
struct ApiDoc;

/// Registers the `bearerAuth` scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("opaque")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// Swagger UI at `/v1/docs` and the database reset route are only mounted in development.
pub fn router(app_env: AppEnv) -> Router<AppState> {
    let (mut router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::refresh_tokens))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(dish::create_dish, dish::get_dishes))
        .routes(routes!(dish::get_dish, dish::update_dish, dish::delete_dish))
        .routes(routes!(
            ingredient::create_ingredient,
            ingredient::get_ingredients
        ))
        .routes(routes!(
            ingredient::get_ingredient,
            ingredient::update_ingredient,
            ingredient::delete_ingredient
        ))
        .routes(routes!(event::create_event, event::get_events))
        .routes(routes!(event::join_event))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(
            participant::create_participant,
            participant::get_participants
        ))
        .routes(routes!(
            participant::get_participant,
            participant::update_participant,
            participant::delete_participant
        ))
        .split_for_parts();

    if app_env.is_development() {
        router = router
            .merge(SwaggerUi::new("/v1/docs").url("/v1/docs/openapi.json", api))
            .route("/v1/test/reset-db", post(dev::reset_db));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{json, Value};
    use test_utils::{builder::TestBuilder, factory};
    use tower::ServiceExt;

    use super::*;
    use crate::server::config::TokenSettings;

    fn app(db: &sea_orm::DatabaseConnection, app_env: AppEnv) -> Router {
        router(app_env).with_state(AppState::new(db.clone(), TokenSettings::default()))
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found_body() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db, AppEnv::Production)
            .oneshot(request(Method::GET, "/v1/nothing-here", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({ "code": 404, "message": "Not found" })
        );
    }

    #[tokio::test]
    async fn create_dish_requires_token() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db, AppEnv::Production)
            .oneshot(request(
                Method::POST,
                "/v1/dish",
                None,
                Some(json!({ "title": "Pho" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["message"], "Please authenticate");
    }

    #[tokio::test]
    async fn participant_cannot_create_dish() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let token = factory::create_access_token(db, user.id).await.unwrap();

        let response = app(db, AppEnv::Production)
            .oneshot(request(
                Method::POST,
                "/v1/dish",
                Some(&token),
                Some(json!({ "title": "Pho" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await["message"], "Forbidden");
    }

    #[tokio::test]
    async fn cook_creates_dish_and_anyone_reads_it() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let cook = factory::user::create_user_with_role(db, "cook").await.unwrap();
        let token = factory::create_access_token(db, cook.id).await.unwrap();

        let created = app(db, AppEnv::Production)
            .oneshot(request(
                Method::POST,
                "/v1/dish",
                Some(&token),
                Some(json!({ "title": "  Pho  ", "subtitle": "Beef" })),
            ))
            .await
            .unwrap();

        assert_eq!(created.status(), StatusCode::CREATED);
        let created = json_body(created).await;
        assert_eq!(created["title"], "Pho");
        assert_eq!(created["ingredients"], json!([]));
        assert_eq!(created["createdByUserId"], cook.id);

        let uri = format!("/v1/dish/{}", created["id"]);
        let fetched = app(db, AppEnv::Production)
            .oneshot(request(Method::GET, &uri, None, None))
            .await
            .unwrap();

        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(json_body(fetched).await["title"], "Pho");
    }

    #[tokio::test]
    async fn blank_title_is_bad_request() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let cook = factory::user::create_user_with_role(db, "cook").await.unwrap();
        let token = factory::create_access_token(db, cook.id).await.unwrap();

        let response = app(db, AppEnv::Production)
            .oneshot(request(
                Method::POST,
                "/v1/dish",
                Some(&token),
                Some(json!({ "title": "   " })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], 400);
    }

    #[tokio::test]
    async fn register_returns_user_and_tokens() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db, AppEnv::Production)
            .oneshot(request(
                Method::POST,
                "/v1/auth/register",
                None,
                Some(json!({
                    "name": "Lena",
                    "email": "Lena@Example.com",
                    "password": "password1"
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["user"]["email"], "lena@example.com");
        assert_eq!(body["user"]["role"], "participant");
        assert!(body["user"].get("password").is_none());
        assert!(body["tokens"]["access"]["token"].is_string());
        assert!(body["tokens"]["refresh"]["expires"].is_string());
    }

    #[tokio::test]
    async fn join_event_is_public() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::event::EventFactory::new(db)
            .invitation_code("OPEN01")
            .build()
            .await
            .unwrap();

        let response = app(db, AppEnv::Production)
            .oneshot(request(
                Method::POST,
                "/v1/event/join",
                None,
                Some(json!({ "invitationCode": "OPEN01", "username": "guest" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await["username"], "guest");
    }

    #[tokio::test]
    async fn user_list_rejects_out_of_range_paging() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::user::create_user_with_role(db, "admin").await.unwrap();
        let token = factory::create_access_token(db, admin.id).await.unwrap();

        for uri in [
            "/v1/users?page=0",
            "/v1/users?limit=0",
            "/v1/users?limit=101",
            "/v1/users?page=18446744073709551615",
        ] {
            let response = app(db, AppEnv::Production)
                .oneshot(request(Method::GET, uri, Some(&token), None))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(json_body(response).await["code"], 400);
        }

        let response = app(db, AppEnv::Production)
            .oneshot(request(Method::GET, "/v1/users?page=2&limit=100", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn reset_route_only_in_development() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_user(db).await.unwrap();

        let production = app(db, AppEnv::Production)
            .oneshot(request(Method::POST, "/v1/test/reset-db", None, None))
            .await
            .unwrap();
        assert_eq!(production.status(), StatusCode::NOT_FOUND);

        let development = app(db, AppEnv::Development)
            .oneshot(request(Method::POST, "/v1/test/reset-db", None, None))
            .await
            .unwrap();
        assert_eq!(development.status(), StatusCode::NO_CONTENT);
        assert_eq!(entity::prelude::User::find().count(db).await.unwrap(), 0);
    }
}
