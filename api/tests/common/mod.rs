#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use api::route::routes;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken},
        id::UserId,
    },
    repository::{auth::AuthRepository, health::HealthCheckRepository},
    testing::InMemoryStore,
};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

#[derive(Default)]
pub struct InMemoryAuth {
    tokens: Mutex<HashMap<String, UserId>>,
    users: Mutex<HashMap<String, (String, UserId)>>,
}

impl InMemoryAuth {
    pub fn add_user(&self, email: &str, password: &str, user_id: UserId) {
        self.users
            .lock()
            .unwrap()
            .insert(email.into(), (password.into(), user_id));
    }

    pub fn issue(&self, user_id: UserId) -> String {
        let token = format!("token-{user_id}");
        self.tokens.lock().unwrap().insert(token.clone(), user_id);
        token
    }

    pub fn is_active(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains_key(token)
    }
}

#[async_trait]
impl AuthRepository for InMemoryAuth {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        Ok(self.tokens.lock().unwrap().get(&access_token.0).copied())
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        match self.users.lock().unwrap().get(email) {
            Some((stored, user_id)) if stored == password => Ok(*user_id),
            _ => Err(AppError::UnauthenticatedError),
        }
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        Ok(AccessToken(self.issue(event.user_id)))
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        self.tokens.lock().unwrap().remove(&access_token.0);
        Ok(())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheckRepository for AlwaysHealthy {
    async fn check_db(&self) -> bool {
        true
    }
}

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub auth: Arc<InMemoryAuth>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let auth = Arc::new(InMemoryAuth::default());
        let registry = AppRegistry::from_repositories(
            Arc::new(AlwaysHealthy),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            auth.clone(),
        );
        let router = routes().with_state(registry);
        Self {
            store,
            auth,
            router,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, json))
    }
}
