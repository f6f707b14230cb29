#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use portfolio_site::{
    entities::{
        certificate::{Certificate, CertificateForm, CertificatePatch},
        chat::ModelTurn,
        message::{Message, MessageForm},
        option_fields::{OptionField, PatchString},
        project::{Project, ProjectForm, ProjectPatch},
        session::{AccessToken, Session, SessionUser},
        site_settings::{SettingsPatch, SiteSettings},
    },
    errors::{AuthError, ChatError, StoreError, UploadError},
    repositories::{
        auth_provider::AuthProvider,
        language_model::LanguageModel,
        storage_backend::{Mutation, StorageBackend},
    },
    AppState,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const ADMIN_TOKEN: &str = "admin-access-token";

// === Mockall doubles ===

mock! {
    pub Backend {}

    #[async_trait]
    impl StorageBackend for Backend {
        fn is_live(&self) -> bool;
        async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
        async fn add_project(&self, token: &AccessToken, form: &ProjectForm) -> Mutation<Project>;
        async fn update_project(&self, token: &AccessToken, id: i64, patch: &ProjectPatch) -> Mutation<Project>;
        async fn delete_project(&self, token: &AccessToken, id: i64) -> Mutation<()>;
        async fn list_certificates(&self) -> Result<Vec<Certificate>, StoreError>;
        async fn add_certificate(&self, token: &AccessToken, form: &CertificateForm) -> Mutation<Certificate>;
        async fn update_certificate(&self, token: &AccessToken, id: i64, patch: &CertificatePatch) -> Mutation<Certificate>;
        async fn delete_certificate(&self, token: &AccessToken, id: i64) -> Mutation<()>;
        async fn site_settings(&self) -> Result<Option<SiteSettings>, StoreError>;
        async fn update_site_settings(&self, token: &AccessToken, patch: &SettingsPatch) -> Mutation<SiteSettings>;
        async fn list_messages(&self, token: &AccessToken) -> Result<Vec<Message>, StoreError>;
        async fn send_message(&self, form: &MessageForm) -> Mutation<()>;
        async fn delete_message(&self, token: &AccessToken, id: i64) -> Mutation<()>;
        async fn upload_object(&self, token: &AccessToken, name: &str, bytes: Vec<u8>, content_type: &str) -> Result<Option<String>, UploadError>;
    }
}

mock! {
    pub Auth {}

    #[async_trait]
    impl AuthProvider for Auth {
        async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
        async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthError>;
        async fn current_session(&self, token: &AccessToken) -> Result<Option<Session>, AuthError>;
    }
}

mock! {
    pub Model {}

    #[async_trait]
    impl LanguageModel for Model {
        async fn generate(&self, turns: &[ModelTurn]) -> Result<String, ChatError>;
    }
}

pub fn admin_session() -> Session {
    Session {
        access_token: AccessToken::new(ADMIN_TOKEN),
        refresh_token: Some("refresh".to_string()),
        token_type: "bearer".to_string(),
        expires_at: None,
        user: SessionUser {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            email: Some(ADMIN_EMAIL.to_string()),
        },
    }
}

// === In-memory store ===

#[derive(Default)]
struct Tables {
    next_id: i64,
    projects: Vec<Project>,
    certificates: Vec<Certificate>,
    settings: Option<SiteSettings>,
    messages: Vec<Message>,
    objects: Vec<String>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Live-looking backend keeping rows in memory, newest first.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn with_settings(settings: SiteSettings) -> Self {
        let store = InMemoryStore::default();
        store.tables.lock().unwrap().settings = Some(settings);
        store
    }

    pub fn stored_objects(&self) -> Vec<String> {
        self.tables.lock().unwrap().objects.clone()
    }

    pub fn message_count(&self) -> usize {
        self.tables.lock().unwrap().messages.len()
    }
}

pub fn settings(maintenance_mode: bool) -> SiteSettings {
    SiteSettings {
        id: 1,
        maintenance_mode,
        site_title: Some("Cyber Security Enthusiast".to_string()),
        about_description: Some("I build secure web apps.".to_string()),
        skills: vec!["Rust".to_string(), "Networking".to_string()],
        contact_email: Some("owner@example.com".to_string()),
        contact_phone: None,
        contact_address: None,
        hero_image_url: None,
        github_url: None,
        linkedin_url: None,
    }
}

fn apply(field: &PatchString, target: &mut Option<String>) {
    match field {
        OptionField::Unchanged => {}
        OptionField::SetToNull => *target = None,
        OptionField::SetToValue(value) => *target = Some(value.clone()),
    }
}

fn not_found(table: &str, id: i64) -> StoreError {
    StoreError::NotFound(format!("{} row {}", table, id))
}

#[async_trait]
impl StorageBackend for InMemoryStore {
    fn is_live(&self) -> bool {
        true
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.tables.lock().unwrap().projects.clone())
    }

    async fn add_project(&self, _: &AccessToken, form: &ProjectForm) -> Mutation<Project> {
        let mut tables = self.tables.lock().unwrap();
        let project = Project {
            id: tables.next_id(),
            title: form.title.clone(),
            description: form.description.clone(),
            tech_stack: form.tech_stack.clone(),
            demo_url: form.demo_url.clone(),
            repo_url: form.repo_url.clone(),
            image_url: form.image_url.clone(),
            category: form.category.clone(),
            created_at: Some(Utc::now()),
        };
        tables.projects.insert(0, project.clone());
        Ok(Some(project))
    }

    async fn update_project(&self, _: &AccessToken, id: i64, patch: &ProjectPatch) -> Mutation<Project> {
        let mut tables = self.tables.lock().unwrap();
        let project = tables
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("projects", id))?;
        if let Some(title) = &patch.title {
            project.title = title.clone();
        }
        if let Some(description) = &patch.description {
            project.description = description.clone();
        }
        if let Some(stack) = &patch.tech_stack {
            project.tech_stack = stack.clone();
        }
        if let Some(category) = &patch.category {
            project.category = category.clone();
        }
        if let Some(url) = &patch.demo_url {
            project.demo_url = url.clone();
        }
        if let Some(url) = &patch.repo_url {
            project.repo_url = url.clone();
        }
        if let Some(url) = &patch.image_url {
            project.image_url = url.clone();
        }
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, _: &AccessToken, id: i64) -> Mutation<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        if tables.projects.len() == before {
            return Err(not_found("projects", id));
        }
        Ok(Some(()))
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, StoreError> {
        Ok(self.tables.lock().unwrap().certificates.clone())
    }

    async fn add_certificate(&self, _: &AccessToken, form: &CertificateForm) -> Mutation<Certificate> {
        let mut tables = self.tables.lock().unwrap();
        let certificate = Certificate {
            id: tables.next_id(),
            name: form.name.clone(),
            issuer: form.issuer.clone(),
            date: form.date.clone(),
            credential_url: form.credential_url.clone(),
            image_url: form.image_url.clone(),
            created_at: Some(Utc::now()),
        };
        tables.certificates.insert(0, certificate.clone());
        Ok(Some(certificate))
    }

    async fn update_certificate(&self, _: &AccessToken, id: i64, patch: &CertificatePatch) -> Mutation<Certificate> {
        let mut tables = self.tables.lock().unwrap();
        let certificate = tables
            .certificates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("certificates", id))?;
        if let Some(name) = &patch.name {
            certificate.name = name.clone();
        }
        if let Some(issuer) = &patch.issuer {
            certificate.issuer = issuer.clone();
        }
        if let Some(date) = &patch.date {
            certificate.date = date.clone();
        }
        Ok(Some(certificate.clone()))
    }

    async fn delete_certificate(&self, _: &AccessToken, id: i64) -> Mutation<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.certificates.len();
        tables.certificates.retain(|c| c.id != id);
        if tables.certificates.len() == before {
            return Err(not_found("certificates", id));
        }
        Ok(Some(()))
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, StoreError> {
        Ok(self.tables.lock().unwrap().settings.clone())
    }

    async fn update_site_settings(&self, _: &AccessToken, patch: &SettingsPatch) -> Mutation<SiteSettings> {
        let mut tables = self.tables.lock().unwrap();
        let settings = tables.settings.get_or_insert_with(|| settings(false));
        if let Some(flag) = patch.maintenance_mode {
            settings.maintenance_mode = flag;
        }
        if let Some(title) = &patch.site_title {
            settings.site_title = Some(title.clone());
        }
        if let Some(skills) = &patch.skills {
            settings.skills = skills.clone();
        }
        apply(&patch.hero_image_url, &mut settings.hero_image_url);
        apply(&patch.github_url, &mut settings.github_url);
        Ok(Some(settings.clone()))
    }

    async fn list_messages(&self, _: &AccessToken) -> Result<Vec<Message>, StoreError> {
        Ok(self.tables.lock().unwrap().messages.clone())
    }

    async fn send_message(&self, form: &MessageForm) -> Mutation<()> {
        let mut tables = self.tables.lock().unwrap();
        let message = Message {
            id: tables.next_id(),
            created_at: Utc::now(),
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            is_read: false,
        };
        tables.messages.insert(0, message);
        Ok(Some(()))
    }

    async fn delete_message(&self, _: &AccessToken, id: i64) -> Mutation<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.messages.len();
        tables.messages.retain(|m| m.id != id);
        if tables.messages.len() == before {
            return Err(not_found("messages", id));
        }
        Ok(Some(()))
    }

    async fn upload_object(
        &self,
        _: &AccessToken,
        name: &str,
        _: Vec<u8>,
        _: &str,
    ) -> Result<Option<String>, UploadError> {
        self.tables.lock().unwrap().objects.push(name.to_string());
        Ok(Some(format!("https://store.test/storage/v1/object/public/portfolio-images/{}", name)))
    }
}

// === Auth double with one admin account ===

#[derive(Default, Clone)]
pub struct StaticAuth {
    signed_out: Arc<Mutex<bool>>,
}

#[async_trait]
impl AuthProvider for StaticAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            *self.signed_out.lock().unwrap() = false;
            Ok(admin_session())
        } else {
            Err(AuthError::WrongCredentials("Invalid login credentials".to_string()))
        }
    }

    async fn sign_out(&self, _: &AccessToken) -> Result<(), AuthError> {
        *self.signed_out.lock().unwrap() = true;
        Ok(())
    }

    async fn current_session(&self, token: &AccessToken) -> Result<Option<Session>, AuthError> {
        let signed_out = *self.signed_out.lock().unwrap();
        if token.as_str() == ADMIN_TOKEN && !signed_out {
            Ok(Some(admin_session()))
        } else {
            Ok(None)
        }
    }
}

// === App helpers ===

pub fn state_with(backend: impl StorageBackend + 'static, auth: impl AuthProvider + 'static) -> web::Data<AppState> {
    web::Data::new(AppState::from_parts(Arc::new(backend), Arc::new(auth), None))
}

pub fn origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", ADMIN_TOKEN))
}

/// Calls the service and returns the status with the JSON body.
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}
