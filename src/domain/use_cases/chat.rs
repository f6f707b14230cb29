use std::sync::Arc;

use crate::{
    entities::{
        certificate::Certificate,
        chat::{ChatTurn, Conversation, ModelRole, ModelTurn},
        project::Project,
        site_settings::SiteSettings,
    },
    repositories::language_model::LanguageModel,
    use_cases::content::ContentService,
};

pub const NOT_CONFIGURED_REPLY: &str =
    "I'm sorry, but I haven't been configured with an API key yet. Please contact the administrator.";

pub const CONTEXT_ACKNOWLEDGEMENT: &str =
    "Understood. I am ready to answer questions about the portfolio owner.";

/// Answers visitor questions about the portfolio through a language model.
#[derive(Clone)]
pub struct ChatAdapter {
    content: ContentService,
    model: Option<Arc<dyn LanguageModel>>,
}

impl ChatAdapter {
    pub fn new(content: ContentService, model: Option<Arc<dyn LanguageModel>>) -> Self {
        ChatAdapter { content, model }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    /// Never fails: missing credentials and call failures come back as
    /// reply text.
    pub async fn send_turn(&self, user_text: &str, prior_history: &[ChatTurn]) -> String {
        let Some(model) = &self.model else {
            return NOT_CONFIGURED_REPLY.to_string();
        };

        let (projects, certificates, settings) = futures::join!(
            self.content.projects(),
            self.content.certificates(),
            self.content.site_settings(),
        );
        let context = build_context(settings.as_ref(), &projects, &certificates);
        let turns = seed_turns(&context, prior_history, user_text);

        match model.generate(&turns).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Chat call failed");
                format!("Error: {}. Please try again later.", e)
            }
        }
    }

    /// Sends `user_text` and records both sides of the exchange.
    pub async fn send(&self, conversation: &mut Conversation, user_text: &str) -> String {
        let reply = self.send_turn(user_text, conversation.turns()).await;
        conversation.push(ChatTurn::user(user_text));
        conversation.push(ChatTurn::ai(reply.clone()));
        reply
    }
}

pub fn build_context(settings: Option<&SiteSettings>, projects: &[Project], certificates: &[Certificate]) -> String {
    let text = |value: Option<&String>, fallback: &str| {
        value
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    let title = text(settings.and_then(|s| s.site_title.as_ref()), "Web Developer");
    let about = text(settings.and_then(|s| s.about_description.as_ref()), "Passionate developer.");
    let skills = match settings.map(|s| s.skills.join(", ")) {
        Some(skills) if !skills.is_empty() => skills,
        _ => "Web Development".to_string(),
    };
    let email = text(settings.and_then(|s| s.contact_email.as_ref()), "Not provided");

    let project_lines = projects
        .iter()
        .map(|p| format!("- {} ({}): {}. Tech: {}", p.title, p.category, p.description, p.tech_stack.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");
    let certificate_lines = certificates
        .iter()
        .map(|c| format!("- {} from {} ({})", c.name, c.issuer, c.date))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful AI assistant for a portfolio website.\n\
         Here is the information about the portfolio owner:\n\n\
         Title: {title}\n\
         About: {about}\n\
         Skills: {skills}\n\n\
         Projects:\n{project_lines}\n\n\
         Certificates:\n{certificate_lines}\n\n\
         Contact Email: {email}\n\n\
         Instructions:\n\
         - Answer questions based on this information.\n\
         - Be polite, professional, and concise.\n\
         - If you don't know the answer, say you don't have that information.\n\
         - Reply in the language the user writes in."
    )
}

/// Context exchange, then prior history in order, then the new user turn.
pub fn seed_turns(context: &str, prior_history: &[ChatTurn], user_text: &str) -> Vec<ModelTurn> {
    let mut turns = Vec::with_capacity(prior_history.len() + 3);
    turns.push(ModelTurn { role: ModelRole::User, text: context.to_string() });
    turns.push(ModelTurn { role: ModelRole::Model, text: CONTEXT_ACKNOWLEDGEMENT.to_string() });
    turns.extend(prior_history.iter().map(ModelTurn::from));
    turns.push(ModelTurn { role: ModelRole::User, text: user_text.to_string() });
    turns
}
