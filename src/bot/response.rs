//! Rendering of interaction responses.
//!
//! Every answer the bot gives is an ephemeral embed: green for a success, red for a
//! failure, uncolored for a prompt. Interactions are deferred as soon as they are routed
//! and answered by editing the deferred response. Answers are deleted 15 seconds after
//! they are sent.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse, Http,
    UserId,
};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ClanError;

pub const SUCCESS_COLOR: u32 = 0x00ff00;
pub const FAILURE_COLOR: u32 = 0xff0000;

/// Delay before an answer is deleted.
pub const RESPONSE_LIFETIME: Duration = Duration::from_secs(15);

/// Interaction being answered.
#[derive(Clone, Copy)]
pub enum Responder<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
}

impl Responder<'_> {
    fn token(&self) -> &str {
        match self {
            Responder::Command(cmd) => &cmd.token,
            Responder::Component(component) => &component.token,
        }
    }

    fn deferral(&self) -> CreateInteractionResponse {
        match self {
            Responder::Command(_) => command_deferral(),
            Responder::Component(_) => CreateInteractionResponse::Acknowledge,
        }
    }

    /// Acknowledges the interaction before any work is done for it.
    ///
    /// Commands get an ephemeral "thinking" response. Components keep their message
    /// until the outcome replaces it.
    pub async fn defer(&self, ctx: &Context) {
        let response = self.deferral();
        let deferred = match self {
            Responder::Command(cmd) => cmd.create_response(&ctx.http, response).await,
            Responder::Component(component) => {
                component.create_response(&ctx.http, response).await
            }
        };

        if let Err(e) = deferred {
            tracing::error!("Failed to defer interaction: {}", e);
        }
    }

    /// Answers a deferred interaction with an embed and its components.
    ///
    /// Commands fill their ephemeral response. Components replace the message they are
    /// attached to, so a prompt turns into its outcome and its buttons disappear.
    pub async fn reply(&self, ctx: &Context, embed: CreateEmbed, components: Vec<CreateActionRow>) {
        let edit = EditInteractionResponse::new()
            .embed(embed)
            .components(components);

        let sent = match self {
            Responder::Command(cmd) => cmd.edit_response(&ctx.http, edit).await,
            Responder::Component(component) => component.edit_response(&ctx.http, edit).await,
        };

        match sent {
            Ok(_) => expire(ctx.http.clone(), self.token().to_string()),
            Err(e) => tracing::error!("Failed to answer interaction: {}", e),
        }
    }

    /// Answers with a single embed and no components.
    pub async fn embed(&self, ctx: &Context, embed: CreateEmbed) {
        self.reply(ctx, embed, Vec::new()).await;
    }

    /// Reports a failed clan operation to the user and logs it.
    pub async fn fail(
        &self,
        ctx: &Context,
        action: &str,
        clan: Option<&str>,
        actor: UserId,
        title: &str,
        err: &ClanError,
    ) {
        log_failure(action, clan, actor, err);
        self.embed(ctx, failure(title, describe(err))).await;
    }
}

/// Deferred ephemeral response of a command.
fn command_deferral() -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
}

/// Acknowledges a component click without answering it.
///
/// Used for clicks on prompts that expired, belong to someone else or are unknown.
pub async fn acknowledge(ctx: &Context, component: &ComponentInteraction) {
    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        tracing::debug!("Failed to acknowledge interaction: {}", e);
    }
}

fn expire(http: Arc<Http>, token: String) {
    tokio::spawn(async move {
        tokio::time::sleep(RESPONSE_LIFETIME).await;
        if let Err(e) = http.delete_original_interaction_response(&token).await {
            tracing::debug!("Failed to delete expired response: {}", e);
        }
    });
}

pub fn success(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(SUCCESS_COLOR)
}

pub fn failure(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(FAILURE_COLOR)
}

/// Neutral embed asking the user to choose.
pub fn prompt(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().title(title).description(description)
}

/// User-facing description of a failed clan operation.
pub fn describe(err: &ClanError) -> String {
    match err {
        ClanError::PermissionDenied => "Vous n'avez pas la permission de faire cela".to_string(),
        ClanError::NotFound(clan) => format!("Le clan {} n'existe pas", clan),
        ClanError::AlreadyExists(clan) => format!("Le clan {} existe déjà", clan),
        ClanError::AlreadyChief(clan) => format!("Ce membre est déjà chef du clan {}.", clan),
        ClanError::NotInClan(clan) => format!("Vous n'êtes pas dans le clan {}", clan),
        ClanError::InvalidTarget(_) => "Vous ne pouvez pas cibler un bot".to_string(),
        ClanError::MissingBotPermission(_) => {
            "Je n'ai pas les permissions de faire cela".to_string()
        }
        ClanError::RequestFailed(_) => "Une erreur est survenue".to_string(),
        ClanError::Database(_) => "Impossible de lire l'historique du clan".to_string(),
    }
}

/// Logs faults at error level and expected outcomes at debug level.
///
/// `clan` is `None` when the failure happened before a clan was chosen.
pub fn log_failure(action: &str, clan: Option<&str>, actor: UserId, err: &ClanError) {
    let clan = clan.unwrap_or("-");
    if err.is_fault() {
        tracing::error!(action, clan, actor = %actor, "Clan action failed: {}", err);
    } else {
        tracing::debug!(action, clan, actor = %actor, "Clan action refused: {}", err);
    }
}
