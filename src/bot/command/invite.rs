//! "Inviter ce membre à un clan" context menu.
//!
//! A chief picks one of their clans; the target then receives a direct message with an
//! accept/refuse prompt and joins the clan as a member on acceptance.

use serenity::all::{
    CommandInteraction, CommandType, ComponentInteraction, Context, CreateCommand, CreateMessage,
    UserId,
};

use crate::{
    bot::{
        command, component,
        response::{failure, log_failure, success, Responder},
    },
    error::ClanError,
    model::pending::PendingKind,
    service::{clan::ClanService, gateway::GuildGateway},
    state::AppState,
};

pub const NAME: &str = "Inviter ce membre à un clan";

/// Title of the menu answer when the target is unknown.
pub const MENU_TITLE: &str = "Inviter un membre dans un clan";

fn title(clan: &str) -> String {
    format!("Invitation à rejoindre le clan {}", clan)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).kind(CommandType::User)
}

/// Offers the clans the invoking chief may invite the target to.
pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let responder = Responder::Command(cmd);
    let actor = command::actor(cmd);
    let Some(target) = command::target(cmd) else {
        tracing::warn!(actor = %actor.user_id, "Invite menu invoked without a target user");
        responder.embed(ctx, command::missing_target(MENU_TITLE)).await;
        return;
    };
    let menu_title = format!("Inviter {} dans un clan", target.name);

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    if let Err(e) = service.check_target(&target) {
        log_failure(NAME, None, actor.user_id, &e);
        responder
            .embed(
                ctx,
                failure(&menu_title, "Vous ne pouvez pas inviter un bot dans un clan"),
            )
            .await;
        return;
    }

    let clans = match service.invite_options(&actor).await {
        Ok(clans) => clans,
        Err(e) => {
            responder.fail(ctx, NAME, None, actor.user_id, &menu_title, &e).await;
            return;
        }
    };

    let row = if clans.is_empty() {
        component::no_clan_placeholder()
    } else {
        let pending = state
            .pending
            .register(
                actor.user_id,
                PendingKind::InviteSelection {
                    target: target.user_id,
                    target_name: target.name.clone(),
                },
            )
            .await;
        component::clan_select(pending, &clans)
    };

    responder
        .reply(
            ctx,
            success(
                &menu_title,
                format!("Dans quel clan voulez-vous inviter {} ?", target.name),
            ),
            vec![row],
        )
        .await;
}

/// Sends the invitation for the selected clan to the target.
///
/// The target's answer prompt lives as long as the direct message carrying it.
pub async fn select(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    target: UserId,
    target_name: &str,
    clan: &str,
) {
    let responder = Responder::Component(component);
    let actor = component::actor(component);

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    if let Err(e) = service.check_invite(target, clan).await {
        responder.fail(ctx, NAME, Some(clan), actor.user_id, &title(clan), &e).await;
        return;
    }

    let answer = state
        .pending
        .register(
            target,
            PendingKind::InviteAnswer {
                clan: clan.to_string(),
                inviter_name: actor.name.clone(),
            },
        )
        .await;

    let message = CreateMessage::new()
        .content(format!(
            "Vous avez été invité à rejoindre le clan {} par {}.",
            clan, actor.name
        ))
        .components(vec![component::confirm_buttons(
            answer,
            "Accepter",
            "Refuser",
        )]);

    let sent = match service.deliver_invite(&actor, target, clan, message).await {
        Ok(sent) => sent,
        Err(e) => {
            state.pending.take(answer, target).await;
            log_failure(NAME, Some(clan), actor.user_id, &e);
            responder
                .embed(
                    ctx,
                    failure(
                        &title(clan),
                        format!("Impossible d'envoyer un message privé à {}.", target_name),
                    ),
                )
                .await;
            return;
        }
    };

    let lifetime = state.pending.ttl();
    tokio::spawn(async move {
        tokio::time::sleep(lifetime).await;
        if let Err(e) = gateway.delete_message(sent).await {
            tracing::debug!("Failed to delete expired invitation: {}", e);
        }
    });

    responder
        .embed(
            ctx,
            success(
                &title(clan),
                format!(
                    "Une invitation a été envoyée à {} pour rejoindre le clan {}. \
                     Elle expirera dans {} secondes",
                    target_name,
                    clan,
                    lifetime.as_secs()
                ),
            ),
        )
        .await;
}

/// Grants the member role once the target accepted.
pub async fn accept(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    clan: &str,
    inviter_name: &str,
) {
    let responder = Responder::Component(component);
    let actor = component::actor(component);

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    match service.accept_invite(&actor, clan).await {
        Ok(()) => {
            responder
                .embed(
                    ctx,
                    success(
                        &title(clan),
                        format!(
                            "Vous avez accepté l'invitation de {} à rejoindre le clan {}.",
                            inviter_name, clan
                        ),
                    ),
                )
                .await
        }
        Err(ClanError::NotFound(_)) => {
            tracing::debug!(
                clan,
                actor = %actor.user_id,
                "Invitation accepted after clan deletion"
            );
            responder
                .embed(
                    ctx,
                    failure(&title(clan), format!("Le clan {} n'existe plus.", clan)),
                )
                .await
        }
        Err(e) => responder.fail(ctx, NAME, Some(clan), actor.user_id, &title(clan), &e).await,
    }
}

pub async fn refuse(ctx: &Context, component: &ComponentInteraction, clan: &str) {
    Responder::Component(component)
        .embed(
            ctx,
            failure(
                &title(clan),
                format!(
                    "Vous avez refusé l'invitation à rejoindre le clan {}.",
                    clan
                ),
            ),
        )
        .await;
}
