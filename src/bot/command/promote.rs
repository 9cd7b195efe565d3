//! "Ajouter comme chef à un clan" context menu.

use serenity::all::{
    CommandInteraction, CommandType, ComponentInteraction, Context, CreateCommand, UserId,
};

use crate::{
    bot::{
        command, component,
        response::{failure, log_failure, success, Responder},
    },
    model::{clan::Promotion, pending::PendingKind},
    service::clan::ClanService,
    state::AppState,
};

pub const NAME: &str = "Ajouter comme chef à un clan";

/// Title of the menu answer when the target is unknown.
pub const MENU_TITLE: &str = "Ajouter un chef à un clan";

fn title(clan: &str) -> String {
    format!("Promotion dans le clan {}", clan)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).kind(CommandType::User)
}

/// Offers the clans the invoking user may appoint the target chief of.
///
/// Administrators are offered every clan on the guild.
pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let responder = Responder::Command(cmd);
    let actor = command::actor(cmd);
    let Some(target) = command::target(cmd) else {
        tracing::warn!(actor = %actor.user_id, "Promote menu invoked without a target user");
        responder.embed(ctx, command::missing_target(MENU_TITLE)).await;
        return;
    };
    let menu_title = format!("Ajouter {} comme chef d'un clan", target.name);

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    if let Err(e) = service.check_target(&target) {
        log_failure(NAME, None, actor.user_id, &e);
        responder
            .embed(
                ctx,
                failure(
                    &menu_title,
                    "Vous ne pouvez pas ajouter un bot comme chef d'un clan",
                ),
            )
            .await;
        return;
    }

    let clans = match service.promote_options(&actor).await {
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
                PendingKind::PromoteSelection {
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
                format!("Dans quel clan voulez-vous ajouter {} ?", target.name),
            ),
            vec![row],
        )
        .await;
}

/// Makes the target chief of the selected clan.
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

    match service.promote(&actor, target, clan).await {
        Ok(promotion) => {
            let description = describe_promotion(promotion, &actor.name, target_name, clan);
            responder
                .embed(ctx, success(&title(clan), description))
                .await
        }
        Err(e) => responder.fail(ctx, NAME, Some(clan), actor.user_id, &title(clan), &e).await,
    }
}

/// Outcome text naming the actor, the target and the clan.
fn describe_promotion(promotion: Promotion, actor: &str, target: &str, clan: &str) -> String {
    let verb = match promotion {
        Promotion::Promoted => "promu",
        Promotion::Appointed => "nommé",
    };
    format!("{} a été {} chef du clan {} par {}.", target, verb, clan, actor)
}
