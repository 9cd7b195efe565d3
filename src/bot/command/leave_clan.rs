use serenity::all::{CommandInteraction, ComponentInteraction, Context, CreateCommand};

use crate::{
    bot::{
        command, component,
        response::{failure, prompt, success, Responder},
    },
    model::pending::PendingKind,
    service::clan::ClanService,
    state::AppState,
};

pub const NAME: &str = "leaveclan";

fn title(clan: &str) -> String {
    format!("Quitter le clan {}", clan)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Quitter un clan")
        .add_option(command::clan_name_option())
}

/// Opens the leave confirmation for a member or chief of the clan.
pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let responder = Responder::Command(cmd);
    let actor = command::actor(cmd);
    let Some(name) = command::clan_name(cmd) else {
        responder
            .embed(ctx, failure("Quitter un clan", "Nom de clan manquant"))
            .await;
        return;
    };

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);
    if let Err(e) = service.check_leave(&actor, name).await {
        responder.fail(ctx, NAME, Some(name), actor.user_id, &title(name), &e).await;
        return;
    }

    let pending = state
        .pending
        .register(
            actor.user_id,
            PendingKind::LeaveClan {
                clan: name.to_string(),
            },
        )
        .await;

    responder
        .reply(
            ctx,
            prompt(
                &title(name),
                format!("Êtes-vous sûr de vouloir quitter le clan {} ?", name),
            ),
            vec![component::confirm_buttons(pending, "Oui", "Non")],
        )
        .await;
}

/// Removes both clan roles from the actor after the prompt was confirmed.
pub async fn confirm(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    clan: &str,
) {
    let responder = Responder::Component(component);
    let actor = component::actor(component);

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    match service.leave_clan(&actor, clan).await {
        Ok(()) => {
            responder
                .embed(
                    ctx,
                    success(&title(clan), format!("Vous avez quitté le clan {}.", clan)),
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
            failure(&title(clan), format!("Vous n'avez pas quitté le clan {}.", clan)),
        )
        .await;
}
