use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::{
        command,
        response::{failure, success, Responder},
    },
    model::clan_event::{ClanEvent, ClanEventKind},
    service::clan::ClanService,
    state::AppState,
};

pub const NAME: &str = "historiqueclan";

fn title(clan: &str) -> String {
    format!("Historique du clan {}", clan)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Afficher l'historique d'un clan")
        .add_option(command::clan_name_option())
}

/// Shows the latest events of a clan to an administrator or the clan's chief.
pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let responder = Responder::Command(cmd);
    let actor = command::actor(cmd);
    let Some(name) = command::clan_name(cmd) else {
        responder
            .embed(ctx, failure("Historique de clan", "Nom de clan manquant"))
            .await;
        return;
    };

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    match service.history(&actor, name).await {
        Ok(events) => {
            responder
                .embed(ctx, success(&title(name), describe_events(&events)))
                .await
        }
        Err(e) => responder.fail(ctx, NAME, Some(name), actor.user_id, &title(name), &e).await,
    }
}

fn describe_events(events: &[ClanEvent]) -> String {
    if events.is_empty() {
        return "Aucun événement enregistré".to_string();
    }

    events
        .iter()
        .map(describe_event)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One history line, using Discord timestamp and mention markup.
fn describe_event(event: &ClanEvent) -> String {
    let target = event
        .target_id
        .map(|id| format!(" <@{}>", id))
        .unwrap_or_default();

    let label = match event.kind {
        ClanEventKind::Created => "Création du clan".to_string(),
        ClanEventKind::Deleted => "Suppression du clan".to_string(),
        ClanEventKind::Invited => format!("Invitation de{}", target),
        ClanEventKind::Joined => "Arrivée".to_string(),
        ClanEventKind::Left => "Départ".to_string(),
        ClanEventKind::Promoted => format!("Promotion de{}", target),
        ClanEventKind::Appointed => format!("Nomination de{}", target),
    };

    format!(
        "<t:{}:f> {} par <@{}>",
        event.created_at.timestamp(),
        label,
        event.actor_id
    )
}
