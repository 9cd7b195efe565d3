use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::{
        command,
        response::{failure, success, Responder},
    },
    service::clan::ClanService,
    state::AppState,
};

pub const NAME: &str = "newclan";

const TITLE: &str = "Création de clan";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Créer un nouveau clan")
        .add_option(command::clan_name_option())
}

/// Creates a clan for an administrator.
pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let responder = Responder::Command(cmd);
    let actor = command::actor(cmd);
    let Some(name) = command::clan_name(cmd) else {
        responder.embed(ctx, failure(TITLE, "Nom de clan manquant")).await;
        return;
    };

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    match service.create_clan(&actor, name).await {
        Ok(()) => {
            responder
                .embed(ctx, success(TITLE, format!("Le clan {} a été créé", name)))
                .await
        }
        Err(e) => responder.fail(ctx, NAME, Some(name), actor.user_id, TITLE, &e).await,
    }
}
