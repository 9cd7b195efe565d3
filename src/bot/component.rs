//! Message components of the clan prompts.
//!
//! Every button or select menu the bot shows carries a custom id `clan:<id>:<choice>`,
//! where `<id>` is the pending prompt registered for it. A click is only acted upon when
//! the prompt is still live and the clicking user is the one it is bound to; any other
//! click is acknowledged without a word.

use serenity::all::{
    ButtonStyle, ComponentInteraction, ComponentInteractionDataKind, Context, CreateActionRow,
    CreateButton, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};
use std::fmt;

use crate::{
    bot::{
        command::{delete_clan, invite, leave_clan, promote},
        response::{self, Responder},
    },
    model::{clan::Actor, pending::PendingKind},
    state::AppState,
};

const CUSTOM_ID_PREFIX: &str = "clan";

/// Custom id of the disabled placeholder shown when there is no clan to pick.
const NO_CLAN_CUSTOM_ID: &str = "clan:none";

/// Discord rejects select menus with more options.
pub const MAX_SELECT_OPTIONS: usize = 25;

/// What a component does for its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Confirm,
    Refuse,
    Select,
}

impl Choice {
    fn as_str(&self) -> &'static str {
        match self {
            Choice::Confirm => "confirm",
            Choice::Refuse => "refuse",
            Choice::Select => "select",
        }
    }
}

/// Decoded component custom id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentId {
    pub pending: u64,
    pub choice: Choice,
}

impl ComponentId {
    pub fn new(pending: u64, choice: Choice) -> Self {
        Self { pending, choice }
    }

    /// Decodes a custom id, returning `None` for ids this bot did not produce.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.split(':');
        if parts.next()? != CUSTOM_ID_PREFIX {
            return None;
        }

        let pending = parts.next()?.parse::<u64>().ok()?;
        let choice = match parts.next()? {
            "confirm" => Choice::Confirm,
            "refuse" => Choice::Refuse,
            "select" => Choice::Select,
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self { pending, choice })
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", CUSTOM_ID_PREFIX, self.pending, self.choice.as_str())
    }
}

/// Green confirm button followed by a red refuse button.
pub fn confirm_buttons(pending: u64, confirm_label: &str, refuse_label: &str) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ComponentId::new(pending, Choice::Confirm).to_string())
            .label(confirm_label)
            .style(ButtonStyle::Success),
        CreateButton::new(ComponentId::new(pending, Choice::Refuse).to_string())
            .label(refuse_label)
            .style(ButtonStyle::Danger),
    ])
}

/// Select menu listing `clans`, truncated to the first 25.
pub fn clan_select(pending: u64, clans: &[String]) -> CreateActionRow {
    if clans.len() > MAX_SELECT_OPTIONS {
        tracing::warn!(
            "Clan selection truncated from {} to {} options",
            clans.len(),
            MAX_SELECT_OPTIONS
        );
    }

    let options = clans
        .iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|clan| CreateSelectMenuOption::new(clan.as_str(), clan.as_str()))
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ComponentId::new(pending, Choice::Select).to_string(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Choisissez un clan"),
    )
}

/// Disabled red button shown instead of an empty clan selection.
pub fn no_clan_placeholder() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(NO_CLAN_CUSTOM_ID)
        .label("Vous n'êtes chef d'aucun clan")
        .style(ButtonStyle::Danger)
        .disabled(true)])
}

/// Actor clicking a component.
///
/// Components in direct messages carry no guild member, so such actors hold no roles.
pub fn actor(component: &ComponentInteraction) -> Actor {
    Actor::from_interaction(&component.user, component.member.as_ref())
}

/// Handles a click on a clan prompt component.
///
/// The pending prompt is consumed before anything runs, so a prompt is answered at most
/// once even when clicked repeatedly. Live prompts are deferred before their handler runs.
pub async fn handle_component(state: &AppState, ctx: &Context, component: &ComponentInteraction) {
    let Some(id) = ComponentId::parse(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", component.data.custom_id);
        response::acknowledge(ctx, component).await;
        return;
    };

    let Some(action) = state.pending.take(id.pending, component.user.id).await else {
        tracing::debug!(
            user = %component.user.id,
            "Ignoring click on expired or foreign prompt {}",
            id.pending
        );
        response::acknowledge(ctx, component).await;
        return;
    };

    Responder::Component(component).defer(ctx).await;

    match (action.kind, id.choice) {
        (PendingKind::DeleteClan { clan }, Choice::Confirm) => {
            delete_clan::confirm(state, ctx, component, &clan).await
        }
        (PendingKind::DeleteClan { clan }, Choice::Refuse) => {
            delete_clan::refuse(ctx, component, &clan).await
        }
        (PendingKind::LeaveClan { clan }, Choice::Confirm) => {
            leave_clan::confirm(state, ctx, component, &clan).await
        }
        (PendingKind::LeaveClan { clan }, Choice::Refuse) => {
            leave_clan::refuse(ctx, component, &clan).await
        }
        (
            PendingKind::InviteSelection {
                target,
                target_name,
            },
            Choice::Select,
        ) => match selected_clan(component) {
            Some(clan) => {
                invite::select(state, ctx, component, target, &target_name, &clan).await
            }
            None => tracing::debug!("Ignoring empty clan selection"),
        },
        (
            PendingKind::PromoteSelection {
                target,
                target_name,
            },
            Choice::Select,
        ) => match selected_clan(component) {
            Some(clan) => {
                promote::select(state, ctx, component, target, &target_name, &clan).await
            }
            None => tracing::debug!("Ignoring empty clan selection"),
        },
        (PendingKind::InviteAnswer { clan, inviter_name }, Choice::Confirm) => {
            invite::accept(state, ctx, component, &clan, &inviter_name).await
        }
        (PendingKind::InviteAnswer { clan, .. }, Choice::Refuse) => {
            invite::refuse(ctx, component, &clan).await
        }
        (kind, choice) => tracing::debug!("Ignoring {:?} on prompt {:?}", choice, kind),
    }
}

fn selected_clan(component: &ComponentInteraction) -> Option<String> {
    match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first().cloned(),
        _ => None,
    }
}
