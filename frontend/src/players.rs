use leptos::*;

/// The optional player selector, fed by `/api/players`. Hidden whenever the
/// list is empty, including after a failed load.
#[leptos::component]
pub fn player_select(players: RwSignal<Vec<common::PlayerNode>>) -> impl leptos::IntoView {
    let style = stylers::style! {
        "PlayerSelect",
        .wrap {
            margin-top: 1vh;
            color: #e5e7eb;
        }

        .wrap > label {
            margin-right: 1ch;
        }

        .hidden {
            display: none;
        }
    };

    let options = move || {
        players
            .get()
            .into_iter()
            .map(|player| {
                let text = option_text(&player);
                view! { <option value=player.player_id.clone()>{text}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {class = style,
        <div class="wrap" class:hidden=move || players.get().is_empty()>
            <label for="player">Player</label>
            <select id="player">{ options }</select>
        </div>
    }
}

/// Option text is always "{shirtNo} {name}", with an empty shirt-number slot
/// for players without one.
fn option_text(player: &common::PlayerNode) -> String {
    format!("{} {}", player.shirt_no.as_deref().unwrap_or(""), player.name)
}
