use leptos::*;

use crate::api::{self, FetchError};
use crate::pitch::Pitch;
use crate::players::PlayerSelect;

/// Why a render cycle produced no chart.
#[derive(Debug, Clone)]
enum RenderError {
    Fetch(FetchError),
    UnknownTeam {
        team: String,
        home: String,
        away: String,
    },
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fetch(inner) => write!(f, "{}", inner),
            Self::UnknownTeam { team, home, away } => {
                write!(f, "'{}' did not play this match ({} vs {})", team, home, away)
            }
        }
    }
}

/// One full chart fetch: team check against the match metadata, then the
/// endpoint for the chosen kind, then the trace build.
async fn fetch_payload(
    url: String,
    team: String,
    kind: viz::VizKind,
) -> Result<viz::RenderPayload, RenderError> {
    let info: common::MatchInfo = api::get_json("match", &[("url", &url)])
        .await
        .map_err(RenderError::Fetch)?;
    if info.home != team && info.away != team {
        return Err(RenderError::UnknownTeam {
            team,
            home: info.home,
            away: info.away,
        });
    }

    let params = [("url", url.as_str()), ("team", team.as_str())];
    let data = match kind {
        viz::VizKind::PassNetwork => viz::VizData::PassNetwork(
            api::get_json(kind.api_path(), &params)
                .await
                .map_err(RenderError::Fetch)?,
        ),
        viz::VizKind::BoxPasses => viz::VizData::BoxPasses(
            api::get_json(kind.api_path(), &params)
                .await
                .map_err(RenderError::Fetch)?,
        ),
        viz::VizKind::ShotMap => viz::VizData::ShotMap(
            api::get_json(kind.api_path(), &params)
                .await
                .map_err(RenderError::Fetch)?,
        ),
    };

    Ok(viz::render(&data, &team))
}

#[leptos::component]
pub fn app() -> impl leptos::IntoView {
    let (url, set_url) = create_signal(String::new());
    let (team, set_team) = create_signal(String::new());
    let (kind, set_kind) = create_signal(viz::VizKind::PassNetwork);

    let payload = RwSignal::new(None::<viz::RenderPayload>);
    let players = RwSignal::new(Vec::<common::PlayerNode>::new());

    // Each trigger gets a fresh generation; results arriving for an older
    // one are dropped, so overlapping fetches cannot fight over the surface.
    let generation = RwSignal::new(0u64);

    let on_render = move |_| {
        let url_value = url.get_untracked().trim().to_owned();
        let team_value = team.get_untracked().trim().to_owned();
        if url_value.is_empty() || team_value.is_empty() {
            let _ = window().alert_with_message("Please enter match URL and Team.");
            return;
        }
        let kind_value = kind.get_untracked();

        let generation_id = generation.get_untracked() + 1;
        generation.set(generation_id);

        // The player list is independent of the chart fetch: it may resolve
        // before or after it, and its failure never aborts the chart.
        {
            let (url_value, team_value) = (url_value.clone(), team_value.clone());
            spawn_local(async move {
                let loaded = api::get_json::<Vec<common::PlayerNode>>(
                    "players",
                    &[("url", &url_value), ("team", &team_value)],
                )
                .await;
                if generation.get_untracked() != generation_id {
                    return;
                }
                match loaded {
                    Ok(list) => players.set(list),
                    Err(e) => {
                        leptos::logging::warn!("players load failed: {}", e);
                        players.set(Vec::new());
                    }
                }
            });
        }

        spawn_local(async move {
            let result = fetch_payload(url_value, team_value, kind_value).await;
            if generation.get_untracked() != generation_id {
                return;
            }
            match result {
                Ok(p) => payload.set(Some(p)),
                // surface keeps its previous state on failure
                Err(e) => {
                    let _ = window().alert_with_message(&format!("Error: {}", e));
                }
            }
        });
    };

    let on_kind = move |ev| {
        if let Ok(parsed) = event_target_value(&ev).parse::<viz::VizKind>() {
            set_kind(parsed);
        }
    };

    let style = stylers::style! {
        "App",
        .page {
            min-height: 100vh;
            padding: 2vh 2vw;

            color: #e5e7eb;
            background-color: #0f1115;
        }

        .page_title {
            margin: 0px 0px 1vh 0px;
        }

        .controls {
            display: grid;
            grid-template-columns: 3fr 1fr auto auto;
            column-gap: 1ch;

            max-width: 900px;
        }

        .controls > input, .controls > select {
            padding: 4px 6px;

            color: #e5e7eb;
            background-color: #1a1d24;
            border: 1px solid #2d313b;
            border-radius: 4px;
        }

        .controls > button {
            padding: 4px 12px;

            color: #0f1115;
            background-color: #3b82f6;
            border: none;
            border-radius: 4px;
        }
    };

    view! {class = style,
        <div class="page">
            <h1 class="page_title">Match Visualizer</h1>

            <div class="controls">
                <input
                    type="text"
                    placeholder="Match URL"
                    prop:value=url
                    on:input=move |ev| set_url(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Team"
                    prop:value=team
                    on:input=move |ev| set_team(event_target_value(&ev))
                />
                <select on:change=on_kind>
                    <option value="pass-network">Pass Network</option>
                    <option value="box-passes">Box Passes</option>
                    <option value="shots">Shots</option>
                </select>
                <button on:click=on_render>Render</button>
            </div>

            <PlayerSelect players=players />
            <Pitch payload=payload />
        </div>
    }
}
