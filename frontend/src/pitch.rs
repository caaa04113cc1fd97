use leptos::*;

/// The drawing surface. Owned by the page; overwritten, never merged, on
/// every successful render.
#[leptos::component]
pub fn pitch(payload: RwSignal<Option<viz::RenderPayload>>) -> impl leptos::IntoView {
    let markup = move || {
        payload
            .get()
            .map(|p| crate::svg::document(&p.layout, &p.traces))
            .unwrap_or_default()
    };

    let style = stylers::style! {
        "Pitch",
        .plot {
            display: block;
            margin-top: 2vh;
        }
    };

    view! {class = style,
        <div class="plot" inner_html=markup></div>
    }
}
