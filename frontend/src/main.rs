use leptos::*;
use leptos_router::*;

use frontend::App;

fn main() {
    mount_to_body(move || {
        view! {
            <Router>
                <main>
                    <Routes>
                        <Route path="/" view=App />
                    </Routes>
                </main>
            </Router>
        }
    })
}
