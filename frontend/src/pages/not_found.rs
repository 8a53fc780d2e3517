use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the homepage"}
            </Link<Route>>
        </main>
    }
}
