use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div style="padding: 32px; font-family: monospace; color: white; background: black; height: 100vh;">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a href="/" style="color: #9ca3af;">"Back to the graph"</a>
		</div>
	}
}
