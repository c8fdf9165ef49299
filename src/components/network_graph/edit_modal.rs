use leptos::prelude::*;

use super::state::EditorState;
use super::toolbar::options;
use super::types::{EditDraft, truncate_label};

const PREVIEW_MAX_CHARS: usize = 15;
const PREVIEW_KEEP_CHARS: usize = 12;
const FIELD: &str = "width: 100%; box-sizing: border-box; padding: 8px 12px; background: black; border: 1px solid #4b5563; color: white; font-family: inherit;";
const LABEL: &str = "display: block; font-size: 0.875rem; color: #9ca3af; margin-bottom: 8px;";

fn draft_field(
	state: RwSignal<EditorState>,
	read: fn(&EditDraft) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
	move || state.with(|s| s.editing.as_ref().map(read).unwrap_or_default())
}

/// Modal for editing a node's statement and type. Works on the draft held
/// in `EditorState::editing`; nothing reaches the graph until Save.
#[component]
pub fn EditModal(state: RwSignal<EditorState>) -> impl IntoView {
	let statement = draft_field(state, |d| d.statement.clone());
	let node_type = draft_field(state, |d| d.node_type.clone());
	let node_types = Memo::new(move |_| state.with(|s| s.graph.all_node_types()));
	let draft_type = Memo::new(move |_| node_type());

	let preview_style = move || {
		let ty = node_type();
		let color = state.with(|s| s.graph.node_color(&ty).to_string());
		format!(
			"width: 80px; height: 80px; border-radius: 50%; border: 2px solid #4b5563; display: flex; flex-direction: column; align-items: center; justify-content: center; font-size: 0.75rem; text-align: center; color: black; background-color: {color};",
		)
	};

	view! {
		<Show when=move || state.with(|s| s.editing.is_some())>
			<div
				class="network-graph-modal"
				style="position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 50;"
			>
				<div style="background: black; border: 1px solid #4b5563; padding: 24px; max-width: 28rem; width: 100%; margin: 0 16px;">
					<h3 style="font-size: 1.125rem; font-weight: bold; margin: 0 0 16px;">"Edit Node"</h3>

					<label style=LABEL>"Statement:"</label>
					<textarea
						style=format!("{FIELD} height: 8rem; resize: none;")
						placeholder="Enter the statement or idea..."
						prop:value=statement
						on:input=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| {
								if let Some(draft) = s.editing.as_mut() {
									draft.statement = value;
								}
							});
						}
					/>
					<div style="font-size: 0.75rem; color: #6b7280; margin-top: 4px;">
						{move || format!("{} characters", statement().chars().count())}
					</div>

					<label style=format!("{LABEL} margin-top: 16px;")>"Type:"</label>
					<select
						style=FIELD
						on:change=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| {
								if let Some(draft) = s.editing.as_mut() {
									draft.node_type = value;
								}
							});
						}
					>
						{move || options(node_types.get(), draft_type.get())}
					</select>

					<div style="padding-top: 8px; margin-top: 16px;">
						<div style=LABEL>"Preview:"</div>
						<div style="display: flex; justify-content: center;">
							<div style=preview_style>
								<div style="font-weight: 600;">
									{move || truncate_label(&statement(), PREVIEW_MAX_CHARS, PREVIEW_KEEP_CHARS)}
								</div>
								<div>{move || format!("[{}]", node_type())}</div>
							</div>
						</div>
					</div>

					<div style="display: flex; gap: 8px; margin-top: 24px;">
						<button
							style="flex: 1; padding: 8px 16px; background: white; color: black; border: none; font-family: inherit;"
							on:click=move |_| state.update(EditorState::save_edit)
						>
							"Save"
						</button>
						<button
							style="flex: 1; padding: 8px 16px; background: black; color: white; border: 1px solid #4b5563; font-family: inherit;"
							on:click=move |_| state.update(EditorState::cancel_edit)
						>
							"Cancel"
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}
