use leptos::prelude::*;

use super::state::EditorState;
use super::types::{Mode, is_strength_bearing, parse_strength};

const BUTTON: &str = "padding: 4px 12px; border: 1px solid #4b5563; background: black; color: white; font-family: inherit;";
const BUTTON_ACTIVE: &str = "padding: 4px 12px; border: 1px solid white; background: white; color: black; font-family: inherit;";
const FIELD: &str = "padding: 4px 8px; background: black; border: 1px solid #4b5563; color: white; font-family: inherit;";
const ROW: &str = "display: flex; gap: 8px; align-items: center;";
const HINT: &str = "font-size: 0.875rem; color: #9ca3af;";

/// `<option>` list for a set of names, marking `current` as selected.
pub(super) fn options(names: Vec<String>, current: String) -> impl IntoView {
	names
		.into_iter()
		.map(|name| {
			let selected = name == current;
			let value = name.clone();
			view! { <option value=value selected=selected>{name}</option> }
		})
		.collect_view()
}

#[component]
pub fn Toolbar(state: RwSignal<EditorState>) -> impl IntoView {
	let mode = Memo::new(move |_| state.with(|s| s.mode));
	let node_types = Memo::new(move |_| state.with(|s| s.graph.all_node_types()));
	let draft_node_type = Memo::new(move |_| state.with(|s| s.node_draft.node_type.clone()));
	let relation_names = Memo::new(move |_| {
		state.with(|s| {
			s.graph
				.relationship_types
				.iter()
				.map(|rt| rt.name.clone())
				.collect::<Vec<_>>()
		})
	});
	let edge_type = Memo::new(move |_| state.with(|s| s.selected_edge_type.clone()));
	let is_mode = move |m: Mode| move || mode.get() == m;

	let mode_buttons = Mode::ALL
		.into_iter()
		.map(|m| {
			view! {
				<button
					style=move || if mode.get() == m { BUTTON_ACTIVE } else { BUTTON }
					on:click=move |_| state.update(|s| s.set_mode(m))
				>
					{m.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div
			class="network-graph-toolbar"
			style="border-bottom: 1px solid #374151; padding: 16px; display: flex; flex-direction: column; gap: 16px;"
		>
			<div style=ROW>{mode_buttons}</div>

			<Show when=is_mode(Mode::AddNode)>
				<div style=ROW>
					<input
						type="text"
						placeholder="Statement..."
						style=format!("{FIELD} flex: 1;")
						prop:value=move || state.with(|s| s.node_draft.statement.clone())
						on:input=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.node_draft.statement = value);
						}
					/>
					<select
						style=FIELD
						on:change=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.node_draft.node_type = value);
						}
					>
						{move || options(node_types.get(), draft_node_type.get())}
					</select>
					<span style=HINT>"Click on graph to place"</span>
				</div>
			</Show>

			<Show when=is_mode(Mode::AddEdge)>
				<div style=ROW>
					<select
						style=FIELD
						on:change=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.selected_edge_type = value);
						}
					>
						{move || options(relation_names.get(), edge_type.get())}
					</select>
					<Show when=move || edge_type.with(|t| is_strength_bearing(t))>
						<input
							type="number"
							placeholder="Strength"
							style=format!("{FIELD} width: 80px;")
							prop:value=move || state.with(|s| s.edge_strength.to_string())
							on:input=move |ev| {
								let strength = parse_strength(&event_target_value(&ev));
								state.update(|s| s.edge_strength = strength);
							}
						/>
					</Show>
					<span style=HINT>
						{move || {
							if state.with(|s| s.anchor.is_none()) {
								"Click first node"
							} else {
								"Click second node"
							}
						}}
					</span>
					<Show when=move || state.with(|s| s.anchor.is_some())>
						<button style=BUTTON on:click=move |_| state.update(EditorState::cancel_edge)>
							"Cancel"
						</button>
					</Show>
				</div>
			</Show>

			<Show when=is_mode(Mode::AddEdgeType)>
				<div style=ROW>
					<input
						type="text"
						placeholder="Edge relationship name..."
						style=format!("{FIELD} flex: 1;")
						prop:value=move || state.with(|s| s.relation_draft.name.clone())
						on:input=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.relation_draft.name = value);
						}
					/>
					<input
						type="color"
						prop:value=move || state.with(|s| s.relation_draft.color.clone())
						on:input=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.relation_draft.color = value);
						}
					/>
					<button style=BUTTON on:click=move |_| state.update(EditorState::add_relationship_type)>
						"Add Edge Type"
					</button>
				</div>
			</Show>

			<Show when=is_mode(Mode::AddNodeType)>
				<div style=ROW>
					<input
						type="text"
						placeholder="Knowledge type name..."
						style=format!("{FIELD} flex: 1;")
						prop:value=move || state.with(|s| s.node_type_draft.name.clone())
						on:input=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.node_type_draft.name = value);
						}
					/>
					<input
						type="color"
						prop:value=move || state.with(|s| s.node_type_draft.color.clone())
						on:input=move |ev| {
							let value = event_target_value(&ev);
							state.update(|s| s.node_type_draft.color = value);
						}
					/>
					<button style=BUTTON on:click=move |_| state.update(EditorState::add_node_type)>
						"Add Node Type"
					</button>
					<span style=HINT>"Examples: intuitive, revealed, experiential, logical"</span>
				</div>
			</Show>

			<div style=ROW>
				<button style=BUTTON on:click=move |_| state.update(EditorState::zoom_out)>
					"\u{2212}"
				</button>
				<span style="font-size: 0.875rem;">
					{move || format!("{}%", state.with(|s| s.transform.zoom_percent()))}
				</span>
				<button style=BUTTON on:click=move |_| state.update(EditorState::zoom_in)>
					"+"
				</button>
			</div>
		</div>
	}
}
