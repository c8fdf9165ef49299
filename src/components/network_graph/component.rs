use leptos::ev;
use leptos::prelude::*;
use log::{error, info};
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

use super::edit_modal::EditModal;
use super::error::{CanvasError, context_2d};
use super::render;
use super::state::EditorState;
use super::toolbar::Toolbar;
use super::types::Mode;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 600.0;

/// Pointer position relative to the canvas' top-left corner.
fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(FALLBACK_WIDTH)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(FALLBACK_HEIGHT)
		}),
	)
}

fn draw(canvas: &HtmlCanvasElement, state: &EditorState) -> Result<(), CanvasError> {
	let (w, h) = (state.width as u32, state.height as u32);
	if canvas.width() != w || canvas.height() != h {
		canvas.set_width(w);
		canvas.set_height(h);
	}
	let ctx = context_2d(canvas)?;
	render::render(state, &ctx);
	Ok(())
}

/// Interactive editor for a network of statements and their relationships.
#[component]
pub fn PhilosophicalNetworkGraph(
	#[prop(default = true)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state = RwSignal::new(EditorState::default());

	let fit_canvas = move || {
		if let Some(canvas) = canvas_ref.get_untracked() {
			let (w, h) = measure(&canvas, width, height);
			state.update(|s| s.resize(w, h));
		}
	};

	Effect::new(move |_| {
		if canvas_ref.get().is_some() {
			fit_canvas();
			info!("network graph mounted");
		}
	});

	// Toolbar rows come and go with the mode, which resizes the canvas area.
	let mode = Memo::new(move |_| state.with(|s| s.mode));
	Effect::new(move |prev: Option<Mode>| {
		let current = mode.get();
		if prev.is_some_and(|p| p != current) {
			fit_canvas();
		}
		current
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		state.with(|s| {
			if let Err(err) = draw(&canvas, s) {
				error!("failed to draw network graph: {err}");
			}
		});
	});

	// Window-level so a drag keeps tracking once the pointer leaves the canvas.
	let move_handle = window_event_listener(ev::mousemove, move |ev: MouseEvent| {
		if !state.with_untracked(EditorState::is_gesture_active) {
			return;
		}
		if let Some((x, y)) = local_point(canvas_ref, &ev) {
			state.update(|s| s.pointer_move(x, y));
		}
	});
	let up_handle = window_event_listener(ev::mouseup, move |_| {
		if state.with_untracked(EditorState::is_gesture_active) {
			state.update(EditorState::pointer_up);
		}
	});
	let resize_handle = window_event_listener(ev::resize, move |_| fit_canvas());
	on_cleanup(move || {
		move_handle.remove();
		up_handle.remove();
		resize_handle.remove();
	});

	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		if let Some((x, y)) = local_point(canvas_ref, &ev) {
			state.update(|s| s.pointer_down(x, y));
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some((x, y)) = local_point(canvas_ref, &ev) {
			let delta = ev.delta_y();
			state.update(|s| s.wheel(x, y, delta));
		}
	};

	let cursor = move || {
		let cursor = match mode.get() {
			Mode::Navigate => "move",
			Mode::AddNode | Mode::AddEdge => "crosshair",
			Mode::AddEdgeType | Mode::AddNodeType => "default",
		};
		format!("display: block; cursor: {cursor};")
	};

	let root_style = if fullscreen {
		"width: 100%; height: 100vh;"
	} else {
		"width: 100%; height: 100%;"
	};

	view! {
		<div
			class="network-graph"
			style=format!(
				"{root_style} display: flex; flex-direction: column; position: relative; background: black; color: white; font-family: monospace;",
			)
		>
			<Toolbar state=state />
			<div class="network-graph-area" style="flex: 1; position: relative; overflow: hidden;">
				<canvas
					node_ref=canvas_ref
					class="network-graph-canvas"
					on:mousedown=on_mousedown
					on:wheel=on_wheel
					style=cursor
				/>
			</div>
			<EditModal state=state />
		</div>
	}
}
