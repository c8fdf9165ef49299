use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::graph::NetworkGraph;
use super::state::{EditorState, HANDLE_RADIUS, NODE_RADIUS};
use super::types::{Node, truncate_label};

const BACKGROUND: &str = "#000000";
const NODE_STROKE: &str = "#666666";
const ANCHOR_STROKE: &str = "#ff4444";
const ARROW_SIZE: f64 = 10.0;
const STATEMENT_MAX_CHARS: usize = 20;
const STATEMENT_KEEP_CHARS: usize = 17;

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(&state.graph, ctx);
	for node in &state.graph.nodes {
		draw_node(&state.graph, node, state.anchor == Some(node.id), ctx);
	}
	ctx.restore();
}

fn draw_edges(graph: &NetworkGraph, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	ctx.set_font("10px monospace");

	for edge in &graph.edges {
		let Some((from, to)) = graph.edge_endpoints(edge) else {
			continue;
		};
		let color = graph.edge_color(&edge.edge_type);
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		let (mx, my) = ((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);

		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();

		// arrowhead sits on the target's rim, nodes are painted over the rest
		if dist > NODE_RADIUS + ARROW_SIZE {
			let (ux, uy) = (dx / dist, dy / dist);
			let (tip_x, tip_y) = (to.x - ux * NODE_RADIUS, to.y - uy * NODE_RADIUS);
			let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
			let (px, py) = (-uy * ARROW_SIZE * 0.35, ux * ARROW_SIZE * 0.35);
			ctx.set_fill_style_str(color);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}

		ctx.set_fill_style_str(color);
		let _ = ctx.fill_text(&edge.caption(), mx, my - 10.0);

		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(2.0),
			&JsValue::from_f64(2.0),
		));
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.25)");
		ctx.set_line_width(1.0);
		ctx.begin_path();
		let _ = ctx.arc(mx, my, HANDLE_RADIUS, 0.0, 2.0 * PI);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
}

fn draw_node(graph: &NetworkGraph, node: &Node, is_anchor: bool, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (node.x, node.y);

	ctx.begin_path();
	let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(graph.node_color(&node.node_type));
	ctx.fill();
	let (stroke, width) = if is_anchor {
		(ANCHOR_STROKE, 3.0)
	} else {
		(NODE_STROKE, 2.0)
	};
	ctx.set_stroke_style_str(stroke);
	ctx.set_line_width(width);
	ctx.stroke();

	ctx.set_text_align("center");
	ctx.set_fill_style_str("black");
	ctx.set_font("10px monospace");
	let statement = truncate_label(&node.statement, STATEMENT_MAX_CHARS, STATEMENT_KEEP_CHARS);
	let _ = ctx.fill_text(&statement, x, y - 8.0);
	ctx.set_font("8px monospace");
	let _ = ctx.fill_text(&format!("[{}]", node.node_type), x, y + 5.0);

	let tally = graph.node_strength(node.id);
	if let Some(text) = tally.display() {
		ctx.set_fill_style_str(if tally.total >= 0 { "darkgreen" } else { "darkred" });
		ctx.set_font("bold 8px monospace");
		let _ = ctx.fill_text(&text, x, y + 15.0);
	}

	let (hx, hy) = EditorState::node_handle_center(x, y);
	ctx.begin_path();
	let _ = ctx.arc(hx, hy, HANDLE_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str("red");
	ctx.fill();
	ctx.set_fill_style_str("white");
	ctx.set_font("bold 10px monospace");
	let _ = ctx.fill_text("\u{00d7}", hx, hy + 3.5);
}
