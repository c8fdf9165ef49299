use log::{debug, info};

use super::graph::NetworkGraph;
use super::types::{
	DEFAULT_NODE_TYPE_DRAFT_COLOR, DEFAULT_RELATION_DRAFT_COLOR, EdgeId, EditDraft, Mode,
	NodeDraft, NodeId, TypeDraft, normalize_type_name,
};
use super::viewport::{ViewTransform, WHEEL_ZOOM_STEP, ZOOM_STEP};

pub const NODE_RADIUS: f64 = 40.0;
pub const HANDLE_RADIUS: f64 = 8.0;
/// Offset of a node's delete handle from its center.
pub const NODE_HANDLE_OFFSET: (f64, f64) = (30.0, -30.0);
/// Screen pixels a pointer may travel before a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

pub const DEFAULT_EDGE_TYPE: &str = "implication";
pub const DEFAULT_EDGE_STRENGTH: i64 = 1;

/// What sits under the pointer, topmost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
	NodeHandle(NodeId),
	Node(NodeId),
	EdgeHandle(EdgeId),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
	NodeDrag {
		node: NodeId,
		start_x: f64,
		start_y: f64,
		node_start_x: f64,
		node_start_y: f64,
	},
	Pan {
		start_x: f64,
		start_y: f64,
		origin_x: f64,
		origin_y: f64,
	},
	/// Press on a delete handle; commits on release unless dragged.
	Press { hit: Hit, start_x: f64, start_y: f64 },
}

impl Gesture {
	fn origin(&self) -> (f64, f64) {
		match *self {
			Gesture::NodeDrag {
				start_x, start_y, ..
			}
			| Gesture::Pan {
				start_x, start_y, ..
			}
			| Gesture::Press {
				start_x, start_y, ..
			} => (start_x, start_y),
		}
	}
}

/// Everything the editor knows: the graph, the view and the UI state.
#[derive(Clone, Debug)]
pub struct EditorState {
	pub graph: NetworkGraph,
	pub transform: ViewTransform,
	pub mode: Mode,
	pub gesture: Option<Gesture>,
	pub has_dragged: bool,
	pub anchor: Option<NodeId>,
	pub editing: Option<EditDraft>,
	pub node_draft: NodeDraft,
	pub relation_draft: TypeDraft,
	pub node_type_draft: TypeDraft,
	pub selected_edge_type: String,
	pub edge_strength: i64,
	pub width: f64,
	pub height: f64,
}

impl Default for EditorState {
	fn default() -> Self {
		Self::new(NetworkGraph::seeded())
	}
}

fn within(px: f64, py: f64, cx: f64, cy: f64, radius: f64) -> bool {
	let (dx, dy) = (px - cx, py - cy);
	dx * dx + dy * dy <= radius * radius
}

impl EditorState {
	pub fn new(graph: NetworkGraph) -> Self {
		Self {
			graph,
			transform: ViewTransform::default(),
			mode: Mode::Navigate,
			gesture: None,
			has_dragged: false,
			anchor: None,
			editing: None,
			node_draft: NodeDraft::default(),
			relation_draft: TypeDraft::with_color(DEFAULT_RELATION_DRAFT_COLOR),
			node_type_draft: TypeDraft::with_color(DEFAULT_NODE_TYPE_DRAFT_COLOR),
			selected_edge_type: DEFAULT_EDGE_TYPE.into(),
			edge_strength: DEFAULT_EDGE_STRENGTH,
			width: 0.0,
			height: 0.0,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn set_mode(&mut self, mode: Mode) {
		if self.mode == mode {
			return;
		}
		info!("mode {:?} -> {:?}", self.mode, mode);
		self.mode = mode;
		self.anchor = None;
		self.gesture = None;
	}

	pub fn node_handle_center(x: f64, y: f64) -> (f64, f64) {
		(x + NODE_HANDLE_OFFSET.0, y + NODE_HANDLE_OFFSET.1)
	}

	/// Hit-test a screen point. Nodes are drawn over edges and later nodes
	/// over earlier ones, so the scan runs in reverse paint order.
	pub fn hit_test(&self, sx: f64, sy: f64) -> Option<Hit> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);

		for node in self.graph.nodes.iter().rev() {
			let (hx, hy) = Self::node_handle_center(node.x, node.y);
			if within(gx, gy, hx, hy, HANDLE_RADIUS) {
				return Some(Hit::NodeHandle(node.id));
			}
			if within(gx, gy, node.x, node.y, NODE_RADIUS) {
				return Some(Hit::Node(node.id));
			}
		}

		self.graph.edges.iter().rev().find_map(|edge| {
			let (a, b) = self.graph.edge_endpoints(edge)?;
			let (mx, my) = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
			within(gx, gy, mx, my, HANDLE_RADIUS).then_some(Hit::EdgeHandle(edge.id))
		})
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if self.editing.is_some() {
			return;
		}
		self.has_dragged = false;
		self.gesture = None;

		match self.hit_test(sx, sy) {
			Some(hit @ (Hit::NodeHandle(_) | Hit::EdgeHandle(_))) => {
				self.gesture = Some(Gesture::Press {
					hit,
					start_x: sx,
					start_y: sy,
				});
			}
			Some(Hit::Node(id)) => match self.mode {
				Mode::Navigate => {
					if let Some(node) = self.graph.node(id) {
						self.gesture = Some(Gesture::NodeDrag {
							node: id,
							start_x: sx,
							start_y: sy,
							node_start_x: node.x,
							node_start_y: node.y,
						});
					}
				}
				Mode::AddEdge => self.select_for_edge(id),
				Mode::AddNode => self.place_node(sx, sy),
				Mode::AddEdgeType | Mode::AddNodeType => {}
			},
			None => match self.mode {
				Mode::Navigate => {
					self.gesture = Some(Gesture::Pan {
						start_x: sx,
						start_y: sy,
						origin_x: self.transform.x,
						origin_y: self.transform.y,
					});
				}
				Mode::AddNode => self.place_node(sx, sy),
				Mode::AddEdge | Mode::AddEdgeType | Mode::AddNodeType => {}
			},
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		let Some(gesture) = self.gesture.clone() else {
			return;
		};
		let (ox, oy) = gesture.origin();
		let (dx, dy) = (sx - ox, sy - oy);
		if (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD {
			self.has_dragged = true;
		}

		match gesture {
			Gesture::NodeDrag {
				node,
				node_start_x,
				node_start_y,
				..
			} => {
				let k = self.transform.k;
				self.graph
					.move_node(node, node_start_x + dx / k, node_start_y + dy / k);
			}
			Gesture::Pan {
				origin_x, origin_y, ..
			} => {
				self.transform.x = origin_x + dx;
				self.transform.y = origin_y + dy;
			}
			Gesture::Press { .. } => {}
		}
	}

	/// Finish the current gesture. A release that never crossed the drag
	/// threshold counts as a click on whatever was pressed.
	pub fn pointer_up(&mut self) {
		let Some(gesture) = self.gesture.take() else {
			return;
		};
		if self.has_dragged {
			return;
		}
		match gesture {
			Gesture::NodeDrag { node, .. } => self.open_editor(node),
			Gesture::Press {
				hit: Hit::NodeHandle(id),
				..
			} => {
				if self.anchor == Some(id) {
					self.anchor = None;
				}
				self.graph.delete_node(id);
			}
			Gesture::Press {
				hit: Hit::EdgeHandle(id),
				..
			} => self.graph.delete_edge(id),
			Gesture::Press { .. } | Gesture::Pan { .. } => {}
		}
	}

	pub fn is_gesture_active(&self) -> bool {
		self.gesture.is_some()
	}

	fn place_node(&mut self, sx: f64, sy: f64) {
		let (x, y) = self.transform.screen_to_graph(sx, sy);
		let NodeDraft {
			statement,
			node_type,
		} = &self.node_draft;
		if self.graph.add_node(statement, node_type, x, y).is_some() {
			self.node_draft = NodeDraft::default();
		}
	}

	/// First click picks the anchor, a click on another node commits the
	/// edge, a second click on the anchor clears it.
	pub fn select_for_edge(&mut self, id: NodeId) {
		match self.anchor {
			None => self.anchor = Some(id),
			Some(anchor) if anchor == id => self.anchor = None,
			Some(anchor) => {
				self.graph
					.add_edge(anchor, id, &self.selected_edge_type, self.edge_strength);
				self.anchor = None;
			}
		}
	}

	pub fn cancel_edge(&mut self) {
		self.anchor = None;
	}

	pub fn add_relationship_type(&mut self) {
		let TypeDraft { name, color } = &self.relation_draft;
		if normalize_type_name(name).is_none() {
			return;
		}
		self.graph.add_relationship_type(name, color);
		self.relation_draft = TypeDraft::with_color(DEFAULT_RELATION_DRAFT_COLOR);
	}

	pub fn add_node_type(&mut self) {
		let TypeDraft { name, color } = &self.node_type_draft;
		if normalize_type_name(name).is_none() {
			return;
		}
		self.graph.add_node_type(name, color);
		self.node_type_draft = TypeDraft::with_color(DEFAULT_NODE_TYPE_DRAFT_COLOR);
	}

	pub fn open_editor(&mut self, id: NodeId) {
		if let Some(node) = self.graph.node(id) {
			debug!("editing node {id}");
			self.editing = Some(EditDraft {
				id,
				statement: node.statement.clone(),
				node_type: node.node_type.clone(),
			});
		}
	}

	pub fn save_edit(&mut self) {
		if let Some(draft) = self.editing.take() {
			self.graph.apply_edit(&draft);
		}
	}

	pub fn cancel_edit(&mut self) {
		self.editing = None;
	}

	pub fn zoom_in(&mut self) {
		self.transform.zoom_by(ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.transform.zoom_by(-ZOOM_STEP);
	}

	/// Wheel zoom anchored at the cursor; `delta_y > 0` zooms out.
	pub fn wheel(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let step = if delta_y > 0.0 {
			-WHEEL_ZOOM_STEP
		} else {
			WHEEL_ZOOM_STEP
		};
		self.transform.zoom_at(sx, sy, step);
	}
}
