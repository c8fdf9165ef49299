use log::debug;

use super::types::{
	BUILTIN_NODE_TYPES, DEFAULT_EDGE_COLOR, DEFAULT_NODE_COLOR, Edge, EdgeId, EditDraft, Node,
	NodeId, NodeTypeCustom, RelationshipType, StrengthTally, SUPPORTS, WEAKENS,
	is_strength_bearing, normalize_type_name,
};

/// In-memory store of nodes, edges and the type registries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkGraph {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
	pub relationship_types: Vec<RelationshipType>,
	pub custom_node_types: Vec<NodeTypeCustom>,
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
	ids.max().unwrap_or(0) + 1
}

impl NetworkGraph {
	/// The starter graph shown on first load.
	pub fn seeded() -> Self {
		let node = |id, statement: &str, node_type: &str, x, y| Node {
			id,
			statement: statement.into(),
			node_type: node_type.into(),
			x,
			y,
		};
		let edge = |id, from, to, edge_type: &str, label: &str| Edge {
			id,
			from,
			to,
			edge_type: edge_type.into(),
			label: label.into(),
			strength: None,
		};
		let rel = |name: &str, color: &str| RelationshipType {
			name: name.into(),
			color: color.into(),
		};

		Self {
			nodes: vec![
				node(1, "I think therefore I am", "axiom", 200.0, 150.0),
				node(2, "It rained on wednesday", "empirical", 400.0, 100.0),
				node(3, "It did not rain on wednesday", "empirical", 400.0, 200.0),
				node(4, "The road was wet on wednesday", "empirical", 600.0, 150.0),
			],
			edges: vec![
				edge(1, 2, 3, "contradiction", "contradicts"),
				edge(2, 2, 4, "implication", "implies"),
			],
			relationship_types: vec![
				rel("contradiction", "#ff4444"),
				rel("implication", "#44ff44"),
				rel(SUPPORTS, "#4444ff"),
				rel(WEAKENS, "#ffaa00"),
			],
			custom_node_types: Vec::new(),
		}
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| n.id == id)
	}

	pub fn next_node_id(&self) -> NodeId {
		next_id(self.nodes.iter().map(|n| n.id))
	}

	pub fn next_edge_id(&self) -> EdgeId {
		next_id(self.edges.iter().map(|e| e.id))
	}

	/// Append a node at `(x, y)`. Blank statements are ignored.
	pub fn add_node(&mut self, statement: &str, node_type: &str, x: f64, y: f64) -> Option<NodeId> {
		if statement.trim().is_empty() {
			return None;
		}
		let id = self.next_node_id();
		self.nodes.push(Node {
			id,
			statement: statement.into(),
			node_type: node_type.into(),
			x,
			y,
		});
		debug!("added node {id} at ({x:.1}, {y:.1})");
		Some(id)
	}

	/// Remove a node and every edge touching it.
	pub fn delete_node(&mut self, id: NodeId) {
		self.nodes.retain(|n| n.id != id);
		let before = self.edges.len();
		self.edges.retain(|e| e.from != id && e.to != id);
		debug!(
			"deleted node {id}, swept {} edge(s)",
			before - self.edges.len()
		);
	}

	/// Connect two distinct existing nodes. The strength is kept only for
	/// strength-bearing types.
	pub fn add_edge(
		&mut self,
		from: NodeId,
		to: NodeId,
		edge_type: &str,
		strength: i64,
	) -> Option<EdgeId> {
		if from == to || self.node(from).is_none() || self.node(to).is_none() {
			return None;
		}
		let id = self.next_edge_id();
		let label = self
			.relationship_type(edge_type)
			.map(|rt| rt.name.clone())
			.unwrap_or_else(|| edge_type.to_string());
		self.edges.push(Edge {
			id,
			from,
			to,
			edge_type: edge_type.into(),
			label,
			strength: is_strength_bearing(edge_type).then_some(strength),
		});
		debug!("added {edge_type} edge {id}: {from} -> {to}");
		Some(id)
	}

	pub fn delete_edge(&mut self, id: EdgeId) {
		self.edges.retain(|e| e.id != id);
		debug!("deleted edge {id}");
	}

	/// Commit an edit draft back onto its node. Position is untouched.
	pub fn apply_edit(&mut self, draft: &EditDraft) -> bool {
		match self.node_mut(draft.id) {
			Some(node) => {
				node.statement = draft.statement.clone();
				node.node_type = draft.node_type.clone();
				true
			}
			None => false,
		}
	}

	pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) {
		if let Some(node) = self.node_mut(id) {
			node.x = x;
			node.y = y;
		}
	}

	pub fn relationship_type(&self, name: &str) -> Option<&RelationshipType> {
		self.relationship_types.iter().find(|rt| rt.name == name)
	}

	/// Register a relationship type. Blank or duplicate names are ignored.
	pub fn add_relationship_type(&mut self, name: &str, color: &str) -> bool {
		let Some(name) = normalize_type_name(name) else {
			return false;
		};
		if self.relationship_type(&name).is_some() {
			return false;
		}
		debug!("added relationship type {name}");
		self.relationship_types.push(RelationshipType {
			name,
			color: color.into(),
		});
		true
	}

	/// Register a custom node type. Blank names, and names already taken
	/// by a built-in or custom type, are ignored.
	pub fn add_node_type(&mut self, name: &str, color: &str) -> bool {
		let Some(name) = normalize_type_name(name) else {
			return false;
		};
		if self.all_node_types().contains(&name) {
			return false;
		}
		debug!("added node type {name}");
		self.custom_node_types.push(NodeTypeCustom {
			name,
			color: color.into(),
		});
		true
	}

	/// Built-in type names followed by custom ones, in insertion order.
	pub fn all_node_types(&self) -> Vec<String> {
		BUILTIN_NODE_TYPES
			.iter()
			.map(|(name, _)| name.to_string())
			.chain(self.custom_node_types.iter().map(|t| t.name.clone()))
			.collect()
	}

	pub fn node_color(&self, node_type: &str) -> &str {
		if let Some(custom) = self.custom_node_types.iter().find(|t| t.name == node_type) {
			return &custom.color;
		}
		BUILTIN_NODE_TYPES
			.iter()
			.find(|(name, _)| *name == node_type)
			.map(|(_, color)| *color)
			.unwrap_or(DEFAULT_NODE_COLOR)
	}

	pub fn edge_color(&self, edge_type: &str) -> &str {
		self.relationship_type(edge_type)
			.map(|rt| rt.color.as_str())
			.unwrap_or(DEFAULT_EDGE_COLOR)
	}

	/// Signed sum over incoming `supports` (+) and `weakens` (-) edges.
	pub fn node_strength(&self, id: NodeId) -> StrengthTally {
		self.edges
			.iter()
			.filter(|e| e.to == id && is_strength_bearing(&e.edge_type))
			.fold(StrengthTally::default(), |mut tally, edge| {
				tally.has_strength_edges = true;
				let s = edge.strength.unwrap_or(0);
				if edge.edge_type == SUPPORTS {
					tally.total = tally.total.saturating_add(s);
				} else {
					tally.total = tally.total.saturating_sub(s);
				}
				tally
			})
	}

	/// Endpoints of an edge, skipping edges whose nodes are gone.
	pub fn edge_endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
		Some((self.node(edge.from)?, self.node(edge.to)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network_graph::types::parse_strength;

	#[test]
	fn blank_statement_is_a_noop() {
		let mut graph = NetworkGraph::seeded();
		let before = graph.clone();
		assert_eq!(graph.add_node("", "axiom", 0.0, 0.0), None);
		assert_eq!(graph.add_node("   \t", "axiom", 0.0, 0.0), None);
		assert_eq!(graph, before);
	}

	#[test]
	fn ids_are_max_plus_one() {
		let mut graph = NetworkGraph::default();
		assert_eq!(graph.add_node("a", "axiom", 0.0, 0.0), Some(1));
		assert_eq!(graph.add_node("b", "axiom", 0.0, 0.0), Some(2));
		assert_eq!(graph.add_node("c", "axiom", 0.0, 0.0), Some(3));
		graph.delete_node(2);
		assert_eq!(graph.next_node_id(), 4);
		graph.delete_node(3);
		assert_eq!(graph.add_node("d", "axiom", 0.0, 0.0), Some(2));
	}

	#[test]
	fn deleting_node_sweeps_incident_edges() {
		let mut graph = NetworkGraph::seeded();
		graph.add_edge(1, 2, "implication", 1);
		graph.add_edge(3, 4, "implication", 1);
		graph.delete_node(2);

		assert!(graph.node(2).is_none());
		assert!(graph.edges.iter().all(|e| e.from != 2 && e.to != 2));
		assert_eq!(graph.edges.len(), 1);
		assert!(graph.edges.iter().all(|e| graph.edge_endpoints(e).is_some()));
	}

	#[test]
	fn edges_need_two_distinct_existing_nodes() {
		let mut graph = NetworkGraph::seeded();
		assert_eq!(graph.add_edge(1, 1, "implication", 1), None);
		assert_eq!(graph.add_edge(1, 42, "implication", 1), None);
		assert_eq!(graph.add_edge(1, 2, "implication", 1), Some(3));
	}

	#[test]
	fn strength_only_kept_for_bearing_types() {
		let mut graph = NetworkGraph::seeded();
		let plain = graph.add_edge(1, 2, "implication", 5).unwrap();
		let support = graph.add_edge(1, 3, SUPPORTS, 5).unwrap();
		let edge = |id| graph.edges.iter().find(|e| e.id == id).unwrap();
		assert_eq!(edge(plain).strength, None);
		assert_eq!(edge(support).strength, Some(5));
		assert_eq!(edge(support).label, SUPPORTS);
	}

	#[test]
	fn net_strength_is_signed_sum_of_incoming() {
		let mut graph = NetworkGraph::seeded();
		assert_eq!(graph.node_strength(4), StrengthTally::default());

		graph.add_edge(1, 4, SUPPORTS, 5);
		graph.add_edge(2, 4, WEAKENS, 2);
		graph.add_edge(3, 4, SUPPORTS, 4);
		// outgoing and non-bearing edges do not count
		graph.add_edge(4, 1, SUPPORTS, 100);
		graph.add_edge(3, 4, "implication", 100);

		let tally = graph.node_strength(4);
		assert!(tally.has_strength_edges);
		assert_eq!(tally.total, 7);
	}

	#[test]
	fn extreme_strengths_saturate_instead_of_overflowing() {
		let mut graph = NetworkGraph::seeded();
		graph.add_edge(1, 4, WEAKENS, parse_strength("-9223372036854775808"));
		assert_eq!(graph.node_strength(4).total, i64::MAX);

		graph.add_edge(2, 3, SUPPORTS, i64::MAX);
		graph.add_edge(1, 3, SUPPORTS, i64::MAX);
		let tally = graph.node_strength(3);
		assert_eq!(tally.total, i64::MAX);
		assert_eq!(tally.display(), Some(format!("+{}", i64::MAX)));
	}

	#[test]
	fn zero_strength_edge_still_counts_as_present() {
		let mut graph = NetworkGraph::seeded();
		graph.add_edge(1, 3, WEAKENS, 0);
		let tally = graph.node_strength(3);
		assert!(tally.has_strength_edges);
		assert_eq!(tally.display().as_deref(), Some("+0"));
	}

	#[test]
	fn relationship_types_are_unique_and_lowercased() {
		let mut graph = NetworkGraph::seeded();
		assert!(graph.add_relationship_type(" Refutes ", "#123456"));
		assert!(!graph.add_relationship_type("REFUTES", "#000000"));
		assert!(!graph.add_relationship_type("  ", "#000000"));
		assert_eq!(graph.edge_color("refutes"), "#123456");
		assert_eq!(graph.edge_color("unknown"), DEFAULT_EDGE_COLOR);
	}

	#[test]
	fn custom_node_types_extend_builtins() {
		let mut graph = NetworkGraph::default();
		assert!(graph.add_node_type("Intuitive", "#abcdef"));
		assert!(!graph.add_node_type("axiom", "#000000"));
		assert_eq!(
			graph.all_node_types(),
			vec!["axiom", "empirical", "theoretical", "normative", "intuitive"]
		);
		assert_eq!(graph.node_color("intuitive"), "#abcdef");
		assert_eq!(graph.node_color("normative"), "#444444");
		assert_eq!(graph.node_color("mystery"), DEFAULT_NODE_COLOR);
	}

	#[test]
	fn apply_edit_keeps_position() {
		let mut graph = NetworkGraph::seeded();
		let draft = EditDraft {
			id: 1,
			statement: "Cogito".into(),
			node_type: "theoretical".into(),
		};
		assert!(graph.apply_edit(&draft));
		let node = graph.node(1).unwrap();
		assert_eq!(node.statement, "Cogito");
		assert_eq!(node.node_type, "theoretical");
		assert_eq!((node.x, node.y), (200.0, 150.0));

		let missing = EditDraft { id: 99, ..draft };
		assert!(!graph.apply_edit(&missing));
	}
}
