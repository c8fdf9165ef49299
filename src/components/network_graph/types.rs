pub type NodeId = u32;
pub type EdgeId = u32;

pub const SUPPORTS: &str = "supports";
pub const WEAKENS: &str = "weakens";

/// Built-in node categories and their fill colors.
pub const BUILTIN_NODE_TYPES: &[(&str, &str)] = &[
	("axiom", "#ffffff"),
	("empirical", "#cccccc"),
	("theoretical", "#888888"),
	("normative", "#444444"),
];

pub const DEFAULT_NODE_TYPE: &str = "empirical";
pub const DEFAULT_NODE_COLOR: &str = "#cccccc";
pub const DEFAULT_EDGE_COLOR: &str = "#666666";
pub const DEFAULT_RELATION_DRAFT_COLOR: &str = "#666666";
pub const DEFAULT_NODE_TYPE_DRAFT_COLOR: &str = "#888888";

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub statement: String,
	pub node_type: String,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub from: NodeId,
	pub to: NodeId,
	pub edge_type: String,
	pub label: String,
	pub strength: Option<i64>,
}

impl Edge {
	/// Caption drawn next to the edge, e.g. `supports (3)`.
	pub fn caption(&self) -> String {
		match self.strength {
			Some(s) => format!("{} ({})", self.label, s),
			None => self.label.clone(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelationshipType {
	pub name: String,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeTypeCustom {
	pub name: String,
	pub color: String,
}

/// Only `supports` and `weakens` carry a strength.
pub fn is_strength_bearing(edge_type: &str) -> bool {
	edge_type == SUPPORTS || edge_type == WEAKENS
}

/// Parse the strength field, falling back to zero on anything unparsable.
pub fn parse_strength(raw: &str) -> i64 {
	raw.trim().parse().unwrap_or(0)
}

/// Lower-cased, trimmed type name, or `None` when blank.
pub fn normalize_type_name(raw: &str) -> Option<String> {
	let name = raw.trim();
	(!name.is_empty()).then(|| name.to_lowercase())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	#[default]
	Navigate,
	AddNode,
	AddEdge,
	AddEdgeType,
	AddNodeType,
}

impl Mode {
	pub const ALL: [Mode; 5] = [
		Mode::Navigate,
		Mode::AddNode,
		Mode::AddEdge,
		Mode::AddEdgeType,
		Mode::AddNodeType,
	];

	pub fn label(self) -> &'static str {
		match self {
			Mode::Navigate => "Navigate",
			Mode::AddNode => "Add Node",
			Mode::AddEdge => "Add Edge",
			Mode::AddEdgeType => "Add Edge Type",
			Mode::AddNodeType => "Add Node Type",
		}
	}
}

/// Net signed strength flowing into a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrengthTally {
	pub total: i64,
	pub has_strength_edges: bool,
}

impl StrengthTally {
	/// `+3`, `-2`, `+0`; `None` when no strength-bearing edge points here.
	pub fn display(&self) -> Option<String> {
		if !self.has_strength_edges {
			return None;
		}
		Some(if self.total >= 0 {
			format!("+{}", self.total)
		} else {
			self.total.to_string()
		})
	}
}

/// Editable copy of a node held by the edit modal.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
	pub id: NodeId,
	pub statement: String,
	pub node_type: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeDraft {
	pub statement: String,
	pub node_type: String,
}

impl Default for NodeDraft {
	fn default() -> Self {
		Self {
			statement: String::new(),
			node_type: DEFAULT_NODE_TYPE.into(),
		}
	}
}

/// Name + color pair being typed into one of the "add type" forms.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDraft {
	pub name: String,
	pub color: String,
}

impl TypeDraft {
	pub fn with_color(color: &str) -> Self {
		Self {
			name: String::new(),
			color: color.into(),
		}
	}
}

/// Shorten `text` to `keep` characters plus an ellipsis when it exceeds `max`.
pub fn truncate_label(text: &str, max: usize, keep: usize) -> String {
	if text.chars().count() > max {
		let head: String = text.chars().take(keep).collect();
		format!("{head}...")
	} else {
		text.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strength_falls_back_to_zero() {
		assert_eq!(parse_strength("7"), 7);
		assert_eq!(parse_strength(" -4 "), -4);
		assert_eq!(parse_strength(""), 0);
		assert_eq!(parse_strength("lots"), 0);
		assert_eq!(parse_strength("99999999999999999999999"), 0);
	}

	#[test]
	fn type_names_are_trimmed_and_lowercased() {
		assert_eq!(normalize_type_name("  Intuitive "), Some("intuitive".into()));
		assert_eq!(normalize_type_name("   "), None);
	}

	#[test]
	fn tally_display_signs() {
		let none = StrengthTally::default();
		assert_eq!(none.display(), None);
		let zero = StrengthTally {
			total: 0,
			has_strength_edges: true,
		};
		assert_eq!(zero.display().as_deref(), Some("+0"));
		let neg = StrengthTally {
			total: -3,
			has_strength_edges: true,
		};
		assert_eq!(neg.display().as_deref(), Some("-3"));
	}

	#[test]
	fn labels_truncate_on_char_boundaries() {
		assert_eq!(truncate_label("short", 20, 17), "short");
		assert_eq!(
			truncate_label("It did not rain on wednesday", 20, 17),
			"It did not rain o..."
		);
		assert_eq!(truncate_label("ééééééééééééééééééééé", 20, 17).chars().count(), 20);
	}

	#[test]
	fn edge_caption_includes_strength() {
		let edge = Edge {
			id: 1,
			from: 1,
			to: 2,
			edge_type: SUPPORTS.into(),
			label: SUPPORTS.into(),
			strength: Some(2),
		};
		assert_eq!(edge.caption(), "supports (2)");
	}
}
