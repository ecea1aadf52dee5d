//! Sample data files: trees of named records and organization charts.
//!
//! Files ending in `.json` are read as JSON, anything else as YAML.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tw_core::{ElementOrder, TwError, TwResult};
use tw_graph::{GraphBuilder, ImmutableGraph};

use crate::error::CliResult;

/// A named record with ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// A menu entry with nested sub-menus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Menu {
    pub id: u32,
    #[serde(default)]
    pub sub_menus: Vec<Menu>,
}

/// A person in an organization chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub order: i64,
}

impl Member {
    pub fn new(name: impl Into<String>, order: i64) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }
}

/// A reporting line, pointing from superior to subordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgChart {
    pub members: Vec<Member>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl OrgChart {
    pub fn member(&self, name: &str) -> TwResult<&Member> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| TwError::UnknownNode {
                node: name.to_string(),
            })
    }

    /// Build the subordinate graph. With `sorted`, members enumerate by `order`.
    ///
    /// Members without reporting lines are kept as isolated nodes.
    pub fn build_graph(&self, sorted: bool) -> TwResult<ImmutableGraph<Member>> {
        let order = if sorted {
            ElementOrder::sorted_by_key(|m: &Member| m.order)
        } else {
            ElementOrder::insertion()
        };
        let mut builder = GraphBuilder::directed()
            .node_order(order)
            .expected_node_count(self.members.len());

        for report in &self.reports {
            let from = self.member(&report.from)?.clone();
            let to = self.member(&report.to)?.clone();
            builder.put_edge(from, to)?;
        }
        for member in &self.members {
            builder.add_node(member.clone());
        }
        Ok(builder.build()?)
    }
}

/// Decode `content` as JSON or YAML depending on `path`'s extension.
pub fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> CliResult<T> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_yaml::from_str(content)?)
    }
}

pub fn load_tree(path: &Path) -> CliResult<TreeNode> {
    let content = std::fs::read_to_string(path)?;
    parse_document(path, &content)
}

pub fn load_chart(path: &Path) -> CliResult<OrgChart> {
    let content = std::fs::read_to_string(path)?;
    let chart: OrgChart = parse_document(path, &content)?;
    tracing::debug!(
        members = chart.members.len(),
        reports = chart.reports.len(),
        "loaded org chart"
    );
    Ok(chart)
}
