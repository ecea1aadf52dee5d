//! Built-in sample data for the `demo` command.

use crate::chart::{Member, Menu, OrgChart, Report, TreeNode};

//    Root
//   /    \
// Child1 Child2
//  |      |
// Leaf1  Leaf2
pub fn tree() -> TreeNode {
    TreeNode::new(
        "Root",
        vec![
            TreeNode::new("Child1", vec![TreeNode::leaf("Leaf1")]),
            TreeNode::new("Child2", vec![TreeNode::leaf("Leaf2")]),
        ],
    )
}

pub fn menus() -> Menu {
    Menu {
        id: 1,
        sub_menus: vec![
            Menu {
                id: 11,
                sub_menus: Vec::new(),
            },
            Menu {
                id: 12,
                sub_menus: Vec::new(),
            },
        ],
    }
}

/// Subordinate relationships, pointing from superior to subordinate.
pub fn org_chart() -> OrgChart {
    let members = vec![
        Member::new("CEO", 42),
        Member::new("CTO", 300),
        Member::new("CFO", 200),
        Member::new("Dev Lead", 0),
        Member::new("Developer 1", 0),
        Member::new("Developer 2", 0),
        Member::new("Finance Lead", 0),
        Member::new("Accountant 1", 0),
        Member::new("Accountant 2", 0),
    ];
    let reports = [
        ("CEO", "CTO"),
        ("CEO", "CFO"),
        ("CTO", "Dev Lead"),
        ("Dev Lead", "Developer 1"),
        ("Dev Lead", "Developer 2"),
        ("CFO", "Finance Lead"),
        ("Finance Lead", "Accountant 1"),
        ("Finance Lead", "Accountant 2"),
    ]
    .into_iter()
    .map(|(from, to)| Report {
        from: from.into(),
        to: to.into(),
    })
    .collect();

    OrgChart { members, reports }
}
