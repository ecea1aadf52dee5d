mod chart;
mod error;
mod sample;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tw_core::{TwError, TwResult};
use tw_graph::ImmutableGraph;
use tw_traverse::Traverser;

use chart::{Member, Menu, TreeNode};
use error::CliResult;

#[derive(Parser)]
#[command(name = "tw-cli")]
#[command(about = "TreeWalk CLI - walk sample trees and organization charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk a tree file breadth-first and depth-first
    Tree {
        /// Path to the tree YAML/JSON file
        path: PathBuf,
        /// Which walk to print
        #[arg(long, value_enum, default_value_t = WalkOrder::All)]
        order: WalkOrder,
    },
    /// Find the first node with a given name in depth-first pre-order
    Find {
        /// Path to the tree YAML/JSON file
        path: PathBuf,
        /// Node name to look for
        name: String,
    },
    /// Show every member of an org chart with their subordinates
    Org {
        /// Path to the org chart YAML/JSON file
        path: PathBuf,
        /// Enumerate members by their `order` field
        #[arg(long)]
        sorted: bool,
        /// Also print a breadth-first walk starting at this member
        #[arg(long)]
        walk_from: Option<String>,
    },
    /// Run the built-in sample data
    Demo,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WalkOrder {
    /// Breadth-first
    Bfs,
    /// Depth-first pre-order
    Pre,
    /// Depth-first post-order
    Post,
    /// All three
    All,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { path, order } => cmd_tree(&path, order),
        Commands::Find { path, name } => cmd_find(&path, &name),
        Commands::Org {
            path,
            sorted,
            walk_from,
        } => cmd_org(&path, sorted, walk_from.as_deref()),
        Commands::Demo => cmd_demo(),
    }
}

fn tree_traverser() -> Traverser<TreeNode, impl Fn(&TreeNode) -> Vec<TreeNode>> {
    Traverser::for_tree(|node: &TreeNode| node.children.clone())
}

fn print_walk<'a>(label: &str, names: impl Iterator<Item = &'a str>) {
    let names: Vec<&str> = names.collect();
    println!("{} = [{}]", label, names.join(", "));
}

fn print_tree_walks(root: &TreeNode, order: WalkOrder) {
    let traverser = tree_traverser();

    if matches!(order, WalkOrder::Bfs | WalkOrder::All) {
        let walk: Vec<TreeNode> = traverser.breadth_first(root.clone()).collect();
        print_walk("breadthFirst", walk.iter().map(|n| n.name.as_str()));
    }
    if matches!(order, WalkOrder::Post | WalkOrder::All) {
        let walk: Vec<TreeNode> = traverser.depth_first_post_order(root.clone()).collect();
        print_walk("depthFirstPostOrder", walk.iter().map(|n| n.name.as_str()));
    }
    if matches!(order, WalkOrder::Pre | WalkOrder::All) {
        let walk: Vec<TreeNode> = traverser.depth_first_pre_order(root.clone()).collect();
        print_walk("depthFirstPreOrder", walk.iter().map(|n| n.name.as_str()));
    }
}

fn find_by_name(root: &TreeNode, name: &str) -> Option<TreeNode> {
    tree_traverser()
        .depth_first_pre_order(root.clone())
        .find(|node| node.name == name)
}

fn print_org(graph: &ImmutableGraph<Member>) -> TwResult<()> {
    println!("Organization Structure (Subordinate Relationships):");
    for member in graph.nodes() {
        println!("{} has subordinates:", member.name);
        for subordinate in graph.successors(member)? {
            println!(" -> {}", subordinate.name);
        }
    }
    Ok(())
}

/// Direct subordinates of `member`, which must be a node of `graph`.
fn subordinates(graph: &ImmutableGraph<Member>, member: &Member) -> Vec<Member> {
    match graph.successors(member) {
        Ok(found) => found.cloned().collect(),
        Err(err) => {
            debug_assert!(false, "walk left the graph: {err}");
            Vec::new()
        }
    }
}

fn print_org_walk(graph: &ImmutableGraph<Member>, start: &Member) -> TwResult<()> {
    if !graph.contains_node(start) {
        return Err(TwError::UnknownNode {
            node: start.name.clone(),
        });
    }

    let traverser = Traverser::for_graph(|member: &Member| subordinates(graph, member));
    let walk: Vec<Member> = traverser.breadth_first(start.clone()).collect();
    print_walk(
        &format!("breadthFirst from {}", start.name),
        walk.iter().map(|m| m.name.as_str()),
    );
    Ok(())
}

fn cmd_tree(path: &Path, order: WalkOrder) -> CliResult<()> {
    let root = chart::load_tree(path)?;
    print_tree_walks(&root, order);
    Ok(())
}

fn cmd_find(path: &Path, name: &str) -> CliResult<()> {
    let root = chart::load_tree(path)?;
    match find_by_name(&root, name) {
        Some(node) => println!("✓ Found {} ({} children)", node.name, node.children.len()),
        None => println!("No node named {}", name),
    }
    Ok(())
}

fn cmd_org(path: &Path, sorted: bool, walk_from: Option<&str>) -> CliResult<()> {
    let chart = chart::load_chart(path)?;
    let graph = chart.build_graph(sorted)?;
    print_org(&graph)?;

    if let Some(name) = walk_from {
        let start = chart.member(name)?;
        println!();
        print_org_walk(&graph, start)?;
    }
    Ok(())
}

fn cmd_demo() -> CliResult<()> {
    let root = sample::tree();
    print_tree_walks(&root, WalkOrder::All);

    // Plain loop and iterator adapter reach the same kind of answer
    let mut target = None;
    for node in tree_traverser().depth_first_pre_order(root.clone()) {
        if node.name == "Leaf1" {
            target = Some(node);
            break;
        }
    }
    println!("{:?}", target);
    println!("{:?}", find_by_name(&root, "Leaf2"));

    let menus = Traverser::for_tree(|menu: &Menu| menu.sub_menus.clone());
    let small: Vec<Menu> = menus
        .breadth_first(sample::menus())
        .filter(|menu| menu.id < 5)
        .collect();
    println!("{:?}", small);

    let chart = sample::org_chart();
    let graph = chart.build_graph(false)?;
    print_org(&graph)?;

    println!();
    let sorted = chart.build_graph(true)?;
    println!("{}", sorted);
    println!();
    for member in sorted.nodes() {
        println!("{:?}", member);
    }

    println!();
    print_org_walk(&graph, chart.member("CEO")?)?;
    Ok(())
}
