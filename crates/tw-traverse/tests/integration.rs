//! Integration tests for tw-traverse.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;
use tw_traverse::Traverser;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Menu {
    id: u32,
    sub_menus: Vec<Menu>,
}

fn menu(id: u32, sub_menus: Vec<Menu>) -> Menu {
    Menu { id, sub_menus }
}

#[test]
fn root_with_two_leaves() {
    let traverser = Traverser::for_tree(|n: &char| match n {
        'R' => vec!['A', 'B'],
        _ => vec![],
    });

    let bfs: String = traverser.breadth_first('R').collect();
    let pre: String = traverser.depth_first_pre_order('R').collect();
    let post: String = traverser.depth_first_post_order('R').collect();

    assert_eq!(bfs, "RAB");
    assert_eq!(pre, "RAB");
    assert_eq!(post, "ABR");
}

#[test]
fn filter_menus_breadth_first() {
    let root = menu(1, vec![menu(11, vec![]), menu(12, vec![])]);
    let traverser = Traverser::for_tree(|m: &Menu| m.sub_menus.clone());

    let small: Vec<u32> = traverser
        .breadth_first(root)
        .filter(|m| m.id < 5)
        .map(|m| m.id)
        .collect();
    assert_eq!(small, vec![1]);
}

#[test]
fn find_first_match_stops_early() {
    let root = menu(
        1,
        vec![menu(11, vec![menu(111, vec![])]), menu(12, vec![menu(121, vec![])])],
    );
    let traverser = Traverser::for_tree(|m: &Menu| m.sub_menus.clone());

    let found = traverser
        .depth_first_pre_order(root.clone())
        .find(|m| m.id == 111);
    assert_eq!(found.map(|m| m.id), Some(111));

    let missing = traverser.depth_first_pre_order(root).find(|m| m.id == 7);
    assert!(missing.is_none());
}

#[test]
fn multiple_roots_walked_in_turn() {
    let traverser = Traverser::for_tree(|n: &u32| if *n < 10 { vec![n * 10] } else { vec![] });

    let bfs: Vec<u32> = traverser.breadth_first_from([1, 2]).collect();
    let pre: Vec<u32> = traverser.depth_first_pre_order_from([1, 2]).collect();
    let post: Vec<u32> = traverser.depth_first_post_order_from([1, 2]).collect();

    assert_eq!(bfs, vec![1, 2, 10, 20]);
    assert_eq!(pre, vec![1, 10, 2, 20]);
    assert_eq!(post, vec![10, 1, 20, 2]);
}

#[test]
fn graph_traverser_on_shared_subgraph() {
    // a -> [b, c], b -> [d], c -> [d], d -> [a]
    let traverser = Traverser::for_graph(|n: &char| match n {
        'a' => vec!['b', 'c'],
        'b' | 'c' => vec!['d'],
        'd' => vec!['a'],
        _ => vec![],
    });

    let bfs: String = traverser.breadth_first('a').collect();
    let pre: String = traverser.depth_first_pre_order('a').collect();
    let post: String = traverser.depth_first_post_order('a').collect();

    assert_eq!(bfs, "abcd");
    assert_eq!(pre, "abdc");
    assert_eq!(post, "dbca");
}

/// Random tree over nodes `0..=n`, each node `i > 0` attached to an earlier parent.
fn tree_from_parents(parents: &[Index]) -> Vec<Vec<usize>> {
    let mut children = vec![Vec::new(); parents.len() + 1];
    for (i, parent) in parents.iter().enumerate() {
        let node = i + 1;
        children[parent.index(node)].push(node);
    }
    children
}

fn depths(children: &[Vec<usize>]) -> Vec<usize> {
    let mut depth = vec![0; children.len()];
    for (parent, kids) in children.iter().enumerate() {
        for &kid in kids {
            // Parents always precede their children.
            depth[kid] = depth[parent] + 1;
        }
    }
    depth
}

proptest! {
    #[test]
    fn all_orders_visit_every_node_once(parents in prop::collection::vec(any::<Index>(), 0..60)) {
        let children = tree_from_parents(&parents);
        let traverser = Traverser::for_tree(|n: &usize| children[*n].clone());

        let bfs: Vec<usize> = traverser.breadth_first(0).collect();
        let pre: Vec<usize> = traverser.depth_first_pre_order(0).collect();
        let post: Vec<usize> = traverser.depth_first_post_order(0).collect();

        prop_assert_eq!(bfs.len(), children.len());
        prop_assert_eq!(pre.len(), children.len());
        prop_assert_eq!(post.len(), children.len());

        let distinct: HashSet<usize> = post.iter().copied().collect();
        prop_assert_eq!(distinct.len(), children.len());
    }

    #[test]
    fn root_first_in_pre_order_and_last_in_post_order(
        parents in prop::collection::vec(any::<Index>(), 0..60)
    ) {
        let children = tree_from_parents(&parents);
        let traverser = Traverser::for_tree(|n: &usize| children[*n].clone());

        prop_assert_eq!(traverser.breadth_first(0).next(), Some(0));
        prop_assert_eq!(traverser.depth_first_pre_order(0).next(), Some(0));
        prop_assert_eq!(traverser.depth_first_post_order(0).last(), Some(0));
    }

    #[test]
    fn post_order_reverses_mirrored_pre_order(
        parents in prop::collection::vec(any::<Index>(), 0..60)
    ) {
        let children = tree_from_parents(&parents);
        let forward = Traverser::for_tree(|n: &usize| children[*n].clone());
        let mirrored = Traverser::for_tree(|n: &usize| {
            children[*n].iter().rev().copied().collect::<Vec<_>>()
        });

        let mut pre: Vec<usize> = mirrored.depth_first_pre_order(0).collect();
        pre.reverse();
        let post: Vec<usize> = forward.depth_first_post_order(0).collect();
        prop_assert_eq!(post, pre);
    }

    #[test]
    fn breadth_first_depth_never_decreases(
        parents in prop::collection::vec(any::<Index>(), 0..60)
    ) {
        let children = tree_from_parents(&parents);
        let depth = depths(&children);
        let traverser = Traverser::for_tree(|n: &usize| children[*n].clone());

        let levels: Vec<usize> = traverser.breadth_first(0).map(|n| depth[n]).collect();
        prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn guarded_walks_agree_on_reachable_set(
        edges in prop::collection::vec((0_usize..12, 0_usize..12), 0..40)
    ) {
        let mut adjacency = vec![Vec::new(); 12];
        for &(from, to) in &edges {
            adjacency[from].push(to);
        }
        let traverser = Traverser::for_graph(|n: &usize| adjacency[*n].clone());

        let bfs: Vec<usize> = traverser.breadth_first(0).collect();
        let pre: Vec<usize> = traverser.depth_first_pre_order(0).collect();
        let post: Vec<usize> = traverser.depth_first_post_order(0).collect();

        let bfs_set: HashSet<usize> = bfs.iter().copied().collect();
        let pre_set: HashSet<usize> = pre.iter().copied().collect();
        let post_set: HashSet<usize> = post.iter().copied().collect();

        prop_assert_eq!(bfs_set.len(), bfs.len());
        prop_assert_eq!(pre_set.len(), pre.len());
        prop_assert_eq!(post_set.len(), post.len());
        prop_assert_eq!(&bfs_set, &pre_set);
        prop_assert_eq!(&bfs_set, &post_set);
        prop_assert_eq!(post.last(), Some(&0));
    }
}
