//! A Binary Search Tree (BST) with parent links, stable insertion ids, and
//! restartable traversal steppers.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert,
//! find, and delete stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores some sort of value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value not less than its own value.
//!
//! Searching the tree takes `O(height)` and an inorder walk visits values in
//! sorted order. This crate makes two further choices on top of that:
//!
//! - Every node keeps a link back to its parent. That makes "next node in
//!   inorder or preorder order" a pure pointer chase from any node, with no
//!   stack, no recursion, and no traversal state beyond the current node. All
//!   the derived operations (height, removal by id, rendering, clearing) are
//!   driven by those steppers.
//! - Every node is stamped with a unique id at insertion. Ids increase
//!   monotonically over the life of a tree and are never reused, so an id can
//!   name a node independently of value equality.
//!
//! Ordering is not baked into the tree: every call that needs to compare
//! values takes a comparator argument, so one tree can be searched with any
//! comparator consistent with the one used at insertion. There is no
//! rebalancing; adversarial insertion orders degrade the tree to a list.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod linked;

#[cfg(test)]
mod test;
