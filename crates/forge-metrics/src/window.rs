// ABOUTME: Generic windowing primitives for partitioned ranking
// ABOUTME: row_number, dense_rank, and competition_rank over partition/order parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Generic windowing primitives.
//!
//! The three ranking disciplines every metric in this crate is built on,
//! parameterized by a partition-key extractor and an order comparator:
//!
//! - [`row_number`] — 1..n within each partition; ties broken by stable
//!   input-arrival order, so "the most recent row" is picked deterministically
//! - [`dense_rank`] — equal order-keys share a rank, the next distinct key
//!   gets rank+1 (no gaps)
//! - [`competition_rank`] — equal order-keys share a rank, the next distinct
//!   key skips ahead by the size of the tie group
//!
//! Partitions are emitted in first-appearance order of the partition key and
//! each partition is stable-sorted by the caller's comparator (descending is
//! the caller's choice). Partitions are independent, so they are ranked in
//! parallel; collection preserves partition order, keeping the output
//! deterministic for a given input sequence.

use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// A row tagged with its rank within its partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<T> {
    /// 1-based rank under the chosen discipline
    pub rank: u32,
    /// The ranked row
    pub row: T,
}

/// How ranks advance across distinct order-keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RankDiscipline {
    /// Every row gets the next integer, ties included
    RowNumber,
    /// Ties share a rank; the next distinct key gets rank+1
    Dense,
    /// Ties share a rank; the next distinct key gets its row position
    Competition,
}

/// Group rows into partitions keyed by `partition`, preserving the
/// first-appearance order of partition keys and the arrival order of rows
/// within each partition.
pub fn partition_ordered<T, K, P>(rows: Vec<T>, partition: P) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    P: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for row in rows {
        let key = partition(&row);
        if let Some(&slot) = index.get(&key) {
            groups[slot].1.push(row);
        } else {
            index.insert(key.clone(), groups.len());
            groups.push((key, vec![row]));
        }
    }
    groups
}

/// Assign 1..n within each partition ordered by `order`; ties broken by
/// stable input-arrival order.
pub fn row_number<T, K, P, O>(rows: Vec<T>, partition: P, order: O) -> Vec<Ranked<T>>
where
    T: Send,
    K: Eq + Hash + Clone + Send,
    P: Fn(&T) -> K,
    O: Fn(&T, &T) -> Ordering + Sync,
{
    rank_windows(rows, partition, order, RankDiscipline::RowNumber)
}

/// Assign consecutive ranks starting at 1 within each partition; rows with
/// equal order-keys share a rank and the next distinct key gets rank+1.
pub fn dense_rank<T, K, P, O>(rows: Vec<T>, partition: P, order: O) -> Vec<Ranked<T>>
where
    T: Send,
    K: Eq + Hash + Clone + Send,
    P: Fn(&T) -> K,
    O: Fn(&T, &T) -> Ordering + Sync,
{
    rank_windows(rows, partition, order, RankDiscipline::Dense)
}

/// Assign ranks with gaps: rows with equal order-keys share a rank, and the
/// next distinct key receives a rank advanced by the size of the tie group
/// (two rows tied for 1st are both rank 1; the next distinct key is rank 3).
pub fn competition_rank<T, K, P, O>(rows: Vec<T>, partition: P, order: O) -> Vec<Ranked<T>>
where
    T: Send,
    K: Eq + Hash + Clone + Send,
    P: Fn(&T) -> K,
    O: Fn(&T, &T) -> Ordering + Sync,
{
    rank_windows(rows, partition, order, RankDiscipline::Competition)
}

fn rank_windows<T, K, P, O>(
    rows: Vec<T>,
    partition: P,
    order: O,
    discipline: RankDiscipline,
) -> Vec<Ranked<T>>
where
    T: Send,
    K: Eq + Hash + Clone + Send,
    P: Fn(&T) -> K,
    O: Fn(&T, &T) -> Ordering + Sync,
{
    let groups = partition_ordered(rows, partition);
    groups
        .into_par_iter()
        .map(|(_, group)| rank_partition(group, &order, discipline))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn rank_partition<T, O>(mut group: Vec<T>, order: &O, discipline: RankDiscipline) -> Vec<Ranked<T>>
where
    O: Fn(&T, &T) -> Ordering,
{
    // Stable sort: rows tied under `order` keep their arrival order.
    group.sort_by(order);

    let mut out = Vec::with_capacity(group.len());
    let mut rank = 0_u32;
    for (position, row) in group.into_iter().enumerate() {
        let tied_with_previous = out
            .last()
            .is_some_and(|prev: &Ranked<T>| order(&prev.row, &row) == Ordering::Equal);
        rank = match discipline {
            RankDiscipline::RowNumber => rank + 1,
            RankDiscipline::Dense => {
                if tied_with_previous {
                    rank
                } else {
                    rank + 1
                }
            }
            RankDiscipline::Competition => {
                if tied_with_previous {
                    rank
                } else {
                    position as u32 + 1
                }
            }
        };
        out.push(Ranked { rank, row });
    }
    out
}
