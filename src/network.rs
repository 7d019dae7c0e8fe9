//! Counting the words reachable from a query through chains of friends.
//!
//! The dictionary is an implicit graph: nodes are words, edges are pairs of
//! friends. Edges are discovered on demand by scanning every unvisited word
//! against the word being expanded, so nothing is built up front. Each word is
//! marked visited the moment it is discovered, which is what keeps cycles from
//! being counted twice.

use log::{debug, trace};
use rayon::prelude::*;

use crate::friends::Relation;
use crate::visited::VisitedSet;
use crate::PARALLEL_SCAN_THRESHOLD;

/// What to do with dictionary entries spelled exactly like the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPolicy {
    /// The query is the starting point, never part of the count
    #[default]
    ExcludeQuery,
    /// Entries equal to the query are discovered and counted like any friend
    CountQueryEntries,
}

/// One word found by a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub word: String,
    /// The word being expanded when this one was found
    pub from: String,
    pub relation: Relation,
}

/// Result of exploring the component around a query word
#[derive(Debug, Clone)]
pub struct ComponentReport {
    pub query: String,
    /// Discovered words, in discovery order
    pub discoveries: Vec<Discovery>,
    /// Number of predicate evaluations performed
    pub comparisons: usize,
}

impl ComponentReport {
    pub fn count(&self) -> usize {
        self.discoveries.len()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.discoveries.iter().map(|d| d.word.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    index: usize,
    parent: Option<usize>,
    relation: Relation,
}

/// A dictionary together with the visited markers of the current run.
#[derive(Debug, Clone)]
pub struct FriendNetwork {
    words: Vec<String>,
    visited: VisitedSet,
    policy: QueryPolicy,
}

impl FriendNetwork {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            visited: VisitedSet::new(words.len()),
            words,
            policy: QueryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: QueryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: QueryPolicy) {
        self.policy = policy;
    }

    pub fn policy(&self) -> QueryPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.is_visited(index)
    }

    /// Forget every visited marker so the network can be queried afresh.
    pub fn reset(&mut self) {
        self.visited.reset();
    }

    /// Count the words reachable from `query`.
    ///
    /// Words visited by an earlier call stay visited until [`reset`](Self::reset),
    /// so a second call for the same component returns 0.
    pub fn count_friends(&mut self, query: &str) -> usize {
        traverse(&self.words, &mut self.visited, query, self.policy).0.len()
    }

    /// The words reachable from `query`, in discovery order.
    pub fn friends_of(&mut self, query: &str) -> Vec<&str> {
        let (steps, _) = traverse(&self.words, &mut self.visited, query, self.policy);
        steps
            .iter()
            .map(|step| self.words[step.index].as_str())
            .collect()
    }

    /// Like [`friends_of`](Self::friends_of), but records how each word was
    /// reached and how much work the traversal did.
    pub fn explore(&mut self, query: &str) -> ComponentReport {
        let (steps, comparisons) = traverse(&self.words, &mut self.visited, query, self.policy);
        let discoveries = steps
            .iter()
            .map(|step| Discovery {
                word: self.words[step.index].clone(),
                from: match step.parent {
                    Some(parent) => self.words[parent].clone(),
                    None => query.to_string(),
                },
                relation: step.relation,
            })
            .collect();

        ComponentReport {
            query: query.to_string(),
            discoveries,
            comparisons,
        }
    }
}

/// Count the words of `dictionary` reachable from `query`, excluding the
/// query itself.
pub fn count_component(dictionary: &[String], query: &str) -> usize {
    let mut visited = VisitedSet::new(dictionary.len());
    traverse(dictionary, &mut visited, query, QueryPolicy::ExcludeQuery)
        .0
        .len()
}

/// Unvisited friends of `origin`, in dictionary order, plus the number of
/// predicate evaluations it took to find them.
fn scan(words: &[String], visited: &VisitedSet, origin: &str) -> (Vec<(usize, Relation)>, usize) {
    let comparisons = words.len() - visited.count();
    let classify = |(index, word): (usize, &String)| {
        if visited.is_visited(index) {
            None
        } else {
            Relation::classify(origin, word).map(|relation| (index, relation))
        }
    };

    let hits: Vec<(usize, Relation)> = if words.len() >= PARALLEL_SCAN_THRESHOLD {
        words.par_iter().enumerate().filter_map(classify).collect()
    } else {
        words.iter().enumerate().filter_map(classify).collect()
    };

    (hits, comparisons)
}

/// Depth-first traversal with an explicit stack.
///
/// Words found while expanding one origin are pushed in reverse, so they are
/// expanded in the order they were found and each one's whole subtree is
/// finished before its next sibling starts.
fn traverse(
    words: &[String],
    visited: &mut VisitedSet,
    query: &str,
    policy: QueryPolicy,
) -> (Vec<Step>, usize) {
    if policy == QueryPolicy::ExcludeQuery {
        for (index, word) in words.iter().enumerate() {
            if word == query {
                visited.mark(index);
            }
        }
    }

    let mut steps: Vec<Step> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut comparisons = 0;
    let mut origin: Option<usize> = None;

    loop {
        let origin_word = match origin {
            Some(index) => words[index].as_str(),
            None => query,
        };

        let (hits, scanned) = scan(words, visited, origin_word);
        comparisons += scanned;
        debug!("Expanding '{}': {} new friends", origin_word, hits.len());

        let first = steps.len();
        for (index, relation) in hits {
            if visited.mark(index) {
                trace!("'{}' -> '{}' ({})", origin_word, words[index], relation);
                steps.push(Step {
                    index,
                    parent: origin,
                    relation,
                });
            }
        }
        stack.extend((first..steps.len()).rev().map(|s| steps[s].index));

        match stack.pop() {
            Some(next) => origin = Some(next),
            None => break,
        }
    }

    debug!(
        "Component of '{}': {} words, {} comparisons",
        query,
        steps.len(),
        comparisons
    );
    (steps, comparisons)
}
