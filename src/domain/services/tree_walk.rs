//! Non-interactive walk of the OU tree
//!
//! Produces the lines of a tree listing below a root: at each level the
//! sorted child containers (each followed by its own subtree), then the
//! sorted records. The walk uses an explicit stack, so deep trees do not
//! grow the call stack.

use crate::domain::ports::Directory;
use crate::domain::services::listing::{list_level, QueryKind};
use crate::domain::value_objects::DistinguishedName;

/// One line of a tree listing. `depth` 0 is the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLine {
    Container {
        depth: usize,
        /// RDN attribute type (`OU`, `CN`)
        kind: String,
        name: String,
    },
    Record {
        depth: usize,
        label: String,
        identifier: String,
    },
    /// A level could not be listed completely
    Failure {
        depth: usize,
        message: String,
    },
}

impl TreeLine {
    pub fn depth(&self) -> usize {
        match self {
            TreeLine::Container { depth, .. }
            | TreeLine::Record { depth, .. }
            | TreeLine::Failure { depth, .. } => *depth,
        }
    }
}

enum Work {
    Emit(TreeLine),
    Visit(DistinguishedName, usize),
}

/// Walk the tree below `root`.
///
/// `max_depth` limits how many levels below the root are expanded;
/// `None` walks everything.
pub fn walk_tree<D: Directory + ?Sized>(
    directory: &D,
    root: &DistinguishedName,
    max_depth: Option<usize>,
) -> Vec<TreeLine> {
    let mut lines = vec![TreeLine::Container {
        depth: 0,
        kind: root.leaf_attribute(),
        name: root.leaf_name(),
    }];
    let mut stack = vec![Work::Visit(root.clone(), 0)];

    while let Some(work) = stack.pop() {
        let (path, depth) = match work {
            Work::Emit(line) => {
                lines.push(line);
                continue;
            }
            Work::Visit(path, depth) => (path, depth),
        };

        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        let listing = list_level(directory, &path);
        let child_depth = depth + 1;
        let mut level = Vec::new();

        for failure in listing.failures {
            let what = match failure.kind {
                QueryKind::Containers => "OU",
                QueryKind::Records => "utilisateurs",
            };
            level.push(Work::Emit(TreeLine::Failure {
                depth: child_depth,
                message: format!("{} illisibles : {}", what, failure.error),
            }));
        }
        for container in listing.containers {
            level.push(Work::Emit(TreeLine::Container {
                depth: child_depth,
                kind: container.kind(),
                name: container.name,
            }));
            level.push(Work::Visit(container.path, child_depth));
        }
        for record in listing.records {
            level.push(Work::Emit(TreeLine::Record {
                depth: child_depth,
                label: record.label().to_string(),
                identifier: record.identifier,
            }));
        }

        stack.extend(level.into_iter().rev());
    }

    lines
}
