use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitHeader;
use crate::artifacts::objects::object::{GitObject, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use std::io::Write;

/// How a visited object is expanded after its line is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// The branch head; its root tree is walked next
    RootCommit,
    /// Each entry is walked one level deeper
    Tree,
    Blob,
    /// Tags, unknown kinds and commits below the root: printed, never followed
    Other,
}

impl Visit {
    fn classify(kind: &ObjectType, depth: usize) -> Self {
        match kind {
            ObjectType::Commit if depth == 0 => Visit::RootCommit,
            ObjectType::Tree => Visit::Tree,
            ObjectType::Blob => Visit::Blob,
            ObjectType::Commit | ObjectType::Tag | ObjectType::Unknown(_) => Visit::Other,
        }
    }
}

/// `<tabs><kind padded> <oid> <size> <name>`
fn listing_line(object: &GitObject, oid: &ObjectId, depth: usize, name: &str) -> String {
    format!(
        "{}{} {} {} {}",
        "\t".repeat(depth),
        object.kind().padded(),
        oid,
        object.declared_size(),
        name
    )
}

impl Repository {
    /// Print every object reachable from the tip of `branch`, depth first
    pub fn walk_objects(&self, branch: &str) -> anyhow::Result<()> {
        let head = self
            .refs()
            .read_branch_head(branch)
            .context(format!("Unable to resolve branch {branch}"))?;

        self.visit(&head, 0, "")
    }

    fn visit(&self, oid: &ObjectId, depth: usize, name: &str) -> anyhow::Result<()> {
        let object = self.database().parse_object(oid)?;
        writeln!(self.writer(), "{}", listing_line(&object, oid, depth, name))?;

        match Visit::classify(object.kind(), depth) {
            Visit::RootCommit => {
                let header = CommitHeader::deserialize(object.body_reader())
                    .context(format!("Unable to read commit {oid}"))?;

                // the root tree is listed at the commit's own depth
                self.visit(header.tree_oid(), depth, "")
            }
            Visit::Tree => {
                let tree = Tree::deserialize(object.body_reader())
                    .context(format!("Unable to read tree {oid}"))?;
                tracing::debug!(%oid, entries = tree.len(), "expanding tree");

                for entry in tree.into_entries() {
                    self.visit(&entry.oid, depth + 1, &entry.name)?;
                }

                Ok(())
            }
            Visit::Blob | Visit::Other => Ok(()),
        }
    }
}
