use derive_new::new;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

/// An object written to a test repository, as the walker should print it
#[derive(Debug, Clone, new)]
pub struct WrittenObject {
    pub oid: String,
    pub size: usize,
}

#[derive(Debug, Clone, new)]
pub struct EntrySpec<'o> {
    pub mode: &'o str,
    pub name: String,
    pub object: &'o WrittenObject,
}

pub fn write_object(repo: &Path, kind: &str, body: &[u8]) -> WrittenObject {
    let mut content = format!("{kind} {}\0", body.len()).into_bytes();
    content.extend_from_slice(body);

    let oid = format!("{:x}", Sha1::digest(&content));
    write_raw_object(repo, &oid, &content);

    WrittenObject::new(oid, body.len())
}

/// Store `content` deflated under `oid`, whether or not it hashes to it
pub fn write_raw_object(repo: &Path, oid: &str, content: &[u8]) {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(content)
        .unwrap_or_else(|e| panic!("Failed to compress object {oid}: {e}"));
    let compressed = encoder
        .finish()
        .unwrap_or_else(|e| panic!("Failed to compress object {oid}: {e}"));

    let (dir, file) = oid.split_at(2);
    let object_dir = repo.join(".git").join("objects").join(dir);
    std::fs::create_dir_all(&object_dir)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", object_dir, e));
    std::fs::write(object_dir.join(file), compressed)
        .unwrap_or_else(|e| panic!("Failed to write object {oid}: {e}"));
}

pub fn write_blob(repo: &Path, content: &str) -> WrittenObject {
    write_object(repo, "blob", content.as_bytes())
}

pub fn write_tree(repo: &Path, entries: &[EntrySpec]) -> WrittenObject {
    let mut body = Vec::new();
    for entry in entries {
        body.extend_from_slice(format!("{} {}\0", entry.mode, entry.name).as_bytes());
        body.extend(hex_to_raw(&entry.object.oid));
    }

    write_object(repo, "tree", &body)
}

pub fn write_commit(repo: &Path, tree: &WrittenObject, message: &str) -> WrittenObject {
    let body = format!(
        "tree {}\nauthor fake_user <fake_email@email.com> 1672574400 +0000\ncommitter fake_user <fake_email@email.com> 1672574400 +0000\n\n{message}\n",
        tree.oid
    );
    write_object(repo, "commit", body.as_bytes())
}

pub fn set_branch(repo: &Path, branch: &str, commit: &WrittenObject) {
    let ref_path = repo.join(".git").join("refs").join("heads").join(branch);
    std::fs::write(&ref_path, format!("{}\n", commit.oid))
        .unwrap_or_else(|e| panic!("Failed to write ref {:?}: {}", ref_path, e));
}

fn hex_to_raw(oid: &str) -> Vec<u8> {
    (0..oid.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&oid[i..i + 2], 16).expect("Invalid hex digit"))
        .collect()
}
