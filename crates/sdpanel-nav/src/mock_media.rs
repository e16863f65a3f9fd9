//! Mock media implementation for host-side tests and simulators.
//!
//! In-memory directory tree behind the same stack-style cursor the SD media
//! layer exposes on the mainboard.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::media::{DirectoryCursor, FileEntry};

/// In-memory tree node.
#[derive(Clone)]
enum MockNode {
    File { size: u64 },
    Directory { children: Vec<String> },
}

/// Mock media with a current-directory cursor.
///
/// Stores the tree in memory for testing navigation without a card. Listing
/// order is the insertion order of each directory's children.
pub struct MockMedia {
    nodes: BTreeMap<String, MockNode>,
    cwd: Vec<String>,
    listing: Vec<FileEntry>,
}

impl MockMedia {
    /// Create an empty media with just a root directory.
    pub fn empty() -> Self {
        let mut media = Self {
            nodes: BTreeMap::new(),
            cwd: Vec::new(),
            listing: Vec::new(),
        };
        media.nodes.insert(
            "/".to_string(),
            MockNode::Directory {
                children: Vec::new(),
            },
        );
        media
    }

    /// Create a media populated like a typical print card.
    pub fn sample_card() -> Self {
        let mut media = Self::empty();
        media.add_directory("/calibration");
        media.add_directory("/calibration/towers");
        media.add_file("/benchy.gco", 1_482_112);
        media.add_file("/lid v2 final.gcode", 880_640);
        media.add_file("/calibration/cube.gco", 105_472);
        media.add_file("/calibration/towers/temp_tower_215.gco", 412_160);
        media
    }

    /// Add a directory at an absolute path. The parent must already exist.
    pub fn add_directory(&mut self, path: &str) {
        self.nodes.insert(
            path.to_string(),
            MockNode::Directory {
                children: Vec::new(),
            },
        );
        self.link_to_parent(path);
    }

    /// Add a file at an absolute path. The parent must already exist.
    pub fn add_file(&mut self, path: &str, size: u64) {
        self.nodes.insert(path.to_string(), MockNode::File { size });
        self.link_to_parent(path);
    }

    fn link_to_parent(&mut self, path: &str) {
        if path == "/" {
            return;
        }
        let parent = parent_of(path).to_string();
        let name = name_of(path).to_string();
        if let Some(MockNode::Directory { children }) = self.nodes.get_mut(parent.as_str()) {
            if !children.contains(&name) {
                children.push(name);
            }
        } else {
            log::warn!("mock media: no parent directory for '{}'", path);
        }
    }

    fn current_key(&self) -> String {
        if self.cwd.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.cwd.join("/"))
        }
    }

    fn child_key(&self, name: &str) -> String {
        let key = self.current_key();
        if key == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", key, name)
        }
    }
}

impl DirectoryCursor for MockMedia {
    fn is_at_root(&self) -> bool {
        self.cwd.is_empty()
    }

    fn ascend(&mut self) {
        self.cwd.pop();
    }

    fn descend(&mut self, name: &str) {
        let key = self.child_key(name);
        if matches!(self.nodes.get(key.as_str()), Some(MockNode::Directory { .. })) {
            self.cwd.push(name.to_string());
        } else {
            log::warn!("mock media: descend into unknown child '{}'", name);
        }
    }

    fn refresh(&mut self) {
        let key = self.current_key();
        self.listing.clear();
        let children = match self.nodes.get(key.as_str()) {
            Some(MockNode::Directory { children }) => children.clone(),
            _ => {
                log::warn!("mock media: current directory '{}' vanished", key);
                return;
            }
        };
        for name in children {
            let is_directory = matches!(
                self.nodes.get(self.child_key(&name).as_str()),
                Some(MockNode::Directory { .. })
            );
            self.listing.push(FileEntry {
                short_name: short_name(&name),
                display_name: name,
                is_directory,
            });
        }
    }

    fn entry_at(&self, ordinal: usize) -> Option<FileEntry> {
        self.listing.get(ordinal).cloned()
    }

    fn child_count(&self) -> usize {
        self.listing.len()
    }
}

/// Parent directory of an absolute path.
fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

/// Final component of an absolute path.
fn name_of(path: &str) -> &str {
    path.rfind('/').map(|i| &path[i + 1..]).unwrap_or(path)
}

/// Derive an 8.3-style short name the way the card firmware reports one.
fn short_name(name: &str) -> String {
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };
    let mut stem: String = stem
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_uppercase();
    if stem.len() > 8 {
        stem.truncate(6);
        stem.push_str("~1");
    }
    match ext {
        Some(ext) => {
            let mut ext = ext.to_uppercase();
            ext.truncate(3);
            format!("{}.{}", stem, ext)
        }
        None => stem,
    }
}
