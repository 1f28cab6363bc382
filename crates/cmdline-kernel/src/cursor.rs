//! Virtual current directory.
//!
//! The cursor is a stack of path segments under a fixed root folder inside
//! the project directory (`<project>/Assets` by default). Every transition is
//! validated against the real filesystem before the stack changes, and no
//! transition can leave the root.

use std::path::{Path, PathBuf};

use crate::error::CursorError;

/// Default name of the root folder.
pub const DEFAULT_ROOT: &str = "Assets";

/// Stack of path segments relative to the root folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCursor {
    project_dir: PathBuf,
    root_name: String,
    segments: Vec<String>,
}

impl DirectoryCursor {
    /// Create a cursor at the root folder of `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>, root_name: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            root_name: root_name.into(),
            segments: Vec::new(),
        }
    }

    /// Current segments below the root.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_at_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Name of the root folder.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Real path of the root folder.
    pub fn root_path(&self) -> PathBuf {
        self.project_dir.join(&self.root_name)
    }

    /// Real path of the current directory.
    pub fn full_path(&self) -> PathBuf {
        join_segments(&self.root_path(), &self.segments)
    }

    /// Display form relative to the project, e.g. `Assets/Scripts/`.
    pub fn display(&self) -> String {
        let mut out = format!("{}/", self.root_name);
        for segment in &self.segments {
            out.push_str(segment);
            out.push('/');
        }
        out
    }

    /// Return to the root folder.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Move up one level.
    pub fn up(&mut self) -> Result<(), CursorError> {
        if self.segments.pop().is_none() {
            return Err(CursorError::Boundary {
                root: self.root_name.clone(),
            });
        }
        Ok(())
    }

    /// Move into `segment` below the current directory.
    pub fn down(&mut self, segment: &str) -> Result<(), CursorError> {
        if segment.trim().is_empty() {
            return Err(CursorError::EmptyArgument);
        }
        check_segment(segment)?;

        if !self.full_path().join(segment).is_dir() {
            return Err(CursorError::NotFoundIn {
                segment: segment.to_string(),
                current: self.display(),
            });
        }

        self.segments.push(segment.to_string());
        Ok(())
    }

    /// Replace the whole stack with `segments`, measured from the root.
    ///
    /// The target is validated first; on failure the cursor is unchanged.
    pub fn set_absolute<S: AsRef<str>>(&mut self, segments: &[S]) -> Result<(), CursorError> {
        let segments: Vec<String> = segments.iter().map(|s| s.as_ref().to_string()).collect();
        for segment in &segments {
            if segment.trim().is_empty() {
                return Err(CursorError::EmptyArgument);
            }
            check_segment(segment)?;
        }

        let target = join_segments(&self.root_path(), &segments);
        if !target.is_dir() {
            return Err(CursorError::NotFound {
                path: format!("{}/{}", self.root_name, segments.join("/")),
            });
        }

        self.segments = segments;
        Ok(())
    }
}

fn join_segments(root: &Path, segments: &[String]) -> PathBuf {
    segments.iter().fold(root.to_path_buf(), |path, s| path.join(s))
}

/// Reject segments that would step outside the stack's own structure.
fn check_segment(segment: &str) -> Result<(), CursorError> {
    let escapes = segment == "."
        || segment == ".."
        || segment.contains('/')
        || segment.contains('\\')
        || Path::new(segment).is_absolute();
    if escapes {
        return Err(CursorError::InvalidSegment {
            segment: segment.to_string(),
        });
    }
    Ok(())
}
