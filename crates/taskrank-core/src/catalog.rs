//! Project and board records and lookup by display title.
//!
//! Trackers let users pick projects and boards by name, so titles are
//! expected to be unique within a collection; zero matches and duplicate
//! matches are both reported as errors rather than resolved silently.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A project grouping one or more boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
}

impl Project {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A board holding task columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
}

impl Board {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Entities addressable by their display title.
pub trait Titled {
    fn title(&self) -> &str;
}

impl Titled for Project {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for Board {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Find the single entry carrying `title`.
///
/// # Errors
/// Returns [`LookupError::NotFound`] when no entry matches and
/// [`LookupError::AmbiguousTitle`] when more than one does.
pub fn find_by_title<'a, T: Titled>(items: &'a [T], title: &str) -> Result<&'a T, LookupError> {
    let mut found = None;
    let mut count = 0;
    for item in items {
        if item.title() == title {
            count += 1;
            if found.is_none() {
                found = Some(item);
            }
        }
    }

    match (found, count) {
        (Some(item), 1) => Ok(item),
        (None, _) => Err(LookupError::NotFound {
            title: title.to_string(),
        }),
        (Some(_), count) => Err(LookupError::AmbiguousTitle {
            title: title.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_each_project_by_title() {
        let projects: Vec<Project> = (0..10)
            .map(|i| Project::new(i.to_string(), format!("prj{i}")))
            .collect();

        for i in 0..10 {
            let title = format!("prj{i}");
            let project = find_by_title(&projects, &title).unwrap();
            assert_eq!(project.id, i.to_string());
            assert_eq!(project.title, title);
        }
    }

    #[test]
    fn finds_each_board_by_title() {
        let boards: Vec<Board> = (0..10)
            .map(|i| Board::new(i.to_string(), format!("board{i}")))
            .collect();

        for i in 0..10 {
            let title = format!("board{i}");
            let board = find_by_title(&boards, &title).unwrap();
            assert_eq!(board.id, i.to_string());
            assert_eq!(board.title, title);
        }
    }

    #[test]
    fn duplicate_titles_are_ambiguous() {
        let project = Project::new("1", "prj1");
        let projects = vec![project.clone(), project];

        assert_eq!(
            find_by_title(&projects, "prj1"),
            Err(LookupError::AmbiguousTitle {
                title: "prj1".to_string(),
                count: 2,
            })
        );
    }

    #[test]
    fn missing_title_is_not_found() {
        let boards = vec![Board::new("1", "board1")];

        assert_eq!(
            find_by_title(&boards, "board2"),
            Err(LookupError::NotFound {
                title: "board2".to_string(),
            })
        );
    }
}
