/// Plain-text rendering of controller snapshots for the terminal front end
use std::fmt::Write;

use crate::{
    controller::{RequestState, Snapshot},
    models::Genre,
};

pub const IDLE_MESSAGE: &str = "No recommendations yet. Pick a genre above to get started!";
pub const EMPTY_MESSAGE: &str = "No recommendations found for this selection.";

/// Genre menu shown at startup and on `genres`
pub fn genre_menu() -> String {
    let mut out = String::from("Select your mood or genre to get personalized picks:\n");
    for genre in Genre::ALL {
        let _ = writeln!(out, "  {:<10} {}", genre.slug(), genre.label());
    }
    out.push_str("Or enter a user id. Type `quit` to exit.\n");
    out
}

/// Renders a snapshot; results are listed in the order they were received
pub fn render(snapshot: &Snapshot, cover_base_url: &str) -> String {
    let mut out = String::new();

    if let Some(selection) = &snapshot.selection {
        let _ = writeln!(out, "Selected: {}", selection);
    }

    match &snapshot.state {
        RequestState::Idle => {
            let _ = writeln!(out, "{}", IDLE_MESSAGE);
        }
        RequestState::Loading => {
            let _ = writeln!(out, "Loading recommendations...");
        }
        RequestState::Failure(failure) => {
            let _ = writeln!(out, "Error: {}", failure.message);
        }
        RequestState::Success(results) if results.is_empty() => {
            let _ = writeln!(out, "{}", EMPTY_MESSAGE);
        }
        RequestState::Success(results) => {
            for (i, book) in results.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{:>2}. {} (Score: {})",
                    i + 1,
                    book.title,
                    book.display_score()
                );
                if let Some(cover) = book.cover_url(cover_base_url) {
                    let _ = writeln!(out, "    cover: {}", cover);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        controller::Failure,
        error::FailureKind,
        models::{Recommendation, ResultSet, Selection},
    };

    const COVERS: &str = "https://covers.openlibrary.org";

    #[test]
    fn test_render_idle() {
        assert_eq!(render(&Snapshot::default(), COVERS), format!("{}\n", IDLE_MESSAGE));
    }

    #[test]
    fn test_render_success_in_order() {
        let snapshot = Snapshot {
            selection: Some(Selection::Genre(Genre::Fiction)),
            state: RequestState::Success(ResultSet::new(vec![
                Recommendation {
                    title: "Dune".to_string(),
                    score: 0.87,
                    book_id: Some("0441172717".to_string()),
                },
                Recommendation {
                    title: "Emma".to_string(),
                    score: 0.5,
                    book_id: None,
                },
            ])),
        };

        let text = render(&snapshot, COVERS);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Selected: 📖 Fiction");
        assert_eq!(lines[1], " 1. Dune (Score: 0.87)");
        assert_eq!(
            lines[2],
            "    cover: https://covers.openlibrary.org/b/isbn/0441172717-M.jpg"
        );
        assert_eq!(lines[3], " 2. Emma (Score: 0.50)");
    }

    #[test]
    fn test_render_empty_success() {
        let snapshot = Snapshot {
            selection: Some(Selection::Genre(Genre::Mystery)),
            state: RequestState::Success(ResultSet::default()),
        };
        assert!(render(&snapshot, COVERS).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_render_failure() {
        let snapshot = Snapshot {
            selection: None,
            state: RequestState::Failure(Failure {
                kind: FailureKind::Transport,
                message: "Failed to load recommendations. Please try again.".to_string(),
            }),
        };
        assert_eq!(
            render(&snapshot, COVERS),
            "Error: Failed to load recommendations. Please try again.\n"
        );
    }

    #[test]
    fn test_genre_menu_lists_all_genres() {
        let menu = genre_menu();
        for genre in Genre::ALL {
            assert!(menu.contains(genre.label()));
        }
    }
}
