use quoteday::{FavoriteQuote, LoadPhase};

use super::*;

fn loaded(quote: Quote) -> WidgetState {
    WidgetState { quote: Some(quote), phase: LoadPhase::Loaded, ..WidgetState::default() }
}

#[test]
fn loading_wins_over_everything() {
    let mut state = loaded(Quote::new("A", "B"));
    state.phase = LoadPhase::Loading;
    assert_eq!(card_view(&state), CardView::Loading);
}

#[test]
fn default_state_is_empty() {
    assert_eq!(card_view(&WidgetState::default()), CardView::Empty);
}

#[test]
fn error_without_quote_is_failed() {
    let state = WidgetState { error: Some("boom".into()), ..WidgetState::default() };
    assert_eq!(card_view(&state), CardView::Failed("boom".into()));
}

#[test]
fn warning_banner_rides_with_quote() {
    let mut state = loaded(Quote::new("A", "B"));
    state.phase = LoadPhase::LoadedWithWarning;
    state.error = Some("offline".into());
    match card_view(&state) {
        CardView::Ready { quote, warning, favorited } => {
            assert_eq!(quote, Quote::new("A", "B"));
            assert_eq!(warning.as_deref(), Some("offline"));
            assert!(!favorited);
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn favorited_flag_follows_favorites_list() {
    let mut state = loaded(Quote::new("A", "B"));
    state.favorites.push(FavoriteQuote {
        id: "1".into(),
        text: "A".into(),
        author: "B".into(),
        date_added: "2024-01-01T00:00:00Z".into(),
    });
    assert!(matches!(card_view(&state), CardView::Ready { favorited: true, .. }));
}

#[test]
fn labels_follow_flags() {
    assert_eq!(favorite_labels(true), ("Favorited", "Remove from favorites"));
    assert_eq!(favorite_labels(false), ("Favorite", "Add to favorites"));
    assert_eq!(copy_label(true), "Copied!");
    assert_eq!(copy_label(false), "Copy");
}
