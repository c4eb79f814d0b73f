use showdown_engine::cards::{parse_cards, Card, Rank, Suit};
use showdown_engine::config::{RemainderPolicy, ShowdownOptions};
use showdown_engine::errors::ShowdownError;
use showdown_engine::hand::Category;
use showdown_engine::showdown::{
    is_showdown_needed, resolve_showdown, resolve_showdown_with_options, ShowdownConfig,
    ShowdownPlayer,
};

const BOARD: &str = "Th 9h 8d 4c 2s";

fn player(id: &str, hole: &str) -> ShowdownPlayer {
    ShowdownPlayer::new(id, parse_cards(hole).expect("valid hole cards"))
}

fn config(players: Vec<ShowdownPlayer>, pot_size: u64) -> ShowdownConfig {
    ShowdownConfig {
        players,
        community_cards: parse_cards(BOARD).expect("valid board"),
        pot_size,
    }
}

#[test]
fn single_winner_takes_pot() {
    let cfg = config(vec![player("p1", "As Ac"), player("p2", "Ks Kc")], 100);
    let result = resolve_showdown(&cfg).unwrap();
    assert_eq!(result.winner_ids, vec!["p1".to_string()]);
    assert!(!result.is_split_pot);
    assert_eq!(result.pot_awarded, 100);
    assert_eq!(result.players[0].amount_won, 100);
    assert_eq!(result.players[1].amount_won, 0);
    assert_eq!(
        result.players[1].hand_rank.as_ref().map(|r| r.category),
        Some(Category::OnePair)
    );
}

#[test]
fn exact_tie_splits_even_pot() {
    let cfg = config(vec![player("p1", "Ah Ad"), player("p2", "Ac As")], 100);
    let result = resolve_showdown(&cfg).unwrap();
    assert!(result.is_split_pot);
    assert_eq!(result.winner_ids.len(), 2);
    assert_eq!(result.amount_won("p1"), Some(50));
    assert_eq!(result.amount_won("p2"), Some(50));
    assert_eq!(result.split.remainder, 0);
}

#[test]
fn remainder_goes_to_first_winner_by_default() {
    let cfg = config(
        vec![player("p1", "Ah Ad"), player("p2", "3c 3d"), player("p3", "Ac As")],
        101,
    );
    let result = resolve_showdown(&cfg).unwrap();
    assert_eq!(result.winner_ids, vec!["p1".to_string(), "p3".to_string()]);
    assert_eq!(result.amount_won("p1"), Some(51));
    assert_eq!(result.amount_won("p2"), Some(0));
    assert_eq!(result.amount_won("p3"), Some(50));
    assert_eq!(result.split.amount_per_winner, 50);
    assert_eq!(result.split.remainder, 1);
}

#[test]
fn remainder_policy_left_of_button() {
    let cfg = config(
        vec![player("p1", "Ah Ad"), player("p2", "3c 3d"), player("p3", "Ac As")],
        101,
    );
    let opts = ShowdownOptions::new(RemainderPolicy::LeftOfButton { button: 1 });
    let result = resolve_showdown_with_options(&cfg, &opts).unwrap();
    assert_eq!(result.amount_won("p1"), Some(50));
    assert_eq!(result.amount_won("p3"), Some(51));
}

#[test]
fn folded_players_get_nothing_and_no_hand() {
    // the folded player holds the nuts but is out of the hand
    let cfg = config(
        vec![
            player("p1", "Ks Kc"),
            ShowdownPlayer {
                id: "p2".into(),
                hole_cards: parse_cards("Qc Jc").unwrap(),
                folded: true,
            },
            player("p3", "5s 5c"),
        ],
        60,
    );
    let result = resolve_showdown(&cfg).unwrap();
    assert_eq!(result.winner_ids, vec!["p1".to_string()]);
    assert!(result.players[1].folded);
    assert_eq!(result.players[1].hand_rank, None);
    assert_eq!(result.players[1].amount_won, 0);
    let total: u64 = result.players.iter().map(|p| p.amount_won).sum();
    assert_eq!(total, 60);
}

#[test]
fn last_player_standing_wins_uncontested() {
    let cfg = config(
        vec![ShowdownPlayer::folded("p1"), player("p2", "3c 7d")],
        40,
    );
    let result = resolve_showdown(&cfg).unwrap();
    assert_eq!(result.winner_ids, vec!["p2".to_string()]);
    assert!(!result.is_split_pot);
    assert_eq!(result.amount_won("p2"), Some(40));
}

#[test]
fn rejects_short_board() {
    let mut cfg = config(vec![player("p1", "As Ac"), player("p2", "Ks Kc")], 100);
    cfg.community_cards.truncate(3);
    assert_eq!(
        resolve_showdown(&cfg),
        Err(ShowdownError::InvalidCommunityCardCount { count: 3 })
    );
}

#[test]
fn rejects_empty_pot() {
    let cfg = config(vec![player("p1", "As Ac"), player("p2", "Ks Kc")], 0);
    assert_eq!(
        resolve_showdown(&cfg),
        Err(ShowdownError::InvalidPotSize { pot: 0 })
    );
}

#[test]
fn rejects_all_folded() {
    let cfg = config(
        vec![ShowdownPlayer::folded("p1"), ShowdownPlayer::folded("p2")],
        100,
    );
    assert_eq!(resolve_showdown(&cfg), Err(ShowdownError::AllPlayersFolded));

    let empty = config(vec![], 100);
    assert_eq!(resolve_showdown(&empty), Err(ShowdownError::AllPlayersFolded));
}

#[test]
fn rejects_wrong_hole_card_count() {
    let cfg = config(vec![player("p1", "As Ac"), player("p2", "Ks")], 100);
    assert_eq!(
        resolve_showdown(&cfg),
        Err(ShowdownError::InvalidHoleCardCount {
            player_id: "p2".into(),
            count: 1
        })
    );
}

#[test]
fn rejects_duplicate_cards_across_players() {
    let cfg = config(vec![player("p1", "As Ac"), player("p2", "As Kc")], 100);
    assert_eq!(
        resolve_showdown(&cfg),
        Err(ShowdownError::DuplicateCard {
            card: Card::new(Rank::Ace, Suit::Spades)
        })
    );

    let on_board = config(vec![player("p1", "Th Ac"), player("p2", "Ks Kc")], 100);
    assert!(matches!(
        resolve_showdown(&on_board),
        Err(ShowdownError::DuplicateCard { .. })
    ));
}

#[test]
fn rejects_duplicate_player_ids() {
    let cfg = config(vec![player("p", "As Ac"), player("p", "Ks Kc")], 100);
    assert_eq!(
        resolve_showdown(&cfg),
        Err(ShowdownError::DuplicatePlayerId {
            player_id: "p".into()
        })
    );

    let folded_twin = config(
        vec![player("p1", "As Ac"), player("p2", "Ks Kc"), ShowdownPlayer::folded("p1")],
        100,
    );
    assert!(matches!(
        resolve_showdown(&folded_twin),
        Err(ShowdownError::DuplicatePlayerId { .. })
    ));
}

#[test]
fn first_failing_check_is_reported() {
    let mut cfg = config(vec![ShowdownPlayer::folded("p1")], 0);
    cfg.community_cards.truncate(4);
    assert_eq!(
        resolve_showdown(&cfg),
        Err(ShowdownError::InvalidCommunityCardCount { count: 4 })
    );
}

#[test]
fn resolution_is_deterministic_and_leaves_input_untouched() {
    let cfg = config(
        vec![player("p1", "Ah Kd"), player("p2", "Qc Jc"), player("p3", "9c 9d")],
        250,
    );
    let before = cfg.clone();
    let a = resolve_showdown(&cfg).unwrap();
    let b = resolve_showdown(&cfg).unwrap();
    assert_eq!(a, b);
    assert_eq!(cfg, before);
    assert_eq!(a.winner_ids, vec!["p2".to_string()]);
}

#[test]
fn showdown_needed_only_with_two_active_players() {
    let two = vec![player("p1", "As Ac"), player("p2", "Ks Kc")];
    assert!(is_showdown_needed(&two));

    let one = vec![player("p1", "As Ac"), ShowdownPlayer::folded("p2")];
    assert!(!is_showdown_needed(&one));
    assert!(!is_showdown_needed(&[]));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = config(vec![player("p1", "As Ac"), ShowdownPlayer::folded("p2")], 10);
    let s = serde_json::to_string(&cfg).unwrap();
    let back: ShowdownConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(back, cfg);
    assert_eq!(resolve_showdown(&back), resolve_showdown(&cfg));
}
