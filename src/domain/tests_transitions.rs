//! Room state machine tests: join, start, play, pass, leave.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards::Card;
use super::state::{Room, RoomStatus};
use super::transitions::{join, leave, pass_turn, play, start_game};
use crate::errors::GameError;

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

/// Room with the given members joined in order; the first is the owner.
fn room_with(ids: &[&str]) -> Room {
    let mut room = Room::create("r1", ids[0], None);
    for id in ids {
        let (next, _) = join(&room, id, id, None).unwrap();
        room = next;
    }
    room
}

/// Room mid-round with an open table and the given hand counts.
fn playing_room(hand_sizes: &[u8], turn_index: usize) -> Room {
    let ids: Vec<String> = (0..hand_sizes.len()).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut room = room_with(&refs);
    room.status = RoomStatus::Playing;
    room.first_turn = false;
    room.turn_index = turn_index;
    for (player, &size) in room.players.iter_mut().zip(hand_sizes) {
        player.hand_size = size;
    }
    room
}

mod joining {
    use super::*;

    #[test]
    fn first_joiner_is_the_owner() {
        let room = room_with(&["alice", "bob"]);
        assert_eq!(room.players.len(), 2);
        assert!(room.players[0].is_owner);
        assert!(!room.players[1].is_owner);
        assert_eq!(room.owner_id, "alice");
    }

    #[test]
    fn avatars_follow_roster_position() {
        let room = room_with(&["a", "b", "c"]);
        let avatars: Vec<&str> = room.players.iter().map(|p| p.avatar.as_str()).collect();
        assert_eq!(avatars.len(), 3);
        assert_ne!(avatars[0], avatars[1]);
    }

    #[test]
    fn blank_display_name_gets_a_default() {
        let room = Room::create("r1", "sess-1234-xyz", None);
        let (room, outcome) = join(&room, "sess-1234-xyz", "  ", None).unwrap();
        assert_eq!(outcome.display_name, "Player_sess");
        assert_eq!(room.players[0].display_name, "Player_sess");
    }

    #[test]
    fn password_is_enforced() {
        let room = Room::create("r1", "alice", Some("hunter2".into()));
        let (room, _) = join(&room, "alice", "Alice", Some("hunter2")).unwrap();

        assert_eq!(
            join(&room, "bob", "Bob", Some("wrong")).unwrap_err(),
            GameError::WrongPassword
        );
        assert_eq!(
            join(&room, "bob", "Bob", None).unwrap_err(),
            GameError::WrongPassword
        );
        assert!(join(&room, "bob", "Bob", Some("hunter2")).is_ok());
    }

    #[test]
    fn full_room_rejects_joins_only_while_playing() {
        let mut room = room_with(&["a", "b", "c", "d"]);
        // Waiting: a fifth seat is tolerated.
        assert!(join(&room, "e", "Eve", None).is_ok());

        room.status = RoomStatus::Playing;
        assert_eq!(
            join(&room, "e", "Eve", None).unwrap_err(),
            GameError::RoomFull
        );
    }

    #[test]
    fn mid_game_join_is_allowed_while_seats_remain() {
        let mut room = room_with(&["a", "b"]);
        room.status = RoomStatus::Playing;
        let (room, _) = join(&room, "c", "Carol", None).unwrap();
        assert_eq!(room.players.len(), 3);
        assert_eq!(room.players[2].hand_size, 0);
    }
}

mod starting {
    use super::*;

    #[test]
    fn only_the_owner_may_start() {
        let room = room_with(&["alice", "bob"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            start_game(&room, "bob", &mut rng).unwrap_err(),
            GameError::NotOwner
        );
    }

    #[test]
    fn starting_needs_two_players() {
        let room = room_with(&["alice"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            start_game(&room, "alice", &mut rng).unwrap_err(),
            GameError::InsufficientPlayers
        );
    }

    #[test]
    fn start_deals_and_hands_the_turn_to_the_opener() {
        let room = room_with(&["alice", "bob", "carol"]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (room, outcome) = start_game(&room, "alice", &mut rng).unwrap();

        assert_eq!(room.status, RoomStatus::Playing);
        assert!(room.first_turn);
        assert!(room.last_play.is_none());
        assert_eq!(room.pass_count, 0);

        assert_eq!(outcome.hands.len(), 3);
        for (i, (player_id, hand)) in outcome.hands.iter().enumerate() {
            assert_eq!(player_id, &room.players[i].id);
            assert_eq!(hand.len(), 17);
            assert_eq!(room.players[i].hand_size, 17);
        }

        let (_, opener_hand) = &outcome.hands[room.turn_index];
        assert!(opener_hand.contains(&Card::OPENING));
    }

    #[test]
    fn start_from_ended_state_restarts_with_the_same_roster() {
        let mut room = room_with(&["alice", "bob"]);
        room.status = RoomStatus::Ended;
        room.players[0].score = 20;
        room.players[1].score = -14;

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (room, _) = start_game(&room, "alice", &mut rng).unwrap();

        assert_eq!(room.status, RoomStatus::Playing);
        assert_eq!(room.players[0].score, 20);
        assert_eq!(room.players[1].score, -14);
        assert_eq!(room.players[0].hand_size, 26);
    }
}

mod playing {
    use super::*;

    #[test]
    fn wrong_player_or_status_is_not_your_turn() {
        let room = playing_room(&[10, 10], 0);
        assert_eq!(
            play(&room, "p1", &cards(&["9S"])).unwrap_err(),
            GameError::NotYourTurn
        );

        let mut waiting = room.clone();
        waiting.status = RoomStatus::Waiting;
        assert_eq!(
            play(&waiting, "p0", &cards(&["9S"])).unwrap_err(),
            GameError::NotYourTurn
        );
    }

    #[test]
    fn accepted_play_updates_the_table() {
        let mut room = playing_room(&[10, 10, 10], 0);
        room.players[1].has_passed = true;
        room.pass_count = 1;

        let (room, outcome) = play(&room, "p0", &cards(&["9S", "9C"])).unwrap();

        assert!(!outcome.ended);
        assert_eq!(outcome.hand_name, "pair");
        assert_eq!(room.last_play, Some(cards(&["9C", "9S"])));
        assert_eq!(room.pass_count, 0);
        assert!(!room.first_turn);
        assert!(room.players.iter().all(|p| !p.has_passed));
        assert_eq!(room.players[0].hand_size, 8);
        assert_eq!(room.turn_index, 1);
        assert!(room.log.last().unwrap().contains("pair"));
    }

    #[test]
    fn rejected_play_returns_the_reason() {
        let mut room = playing_room(&[10, 10], 0);
        room.last_play = Some(cards(&["KS"]));

        assert_eq!(
            play(&room, "p0", &cards(&["4C"])).unwrap_err(),
            GameError::DoesNotBeat
        );
        assert_eq!(
            play(&room, "p0", &cards(&["4C", "4D"])).unwrap_err(),
            GameError::SizeMismatch
        );
    }

    #[test]
    fn emptying_the_hand_ends_the_round_and_settles_scores() {
        let room = playing_room(&[1, 13, 5], 0);

        let (room, outcome) = play(&room, "p0", &cards(&["2S"])).unwrap();

        assert!(outcome.ended);
        assert_eq!(room.status, RoomStatus::Ended);
        // Winner keeps the turn index; no advance happens after the win.
        assert_eq!(room.turn_index, 0);
        assert_eq!(room.players[0].score, 20);
        assert_eq!(room.players[1].score, -78);
        assert_eq!(room.players[2].score, -5);
        assert!(room.log.last().unwrap().contains("wins"));
    }
}

mod passing {
    use super::*;

    #[test]
    fn pass_records_and_advances() {
        let room = playing_room(&[10, 10, 10, 10], 1);
        let (room, outcome) = pass_turn(&room, "p1").unwrap();

        assert!(!outcome.trick_reset);
        assert!(room.players[1].has_passed);
        assert_eq!(room.pass_count, 1);
        assert_eq!(room.turn_index, 2);
    }

    #[test]
    fn pass_out_of_turn_is_rejected() {
        let room = playing_room(&[10, 10], 0);
        assert_eq!(pass_turn(&room, "p1").unwrap_err(), GameError::NotYourTurn);
    }

    #[test]
    fn three_passes_of_four_reset_the_trick() {
        let mut room = playing_room(&[10, 10, 10, 10], 1);
        room.last_play = Some(cards(&["KS"]));

        for passer in ["p1", "p2", "p3"] {
            let (next, _) = pass_turn(&room, passer).unwrap();
            room = next;
        }

        // p0 made the last play, everyone else passed: fresh trick, p0 leads.
        assert!(room.last_play.is_none());
        assert_eq!(room.pass_count, 0);
        assert_eq!(room.turn_index, 0);
        assert!(room.players.iter().all(|p| !p.has_passed));
        assert!(room.log.last().unwrap().contains("New trick"));
    }

    #[test]
    fn heads_up_a_single_pass_resets() {
        let mut room = playing_room(&[10, 10], 1);
        room.last_play = Some(cards(&["KS"]));

        let (room, outcome) = pass_turn(&room, "p1").unwrap();
        assert!(outcome.trick_reset);
        assert!(room.last_play.is_none());
        assert_eq!(room.turn_index, 0);
    }
}

mod leaving {
    use super::*;

    #[test]
    fn non_member_leave_changes_nothing() {
        let room = room_with(&["alice", "bob"]);
        let (next, outcome) = leave(&room, "carol");
        assert!(!outcome.removed);
        assert_eq!(next, room);
    }

    #[test]
    fn owner_leave_transfers_ownership_in_roster_order() {
        let room = room_with(&["alice", "bob", "carol"]);
        let (room, outcome) = leave(&room, "alice");

        assert!(outcome.removed);
        assert!(!outcome.destroyed);
        assert_eq!(outcome.new_owner.as_deref(), Some("bob"));
        assert_eq!(room.owner_id, "bob");
        assert!(room.players[0].is_owner);
        assert!(room.log.last().unwrap().contains("new room owner"));
    }

    #[test]
    fn last_leave_destroys_the_room() {
        let room = room_with(&["alice"]);
        let (_, outcome) = leave(&room, "alice");
        assert!(outcome.destroyed);
    }

    #[test]
    fn turn_index_is_reclamped_after_a_shrink() {
        let mut room = playing_room(&[10, 10, 10], 2);
        room.turn_index = 2;
        let (room, _) = leave(&room, "p2");
        assert!(room.turn_index < room.players.len());
        assert_eq!(room.turn_index, 0);
    }
}
