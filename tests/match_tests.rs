//! Two engines kept in lockstep over a loopback peer link.

use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use mancala::board::Board;
use mancala::core::{Side, ROWS};
use mancala::net::{MoveChannel, MoveRecord, PeerLink};
use mancala::rules::{Game, GameStatus};

const ROUND_LIMIT: u16 = 400;

fn linked_pair() -> (PeerLink, PeerLink) {
    let timeout = Some(Duration::from_secs(10));
    let to_b = TcpListener::bind("127.0.0.1:0").unwrap();
    let to_a = TcpListener::bind("127.0.0.1:0").unwrap();

    let a_out = TcpStream::connect(to_b.local_addr().unwrap()).unwrap();
    let (b_in, _) = to_b.accept().unwrap();
    let b_out = TcpStream::connect(to_a.local_addr().unwrap()).unwrap();
    let (a_in, _) = to_a.accept().unwrap();

    (
        PeerLink::from_streams(a_in, a_out, timeout).unwrap(),
        PeerLink::from_streams(b_in, b_out, timeout).unwrap(),
    )
}

/// Play `me`'s moves (always the first non-empty pit) and apply the
/// opponent's moves as they arrive.
fn play_side(me: Side, mut link: impl MoveChannel) -> (Board, GameStatus, Side, u16) {
    let mut board = Board::default();
    let mut game = Game::new(&mut board);
    let mut status = GameStatus::SideA;

    while let Some(to_move) = status.to_move() {
        if game.get_rounds() >= ROUND_LIMIT {
            break;
        }

        if to_move == me {
            let pit = (0..ROWS)
                .find(|&r| game.board().get_hole(me, r) > 0)
                .expect("a side to move always has marbles");
            status = game.run_round(me, pit);
            link.send_move(MoveRecord::new(game.get_rounds(), me, pit as u8))
                .unwrap();
        } else {
            let record = link.recv_move().unwrap();
            assert_eq!(record.side, to_move);
            status = game.run_round(record.side, record.row_index());
            assert_eq!(record.round, game.get_rounds());
        }
    }

    let winner = game.get_winner();
    let rounds = game.get_rounds();
    drop(game);
    (board, status, winner, rounds)
}

#[test]
fn test_peers_stay_in_lockstep() {
    let (link_a, link_b) = linked_pair();

    let player_b = thread::spawn(move || play_side(Side::B, link_b));
    let (board_a, status_a, winner_a, rounds_a) = play_side(Side::A, link_a);
    let (board_b, status_b, winner_b, rounds_b) = player_b.join().unwrap();

    assert_eq!(board_a, board_b);
    assert_eq!(status_a, status_b);
    assert_eq!(winner_a, winner_b);
    assert_eq!(rounds_a, rounds_b);
    assert!(rounds_a > 0);
    assert_eq!(board_a.total_marbles(), 48);
}
